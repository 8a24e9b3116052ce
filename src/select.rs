//! Bounded top-K selection of files by size.
//!
//! A `TopSelector` consumes one file observation at a time and keeps only
//! the K largest seen so far, sorted descending. K is a small caller-chosen
//! constant, so the O(K) insertion scan beats a heap in practice and keeps
//! tie-breaking dead simple.

use std::path::PathBuf;

use serde::Serialize;

/// One file observed during a walk. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Base name of the file
    pub name: String,
    /// Full path as visited
    pub path: PathBuf,
    /// Size in bytes reported by the filesystem
    pub size: u64,
}

/// Keeps the `capacity` largest files observed so far, sorted by size
/// descending.
///
/// Ties keep arrival order: an entry already in the list is never displaced
/// by a newcomer of equal size, so the newcomer lands after all existing
/// entries of that size.
#[derive(Debug, Clone)]
pub struct TopSelector {
    capacity: usize,
    entries: Vec<FileEntry>,
}

impl TopSelector {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity.min(64)),
        }
    }

    /// Offer one file to the selector.
    ///
    /// Scans from the top rank down for the first element strictly smaller
    /// than `entry`, inserts before it, and truncates back to capacity.
    /// If every element is at least as large, the entry is appended only
    /// while the list is below capacity, otherwise discarded.
    pub fn observe(&mut self, entry: FileEntry) {
        match self.entries.iter().position(|e| e.size < entry.size) {
            Some(i) => {
                self.entries.insert(i, entry);
                self.entries.truncate(self.capacity);
            }
            None => {
                if self.entries.len() < self.capacity {
                    self.entries.push(entry);
                }
            }
        }
    }

    /// The current ranking, largest first.
    pub fn ranked(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Consume the selector and return the final ranking.
    pub fn into_ranked(self) -> Vec<FileEntry> {
        self.entries
    }

    /// The smallest size currently admitted, present only once the list is
    /// full. While below capacity every file qualifies regardless of size.
    pub fn watermark(&self) -> Option<u64> {
        if self.entries.len() == self.capacity {
            self.entries.last().map(|e| e.size)
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
