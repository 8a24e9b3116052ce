//! Depth-first walk that feeds the selector and accumulates totals.
//!
//! The traversal itself is `walkdir` (pre-order, no symlink following);
//! this module owns the pruning policy for hidden directories and the
//! running counters. Pruning is an explicit `skip_current_dir` call on the
//! iterator rather than a sentinel error, so the control flow is visible
//! at the call site.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use walkdir::WalkDir;

use crate::select::{FileEntry, TopSelector};

/// Number of files reported when the caller does not choose one.
pub const DEFAULT_CAPACITY: usize = 20;

/// Running totals over one walk. All fields only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkStats {
    /// Entries of any kind visited, excluding the root itself
    pub entries_visited: u64,
    /// Hidden directories that were counted but not descended into
    pub directories_skipped: u64,
    /// Sum of reported sizes of everything visited, root and pruned
    /// directories included
    pub cumulative_size: u64,
}

/// Final result of one walk: the ranked largest files plus the totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalkReport {
    pub largest: Vec<FileEntry>,
    pub stats: WalkStats,
}

#[derive(Debug, Error)]
pub enum WalkError {
    /// Asking for a top-0 list is a caller mistake, caught before any I/O.
    #[error("capacity must be at least 1")]
    InvalidCapacity,
    /// The walk stopped at the first I/O error. Whatever had been ranked
    /// and counted up to that point is retained, not discarded.
    #[error("walk aborted: {source}")]
    Aborted {
        largest: Vec<FileEntry>,
        stats: WalkStats,
        #[source]
        source: walkdir::Error,
    },
}

/// Walk configuration. `skip_hidden` is on by default, matching the CLI.
#[derive(Debug, Clone, Copy)]
pub struct WalkConfig {
    /// Maximum number of files to rank (K)
    pub capacity: usize,
    /// Skip descending into directories whose name starts with `.`
    pub skip_hidden: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            skip_hidden: true,
        }
    }
}

/// Drives one depth-first pass over a directory tree, keeping the largest
/// files and the aggregate counters as it goes.
///
/// A walker owns no state between calls; every `walk` starts fresh, so
/// independent walks can run concurrently with their own walker each.
pub struct Walker {
    config: WalkConfig,
}

impl Walker {
    pub fn new(config: WalkConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and return the ranked largest files with totals.
    ///
    /// Aborts on the first I/O error, returning the partial results inside
    /// the error. The root entry contributes its own size to
    /// `cumulative_size` but is never counted in `entries_visited` and is
    /// never pruned, even when its own name starts with the hidden marker.
    pub fn walk(&self, root: &Path) -> Result<WalkReport, WalkError> {
        if self.config.capacity == 0 {
            return Err(WalkError::InvalidCapacity);
        }

        let mut selector = TopSelector::new(self.config.capacity);
        let mut stats = WalkStats::default();

        let mut it = WalkDir::new(root).follow_links(false).into_iter();
        while let Some(item) = it.next() {
            let entry = match item {
                Ok(entry) => entry,
                Err(source) => return Err(abort(selector, stats, source)),
            };
            let meta = match entry.metadata() {
                Ok(meta) => meta,
                Err(source) => return Err(abort(selector, stats, source)),
            };

            let is_root = entry.depth() == 0;
            let size = meta.len();
            let name = entry.file_name().to_string_lossy().into_owned();

            if meta.is_dir() && !is_root && self.config.skip_hidden && is_hidden(&name) {
                stats.directories_skipped += 1;
                stats.entries_visited += 1;
                stats.cumulative_size += size;
                it.skip_current_dir();
                continue;
            }

            if !meta.is_dir() {
                selector.observe(FileEntry {
                    name,
                    path: entry.into_path(),
                    size,
                });
            }
            if !is_root {
                stats.entries_visited += 1;
            }
            stats.cumulative_size += size;
        }

        Ok(WalkReport {
            largest: selector.into_ranked(),
            stats,
        })
    }
}

/// Convenience wrapper for one-shot calls.
pub fn walk(root: &Path, capacity: usize, skip_hidden: bool) -> Result<WalkReport, WalkError> {
    Walker::new(WalkConfig {
        capacity,
        skip_hidden,
    })
    .walk(root)
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn abort(selector: TopSelector, stats: WalkStats, source: walkdir::Error) -> WalkError {
    WalkError::Aborted {
        largest: selector.into_ranked(),
        stats,
        source,
    }
}
