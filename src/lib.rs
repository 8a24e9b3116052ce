//! Hefty - reports the N largest files in a directory tree

pub mod report;
pub mod select;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use report::{print_report, print_report_json, print_totals};
pub use select::{FileEntry, TopSelector};
pub use walk::{DEFAULT_CAPACITY, WalkConfig, WalkError, WalkReport, WalkStats, Walker, walk};
