//! Output module for discovery results
//!
//! This module handles:
//! - The per-site `FinalResult` and its "Not found"/"Error" markers
//! - Batch statistics

mod result;
pub mod stats;

pub use result::{ContactField, FinalResult, ERROR_MARKER, NOT_FOUND};
pub use stats::{print_statistics, BatchStatistics};
