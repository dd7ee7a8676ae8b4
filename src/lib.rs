//! Numsort - sort a delimited file of integers
//!
//! This crate provides the parsing, sorting and file handling behind the
//! `numsort` binary, so the pipeline can be driven by prompts, flags or tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod file_io;
pub mod job;
pub mod numbers;
pub mod prompt;

// Re-export primary types for convenience
pub use config::UserConfig;
pub use error::{NumsortError, Result};
pub use file_io::FileIo;
pub use job::{RunSummary, SortJob};
pub use numbers::{parse_numbers, NumberList, ParsePolicy, SortOrder};
