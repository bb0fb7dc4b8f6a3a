//! Error types for the view engine.
//!
//! Table operations themselves never fail - bad input is clamped or
//! normalized on write. The only fallible surface is view-state snapshot
//! parsing.

use crate::FormatVersion;
use thiserror::Error;

/// All possible errors from the view engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid view state: {0}")]
    InvalidState(String),

    #[error("unsupported state format version: {found} (max supported: {supported})")]
    UnsupportedFormatVersion {
        found: FormatVersion,
        supported: FormatVersion,
    },
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
