//! Unified error types for the diagnostics tool.
//!
//! Port-level storage errors live next to the port traits in
//! [`crate::app::ports`]; this enum is the top-level funnel for the
//! binary.  Handler-internal failures never surface here — the service
//! degrades them to log lines by design.

use core::fmt;

use crate::app::ports::StorageError;

/// Every fallible setup operation in the binary funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Configuration is invalid.
    /// The `&'static str` describes which field and why.
    Config(&'static str),
    /// A store adapter could not be opened or accessed.
    Storage(StorageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
