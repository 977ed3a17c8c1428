//! Port traits — the boundary between the diagnostics core and the host.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ DebugService (core)
//! ```
//!
//! Driven adapters (stores, session, filesystem lister, diagnostic sink)
//! implement these traits.  The
//! [`DebugService`](super::service::DebugService) consumes them via
//! generics, so the core never touches store files or login state
//! directly.

use super::records::{DiagnosticRecord, StoreSnapshot, StoreValue};

// ───────────────────────────────────────────────────────────────
// Named key/value stores
// ───────────────────────────────────────────────────────────────

/// Named key/value stores, addressed by string name.
///
/// The diagnostics core never creates or deletes a logical store through
/// this port; it reads existing ones and performs at most one targeted
/// key overwrite.  `write` MUST be atomic — an interrupted write must not
/// leave a half-written store behind.
pub trait StorePort {
    /// Read the full contents of a named store.
    ///
    /// Returns `Ok(None)` when the store does not exist; that is not an
    /// error.
    fn read_store(&self, name: &str) -> Result<Option<StoreSnapshot>, StorageError>;

    /// Overwrite a single key in a named store.
    fn write(&mut self, name: &str, key: &str, value: StoreValue) -> Result<(), StorageError>;
}

// ───────────────────────────────────────────────────────────────
// Session
// ───────────────────────────────────────────────────────────────

/// Read-side port onto the current authenticated session, if any.
pub trait SessionPort {
    /// The logged-in user's identifier, or `None` when no session exists.
    fn current_user_id(&self) -> Option<String>;
}

// ───────────────────────────────────────────────────────────────
// Filesystem listing
// ───────────────────────────────────────────────────────────────

/// Filesystem-listing facility.
///
/// Side-effecting: the adapter logs the tree itself; the core only
/// delegates to it.
pub trait FilesystemPort {
    fn list_files(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Diagnostic sink
// ───────────────────────────────────────────────────────────────

/// The core emits [`DiagnosticRecord`]s through this port.  Adapters
/// decide where they go (serial log, file, test recorder).
pub trait DiagnosticSink {
    fn emit(&mut self, record: &DiagnosticRecord);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`StorePort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Store name contains characters that could escape the data
    /// directory.
    InvalidName,
    /// Stored contents failed to parse.
    Corrupted,
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "invalid store name"),
            Self::Corrupted => write!(f, "store corrupted"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl std::error::Error for StorageError {}
