//! Inbound debug commands.
//!
//! These represent the actions an external developer harness can trigger.
//! The mapping from a raw action identifier to a command lives here; the
//! [`CommandDispatcher`](crate::dispatch::CommandDispatcher) owns the
//! registration surface in front of it.

// ── Action identifiers ────────────────────────────────────────
//
// Byte-for-byte what the external harness sends.  The handler registers
// interest in exactly these three; everything else is ignored.

pub const DEBUG_ACTION_DUMP_FILESYSTEM: &str = "DEBUG_ACTION_DUMP_FILESYSTEM";
pub const DEBUG_ACTION_DUMP_PREFERENCES: &str = "DEBUG_ACTION_DUMP_PREFERENCES";
pub const DEBUG_ACTION_ALTER_SCALAR_TOKEN: &str = "DEBUG_ACTION_ALTER_SCALAR_TOKEN";

/// Commands the debug handler understands.
///
/// Constructed externally (from an action identifier), consumed once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugCommand {
    /// Log a recursive listing of the client's files.
    DumpFilesystem,

    /// Log every key/value pair across the known preference stores.
    DumpPreferences,

    /// Overwrite the stored scalar token with a sentinel to simulate
    /// credential corruption.
    CorruptAuthToken,
}

impl DebugCommand {
    /// Map a raw action identifier to a command.
    ///
    /// Unregistered identifiers map to `None` and must cause no side
    /// effect anywhere downstream.
    pub fn from_action(action: &str) -> Option<Self> {
        match action {
            DEBUG_ACTION_DUMP_FILESYSTEM => Some(Self::DumpFilesystem),
            DEBUG_ACTION_DUMP_PREFERENCES => Some(Self::DumpPreferences),
            DEBUG_ACTION_ALTER_SCALAR_TOKEN => Some(Self::CorruptAuthToken),
            _ => None,
        }
    }

    /// The action identifier this command is registered under.
    pub fn action(self) -> &'static str {
        match self {
            Self::DumpFilesystem => DEBUG_ACTION_DUMP_FILESYSTEM,
            Self::DumpPreferences => DEBUG_ACTION_DUMP_PREFERENCES,
            Self::CorruptAuthToken => DEBUG_ACTION_ALTER_SCALAR_TOKEN,
        }
    }
}
