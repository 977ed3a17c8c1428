//! Debug service — the diagnostics core.
//!
//! [`DebugService`] is a stateless three-way dispatch: each invocation is
//! independent and no state is retained between calls.  All I/O flows
//! through port traits injected at the call site, making the whole
//! handler testable with mock adapters.
//!
//! ```text
//!  StorePort ────▶ ┌──────────────────────┐ ──▶ DiagnosticSink
//!  SessionPort ──▶ │     DebugService      │
//!                  │  dump · dump · corrupt │ ──▶ FilesystemPort
//!                  └──────────────────────┘
//! ```

use log::{debug, info, warn};

use super::commands::DebugCommand;
use super::ports::{DiagnosticSink, FilesystemPort, SessionPort, StorePort};
use super::records::{DiagnosticRecord, StoreValue};

// ── Store names ───────────────────────────────────────────────

/// The client's default preference store; also the token-write target.
pub const DEFAULT_STORE: &str = "DefaultPreferences";
/// Store holding the persisted login state.
pub const LOGIN_STORE: &str = "LoginStorage";
/// Store holding push-registration state.
pub const REGISTRATION_STORE: &str = "RegistrationManager";

/// The stores `DumpPreferences` enumerates, in emission order.
pub const DUMPED_STORES: [&str; 3] = [DEFAULT_STORE, LOGIN_STORE, REGISTRATION_STORE];

// ── Token corruption ──────────────────────────────────────────

/// Prefix of the per-user scalar token key in the default store.
pub const SCALAR_TOKEN_KEY_PREFIX: &str = "SCALAR_TOKEN_PREFERENCE_KEY";
/// Sentinel written over the scalar token to invalidate it.
pub const CORRUPT_TOKEN_VALUE: &str = "bad_token";

/// The debug command handler.
pub struct DebugService;

impl DebugService {
    pub fn new() -> Self {
        Self
    }

    /// Execute one debug command.
    ///
    /// Failures degrade to no-ops: a debug trigger must never crash the
    /// host.  A missing named store is treated as empty; a missing user
    /// id aborts the token-corruption path without a write.
    pub fn handle(
        &self,
        cmd: DebugCommand,
        stores: &mut impl StorePort,
        session: &impl SessionPort,
        fs: &mut impl FilesystemPort,
        sink: &mut impl DiagnosticSink,
    ) {
        match cmd {
            DebugCommand::DumpFilesystem => fs.list_files(),
            DebugCommand::DumpPreferences => self.dump_preferences(stores, sink),
            DebugCommand::CorruptAuthToken => self.corrupt_auth_token(stores, session),
        }
    }

    /// Emit one record per key across the known stores, in store order.
    fn dump_preferences(&self, stores: &impl StorePort, sink: &mut impl DiagnosticSink) {
        for name in DUMPED_STORES {
            match stores.read_store(name) {
                Ok(Some(snapshot)) => {
                    for (key, value) in &snapshot {
                        sink.emit(&DiagnosticRecord::new(name, key, value.clone()));
                    }
                }
                Ok(None) => debug!("dump: store {name} absent, skipping"),
                Err(e) => warn!("dump: store {name} unreadable ({e}), skipping"),
            }
        }
    }

    /// Overwrite the current user's scalar token with the sentinel.
    fn corrupt_auth_token(&self, stores: &mut impl StorePort, session: &impl SessionPort) {
        let Some(user_id) = session.current_user_id() else {
            // No authenticated user — the target key cannot be formed.
            debug!("alter token: no authenticated user, nothing to do");
            return;
        };

        let key = format!("{SCALAR_TOKEN_KEY_PREFIX}{user_id}");
        match stores.write(DEFAULT_STORE, &key, StoreValue::from(CORRUPT_TOKEN_VALUE)) {
            Ok(()) => info!("alter token: wrote sentinel for user {user_id}"),
            Err(e) => warn!("alter token: write failed ({e})"),
        }
    }
}

impl Default for DebugService {
    fn default() -> Self {
        Self::new()
    }
}
