//! Trigger surface — maps raw action identifiers to debug commands.
//!
//! **Transport-decoupled**: the dispatcher does not own a delivery
//! mechanism.  Callers feed it the identifier string plus the capability
//! adapters, and it resolves the command and invokes the handler.  The
//! CLI is one such caller; a test harness calling in-process is another.
//!
//! Identifiers outside the registered set are dropped without side
//! effect.

use log::debug;

use crate::app::commands::{
    DEBUG_ACTION_ALTER_SCALAR_TOKEN, DEBUG_ACTION_DUMP_FILESYSTEM,
    DEBUG_ACTION_DUMP_PREFERENCES, DebugCommand,
};
use crate::app::ports::{DiagnosticSink, FilesystemPort, SessionPort, StorePort};
use crate::app::service::DebugService;

/// The identifiers the handler registers interest in.
///
/// Everything else is ignored — no action, no error.
pub fn registered_actions() -> [&'static str; 3] {
    [
        DEBUG_ACTION_DUMP_FILESYSTEM,
        DEBUG_ACTION_DUMP_PREFERENCES,
        DEBUG_ACTION_ALTER_SCALAR_TOKEN,
    ]
}

/// Dispatcher in front of [`DebugService`].
pub struct CommandDispatcher {
    service: DebugService,
}

impl CommandDispatcher {
    pub fn new() -> Self {
        Self {
            service: DebugService::new(),
        }
    }

    /// Dispatch one raw action identifier.
    ///
    /// Returns `true` when the identifier was registered and handled.
    pub fn dispatch(
        &self,
        action: &str,
        stores: &mut impl StorePort,
        session: &impl SessionPort,
        fs: &mut impl FilesystemPort,
        sink: &mut impl DiagnosticSink,
    ) -> bool {
        debug!("received debug action: {action}");

        match DebugCommand::from_action(action) {
            Some(cmd) => {
                self.service.handle(cmd, stores, session, fs, sink);
                true
            }
            None => {
                debug!("ignoring unregistered action: {action}");
                false
            }
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
