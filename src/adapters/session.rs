//! Session adapter — resolves the authenticated user from stored login
//! state.
//!
//! The client persists its default session in the login store; the user
//! identifier lives under the `user_id` key.  Every failure mode (absent
//! store, absent key, non-string or empty value) collapses to `None` —
//! the debug path must stay a no-op on an unauthenticated client.

use std::path::PathBuf;

use log::debug;

use super::json_store::JsonStoreAdapter;
use crate::app::ports::{SessionPort, StorageError, StorePort};
use crate::app::records::StoreValue;
use crate::app::service::LOGIN_STORE;

/// Key in the login store holding the authenticated user's identifier.
pub const USER_ID_KEY: &str = "user_id";

/// [`SessionPort`] backed by the persisted login store.
pub struct StoredSession {
    stores: JsonStoreAdapter,
}

impl StoredSession {
    /// Open against the same data directory the store adapter uses.
    pub fn open(data_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        Ok(Self {
            stores: JsonStoreAdapter::open(data_dir)?,
        })
    }
}

impl SessionPort for StoredSession {
    fn current_user_id(&self) -> Option<String> {
        let snapshot = match self.stores.read_store(LOGIN_STORE) {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => return None,
            Err(e) => {
                debug!("session: login store unreadable ({e})");
                return None;
            }
        };

        match snapshot.get(USER_ID_KEY) {
            Some(StoreValue::Text(id)) if !id.is_empty() => Some(id.clone()),
            _ => None,
        }
    }
}
