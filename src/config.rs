//! Tool configuration.
//!
//! Where the client's named store files live and what the filesystem dump
//! walks.  Values come from defaults and can be overridden per-flag on
//! the CLI.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Hard ceiling on the filesystem-dump recursion depth.
const MAX_LIST_DEPTH_LIMIT: usize = 32;

/// Diagnostics tool configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagConfig {
    /// Directory holding one `<store>.json` file per named store.
    pub data_dir: PathBuf,
    /// Root of the filesystem listing.
    pub scan_root: PathBuf,
    /// Maximum recursion depth for the filesystem listing.
    pub max_list_depth: usize,
}

impl Default for DiagConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chatdiag");
        Self {
            scan_root: data_dir.clone(),
            data_dir,
            max_list_depth: 8,
        }
    }
}

impl DiagConfig {
    /// Range-check the configuration before use.
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(Error::Config("data_dir must not be empty"));
        }
        if self.scan_root.as_os_str().is_empty() {
            return Err(Error::Config("scan_root must not be empty"));
        }
        if !(1..=MAX_LIST_DEPTH_LIMIT).contains(&self.max_list_depth) {
            return Err(Error::Config("max_list_depth must be 1-32"));
        }
        Ok(())
    }
}
