//! Filesystem listing adapter.
//!
//! Implements [`FilesystemPort`] by walking the scan root and logging one
//! tagged line per entry.  Entries are sorted so repeated dumps line up;
//! unreadable directories are warned about and skipped; recursion stops
//! at the configured depth.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::app::ports::FilesystemPort;

/// Adapter that logs a recursive directory listing.
pub struct DirectoryLister {
    root: PathBuf,
    max_depth: usize,
}

impl DirectoryLister {
    pub fn new(root: impl Into<PathBuf>, max_depth: usize) -> Self {
        Self {
            root: root.into(),
            max_depth,
        }
    }
}

impl FilesystemPort for DirectoryLister {
    fn list_files(&mut self) {
        info!("FS | {}", self.root.display());
        list_dir(&self.root, 1, self.max_depth);
    }
}

fn list_dir(dir: &Path, depth: usize, max_depth: usize) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("FS | cannot read {}: {e}", dir.display());
            return;
        }
    };

    let mut entries: Vec<_> = entries.flatten().collect();
    entries.sort_by_key(std::fs::DirEntry::file_name);

    let indent = "  ".repeat(depth);
    for entry in entries {
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if path.is_dir() {
            info!("FS | {indent}{name}/");
            if depth < max_depth {
                list_dir(&path, depth + 1, max_depth);
            }
        } else {
            let size = entry.metadata().map_or(0, |m| m.len());
            info!("FS | {indent}{name} ({size} bytes)");
        }
    }
}
