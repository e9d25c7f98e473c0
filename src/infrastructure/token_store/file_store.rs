//! File-backed token store used by the `console` CLI.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::TokenStore;
use crate::domain::entities::SessionToken;

/// Durable single-slot token store in a plain file.
///
/// The file holds the raw token and nothing else. All operations are
/// fail-open: I/O errors are logged and reads report absence, so a broken
/// token file never crashes the caller.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<SessionToken> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => SessionToken::new(contents.trim_end_matches(['\r', '\n'])),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read token file {}: {}", self.path.display(), e);
                None
            }
        }
    }

    fn set(&mut self, token: SessionToken) {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty())
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!("Failed to create {}: {}", parent.display(), e);
            return;
        }

        match fs::write(&self.path, token.as_str()) {
            Ok(()) => debug!("Session token written to {}", self.path.display()),
            Err(e) => warn!("Failed to write token file {}: {}", self.path.display(), e),
        }
    }

    fn clear(&mut self) {
        match fs::remove_file(&self.path) {
            Ok(()) => debug!("Token file {} removed", self.path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove token file {}: {}", self.path.display(), e),
        }
    }
}
