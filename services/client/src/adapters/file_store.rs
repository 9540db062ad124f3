//! services/client/src/adapters/file_store.rs
//!
//! The durable `TokenStore`: a small JSON file holding the two session keys.
//!
//! Writes go through a temp file, fsync and rename, so a concurrent reader
//! sees either the previous pair or the new one, never half of each. Reads
//! never fail; anything unreadable counts as "logged out".

#[cfg(test)]
#[path = "file_store_test.rs"]
mod file_store_test;

use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::warn;
use trip_planner_core::domain::{TokenKey, TokenPair};
use trip_planner_core::ports::{PortError, PortResult, TokenStore};

/// On-disk layout: `{"accessToken": "...", "refreshToken": "..."}`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    access_token: Option<String>,
    refresh_token: Option<String>,
}

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

    fn read(&self) -> StoredSession {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return StoredSession::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Session file unreadable");
                return StoredSession::default();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "Session file malformed");
            StoredSession::default()
        })
    }

    fn write_atomically(&self, contents: &[u8]) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut tmp_path = self.path.clone().into_os_string();
        tmp_path.push(".tmp");
        let tmp_path = PathBuf::from(tmp_path);

        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(contents)?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)
    }
}

fn unavailable(path: &Path, e: impl std::fmt::Display) -> PortError {
    PortError::StorageUnavailable(format!("{}: {e}", path.display()))
}

impl TokenStore for FileTokenStore {
    fn set(&self, tokens: &TokenPair) -> PortResult<()> {
        let stored = StoredSession {
            access_token: Some(tokens.access_token.clone()),
            refresh_token: Some(tokens.refresh_token.clone()),
        };
        let json = serde_json::to_vec_pretty(&stored).map_err(|e| unavailable(&self.path, e))?;
        self.write_atomically(&json)
            .map_err(|e| unavailable(&self.path, e))
    }

    fn clear(&self) -> PortResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(unavailable(&self.path, e)),
        }
    }

    fn get(&self, key: TokenKey) -> Option<String> {
        let stored = self.read();
        match key {
            TokenKey::Access => stored.access_token,
            TokenKey::Refresh => stored.refresh_token,
        }
    }

    fn load(&self) -> Option<TokenPair> {
        let stored = self.read();
        Some(TokenPair {
            access_token: stored.access_token?,
            refresh_token: stored.refresh_token?,
        })
    }
}
