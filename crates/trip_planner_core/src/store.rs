//! crates/trip_planner_core/src/store.rs
//!
//! Process-local `TokenStore`: the session lives as long as the process.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::domain::{TokenKey, TokenPair};
use crate::ports::{PortError, PortResult, TokenStore};
use std::sync::Mutex;

/// Holds the pair behind one lock, so a reader sees either the old pair,
/// the new pair, or nothing.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<TokenPair>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that starts out holding `tokens`, as if restored from a
    /// previous run.
    pub fn with_tokens(tokens: TokenPair) -> Self {
        Self {
            tokens: Mutex::new(Some(tokens)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn set(&self, tokens: &TokenPair) -> PortResult<()> {
        let mut slot = self
            .tokens
            .lock()
            .map_err(|e| PortError::StorageUnavailable(e.to_string()))?;
        *slot = Some(tokens.clone());
        Ok(())
    }

    fn clear(&self) -> PortResult<()> {
        let mut slot = self
            .tokens
            .lock()
            .map_err(|e| PortError::StorageUnavailable(e.to_string()))?;
        *slot = None;
        Ok(())
    }

    fn get(&self, key: TokenKey) -> Option<String> {
        let slot = self.tokens.lock().ok()?;
        slot.as_ref().map(|pair| pair.get(key).to_string())
    }

    fn load(&self) -> Option<TokenPair> {
        self.tokens.lock().ok()?.clone()
    }
}
