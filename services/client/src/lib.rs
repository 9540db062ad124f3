//! # client
//!
//! Terminal client for the AI Trip service: HTTP adapters for the remote
//! auth, trip and recommendation services, a durable session file, and the
//! command flows the `trip` binary exposes.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod error;
pub mod state;
