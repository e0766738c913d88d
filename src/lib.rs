//! Lobby relay library.
//!
//! This module exposes the relay components for use in tests and binaries.

pub mod config;
pub mod lobby;
pub mod protocol;
pub mod relay;
pub mod ws;
