//! oncorisk-cli library root.
//!
//! Exposes the argument model, configuration and command layer so
//! integration tests can drive them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
