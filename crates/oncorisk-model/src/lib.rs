//! oncorisk-model
//!
//! Contracts for the two external collaborators the risk engine consumes,
//! a probability scorer and a per-feature attribution generator, together
//! with the fixed feature schema they share. Ships a reference logistic
//! model that implements both.

pub mod collaborator;
pub mod error;
pub mod logistic;
pub mod schema;
