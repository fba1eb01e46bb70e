//! oncorisk-rules
//!
//! Deterministic clinical rule tables: pure data and pure functions, with
//! no scoring model involved. Holds the hierarchical molecular classifier,
//! FIGO 2023 molecular-integrated staging, the treatment recommendation
//! pathways, and the curated demo scenarios.

pub mod classifier;
pub mod descriptions;
pub mod error;
pub mod recommendation;
pub mod scenarios;
pub mod staging;
