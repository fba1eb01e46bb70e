//! oncorisk-engine
//!
//! Risk prediction, explanation and the full clinical assessment pipeline.
//! Scorer and attributor handles are injected at construction and shared
//! read-only across requests; every call is otherwise a pure function of
//! its inputs.

pub mod assess;
pub mod error;
pub mod explain;
mod features;
pub mod risk;
