//! oncorisk-core
//!
//! Pure domain types for endometrial-cancer risk assessment: the patient
//! record, molecular classification, integrated staging, prediction,
//! explanation, recommendation and report shapes.
//! No model or rule logic lives here; this is the shared vocabulary of
//! the oncorisk system.

pub mod error;
pub mod models;
pub mod validation;
