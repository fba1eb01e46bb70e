//! oncorisk-export
//!
//! Clinical report rendering from Tera templates.

pub mod error;
pub mod render;
