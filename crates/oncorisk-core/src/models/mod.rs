#[macro_use]
mod categorical;

pub mod explanation;
pub mod molecular;
pub mod patient;
pub mod prediction;
pub mod recommendation;
pub mod report;
pub mod staging;
