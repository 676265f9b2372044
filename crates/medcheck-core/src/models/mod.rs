//! Domain models for MedCheck.

mod medicine;
mod pharmacy;
mod report;

pub use medicine::*;
pub use pharmacy::*;
pub use report::*;
