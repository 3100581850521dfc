//! # Connection Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`bolt_connection`] - Shear, bearing and tension resistance of a single bolt

pub mod bolt_connection;

pub use bolt_connection::{calculate, BoltConnectionInput, BoltResistanceResult, ResistanceLabel};
