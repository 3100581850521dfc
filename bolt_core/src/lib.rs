//! # bolt_core - Bolted Connection Resistance Engine
//!
//! `bolt_core` computes the design resistances of a single bolt in a steel
//! connection per EN 1993-1-8: shear Fv,Rd, bearing Fb,Rd (four edge/inner
//! combinations) and tension Ft,Rd. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions, recomputed from scratch on every call
//! - **Fixed catalogs**: Bolt sizes, bolt grades and steel grades are enums;
//!   anything else fails fast with [`CalcError::NotInCatalog`]
//! - **Presentation-free**: Results carry stable labels; rendering is the caller's job
//!
//! ## Quick Start
//!
//! ```rust
//! use bolt_core::calculations::{calculate, BoltConnectionInput};
//! use bolt_core::settings::DesignSettings;
//!
//! // Defaults: M16 8.8 in S235, every distance at its minimum
//! let input = BoltConnectionInput::from_settings("B-1", &DesignSettings::default());
//! let result = calculate(&input).unwrap();
//!
//! for (label, kn) in result.rows() {
//!     println!("{}: {:.2} kN", label.code(), kn);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - Bolt and steel catalogs, resolved bolt properties
//! - [`geometry`] - Hole diameter and minimum/recommended spacing
//! - [`equations`] - Shear, bearing and tension resistance formulas
//! - [`calculations`] - Input validation and result assembly
//! - [`settings`] - Default design values
//! - [`units`] - Unit wrappers and result rounding
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, BoltConnectionInput, BoltResistanceResult, ResistanceLabel};
pub use errors::{CalcError, CalcResult};
pub use geometry::{
    hole_diameter_mm, min_edge_distance_mm, min_spacing_parallel_mm, min_spacing_perpendicular_mm,
};
pub use materials::{
    lookup_bolt_properties, steel_ultimate_strength, BoltGrade, BoltProperties, BoltSize,
    SteelGrade,
};
pub use settings::DesignSettings;
