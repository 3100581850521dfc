//! # Bolted Connection Equations
//!
//! Closed-form design resistances for a single bolt per EN 1993-1-8.
//! Keeping the formulas in one place makes them easy to verify against the
//! code tables.
//!
//! ## Modules
//!
//! - [`bolt`] - Shear, bearing and tension resistance of a bolt
//!
//! ## Conventions
//!
//! - Stresses in MPa, lengths in mm, areas in mm²
//! - Nominal resistances come out in N and are reported in kN
//! - Every reported resistance is divided by the partial factor γM2
//!   and rounded to 2 decimal places
//!
//! ## References
//!
//! - EN 1993-1-8:2005 Design of steel structures - Design of joints

pub mod bolt;

pub use bolt::{
    alpha_d, alpha_v, bearing_resistance, k1, shear_resistance, tension_resistance,
    BearingGeometry, BearingResistance, BoltPosition, EffectiveArea,
};

/// EN 1993-1-8 clause references for the bolt checks.
pub mod en_ref {
    /// Positioning of holes for bolts
    pub const HOLE_POSITIONING: &str = "EN 1993-1-8 Table 3.3";
    /// Design resistance for individual fasteners
    pub const RESISTANCES: &str = "EN 1993-1-8 Table 3.4";
    /// Nominal values of fyb and fub for bolts
    pub const BOLT_GRADES: &str = "EN 1993-1-8 Table 3.1";
    /// Partial safety factors for joints
    pub const PARTIAL_FACTORS: &str = "EN 1993-1-8 Table 2.1";
}
