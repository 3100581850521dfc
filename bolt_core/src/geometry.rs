//! # Hole and Spacing Geometry
//!
//! Clearance hole diameter d0 and the minimum / recommended end, edge and
//! pitch distances derived from it (EN 1993-1-8 Table 3.3).
//!
//! The minimums are advisory bounds for the caller's inputs. The resistance
//! formulas do not enforce them.
//!
//! ```text
//!        e2     p2
//!      ├────┼──────┤
//!   ┌──────────────────┐ ─┬─
//!   │    ○      ○      │  │ e1
//!   │                  │ ─┼─        ║
//!   │    ○      ○      │  │ p1      ║ F
//!   │                  │ ─┴─        ▼
//!   └──────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::BoltSize;

/// Minimum end/edge distance e1, e2 as a multiple of d0
pub const MIN_EDGE_FACTOR: f64 = 1.2;
/// Minimum pitch p1 (parallel to force) as a multiple of d0
pub const MIN_P1_FACTOR: f64 = 2.2;
/// Minimum spacing p2 (perpendicular to force) as a multiple of d0
pub const MIN_P2_FACTOR: f64 = 2.4;

/// Recommended e1 as a multiple of d0
pub const RECOMMENDED_E1_FACTOR: f64 = 3.0;
/// Recommended e2 as a multiple of d0
pub const RECOMMENDED_E2_FACTOR: f64 = 1.5;
/// Recommended p1 as a multiple of d0
pub const RECOMMENDED_P1_FACTOR: f64 = 3.75;
/// Recommended p2 as a multiple of d0
pub const RECOMMENDED_P2_FACTOR: f64 = 3.0;

/// Clearance hole diameter d0 (mm) for a nominal bolt diameter d (mm).
///
/// Tiered, not continuous:
/// - d < 16       → d + 1
/// - 16 ≤ d ≤ 24  → d + 2
/// - d > 24       → d + 3
pub fn hole_diameter_mm(diameter_mm: u32) -> f64 {
    let clearance = if diameter_mm > 24 {
        3
    } else if diameter_mm < 16 {
        1
    } else {
        2
    };
    f64::from(diameter_mm + clearance)
}

/// Minimum end/edge distance (e1, e2) = 1.2·d0
pub fn min_edge_distance_mm(diameter_mm: u32) -> f64 {
    MIN_EDGE_FACTOR * hole_diameter_mm(diameter_mm)
}

/// Minimum spacing parallel to force p1 = 2.2·d0
pub fn min_spacing_parallel_mm(diameter_mm: u32) -> f64 {
    MIN_P1_FACTOR * hole_diameter_mm(diameter_mm)
}

/// Minimum spacing perpendicular to force p2 = 2.4·d0
pub fn min_spacing_perpendicular_mm(diameter_mm: u32) -> f64 {
    MIN_P2_FACTOR * hole_diameter_mm(diameter_mm)
}

/// Minimum and recommended distances for one bolt size (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingLimits {
    /// Hole diameter d0
    pub hole_diameter_mm: f64,
    pub min_e1_mm: f64,
    pub min_e2_mm: f64,
    pub min_p1_mm: f64,
    pub min_p2_mm: f64,
    pub recommended_e1_mm: f64,
    pub recommended_e2_mm: f64,
    pub recommended_p1_mm: f64,
    pub recommended_p2_mm: f64,
}

impl SpacingLimits {
    pub fn for_size(size: BoltSize) -> Self {
        let d = size.diameter_mm();
        let d0 = hole_diameter_mm(d);
        SpacingLimits {
            hole_diameter_mm: d0,
            min_e1_mm: min_edge_distance_mm(d),
            min_e2_mm: min_edge_distance_mm(d),
            min_p1_mm: min_spacing_parallel_mm(d),
            min_p2_mm: min_spacing_perpendicular_mm(d),
            recommended_e1_mm: RECOMMENDED_E1_FACTOR * d0,
            recommended_e2_mm: RECOMMENDED_E2_FACTOR * d0,
            recommended_p1_mm: RECOMMENDED_P1_FACTOR * d0,
            recommended_p2_mm: RECOMMENDED_P2_FACTOR * d0,
        }
    }

    /// Whole-millimeter minimums (rounded up) offered as form lower bounds.
    pub fn input_minimums(&self) -> InputMinimums {
        InputMinimums {
            e1_mm: self.min_e1_mm.ceil(),
            e2_mm: self.min_e2_mm.ceil(),
            p1_mm: self.min_p1_mm.ceil(),
            p2_mm: self.min_p2_mm.ceil(),
        }
    }
}

/// Rounded-up minimum distances (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputMinimums {
    pub e1_mm: f64,
    pub e2_mm: f64,
    pub p1_mm: f64,
    pub p2_mm: f64,
}
