//! # Unit Types
//!
//! Lightweight f64 wrappers for the force units the resistance formulas report in.
//! JSON serialization stays clean (just numbers).
//!
//! Inputs are in mm, mm² and MPa (N/mm²), so stress × area gives newtons
//! directly. Formulas produce [`Newtons`]; results are reported in
//! [`Kilonewtons`] rounded to [`RESULT_DECIMALS`] places.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::units::{Kilonewtons, Newtons};
//!
//! let force = Newtons(60_288.0);
//! let kn: Kilonewtons = force.into();
//! assert_eq!(kn.rounded().0, 60.29);
//! ```

use serde::{Deserialize, Serialize};

/// Decimal places every reported resistance is rounded to.
pub const RESULT_DECIMALS: usize = 2;

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons (1 kN = 1000 N)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl Kilonewtons {
    /// Round to [`RESULT_DECIMALS`] places, ties to even.
    pub fn rounded(self) -> Self {
        Kilonewtons(round_to(self.0, RESULT_DECIMALS))
    }
}

impl std::fmt::Display for Kilonewtons {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} kN", self.0)
    }
}

/// Round `value` to `decimals` places using round-half-to-even.
///
/// Fixed-precision formatting rounds the exact binary value, so a stored
/// 21.074999… stays below the tie and gives 21.07.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value).parse().unwrap_or(value)
}
