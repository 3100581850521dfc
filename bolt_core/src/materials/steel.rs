//! Structural Steel Grades (EN 10025-2, EN 1993-1-1 Table 3.1)
//!
//! Ultimate tensile strength of the connected plate material, used by the
//! bearing resistance check. Values are for nominal thickness t ≤ 40 mm.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{Catalog, CalcError, CalcResult};

/// Plate steel grades
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    S235,
    S275,
    S355,
    S460,
}

impl SteelGrade {
    /// All steel grades for UI selection
    pub const ALL: [SteelGrade; 4] = [
        SteelGrade::S235,
        SteelGrade::S275,
        SteelGrade::S355,
        SteelGrade::S460,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SteelGrade::S235 => "S235",
            SteelGrade::S275 => "S275",
            SteelGrade::S355 => "S355",
            SteelGrade::S460 => "S460",
        }
    }

    /// Ultimate tensile strength fu (MPa)
    pub fn fu_mpa(&self) -> f64 {
        match self {
            SteelGrade::S235 => 360.0,
            SteelGrade::S275 => 430.0,
            SteelGrade::S355 => 510.0,
            SteelGrade::S460 => 540.0,
        }
    }

    /// Nominal yield strength fy (MPa)
    pub fn fy_mpa(&self) -> f64 {
        match self {
            SteelGrade::S235 => 235.0,
            SteelGrade::S275 => 275.0,
            SteelGrade::S355 => 355.0,
            SteelGrade::S460 => 460.0,
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let normalized = s.trim().to_uppercase();
        SteelGrade::ALL
            .iter()
            .copied()
            .find(|grade| grade.label() == normalized)
            .ok_or_else(|| CalcError::not_in_catalog(Catalog::SteelGrade, s))
    }
}

/// Ultimate strength fu (MPa) for a steel grade label such as "S355".
pub fn steel_ultimate_strength(label: &str) -> CalcResult<f64> {
    Ok(label.parse::<SteelGrade>()?.fu_mpa())
}
