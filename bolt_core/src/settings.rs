//! # Design Settings
//!
//! Defaults used when a caller does not supply a value: the partial factor
//! γM2 and the initial bolt, grade, plate and shear-plane selections.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::settings::DesignSettings;
//!
//! let settings: DesignSettings = serde_json::from_str(r#"{ "gamma_m2": 1.5 }"#).unwrap();
//! assert_eq!(settings.gamma_m2, 1.5);
//! assert_eq!(settings.plate_thickness_mm, 10.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::materials::{BoltGrade, BoltSize, SteelGrade};

/// Recommended γM2 for bolt resistances (EN 1993-1-8 Table 2.1)
pub const DEFAULT_GAMMA_M2: f64 = 1.25;

/// Default values for new calculations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// Partial factor γM2
    pub gamma_m2: f64,

    /// Initial bolt size
    pub bolt_size: BoltSize,

    /// Initial bolt strength class
    pub bolt_grade: BoltGrade,

    /// Initial plate steel grade
    pub steel_grade: SteelGrade,

    /// Initial plate thickness (mm)
    pub plate_thickness_mm: f64,

    /// Initial number of shear planes
    pub shear_planes: u32,

    /// Whether the shear plane is assumed to pass through the thread
    pub shear_plane_in_thread: bool,
}

impl Default for DesignSettings {
    fn default() -> Self {
        DesignSettings {
            gamma_m2: DEFAULT_GAMMA_M2,
            bolt_size: BoltSize::M16,
            bolt_grade: BoltGrade::Grade8_8,
            steel_grade: SteelGrade::S235,
            plate_thickness_mm: 10.0,
            shear_planes: 1,
            shear_plane_in_thread: true,
        }
    }
}

impl DesignSettings {
    /// Parse settings from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = DesignSettings::default();
        assert_eq!(settings.gamma_m2, 1.25);
        assert_eq!(settings.bolt_size, BoltSize::M16);
        assert_eq!(settings.bolt_grade, BoltGrade::Grade8_8);
        assert_eq!(settings.steel_grade, SteelGrade::S235);
        assert_eq!(settings.shear_planes, 1);
        assert!(settings.shear_plane_in_thread);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            DesignSettings::from_json(r#"{ "bolt_grade": "10.9", "steel_grade": "S355" }"#)
                .unwrap();
        assert_eq!(settings.bolt_grade, BoltGrade::Grade10_9);
        assert_eq!(settings.steel_grade, SteelGrade::S355);
        assert_eq!(settings.gamma_m2, DEFAULT_GAMMA_M2);
    }

    #[test]
    fn test_unknown_grade_in_json_fails() {
        let err = DesignSettings::from_json(r#"{ "bolt_grade": "4.6" }"#).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_roundtrip() {
        let settings = DesignSettings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert_eq!(DesignSettings::from_json(&json).unwrap(), settings);
    }
}
