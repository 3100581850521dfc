//! # Materials Catalog
//!
//! Fixed catalogs for bolted connections: bolt sizes with their areas, bolt
//! strength classes, and plate steel grades. Anything outside these catalogs
//! is rejected with [`CalcError::NotInCatalog`](crate::errors::CalcError).
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::materials::{lookup_bolt_properties, BoltGrade};
//!
//! let props = lookup_bolt_properties(16, BoltGrade::Grade8_8).unwrap();
//! assert_eq!(props.hole_diameter_mm, 18.0);
//! assert_eq!(props.stress_area_mm2, 157.0);
//! assert_eq!(props.fub_mpa, 800.0);
//! ```

pub mod bolt;
pub mod steel;

pub use bolt::{bolt_catalog, catalog_entry, BoltCatalogEntry, BoltGrade, BoltSize};
pub use steel::{steel_ultimate_strength, SteelGrade};

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::geometry::hole_diameter_mm;

/// Resolved bolt properties for one calculation.
///
/// Built once per request from a size and grade and passed by value into the
/// resistance formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoltProperties {
    /// Bolt size
    pub size: BoltSize,
    /// Strength class
    pub grade: BoltGrade,
    /// Hole diameter d0 (mm)
    pub hole_diameter_mm: f64,
    /// Gross shank area A (mm²)
    pub gross_area_mm2: f64,
    /// Tensile stress area As (mm²)
    pub stress_area_mm2: f64,
    /// Ultimate tensile strength fub (MPa)
    pub fub_mpa: f64,
}

impl BoltProperties {
    pub fn new(size: BoltSize, grade: BoltGrade) -> Self {
        let entry = size.entry();
        BoltProperties {
            size,
            grade,
            hole_diameter_mm: hole_diameter_mm(size.diameter_mm()),
            gross_area_mm2: entry.gross_area_mm2,
            stress_area_mm2: entry.stress_area_mm2,
            fub_mpa: grade.fub_mpa(),
        }
    }

    /// Nominal diameter d (mm)
    pub fn diameter_mm(&self) -> f64 {
        f64::from(self.size.diameter_mm())
    }
}

/// Resolve {d0, A, As, fub} for a nominal diameter (mm) and strength class.
pub fn lookup_bolt_properties(diameter_mm: u32, grade: BoltGrade) -> CalcResult<BoltProperties> {
    let size = BoltSize::from_mm(diameter_mm)?;
    Ok(BoltProperties::new(size, grade))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_m24_10_9() {
        let props = lookup_bolt_properties(24, BoltGrade::Grade10_9).unwrap();
        assert_eq!(props.hole_diameter_mm, 26.0);
        assert_eq!(props.gross_area_mm2, 452.0);
        assert_eq!(props.stress_area_mm2, 353.0);
        assert_eq!(props.fub_mpa, 1000.0);
        assert_eq!(props.diameter_mm(), 24.0);
    }

    #[test]
    fn test_lookup_unsupported_diameter() {
        let err = lookup_bolt_properties(22, BoltGrade::Grade8_8).unwrap_err();
        assert_eq!(err.error_code(), "NOT_IN_CATALOG");
    }

    #[test]
    fn test_properties_serialization() {
        let props = lookup_bolt_properties(12, BoltGrade::Grade5_8).unwrap();
        let json = serde_json::to_string(&props).unwrap();
        assert!(json.contains("\"grade\":\"5.8\""));
        let roundtrip: BoltProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(props, roundtrip);
    }
}
