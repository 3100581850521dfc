//! Bolt Catalog (EN 1993-1-8 Table 3.1, ISO 898-1)
//!
//! Supported metric bolt sizes with their shank and tensile stress areas,
//! and the bolt strength classes with their ultimate tensile strength.
//!
//! The catalog is built once from a single row table, so a diameter and its
//! two areas can never drift out of alignment.

use std::collections::BTreeMap;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{Catalog, CalcError, CalcResult};

/// Metric bolt sizes in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BoltSize {
    M10,
    M12,
    M16,
    M20,
    M24,
    M27,
    M30,
    M33,
    M36,
    M39,
}

impl BoltSize {
    /// All bolt sizes, ascending, for UI selection
    pub const ALL: [BoltSize; 10] = [
        BoltSize::M10,
        BoltSize::M12,
        BoltSize::M16,
        BoltSize::M20,
        BoltSize::M24,
        BoltSize::M27,
        BoltSize::M30,
        BoltSize::M33,
        BoltSize::M36,
        BoltSize::M39,
    ];

    /// Nominal diameter d (mm)
    pub fn diameter_mm(&self) -> u32 {
        match self {
            BoltSize::M10 => 10,
            BoltSize::M12 => 12,
            BoltSize::M16 => 16,
            BoltSize::M20 => 20,
            BoltSize::M24 => 24,
            BoltSize::M27 => 27,
            BoltSize::M30 => 30,
            BoltSize::M33 => 33,
            BoltSize::M36 => 36,
            BoltSize::M39 => 39,
        }
    }

    /// Resolve a nominal diameter in mm. Diameters outside the catalog fail.
    pub fn from_mm(diameter_mm: u32) -> CalcResult<Self> {
        BoltSize::ALL
            .iter()
            .copied()
            .find(|size| size.diameter_mm() == diameter_mm)
            .ok_or_else(|| {
                CalcError::not_in_catalog(Catalog::BoltDiameter, diameter_mm.to_string())
            })
    }

    /// Catalog row for this size
    pub fn entry(&self) -> &'static BoltCatalogEntry {
        // Every variant has a row; see `catalog_covers_every_size`.
        &BOLT_CATALOG[self]
    }
}

impl std::fmt::Display for BoltSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M{}", self.diameter_mm())
    }
}

impl FromStr for BoltSize {
    type Err = CalcError;

    /// Accepts "16", "M16" or "m16"
    fn from_str(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('M')
            .or_else(|| trimmed.strip_prefix('m'))
            .unwrap_or(trimmed);
        let diameter_mm: u32 = digits
            .parse()
            .map_err(|_| CalcError::not_in_catalog(Catalog::BoltDiameter, s))?;
        BoltSize::from_mm(diameter_mm)
    }
}

/// One row of the bolt catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoltCatalogEntry {
    /// Bolt size
    pub size: BoltSize,
    /// Gross shank area A (mm²)
    pub gross_area_mm2: f64,
    /// Tensile stress area As (mm²)
    pub stress_area_mm2: f64,
}

impl BoltCatalogEntry {
    const fn new(size: BoltSize, gross_area_mm2: f64, stress_area_mm2: f64) -> Self {
        BoltCatalogEntry {
            size,
            gross_area_mm2,
            stress_area_mm2,
        }
    }
}

const BOLT_TABLE: [BoltCatalogEntry; 10] = [
    BoltCatalogEntry::new(BoltSize::M10, 78.5, 58.0),
    BoltCatalogEntry::new(BoltSize::M12, 113.0, 84.3),
    BoltCatalogEntry::new(BoltSize::M16, 201.0, 157.0),
    BoltCatalogEntry::new(BoltSize::M20, 314.0, 245.0),
    BoltCatalogEntry::new(BoltSize::M24, 452.0, 353.0),
    BoltCatalogEntry::new(BoltSize::M27, 573.0, 459.0),
    BoltCatalogEntry::new(BoltSize::M30, 707.0, 561.0),
    BoltCatalogEntry::new(BoltSize::M33, 855.0, 694.0),
    BoltCatalogEntry::new(BoltSize::M36, 1020.0, 817.0),
    BoltCatalogEntry::new(BoltSize::M39, 1190.0, 976.0),
];

static BOLT_CATALOG: Lazy<BTreeMap<BoltSize, BoltCatalogEntry>> =
    Lazy::new(|| BOLT_TABLE.iter().map(|entry| (entry.size, *entry)).collect());

/// The full bolt catalog, keyed and ordered by size
pub fn bolt_catalog() -> &'static BTreeMap<BoltSize, BoltCatalogEntry> {
    &BOLT_CATALOG
}

/// Look up the catalog row for a nominal diameter in mm
pub fn catalog_entry(diameter_mm: u32) -> CalcResult<&'static BoltCatalogEntry> {
    Ok(BoltSize::from_mm(diameter_mm)?.entry())
}

/// Bolt strength classes (property class "X.Y")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoltGrade {
    #[serde(rename = "5.6")]
    Grade5_6,
    #[serde(rename = "5.8")]
    Grade5_8,
    #[serde(rename = "8.8")]
    Grade8_8,
    #[serde(rename = "10.9")]
    Grade10_9,
}

impl BoltGrade {
    /// All bolt grades for UI selection
    pub const ALL: [BoltGrade; 4] = [
        BoltGrade::Grade5_6,
        BoltGrade::Grade5_8,
        BoltGrade::Grade8_8,
        BoltGrade::Grade10_9,
    ];

    /// Class label, e.g. "8.8"
    pub fn label(&self) -> &'static str {
        match self {
            BoltGrade::Grade5_6 => "5.6",
            BoltGrade::Grade5_8 => "5.8",
            BoltGrade::Grade8_8 => "8.8",
            BoltGrade::Grade10_9 => "10.9",
        }
    }

    /// Ultimate tensile strength fub (MPa): the number before the point × 100
    pub fn fub_mpa(&self) -> f64 {
        match self {
            BoltGrade::Grade5_6 | BoltGrade::Grade5_8 => 500.0,
            BoltGrade::Grade8_8 => 800.0,
            BoltGrade::Grade10_9 => 1000.0,
        }
    }

    /// Nominal yield strength fyb (MPa): fub × (number after the point) / 10
    pub fn fyb_mpa(&self) -> f64 {
        match self {
            BoltGrade::Grade5_6 => 300.0,
            BoltGrade::Grade5_8 => 400.0,
            BoltGrade::Grade8_8 => 640.0,
            BoltGrade::Grade10_9 => 900.0,
        }
    }
}

impl std::fmt::Display for BoltGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BoltGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim();
        BoltGrade::ALL
            .iter()
            .copied()
            .find(|grade| grade.label() == trimmed)
            .ok_or_else(|| CalcError::not_in_catalog(Catalog::BoltGrade, s))
    }
}
