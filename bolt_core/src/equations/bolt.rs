//! # Single Bolt Resistances (EN 1993-1-8 Table 3.4)
//!
//! ## Notation
//!
//! - `d`   = Nominal bolt diameter
//! - `d0`  = Hole diameter
//! - `A`   = Gross shank area, `As` = tensile stress area
//! - `fub` = Bolt ultimate strength, `fu` = plate ultimate strength
//! - `e1`, `p1` = End distance / pitch parallel to the force
//! - `e2`, `p2` = Edge distance / spacing perpendicular to the force
//! - `t`   = Plate thickness
//! - `n`   = Number of shear planes
//! - `γM2` = Partial factor
//!
//! ## Formulas
//!
//! ```text
//! Fv,Rd = n · αv · fub · A / γM2
//! Fb,Rd = k1 · αd · fu · d · t / γM2
//! Ft,Rd = k2 · fub · As / γM2          (k2 = 0.9)
//! ```
//!
//! The functions here do not validate geometry. Callers enforce positivity
//! and the minimum distances from [`crate::geometry`].

use serde::{Deserialize, Serialize};

use crate::materials::{BoltGrade, BoltProperties, SteelGrade};
use crate::units::{Kilonewtons, Newtons};

/// αv where the shear plane passes through the shank, or through the thread
/// of a class 5.6 / 8.8 bolt
pub const ALPHA_V_HIGH: f64 = 0.6;
/// αv where the shear plane passes through the thread of a class 5.8 / 10.9 bolt
pub const ALPHA_V_LOW: f64 = 0.5;
/// Upper cap on αd
pub const ALPHA_D_MAX: f64 = 1.0;
/// Upper cap on k1
pub const K1_MAX: f64 = 2.5;
/// Tension reduction factor k2 for ordinary bolts
pub const K2: f64 = 0.9;

// =============================================================================
// SHEAR
// =============================================================================

/// Cross-section resisting shear at the shear plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectiveArea {
    /// Shear plane through the unthreaded shank: gross area A
    Gross,
    /// Shear plane through the threaded portion: stress area As
    Stress,
}

impl EffectiveArea {
    pub const ALL: [EffectiveArea; 2] = [EffectiveArea::Gross, EffectiveArea::Stress];

    /// Selector for a "shear plane passes through the thread" flag
    pub fn from_shear_in_thread(in_thread: bool) -> Self {
        if in_thread {
            EffectiveArea::Stress
        } else {
            EffectiveArea::Gross
        }
    }

    /// Area (mm²) this selector picks from the bolt properties
    pub fn area_mm2(&self, props: &BoltProperties) -> f64 {
        match self {
            EffectiveArea::Gross => props.gross_area_mm2,
            EffectiveArea::Stress => props.stress_area_mm2,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EffectiveArea::Gross => "Shank (A)",
            EffectiveArea::Stress => "Thread (As)",
        }
    }
}

/// Shear reduction factor αv keyed by (effective area, bolt grade).
pub fn alpha_v(area: EffectiveArea, grade: BoltGrade) -> f64 {
    match (area, grade) {
        (EffectiveArea::Gross, _) => ALPHA_V_HIGH,
        (EffectiveArea::Stress, BoltGrade::Grade5_6 | BoltGrade::Grade8_8) => ALPHA_V_HIGH,
        (EffectiveArea::Stress, BoltGrade::Grade5_8 | BoltGrade::Grade10_9) => ALPHA_V_LOW,
    }
}

/// Design shear resistance Fv,Rd (kN, 2 dp) of one bolt.
///
/// # Formula
/// Fv,Rd = n · αv · fub · A / γM2
///
/// # Arguments
/// * `props` - Resolved bolt properties (supplies fub, A, As and the grade)
/// * `shear_planes` - Number of shear planes n
/// * `area` - Whether the shear plane passes through shank or thread
/// * `gamma_m2` - Partial factor γM2
pub fn shear_resistance(
    props: &BoltProperties,
    shear_planes: u32,
    area: EffectiveArea,
    gamma_m2: f64,
) -> f64 {
    let av = alpha_v(area, props.grade);
    let a = area.area_mm2(props);
    let force = Newtons(f64::from(shear_planes) * av * props.fub_mpa * a / gamma_m2);
    Kilonewtons::from(force).rounded().0
}

// =============================================================================
// BEARING
// =============================================================================

/// Bolt position relative to the plate boundary in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoltPosition {
    /// Next to a free end/edge: governed by e1 or e2
    Edge,
    /// Inside the bolt pattern: governed by p1 or p2
    Interior,
}

impl BoltPosition {
    pub const ALL: [BoltPosition; 2] = [BoltPosition::Edge, BoltPosition::Interior];
}

/// Plate geometry around a bolt (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingGeometry {
    /// End distance parallel to the force
    pub e1_mm: f64,
    /// Edge distance perpendicular to the force
    pub e2_mm: f64,
    /// Pitch parallel to the force
    pub p1_mm: f64,
    /// Spacing perpendicular to the force
    pub p2_mm: f64,
    /// Plate thickness t
    pub plate_thickness_mm: f64,
}

/// Bearing factor αd in the force direction.
///
/// # Formulas
/// - Edge:     αd = min(e1 / 3d0, 1.0, fub/fu)
/// - Interior: αd = min(p1 / 3d0 − 1/4, 1.0, fub/fu)
pub fn alpha_d(
    position: BoltPosition,
    geometry: &BearingGeometry,
    d0: f64,
    fub_mpa: f64,
    fu_mpa: f64,
) -> f64 {
    let ratio = match position {
        BoltPosition::Edge => geometry.e1_mm / (3.0 * d0),
        BoltPosition::Interior => geometry.p1_mm / (3.0 * d0) - 0.25,
    };
    ratio.min(ALPHA_D_MAX).min(fub_mpa / fu_mpa)
}

/// Bearing factor k1 perpendicular to the force.
///
/// # Formulas
/// - Edge:     k1 = min(2.8·e2/d0 − 1.7, 2.5)
/// - Interior: k1 = min(1.4·p2/d0 − 1.7, 2.5)
pub fn k1(position: BoltPosition, geometry: &BearingGeometry, d0: f64) -> f64 {
    let value = match position {
        BoltPosition::Edge => 2.8 * geometry.e2_mm / d0 - 1.7,
        BoltPosition::Interior => 1.4 * geometry.p2_mm / d0 - 1.7,
    };
    value.min(K1_MAX)
}

/// Intermediate bearing factors for both bolt positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingFactors {
    pub alpha_d_edge: f64,
    pub alpha_d_interior: f64,
    pub k1_edge: f64,
    pub k1_interior: f64,
}

impl BearingFactors {
    pub fn compute(props: &BoltProperties, geometry: &BearingGeometry, steel: SteelGrade) -> Self {
        let d0 = props.hole_diameter_mm;
        let fu = steel.fu_mpa();
        BearingFactors {
            alpha_d_edge: alpha_d(BoltPosition::Edge, geometry, d0, props.fub_mpa, fu),
            alpha_d_interior: alpha_d(BoltPosition::Interior, geometry, d0, props.fub_mpa, fu),
            k1_edge: k1(BoltPosition::Edge, geometry, d0),
            k1_interior: k1(BoltPosition::Interior, geometry, d0),
        }
    }

    pub fn alpha_d(&self, position: BoltPosition) -> f64 {
        match position {
            BoltPosition::Edge => self.alpha_d_edge,
            BoltPosition::Interior => self.alpha_d_interior,
        }
    }

    pub fn k1(&self, position: BoltPosition) -> f64 {
        match position {
            BoltPosition::Edge => self.k1_edge,
            BoltPosition::Interior => self.k1_interior,
        }
    }
}

/// The four bearing resistances Fb,Rd (kN, 2 dp).
///
/// Named `<k1 position>_<αd position>`: the first word is the position
/// perpendicular to the force, the second the position along it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BearingResistance {
    /// Fb.Rd.1 - k1 edge, αd edge
    pub edge_edge_kn: f64,
    /// Fb.Rd.2 - k1 edge, αd interior
    pub edge_interior_kn: f64,
    /// Fb.Rd.3 - k1 interior, αd edge
    pub interior_edge_kn: f64,
    /// Fb.Rd.4 - k1 interior, αd interior
    pub interior_interior_kn: f64,
}

impl BearingResistance {
    /// Resistance for a (perpendicular, parallel) position pair
    pub fn get(&self, perpendicular: BoltPosition, parallel: BoltPosition) -> f64 {
        match (perpendicular, parallel) {
            (BoltPosition::Edge, BoltPosition::Edge) => self.edge_edge_kn,
            (BoltPosition::Edge, BoltPosition::Interior) => self.edge_interior_kn,
            (BoltPosition::Interior, BoltPosition::Edge) => self.interior_edge_kn,
            (BoltPosition::Interior, BoltPosition::Interior) => self.interior_interior_kn,
        }
    }

    /// Values in Fb.Rd.1..4 order
    pub fn values(&self) -> [f64; 4] {
        [
            self.edge_edge_kn,
            self.edge_interior_kn,
            self.interior_edge_kn,
            self.interior_interior_kn,
        ]
    }

    /// Smallest of the four variants
    pub fn min_kn(&self) -> f64 {
        self.values().into_iter().fold(f64::INFINITY, f64::min)
    }
}

/// Design bearing resistance Fb,Rd for all four position combinations.
///
/// # Formula
/// Fb,Rd = k1 · αd · fu · d · t / γM2
pub fn bearing_resistance(
    props: &BoltProperties,
    geometry: &BearingGeometry,
    steel: SteelGrade,
    gamma_m2: f64,
) -> BearingResistance {
    let factors = BearingFactors::compute(props, geometry, steel);
    let fu = steel.fu_mpa();
    let d = props.diameter_mm();
    let t = geometry.plate_thickness_mm;

    let fb_rd = |perpendicular: BoltPosition, parallel: BoltPosition| {
        let force = Newtons(
            factors.k1(perpendicular) * factors.alpha_d(parallel) * fu * d * t / gamma_m2,
        );
        Kilonewtons::from(force).rounded().0
    };

    BearingResistance {
        edge_edge_kn: fb_rd(BoltPosition::Edge, BoltPosition::Edge),
        edge_interior_kn: fb_rd(BoltPosition::Edge, BoltPosition::Interior),
        interior_edge_kn: fb_rd(BoltPosition::Interior, BoltPosition::Edge),
        interior_interior_kn: fb_rd(BoltPosition::Interior, BoltPosition::Interior),
    }
}

// =============================================================================
// TENSION
// =============================================================================

/// Design tension resistance Ft,Rd (kN, 2 dp) of one bolt.
///
/// # Formula
/// Ft,Rd = 0.9 · fub · As / γM2
pub fn tension_resistance(props: &BoltProperties, gamma_m2: f64) -> f64 {
    let force = Newtons(K2 * props.fub_mpa * props.stress_area_mm2 / gamma_m2);
    Kilonewtons::from(force).rounded().0
}
