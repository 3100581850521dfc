//! # Bolt Connection Calculation
//!
//! Resolves bolt and plate properties, runs the shear, bearing and tension
//! checks, and packages the six resistances with stable labels for display.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::calculations::bolt_connection::{calculate, BoltConnectionInput};
//! use bolt_core::materials::{BoltGrade, SteelGrade};
//!
//! let input = BoltConnectionInput {
//!     label: "Splice".to_string(),
//!     bolt_diameter_mm: 16,
//!     bolt_grade: BoltGrade::Grade8_8,
//!     steel_grade: SteelGrade::S235,
//!     gamma_m2: 1.25,
//!     e1_mm: 48.0,
//!     e2_mm: 48.0,
//!     p1_mm: 67.5,
//!     p2_mm: 54.0,
//!     plate_thickness_mm: 10.0,
//!     shear_planes: 1,
//!     shear_plane_in_thread: true,
//! };
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.shear_kn, 60.29);
//! assert_eq!(result.tension_kn, 90.43);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::equations::bolt::{
    alpha_v, bearing_resistance, shear_resistance, tension_resistance, BearingFactors,
    BearingGeometry, BearingResistance, EffectiveArea,
};
use crate::errors::{CalcError, CalcResult};
use crate::geometry::SpacingLimits;
use crate::materials::{lookup_bolt_properties, BoltGrade, BoltProperties, BoltSize, SteelGrade};
use crate::settings::DesignSettings;

/// Slack allowed when comparing a distance against its minimum (mm)
const DISTANCE_TOLERANCE_MM: f64 = 1e-9;

/// Input parameters for a single-bolt resistance check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Splice",
///   "bolt_diameter_mm": 16,
///   "bolt_grade": "8.8",
///   "steel_grade": "S235",
///   "gamma_m2": 1.25,
///   "e1_mm": 48.0,
///   "e2_mm": 48.0,
///   "p1_mm": 67.5,
///   "p2_mm": 54.0,
///   "plate_thickness_mm": 10.0,
///   "shear_planes": 1,
///   "shear_plane_in_thread": true
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltConnectionInput {
    /// User label for this connection
    #[serde(default)]
    pub label: String,

    /// Nominal bolt diameter d (mm); must be in the bolt catalog
    pub bolt_diameter_mm: u32,

    /// Bolt strength class
    pub bolt_grade: BoltGrade,

    /// Plate steel grade
    pub steel_grade: SteelGrade,

    /// Partial factor γM2
    pub gamma_m2: f64,

    /// End distance parallel to the force (mm)
    pub e1_mm: f64,

    /// Edge distance perpendicular to the force (mm)
    pub e2_mm: f64,

    /// Pitch parallel to the force (mm)
    pub p1_mm: f64,

    /// Spacing perpendicular to the force (mm)
    pub p2_mm: f64,

    /// Plate thickness t (mm)
    pub plate_thickness_mm: f64,

    /// Number of shear planes n
    pub shear_planes: u32,

    /// Whether the shear plane passes through the threaded portion
    pub shear_plane_in_thread: bool,
}

impl BoltConnectionInput {
    /// Input built from settings with every distance at its rounded-up minimum.
    pub fn from_settings(label: impl Into<String>, settings: &DesignSettings) -> Self {
        let minimums = SpacingLimits::for_size(settings.bolt_size).input_minimums();
        BoltConnectionInput {
            label: label.into(),
            bolt_diameter_mm: settings.bolt_size.diameter_mm(),
            bolt_grade: settings.bolt_grade,
            steel_grade: settings.steel_grade,
            gamma_m2: settings.gamma_m2,
            e1_mm: minimums.e1_mm,
            e2_mm: minimums.e2_mm,
            p1_mm: minimums.p1_mm,
            p2_mm: minimums.p2_mm,
            plate_thickness_mm: settings.plate_thickness_mm,
            shear_planes: settings.shear_planes,
            shear_plane_in_thread: settings.shear_plane_in_thread,
        }
    }

    /// Parse an input document from JSON.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Bolt size, failing if the diameter is not in the catalog.
    pub fn bolt_size(&self) -> CalcResult<BoltSize> {
        BoltSize::from_mm(self.bolt_diameter_mm)
    }

    pub fn bearing_geometry(&self) -> BearingGeometry {
        BearingGeometry {
            e1_mm: self.e1_mm,
            e2_mm: self.e2_mm,
            p1_mm: self.p1_mm,
            p2_mm: self.p2_mm,
            plate_thickness_mm: self.plate_thickness_mm,
        }
    }

    pub fn effective_area(&self) -> EffectiveArea {
        EffectiveArea::from_shear_in_thread(self.shear_plane_in_thread)
    }

    /// Validate input parameters.
    ///
    /// Catalog misses come first, then positivity, then the minimum
    /// distances for the bolt's hole diameter.
    pub fn validate(&self) -> CalcResult<()> {
        let size = self.bolt_size()?;

        if self.gamma_m2.is_nan() || self.gamma_m2 <= 0.0 {
            return Err(CalcError::invalid_input(
                "gamma_m2",
                self.gamma_m2.to_string(),
                "Partial factor must be positive",
            ));
        }
        if self.plate_thickness_mm.is_nan() || self.plate_thickness_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "plate_thickness_mm",
                self.plate_thickness_mm.to_string(),
                "Plate thickness must be positive",
            ));
        }
        if self.shear_planes < 1 {
            return Err(CalcError::invalid_input(
                "shear_planes",
                self.shear_planes.to_string(),
                "At least one shear plane is required",
            ));
        }

        let limits = SpacingLimits::for_size(size);
        let checks = [
            ("e1_mm", self.e1_mm, limits.min_e1_mm, "1.2·d0"),
            ("e2_mm", self.e2_mm, limits.min_e2_mm, "1.2·d0"),
            ("p1_mm", self.p1_mm, limits.min_p1_mm, "2.2·d0"),
            ("p2_mm", self.p2_mm, limits.min_p2_mm, "2.4·d0"),
        ];
        for (field, value, minimum, rule) in checks {
            if value.is_nan() || value < minimum - DISTANCE_TOLERANCE_MM {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    format!("Must be at least {} = {:.1} mm for {}", rule, minimum, size),
                ));
            }
        }
        Ok(())
    }
}

/// Stable identifiers for the six reported resistances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResistanceLabel {
    #[serde(rename = "Fv.Rd")]
    FvRd,
    #[serde(rename = "Fb.Rd.1")]
    FbRd1,
    #[serde(rename = "Fb.Rd.2")]
    FbRd2,
    #[serde(rename = "Fb.Rd.3")]
    FbRd3,
    #[serde(rename = "Fb.Rd.4")]
    FbRd4,
    #[serde(rename = "Ft.Rd")]
    FtRd,
}

impl ResistanceLabel {
    /// Display order
    pub const ALL: [ResistanceLabel; 6] = [
        ResistanceLabel::FvRd,
        ResistanceLabel::FbRd1,
        ResistanceLabel::FbRd2,
        ResistanceLabel::FbRd3,
        ResistanceLabel::FbRd4,
        ResistanceLabel::FtRd,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            ResistanceLabel::FvRd => "Fv.Rd",
            ResistanceLabel::FbRd1 => "Fb.Rd.1",
            ResistanceLabel::FbRd2 => "Fb.Rd.2",
            ResistanceLabel::FbRd3 => "Fb.Rd.3",
            ResistanceLabel::FbRd4 => "Fb.Rd.4",
            ResistanceLabel::FtRd => "Ft.Rd",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ResistanceLabel::FvRd => "Shear resistance",
            ResistanceLabel::FbRd1 => "Bearing resistance (pos. 1 edge-edge)",
            ResistanceLabel::FbRd2 => "Bearing resistance (pos. 2 edge-inner)",
            ResistanceLabel::FbRd3 => "Bearing resistance (pos. 3 inner-edge)",
            ResistanceLabel::FbRd4 => "Bearing resistance (pos. 4 inner-inner)",
            ResistanceLabel::FtRd => "Tensile resistance",
        }
    }
}

impl std::fmt::Display for ResistanceLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code(), self.description())
    }
}

/// Results from a bolt connection calculation. All forces in kN, 2 dp.
///
/// ## JSON Example
///
/// ```json
/// {
///   "shear_kn": 60.29,
///   "bearing": {
///     "edge_edge_kn": 102.4,
///     "edge_interior_kn": 115.2,
///     "interior_edge_kn": 102.4,
///     "interior_interior_kn": 115.2
///   },
///   "tension_kn": 90.43,
///   "alpha_v": 0.6,
///   ...
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoltResistanceResult {
    /// Fv,Rd
    pub shear_kn: f64,

    /// Fb,Rd for the four position combinations
    pub bearing: BearingResistance,

    /// Ft,Rd
    pub tension_kn: f64,

    /// Shear factor αv used
    pub alpha_v: f64,

    /// αd and k1 for edge and interior bolts
    pub bearing_factors: BearingFactors,

    /// Resolved bolt properties (d0, A, As, fub)
    pub properties: BoltProperties,

    /// Plate ultimate strength fu (MPa)
    pub fu_mpa: f64,

    /// Minimum and recommended distances for the bolt
    pub spacing: SpacingLimits,
}

impl BoltResistanceResult {
    pub fn value(&self, label: ResistanceLabel) -> f64 {
        match label {
            ResistanceLabel::FvRd => self.shear_kn,
            ResistanceLabel::FbRd1 => self.bearing.edge_edge_kn,
            ResistanceLabel::FbRd2 => self.bearing.edge_interior_kn,
            ResistanceLabel::FbRd3 => self.bearing.interior_edge_kn,
            ResistanceLabel::FbRd4 => self.bearing.interior_interior_kn,
            ResistanceLabel::FtRd => self.tension_kn,
        }
    }

    /// The six (label, kN) rows in display order
    pub fn rows(&self) -> Vec<(ResistanceLabel, f64)> {
        ResistanceLabel::ALL
            .iter()
            .map(|&label| (label, self.value(label)))
            .collect()
    }

    /// Bearing variant with the lowest resistance
    pub fn governing_bearing(&self) -> (ResistanceLabel, f64) {
        let bearing_labels = [
            ResistanceLabel::FbRd1,
            ResistanceLabel::FbRd2,
            ResistanceLabel::FbRd3,
            ResistanceLabel::FbRd4,
        ];
        bearing_labels
            .iter()
            .map(|&label| (label, self.value(label)))
            .fold((ResistanceLabel::FbRd1, f64::INFINITY), |best, current| {
                if current.1 < best.1 {
                    current
                } else {
                    best
                }
            })
    }
}

/// Calculate the design resistances of one bolt.
///
/// # Returns
///
/// * `Ok(BoltResistanceResult)` - The six resistances and supporting values
/// * `Err(CalcError)` - Unsupported catalog value or invalid geometry
pub fn calculate(input: &BoltConnectionInput) -> CalcResult<BoltResistanceResult> {
    input.validate()?;

    let props = lookup_bolt_properties(input.bolt_diameter_mm, input.bolt_grade)?;
    let geometry = input.bearing_geometry();
    let area = input.effective_area();

    let shear_kn = shear_resistance(&props, input.shear_planes, area, input.gamma_m2);
    let bearing = bearing_resistance(&props, &geometry, input.steel_grade, input.gamma_m2);
    let tension_kn = tension_resistance(&props, input.gamma_m2);

    debug!(
        label = %input.label,
        size = %props.size,
        grade = %props.grade,
        steel = %input.steel_grade,
        d0 = props.hole_diameter_mm,
        shear_kn,
        bearing_min_kn = bearing.min_kn(),
        tension_kn,
        "bolt resistances computed"
    );

    Ok(BoltResistanceResult {
        shear_kn,
        bearing,
        tension_kn,
        alpha_v: alpha_v(area, props.grade),
        bearing_factors: BearingFactors::compute(&props, &geometry, input.steel_grade),
        properties: props,
        fu_mpa: input.steel_grade.fu_mpa(),
        spacing: SpacingLimits::for_size(props.size),
    })
}
