//! # Error Types
//!
//! Structured error types for bolt_core. Catalog misses surface immediately
//! as [`CalcError::NotInCatalog`]; the formula functions themselves never fail
//! once bolt properties are resolved.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(t_mm: f64) -> CalcResult<()> {
//!     if t_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "plate_thickness_mm",
//!             t_mm.to_string(),
//!             "Plate thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for bolt_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Fixed catalogs a lookup can miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Catalog {
    BoltDiameter,
    BoltGrade,
    SteelGrade,
}

impl Catalog {
    pub fn display_name(&self) -> &'static str {
        match self {
            Catalog::BoltDiameter => "bolt diameter",
            Catalog::BoltGrade => "bolt grade",
            Catalog::SteelGrade => "steel grade",
        }
    }
}

impl std::fmt::Display for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structured error type for resistance calculations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Key is not part of a supported catalog
    #[error("Unsupported {catalog}: '{value}' is not in the supported catalog")]
    NotInCatalog { catalog: Catalog, value: String },

    /// An input value is invalid (non-positive, below a minimum distance, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a NotInCatalog error
    pub fn not_in_catalog(catalog: Catalog, value: impl Into<String>) -> Self {
        CalcError::NotInCatalog {
            catalog,
            value: value.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::NotInCatalog { .. } => "NOT_IN_CATALOG",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::not_in_catalog(Catalog::BoltDiameter, "14");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("NotInCatalog"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::not_in_catalog(Catalog::SteelGrade, "S420").error_code(),
            "NOT_IN_CATALOG"
        );
        assert_eq!(
            CalcError::invalid_input("e1_mm", "-1", "must be positive").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_error_message_names_catalog() {
        let error = CalcError::not_in_catalog(Catalog::BoltGrade, "4.6");
        assert_eq!(
            error.to_string(),
            "Unsupported bolt grade: '4.6' is not in the supported catalog"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }
}
