//! # Error Hierarchy
//!
//! Structured error types for plate and region code validation, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Two failure kinds reach callers of the facade:
//!
//! - [`PlateError::InvalidArgument`]: a required argument was absent. It is
//!   raised before any validation logic runs.
//! - [`PlateError::NotValid`]: the input was present but does not match the
//!   grammar. Only the `validate*` entry points return it; the `is_valid*`
//!   entry points answer `Ok(false)` instead.
//!
//! Newtype constructors ([`crate::Plate`], [`crate::RegionCode`]) and enum
//! parsers report [`ValidationError`].

use thiserror::Error;

/// Prefix of the message carried by [`PlateError::NotValid`].
pub const NOT_VALID_MESSAGE: &str = "Invalid vehicle state registration plate: ";

/// Top-level error type for the validation API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlateError {
    /// A required argument was not supplied.
    #[error("{0}")]
    InvalidArgument(MissingArgument),

    /// The plate does not match the requested grammar.
    #[error("Invalid vehicle state registration plate: {plate}")]
    NotValid {
        /// The rejected input, verbatim.
        plate: String,
    },

    /// Domain newtype construction failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl From<MissingArgument> for PlateError {
    fn from(arg: MissingArgument) -> Self {
        Self::InvalidArgument(arg)
    }
}

/// The argument whose absence triggered [`PlateError::InvalidArgument`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MissingArgument {
    /// No plate string.
    #[error("Plate must be not null")]
    Plate,
    /// No plate type.
    #[error("Type must be not null")]
    Type,
    /// No region code string.
    #[error("Code must be not null")]
    Code,
    /// No region code length selector.
    #[error("Length must be not null")]
    Length,
}

/// Validation errors for domain newtypes and enum parsing.
///
/// Each variant carries the rejected input so callers can report it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Plate does not match the type 1 grammar.
    #[error("invalid plate: \"{0}\" (expected letter, 3 digits, 2 letters, region code)")]
    InvalidPlate(String),

    /// Region code is not a known 2-digit or 3-digit code.
    #[error("invalid region code: \"{0}\" (expected 2 or 3 digits ending in a federal subject code)")]
    InvalidRegionCode(String),

    /// Plate type name is not recognised.
    #[error("unknown plate type: \"{0}\" (expected TYPE_1, TYPE_1A or ANY)")]
    UnknownPlateType(String),

    /// Region code length name is not recognised.
    #[error("unknown region code length: \"{0}\" (expected TWO_DIGIT, THREE_DIGIT or ANY)")]
    UnknownRegionCodeLength(String),
}

/// Convenience alias used by the facade and region validator.
pub type Result<T> = std::result::Result<T, PlateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_argument_messages_are_exact() {
        assert_eq!(MissingArgument::Plate.to_string(), "Plate must be not null");
        assert_eq!(MissingArgument::Type.to_string(), "Type must be not null");
        assert_eq!(MissingArgument::Code.to_string(), "Code must be not null");
        assert_eq!(MissingArgument::Length.to_string(), "Length must be not null");
    }

    #[test]
    fn invalid_argument_display_is_the_bare_message() {
        let err = PlateError::from(MissingArgument::Type);
        assert_eq!(format!("{err}"), "Type must be not null");
    }

    #[test]
    fn not_valid_display_embeds_plate() {
        let err = PlateError::NotValid {
            plate: "А019АА1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            format!("{NOT_VALID_MESSAGE}А019АА1")
        );
    }

    #[test]
    fn not_valid_display_with_empty_plate() {
        let err = PlateError::NotValid {
            plate: String::new(),
        };
        assert_eq!(err.to_string(), "Invalid vehicle state registration plate: ");
    }

    #[test]
    fn validation_error_wraps_into_plate_error() {
        let err: PlateError = ValidationError::InvalidRegionCode("00".to_string()).into();
        let msg = format!("{err}");
        assert!(msg.contains("validation error"));
        assert!(msg.contains("\"00\""));
    }

    #[test]
    fn validation_error_unknown_names() {
        let e1 = ValidationError::UnknownPlateType("TYPE_2".to_string());
        let e2 = ValidationError::UnknownRegionCodeLength("FOUR".to_string());
        assert!(format!("{e1}").contains("TYPE_2"));
        assert!(format!("{e2}").contains("FOUR"));
    }

    #[test]
    fn all_error_types_are_debug() {
        let e1 = PlateError::from(MissingArgument::Plate);
        let e2 = ValidationError::InvalidPlate("x".to_string());
        assert!(!format!("{e1:?}").is_empty());
        assert!(!format!("{e2:?}").is_empty());
    }
}
