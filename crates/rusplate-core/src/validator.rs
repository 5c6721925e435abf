//! # Validation Facade
//!
//! Public entry points. Each takes its arguments as `impl Into<Option<_>>`,
//! so callers pass plain values or forward an `Option` they received. A
//! `None` argument fails with [`PlateError::InvalidArgument`] before any
//! validation runs; arguments are checked in declaration order.
//!
//! ```
//! use rusplate_core::{is_valid, validate_as, PlateType};
//!
//! assert_eq!(is_valid("А019АА161"), Ok(true));
//! assert_eq!(is_valid(""), Ok(false));
//!
//! let err = validate_as("А019АА1", PlateType::Type1A).unwrap_err();
//! assert_eq!(err.to_string(), "Invalid vehicle state registration plate: А019АА1");
//! ```

use crate::error::{MissingArgument, PlateError, Result};
use crate::plate::{PlateGrammar, PlateType, ANY, TYPE_1};

/// The grammar that decides plates of `plate_type`.
pub fn grammar_for(plate_type: PlateType) -> &'static dyn PlateGrammar {
    match plate_type {
        PlateType::Type1 | PlateType::Type1A => &TYPE_1,
        PlateType::Any => &ANY,
    }
}

/// Check a plate against any implemented grammar.
///
/// # Errors
///
/// Returns [`MissingArgument::Plate`] when `plate` is `None`.
pub fn is_valid<'a>(plate: impl Into<Option<&'a str>>) -> Result<bool> {
    is_valid_as(plate, PlateType::Any)
}

/// Check a plate against the grammar of `plate_type`.
///
/// # Errors
///
/// Returns [`MissingArgument::Plate`] when `plate` is `None`, otherwise
/// [`MissingArgument::Type`] when `plate_type` is `None`.
pub fn is_valid_as<'a>(
    plate: impl Into<Option<&'a str>>,
    plate_type: impl Into<Option<PlateType>>,
) -> Result<bool> {
    let plate = plate.into().ok_or(MissingArgument::Plate)?;
    let plate_type = plate_type.into().ok_or(MissingArgument::Type)?;
    let valid = grammar_for(plate_type).is_valid(plate);
    if !valid {
        tracing::debug!(plate, plate_type = %plate_type, "plate rejected");
    }
    Ok(valid)
}

/// Require a plate to be valid under any implemented grammar.
///
/// # Errors
///
/// Returns [`PlateError::NotValid`] carrying the input when the plate is
/// rejected, or [`PlateError::InvalidArgument`] when `plate` is `None`.
pub fn validate<'a>(plate: impl Into<Option<&'a str>>) -> Result<()> {
    validate_as(plate, PlateType::Any)
}

/// Require a plate to be valid under the grammar of `plate_type`.
///
/// # Errors
///
/// Returns [`PlateError::NotValid`] carrying the input when the plate is
/// rejected, or [`PlateError::InvalidArgument`] when an argument is `None`.
pub fn validate_as<'a>(
    plate: impl Into<Option<&'a str>>,
    plate_type: impl Into<Option<PlateType>>,
) -> Result<()> {
    let plate = plate.into();
    if is_valid_as(plate, plate_type)? {
        return Ok(());
    }
    Err(PlateError::NotValid {
        plate: plate.unwrap_or_default().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &[&str] = &["А019АА61", "А019АА161"];

    const INVALID: &[&str] = &[
        "а019АА161",
        "Аа19АА161",
        "А0а9АА161",
        "А01аАА161",
        "А019аА161",
        "А019Аа161",
        "А019ААа61",
        "А019АА1а1",
        "А019АА16а",
        "AА019АА161",
        "А019АА161A",
        "А019АА1",
        "",
    ];

    #[test]
    fn dispatch_is_exhaustive() {
        assert_eq!(grammar_for(PlateType::Type1).plate_type(), PlateType::Type1);
        assert_eq!(grammar_for(PlateType::Type1A).plate_type(), PlateType::Type1);
        assert_eq!(grammar_for(PlateType::Any).plate_type(), PlateType::Any);
    }

    #[test]
    fn valid_plates_pass_every_entry_point() {
        for plate in VALID {
            assert_eq!(is_valid(*plate), Ok(true), "{plate}");
            assert_eq!(validate(*plate), Ok(()), "{plate}");
            for plate_type in PlateType::all() {
                assert_eq!(is_valid_as(*plate, *plate_type), Ok(true), "{plate}");
                assert_eq!(validate_as(*plate, *plate_type), Ok(()), "{plate}");
            }
        }
    }

    #[test]
    fn invalid_plates_fail_with_plate_in_message() {
        for plate in INVALID {
            assert_eq!(is_valid(*plate), Ok(false), "{plate}");
            let err = validate(*plate).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("Invalid vehicle state registration plate: {plate}")
            );
            for plate_type in PlateType::all() {
                let err = validate_as(*plate, *plate_type).unwrap_err();
                assert_eq!(
                    err,
                    PlateError::NotValid {
                        plate: plate.to_string()
                    }
                );
            }
        }
    }

    #[test]
    fn absent_plate_is_invalid_argument() {
        assert_eq!(
            is_valid(None),
            Err(PlateError::InvalidArgument(MissingArgument::Plate))
        );
        assert_eq!(
            validate(None).unwrap_err().to_string(),
            "Plate must be not null"
        );
        assert_eq!(
            is_valid_as(None, PlateType::Type1).unwrap_err().to_string(),
            "Plate must be not null"
        );
        assert_eq!(
            validate_as(None, PlateType::Type1A).unwrap_err().to_string(),
            "Plate must be not null"
        );
    }

    #[test]
    fn absent_type_is_invalid_argument() {
        assert_eq!(
            validate_as("", None).unwrap_err().to_string(),
            "Type must be not null"
        );
        assert_eq!(
            is_valid_as("А019АА61", None),
            Err(PlateError::InvalidArgument(MissingArgument::Type))
        );
    }

    #[test]
    fn plate_checked_before_type() {
        assert_eq!(
            is_valid_as(None, None).unwrap_err().to_string(),
            "Plate must be not null"
        );
    }

    #[test]
    fn optional_arguments_forward() {
        let plate: Option<&str> = Some("А019АА61");
        let plate_type: Option<PlateType> = Some(PlateType::Type1);
        assert_eq!(is_valid_as(plate, plate_type), Ok(true));
    }
}
