#![deny(missing_docs)]

//! # rusplate-core: Russian Vehicle Registration Plate Validation
//!
//! Validates Russian Federation vehicle state registration plates against
//! GOST R 50577-2018 (types 1 and 1A) together with their region codes.
//! Everything here is a pure function over a string and a static table; no
//! I/O, no shared mutable state.
//!
//! ## Layout
//!
//! 1. **[`region`]**: two-digit federal subject codes and their three-digit
//!    overflow forms.
//! 2. **[`plate`]**: the positional plate grammar, delegating the suffix to
//!    [`region`].
//! 3. **[`validator`]**: the facade: boolean and error-returning entry
//!    points, dispatched by [`PlateType`] with an exhaustive `match`.
//! 4. **[`error`]**: structured errors with `thiserror`.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - String newtypes ([`Plate`], [`RegionCode`]) are valid by construction,
//!   including when deserialized.

/// Implement `Deserialize` for a string newtype by routing the raw string
/// through the type's validating `new()` constructor.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub mod error;
pub mod plate;
pub mod region;
pub mod validator;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{MissingArgument, PlateError, Result, ValidationError, NOT_VALID_MESSAGE};
pub use plate::{
    is_series_letter, AnyGrammar, Plate, PlateGrammar, PlateType, Type1Grammar, SERIES_LETTERS,
};
pub use region::{RegionCode, RegionCodeLength};
pub use validator::{grammar_for, is_valid, is_valid_as, validate, validate_as};
