//! # Plate Grammars
//!
//! GOST R 50577-2018 type 1 plates read `М000ММ55` or `М000ММ555`:
//!
//! | Position | Class |
//! |---|---|
//! | 0 | series letter |
//! | 1–3 | ASCII digit |
//! | 4–5 | series letter |
//! | 6.. | region code (see [`crate::region`]) |
//!
//! Series letters are the twelve uppercase Cyrillic letters that have a
//! Latin look-alike: `А В Е К М Н О Р С Т У Х`. Matching is exact. Lowercase
//! letters and the Latin look-alikes themselves are rejected.
//!
//! Type 1A plates use the same layout; the standard only changes the plate
//! dimensions, so both types share [`Type1Grammar`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::region::{self, RegionCodeLength};

/// The permitted series letters.
pub const SERIES_LETTERS: [char; 12] = ['А', 'В', 'Е', 'К', 'М', 'Н', 'О', 'Р', 'С', 'Т', 'У', 'Х'];

const MIN_PLATE_LENGTH: usize = 8;
const MAX_PLATE_LENGTH: usize = 9;
const PREFIX_LENGTH: usize = 6;

/// Plate type as defined by the standard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlateType {
    /// Type 1: cars, trucks, buses.
    #[serde(rename = "TYPE_1")]
    Type1,
    /// Type 1A: same layout as type 1 on a narrower plate.
    #[serde(rename = "TYPE_1A")]
    Type1A,
    /// Valid under any implemented grammar.
    #[serde(rename = "ANY")]
    Any,
}

impl PlateType {
    /// Return all plate types as a slice.
    pub fn all() -> &'static [PlateType] {
        &[Self::Type1, Self::Type1A, Self::Any]
    }

    /// The canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Type1 => "TYPE_1",
            Self::Type1A => "TYPE_1A",
            Self::Any => "ANY",
        }
    }
}

impl fmt::Display for PlateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlateType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|plate_type| plate_type.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownPlateType(s.to_string()))
    }
}

/// A plate grammar: decides whether a string is a plate of one type.
pub trait PlateGrammar: Send + Sync {
    /// Whether `plate` matches this grammar.
    fn is_valid(&self, plate: &str) -> bool;

    /// The plate type this grammar implements.
    fn plate_type(&self) -> PlateType;
}

/// Whether `c` is one of the [`SERIES_LETTERS`].
pub fn is_series_letter(c: char) -> bool {
    matches!(
        c,
        'А' | 'В' | 'Е' | 'К' | 'М' | 'Н' | 'О' | 'Р' | 'С' | 'Т' | 'У' | 'Х'
    )
}

#[derive(Clone, Copy)]
enum CharClass {
    Letter,
    Digit,
}

impl CharClass {
    fn admits(self, c: char) -> bool {
        match self {
            Self::Letter => is_series_letter(c),
            Self::Digit => c.is_ascii_digit(),
        }
    }
}

const PREFIX: [CharClass; PREFIX_LENGTH] = [
    CharClass::Letter,
    CharClass::Digit,
    CharClass::Digit,
    CharClass::Digit,
    CharClass::Letter,
    CharClass::Letter,
];

/// Grammar for type 1 and type 1A plates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Type1Grammar;

/// The type 1 grammar instance.
pub static TYPE_1: Type1Grammar = Type1Grammar;

impl PlateGrammar for Type1Grammar {
    fn is_valid(&self, plate: &str) -> bool {
        let length = plate.chars().count();
        if !(MIN_PLATE_LENGTH..=MAX_PLATE_LENGTH).contains(&length) {
            return false;
        }
        let mut chars = plate.chars();
        let prefix_ok = PREFIX
            .iter()
            .all(|class| chars.next().is_some_and(|c| class.admits(c)));
        prefix_ok && region::matches(chars.as_str(), RegionCodeLength::Any)
    }

    fn plate_type(&self) -> PlateType {
        PlateType::Type1
    }
}

/// Grammar accepting a plate valid under any implemented grammar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyGrammar;

/// The catch-all grammar instance.
pub static ANY: AnyGrammar = AnyGrammar;

/// Every concrete grammar. [`AnyGrammar`] ORs over this list.
static GRAMMARS: [&dyn PlateGrammar; 1] = [&TYPE_1];

impl PlateGrammar for AnyGrammar {
    fn is_valid(&self, plate: &str) -> bool {
        GRAMMARS.iter().any(|grammar| grammar.is_valid(plate))
    }

    fn plate_type(&self) -> PlateType {
        PlateType::Any
    }
}

/// A validated type 1 plate.
///
/// # Validation
///
/// - 8 or 9 characters
/// - series letter, three digits, two series letters
/// - a valid two-digit or three-digit region code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Plate(String);

impl_validating_deserialize!(Plate);

impl Plate {
    /// Create a plate from a string, validating the type 1 grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidPlate`] if the string is not a
    /// type 1 plate.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if !TYPE_1.is_valid(&s) {
            tracing::trace!(plate = %s, "rejected plate");
            return Err(ValidationError::InvalidPlate(s));
        }
        Ok(Self(s))
    }

    /// Access the plate string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The three series letters (positions 0, 4 and 5), e.g. `"ААА"` for
    /// `"А019АА61"`.
    pub fn series(&self) -> String {
        self.0
            .chars()
            .enumerate()
            .filter(|(i, _)| matches!(i, 0 | 4 | 5))
            .map(|(_, c)| c)
            .collect()
    }

    /// The registration number (positions 1 to 3).
    pub fn number(&self) -> &str {
        &self.0[self.byte_offset(1)..self.byte_offset(4)]
    }

    /// The region code suffix.
    pub fn region(&self) -> &str {
        &self.0[self.byte_offset(PREFIX_LENGTH)..]
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.0
            .char_indices()
            .nth(char_index)
            .map_or(self.0.len(), |(offset, _)| offset)
    }
}

impl fmt::Display for Plate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
