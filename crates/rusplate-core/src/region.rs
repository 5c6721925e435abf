//! # Region Codes
//!
//! The numeric suffix of every plate identifies the federal subject that
//! issued it. Two forms exist:
//!
//! - **Two digits**: the code itself must be a federal subject code
//!   (`"01"`, `"77"`, `"95"`).
//! - **Three digits**: an overflow code issued once a subject ran out of
//!   two-digit combinations. The leading digit is `1`..=`9` and the trailing
//!   two digits must again be a federal subject code. `"177"` and `"750"`
//!   pass; `"100"` does not because `"00"` is no subject, and `"050"` does
//!   not because of the leading zero.
//!
//! The subject table is copied verbatim from the registration authority's
//! list and is built once on first use.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::error::{MissingArgument, Result, ValidationError};

/// Federal subject codes, in the order of the authoritative list.
const SUBJECT_CODES: [&str; 97] = [
    "01", "02", "03", "04", "05", "06", "07", "08", "09", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "95", "21", "82", "22", "59", "81", "25", "26", "27", "28", "29", "30", "31",
    "32", "33", "34", "35", "36", "37", "38", "85", "39", "40", "42", "43", "44", "45", "46", "47",
    "48", "49", "50", "90", "51", "75", "80", "41", "23", "93", "24", "84", "88", "57", "58", "60",
    "61", "62", "63", "64", "65", "66", "96", "67", "68", "69", "70", "71", "72", "73", "74", "76",
    "52", "53", "54", "55", "56", "77", "97", "99", "78", "98", "92", "79", "83", "86", "87", "89",
    "94",
];

const TWO_DIGIT_CODE_LENGTH: usize = 2;
const THREE_DIGIT_CODE_LENGTH: usize = 3;

fn subject_table() -> &'static HashSet<&'static str> {
    static TABLE: OnceLock<HashSet<&'static str>> = OnceLock::new();
    TABLE.get_or_init(|| SUBJECT_CODES.iter().copied().collect())
}

/// Which region code form a caller expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegionCodeLength {
    /// Exactly two digits.
    #[serde(rename = "TWO_DIGIT")]
    TwoDigit,
    /// Exactly three digits.
    #[serde(rename = "THREE_DIGIT")]
    ThreeDigit,
    /// Either form, detected from the input length.
    #[serde(rename = "ANY")]
    Any,
}

impl RegionCodeLength {
    /// Return all selectors as a slice.
    pub fn all() -> &'static [RegionCodeLength] {
        &[Self::TwoDigit, Self::ThreeDigit, Self::Any]
    }

    /// The canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoDigit => "TWO_DIGIT",
            Self::ThreeDigit => "THREE_DIGIT",
            Self::Any => "ANY",
        }
    }
}

impl fmt::Display for RegionCodeLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionCodeLength {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|length| length.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownRegionCodeLength(s.to_string()))
    }
}

/// Check a region code, detecting its form from the length.
///
/// # Errors
///
/// Returns [`MissingArgument::Code`] when `code` is `None`. A present but
/// malformed code (including the empty string) yields `Ok(false)`.
pub fn is_valid<'a>(code: impl Into<Option<&'a str>>) -> Result<bool> {
    let code = code.into().ok_or(MissingArgument::Code)?;
    Ok(matches(code, RegionCodeLength::Any))
}

/// Check a region code against a pinned form.
///
/// # Errors
///
/// Returns [`MissingArgument::Code`] when `code` is `None`, otherwise
/// [`MissingArgument::Length`] when `length` is `None`.
pub fn is_valid_with_length<'a>(
    code: impl Into<Option<&'a str>>,
    length: impl Into<Option<RegionCodeLength>>,
) -> Result<bool> {
    let code = code.into().ok_or(MissingArgument::Code)?;
    let length = length.into().ok_or(MissingArgument::Length)?;
    Ok(matches(code, length))
}

/// Infallible core of the region code check.
pub fn matches(code: &str, length: RegionCodeLength) -> bool {
    match length {
        RegionCodeLength::TwoDigit => is_two_digit(code),
        RegionCodeLength::ThreeDigit => is_three_digit(code),
        RegionCodeLength::Any => match code.chars().count() {
            TWO_DIGIT_CODE_LENGTH => is_two_digit(code),
            THREE_DIGIT_CODE_LENGTH => is_three_digit(code),
            _ => false,
        },
    }
}

/// Whether `code` is one of the two-digit federal subject codes.
pub fn is_subject_code(code: &str) -> bool {
    subject_table().contains(code)
}

/// Iterate the federal subject codes in table order.
pub fn subject_codes() -> impl Iterator<Item = &'static str> {
    SUBJECT_CODES.iter().copied()
}

fn is_two_digit(code: &str) -> bool {
    code.chars().count() == TWO_DIGIT_CODE_LENGTH && is_subject_code(code)
}

fn is_three_digit(code: &str) -> bool {
    if code.chars().count() != THREE_DIGIT_CODE_LENGTH {
        return false;
    }
    let mut chars = code.chars();
    match chars.next() {
        Some('1'..='9') => is_subject_code(chars.as_str()),
        _ => false,
    }
}

/// A validated region code, either two or three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RegionCode(String);

impl_validating_deserialize!(RegionCode);

impl RegionCode {
    /// Create a region code, validating either form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidRegionCode`] if the string is not a
    /// valid two-digit or three-digit code.
    pub fn new(value: impl Into<String>) -> std::result::Result<Self, ValidationError> {
        let s = value.into();
        if !matches(&s, RegionCodeLength::Any) {
            tracing::trace!(code = %s, "rejected region code");
            return Err(ValidationError::InvalidRegionCode(s));
        }
        Ok(Self(s))
    }

    /// Access the code string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Which form this code takes. Never [`RegionCodeLength::Any`].
    pub fn length(&self) -> RegionCodeLength {
        if self.0.len() == TWO_DIGIT_CODE_LENGTH {
            RegionCodeLength::TwoDigit
        } else {
            RegionCodeLength::ThreeDigit
        }
    }

    /// The two-digit federal subject this code belongs to.
    ///
    /// For `"177"` this is `"77"`; a two-digit code is its own subject.
    pub fn subject(&self) -> &str {
        // Valid codes are ASCII, so byte offsets are char offsets.
        &self.0[self.0.len() - TWO_DIGIT_CODE_LENGTH..]
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
