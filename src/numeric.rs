//! Numeric types for editable inputs and estimates.
//!
//! `NumericInput` models a numeric form field: it keeps the raw text the
//! user typed alongside the parsed, clamped value. `Estimate` carries a
//! value that may legitimately be non-numeric (`NaN` or infinite), so the
//! damage outputs can follow IEEE floating point semantics all the way to
//! the display.

use crate::error::CalcError;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reads the leading integer of field text, naming the field in the error.
///
/// Leading whitespace and one sign are accepted, then as many decimal
/// digits as follow; anything after them is ignored, so `"30.5"` reads as
/// 30. Text with no leading digit is an error. Magnitudes past `i64`
/// saturate.
///
/// # Examples
///
/// ```rust
/// use monstat::numeric::parse_integer;
///
/// assert_eq!(parse_integer("power", " 80 "), Ok(80));
/// assert_eq!(parse_integer("power", "100.0"), Ok(100));
/// assert_eq!(parse_integer("power", "-7kg"), Ok(-7));
/// assert!(parse_integer("power", "").is_err());
/// assert!(parse_integer("power", ".5").is_err());
/// ```
pub fn parse_integer(field: &str, raw: &str) -> Result<i64, CalcError> {
    let text = raw.trim_start();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let digits = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|digit| i64::from(digit - b'0'))
        .collect::<Vec<_>>();
    if digits.is_empty() {
        return Err(CalcError::InvalidNumericInput {
            field: field.to_string(),
            raw: raw.to_string(),
        });
    }

    let magnitude = digits
        .into_iter()
        .fold(0i64, |acc, digit| acc.saturating_mul(10).saturating_add(digit));
    Ok(if negative { -magnitude } else { magnitude })
}

/// The state of one numeric form field.
///
/// Text with a leading integer is read as that integer and clamped into
/// `[0, max]`, and the field then shows the clamped number. Invalid text is kept verbatim so it can be
/// corrected, and `value()` is `None`.
///
/// # Examples
///
/// ```rust
/// use monstat::NumericInput;
///
/// let ev = NumericInput::parse("300", Some(252));
/// assert_eq!(ev.value(), Some(252));
/// assert_eq!(ev.raw(), "252");
///
/// let decimal = NumericInput::parse("30.5", Some(31));
/// assert_eq!(decimal.value(), Some(30));
///
/// let typo = NumericInput::parse("o10", Some(252));
/// assert_eq!(typo.value(), None);
/// assert_eq!(typo.raw(), "o10");
/// assert_eq!(typo.value_or_zero(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericInput {
    raw: String,
    value: Option<u32>,
}

impl NumericInput {
    /// A field holding a valid number.
    pub fn new(value: u32) -> Self {
        Self {
            raw: value.to_string(),
            value: Some(value),
        }
    }

    /// Parses field text, clamping negatives to 0 and values above `max`
    /// down to `max`.
    pub fn parse(raw: &str, max: Option<u32>) -> Self {
        Self::parse_field("value", raw, max)
    }

    /// Like [`NumericInput::parse`], naming the field in the log line
    /// emitted for invalid text.
    pub fn parse_field(field: &str, raw: &str, max: Option<u32>) -> Self {
        match parse_integer(field, raw) {
            Ok(parsed) => {
                let upper = max.map_or(i64::from(u32::MAX), i64::from);
                Self::new(parsed.clamp(0, upper) as u32)
            }
            Err(err) => {
                warn!("{err}; keeping the text and computing with 0");
                Self {
                    raw: raw.to_string(),
                    value: None,
                }
            }
        }
    }

    /// The text shown in the field.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The parsed value, or `None` when the text is not a number.
    pub fn value(&self) -> Option<u32> {
        self.value
    }

    /// The parsed value with 0 substituted for invalid text.
    pub fn value_or_zero(&self) -> u32 {
        self.value.unwrap_or(0)
    }

    pub fn is_valid(&self) -> bool {
        self.value.is_some()
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

/// A computed value that may be non-numeric.
///
/// Damage, health percentage and hits-to-KO are carried as `f64` so that
/// missing inputs (`NaN`) and division by zero (`inf`) propagate exactly
/// as floating point does, with no sentinel values.
///
/// # Examples
///
/// ```rust
/// use monstat::Estimate;
///
/// let pct = Estimate::new(48.888).round_to(1);
/// assert_eq!(format!("{pct:.1}"), "48.9");
///
/// assert!(!Estimate::UNDEFINED.is_numeric());
/// assert_eq!(Estimate::UNDEFINED.to_string(), "NaN");
/// assert_eq!(Estimate::new(f64::INFINITY).to_string(), "Infinity");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Estimate(f64);

impl Estimate {
    /// The placeholder for an estimate whose inputs are unavailable.
    pub const UNDEFINED: Estimate = Estimate(f64::NAN);

    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// True for finite values.
    pub fn is_numeric(self) -> bool {
        self.0.is_finite()
    }

    pub fn is_undefined(self) -> bool {
        self.0.is_nan()
    }

    /// The value as an integer, if it is finite and has no fractional part.
    pub fn as_integer(self) -> Option<i64> {
        (self.0.is_finite() && self.0.fract() == 0.0).then_some(self.0 as i64)
    }

    /// Rounds to `decimals` places, half away from zero.
    pub fn round_to(self, decimals: u32) -> Self {
        let scale = 10f64.powi(decimals as i32);
        Self((self.0 * scale).round() / scale)
    }
}

impl From<u32> for Estimate {
    fn from(value: u32) -> Self {
        Self(f64::from(value))
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_nan() {
            f.write_str("NaN")
        } else if self.0.is_infinite() {
            f.write_str(if self.0 > 0.0 { "Infinity" } else { "-Infinity" })
        } else if let Some(precision) = f.precision() {
            write!(f, "{:.*}", precision, self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}
