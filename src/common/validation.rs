// Common validation types, traits and the shared field validators

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

use super::choices::Choice;

// ============================================================================
// Raw input
// ============================================================================

/// Raw submission: field name -> raw value as sent by the client.
///
/// Strings are kept verbatim, numbers and booleans are stringified, and
/// anything else (null, arrays, objects) counts as missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawFields(HashMap<String, Value>);

impl RawFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<String> {
        match self.0.get(field)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RawFields {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .fold(RawFields::new(), |fields, (k, v)| fields.with(k, v))
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Rejection of a single field. The message is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0}")]
    Missing(String),
    #[error("{0}")]
    Format(String),
    #[error("{0}")]
    Domain(String),
}

impl FieldError {
    pub fn missing(message: &str) -> Self {
        Self::Missing(message.to_string())
    }

    pub fn format(message: &str) -> Self {
        Self::Format(message.to_string())
    }

    pub fn domain(message: &str) -> Self {
        Self::Domain(message.to_string())
    }

    pub fn message(&self) -> &str {
        match self {
            FieldError::Missing(msg) | FieldError::Format(msg) | FieldError::Domain(msg) => msg,
        }
    }
}

pub type FieldResult<T> = Result<T, FieldError>;

/// Field-keyed error map for one submission. Only the first error recorded
/// for a field is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: BTreeMap<String, String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Records the error of `outcome` under `field` and hands back the value
    /// on success, so every field of a form can be checked before deciding.
    pub fn check<T>(&mut self, field: &str, outcome: FieldResult<T>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(err) => {
                self.add_error(field, err.message());
                None
            }
        }
    }

    #[cfg(test)]
    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn fields(&self) -> Vec<&str> {
        self.errors.keys().map(String::as_str).collect()
    }
}

/// Entity-level validation: raw input in, normalised record or error map out.
pub trait Validator<T> {
    type Output;

    fn validate(&self, data: &T) -> Result<Self::Output, ValidationResult>;
}

// ============================================================================
// Shared messages
// ============================================================================

pub const MSG_NAME_REQUIRED: &str = "Por favor ingrese un nombre";
pub const MSG_NAME_LETTERS_ONLY: &str = "El nombre solo puede contener letras y espacios";
pub const MSG_PHONE_REQUIRED: &str = "Por favor ingrese un teléfono";
pub const MSG_PHONE_PREFIX: &str = "El teléfono debe comenzar con 54";
pub const MSG_EMAIL_REQUIRED: &str = "Por favor ingrese un email";
pub const MSG_EMAIL_AT: &str = "El email debe contener @";
pub const MSG_ADDRESS_REQUIRED: &str = "Por favor ingrese una dirección";

pub const PHONE_PREFIX: &str = "54";
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// Field validators
// ============================================================================

/// Absent, empty and whitespace-only values are all missing.
pub fn required_text(raw: Option<&str>, missing: &str) -> FieldResult<String> {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(FieldError::missing(missing)),
    }
}

/// Letters (any script, accents included) and spaces only.
pub fn letters_only_name(value: &str) -> FieldResult<String> {
    if value.chars().all(|c| c.is_alphabetic() || c == ' ') {
        Ok(value.to_string())
    } else {
        Err(FieldError::format(MSG_NAME_LETTERS_ONLY))
    }
}

pub fn required_name(raw: Option<&str>, missing: &str) -> FieldResult<String> {
    required_text(raw, missing).and_then(|name| letters_only_name(&name))
}

/// Free-text phone: only presence is enforced.
pub fn phone_text(raw: Option<&str>) -> FieldResult<String> {
    required_text(raw, MSG_PHONE_REQUIRED)
}

/// Numeric phone carrying the country prefix, stored as an integer.
pub fn phone_with_prefix(raw: Option<&str>) -> FieldResult<i64> {
    let phone = required_text(raw, MSG_PHONE_REQUIRED)?;

    if !phone.chars().all(|c| c.is_ascii_digit()) {
        return Err(FieldError::format(MSG_PHONE_REQUIRED));
    }
    if !phone.starts_with(PHONE_PREFIX) {
        return Err(FieldError::format(MSG_PHONE_PREFIX));
    }

    phone
        .parse::<i64>()
        .map_err(|_| FieldError::format(MSG_PHONE_REQUIRED))
}

pub fn email_basic(raw: Option<&str>) -> FieldResult<String> {
    let email = required_text(raw, MSG_EMAIL_REQUIRED)?;
    if !email.contains('@') {
        return Err(FieldError::format(MSG_EMAIL_AT));
    }
    Ok(email)
}

pub fn email_domain(email: &str, suffix: &str) -> FieldResult<String> {
    if email.ends_with(suffix) {
        Ok(email.to_string())
    } else {
        Err(FieldError::Domain(format!(
            "Por favor el email debe ser del dominio {}",
            suffix
        )))
    }
}

/// Exact membership in a closed set. The empty "no selection" value never
/// matches.
pub fn enum_member<C: Choice>(raw: Option<&str>, rejected: &str) -> FieldResult<C> {
    match raw {
        None => Err(FieldError::missing(rejected)),
        Some(value) if value.trim().is_empty() => Err(FieldError::missing(rejected)),
        Some(value) => C::parse(value).ok_or_else(|| FieldError::domain(rejected)),
    }
}

/// Messages used by [`bounded_int`].
pub struct BoundedIntMessages<'a> {
    pub missing: &'a str,
    pub not_positive: &'a str,
    pub out_of_range: &'a str,
}

/// Integer within `[lo, hi]`. Negative and non-integer input get the
/// `not_positive` message; anything else outside the bounds (zero included)
/// gets `out_of_range`.
pub fn bounded_int(
    raw: Option<&str>,
    lo: i64,
    hi: i64,
    messages: &BoundedIntMessages<'_>,
) -> FieldResult<i64> {
    let text = required_text(raw, messages.missing)?;
    let value = text
        .parse::<i64>()
        .map_err(|_| FieldError::format(messages.not_positive))?;

    if value < 0 {
        return Err(FieldError::domain(messages.not_positive));
    }
    if value < lo || value > hi {
        return Err(FieldError::domain(messages.out_of_range));
    }
    Ok(value)
}

/// Finite decimal strictly greater than zero.
pub fn positive_decimal(raw: Option<&str>, missing: &str, not_positive: &str) -> FieldResult<f64> {
    let text = required_text(raw, missing)?;
    let value = text
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FieldError::format(missing))?;

    if value <= 0.0 {
        return Err(FieldError::domain(not_positive));
    }
    Ok(value)
}

/// Calendar date in `YYYY-MM-DD`.
pub fn date(raw: Option<&str>, missing: &str, invalid: &str) -> FieldResult<NaiveDate> {
    let text = required_text(raw, missing)?;
    NaiveDate::parse_from_str(&text, DATE_FORMAT).map_err(|_| FieldError::format(invalid))
}
