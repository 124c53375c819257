//! Form-friendly payload fields.
//!
//! Admin forms post numbers as strings and leave optional inputs blank, so
//! payload fields are read as raw JSON and coerced per field. A field that
//! fails coercion becomes [`Patch::Invalid`] instead of failing the whole
//! body, which lets validation report every offending field at once.

use crate::model::status::{ImageProvider, RecordStatus};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use shared::errors::POSITION_PARAM;
use std::borrow::Cow;
use uuid::Uuid;
use validator::{ValidateEmail, ValidateUrl, ValidationError, ValidationErrors};

#[derive(Debug, Clone, PartialEq)]
pub enum Patch<T> {
    Missing,
    Null,
    Value(T),
    Invalid(&'static str),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Missing
    }
}

impl<T> Patch<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Patch::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Patch::Missing)
    }
}

impl<T: Clone> Patch<T> {
    /// `None` leaves the stored value alone, `Some(None)` clears it.
    pub fn to_change(&self) -> Option<Option<T>> {
        match self {
            Patch::Missing | Patch::Invalid(_) => None,
            Patch::Null => Some(None),
            Patch::Value(v) => Some(Some(v.clone())),
        }
    }
}

impl Patch<String> {
    /// Blank text in a nullable field means "no value".
    pub fn non_blank(&self) -> Option<&String> {
        self.value().filter(|s| !s.is_empty())
    }

    pub fn to_text_change(&self) -> Option<Option<String>> {
        match self {
            Patch::Value(v) if v.is_empty() => Some(None),
            other => other.to_change(),
        }
    }
}

pub trait Lenient: Sized {
    fn coerce(value: Value) -> Result<Self, &'static str>;
}

impl Lenient for String {
    fn coerce(value: Value) -> Result<Self, &'static str> {
        match value {
            Value::String(s) => Ok(s.trim().to_string()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err("Expected string"),
        }
    }
}

impl Lenient for i64 {
    fn coerce(value: Value) -> Result<Self, &'static str> {
        let number = match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    return Ok(i);
                }
                n.as_f64().ok_or("Expected number")?
            }
            Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err("Expected number, received empty string");
                }
                if let Ok(i) = trimmed.parse::<i64>() {
                    return Ok(i);
                }
                trimmed
                    .parse::<f64>()
                    .map_err(|_| "Expected number, received text")?
            }
            _ => return Err("Expected number"),
        };

        if !number.is_finite() || number.fract() != 0.0 {
            return Err("Expected integer, received float");
        }
        if number.abs() > i64::MAX as f64 {
            return Err("Number too large");
        }
        Ok(number as i64)
    }
}

impl Lenient for RecordStatus {
    fn coerce(value: Value) -> Result<Self, &'static str> {
        match value {
            Value::String(s) => s
                .trim()
                .parse()
                .map_err(|_| "Invalid enum value. Expected 'ACTIVE' | 'INACTIVE'"),
            _ => Err("Invalid enum value. Expected 'ACTIVE' | 'INACTIVE'"),
        }
    }
}

impl Lenient for ImageProvider {
    fn coerce(value: Value) -> Result<Self, &'static str> {
        match value {
            Value::String(s) => s
                .trim()
                .to_lowercase()
                .parse()
                .map_err(|_| "Expected 'local' | 'cloudinary' | 'external'"),
            _ => Err("Expected 'local' | 'cloudinary' | 'external'"),
        }
    }
}

impl Lenient for Uuid {
    fn coerce(value: Value) -> Result<Self, &'static str> {
        match value {
            Value::String(s) => Uuid::parse_str(s.trim()).map_err(|_| "Invalid id"),
            _ => Err("Invalid id"),
        }
    }
}

impl<'de, T: Lenient> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(match value {
            Value::Null => Patch::Null,
            other => match T::coerce(other) {
                Ok(v) => Patch::Value(v),
                Err(message) => Patch::Invalid(message),
            },
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Must be present and non-null.
    Required,
    /// May be absent, but not null.
    Optional,
    /// May be absent or null.
    Nullable,
}

/// Accumulates field errors for a hand-written `Validate` impl.
///
/// Each error carries a `position` param, the order in which its field first
/// failed, so issues come out in the order the checks run.
#[derive(Debug)]
pub struct Checks {
    errors: ValidationErrors,
    fields: Vec<&'static str>,
}

impl Default for Checks {
    fn default() -> Self {
        Self {
            errors: ValidationErrors::new(),
            fields: Vec::new(),
        }
    }
}

impl Checks {
    pub fn fail(&mut self, field: &'static str, code: &'static str, message: impl Into<Cow<'static, str>>) {
        let position = match self.fields.iter().position(|f| *f == field) {
            Some(position) => position,
            None => {
                self.fields.push(field);
                self.fields.len() - 1
            }
        };

        let mut error = ValidationError::new(code).with_message(message.into());
        error.add_param(Cow::Borrowed(POSITION_PARAM), &position);
        self.errors.add(field, error);
    }

    /// Records presence and coercion problems, yielding the value when usable.
    pub fn present<'a, T>(
        &mut self,
        field: &'static str,
        patch: &'a Patch<T>,
        presence: Presence,
    ) -> Option<&'a T> {
        match (patch, presence) {
            (Patch::Value(v), _) => Some(v),
            (Patch::Invalid(message), _) => {
                self.fail(field, "invalid_type", *message);
                None
            }
            (Patch::Missing, Presence::Required) | (Patch::Null, Presence::Required) => {
                self.fail(field, "required", "Required");
                None
            }
            (Patch::Null, Presence::Optional) => {
                self.fail(field, "invalid_type", "Expected value, received null");
                None
            }
            _ => None,
        }
    }

    pub fn text(
        &mut self,
        field: &'static str,
        patch: &Patch<String>,
        presence: Presence,
        min: usize,
        max: usize,
    ) {
        let Some(value) = self.present(field, patch, presence) else {
            return;
        };
        if presence == Presence::Nullable && value.is_empty() {
            return;
        }

        let len = value.chars().count();
        if len < min {
            self.fail(
                field,
                "length",
                format!("String must contain at least {min} character(s)"),
            );
        } else if len > max {
            self.fail(
                field,
                "length",
                format!("String must contain at most {max} character(s)"),
            );
        }
    }

    pub fn whole(
        &mut self,
        field: &'static str,
        patch: &Patch<i64>,
        presence: Presence,
        min: i64,
        max: i64,
    ) {
        let Some(value) = self.present(field, patch, presence) else {
            return;
        };

        if *value < min {
            self.fail(
                field,
                "range",
                format!("Number must be greater than or equal to {min}"),
            );
        } else if *value > max {
            self.fail(
                field,
                "range",
                format!("Number must be less than or equal to {max}"),
            );
        }
    }

    pub fn email(&mut self, field: &'static str, patch: &Patch<String>, presence: Presence) {
        if let Some(value) = self.present(field, patch, presence) {
            if !value.is_empty() && !value.validate_email() {
                self.fail(field, "email", "Invalid email");
            }
        }
    }

    /// Absolute URL, or a path under the local uploads mount.
    pub fn image_url(&mut self, field: &'static str, patch: &Patch<String>, presence: Presence) {
        if let Some(value) = self.present(field, patch, presence) {
            if presence == Presence::Nullable && value.is_empty() {
                return;
            }
            if !is_image_url(value) {
                self.fail(field, "url", "Invalid image URL");
            }
        }
    }

    pub fn finish(self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

pub fn is_image_url(value: &str) -> bool {
    value.starts_with("/uploads/") || value.validate_url()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        count: Patch<i64>,
        #[serde(default)]
        label: Patch<String>,
    }

    fn probe(value: Value) -> Probe {
        serde_json::from_value(value).expect("probe")
    }

    #[test]
    fn numbers_coerce_from_strings() {
        assert_eq!(probe(json!({"count": "42"})).count, Patch::Value(42));
        assert_eq!(probe(json!({"count": " 7 "})).count, Patch::Value(7));
        assert_eq!(probe(json!({"count": 3.0})).count, Patch::Value(3));
        assert!(matches!(probe(json!({"count": "1.5"})).count, Patch::Invalid(_)));
        assert!(matches!(probe(json!({"count": ""})).count, Patch::Invalid(_)));
        assert!(matches!(probe(json!({"count": "abc"})).count, Patch::Invalid(_)));
        assert!(matches!(probe(json!({"count": [1]})).count, Patch::Invalid(_)));
    }

    #[test]
    fn presence_is_tracked() {
        let missing = probe(json!({}));
        assert!(missing.count.is_missing());
        assert_eq!(probe(json!({"count": null})).count, Patch::Null);
    }

    #[test]
    fn text_is_trimmed_and_numbers_become_text() {
        assert_eq!(
            probe(json!({"label": "  hi  "})).label,
            Patch::Value("hi".to_string())
        );
        assert_eq!(
            probe(json!({"label": 12})).label,
            Patch::Value("12".to_string())
        );
    }

    #[test]
    fn blank_text_clears_nullable_field() {
        let blank: Patch<String> = Patch::Value(String::new());
        assert_eq!(blank.to_text_change(), Some(None));
        assert_eq!(Patch::<String>::Missing.to_text_change(), None);
    }

    #[test]
    fn image_urls() {
        assert!(is_image_url("/uploads/a.jpg"));
        assert!(is_image_url("https://cdn.example.com/a.jpg"));
        assert!(!is_image_url("uploads/a.jpg"));
        assert!(!is_image_url("not a url"));
    }
}
