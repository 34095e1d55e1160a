//! Declarative request schemas.
//!
//! A [`Schema`] is an ordered list of [`Field`] constraints. Checking a
//! payload walks the fields in declaration order and stops at the first
//! violation, so a rejected payload always yields exactly one
//! [`ValidationIssue`].

pub mod definitions;
pub mod issue;

use chrono::{DateTime, NaiveDate};
use serde_json::Value;
use validator::{ValidateEmail, ValidateLength};

pub use definitions::*;
pub use issue::ValidationIssue;

/// Field name reported when the payload itself is not a JSON object
pub const BODY_FIELD: &str = "body";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Integer,
    String,
}

impl FieldKind {
    fn describe(&self) -> &'static str {
        match self {
            FieldKind::Integer => "an integer",
            FieldKind::String => "a string",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    Email,
    /// Calendar date, `YYYY-MM-DD`
    Date,
    /// RFC 3339 timestamp
    DateTime,
}

impl StringFormat {
    fn matches(&self, value: &str) -> bool {
        match self {
            StringFormat::Email => value.validate_email(),
            StringFormat::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
            StringFormat::DateTime => DateTime::parse_from_rfc3339(value).is_ok(),
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            StringFormat::Email => "a valid email address",
            StringFormat::Date => "a date (YYYY-MM-DD)",
            StringFormat::DateTime => "an RFC 3339 date-time",
        }
    }
}

/// Constraint set for one payload field
#[derive(Debug, Clone)]
pub struct Field {
    name: &'static str,
    kind: FieldKind,
    required: bool,
    positive: bool,
    min_length: Option<usize>,
    format: Option<StringFormat>,
    allowed: Option<&'static [&'static str]>,
}

impl Field {
    fn of(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
            positive: false,
            min_length: None,
            format: None,
            allowed: None,
        }
    }

    pub fn integer(name: &'static str) -> Self {
        Self::of(name, FieldKind::Integer)
    }

    pub fn string(name: &'static str) -> Self {
        Self::of(name, FieldKind::String)
    }

    /// Absent and `null` values are accepted
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Strictly greater than zero. Integer kind only.
    pub fn positive(mut self) -> Self {
        self.positive = true;
        self
    }

    /// Minimum length in characters. String kind only.
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn format(mut self, format: StringFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Restrict a string field to a fixed set of values
    pub fn one_of(mut self, allowed: &'static [&'static str]) -> Self {
        self.allowed = Some(allowed);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn issue(&self, message: String) -> ValidationIssue {
        ValidationIssue::new(self.name, message)
    }

    /// Check one field value. `None` means the key was absent.
    pub fn check(&self, value: Option<&Value>) -> Result<(), ValidationIssue> {
        let value = match value {
            None | Some(Value::Null) if !self.required => return Ok(()),
            None | Some(Value::Null) => {
                return Err(self.issue(format!("{} is required", self.name)))
            }
            Some(value) => value,
        };

        if !self.has_kind(value) {
            return Err(self.issue(format!("{} must be {}", self.name, self.kind.describe())));
        }

        if self.positive {
            let positive = value.as_f64().map_or(false, |n| n > 0.0);
            if !positive {
                return Err(self.issue(format!("{} must be a positive number", self.name)));
            }
        }

        if let Value::String(text) = value {
            if let Some(min) = self.min_length {
                // Counted in characters, not bytes
                if !text.validate_length(Some(min as u64), None, None) {
                    let unit = if min == 1 { "character" } else { "characters" };
                    return Err(self.issue(format!(
                        "{} must contain at least {} {}",
                        self.name, min, unit
                    )));
                }
            }

            if let Some(format) = self.format {
                if !format.matches(text) {
                    return Err(self.issue(format!("{} must be {}", self.name, format.describe())));
                }
            }

            if let Some(allowed) = self.allowed {
                if !allowed.contains(&text.as_str()) {
                    return Err(self.issue(format!(
                        "{} must be one of: {}",
                        self.name,
                        allowed.join(", ")
                    )));
                }
            }
        }

        Ok(())
    }

    fn has_kind(&self, value: &Value) -> bool {
        match (self.kind, value) {
            // Only values representable as i64 count; 5.0 is a float in JSON terms
            (FieldKind::Integer, Value::Number(n)) => n.as_i64().is_some(),
            (FieldKind::String, Value::String(_)) => true,
            _ => false,
        }
    }
}

/// Named, ordered set of field constraints
#[derive(Debug, Clone)]
pub struct Schema {
    name: &'static str,
    fields: Vec<Field>,
}

impl Schema {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Validate a raw payload. Returns the first violation in field declaration order.
    pub fn check(&self, raw: &Value) -> Result<(), ValidationIssue> {
        let object = raw.as_object().ok_or_else(|| {
            ValidationIssue::new(BODY_FIELD, "request body must be a JSON object")
        })?;

        for field in &self.fields {
            field.check(object.get(field.name))?;
        }

        Ok(())
    }
}
