//! Validation outcomes

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::Field;

/// Classification of a validation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    /// Required value is empty
    Missing,
    /// Value present but does not match
    Invalid,
}

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldResult {
    pub severity: Severity,
    pub message: String,
}

impl FieldResult {
    pub fn ok() -> Self {
        Self {
            severity: Severity::Ok,
            message: String::new(),
        }
    }

    pub fn missing(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Missing,
            message: message.into(),
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Invalid,
            message: message.into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.severity == Severity::Ok
    }
}

/// Out-of-band event the presentation layer shows as a modal alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    PasswordMismatch,
    Submitted,
}

impl Notification {
    pub fn kind(self) -> &'static str {
        match self {
            Notification::PasswordMismatch => "passwordMismatch",
            Notification::Submitted => "submitted",
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            Notification::PasswordMismatch => "passwords do not match",
            Notification::Submitted => "Form submitted successfully!",
        }
    }
}

impl Serialize for Notification {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Notification", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("text", self.text())?;
        state.end()
    }
}

/// Outcome of validating the whole form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResult {
    pub fields: BTreeMap<Field, FieldResult>,
    pub all_valid: bool,
    pub notifications: Vec<Notification>,
}

impl FormResult {
    pub fn get(&self, field: Field) -> Option<&FieldResult> {
        self.fields.get(&field)
    }

    pub fn severity(&self, field: Field) -> Option<Severity> {
        self.get(field).map(|r| r.severity)
    }

    /// Fields that did not pass, in form order
    pub fn failures(&self) -> impl Iterator<Item = (Field, &FieldResult)> {
        self.fields
            .iter()
            .filter(|(_, r)| !r.is_ok())
            .map(|(f, r)| (*f, r))
    }
}
