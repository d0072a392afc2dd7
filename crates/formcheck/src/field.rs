//! Form fields known to the validation engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a field is validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text checked against a pattern
    Text,
    /// Validated by the presence of a selection
    Choice,
}

/// The seven fields of the sign-up form, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Username,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    Gender,
    AgeGroup,
}

impl Field {
    /// All fields in the order they appear on the form
    pub const ALL: [Field; 7] = [
        Field::Username,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
        Field::Gender,
        Field::AgeGroup,
    ];

    /// Fields whose feedback is cleared eagerly while the user types
    pub const TEXT: [Field; 5] = [
        Field::Username,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Element id used by the page (`confirmPassword`, `ageGroup`, ...)
    pub fn name(self) -> &'static str {
        match self {
            Field::Username => "username",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::Gender => "gender",
            Field::AgeGroup => "ageGroup",
        }
    }

    /// Human-readable name: the id capitalised, with a space before each
    /// inner capital (`confirmPassword` -> `Confirm Password`)
    pub fn display_name(self) -> String {
        let mut out = String::new();
        for (i, c) in self.name().chars().enumerate() {
            if i == 0 {
                out.extend(c.to_uppercase());
            } else {
                if c.is_ascii_uppercase() {
                    out.push(' ');
                }
                out.push(c);
            }
        }
        out
    }

    pub fn kind(self) -> FieldKind {
        match self {
            Field::Gender | Field::AgeGroup => FieldKind::Choice,
            _ => FieldKind::Text,
        }
    }

    /// Message shown when the field has no value
    pub fn missing_message(self) -> String {
        match self.kind() {
            FieldKind::Text => format!("Please Enter {}", self.display_name()),
            FieldKind::Choice => format!("Please Select {}", self.display_name()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string names no known field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
