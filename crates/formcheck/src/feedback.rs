//! Stateless projection of validation results onto what the page renders

use serde::Serialize;

use crate::result::{FieldResult, Severity};

/// Label colour for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelColor {
    Black,
    Red,
    Orange,
}

impl LabelColor {
    pub fn as_str(self) -> &'static str {
        match self {
            LabelColor::Black => "black",
            LabelColor::Red => "red",
            LabelColor::Orange => "orange",
        }
    }
}

pub const MESSAGE_CLASS: &str = "validation-message";
pub const ERROR_CLASS: &str = "validation-message error";
pub const WARNING_CLASS: &str = "validation-message warning";

/// What the presentation layer shows for one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub color: LabelColor,
    pub message: String,
    pub class: &'static str,
}

impl Feedback {
    /// No feedback: black label, empty message
    pub fn neutral() -> Self {
        Self {
            color: LabelColor::Black,
            message: String::new(),
            class: MESSAGE_CLASS,
        }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::neutral()
    }
}

impl From<&FieldResult> for Feedback {
    fn from(result: &FieldResult) -> Self {
        match result.severity {
            Severity::Ok => Feedback::neutral(),
            Severity::Missing => Feedback {
                color: LabelColor::Red,
                message: result.message.clone(),
                class: ERROR_CLASS,
            },
            // Password mismatch carries no inline text, only the colour
            Severity::Invalid if result.message.is_empty() => Feedback {
                color: LabelColor::Orange,
                message: String::new(),
                class: MESSAGE_CLASS,
            },
            Severity::Invalid => Feedback {
                color: LabelColor::Orange,
                message: result.message.clone(),
                class: WARNING_CLASS,
            },
        }
    }
}
