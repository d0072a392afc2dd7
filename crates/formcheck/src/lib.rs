//! formcheck
//!
//! Validation engine for the sign-up form: username, email, phone, password,
//! confirm-password, gender and age group. Pure Rust, used by both the WASM
//! client bindings and the command-line checker.
//!
//! Validation never fails: every outcome is a [`FieldResult`] with a
//! [`Severity`], collected into a [`FormResult`]. Rendering is a separate,
//! stateless [`Feedback`] projection applied by a [`FeedbackSink`].

use std::collections::BTreeMap;

pub mod config;
pub mod engine;
pub mod feedback;
pub mod field;
pub mod pattern;
pub mod presentation;
pub mod result;
pub mod rules;

pub use config::{Config, RuleOverride};
pub use engine::{js_trim, validate, validate_choice, validate_confirmation};
pub use feedback::{Feedback, LabelColor};
pub use field::{Field, FieldKind, UnknownField};
pub use pattern::Pattern;
pub use presentation::{FeedbackSink, FormController, FormInput};
pub use result::{FieldResult, FormResult, Notification, Severity};
pub use rules::{FieldRule, RuleError, RuleSet};

/// Validate the whole form with the standard rules
pub fn validate_form(
    values: &BTreeMap<Field, String>,
    selections: &BTreeMap<Field, bool>,
) -> FormResult {
    RuleSet::standard().validate_form(values, selections)
}

/// Validate one field with the standard rules
pub fn validate_field(field: Field, raw: &str) -> FieldResult {
    RuleSet::standard().validate(field, raw)
}
