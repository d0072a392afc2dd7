//! formcheck WASM
//!
//! WebAssembly bindings for the sign-up form validator.
//! The page calls these on submit and renders what comes back; the same
//! engine backs the command-line checker.

use formcheck::{Feedback, Field, FieldKind, FieldResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// A form input as the page reports it: text, a checked flag, or nothing
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum InputValue {
    Text(String),
    Flag(bool),
}

/// Inputs split the way the engine consumes them
#[derive(Debug, Default, PartialEq)]
pub struct FormInputs {
    pub values: BTreeMap<Field, String>,
    pub selections: BTreeMap<Field, bool>,
}

impl FormInputs {
    /// Sort raw page inputs into text values and choice selections
    ///
    /// `null` inputs read as empty. A flag on a text field is rejected.
    pub fn from_raw(raw: BTreeMap<String, Option<InputValue>>) -> Result<Self, String> {
        let mut inputs = FormInputs::default();

        for (name, input) in raw {
            let field: Field = name.parse().map_err(|e| format!("{}", e))?;
            match (field.kind(), input) {
                (_, None) => {}
                (_, Some(InputValue::Text(text))) => {
                    inputs.values.insert(field, text);
                }
                (FieldKind::Choice, Some(InputValue::Flag(selected))) => {
                    inputs.selections.insert(field, selected);
                }
                (FieldKind::Text, Some(InputValue::Flag(_))) => {
                    return Err(format!("{} expects text, got a boolean", field));
                }
            }
        }

        Ok(inputs)
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    // Plain objects rather than JS Maps for keyed results
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value.serialize(&serializer).map_err(JsValue::from)
}

fn reject(message: String) -> JsValue {
    web_sys::console::error_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}

/// Validate the whole form
///
/// # Example (JavaScript)
/// ```javascript
/// const result = validateForm({
///     username: 'user123',
///     email: 'a@b.com',
///     phone: '(123)-456-7890',
///     password: 'abcdefghi',
///     confirmPassword: 'abcdefghi',
///     gender: true,
///     ageGroup: '18-25',
/// });
/// if (result.allValid) { ... }
/// result.notifications.forEach(n => alert(n.text));
/// ```
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue) -> Result<JsValue, JsValue> {
    let raw: BTreeMap<String, Option<InputValue>> = serde_wasm_bindgen::from_value(values)
        .map_err(|e| reject(format!("Failed to parse form values: {}", e)))?;
    let inputs = FormInputs::from_raw(raw).map_err(reject)?;

    let result = formcheck::validate_form(&inputs.values, &inputs.selections);
    to_js(&result)
}

/// Validate a single field by its element id
///
/// The confirmation is only checked for presence here; `validateForm`
/// compares it with the password.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: &str) -> Result<JsValue, JsValue> {
    let field: Field = field_name
        .parse()
        .map_err(|e| reject(format!("{}", e)))?;
    to_js(&formcheck::validate_field(field, value))
}

/// Label colour, message and class to render for a field result
#[wasm_bindgen(js_name = feedbackFor)]
pub fn feedback_for(result: JsValue) -> Result<JsValue, JsValue> {
    let result: FieldResult = serde_wasm_bindgen::from_value(result)
        .map_err(|e| reject(format!("Failed to parse field result: {}", e)))?;
    to_js(&Feedback::from(&result))
}

/// Feedback that clears a field (used on reset and while typing)
#[wasm_bindgen(js_name = neutralFeedback)]
pub fn neutral_feedback() -> Result<JsValue, JsValue> {
    to_js(&Feedback::neutral())
}

/// Quick email check
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    formcheck::validate_field(Field::Email, email).is_ok()
}

/// Quick password check; returns the message when rejected
#[wasm_bindgen(js_name = validatePassword)]
pub fn validate_password_js(password: &str) -> Option<String> {
    let result = formcheck::validate_field(Field::Password, password);
    (!result.is_ok()).then_some(result.message)
}
