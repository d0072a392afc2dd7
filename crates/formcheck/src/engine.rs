// File: src/engine.rs
// Purpose: Per-field and whole-form validation

use std::collections::BTreeMap;
use tracing::{debug, info};

use crate::field::{Field, FieldKind};
use crate::result::{FieldResult, FormResult, Notification, Severity};
use crate::rules::{FieldRule, RuleSet};

/// Trim the way browsers do: Unicode whitespace plus U+FEFF
pub fn js_trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Validate a text value against a rule
///
/// Empty (after trimming) is `Missing` unless the rule is optional. A
/// non-empty value is checked, untrimmed, against the rule's active pattern.
pub fn validate(field: Field, raw: &str, rule: &FieldRule) -> FieldResult {
    let pattern = rule.active_pattern(raw);

    let result = if js_trim(raw).is_empty() {
        if rule.required {
            FieldResult::missing(field.missing_message())
        } else {
            FieldResult::ok()
        }
    } else {
        match pattern {
            Some(p) if !p.is_match(raw) => FieldResult::invalid(rule.message.clone()),
            _ => FieldResult::ok(),
        }
    };

    debug!(field = %field, severity = ?result.severity, "validated field");
    result
}

/// Validate a choice field by presence of a selection
pub fn validate_choice(field: Field, selected: bool) -> FieldResult {
    let result = if selected {
        FieldResult::ok()
    } else {
        FieldResult::missing(field.missing_message())
    };

    debug!(field = %field, severity = ?result.severity, "validated choice");
    result
}

/// Validate the confirmation against the password as typed
///
/// A mismatch is `Invalid` with no inline message; the caller raises
/// [`Notification::PasswordMismatch`] instead.
pub fn validate_confirmation(rule: &FieldRule, confirm: &str, password: &str) -> FieldResult {
    if js_trim(confirm).is_empty() {
        return if rule.required {
            FieldResult::missing(Field::ConfirmPassword.missing_message())
        } else {
            FieldResult::ok()
        };
    }

    if confirm != password {
        debug!("confirmation does not match password");
        return FieldResult::invalid("");
    }

    FieldResult::ok()
}

impl RuleSet {
    /// Validate one field by name
    ///
    /// Choice fields count any non-empty value as a selection. The
    /// confirmation is checked on its own; compare against the password
    /// with [`RuleSet::validate_form`].
    pub fn validate(&self, field: Field, raw: &str) -> FieldResult {
        match field.kind() {
            FieldKind::Choice => validate_choice(field, !raw.is_empty()),
            FieldKind::Text => self.validate_text(field, raw, raw),
        }
    }

    /// A text field with no rule accepts anything
    fn validate_text(&self, field: Field, raw: &str, password: &str) -> FieldResult {
        match self.rule(field) {
            Some(rule) if field == Field::ConfirmPassword => {
                validate_confirmation(rule, raw, password)
            }
            Some(rule) => validate(field, raw, rule),
            None => FieldResult::ok(),
        }
    }

    /// Validate every field of the form
    ///
    /// Fields absent from `values` read as empty. A choice field is
    /// selected according to `selections`, or, when it has no entry there,
    /// if its entry in `values` is non-empty.
    pub fn validate_form(
        &self,
        values: &BTreeMap<Field, String>,
        selections: &BTreeMap<Field, bool>,
    ) -> FormResult {
        let value = |field: Field| values.get(&field).map(String::as_str).unwrap_or("");

        let mut fields = BTreeMap::new();
        let mut notifications = Vec::new();

        for field in Field::ALL {
            let result = match field.kind() {
                FieldKind::Choice => {
                    let selected = selections
                        .get(&field)
                        .copied()
                        .unwrap_or_else(|| !value(field).is_empty());
                    validate_choice(field, selected)
                }
                FieldKind::Text => {
                    let result =
                        self.validate_text(field, value(field), value(Field::Password));
                    if field == Field::ConfirmPassword && result.severity == Severity::Invalid {
                        notifications.push(Notification::PasswordMismatch);
                    }
                    result
                }
            };
            fields.insert(field, result);
        }

        let passed: Vec<bool> = fields.values().map(FieldResult::is_ok).collect();
        let all_valid = passed.iter().all(|ok| *ok);

        if all_valid {
            notifications.push(Notification::Submitted);
        }

        info!(
            all_valid,
            failures = passed.iter().filter(|ok| !**ok).count(),
            "validated form"
        );

        FormResult {
            fields,
            all_valid,
            notifications,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::Pattern;
    use rstest::rstest;

    fn rules() -> &'static RuleSet {
        RuleSet::standard()
    }

    #[rstest]
    #[case(Field::Username, "user123", Severity::Ok)]
    #[case(Field::Username, "abc", Severity::Invalid)]
    #[case(Field::Username, "User123", Severity::Invalid)]
    #[case(Field::Username, "abcdefghijklm", Severity::Invalid)]
    #[case(Field::Username, "   ", Severity::Missing)]
    #[case(Field::Email, "a@b.com", Severity::Ok)]
    #[case(Field::Email, "someone@school.edu", Severity::Ok)]
    #[case(Field::Email, "a@b.io", Severity::Invalid)]
    #[case(Field::Email, "a b@c.com", Severity::Invalid)]
    #[case(Field::Email, "", Severity::Missing)]
    #[case(Field::Phone, "(123)-456-7890", Severity::Ok)]
    #[case(Field::Phone, "123-456-7890", Severity::Invalid)]
    #[case(Field::Phone, "(123) 456-7890", Severity::Invalid)]
    #[case(Field::Password, "abcdefghi", Severity::Ok)]
    #[case(Field::Password, "Abcdefgh1!", Severity::Ok)]
    #[case(Field::Password, "Abcdef1!", Severity::Invalid)]
    #[case(Field::Password, "abcdefgh!", Severity::Invalid)]
    #[case(Field::Password, "\t", Severity::Missing)]
    #[case(Field::Password, "Abcdefg1!\r", Severity::Invalid)]
    #[case(Field::Password, "Abcdefg1!\u{2028}", Severity::Invalid)]
    #[case(Field::Password, "Abcde1!\u{1F600}", Severity::Ok)]
    #[case(Field::Username, "\u{FEFF}", Severity::Missing)]
    #[case(Field::Email, " \u{FEFF}\n", Severity::Missing)]
    #[case(Field::Email, "a\u{FEFF}b@c.com", Severity::Invalid)]
    fn test_text_fields(#[case] field: Field, #[case] value: &str, #[case] expected: Severity) {
        assert_eq!(rules().validate(field, value).severity, expected);
    }

    #[test]
    fn test_messages() {
        let rules = rules();
        assert_eq!(
            rules.validate(Field::Username, "").message,
            "Please Enter Username"
        );
        assert_eq!(
            rules.validate(Field::Username, "x").message,
            "Please Enter valid username"
        );
        assert_eq!(
            rules.validate(Field::Phone, "555").message,
            "Please Enter valid phone number"
        );
        assert_eq!(
            rules.validate(Field::Password, "short").message,
            "Please Enter Password"
        );
        assert_eq!(rules.validate(Field::Email, "a@b.com").message, "");
    }

    #[test]
    fn test_js_trim() {
        assert_eq!(js_trim("\u{FEFF} ab \t"), "ab");
        assert_eq!(js_trim("\u{FEFF}"), "");
    }

    #[test]
    fn test_confirmation_bom_only_is_missing() {
        let rule = rules().rule(Field::ConfirmPassword).unwrap();
        let result = validate_confirmation(rule, "\u{FEFF}", "abcdefghi");
        assert_eq!(result.severity, Severity::Missing);
    }

    #[test]
    fn test_text_field_without_rule_agrees() {
        let mut rules = RuleSet::defaults().unwrap();
        assert!(rules.remove_rule(Field::Username).is_some());

        assert!(rules.validate(Field::Username, "").is_ok());
        let form = rules.validate_form(&BTreeMap::new(), &BTreeMap::new());
        assert_eq!(form.severity(Field::Username), Some(Severity::Ok));
        assert_eq!(form.severity(Field::Email), Some(Severity::Missing));
    }

    #[test]
    fn test_pattern_checks_untrimmed_value() {
        assert_eq!(
            rules().validate(Field::Username, " user123 ").severity,
            Severity::Invalid
        );
    }

    #[test]
    fn test_optional_rule_accepts_empty() {
        let rule = FieldRule::new(Field::Phone)
            .with_pattern(Pattern::new(Field::Phone, r"^[0-9]+$").unwrap())
            .optional();
        assert!(validate(Field::Phone, "", &rule).is_ok());
        assert_eq!(
            validate(Field::Phone, "abc", &rule).severity,
            Severity::Invalid
        );
    }

    #[test]
    fn test_rule_without_pattern_accepts_any_value() {
        let rule = FieldRule::new(Field::Username);
        assert!(validate(Field::Username, "Anything At All!", &rule).is_ok());
    }

    #[test]
    fn test_confirmation() {
        let rule = rules().rule(Field::ConfirmPassword).unwrap();
        assert!(validate_confirmation(rule, "abcdefghi", "abcdefghi").is_ok());

        let mismatch = validate_confirmation(rule, "abcdefghj", "abcdefghi");
        assert_eq!(mismatch.severity, Severity::Invalid);
        assert!(mismatch.message.is_empty());

        let missing = validate_confirmation(rule, " ", "abcdefghi");
        assert_eq!(missing.severity, Severity::Missing);
        assert_eq!(missing.message, "Please Enter Confirm Password");
    }

    #[test]
    fn test_choice() {
        assert!(validate_choice(Field::Gender, true).is_ok());
        let missing = validate_choice(Field::AgeGroup, false);
        assert_eq!(missing.severity, Severity::Missing);
        assert_eq!(missing.message, "Please Select Age Group");
        assert_eq!(
            rules().validate(Field::AgeGroup, "").severity,
            Severity::Missing
        );
        assert!(rules().validate(Field::AgeGroup, "18-25").is_ok());
    }
}
