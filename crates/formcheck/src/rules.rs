// File: src/rules.rs
// Purpose: Field rules and the rule set the engine validates against

use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::field::{Field, FieldKind, UnknownField};
use crate::pattern::Pattern;

/// Username: only lowercase letters or numbers, 4-12 characters
pub const USERNAME_PATTERN: &str = r"^[a-z0-9]{4,12}$";

/// Email: must contain @ and end with .net, .com, .org, or .edu
///
/// U+FEFF counts as whitespace, as it does in browsers.
pub const EMAIL_PATTERN: &str = r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.(net|com|org|edu)$";

/// Phone: (123)-456-7890 format
pub const PHONE_PATTERN: &str = r"^\([0-9]{3}\)-[0-9]{3}-[0-9]{4}$";

/// Password: letters, digits, or underscores, at least 9 characters
pub const PASSWORD_PATTERN: &str = r"^[a-zA-Z0-9_]{9,}$";

/// Bonus password: no line terminators, with a lowercase letter, an
/// uppercase letter, a digit and a special character
pub const PASSWORD_BONUS_CLAUSES: [&str; 5] = [
    r"^[^\n\r\x{2028}\x{2029}]*$",
    r"[a-z]",
    r"[A-Z]",
    r"[0-9]",
    r#"[!@#$%^&*()_+\-=\[\]{};':"\\|,.<>/?]"#,
];

/// Bonus password length, in UTF-16 code units
pub const PASSWORD_BONUS_MIN_UNITS: usize = 9;

/// The bonus password pattern, clauses plus minimum length
pub fn password_bonus() -> Result<Pattern, RuleError> {
    Ok(Pattern::all_of(Field::Password, &PASSWORD_BONUS_CLAUSES)?
        .with_min_units(PASSWORD_BONUS_MIN_UNITS))
}

/// Errors raised while building a rule set
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("invalid pattern for {field}: '{pattern}': {reason}")]
    InvalidPattern {
        field: Field,
        pattern: String,
        reason: String,
    },

    #[error("pattern for {0} has no clauses")]
    EmptyPattern(Field),

    #[error("{0} is a choice field and takes no text rule")]
    NotText(Field),

    #[error("{field} does not support the '{key}' setting")]
    Unsupported { field: Field, key: &'static str },

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error("failed to read rule config {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse rule config {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Validation rule for one text field
#[derive(Debug, Clone)]
pub struct FieldRule {
    pub field: Field,
    pub required: bool,
    pub pattern: Option<Pattern>,
    /// Stronger pattern tried before `pattern`; when it matches it becomes
    /// the active pattern for that call
    pub bonus: Option<Pattern>,
    /// Message used when the value does not match the active pattern
    pub message: String,
}

impl FieldRule {
    /// Required rule with no pattern
    pub fn new(field: Field) -> Self {
        Self {
            field,
            required: true,
            pattern: None,
            bonus: None,
            message: format!("Please Enter valid {}", field.name()),
        }
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_bonus(mut self, bonus: Pattern) -> Self {
        self.bonus = Some(bonus);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Pattern the value is checked against: the bonus pattern when the
    /// value satisfies it, the primary pattern otherwise
    pub fn active_pattern(&self, value: &str) -> Option<&Pattern> {
        match &self.bonus {
            Some(bonus) if bonus.is_match(value) => Some(bonus),
            _ => self.pattern.as_ref(),
        }
    }
}

static STANDARD: Lazy<RuleSet> =
    Lazy::new(|| RuleSet::defaults().expect("built-in rule patterns compile"));

/// Rules for every text field of the form
///
/// Choice fields carry no rule; they are validated by selection alone.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: BTreeMap<Field, FieldRule>,
}

impl RuleSet {
    /// Shared, compiled-once standard rules
    pub fn standard() -> &'static RuleSet {
        &STANDARD
    }

    /// Build a fresh copy of the standard rules
    pub fn defaults() -> Result<Self, RuleError> {
        let rules = [
            FieldRule::new(Field::Username)
                .with_pattern(Pattern::new(Field::Username, USERNAME_PATTERN)?)
                .with_message("Please Enter valid username"),
            FieldRule::new(Field::Email)
                .with_pattern(Pattern::new(Field::Email, EMAIL_PATTERN)?)
                .with_message("Please Enter valid email"),
            FieldRule::new(Field::Phone)
                .with_pattern(Pattern::new(Field::Phone, PHONE_PATTERN)?)
                .with_message("Please Enter valid phone number"),
            FieldRule::new(Field::Password)
                .with_pattern(Pattern::new(Field::Password, PASSWORD_PATTERN)?)
                .with_bonus(password_bonus()?)
                .with_message("Please Enter Password"),
            FieldRule::new(Field::ConfirmPassword),
        ];

        Ok(Self {
            rules: rules.into_iter().map(|r| (r.field, r)).collect(),
        })
    }

    pub fn rule(&self, field: Field) -> Option<&FieldRule> {
        self.rules.get(&field)
    }

    /// Replace the rule for a text field
    pub fn set_rule(&mut self, rule: FieldRule) -> Result<(), RuleError> {
        if rule.field.kind() == FieldKind::Choice {
            return Err(RuleError::NotText(rule.field));
        }
        self.rules.insert(rule.field, rule);
        Ok(())
    }

    /// Drop the rule for a field; the field then accepts any value
    pub fn remove_rule(&mut self, field: Field) -> Option<FieldRule> {
        self.rules.remove(&field)
    }

    /// Rules in form order
    pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
        self.rules.values()
    }
}
