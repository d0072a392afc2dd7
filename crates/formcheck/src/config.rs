// File: src/config.rs
// Purpose: Rule overrides parsed from formcheck.toml

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::field::Field;
use crate::pattern::Pattern;
use crate::rules::{FieldRule, RuleError, RuleSet};

/// Rule configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Overrides keyed by field name (`username`, `confirmPassword`, ...)
    #[serde(default)]
    pub rules: BTreeMap<String, RuleOverride>,
}

/// Override for one text field; unset keys keep the standard rule
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RuleOverride {
    #[serde(default)]
    pub required: Option<bool>,

    /// Primary pattern; an empty string removes it
    #[serde(default)]
    pub pattern: Option<String>,

    /// Message shown when the value does not match
    #[serde(default)]
    pub message: Option<String>,

    /// Clauses of the bonus pattern; an empty list removes it
    #[serde(default)]
    pub bonus: Option<Vec<String>>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RuleError> {
        let path = path.as_ref();

        // Missing file means standard rules
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| RuleError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        toml::from_str(&content).map_err(|source| RuleError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load configuration from default path (./formcheck.toml)
    pub fn load_default() -> Result<Self, RuleError> {
        Self::load("formcheck.toml")
    }

    /// Standard rules with the overrides applied
    pub fn rule_set(&self) -> Result<RuleSet, RuleError> {
        let mut rules = RuleSet::defaults()?;

        for (name, over) in &self.rules {
            let field: Field = name.parse()?;
            let base = rules
                .rule(field)
                .cloned()
                .unwrap_or_else(|| FieldRule::new(field));
            rules.set_rule(over.apply(base)?)?;
        }

        Ok(rules)
    }
}

impl RuleOverride {
    fn apply(&self, mut rule: FieldRule) -> Result<FieldRule, RuleError> {
        let field = rule.field;

        // The confirmation is compared with the password, never matched
        if field == Field::ConfirmPassword {
            let unsupported = [
                ("pattern", self.pattern.is_some()),
                ("message", self.message.is_some()),
                ("bonus", self.bonus.is_some()),
            ];
            if let Some((key, _)) = unsupported.into_iter().find(|(_, set)| *set) {
                return Err(RuleError::Unsupported { field, key });
            }
        }

        if let Some(required) = self.required {
            rule.required = required;
        }
        if let Some(message) = &self.message {
            rule.message = message.clone();
        }
        if let Some(pattern) = &self.pattern {
            rule.pattern = if pattern.is_empty() {
                None
            } else {
                Some(Pattern::new(field, pattern)?)
            };
        }
        if let Some(clauses) = &self.bonus {
            rule.bonus = if clauses.is_empty() {
                None
            } else {
                Some(Pattern::all_of(field, clauses.as_slice())?)
            };
        }

        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_standard() {
        let config = toml::from_str::<Config>("").unwrap_or_default();
        assert!(config.rules.is_empty());

        let rules = config.rule_set().unwrap();
        let username = rules.rule(Field::Username).unwrap();
        assert_eq!(username.message, "Please Enter valid username");
    }

    #[test]
    fn test_override_username() {
        let toml = r#"
            [rules.username]
            pattern = "^[a-z]{2,4}$"
            message = "Short lowercase names only"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        let rules = config.rule_set().unwrap();

        let result = rules.validate(Field::Username, "user123");
        assert_eq!(result.message, "Short lowercase names only");
        assert!(rules.validate(Field::Username, "abc").is_ok());
        // Untouched rules stay standard
        assert!(rules.validate(Field::Phone, "(123)-456-7890").is_ok());
    }

    #[test]
    fn test_optional_phone() {
        let toml = r#"
            [rules.phone]
            required = false
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        let rules = config.rule_set().unwrap();
        assert!(rules.validate(Field::Phone, "").is_ok());
        assert!(!rules.validate(Field::Phone, "555").is_ok());
    }

    #[test]
    fn test_remove_bonus() {
        let toml = r#"
            [rules.password]
            bonus = []
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        let rules = config.rule_set().unwrap();
        assert!(rules.rule(Field::Password).unwrap().bonus.is_none());
        assert!(!rules.validate(Field::Password, "Abcdefgh1!").is_ok());
    }

    #[test]
    fn test_bad_pattern() {
        let toml = r#"
            [rules.email]
            pattern = "(unclosed"
        "#;
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.rule_set(),
            Err(RuleError::InvalidPattern { field: Field::Email, .. })
        ));
    }

    #[test]
    fn test_unknown_and_choice_fields() {
        let config: Config = toml::from_str("[rules.nickname]\nrequired = false").unwrap();
        assert!(matches!(config.rule_set(), Err(RuleError::UnknownField(_))));

        let config: Config = toml::from_str("[rules.gender]\nrequired = false").unwrap();
        assert!(matches!(config.rule_set(), Err(RuleError::NotText(Field::Gender))));
    }

    #[test]
    fn test_confirm_password_takes_only_required() {
        let config: Config =
            toml::from_str("[rules.confirmPassword]\npattern = \"^x$\"").unwrap();
        assert!(matches!(
            config.rule_set(),
            Err(RuleError::Unsupported {
                field: Field::ConfirmPassword,
                key: "pattern"
            })
        ));

        let config: Config =
            toml::from_str("[rules.confirmPassword]\nmessage = \"nope\"").unwrap();
        assert!(matches!(
            config.rule_set(),
            Err(RuleError::Unsupported { key: "message", .. })
        ));

        let config: Config =
            toml::from_str("[rules.confirmPassword]\nrequired = false").unwrap();
        let rules = config.rule_set().unwrap();
        assert!(rules.validate(Field::ConfirmPassword, "").is_ok());
    }

    #[test]
    fn test_load_missing_and_blank_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = Config::load(dir.path().join("absent.toml")).unwrap();
        assert!(missing.rules.is_empty());

        let blank = dir.path().join("blank.toml");
        fs::write(&blank, "   \n").unwrap();
        assert!(Config::load(&blank).unwrap().rules.is_empty());

        let broken = dir.path().join("broken.toml");
        fs::write(&broken, "[rules.username\n").unwrap();
        assert!(matches!(Config::load(&broken), Err(RuleError::Parse { .. })));
    }
}
