// File: src/submission.rs
// Purpose: Form values read from a TOML file and command-line flags

use anyhow::{Context, Result};
use formcheck::{Field, FormInput};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::FieldArgs;

/// One filled-in form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub confirm_password: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age_group: Option<String>,
}

impl Submission {
    /// Load a submission from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read form file: {:?}", path))?;

        let submission = toml::from_str(&content)
            .with_context(|| format!("Failed to parse form file: {:?}", path))?;

        Ok(submission)
    }

    /// Values given as flags replace those from the file
    pub fn merge(mut self, args: FieldArgs) -> Self {
        fn take(slot: &mut Option<String>, flag: Option<String>) {
            if flag.is_some() {
                *slot = flag;
            }
        }

        take(&mut self.username, args.username);
        take(&mut self.email, args.email);
        take(&mut self.phone, args.phone);
        take(&mut self.password, args.password);
        take(&mut self.confirm_password, args.confirm_password);
        take(&mut self.gender, args.gender);
        take(&mut self.age_group, args.age_group);
        self
    }

    fn slot(&self, field: Field) -> Option<&str> {
        match field {
            Field::Username => self.username.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Phone => self.phone.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::ConfirmPassword => self.confirm_password.as_deref(),
            Field::Gender => self.gender.as_deref(),
            Field::AgeGroup => self.age_group.as_deref(),
        }
    }
}

impl FormInput for Submission {
    fn value(&self, field: Field) -> String {
        self.slot(field).unwrap_or_default().to_string()
    }

    fn selection(&self, group: Field) -> Option<String> {
        self.slot(group)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    fn choice_value(&self, field: Field) -> String {
        self.value(field)
    }

    fn reset(&mut self) {
        *self = Submission::default();
    }
}
