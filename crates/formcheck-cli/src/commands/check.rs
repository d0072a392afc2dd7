use anyhow::{Context, Result};
use colored::Colorize;
use formcheck::{Config, FormController, FormResult, RuleSet};
use std::path::Path;
use tracing::debug;

use crate::render::TerminalSink;
use crate::submission::Submission;
use crate::FieldArgs;

/// Load the rule set, applying overrides from `config` when it exists
pub fn load_rules(config: &Path) -> Result<RuleSet> {
    let config = Config::load(config)
        .with_context(|| format!("Failed to load rule config: {:?}", config))?;
    debug!(overrides = config.rules.len(), "loaded rule config");
    config.rule_set().context("Failed to build validation rules")
}

/// Validate one submission against the rules
pub fn run(rules: &RuleSet, submission: Submission) -> (FormResult, TerminalSink) {
    let mut controller = FormController::new(rules, submission, TerminalSink::default());
    let result = controller.on_submit();
    let (_, sink) = controller.into_parts();
    (result, sink)
}

/// Returns whether the form passed
pub fn execute(config: &Path, fields: FieldArgs, file: Option<&Path>, json: bool) -> Result<bool> {
    let rules = load_rules(config)?;

    let submission = match file {
        Some(path) => Submission::load(path)?,
        None => Submission::default(),
    }
    .merge(fields);

    let (result, sink) = run(&rules, submission);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", "Validating form...".green().bold());
        println!();
        sink.print();
        if !result.all_valid {
            println!();
            println!(
                "{}",
                format!("{} field(s) need attention", result.failures().count()).red()
            );
        }
    }

    Ok(result.all_valid)
}
