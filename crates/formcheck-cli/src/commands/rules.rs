use anyhow::Result;
use colored::Colorize;
use formcheck::{Field, FieldKind, RuleSet};
use std::path::Path;

use super::check::load_rules;

/// One line per field describing what it accepts
pub fn describe(rules: &RuleSet) -> Vec<String> {
    let mut lines = Vec::new();

    for field in Field::ALL {
        if field.kind() == FieldKind::Choice {
            lines.push(format!("{}: a selection is required", field));
            continue;
        }

        let Some(rule) = rules.rule(field) else {
            continue;
        };

        let mut line = format!(
            "{}: {}",
            field,
            if rule.required { "required" } else { "optional" }
        );
        if field == Field::ConfirmPassword {
            line.push_str(", must equal password");
        }
        if let Some(pattern) = &rule.pattern {
            line.push_str(&format!(", pattern {}", pattern.sources().join(" & ")));
        }
        if let Some(bonus) = &rule.bonus {
            line.push_str(&format!(", bonus {}", bonus.sources().join(" & ")));
            if let Some(units) = bonus.min_units() {
                line.push_str(&format!(" (at least {} UTF-16 units)", units));
            }
        }
        lines.push(line);
    }

    lines
}

pub fn execute(config: &Path) -> Result<()> {
    let rules = load_rules(config)?;

    println!("{}", "Validation rules".green().bold());
    println!();
    for line in describe(&rules) {
        println!("  {}", line);
    }

    Ok(())
}
