use colored::{ColoredString, Colorize};
use formcheck::{Feedback, FeedbackSink, Field, LabelColor, Notification};

/// Renders field feedback and alerts as terminal lines
#[derive(Debug, Default)]
pub struct TerminalSink {
    lines: Vec<String>,
}

impl TerminalSink {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }
}

fn paint(text: &str, color: LabelColor) -> ColoredString {
    match color {
        LabelColor::Black => text.normal(),
        LabelColor::Red => text.red().bold(),
        LabelColor::Orange => text.truecolor(255, 165, 0),
    }
}

impl FeedbackSink for TerminalSink {
    fn set_field_feedback(&mut self, field: Field, feedback: &Feedback) {
        let label = format!("{:<18}", field.display_name());
        let line = if feedback.is_neutral() {
            format!("  {} {}", paint(&label, feedback.color), "✓".green())
        } else {
            format!(
                "  {} {}",
                paint(&label, feedback.color),
                paint(&feedback.message, feedback.color)
            )
        };
        self.lines.push(line);
    }

    fn notify(&mut self, notification: &Notification) {
        let text = match notification {
            Notification::PasswordMismatch => format!("⚠ {}", notification.text()).yellow().bold(),
            Notification::Submitted => format!("✓ {}", notification.text()).green().bold(),
        };
        self.lines.push(String::new());
        self.lines.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formcheck::FieldResult;

    #[test]
    fn test_lines_carry_messages_and_alerts() {
        colored::control::set_override(false);

        let mut sink = TerminalSink::default();
        sink.set_field_feedback(
            Field::Email,
            &Feedback::from(&FieldResult::invalid("Please Enter valid email")),
        );
        sink.set_field_feedback(Field::Username, &Feedback::neutral());
        sink.notify(&Notification::PasswordMismatch);

        let lines = sink.lines();
        assert!(lines[0].contains("Email"));
        assert!(lines[0].ends_with("Please Enter valid email"));
        assert!(lines[1].contains("Username"));
        assert!(lines[1].ends_with('✓'));
        assert_eq!(lines[3], "⚠ passwords do not match");
    }
}
