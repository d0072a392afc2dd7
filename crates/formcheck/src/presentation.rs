// File: src/presentation.rs
// Purpose: Collaborator traits for the page and the submit/clear/input lifecycle

use std::collections::BTreeMap;

use crate::feedback::Feedback;
use crate::field::Field;
use crate::result::{FormResult, Notification};
use crate::rules::RuleSet;

/// Read access to the current form inputs
///
/// An input the page does not have reads as empty.
pub trait FormInput {
    /// Raw value of a text field
    fn value(&self, field: Field) -> String;

    /// Checked option of a radio group, if any
    fn selection(&self, group: Field) -> Option<String>;

    /// Value of a single-select field; empty when nothing is chosen
    fn choice_value(&self, field: Field) -> String;

    /// Restore the inputs to their initial state
    fn reset(&mut self);
}

/// Where feedback and notifications are rendered
pub trait FeedbackSink {
    fn set_field_feedback(&mut self, field: Field, feedback: &Feedback);

    /// Blocking, modal-style notification
    fn notify(&mut self, notification: &Notification);
}

/// Drives validation from page events
pub struct FormController<'r, I, S> {
    rules: &'r RuleSet,
    input: I,
    sink: S,
}

impl<I: FormInput, S: FeedbackSink> FormController<'static, I, S> {
    /// Controller using the standard rules
    pub fn standard(input: I, sink: S) -> Self {
        Self::new(RuleSet::standard(), input, sink)
    }
}

impl<'r, I: FormInput, S: FeedbackSink> FormController<'r, I, S> {
    pub fn new(rules: &'r RuleSet, input: I, sink: S) -> Self {
        Self { rules, input, sink }
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (I, S) {
        (self.input, self.sink)
    }

    /// Read every field from the page
    pub fn collect(&self) -> (BTreeMap<Field, String>, BTreeMap<Field, bool>) {
        let values = Field::TEXT
            .into_iter()
            .map(|f| (f, self.input.value(f)))
            .collect();

        let mut selections = BTreeMap::new();
        selections.insert(Field::Gender, self.input.selection(Field::Gender).is_some());
        selections.insert(
            Field::AgeGroup,
            !self.input.choice_value(Field::AgeGroup).is_empty(),
        );

        (values, selections)
    }

    /// Validate the form, render feedback for every field, then raise the
    /// notifications
    pub fn on_submit(&mut self) -> FormResult {
        let (values, selections) = self.collect();
        let result = self.rules.validate_form(&values, &selections);

        for (field, field_result) in &result.fields {
            self.sink.set_field_feedback(*field, &Feedback::from(field_result));
        }
        for notification in &result.notifications {
            self.sink.notify(notification);
        }

        result
    }

    /// Neutralise all feedback and reset the inputs
    pub fn on_clear(&mut self) {
        let neutral = Feedback::neutral();
        for field in Field::ALL {
            self.sink.set_field_feedback(field, &neutral);
        }
        self.input.reset();
    }

    /// Clear a text field's feedback once it has any value
    ///
    /// Does not re-validate. Returns whether feedback was cleared.
    pub fn on_field_input(&mut self, field: Field) -> bool {
        if !Field::TEXT.contains(&field) || self.input.value(field).is_empty() {
            return false;
        }
        self.sink.set_field_feedback(field, &Feedback::neutral());
        true
    }
}
