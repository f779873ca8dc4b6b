// File: contact-form/src/form.rs
// Purpose: Form state machine: field values, derived error set, submit gating

use std::collections::BTreeMap;

use crate::field::{Field, UnknownField};
use crate::snapshot::SubmissionSnapshot;
use crate::validation::validate_value;

/// Field -> current validation error, empty when the form is valid.
///
/// Purely derived from the field values; never mutated except by
/// revalidation. Iteration follows field declaration order.
pub type ErrorSet = BTreeMap<Field, String>;

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every rule passed; the snapshot holds the submitted values.
    Submitted(SubmissionSnapshot),
    /// At least one rule failed; the full error set stays queryable.
    Rejected,
}

/// Contact form state: one value per field, the derived error set, and the
/// submitted flag gating the confirmation view.
///
/// All transitions are synchronous: the error set is consistent with the
/// field values before any mutating method returns.
#[derive(Debug)]
pub struct ContactForm {
    values: BTreeMap<Field, String>,
    errors: ErrorSet,
    submitted: Option<SubmissionSnapshot>,
}

impl ContactForm {
    /// Fresh form: every field empty, no errors, unsubmitted.
    pub fn new() -> Self {
        Self {
            values: Field::ALL.iter().map(|&f| (f, String::new())).collect(),
            errors: ErrorSet::new(),
            submitted: None,
        }
    }

    /// Update one field and revalidate it immediately.
    ///
    /// Only the edited field's error entry changes: it appears exactly when
    /// the new value fails its rule, and disappears as soon as the value
    /// becomes valid, with no submit required.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        tracing::debug!(field = %field, chars = value.chars().count(), "field edited");
        self.values.insert(field, value);
        self.revalidate(field);
    }

    /// String-keyed variant of [`set_field`](Self::set_field) for form-data
    /// style callers. Unknown keys are rejected, not panicked on.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), UnknownField> {
        let field: Field = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Re-run every rule and gate the submit on the result.
    ///
    /// Validation covers all fields, touched or not, so a never-edited
    /// required field still blocks submission. Acceptance stores and
    /// returns a fresh snapshot; rejection leaves the form unsubmitted with
    /// the full error set exposed. Resubmitting unchanged valid values is
    /// accepted again and yields a snapshot with identical content.
    pub fn submit(&mut self) -> SubmitOutcome {
        for field in Field::ALL {
            self.revalidate(field);
        }

        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "submit rejected");
            return SubmitOutcome::Rejected;
        }

        let snapshot = SubmissionSnapshot {
            first_name: self.value(Field::FirstName).to_string(),
            last_name: self.value(Field::LastName).to_string(),
            email: self.value(Field::Email).to_string(),
            message: self.value(Field::Message).to_string(),
        };
        tracing::info!("submit accepted");
        self.submitted = Some(snapshot.clone());
        SubmitOutcome::Submitted(snapshot)
    }

    /// Current value of a field, empty until first edited.
    pub fn value(&self, field: Field) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or_default()
    }

    /// Live error set (query only).
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted.is_some()
    }

    /// Snapshot of the most recent accepted submit, if any.
    pub fn snapshot(&self) -> Option<&SubmissionSnapshot> {
        self.submitted.as_ref()
    }

    fn revalidate(&mut self, field: Field) {
        match validate_value(field, self.value(field)) {
            Some(message) => {
                self.errors.insert(field, message.to_string());
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_form_is_clean() {
        let form = ContactForm::new();
        assert!(form.errors().is_empty());
        assert!(!form.is_submitted());
        assert!(form.snapshot().is_none());
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
    }

    #[test]
    fn test_value_is_kept_as_typed() {
        let mut form = ContactForm::new();
        form.set_field(Field::FirstName, "  padded  ");
        assert_eq!(form.value(Field::FirstName), "  padded  ");
    }

    #[test]
    fn test_edit_revalidates_only_that_field() {
        let mut form = ContactForm::new();
        form.set_field(Field::Email, "sure");
        // Other required fields are empty but untouched, so no entries yet.
        assert_eq!(form.errors().len(), 1);
        assert!(form.errors().contains_key(&Field::Email));
    }

    #[test]
    fn test_rejected_submit_keeps_form_unsubmitted() {
        let mut form = ContactForm::new();
        assert_eq!(form.submit(), SubmitOutcome::Rejected);
        assert!(!form.is_submitted());
        assert!(form.snapshot().is_none());
    }
}
