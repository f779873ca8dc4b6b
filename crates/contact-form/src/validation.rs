// File: contact-form/src/validation.rs
// Purpose: Per-field validation rules, shared by the live and submit paths

use contact_form_validation::{has_min_length, is_non_empty, is_valid_email};

use crate::field::Field;

/// Minimum character count for the first-name field.
const FIRST_NAME_MIN: usize = 5;

/// Apply the rule for one field to a candidate value.
///
/// Returns the inline error literal for a failing value, `None` for a valid
/// one. Both the per-edit path and the exhaustive submit path go through
/// this single table, so live and submit-time validation cannot diverge.
pub fn validate_value(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::FirstName => (!has_min_length(value, FIRST_NAME_MIN))
            .then_some("Error: firstName must have at least 5 characters."),
        Field::LastName => {
            (!is_non_empty(value)).then_some("Error: lastName is a required field.")
        }
        Field::Email => {
            (!is_valid_email(value)).then_some("Error: email must be a valid email address.")
        }
        Field::Message => None,
    }
}
