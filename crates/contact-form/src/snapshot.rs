// File: contact-form/src/snapshot.rs
// Purpose: Immutable record of an accepted submission

use serde::{Deserialize, Serialize};

/// Field values captured at the moment a submit passes validation.
///
/// The sole input to the confirmation view. Never updated in place; every
/// accepted submit produces a fresh copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}
