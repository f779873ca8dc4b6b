// File: contact-form/src/field.rs
// Purpose: Field identity: wire names, labels, requiredness

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// The four contact-form fields, in declaration order.
///
/// Declaration order is also error display order, so the derived `Ord` is
/// load-bearing for everything keyed by `Field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

impl Field {
    /// All fields in declaration order.
    pub const ALL: [Field; 4] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Message,
    ];

    /// Wire name used for input `name`/`id` attributes and form-data keys.
    pub fn name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    /// Label text as rendered next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name*",
            Field::LastName => "Last Name*",
            Field::Email => "Email*",
            Field::Message => "Message",
        }
    }

    /// Required fields can block submission; `message` never does.
    pub fn is_required(self) -> bool {
        !matches!(self, Field::Message)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejection for a form-data key that names no known field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" => Ok(Field::FirstName),
            "lastName" => Ok(Field::LastName),
            "email" => Ok(Field::Email),
            "message" => Ok(Field::Message),
            other => Err(UnknownField(other.to_string())),
        }
    }
}
