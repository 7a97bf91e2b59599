use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single contact form submission as it is persisted in the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Message => &mut self.message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown contact form field: {0:?}")]
pub struct UnknownContactFieldError(pub String);

impl FromStr for ContactField {
    type Err = UnknownContactFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownContactFieldError(s.into()))
    }
}

/// Holds the current input of the contact form.
///
/// Fields are updated one at a time and are never validated. The workflow
/// only ever works on a [`snapshot`](Self::snapshot), so edits made while a
/// submission is in flight do not leak into that submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    values: ContactSubmission,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `field` to `value`, leaving the other fields untouched.
    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        *self.values.get_mut(field) = value.into();
    }

    /// Clear all fields.
    pub fn reset(&mut self) {
        self.values = ContactSubmission::default();
    }

    pub fn snapshot(&self) -> ContactSubmission {
        self.values.clone()
    }

    pub fn get(&self, field: ContactField) -> &str {
        self.values.get(field)
    }

    pub fn is_empty(&self) -> bool {
        ContactField::ALL
            .into_iter()
            .all(|field| self.get(field).is_empty())
    }
}
