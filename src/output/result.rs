//! Per-site discovery results

use crate::state::ExtractionState;
use serde::ser::{Serialize, Serializer};

/// Marker for a field that was searched without finding anything
pub const NOT_FOUND: &str = "Not found";

/// Marker for a field whose site run failed
pub const ERROR_MARKER: &str = "Error";

/// The emails or phone numbers of one result
///
/// Serializes as a JSON array when contacts were found, otherwise as the
/// `"Not found"` or `"Error"` marker string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactField {
    /// Sorted, de-duplicated contacts
    Found(Vec<String>),
    /// The run completed but found nothing
    NotFound,
    /// The run failed before it could search
    Error,
}

impl ContactField {
    /// Wraps a contact list, turning an empty list into [`ContactField::NotFound`]
    pub fn from_values(values: Vec<String>) -> Self {
        if values.is_empty() {
            ContactField::NotFound
        } else {
            ContactField::Found(values)
        }
    }

    /// The contacts, empty for either marker
    pub fn values(&self) -> &[String] {
        match self {
            ContactField::Found(values) => values,
            ContactField::NotFound | ContactField::Error => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, ContactField::Found(_))
    }
}

impl Serialize for ContactField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ContactField::Found(values) => values.serialize(serializer),
            ContactField::NotFound => serializer.serialize_str(NOT_FOUND),
            ContactField::Error => serializer.serialize_str(ERROR_MARKER),
        }
    }
}

/// Outcome of one site discovery run
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FinalResult {
    pub website: String,
    pub emails: ContactField,
    pub numbers: ContactField,
}

impl FinalResult {
    /// Assembles the result of a completed run
    pub fn from_state(website: &str, state: ExtractionState) -> Self {
        let (emails, phones) = state.into_contacts();
        Self {
            website: website.to_string(),
            emails: ContactField::from_values(emails),
            numbers: ContactField::from_values(phones),
        }
    }

    /// The result standing in for a failed run
    pub fn error(website: &str) -> Self {
        Self {
            website: website.to_string(),
            emails: ContactField::Error,
            numbers: ContactField::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.emails == ContactField::Error || self.numbers == ContactField::Error
    }
}
