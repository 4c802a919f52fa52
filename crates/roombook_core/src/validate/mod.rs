//! Form and field validators.
//!
//! # Responsibility
//! - Field-level checks (required, CNPJ, time, date, capacity, email).
//! - Per-record form checks that collect every problem into `FieldErrors`.
//!
//! # Invariants
//! - Validators never fail outward; an empty `FieldErrors` means valid.
//! - Date checks take `today` explicitly so callers control the clock.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod cnpj;
pub mod fields;
pub mod forms;

/// Field name -> messages, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` to the list for `field`.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// `Ok(())` when empty, otherwise the collected errors.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

#[cfg(test)]
mod tests {
    use super::FieldErrors;

    #[test]
    fn collects_messages_per_field_and_serializes_flat() {
        let mut errors = FieldErrors::new();
        errors.add("name", "Name is required");
        errors.add("capacity", "too small");
        errors.add("name", "second");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("name").unwrap().len(), 2);
        assert_eq!(
            errors.to_string(),
            "capacity: too small; name: Name is required; name: second"
        );

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["capacity"][0], "too small");
    }

    #[test]
    fn empty_errors_convert_to_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
    }
}
