//! Field validation applied at the admin write boundary.
//!
//! Records read back from the store are assumed valid; nothing here is
//! consulted when building the resume view.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

/// Collects field errors for one record.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    fn reject(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn required(&mut self, field: &str, value: &str) -> &mut Self {
        if value.trim().is_empty() {
            self.reject(field, "This field is required");
        }
        self
    }

    /// Rejects values outside 0..=100. Out-of-range input is never clamped.
    pub fn percentage(&mut self, field: &str, value: i32) -> &mut Self {
        if !(0..=100).contains(&value) {
            self.reject(field, format!("Must be between 0 and 100, got {value}"));
        }
        self
    }

    pub fn order(&mut self, value: i32) -> &mut Self {
        if value < 0 {
            self.reject("order", "Must not be negative");
        }
        self
    }

    pub fn year(&mut self, field: &str, value: i32) -> &mut Self {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            self.reject(
                field,
                format!("Must be a year between {MIN_YEAR} and {MAX_YEAR}"),
            );
        }
        self
    }

    /// Empty is allowed; otherwise an absolute http(s) URL.
    pub fn url(&mut self, field: &str, value: &str) -> &mut Self {
        let value = value.trim();
        if !value.is_empty() && !(value.starts_with("http://") || value.starts_with("https://")) {
            self.reject(field, "Must be an http:// or https:// URL");
        }
        self
    }

    pub fn email(&mut self, field: &str, value: &str) -> &mut Self {
        let value = value.trim();
        match value.split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
            _ if value.is_empty() => self.reject(field, "This field is required"),
            _ => self.reject(field, "Must be a valid email address"),
        }
        self
    }

    pub fn year_span(&mut self, field: &str, start: i32, end: Option<i32>) -> &mut Self {
        if let Some(end) = end {
            self.year(field, end);
            if end < start {
                self.reject(field, "Must not be earlier than the start year");
            }
        }
        self
    }

    pub fn date_span(
        &mut self,
        field: &str,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> &mut Self {
        if let (Some(start), Some(end)) = (start, end) {
            if end < start {
                self.reject(field, "Must not be earlier than the start date");
            }
        }
        self
    }

    /// Adds a rule that needs more context than a single field.
    pub fn check(&mut self, ok: bool, field: &str, message: &str) -> &mut Self {
        if !ok {
            self.reject(field, message);
        }
        self
    }

    pub fn finish(&mut self) -> Vec<FieldError> {
        std::mem::take(&mut self.errors)
    }
}

/// Renders field errors as a single line, e.g. for logs.
pub fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
