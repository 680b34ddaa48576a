// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Contact form data model: field values, validation errors, and the
//! three-way submission state driving which view is shown.

/// Current contents of the four form fields. All fields start empty and are
/// reset to empty after a confirmed successful submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    /// Merge a single changed field into the values, leaving the rest untouched.
    pub fn set(&mut self, field: Field, text: String) {
        match field {
            Field::FirstName => self.first_name = text,
            Field::LastName => self.last_name = text,
            Field::Email => self.email = text,
            Field::Message => self.message = text,
        }
    }
}

/// Identifies one of the editable form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Message,
}

/// Per-field validation errors. `None` means "no error for that field".
///
/// Recomputed wholesale on each submit attempt and fully replaced, never
/// patched incrementally, so it is never stale relative to the last
/// validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FormErrors {
    /// True when no field carries an error.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.message.is_none()
    }
}

/// UI mode: editing, sending, or confirmed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Submitted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_merges_only_the_changed_field() {
        let mut values = FormValues {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@mail.com".into(),
            message: "Hello".into(),
        };

        values.set(Field::Email, "ada@example.org".into());

        assert_eq!(values.email, "ada@example.org");
        assert_eq!(values.first_name, "Ada");
        assert_eq!(values.last_name, "Lovelace");
        assert_eq!(values.message, "Hello");
    }

    #[test]
    fn errors_default_is_empty() {
        assert!(FormErrors::default().is_empty());
    }

    #[test]
    fn errors_with_any_field_set_are_not_empty() {
        let errors = FormErrors {
            message: Some("Please write a message".into()),
            ..Default::default()
        };
        assert!(!errors.is_empty());
    }
}
