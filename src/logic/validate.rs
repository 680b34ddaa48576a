// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Field validation for the contact form.
//!
//! Pure and deterministic: maps the current [`FormValues`] to a fresh
//! [`FormErrors`] with one human-readable message per failing field. Runs
//! only at submit time; nothing here touches UI or network state.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::form::{FormErrors, FormValues};

/// Accepts `local-part@domain.tld` with word characters, optional single
/// dot/hyphen separators, and a 2-3 character final segment.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$")
            .expect("email pattern must compile")
    })
}

/// Validate all four fields, returning a fully rebuilt error mapping.
pub fn validate(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::default();

    if values.first_name.trim().is_empty() {
        errors.first_name = Some("Please enter your firstname".into());
    }
    if values.last_name.trim().is_empty() {
        errors.last_name = Some("Please enter your lastname".into());
    }

    if values.email.is_empty() {
        errors.email = Some("Please enter your email".into());
    } else if !email_pattern().is_match(&values.email) {
        errors.email = Some("Please enter valid email".into());
    }

    if values.message.trim().is_empty() {
        errors.message = Some("Please write a message".into());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormValues {
        FormValues {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada.lovelace@mail.co".into(),
            message: "Hello there".into(),
        }
    }

    #[test]
    fn complete_values_produce_no_errors() {
        assert!(validate(&filled()).is_empty());
    }

    #[test]
    fn empty_first_name_yields_exactly_the_firstname_error() {
        let mut values = filled();
        values.first_name = String::new();

        let errors = validate(&values);

        assert_eq!(errors.first_name.as_deref(), Some("Please enter your firstname"));
        assert!(errors.last_name.is_none());
        assert!(errors.email.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn whitespace_only_fields_count_as_blank() {
        let mut values = filled();
        values.last_name = "   ".into();
        values.message = "\n\t".into();

        let errors = validate(&values);

        assert_eq!(errors.last_name.as_deref(), Some("Please enter your lastname"));
        assert_eq!(errors.message.as_deref(), Some("Please write a message"));
    }

    #[test]
    fn malformed_email_yields_only_the_email_error() {
        let values = FormValues {
            first_name: "a".into(),
            last_name: "b".into(),
            email: "not-an-email".into(),
            message: "hi".into(),
        };

        let errors = validate(&values);

        assert_eq!(errors.email.as_deref(), Some("Please enter valid email"));
        assert!(errors.first_name.is_none());
        assert!(errors.last_name.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn all_empty_values_yield_all_four_errors() {
        let errors = validate(&FormValues::default());

        assert_eq!(errors.first_name.as_deref(), Some("Please enter your firstname"));
        assert_eq!(errors.last_name.as_deref(), Some("Please enter your lastname"));
        assert_eq!(errors.email.as_deref(), Some("Please enter your email"));
        assert_eq!(errors.message.as_deref(), Some("Please write a message"));
    }

    #[test]
    fn email_pattern_accepts_separators_and_short_tlds() {
        for email in ["user@mail.com", "first.last@sub.domain.de", "a-b@c-d.org", "x@y.io"] {
            let mut values = filled();
            values.email = email.into();
            assert!(validate(&values).email.is_none(), "{email} should be valid");
        }
    }

    #[test]
    fn email_pattern_rejects_long_tlds_and_stray_separators() {
        for email in [
            "user@mail.museum",
            "user@@mail.com",
            ".user@mail.com",
            "user@mail",
            "user@mail..com",
        ] {
            let mut values = filled();
            values.email = email.into();
            assert_eq!(
                validate(&values).email.as_deref(),
                Some("Please enter valid email"),
                "{email} should be rejected"
            );
        }
    }
}
