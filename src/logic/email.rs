// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! EmailJS delivery collaborator.
//!
//! Responsibilities:
//! - Hold the three opaque EmailJS identifiers as an explicit config struct,
//!   sourced from the environment with a hard failure when one is missing.
//! - POST the captured form fields to the EmailJS REST endpoint and hand the
//!   resulting status text back to the caller, which decides what `"OK"` means.
//!
//! The [`Delivery`] trait is the seam between the MVU kernel and the network;
//! tests substitute it with in-memory fakes.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Serialize;

use crate::models::form::FormValues;

/// Canonical EmailJS send endpoint.
pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

const CONNECT_TIMEOUT_SECS: u64 = 30;
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Environment variable carrying the EmailJS service id.
pub const SERVICE_ID_VAR: &str = "MAILFORM_SERVICE_ID";
/// Environment variable carrying the EmailJS template id.
pub const TEMPLATE_ID_VAR: &str = "MAILFORM_TEMPLATE_ID";
/// Environment variable carrying the EmailJS user (public key) id.
pub const USER_ID_VAR: &str = "MAILFORM_USER_ID";

/// The three opaque identifiers EmailJS needs to route a message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeliveryConfig {
    pub service_id: String,
    pub template_id: String,
    pub user_id: String,
}

impl DeliveryConfig {
    /// Read the config from `MAILFORM_SERVICE_ID`, `MAILFORM_TEMPLATE_ID`, and
    /// `MAILFORM_USER_ID`. A missing or empty variable is a startup error.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var(SERVICE_ID_VAR).ok(),
            env::var(TEMPLATE_ID_VAR).ok(),
            env::var(USER_ID_VAR).ok(),
        )
    }

    fn from_vars(
        service_id: Option<String>,
        template_id: Option<String>,
        user_id: Option<String>,
    ) -> Result<Self> {
        Ok(Self {
            service_id: require(service_id, SERVICE_ID_VAR)?,
            template_id: require(template_id, TEMPLATE_ID_VAR)?,
            user_id: require(user_id, USER_ID_VAR)?,
        })
    }
}

fn require(value: Option<String>, var: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => bail!("required environment variable {var} is missing or empty"),
    }
}

/// Outcome-producing message delivery. Implementations report the
/// collaborator's status text; transport problems surface as `Err`.
pub trait Delivery: Send + Sync {
    fn send(&self, values: &FormValues) -> Result<String>;
}

/// Request body for the EmailJS send endpoint. The `template_params` keys
/// match the fields referenced by the configured EmailJS template.
#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    firstname: &'a str,
    lastname: &'a str,
    email: &'a str,
    message: &'a str,
}

fn send_request<'a>(config: &'a DeliveryConfig, values: &'a FormValues) -> SendRequest<'a> {
    SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.user_id,
        template_params: TemplateParams {
            firstname: &values.first_name,
            lastname: &values.last_name,
            email: &values.email,
            message: &values.message,
        },
    }
}

/// Blocking EmailJS REST client. Lives on the command worker thread, so the
/// synchronous call never stalls a UI frame.
pub struct EmailJsClient {
    config: DeliveryConfig,
    http: reqwest::blocking::Client,
}

impl EmailJsClient {
    pub fn new(config: DeliveryConfig) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::none())
            .https_only(true)
            .build()
            .context("failed to build HTTPS client")?;
        Ok(Self { config, http })
    }
}

impl Delivery for EmailJsClient {
    /// Single attempt, no retry. Returns the response body, which EmailJS
    /// uses as its status text (`OK` on success).
    fn send(&self, values: &FormValues) -> Result<String> {
        let response = self
            .http
            .post(EMAILJS_SEND_URL)
            .json(&send_request(&self.config, values))
            .send()
            .context("delivery request failed")?;

        let status = response.status();
        let text = response
            .text()
            .context("failed to read delivery response")?;

        if !status.is_success() {
            bail!("delivery rejected with HTTP {status}: {text}");
        }
        Ok(text)
    }
}
