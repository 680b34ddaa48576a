// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Application entry point wiring egui/eframe to launch the contact form.

use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui;
use egui_phosphor::Variant;
use tracing_subscriber::EnvFilter;

use crate::logic::email::{DeliveryConfig, EmailJsClient};
use crate::ui::ContactApp;

/// Bootstrap the desktop application and run the main egui event loop.
///
/// Fails up front when the EmailJS identifiers are absent from the
/// environment instead of discovering that on the first send.
pub fn run() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = DeliveryConfig::from_env().context("EmailJS configuration is incomplete")?;
    let delivery = Arc::new(EmailJsClient::new(config)?);

    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 640.0])
            .with_min_inner_size([400.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MailForm",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(ContactApp::new(delivery)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI event loop failed: {e}"))
}
