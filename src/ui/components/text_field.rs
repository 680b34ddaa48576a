// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Labeled text inputs with an inline validation-error line.

use egui::{Response, RichText, TextEdit, Ui};

/// Draw a labeled single-line input. Returns the new value when it changed.
pub fn singleline(ui: &mut Ui, label: &str, value: &str, error: Option<&str>) -> Option<String> {
    draw(ui, label, value, error, |ui, text| {
        ui.add(TextEdit::singleline(text).desired_width(f32::INFINITY))
    })
}

/// Draw a labeled multi-line input. Returns the new value when it changed.
pub fn multiline(ui: &mut Ui, label: &str, value: &str, error: Option<&str>) -> Option<String> {
    draw(ui, label, value, error, |ui, text| {
        ui.add(
            TextEdit::multiline(text)
                .desired_width(f32::INFINITY)
                .desired_rows(6),
        )
    })
}

fn draw(
    ui: &mut Ui,
    label: &str,
    value: &str,
    error: Option<&str>,
    editor: impl FnOnce(&mut Ui, &mut String) -> Response,
) -> Option<String> {
    ui.label(RichText::new(label).small().strong());
    ui.add_space(2.0);

    let mut text = value.to_owned();
    let changed = editor(ui, &mut text).changed();

    if let Some(error) = error {
        ui.label(
            RichText::new(error)
                .small()
                .color(ui.visuals().error_fg_color),
        );
    }
    ui.add_space(4.0);

    changed.then_some(text)
}
