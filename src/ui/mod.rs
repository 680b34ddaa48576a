// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the contact form.
//! Handles layout, the three submission views, and wiring to the delivery
//! worker.

pub mod components;

use std::sync::Arc;

use eframe::egui;

use crate::logic::email::Delivery;
use crate::models::form::{Field, SubmissionState};
use crate::mvu::{self, AppModel, Command, Msg};
use crate::ui::components::text_field;

/// Stateful egui application for composing and sending a contact message.
pub struct ContactApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl ContactApp {
    /// Build the app and spawn the delivery worker. A single worker is
    /// enough: at most one submission is ever in flight.
    pub fn new(delivery: Arc<dyn Delivery>) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        std::thread::spawn(move || {
            for cmd in cmd_rx.iter() {
                let msg = mvu::run_command(cmd, delivery.as_ref());
                let _ = msg_tx.send(msg);
            }
        });

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for ContactApp {
    /// Drives a single UI frame: drains messages produced by the delivery
    /// worker, applies inbox messages to the MVU model (emitting resulting
    /// commands to the worker), and renders whichever of the three views the
    /// submission state selects.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_spacing(ctx);

        // Pull messages produced by the command worker.
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.inbox.push(msg);
        }

        self.process_inbox();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Contact");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                });
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            match self.model.state {
                SubmissionState::Loading => self.render_loading(ui),
                SubmissionState::Submitted => self.render_confirmation(ui),
                SubmissionState::Idle => self.render_form(ui),
            }
        });
    }

    // eframe 0.34 requires `ui`; the runner still invokes the deprecated
    // `update` above each frame, so all rendering stays there.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}
}

impl ContactApp {
    /// Apply pending messages to the model in arrival order, emitting
    /// resulting commands to the worker. FIFO matters: an edit and a submit
    /// pushed in the same frame must validate the post-edit value.
    fn process_inbox(&mut self) {
        let mut msgs = std::mem::take(&mut self.inbox);
        for msg in msgs.drain(..) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                let _ = self.cmd_tx.send(cmd);
            }
        }
        self.inbox = msgs;
    }

    fn ensure_spacing(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });
    }

    /// Centered spinner while the delivery call is in flight.
    fn render_loading(&self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.35);
            ui.add(egui::Spinner::new().size(48.0));
            ui.add_space(8.0);
            ui.label("Sending your message…");
        });
    }

    /// Confirmation view with the "send again" action.
    fn render_confirmation(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.25);
            ui.label(
                egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE)
                    .size(64.0)
                    .color(egui::Color32::from_rgb(0x22, 0x8b, 0x22)),
            );
            ui.add_space(4.0);
            ui.heading("Thank you!");
            ui.label("Your message has been sent successfully");
            ui.add_space(12.0);
            if ui.button("Send again").clicked() {
                self.inbox.push(Msg::SendAgain);
            }
        });
    }

    /// The editable form: name fields side by side, e-mail, message, send.
    fn render_form(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.columns(2, |columns| {
                if let Some(text) = text_field::singleline(
                    &mut columns[0],
                    "First Name",
                    &self.model.values.first_name,
                    self.model.errors.first_name.as_deref(),
                ) {
                    self.inbox.push(Msg::FieldChanged(Field::FirstName, text));
                }
                if let Some(text) = text_field::singleline(
                    &mut columns[1],
                    "Last Name",
                    &self.model.values.last_name,
                    self.model.errors.last_name.as_deref(),
                ) {
                    self.inbox.push(Msg::FieldChanged(Field::LastName, text));
                }
            });
            ui.add_space(6.0);

            if let Some(text) = text_field::singleline(
                ui,
                "E-mail",
                &self.model.values.email,
                self.model.errors.email.as_deref(),
            ) {
                self.inbox.push(Msg::FieldChanged(Field::Email, text));
            }
            ui.add_space(6.0);

            if let Some(text) = text_field::multiline(
                ui,
                "Message",
                &self.model.values.message,
                self.model.errors.message.as_deref(),
            ) {
                self.inbox.push(Msg::FieldChanged(Field::Message, text));
            }
            ui.add_space(10.0);

            let send = egui::Button::new(format!(
                "{} Send",
                egui_phosphor::regular::PAPER_PLANE_TILT
            ));
            if ui.add(send).clicked() {
                self.inbox.push(Msg::SubmitRequested);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::form::FormValues;
    use anyhow::Result;

    /// Collaborator stub; the worker thread is never exercised here.
    struct OkDelivery;

    impl Delivery for OkDelivery {
        fn send(&self, _values: &FormValues) -> Result<String> {
            Ok("OK".to_string())
        }
    }

    #[test]
    fn inbox_applies_an_edit_before_a_submit_from_the_same_frame() {
        let mut app = ContactApp::new(Arc::new(OkDelivery));
        app.model.values = FormValues {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@mail.com".into(),
            message: String::new(),
        };

        // Same-frame sequence: the user finishes typing the message and
        // clicks Send. The submit must validate the post-edit value.
        app.inbox
            .push(Msg::FieldChanged(Field::Message, "Hello".into()));
        app.inbox.push(Msg::SubmitRequested);

        app.process_inbox();

        assert_eq!(app.model.values.message, "Hello");
        assert!(app.model.errors.is_empty());
        assert_eq!(app.model.state, SubmissionState::Loading);
        assert!(app.inbox.is_empty());
    }
}
