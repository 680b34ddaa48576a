// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring form state, messages, and commands.

use crate::logic::email::Delivery;
use crate::logic::validate::validate;
use crate::models::form::{Field, FormErrors, FormValues, SubmissionState};

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Current contents of the editable fields.
    pub values: FormValues,
    /// Errors from the most recent validation pass.
    pub errors: FormErrors,
    /// Which of the three views is showing.
    pub state: SubmissionState,
}

/// Application messages routed through the update function.
#[derive(Debug)]
pub enum Msg {
    /// One field's value changed; no validation happens here.
    FieldChanged(Field, String),
    /// The user pressed Send.
    SubmitRequested,
    /// The delivery collaborator finished; `Err` carries the diagnostic text.
    SubmitCompleted(Result<(), String>),
    /// The user asked to compose another message from the confirmation view.
    SendAgain,
}

/// Commands represent side-effects executed between frames.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    SendMessage(FormValues),
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::FieldChanged(field, text) => model.values.set(field, text),
        Msg::SubmitRequested => {
            // Errors are rebuilt wholesale on every attempt; the external call
            // is only made when the mapping comes back empty.
            model.errors = validate(&model.values);
            if model.errors.is_empty() {
                model.state = SubmissionState::Loading;
                cmds.push(Command::SendMessage(model.values.clone()));
            }
        }
        Msg::SubmitCompleted(Ok(())) => {
            model.state = SubmissionState::Submitted;
            model.values = FormValues::default();
        }
        Msg::SubmitCompleted(Err(detail)) => {
            // Delivery failures stay diagnostic-only; the form keeps its
            // contents so the user can simply press Send again.
            tracing::error!(%detail, "message delivery failed");
            model.state = SubmissionState::Idle;
        }
        Msg::SendAgain => {
            model.values = FormValues::default();
            model.errors = FormErrors::default();
            model.state = SubmissionState::Idle;
        }
    }
}

/// Execute a command on the worker thread and return the resulting message.
///
/// Success is the collaborator reporting the literal status text `OK`; any
/// other status text or transport failure becomes the `Err` variant.
pub fn run_command(cmd: Command, delivery: &dyn Delivery) -> Msg {
    match cmd {
        Command::SendMessage(values) => {
            let outcome = match delivery.send(&values) {
                Ok(status) if status == "OK" => Ok(()),
                Ok(status) => Err(format!("unexpected delivery status: {status}")),
                Err(err) => Err(format!("{err:#}")),
            };
            Msg::SubmitCompleted(outcome)
        }
    }
}
