// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Business logic: side-effect-free field validation and the EmailJS
//! delivery collaborator.

pub mod email;
pub mod validate;
