// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

mod app;
mod logic;
mod models;
mod mvu;
mod ui;

fn main() -> anyhow::Result<()> {
    app::run()
}
