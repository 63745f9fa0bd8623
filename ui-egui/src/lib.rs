// SPDX-License-Identifier: MIT OR Apache-2.0

//! egui front end for the board games: window, screens and a free-form board
//! sandbox on top of `boardgames-core`

#![deny(unsafe_code)]

pub mod app;
pub mod app_config;
pub mod egui_surface;
pub mod logging;
pub mod sandbox;
pub mod shell;

#[cfg(test)]
mod test_util;

pub use app::App;
pub use app_config::{AppConfig, StartScreen};
