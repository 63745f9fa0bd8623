// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board Games Core - Board Geometry and Interaction
//!
//! This crate provides the presentation core shared by every board game:
//! - Layout generation for the fixed 24-point board and square grids
//! - Pointer hit testing against board nodes
//! - Greedy word wrapping of status text
//! - A backend-agnostic drawing/input surface and the board session on top of it
//! - Menu and pause overlay state machines

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod hit_test;
pub mod layout;
pub mod menu;
pub mod palette;
pub mod pause;
pub mod session;
pub mod surface;
pub mod wrap;

#[cfg(test)]
mod test_util;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use layout::{BoardKind, DisplayMetrics, Edge, GridSize, Layout, NodeIndex};
pub use session::BoardSession;
pub use surface::{Key, Point, PointerButton, Rect, Rgba, Surface};
pub use wrap::TextMeasure;

/// Title used for every board window
pub const WINDOW_TITLE: &str = "Board Game";

/// The side a piece or territory marker belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, drawn as solid black
    One,
    /// Second player, drawn white with a dark outline
    Two,
}

/// Errors that can occur while building a layout
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// Grid boards need at least one intersection per side
    #[error("invalid grid size {0}: must be at least 1")]
    InvalidGridSize(usize),
}
