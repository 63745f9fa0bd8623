// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed colours used by the boards, menu and overlay

use crate::surface::Rgba;

pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);
pub const DARK_GRAY: Rgba = Rgba::rgb(80, 80, 80);
pub const YELLOW: Rgba = Rgba::rgb(253, 249, 0);

// Boards
pub const GRID_BACKGROUND: Rgba = Rgba::rgb(210, 180, 120);
pub const FIXED_BACKGROUND: Rgba = Rgba::rgb(210, 195, 170);
pub const FIXED_DOT: Rgba = Rgba::rgb(180, 165, 140);

// Menus
pub const MENU_BACKGROUND: Rgba = Rgba::rgb(30, 30, 40);
pub const MENU_TITLE: Rgba = Rgba::rgb(220, 200, 160);
pub const MENU_TEXT: Rgba = Rgba::rgb(180, 180, 180);
pub const MENU_SELECTED: Rgba = Rgba::rgb(255, 255, 255);
pub const MENU_HIGHLIGHT: Rgba = Rgba::rgb(60, 60, 80);
pub const MENU_HINT: Rgba = Rgba::rgb(120, 120, 130);

/// Translucent veil drawn over a paused board
pub const PAUSE_VEIL: Rgba = Rgba::rgba(20, 20, 30, 200);
