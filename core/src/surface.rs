// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rendering and input capabilities required from a windowing backend.
//!
//! The core never talks to a window system directly. Anything that can open a
//! window of a given size, draw a handful of primitives, measure text and
//! report pointer/key presses can host a board by implementing [`Surface`].

use serde::{Deserialize, Serialize};

use crate::wrap::TextMeasure;

/// A position in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point
    pub fn distance_squared(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Axis-aligned rectangle in window pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Square of half-side `half` centred on `center`
    pub fn centered_square(center: Point, half: f32) -> Self {
        Self::new(center.x - half, center.y - half, half * 2.0, half * 2.0)
    }

    /// Check if a point is inside this rectangle (edges inclusive)
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// 8-bit RGBA colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Pointer buttons the core asks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
}

/// Keys the core asks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    W,
    S,
    Enter,
    Escape,
    P,
}

/// A window that can be drawn into once per frame and polled for input.
///
/// Draw calls between [`Surface::begin_frame`] and [`Surface::end_frame`] are
/// buffered in call order and presented on `end_frame`. Press queries are
/// edge-triggered: they report presses that happened during the current frame.
pub trait Surface: TextMeasure {
    /// Size the window to `width` x `height` pixels and set its title
    fn configure_window(&mut self, title: &str, width: u32, height: u32);

    fn begin_frame(&mut self);

    fn end_frame(&mut self);

    /// Current drawable width in pixels
    fn width(&self) -> f32;

    fn clear(&mut self, color: Rgba);

    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Rgba);

    fn circle_filled(&mut self, center: Point, radius: f32, color: Rgba);

    fn circle_outline(&mut self, center: Point, radius: f32, color: Rgba);

    fn rect_filled(&mut self, rect: Rect, color: Rgba);

    fn rect_outline(&mut self, rect: Rect, color: Rgba);

    /// Draw `text` with its top-left corner at `at`
    fn text(&mut self, text: &str, at: Point, font_size: f32, color: Rgba);

    /// Latest pointer position, if the pointer is over the window
    fn pointer_position(&self) -> Option<Point>;

    fn is_pointer_pressed(&self, button: PointerButton) -> bool;

    fn is_key_pressed(&self, key: Key) -> bool;

    /// True when the platform asked the window to close
    fn close_requested(&self) -> bool;
}
