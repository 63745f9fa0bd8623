// SPDX-License-Identifier: MIT OR Apache-2.0

#![cfg(test)]

//! Headless surface for exercising sessions and menus without a window

use crate::surface::{Key, Point, PointerButton, Rect, Rgba, Surface};
use crate::wrap::TextMeasure;

/// Monospace measurement: every character is half the font size wide
pub struct FixedAdvance;

impl TextMeasure for FixedAdvance {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size / 2.0
    }
}

/// One recorded primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    Line { from: Point, to: Point, thickness: f32, color: Rgba },
    CircleFilled { center: Point, radius: f32, color: Rgba },
    CircleOutline { center: Point, radius: f32, color: Rgba },
    RectFilled { rect: Rect, color: Rgba },
    RectOutline { rect: Rect, color: Rgba },
    Text { text: String, at: Point, font_size: f32, color: Rgba },
}

/// Surface that records draw calls and replays scripted input
#[derive(Default)]
pub struct RecordingSurface {
    pub window: Option<(String, u32, u32)>,
    /// Calls buffered since the last `begin_frame`
    pub frame: Vec<DrawCall>,
    /// Frames flushed by `end_frame`
    pub presented: Vec<Vec<DrawCall>>,
    pub pointer: Option<Point>,
    pub pressed_buttons: Vec<PointerButton>,
    pub pressed_keys: Vec<Key>,
    pub close: bool,
    width: f32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&mut self, key: Key) {
        self.pressed_keys.push(key);
    }

    pub fn hover(&mut self, at: Point) {
        self.pointer = Some(at);
    }

    pub fn click_at(&mut self, at: Point) {
        self.pointer = Some(at);
        self.pressed_buttons.push(PointerButton::Primary);
    }

    /// Forget this frame's presses; the pointer stays where it is
    pub fn next_frame(&mut self) {
        self.pressed_buttons.clear();
        self.pressed_keys.clear();
    }

    pub fn texts(&self) -> Vec<&str> {
        self.frame
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl TextMeasure for RecordingSurface {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        FixedAdvance.text_width(text, font_size)
    }
}

impl Surface for RecordingSurface {
    fn configure_window(&mut self, title: &str, width: u32, height: u32) {
        self.window = Some((title.to_string(), width, height));
        self.width = width as f32;
    }

    fn begin_frame(&mut self) {
        self.frame.clear();
    }

    fn end_frame(&mut self) {
        self.presented.push(std::mem::take(&mut self.frame));
    }

    fn width(&self) -> f32 {
        self.width
    }

    fn clear(&mut self, color: Rgba) {
        self.frame.push(DrawCall::Clear(color));
    }

    fn line(&mut self, from: Point, to: Point, thickness: f32, color: Rgba) {
        self.frame.push(DrawCall::Line { from, to, thickness, color });
    }

    fn circle_filled(&mut self, center: Point, radius: f32, color: Rgba) {
        self.frame.push(DrawCall::CircleFilled { center, radius, color });
    }

    fn circle_outline(&mut self, center: Point, radius: f32, color: Rgba) {
        self.frame.push(DrawCall::CircleOutline { center, radius, color });
    }

    fn rect_filled(&mut self, rect: Rect, color: Rgba) {
        self.frame.push(DrawCall::RectFilled { rect, color });
    }

    fn rect_outline(&mut self, rect: Rect, color: Rgba) {
        self.frame.push(DrawCall::RectOutline { rect, color });
    }

    fn text(&mut self, text: &str, at: Point, font_size: f32, color: Rgba) {
        self.frame.push(DrawCall::Text { text: text.to_string(), at, font_size, color });
    }

    fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }

    fn is_pointer_pressed(&self, button: PointerButton) -> bool {
        self.pressed_buttons.contains(&button)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    fn close_requested(&self) -> bool {
        self.close
    }
}
