// SPDX-License-Identifier: MIT OR Apache-2.0

#![cfg(test)]

//! Scripted surface for driving the shell without a window

use boardgames_core::surface::{Key, Point, PointerButton, Rect, Rgba, Surface};
use boardgames_core::TextMeasure;

/// Keeps only what the shell tests look at: window size, texts and frame count
#[derive(Default)]
pub struct ScriptedSurface {
    pub window: Option<(String, u32, u32)>,
    pub frames_presented: usize,
    pub texts: Vec<String>,
    pub pieces: usize,
    pub pointer: Option<Point>,
    pub clicked: bool,
    pub keys: Vec<Key>,
    pub close: bool,
}

impl ScriptedSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.keys.push(key);
    }

    pub fn click_at(&mut self, at: Point) {
        self.pointer = Some(at);
        self.clicked = true;
    }

    /// Clear presses between frames
    pub fn release(&mut self) {
        self.keys.clear();
        self.clicked = false;
    }
}

impl TextMeasure for ScriptedSurface {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars().count() as f32 * font_size / 2.0
    }
}

impl Surface for ScriptedSurface {
    fn configure_window(&mut self, title: &str, width: u32, height: u32) {
        self.window = Some((title.to_string(), width, height));
    }

    fn begin_frame(&mut self) {
        self.texts.clear();
        self.pieces = 0;
    }

    fn end_frame(&mut self) {
        self.frames_presented += 1;
    }

    fn width(&self) -> f32 {
        self.window.as_ref().map_or(0.0, |(_, w, _)| *w as f32)
    }

    fn clear(&mut self, _color: Rgba) {}

    fn line(&mut self, _from: Point, _to: Point, _thickness: f32, _color: Rgba) {}

    fn circle_filled(&mut self, _center: Point, radius: f32, _color: Rgba) {
        // Decoration dots are smaller than any piece
        if radius > 10.0 {
            self.pieces += 1;
        }
    }

    fn circle_outline(&mut self, _center: Point, _radius: f32, _color: Rgba) {}

    fn rect_filled(&mut self, _rect: Rect, _color: Rgba) {}

    fn rect_outline(&mut self, _rect: Rect, _color: Rgba) {}

    fn text(&mut self, text: &str, _at: Point, _font_size: f32, _color: Rgba) {
        self.texts.push(text.to_string());
    }

    fn pointer_position(&self) -> Option<Point> {
        self.pointer
    }

    fn is_pointer_pressed(&self, button: PointerButton) -> bool {
        button == PointerButton::Primary && self.clicked
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    fn close_requested(&self) -> bool {
        self.close
    }
}
