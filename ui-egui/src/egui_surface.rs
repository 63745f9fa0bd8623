// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`Surface`] backed by an egui context

use boardgames_core::surface::{Key, Point, PointerButton, Rect, Rgba, Surface};
use boardgames_core::TextMeasure;
use egui::{Align2, Color32, FontId, LayerId, Pos2, Shape, Stroke, Vec2, ViewportCommand};

/// Outline width for circle and rectangle outlines
const OUTLINE_WIDTH: f32 = 1.0;

/// Buffers shapes for one frame and paints them on the background layer.
///
/// Coordinates are egui points, which match window pixels at a scale factor
/// of 1.
pub struct EguiSurface {
    ctx: egui::Context,
    shapes: Vec<Shape>,
    /// Size last requested through `configure_window`
    size: Option<Vec2>,
}

impl EguiSurface {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            shapes: Vec::new(),
            size: None,
        }
    }

    fn canvas(&self) -> egui::Rect {
        let screen = self.ctx.screen_rect();
        match self.size {
            Some(size) => screen.union(egui::Rect::from_min_size(Pos2::ZERO, size)),
            None => screen,
        }
    }
}

fn color(c: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

fn pos(p: Point) -> Pos2 {
    Pos2::new(p.x, p.y)
}

fn rect(r: Rect) -> egui::Rect {
    egui::Rect::from_min_size(Pos2::new(r.x, r.y), Vec2::new(r.width, r.height))
}

fn key(k: Key) -> egui::Key {
    match k {
        Key::Up => egui::Key::ArrowUp,
        Key::Down => egui::Key::ArrowDown,
        Key::W => egui::Key::W,
        Key::S => egui::Key::S,
        Key::Enter => egui::Key::Enter,
        Key::Escape => egui::Key::Escape,
        Key::P => egui::Key::P,
    }
}

impl TextMeasure for EguiSurface {
    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        self.ctx.fonts(|fonts| {
            fonts
                .layout_no_wrap(text.to_owned(), FontId::proportional(font_size), Color32::WHITE)
                .size()
                .x
        })
    }
}

impl Surface for EguiSurface {
    fn configure_window(&mut self, title: &str, width: u32, height: u32) {
        let size = Vec2::new(width as f32, height as f32);
        self.ctx.send_viewport_cmd(ViewportCommand::Title(title.to_owned()));
        self.ctx.send_viewport_cmd(ViewportCommand::InnerSize(size));
        self.size = Some(size);
        tracing::debug!(title, width, height, "Window configured");
    }

    fn begin_frame(&mut self) {
        self.shapes.clear();
    }

    fn end_frame(&mut self) {
        self.ctx
            .layer_painter(LayerId::background())
            .extend(std::mem::take(&mut self.shapes));
    }

    fn width(&self) -> f32 {
        match self.size {
            Some(size) => size.x,
            None => self.ctx.screen_rect().width(),
        }
    }

    fn clear(&mut self, c: Rgba) {
        self.shapes.push(Shape::rect_filled(self.canvas(), 0.0, color(c)));
    }

    fn line(&mut self, from: Point, to: Point, thickness: f32, c: Rgba) {
        self.shapes
            .push(Shape::line_segment([pos(from), pos(to)], Stroke::new(thickness, color(c))));
    }

    fn circle_filled(&mut self, center: Point, radius: f32, c: Rgba) {
        self.shapes.push(Shape::circle_filled(pos(center), radius, color(c)));
    }

    fn circle_outline(&mut self, center: Point, radius: f32, c: Rgba) {
        self.shapes.push(Shape::circle_stroke(
            pos(center),
            radius,
            Stroke::new(OUTLINE_WIDTH, color(c)),
        ));
    }

    fn rect_filled(&mut self, r: Rect, c: Rgba) {
        self.shapes.push(Shape::rect_filled(rect(r), 0.0, color(c)));
    }

    fn rect_outline(&mut self, r: Rect, c: Rgba) {
        self.shapes
            .push(Shape::rect_stroke(rect(r), 0.0, Stroke::new(OUTLINE_WIDTH, color(c))));
    }

    fn text(&mut self, text: &str, at: Point, font_size: f32, c: Rgba) {
        let shape = self.ctx.fonts(|fonts| {
            Shape::text(
                fonts,
                pos(at),
                Align2::LEFT_TOP,
                text,
                FontId::proportional(font_size),
                color(c),
            )
        });
        self.shapes.push(shape);
    }

    fn pointer_position(&self) -> Option<Point> {
        self.ctx
            .input(|i| i.pointer.latest_pos())
            .map(|p| Point::new(p.x, p.y))
    }

    fn is_pointer_pressed(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.ctx.input(|i| i.pointer.primary_pressed()),
        }
    }

    fn is_key_pressed(&self, k: Key) -> bool {
        self.ctx.input(|i| i.key_pressed(key(k)))
    }

    fn close_requested(&self) -> bool {
        self.ctx.input(|i| i.viewport().close_requested())
    }
}
