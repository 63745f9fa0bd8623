// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board session: one layout bound to one surface

use tracing::{debug, info};

use crate::hit_test::node_at;
use crate::layout::{Layout, NodeDecoration, NodeIndex, STATUS_PADDING};
use crate::palette;
use crate::surface::{Key, PointerButton, Rect, Surface};
use crate::wrap::wrap_text;
use crate::{Player, WINDOW_TITLE};

/// Territory markers are squares of this fraction of the piece radius
const TERRITORY_RATIO: f32 = 0.35;

/// Draws a board and resolves input against it.
///
/// The layout is fixed for the lifetime of the session. Playing a different
/// board means dropping this session and building a new one, which resizes
/// the window.
pub struct BoardSession<S: Surface> {
    layout: Layout,
    surface: S,
    frame_open: bool,
}

impl<S: Surface> BoardSession<S> {
    /// Bind `layout` to `surface`, sizing the window to the layout
    pub fn new(layout: Layout, mut surface: S) -> Self {
        let metrics = layout.metrics();
        surface.configure_window(WINDOW_TITLE, metrics.window_width, metrics.window_height);

        info!(
            kind = ?layout.kind(),
            nodes = layout.node_count(),
            edges = layout.edges().len(),
            width = metrics.window_width,
            height = metrics.window_height,
            "Board session opened"
        );

        Self {
            layout,
            surface,
            frame_open: false,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Tear the session down, handing the surface back
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Start a frame: background, edges, then node decorations.
    ///
    /// # Panics
    ///
    /// Panics if the previous frame was never ended.
    pub fn begin_frame(&mut self) {
        assert!(!self.frame_open, "begin_frame called twice without end_frame");
        self.frame_open = true;

        let style = *self.layout.style();
        self.surface.begin_frame();
        self.surface.clear(style.background);

        let nodes = self.layout.nodes();
        for edge in self.layout.edges() {
            self.surface
                .line(nodes[edge.a], nodes[edge.b], style.edge_thickness, style.edge_color);
        }

        match style.decoration {
            NodeDecoration::EveryNode { radius, color } => {
                for node in nodes {
                    self.surface.circle_filled(*node, radius, color);
                }
            }
            NodeDecoration::Markers { radius, color } => {
                for &marker in self.layout.markers() {
                    self.surface.circle_filled(nodes[marker], radius, color);
                }
            }
        }
    }

    /// Present everything drawn since [`BoardSession::begin_frame`].
    ///
    /// # Panics
    ///
    /// Panics if no frame is open.
    pub fn end_frame(&mut self) {
        assert!(self.frame_open, "end_frame called without begin_frame");
        self.frame_open = false;
        self.surface.end_frame();
    }

    pub fn draw_piece(&mut self, node: NodeIndex, player: Player) {
        let center = self.layout.position(node);
        let radius = self.layout.metrics().piece_radius;
        match player {
            Player::One => self.surface.circle_filled(center, radius, palette::BLACK),
            Player::Two => {
                self.surface.circle_filled(center, radius, palette::WHITE);
                self.surface.circle_outline(center, radius, palette::DARK_GRAY);
            }
        }
    }

    /// Double ring just outside the piece radius
    pub fn draw_highlight(&mut self, node: NodeIndex) {
        let center = self.layout.position(node);
        let radius = self.layout.metrics().piece_radius;
        self.surface.circle_outline(center, radius + 3.0, palette::YELLOW);
        self.surface.circle_outline(center, radius + 4.0, palette::YELLOW);
    }

    /// Small ownership square, smaller than a piece
    pub fn draw_territory(&mut self, node: NodeIndex, player: Player) {
        let center = self.layout.position(node);
        let half = self.layout.metrics().piece_radius * TERRITORY_RATIO;
        let rect = Rect::centered_square(center, half);
        match player {
            Player::One => self.surface.rect_filled(rect, palette::BLACK),
            Player::Two => {
                self.surface.rect_filled(rect, palette::WHITE);
                self.surface.rect_outline(rect, palette::DARK_GRAY);
            }
        }
    }

    /// Status text at the bottom of the window, wrapped to the window width
    pub fn draw_status(&mut self, text: &str) {
        let metrics = *self.layout.metrics();
        let max_width = self.surface.width() - STATUS_PADDING * 2.0;
        let lines = wrap_text(text, max_width, metrics.status_font_size, &self.surface);

        let mut at = metrics.status_anchor;
        for line in &lines {
            self.surface.text(line, at, metrics.status_font_size, palette::DARK_GRAY);
            at.y += metrics.status_line_height();
        }
    }

    /// Node under the pointer if the primary button was pressed this frame
    pub fn clicked_position(&self) -> Option<NodeIndex> {
        if !self.surface.is_pointer_pressed(PointerButton::Primary) {
            return None;
        }
        let pointer = self.surface.pointer_position()?;
        let node = node_at(self.layout.nodes(), pointer, self.layout.metrics().hit_radius);
        debug!(x = pointer.x, y = pointer.y, node = ?node, "Board click resolved");
        node
    }

    /// Node under the pointer regardless of button state
    pub fn hovered_position(&self) -> Option<NodeIndex> {
        let pointer = self.surface.pointer_position()?;
        node_at(self.layout.nodes(), pointer, self.layout.metrics().hit_radius)
    }

    pub fn is_pass_pressed(&self) -> bool {
        self.surface.is_key_pressed(Key::P)
    }

    pub fn is_pause_pressed(&self) -> bool {
        self.surface.is_key_pressed(Key::Escape)
    }

    pub fn should_close(&self) -> bool {
        self.surface.close_requested()
    }
}
