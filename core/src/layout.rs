// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board layout generation
//!
//! Turns a [`BoardKind`] into screen geometry: node coordinates, the edges
//! drawn between them, star point markers, display metrics and the per-kind
//! drawing style. Layouts are immutable; switching boards means building a
//! new one.

use serde::{Deserialize, Serialize};

use crate::palette;
use crate::surface::{Point, Rgba};
use crate::LayoutError;

/// Index of a node in [`Layout::nodes`]
pub type NodeIndex = usize;

/// Grid windows are never narrower than this, leaving room for status text
pub const MIN_GRID_WINDOW_WIDTH: u32 = 600;
/// Height of the band under the grid reserved for status text
pub const STATUS_BAND_HEIGHT: u32 = 80;
/// Gap between the last grid row and the first status line
pub const STATUS_GAP: u32 = 30;
/// Horizontal padding on each side of the status text
pub const STATUS_PADDING: f32 = 20.0;
pub const STATUS_FONT_SIZE: f32 = 20.0;

const FIXED_WINDOW_WIDTH: u32 = 700;
const FIXED_WINDOW_HEIGHT: u32 = 750;
const FIXED_STATUS_Y: f32 = 660.0;
const FIXED_PIECE_RADIUS: f32 = 20.0;
const FIXED_HIT_RADIUS: f32 = 25.0;

const GRID_PIECE_RATIO: f32 = 0.43;
const GRID_HIT_RATIO: f32 = 0.45;

/// Screen positions of the 24-point board: outer, middle and inner squares
#[rustfmt::skip]
const FIXED_POSITIONS: [(f32, f32); 24] = [
    (100.0, 100.0), (350.0, 100.0), (600.0, 100.0),
    (183.0, 183.0), (350.0, 183.0), (517.0, 183.0),
    (267.0, 267.0), (350.0, 267.0), (433.0, 267.0),
    (100.0, 350.0), (183.0, 350.0), (267.0, 350.0),
    (433.0, 350.0), (517.0, 350.0), (600.0, 350.0),
    (267.0, 433.0), (350.0, 433.0), (433.0, 433.0),
    (183.0, 517.0), (350.0, 517.0), (517.0, 517.0),
    (100.0, 600.0), (350.0, 600.0), (600.0, 600.0),
];

#[rustfmt::skip]
const FIXED_EDGES: [(NodeIndex, NodeIndex); 32] = [
    // outer square
    (0, 1), (1, 2), (2, 14), (14, 23), (23, 22), (22, 21), (21, 9), (9, 0),
    // middle square
    (3, 4), (4, 5), (5, 13), (13, 20), (20, 19), (19, 18), (18, 10), (10, 3),
    // inner square
    (6, 7), (7, 8), (8, 12), (12, 17), (17, 16), (16, 15), (15, 11), (11, 6),
    // connectors
    (1, 4), (4, 7), (12, 13), (13, 14), (16, 19), (19, 22), (9, 10), (10, 11),
];

/// Side length of a square grid board, always at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    pub const NINE: GridSize = GridSize(9);
    pub const THIRTEEN: GridSize = GridSize(13);
    pub const NINETEEN: GridSize = GridSize(19);

    pub fn new(size: usize) -> Result<Self, LayoutError> {
        if size == 0 {
            return Err(LayoutError::InvalidGridSize(size));
        }
        Ok(Self(size))
    }

    /// Narrow any integer into the valid range
    pub fn clamped(size: i64) -> Self {
        Self(size.max(1) as usize)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// Pixel spacing between grid lines; larger boards get tighter cells
    pub fn cell_size(&self) -> u32 {
        match self.0 {
            0..=9 => 60,
            10..=13 => 45,
            _ => 34,
        }
    }
}

impl TryFrom<usize> for GridSize {
    type Error = LayoutError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        GridSize::new(size)
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

/// Which board a layout describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardKind {
    /// The 24-point three-nested-squares board (Nine Men's Morris)
    FixedTopology,
    /// A size x size orthogonal lattice (Go)
    Grid(GridSize),
}

/// An undirected connection drawn between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: NodeIndex,
    pub b: NodeIndex,
}

impl Edge {
    pub const fn new(a: NodeIndex, b: NodeIndex) -> Self {
        Self { a, b }
    }
}

/// Sizes derived from the board kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayMetrics {
    pub piece_radius: f32,
    pub hit_radius: f32,
    pub window_width: u32,
    pub window_height: u32,
    /// Top-left of the first status line
    pub status_anchor: Point,
    pub status_font_size: f32,
}

impl DisplayMetrics {
    /// Vertical distance between wrapped status lines
    pub fn status_line_height(&self) -> f32 {
        self.status_font_size + 4.0
    }
}

/// Decoration drawn on top of the edges every frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeDecoration {
    /// A dot on every node
    EveryNode { radius: f32, color: Rgba },
    /// A dot on every marker (star point) only
    Markers { radius: f32, color: Rgba },
}

/// Per-kind drawing parameters, resolved once when the layout is built
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardStyle {
    pub background: Rgba,
    pub edge_thickness: f32,
    pub edge_color: Rgba,
    pub decoration: NodeDecoration,
}

impl BoardStyle {
    fn fixed() -> Self {
        Self {
            background: palette::FIXED_BACKGROUND,
            edge_thickness: 3.0,
            edge_color: palette::DARK_GRAY,
            decoration: NodeDecoration::EveryNode { radius: 6.0, color: palette::FIXED_DOT },
        }
    }

    fn grid() -> Self {
        Self {
            background: palette::GRID_BACKGROUND,
            edge_thickness: 1.5,
            edge_color: palette::BLACK,
            decoration: NodeDecoration::Markers { radius: 4.0, color: palette::BLACK },
        }
    }
}

/// Complete screen geometry for one board session
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    kind: BoardKind,
    nodes: Vec<Point>,
    edges: Vec<Edge>,
    markers: Vec<NodeIndex>,
    metrics: DisplayMetrics,
    style: BoardStyle,
}

impl Layout {
    /// Build the layout for any board kind
    pub fn for_kind(kind: BoardKind) -> Self {
        match kind {
            BoardKind::FixedTopology => build_fixed_layout(),
            BoardKind::Grid(size) => build_grid_layout(size),
        }
    }

    pub fn kind(&self) -> BoardKind {
        self.kind
    }

    /// Node coordinates, indexed by [`NodeIndex`]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Star point node indices, in row-major order
    pub fn markers(&self) -> &[NodeIndex] {
        &self.markers
    }

    pub fn metrics(&self) -> &DisplayMetrics {
        &self.metrics
    }

    pub fn style(&self) -> &BoardStyle {
        &self.style
    }

    /// Coordinate of `node`.
    ///
    /// # Panics
    ///
    /// Panics if `node` is not a valid index for this layout.
    pub fn position(&self, node: NodeIndex) -> Point {
        assert!(
            node < self.nodes.len(),
            "node index {} out of range for a {}-node board",
            node,
            self.nodes.len()
        );
        self.nodes[node]
    }
}

/// Layout for the fixed 24-point board
pub fn build_fixed_layout() -> Layout {
    let nodes = FIXED_POSITIONS.iter().map(|&(x, y)| Point::new(x, y)).collect();
    let edges = FIXED_EDGES.iter().map(|&(a, b)| Edge::new(a, b)).collect();

    Layout {
        kind: BoardKind::FixedTopology,
        nodes,
        edges,
        markers: Vec::new(),
        metrics: DisplayMetrics {
            piece_radius: FIXED_PIECE_RADIUS,
            hit_radius: FIXED_HIT_RADIUS,
            window_width: FIXED_WINDOW_WIDTH,
            window_height: FIXED_WINDOW_HEIGHT,
            status_anchor: Point::new(STATUS_PADDING, FIXED_STATUS_Y),
            status_font_size: STATUS_FONT_SIZE,
        },
        style: BoardStyle::fixed(),
    }
}

/// Layout for a `size` x `size` grid board
pub fn build_grid_layout(size: GridSize) -> Layout {
    let n = size.get();
    let cell = size.cell_size();
    let margin = cell + 10;
    let extent = (n as u32 - 1) * cell;

    let natural_width = extent + margin * 2;
    let window_width = natural_width.max(MIN_GRID_WINDOW_WIDTH);
    let window_height = margin + extent + STATUS_BAND_HEIGHT;
    let offset_x = (window_width - natural_width) as f32 / 2.0;

    let mut nodes = Vec::with_capacity(n * n);
    let mut markers = Vec::new();
    for row in 0..n {
        for col in 0..n {
            let x = offset_x + (margin + col as u32 * cell) as f32;
            let y = (margin + row as u32 * cell) as f32;
            nodes.push(Point::new(x, y));

            if is_star_point(row, col, n) {
                markers.push(row * n + col);
            }
        }
    }

    let mut edges = Vec::with_capacity(2 * n * (n - 1));
    for row in 0..n {
        for col in 0..n {
            let pos = row * n + col;
            if col + 1 < n {
                edges.push(Edge::new(pos, pos + 1));
            }
            if row + 1 < n {
                edges.push(Edge::new(pos, pos + n));
            }
        }
    }

    let cell = cell as f32;
    Layout {
        kind: BoardKind::Grid(size),
        nodes,
        edges,
        markers,
        metrics: DisplayMetrics {
            piece_radius: cell * GRID_PIECE_RATIO,
            hit_radius: cell * GRID_HIT_RATIO,
            window_width,
            window_height,
            status_anchor: Point::new(STATUS_PADDING, (margin + extent + STATUS_GAP) as f32),
            status_font_size: STATUS_FONT_SIZE,
        },
        style: BoardStyle::grid(),
    }
}

/// Star points (hoshi) for the conventional board sizes.
///
/// Other sizes have none.
pub fn is_star_point(row: usize, col: usize, size: usize) -> bool {
    match size {
        9 => ((row == 2 || row == 6) && (col == 2 || col == 6)) || (row == 4 && col == 4),
        13 => matches!(row, 3 | 6 | 9) && matches!(col, 3 | 6 | 9),
        19 => matches!(row, 3 | 9 | 15) && matches!(col, 3 | 9 | 15),
        _ => false,
    }
}
