// SPDX-License-Identifier: MIT OR Apache-2.0

//! Free-form board marks for trying out a board without any rules

use std::fmt;

use boardgames_core::{BoardKind, NodeIndex, Player};

const CONTROLS: &str = "Click a position to cycle its mark, P to pass, Esc to pause.";

/// What is shown on a single node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mark {
    #[default]
    Empty,
    Piece(Player),
    Territory(Player),
}

impl Mark {
    /// Next mark in the click cycle
    pub fn next(self) -> Mark {
        match self {
            Mark::Empty => Mark::Piece(Player::One),
            Mark::Piece(Player::One) => Mark::Piece(Player::Two),
            Mark::Piece(Player::Two) => Mark::Territory(Player::One),
            Mark::Territory(Player::One) => Mark::Territory(Player::Two),
            Mark::Territory(Player::Two) => Mark::Empty,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::Empty => write!(f, "empty"),
            Mark::Piece(Player::One) => write!(f, "black piece"),
            Mark::Piece(Player::Two) => write!(f, "white piece"),
            Mark::Territory(Player::One) => write!(f, "black territory"),
            Mark::Territory(Player::Two) => write!(f, "white territory"),
        }
    }
}

/// Marks for every node plus the status line shown under the board
#[derive(Debug, Clone)]
pub struct Sandbox {
    marks: Vec<Mark>,
    passes: usize,
    status: String,
}

impl Sandbox {
    pub fn new(kind: BoardKind, node_count: usize) -> Self {
        let name = match kind {
            BoardKind::FixedTopology => "Nine Men's Morris".to_string(),
            BoardKind::Grid(size) => format!("Go {0}x{0}", size.get()),
        };
        Self {
            marks: vec![Mark::Empty; node_count],
            passes: 0,
            status: format!("{} board is working! {}", name, CONTROLS),
        }
    }

    /// Advance the mark on `node`, returning the new mark
    pub fn cycle(&mut self, node: NodeIndex) -> Mark {
        let mark = self.marks[node].next();
        self.marks[node] = mark;
        self.status = format!("Position {} is now {}. {}", node, mark, CONTROLS);
        mark
    }

    pub fn pass(&mut self) {
        self.passes += 1;
        self.status = format!("Pass #{}. {}", self.passes, CONTROLS);
    }

    pub fn mark(&self, node: NodeIndex) -> Mark {
        self.marks[node]
    }

    /// Non-empty marks in node order
    pub fn marks(&self) -> impl Iterator<Item = (NodeIndex, Mark)> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark != Mark::Empty)
            .map(|(node, mark)| (node, *mark))
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}
