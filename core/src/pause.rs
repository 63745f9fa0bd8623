// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pause overlay drawn over a running board

use crate::menu::{MenuGeometry, MenuList};
use crate::palette;
use crate::surface::{Key, Rect, Surface};

/// Entries of the pause overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauseOption {
    Resume,
    MainMenu,
    Quit,
}

/// Dimmed veil plus a menu centred in the board window
#[derive(Debug, Clone)]
pub struct PauseOverlay {
    menu: MenuList<PauseOption>,
    veil: Rect,
}

impl PauseOverlay {
    /// Overlay for a `width` x `height` board window
    pub fn new(width: u32, height: u32) -> Self {
        let center_y = height as f32 / 2.0;
        let geometry = MenuGeometry {
            width: width as f32,
            title_y: center_y - 110.0,
            title_font: 40.0,
            start_y: center_y - 50.0,
            item_font: 24.0,
            item_height: 40.0,
            hint_y: center_y + 80.0,
            hint_font: 16.0,
        };
        let menu = MenuList::new(
            "PAUSED",
            "Esc: Resume    Enter: Confirm",
            vec![
                (PauseOption::Resume, "Resume"),
                (PauseOption::MainMenu, "Main Menu"),
                (PauseOption::Quit, "Quit"),
            ],
            geometry,
        );

        Self {
            menu,
            veil: Rect::new(0.0, 0.0, width as f32, height as f32),
        }
    }

    pub fn selected(&self) -> PauseOption {
        self.menu.selected()
    }

    /// Escape resumes; everything else goes to the menu list
    pub fn handle_input<S: Surface>(&mut self, surface: &S) -> Option<PauseOption> {
        if surface.is_key_pressed(Key::Escape) {
            return Some(PauseOption::Resume);
        }
        self.menu.handle_input(surface)
    }

    /// Draw on top of whatever the frame already holds
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        surface.rect_filled(self.veil, palette::PAUSE_VEIL);
        self.menu.draw(surface);
    }
}
