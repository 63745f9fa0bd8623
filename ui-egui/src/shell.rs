// SPDX-License-Identifier: MIT OR Apache-2.0

//! Screen flow: main menu, a running board, and the pause overlay on top of it

use std::mem;

use boardgames_core::menu::{open_main_menu, render_main_menu, MenuList, MenuOption};
use boardgames_core::pause::{PauseOption, PauseOverlay};
use boardgames_core::{BoardKind, BoardSession, Layout, Surface};
use tracing::info;

use crate::app_config::StartScreen;
use crate::sandbox::{Mark, Sandbox};

/// A board being played, optionally paused
struct Game<S: Surface> {
    session: BoardSession<S>,
    sandbox: Sandbox,
    pause: Option<PauseOverlay>,
}

impl<S: Surface> Game<S> {
    fn open(kind: BoardKind, surface: S) -> Self {
        let layout = Layout::for_kind(kind);
        let sandbox = Sandbox::new(kind, layout.node_count());
        Self {
            session: BoardSession::new(layout, surface),
            sandbox,
            pause: None,
        }
    }

    fn update(mut self) -> Screen<S> {
        if self.session.should_close() {
            return Screen::Closed;
        }

        if let Some(overlay) = self.pause.as_mut() {
            match overlay.handle_input(self.session.surface()) {
                Some(PauseOption::Resume) => {
                    info!("Resumed");
                    self.pause = None;
                }
                Some(PauseOption::MainMenu) => {
                    info!("Back to main menu");
                    let mut surface = self.session.into_surface();
                    let menu = open_main_menu(&mut surface);
                    return Screen::Menu { menu, surface };
                }
                Some(PauseOption::Quit) => return Screen::Closed,
                None => {}
            }
            return Screen::Playing(self);
        }

        if self.session.is_pause_pressed() {
            let metrics = self.session.layout().metrics();
            self.pause = Some(PauseOverlay::new(metrics.window_width, metrics.window_height));
            info!("Paused");
            return Screen::Playing(self);
        }

        if let Some(node) = self.session.clicked_position() {
            self.sandbox.cycle(node);
        }
        if self.session.is_pass_pressed() {
            self.sandbox.pass();
        }
        Screen::Playing(self)
    }

    fn draw(&mut self) {
        self.session.begin_frame();

        for (node, mark) in self.sandbox.marks() {
            match mark {
                Mark::Piece(player) => self.session.draw_piece(node, player),
                Mark::Territory(player) => self.session.draw_territory(node, player),
                Mark::Empty => {}
            }
        }

        if self.pause.is_none() {
            if let Some(node) = self.session.hovered_position() {
                self.session.draw_highlight(node);
            }
        }

        self.session.draw_status(self.sandbox.status());

        if let Some(overlay) = &self.pause {
            overlay.draw(self.session.surface_mut());
        }

        self.session.end_frame();
    }
}

/// Which screen owns the surface right now
enum Screen<S: Surface> {
    Menu {
        menu: MenuList<MenuOption>,
        surface: S,
    },
    Playing(Game<S>),
    Closed,
}

impl<S: Surface> Screen<S> {
    fn update(self) -> Screen<S> {
        match self {
            Screen::Menu { mut menu, surface } => {
                if surface.close_requested() {
                    return Screen::Closed;
                }
                match menu.handle_input(&surface) {
                    Some(option) => match option.board_kind() {
                        Some(kind) => {
                            info!(option = option.label(), "Opening board");
                            Screen::Playing(Game::open(kind, surface))
                        }
                        None => Screen::Closed,
                    },
                    None => Screen::Menu { menu, surface },
                }
            }
            Screen::Playing(game) => game.update(),
            Screen::Closed => Screen::Closed,
        }
    }

    fn draw(&mut self) {
        match self {
            Screen::Menu { menu, surface } => render_main_menu(menu, surface),
            Screen::Playing(game) => game.draw(),
            Screen::Closed => {}
        }
    }
}

/// Owns the surface and moves it between screens
pub struct Shell<S: Surface> {
    screen: Screen<S>,
}

impl<S: Surface> Shell<S> {
    pub fn new(mut surface: S, start: StartScreen) -> Self {
        let screen = match start {
            StartScreen::Menu => {
                let menu = open_main_menu(&mut surface);
                Screen::Menu { menu, surface }
            }
            StartScreen::Board(kind) => Screen::Playing(Game::open(kind, surface)),
        };
        Self { screen }
    }

    /// Handle this frame's input, then draw whichever screen is current.
    ///
    /// Returns `false` once the application should exit.
    pub fn run_frame(&mut self) -> bool {
        let screen = mem::replace(&mut self.screen, Screen::Closed);
        self.screen = screen.update();
        self.screen.draw();

        if matches!(self.screen, Screen::Closed) {
            info!("Shutting down");
            return false;
        }
        true
    }

    /// Board on screen, if any
    pub fn board(&self) -> Option<BoardKind> {
        match &self.screen {
            Screen::Playing(game) => Some(game.session.layout().kind()),
            _ => None,
        }
    }

    pub fn sandbox(&self) -> Option<&Sandbox> {
        match &self.screen {
            Screen::Playing(game) => Some(&game.sandbox),
            _ => None,
        }
    }

    pub fn is_paused(&self) -> bool {
        matches!(&self.screen, Screen::Playing(game) if game.pause.is_some())
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.screen, Screen::Closed)
    }

    pub fn surface(&self) -> Option<&S> {
        match &self.screen {
            Screen::Menu { surface, .. } => Some(surface),
            Screen::Playing(game) => Some(game.session.surface()),
            Screen::Closed => None,
        }
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        match &mut self.screen {
            Screen::Menu { surface, .. } => Some(surface),
            Screen::Playing(game) => Some(game.session.surface_mut()),
            Screen::Closed => None,
        }
    }
}
