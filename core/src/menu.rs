// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game selection menu
//!
//! A vertical list of centred labels with a highlight bar, driven by
//! Up/Down (or W/S), mouse hover, Enter and clicks. The same list type backs
//! the pause overlay.

use tracing::debug;

use crate::layout::{BoardKind, GridSize};
use crate::palette;
use crate::surface::{Key, Point, PointerButton, Rect, Surface};
use crate::wrap::TextMeasure;

pub const MENU_TITLE: &str = "Board Games";
pub const MENU_WIDTH: u32 = 600;
pub const MENU_HEIGHT: u32 = 400;

const HIGHLIGHT_PADDING: f32 = 10.0;
/// Extra highlight width on top of the padding, room for the arrow
const ARROW_ROOM: f32 = 30.0;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    Morris,
    Go9,
    Go13,
    Go19,
    Quit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::Morris,
        MenuOption::Go9,
        MenuOption::Go13,
        MenuOption::Go19,
        MenuOption::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuOption::Morris => "Nine Men's Morris",
            MenuOption::Go9 => "Go (9x9)",
            MenuOption::Go13 => "Go (13x13)",
            MenuOption::Go19 => "Go (19x19)",
            MenuOption::Quit => "Quit",
        }
    }

    /// Board to open for this entry, `None` for Quit
    pub fn board_kind(&self) -> Option<BoardKind> {
        match self {
            MenuOption::Morris => Some(BoardKind::FixedTopology),
            MenuOption::Go9 => Some(BoardKind::Grid(GridSize::NINE)),
            MenuOption::Go13 => Some(BoardKind::Grid(GridSize::THIRTEEN)),
            MenuOption::Go19 => Some(BoardKind::Grid(GridSize::NINETEEN)),
            MenuOption::Quit => None,
        }
    }
}

/// Where a menu list sits inside its window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuGeometry {
    /// Width the title, items and hint are centred in
    pub width: f32,
    pub title_y: f32,
    pub title_font: f32,
    /// Top of the first item's text
    pub start_y: f32,
    pub item_font: f32,
    pub item_height: f32,
    pub hint_y: f32,
    pub hint_font: f32,
}

impl MenuGeometry {
    /// Geometry of the 600x400 main menu window
    pub fn main_menu() -> Self {
        Self {
            width: MENU_WIDTH as f32,
            title_y: 60.0,
            title_font: 40.0,
            start_y: 140.0,
            item_font: 24.0,
            item_height: 40.0,
            hint_y: 360.0,
            hint_font: 16.0,
        }
    }
}

/// Selectable list of options with a title and a hint line
#[derive(Debug, Clone)]
pub struct MenuList<T> {
    title: &'static str,
    hint: &'static str,
    items: Vec<(T, &'static str)>,
    selected: usize,
    geometry: MenuGeometry,
}

impl<T: Copy + std::fmt::Debug> MenuList<T> {
    /// # Panics
    ///
    /// Panics if `items` is empty.
    pub fn new(
        title: &'static str,
        hint: &'static str,
        items: Vec<(T, &'static str)>,
        geometry: MenuGeometry,
    ) -> Self {
        assert!(!items.is_empty(), "a menu needs at least one item");
        Self {
            title,
            hint,
            items,
            selected: 0,
            geometry,
        }
    }

    pub fn selected(&self) -> T {
        self.items[self.selected].0
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Apply this frame's input; returns the option confirmed this frame
    pub fn handle_input<S: Surface>(&mut self, surface: &S) -> Option<T> {
        let count = self.items.len();
        if surface.is_key_pressed(Key::Up) || surface.is_key_pressed(Key::W) {
            self.selected = (self.selected + count - 1) % count;
        }
        if surface.is_key_pressed(Key::Down) || surface.is_key_pressed(Key::S) {
            self.selected = (self.selected + 1) % count;
        }

        let hovered = surface
            .pointer_position()
            .and_then(|pointer| self.item_at(surface, pointer));
        if let Some(index) = hovered {
            self.selected = index;
        }

        let clicked = hovered.is_some() && surface.is_pointer_pressed(PointerButton::Primary);
        if clicked || surface.is_key_pressed(Key::Enter) {
            let option = self.selected();
            debug!(option = ?option, menu = self.title, "Menu option confirmed");
            return Some(option);
        }
        None
    }

    /// Hit area of item `index`; also where its highlight bar is drawn
    pub fn item_bounds<M: TextMeasure + ?Sized>(&self, index: usize, measure: &M) -> Rect {
        let g = &self.geometry;
        let text_width = measure.text_width(self.items[index].1, g.item_font);
        let bar_width = text_width + HIGHLIGHT_PADDING * 2.0 + ARROW_ROOM;
        let y = g.start_y + index as f32 * g.item_height;
        Rect::new((g.width - bar_width) / 2.0, y - 5.0, bar_width, g.item_height - 5.0)
    }

    fn item_at<M: TextMeasure + ?Sized>(&self, measure: &M, pointer: Point) -> Option<usize> {
        (0..self.items.len()).find(|&i| self.item_bounds(i, measure).contains(pointer))
    }

    /// Draw title, items and hint; the caller owns the frame and background
    pub fn draw<S: Surface>(&self, surface: &mut S) {
        let g = self.geometry;

        let title_width = surface.text_width(self.title, g.title_font);
        surface.text(
            self.title,
            Point::new((g.width - title_width) / 2.0, g.title_y),
            g.title_font,
            palette::MENU_TITLE,
        );

        for (index, (_, label)) in self.items.iter().enumerate() {
            let y = g.start_y + index as f32 * g.item_height;
            let text_width = surface.text_width(label, g.item_font);
            let at = Point::new((g.width - text_width) / 2.0, y);

            if index == self.selected {
                let bar = self.item_bounds(index, &*surface);
                surface.rect_filled(bar, palette::MENU_HIGHLIGHT);
                surface.text(
                    ">",
                    Point::new(bar.x + HIGHLIGHT_PADDING, y),
                    g.item_font,
                    palette::MENU_SELECTED,
                );
                surface.text(label, at, g.item_font, palette::MENU_SELECTED);
            } else {
                surface.text(label, at, g.item_font, palette::MENU_TEXT);
            }
        }

        let hint_width = surface.text_width(self.hint, g.hint_font);
        surface.text(
            self.hint,
            Point::new((g.width - hint_width) / 2.0, g.hint_y),
            g.hint_font,
            palette::MENU_HINT,
        );
    }
}

/// The game selection menu
pub fn main_menu() -> MenuList<MenuOption> {
    MenuList::new(
        "BOARD GAMES",
        "Up/Down: Select    Enter: Confirm",
        MenuOption::ALL.iter().map(|o| (*o, o.label())).collect(),
        MenuGeometry::main_menu(),
    )
}

/// Size the window for the main menu and return a fresh menu
pub fn open_main_menu<S: Surface>(surface: &mut S) -> MenuList<MenuOption> {
    surface.configure_window(MENU_TITLE, MENU_WIDTH, MENU_HEIGHT);
    main_menu()
}

/// Draw one complete main menu frame
pub fn render_main_menu<S: Surface>(menu: &MenuList<MenuOption>, surface: &mut S) {
    surface.begin_frame();
    surface.clear(palette::MENU_BACKGROUND);
    menu.draw(surface);
    surface.end_frame();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{DrawCall, RecordingSurface};

    fn item_center(menu: &MenuList<MenuOption>, index: usize) -> Point {
        let r = menu.item_bounds(index, &RecordingSurface::new());
        Point::new(r.x + r.width / 2.0, r.y + r.height / 2.0)
    }

    #[test]
    fn test_keyboard_navigation_wraps() {
        let mut menu = main_menu();
        let mut surface = RecordingSurface::new();

        surface.press_key(Key::Up);
        assert_eq!(menu.handle_input(&surface), None);
        assert_eq!(menu.selected(), MenuOption::Quit);

        surface.next_frame();
        surface.press_key(Key::S);
        menu.handle_input(&surface);
        assert_eq!(menu.selected(), MenuOption::Morris);

        surface.next_frame();
        surface.press_key(Key::Down);
        menu.handle_input(&surface);
        surface.next_frame();
        surface.press_key(Key::W);
        menu.handle_input(&surface);
        assert_eq!(menu.selected(), MenuOption::Morris);
    }

    #[test]
    fn test_enter_confirms_selection() {
        let mut menu = main_menu();
        let mut surface = RecordingSurface::new();
        surface.press_key(Key::Down);
        surface.press_key(Key::Enter);
        assert_eq!(menu.handle_input(&surface), Some(MenuOption::Go9));
    }

    #[test]
    fn test_hover_selects_and_click_confirms() {
        let mut menu = main_menu();
        let mut surface = RecordingSurface::new();

        surface.hover(item_center(&menu, 3));
        assert_eq!(menu.handle_input(&surface), None);
        assert_eq!(menu.selected(), MenuOption::Go19);

        surface.click_at(item_center(&menu, 2));
        assert_eq!(menu.handle_input(&surface), Some(MenuOption::Go13));
    }

    #[test]
    fn test_click_outside_items_does_nothing() {
        let mut menu = main_menu();
        let mut surface = RecordingSurface::new();
        surface.click_at(Point::new(5.0, 5.0));
        assert_eq!(menu.handle_input(&surface), None);
        assert_eq!(menu.selected(), MenuOption::Morris);
    }

    #[test]
    fn test_board_kinds() {
        assert_eq!(MenuOption::Morris.board_kind(), Some(BoardKind::FixedTopology));
        assert_eq!(MenuOption::Go13.board_kind(), Some(BoardKind::Grid(GridSize::THIRTEEN)));
        assert_eq!(MenuOption::Quit.board_kind(), None);
    }

    #[test]
    fn test_render_main_menu() {
        let mut surface = RecordingSurface::new();
        let menu = open_main_menu(&mut surface);
        assert_eq!(surface.window, Some((MENU_TITLE.to_string(), 600, 400)));

        render_main_menu(&menu, &mut surface);
        let frame = &surface.presented[0];
        assert_eq!(frame[0], DrawCall::Clear(palette::MENU_BACKGROUND));

        let texts: Vec<&str> = frame
            .iter()
            .filter_map(|c| match c {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts[0], "BOARD GAMES");
        assert!(texts.contains(&">"));
        assert!(texts.contains(&"Go (19x19)"));
        assert_eq!(*texts.last().unwrap(), "Up/Down: Select    Enter: Confirm");

        let bars = frame
            .iter()
            .filter(|c| matches!(c, DrawCall::RectFilled { color: palette::MENU_HIGHLIGHT, .. }))
            .count();
        assert_eq!(bars, 1);
    }

    #[test]
    fn test_title_is_centered() {
        let mut surface = RecordingSurface::new();
        main_menu().draw(&mut surface);
        match &surface.frame[0] {
            DrawCall::Text { text, at, font_size, .. } => {
                assert_eq!(text, "BOARD GAMES");
                // 11 chars * 20px
                assert_eq!(*font_size, 40.0);
                assert!((at.x - (600.0 - 220.0) / 2.0).abs() < 1e-3);
            }
            other => panic!("expected title, got {:?}", other),
        }
    }
}
