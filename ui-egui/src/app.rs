// SPDX-License-Identifier: MIT OR Apache-2.0

//! eframe application wrapping the screen shell

use std::time::Duration;

use egui::ViewportCommand;

use crate::app_config::AppConfig;
use crate::egui_surface::EguiSurface;
use crate::shell::Shell;

/// Repaint interval while idle, roughly 60 frames per second
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    shell: Shell<EguiSurface>,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        let surface = EguiSurface::new(cc.egui_ctx.clone());
        Self {
            shell: Shell::new(surface, config.start),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.shell.run_frame() {
            ctx.request_repaint_after(FRAME_INTERVAL);
        } else {
            ctx.send_viewport_cmd(ViewportCommand::Close);
        }
    }
}
