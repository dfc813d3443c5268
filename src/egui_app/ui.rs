//! egui renderer for the application UI.

mod chrome;
mod input;
mod pages;
pub mod style;
mod thumbnails;
mod viewer;

use std::time::Duration;

use crate::config::AppConfig;
use crate::egui_app::controller::EguiController;
use eframe::egui;

/// Repaint cadence while fetches or image loads are outstanding.
const PENDING_REPAINT: Duration = Duration::from_millis(60);

/// Renders the egui UI using the shared controller state.
pub struct EguiApp {
    controller: EguiController,
    visuals_set: bool,
    last_title: String,
}

impl EguiApp {
    /// Build the app from loaded configuration and show the first page.
    pub fn new(config: AppConfig, initial_location: Option<&str>) -> Self {
        let mut controller = EguiController::new(config);
        controller.start(initial_location);
        Self::with_controller(controller)
    }

    pub fn with_controller(controller: EguiController) -> Self {
        Self {
            controller,
            visuals_set: false,
            last_title: String::new(),
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context) {
        if self.visuals_set {
            return;
        }
        let mut visuals = egui::Visuals::dark();
        style::apply_visuals(&mut visuals);
        ctx.set_visuals(visuals);
        self.visuals_set = true;
    }

    fn sync_window_title(&mut self, ctx: &egui::Context) {
        let site = &self.controller.config().site.title;
        let title = if self.controller.ui.title.is_empty() {
            site.clone()
        } else {
            format!("{} - {site}", self.controller.ui.title)
        };
        if title != self.last_title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.last_title = title;
        }
    }
}

impl eframe::App for EguiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_visuals(ctx);
        self.controller.poll_background_jobs();
        self.handle_keys(ctx);
        self.render_top_bar(ctx);
        self.render_status(ctx);
        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(style::palette().bg_primary)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| self.render_page(ui));
        self.sync_window_title(ctx);
        if self.controller.has_pending_work() {
            ctx.request_repaint_after(PENDING_REPAINT);
        }
    }
}

impl Drop for EguiApp {
    fn drop(&mut self) {
        if let Err(err) = self.controller.persist_location() {
            tracing::warn!("Failed to save last location: {err}");
        }
    }
}
