use super::style;
use super::*;
use crate::egui_app::controller::HistoryMode;
use crate::route::Route;
use eframe::egui::{Frame, Margin, RichText, StrokeKind};

impl EguiApp {
    pub(super) fn render_top_bar(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::top("top_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_secondary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let site = self.controller.config().site.title.clone();
                    let home = ui.add(
                        egui::Label::new(
                            RichText::new(site).strong().size(18.0).color(palette.accent),
                        )
                        .sense(egui::Sense::click()),
                    );
                    if home.clicked() {
                        self.controller.navigate_to(Route::Home, HistoryMode::Push);
                    }
                    ui.add_space(16.0);
                    self.render_nav_links(ui);
                });
                ui.add_space(6.0);
                ui.horizontal(|ui| self.render_address_bar(ui));
            });
    }

    fn render_nav_links(&mut self, ui: &mut egui::Ui) {
        let current = self.controller.page().route();
        let mut links = vec![("Home".to_string(), Route::Home)];
        links.extend(self.controller.config().categories.iter().map(|category| {
            (
                category.title.clone(),
                Route::Thumbnails {
                    category: category.slug.clone(),
                    page: 1,
                },
            )
        }));
        links.push(("About".to_string(), Route::About));
        links.push(("Resume".to_string(), Route::Resume));
        for (label, route) in links {
            let active = match &route {
                Route::Thumbnails { category, .. } => current.category() == Some(category.as_str()),
                _ => current == route,
            };
            if ui.selectable_label(active, label).clicked() {
                self.controller.navigate_to(route, HistoryMode::Push);
            }
        }
    }

    fn render_address_bar(&mut self, ui: &mut egui::Ui) {
        let can_back = self.controller.history().can_go_back();
        let can_forward = self.controller.history().can_go_forward();
        if ui
            .add_enabled(can_back, egui::Button::new("<"))
            .on_hover_text("Back (Alt+Left)")
            .clicked()
        {
            self.controller.back();
        }
        if ui
            .add_enabled(can_forward, egui::Button::new(">"))
            .on_hover_text("Forward (Alt+Right)")
            .clicked()
        {
            self.controller.forward();
        }
        let go_width = 36.0;
        let edit = egui::TextEdit::singleline(&mut self.controller.ui.address)
            .desired_width((ui.available_width() - go_width - 8.0).max(120.0))
            .hint_text("/portfolio/...");
        let response = ui.add(edit);
        let submitted =
            response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if submitted || ui.button("Go").clicked() {
            let location = self.controller.ui.address.clone();
            self.controller.navigate(&location);
        }
    }

    pub(super) fn render_status(&mut self, ctx: &egui::Context) {
        let palette = style::palette();
        egui::TopBottomPanel::bottom("status_bar")
            .frame(
                Frame::new()
                    .fill(palette.bg_primary)
                    .stroke(style::section_stroke())
                    .inner_margin(Margin::symmetric(8, 4)),
            )
            .show(ctx, |ui| {
                let status = &self.controller.ui.status;
                ui.horizontal(|ui| {
                    let (badge_rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                    ui.painter().rect_filled(badge_rect, 0.0, status.badge_color);
                    ui.painter().rect_stroke(
                        badge_rect,
                        0.0,
                        style::section_stroke(),
                        StrokeKind::Inside,
                    );
                    ui.add_space(6.0);
                    ui.label(RichText::new(&status.badge_label).color(palette.text_primary));
                    ui.separator();
                    ui.label(RichText::new(&status.text).color(palette.text_primary))
                        .on_hover_text(status.log_text());
                });
            });
    }
}
