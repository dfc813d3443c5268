use super::style;
use super::*;
use crate::egui_app::controller::HistoryMode;
use crate::route::Route;
use eframe::egui::{RichText, Ui};

impl EguiApp {
    pub(super) fn render_page(&mut self, ui: &mut Ui) {
        match self.controller.page().route() {
            Route::Home => self.render_home(ui),
            Route::About => self.render_about(ui),
            Route::Resume => self.render_resume(ui),
            Route::Thumbnails { .. } => self.render_thumbnails(ui),
            Route::FullSize { .. } => self.render_viewer(ui),
            Route::NotFound { location } => self.render_not_found(ui, &location),
        }
    }

    fn render_home(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let site = self.controller.config().site.clone();
        let categories = self.controller.config().categories.clone();
        ui.vertical_centered(|ui| {
            ui.add_space(48.0);
            ui.label(RichText::new(&site.title).size(40.0).strong());
            if !site.tagline.is_empty() {
                ui.label(RichText::new(&site.tagline).size(18.0).color(palette.text_muted));
            }
            if !site.owner.is_empty() {
                ui.label(RichText::new(&site.owner).color(palette.text_muted));
            }
            ui.add_space(32.0);
            for category in categories {
                let button = egui::Button::new(RichText::new(&category.title).size(20.0))
                    .min_size(egui::vec2(240.0, 44.0));
                if ui.add(button).clicked() {
                    self.controller.navigate_to(
                        Route::Thumbnails {
                            category: category.slug.clone(),
                            page: 1,
                        },
                        HistoryMode::Push,
                    );
                }
                ui.add_space(8.0);
            }
        });
    }

    fn render_about(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let about = self.controller.config().about.clone();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("About");
                ui.add_space(12.0);
                for paragraph in &about.paragraphs {
                    ui.label(RichText::new(paragraph).size(15.0));
                    ui.add_space(10.0);
                }
                if about.links.is_empty() {
                    return;
                }
                ui.separator();
                ui.label(RichText::new("Contact").strong().color(palette.text_muted));
                for link in &about.links {
                    if ui.link(&link.label).on_hover_text(&link.url).clicked() {
                        self.controller.open_external(&link.url);
                    }
                }
            });
    }

    fn render_resume(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let resume = self.controller.config().resume.clone();
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Resume");
                    if let Some(url) = &resume.download_url
                        && ui.link("Download").on_hover_text(url).clicked()
                    {
                        self.controller.open_external(url);
                    }
                });
                if resume.sections.is_empty() {
                    ui.label(RichText::new("Nothing here yet.").color(palette.text_muted));
                }
                for section in &resume.sections {
                    ui.add_space(16.0);
                    ui.label(RichText::new(&section.title).size(20.0).color(palette.accent));
                    ui.separator();
                    for entry in &section.entries {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&entry.heading).strong());
                            if let Some(period) = &entry.period {
                                ui.label(RichText::new(period).color(palette.text_muted));
                            }
                        });
                        for detail in &entry.details {
                            ui.label(format!("  - {detail}"));
                        }
                        ui.add_space(6.0);
                    }
                }
            });
    }

    fn render_not_found(&mut self, ui: &mut Ui, location: &str) {
        let palette = style::palette();
        ui.vertical_centered(|ui| {
            ui.add_space(64.0);
            ui.label(RichText::new("Page not found").size(28.0).strong());
            ui.label(RichText::new(location).monospace().color(palette.text_muted));
            ui.add_space(16.0);
            if ui.link("Back to the home page").clicked() {
                self.controller.navigate_to(Route::Home, HistoryMode::Push);
            }
        });
    }
}
