use super::style;
use super::thumbnails::fit_size;
use super::*;
use crate::egui_app::controller::ImageView;
use crate::images::ImageKind;
use crate::page::Page;
use crate::remote::RemoteData;
use eframe::egui::{RichText, Ui, load::SizedTexture};

/// Snapshot of the viewer state taken before rendering borrows the controller.
struct ViewerState {
    category_title: String,
    album_title: String,
    image: usize,
    count: usize,
    current_url: Option<String>,
}

impl EguiApp {
    pub(super) fn render_viewer(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let Page::FullSize {
            category,
            resource,
            image,
            album,
            images,
        } = self.controller.page()
        else {
            return;
        };
        let category_title = self.controller.category_title(category).to_string();
        let failure = album
            .failure()
            .map(|err| ("Album unavailable", err.clone()))
            .or_else(|| {
                images
                    .failure()
                    .map(|err| ("Could not list images", err.clone()))
            });
        let loading = !matches!(images, RemoteData::Success(_));
        let state = ViewerState {
            album_title: album
                .success()
                .map(|album| album.title.clone())
                .unwrap_or_else(|| resource.clone()),
            category_title,
            image: *image,
            count: images.success().map(Vec::len).unwrap_or(0),
            current_url: self.controller.image_url(*image).map(str::to_string),
        };

        self.render_viewer_header(ui, &state);
        ui.add_space(8.0);
        if let Some((heading, err)) = failure {
            self.render_failure(ui, heading, &err);
            return;
        }
        if loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Loading images").color(palette.text_muted));
            });
            return;
        }
        let Some(url) = state.current_url.as_deref() else {
            ui.label(RichText::new("This album has no images.").color(palette.text_muted));
            return;
        };
        self.render_image(ui, url);
        for neighbour in [state.image + 1, state.image.wrapping_sub(1)] {
            if let Some(next) = self.controller.image_url(neighbour).map(str::to_string) {
                self.controller.prefetch_image(&next, ImageKind::FullSize);
            }
        }
    }

    fn render_viewer_header(&mut self, ui: &mut Ui, state: &ViewerState) {
        let palette = style::palette();
        ui.horizontal(|ui| {
            if ui
                .button(format!("Back to {}", state.category_title))
                .on_hover_text("Esc")
                .clicked()
            {
                self.controller.close_viewer();
            }
            ui.separator();
            ui.label(RichText::new(&state.album_title).size(20.0).strong());
            if state.count == 0 {
                return;
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add_enabled(state.image + 1 < state.count, egui::Button::new("Next"))
                    .on_hover_text("Right arrow")
                    .clicked()
                {
                    self.controller.next_image();
                }
                ui.label(
                    RichText::new(format!("{} / {}", state.image + 1, state.count))
                        .color(palette.text_muted),
                );
                if ui
                    .add_enabled(state.image > 0, egui::Button::new("Previous"))
                    .on_hover_text("Left arrow")
                    .clicked()
                {
                    self.controller.prev_image();
                }
            });
        });
    }

    fn render_image(&mut self, ui: &mut Ui, url: &str) {
        let palette = style::palette();
        let bounds = ui.available_size();
        match self.controller.image_view(ui.ctx(), url, ImageKind::FullSize) {
            ImageView::Ready(texture, size) => {
                ui.centered_and_justified(|ui| {
                    let response = ui.add(
                        egui::Image::new(SizedTexture::new(texture.id(), fit_size(size, bounds)))
                            .sense(egui::Sense::click()),
                    );
                    if response.clicked() {
                        self.controller.next_image();
                    }
                });
            }
            ImageView::Loading => {
                ui.centered_and_justified(|ui| ui.spinner());
            }
            ImageView::Failed(err) => {
                ui.label(RichText::new("Image failed to load").color(palette.warning));
                ui.label(RichText::new(err).color(palette.text_muted));
                if ui.button("Retry").clicked() {
                    self.controller.retry_current();
                }
            }
        }
    }
}
