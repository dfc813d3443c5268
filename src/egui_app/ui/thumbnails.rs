use super::style;
use super::*;
use crate::content::Album;
use crate::egui_app::controller::ImageView;
use crate::images::ImageKind;
use crate::page::Page;
use crate::remote::RemoteData;
use eframe::egui::{RichText, Ui, Vec2, load::SizedTexture};

/// Displayed edge of one thumbnail cell.
const CELL_EDGE: f32 = 220.0;
const CELL_SPACING: f32 = 16.0;

/// Grid columns that fit in `width`; at least one.
pub(super) fn column_count(width: f32) -> usize {
    (((width + CELL_SPACING) / (CELL_EDGE + CELL_SPACING)).floor() as usize).max(1)
}

/// Scale `image` to fit inside `bounds`, never enlarging it.
pub(super) fn fit_size(image: [usize; 2], bounds: Vec2) -> Vec2 {
    let [width, height] = image;
    if width == 0 || height == 0 {
        return Vec2::ZERO;
    }
    let size = Vec2::new(width as f32, height as f32);
    let scale = (bounds.x / size.x).min(bounds.y / size.y).min(1.0);
    size * scale
}

impl EguiApp {
    pub(super) fn render_thumbnails(&mut self, ui: &mut Ui) {
        let palette = style::palette();
        let Page::Thumbnails {
            category,
            page,
            collection,
        } = self.controller.page()
        else {
            return;
        };
        let title = self.controller.category_title(category).to_string();
        let page = *page;
        let albums = match collection.as_ref() {
            RemoteData::Success(collection) => Ok(collection.albums.clone()),
            RemoteData::Failure(err) => Err(Some(err.clone())),
            RemoteData::NotAsked | RemoteData::Loading => Err(None),
        };
        ui.heading(&title);
        ui.add_space(8.0);
        let albums = match albums {
            Ok(albums) => albums,
            Err(None) => {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new("Loading albums").color(palette.text_muted));
                });
                return;
            }
            Err(Some(err)) => {
                self.render_failure(ui, &format!("Could not load {title}"), &err);
                return;
            }
        };
        let Some(pagination) = self.controller.pagination() else {
            return;
        };
        if albums.is_empty() {
            ui.label(RichText::new("No albums yet.").color(palette.text_muted));
            return;
        }
        self.render_pager(ui, page, pagination.page_count());
        self.render_thumbnail_retry(ui);
        ui.add_space(8.0);
        let visible = &albums[pagination.range(page)];
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let columns = column_count(ui.available_width());
                egui::Grid::new("thumbnail_grid")
                    .spacing(egui::vec2(CELL_SPACING, CELL_SPACING))
                    .show(ui, |ui| {
                        for (index, album) in visible.iter().enumerate() {
                            self.render_album_cell(ui, album);
                            if (index + 1) % columns == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });
    }

    fn render_album_cell(&mut self, ui: &mut Ui, album: &Album) {
        let palette = style::palette();
        ui.vertical(|ui| {
            ui.set_width(CELL_EDGE);
            let cell = egui::vec2(CELL_EDGE, CELL_EDGE);
            let view = match &album.thumbnail_url {
                Some(url) => self
                    .controller
                    .image_view(ui.ctx(), url, ImageKind::Thumbnail),
                None => ImageView::Failed("No thumbnail".into()),
            };
            let response = match view {
                ImageView::Ready(texture, size) => ui.add_sized(
                    cell,
                    egui::Image::new(SizedTexture::new(texture.id(), fit_size(size, cell)))
                        .sense(egui::Sense::click()),
                ),
                ImageView::Loading => ui.add_sized(cell, egui::Spinner::new()),
                ImageView::Failed(err) => ui
                    .add_sized(
                        cell,
                        egui::Button::new(RichText::new(&album.title).color(palette.text_muted)),
                    )
                    .on_hover_text(err),
            };
            let title = ui.add(
                egui::Label::new(RichText::new(&album.title).strong())
                    .sense(egui::Sense::click()),
            );
            if !album.description.is_empty() {
                ui.label(RichText::new(&album.description).color(palette.text_muted));
            }
            if response.clicked() || title.clicked() {
                self.controller.open_album(&album.slug);
            }
        });
    }

    fn render_pager(&mut self, ui: &mut Ui, page: usize, page_count: usize) {
        if page_count <= 1 {
            return;
        }
        ui.horizontal(|ui| {
            if ui
                .add_enabled(page > 1, egui::Button::new("Previous"))
                .clicked()
            {
                self.controller.prev_page();
            }
            ui.label(format!("Page {page} of {page_count}"));
            if ui
                .add_enabled(page < page_count, egui::Button::new("Next"))
                .clicked()
            {
                self.controller.next_page();
            }
        });
    }

    fn render_thumbnail_retry(&mut self, ui: &mut Ui) {
        let failed = self.controller.failed_image_count();
        if failed == 0 {
            return;
        }
        let palette = style::palette();
        ui.horizontal(|ui| {
            let noun = if failed == 1 { "thumbnail" } else { "thumbnails" };
            ui.label(RichText::new(format!("{failed} {noun} failed to load")).color(palette.warning));
            if ui.button("Retry failed thumbnails").clicked() {
                self.controller.retry_current();
            }
        });
    }

    pub(super) fn render_failure(&mut self, ui: &mut Ui, heading: &str, err: &str) {
        let palette = style::palette();
        ui.label(RichText::new(heading).strong().color(palette.warning));
        ui.label(RichText::new(err).color(palette.text_muted));
        ui.add_space(8.0);
        if ui.button("Retry").clicked() {
            self.controller.retry_current();
        }
    }
}
