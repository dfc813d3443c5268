//! Entry point for the folio portfolio viewer.
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]
use eframe::egui;
use egui::viewport::IconData;
use folio::config;
use folio::egui_app::ui::EguiApp;
use folio::logging;

const MIN_VIEWPORT_SIZE: egui::Vec2 = egui::vec2(720.0, 480.0);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init() {
        eprintln!("Logging disabled: {err}");
    }

    // First argument is an optional starting location, e.g. `/portfolio/design`.
    let initial_location = std::env::args().nth(1);
    let config = config::load_or_default();

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(egui::vec2(1280.0, 860.0))
        .with_min_inner_size(MIN_VIEWPORT_SIZE);
    if let Some(icon) = decode_icon(include_bytes!("../assets/folio.png")) {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Folio",
        native_options,
        Box::new(move |_cc| match config {
            Ok(config) => Ok(Box::new(EguiApp::new(config, initial_location.as_deref()))),
            Err(err) => {
                tracing::error!("Failed to load config: {err}");
                Ok(Box::new(LaunchError {
                    message: format!("Failed to load config: {err}"),
                }))
            }
        }),
    )?;
    Ok(())
}

/// Convert raw embedded bytes into icon-friendly RGBA data.
fn decode_icon(bytes: &[u8]) -> Option<IconData> {
    let image = image::load_from_memory(bytes).ok()?.to_rgba8();
    let (width, height) = image.dimensions();
    Some(IconData {
        rgba: image.into_raw(),
        width,
        height,
    })
}

/// Minimal fallback app to display initialization errors.
struct LaunchError {
    message: String,
}

impl eframe::App for LaunchError {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Failed to start");
                ui.label(&self.message);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_icon_decodes() {
        let icon = decode_icon(include_bytes!("../assets/folio.png")).unwrap();
        assert_eq!((icon.width, icon.height), (64, 64));
    }
}
