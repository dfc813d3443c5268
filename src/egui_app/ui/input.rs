use super::*;
use crate::page::Page;

#[derive(Clone, Copy, Debug, Default)]
pub(super) struct InputSnapshot {
    pub escape: bool,
    pub arrow_left: bool,
    pub arrow_right: bool,
    pub alt: bool,
}

impl InputSnapshot {
    pub(super) fn capture(ctx: &egui::Context) -> Self {
        ctx.input(|i| Self {
            escape: i.key_pressed(egui::Key::Escape),
            arrow_left: i.key_pressed(egui::Key::ArrowLeft),
            arrow_right: i.key_pressed(egui::Key::ArrowRight),
            alt: i.modifiers.alt,
        })
    }
}

/// Keyboard action for the page on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum KeyAction {
    Back,
    Forward,
    PrevImage,
    NextImage,
    CloseViewer,
    PrevPage,
    NextPage,
}

pub(super) fn key_action(input: InputSnapshot, page: &Page) -> Option<KeyAction> {
    if input.alt {
        return match (input.arrow_left, input.arrow_right) {
            (true, _) => Some(KeyAction::Back),
            (_, true) => Some(KeyAction::Forward),
            _ => None,
        };
    }
    match page {
        Page::FullSize { .. } if input.escape => Some(KeyAction::CloseViewer),
        Page::FullSize { .. } if input.arrow_left => Some(KeyAction::PrevImage),
        Page::FullSize { .. } if input.arrow_right => Some(KeyAction::NextImage),
        Page::Thumbnails { .. } if input.arrow_left => Some(KeyAction::PrevPage),
        Page::Thumbnails { .. } if input.arrow_right => Some(KeyAction::NextPage),
        _ => None,
    }
}

impl EguiApp {
    /// Arrow keys and Escape, ignored while a text field has focus.
    pub(super) fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let input = InputSnapshot::capture(ctx);
        let Some(action) = key_action(input, self.controller.page()) else {
            return;
        };
        match action {
            KeyAction::Back => self.controller.back(),
            KeyAction::Forward => self.controller.forward(),
            KeyAction::PrevImage => self.controller.prev_image(),
            KeyAction::NextImage => self.controller.next_image(),
            KeyAction::CloseViewer => self.controller.close_viewer(),
            KeyAction::PrevPage => self.controller.prev_page(),
            KeyAction::NextPage => self.controller.next_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Route;

    fn viewer() -> Page {
        Page::from_route(Route::FullSize {
            category: "design".into(),
            resource: "logos".into(),
            image: 0,
        })
    }

    #[test]
    fn arrows_step_images_in_the_viewer() {
        let input = InputSnapshot {
            arrow_right: true,
            ..Default::default()
        };
        assert_eq!(key_action(input, &viewer()), Some(KeyAction::NextImage));
        let input = InputSnapshot {
            escape: true,
            ..Default::default()
        };
        assert_eq!(key_action(input, &viewer()), Some(KeyAction::CloseViewer));
    }

    #[test]
    fn alt_arrows_walk_history_everywhere() {
        let input = InputSnapshot {
            arrow_left: true,
            alt: true,
            ..Default::default()
        };
        assert_eq!(key_action(input, &Page::About), Some(KeyAction::Back));
        assert_eq!(key_action(input, &viewer()), Some(KeyAction::Back));
    }

    #[test]
    fn plain_arrows_do_nothing_on_static_pages() {
        let input = InputSnapshot {
            arrow_left: true,
            ..Default::default()
        };
        assert_eq!(key_action(input, &Page::Home), None);
        let thumbnails = Page::from_route(Route::Thumbnails {
            category: "design".into(),
            page: 2,
        });
        assert_eq!(key_action(input, &thumbnails), Some(KeyAction::PrevPage));
    }
}
