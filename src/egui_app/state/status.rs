use crate::egui_app::ui::style::{self, StatusTone};
use egui::Color32;

/// Most recent status lines kept for the hover log.
const STATUS_LOG_LIMIT: usize = 50;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
    pub tone: StatusTone,
    /// Rolling status log entries, oldest first.
    pub log: Vec<String>,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self {
            text: "Ready".into(),
            badge_label: "Idle".into(),
            badge_color: style::status_badge_color(StatusTone::Idle),
            tone: StatusTone::Idle,
            log: Vec::new(),
        }
    }

    /// Replace the visible status and append it to the log.
    pub fn set(&mut self, text: impl Into<String>, tone: StatusTone) {
        let text = text.into();
        self.badge_label = style::status_badge_label(tone).into();
        self.badge_color = style::status_badge_color(tone);
        self.tone = tone;
        if self.log.last() != Some(&text) {
            self.log.push(text.clone());
            if self.log.len() > STATUS_LOG_LIMIT {
                let excess = self.log.len() - STATUS_LOG_LIMIT;
                self.log.drain(..excess);
            }
        }
        self.text = text;
    }

    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_bounded_and_skips_repeats() {
        let mut status = StatusBarState::idle();
        status.set("same", StatusTone::Info);
        status.set("same", StatusTone::Info);
        assert_eq!(status.log.len(), 1);
        for idx in 0..(STATUS_LOG_LIMIT + 5) {
            status.set(format!("line {idx}"), StatusTone::Busy);
        }
        assert_eq!(status.log.len(), STATUS_LOG_LIMIT);
        assert_eq!(status.text, format!("line {}", STATUS_LOG_LIMIT + 4));
        assert_eq!(status.badge_label, "Loading");
        assert!(status.log_text().ends_with(&status.text));
    }
}
