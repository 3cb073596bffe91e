use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use super::theme::Theme;

const STATUS_LIFETIME: Duration = Duration::from_secs(5);

/// Transient one-line feedback strip at the bottom of the window, used for
/// sync, save, and speech outcomes that deserve a nudge but not a modal.
pub struct StatusLine {
    message: Option<(String, Instant)>,
}

impl StatusLine {
    pub fn new() -> Self {
        Self { message: None }
    }

    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), Instant::now()));
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if let Some((_, since)) = &self.message {
            if since.elapsed() > STATUS_LIFETIME {
                self.message = None;
            }
        }

        let Some((message, _)) = &self.message else {
            return;
        };

        egui::TopBottomPanel::bottom("status_line").show(ctx, |ui| {
            ui.label(theme.muted(message));
        });
    }
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new()
    }
}
