use eframe::egui;

use crate::persistence::SettingsData;

/// Edits the remote store base URL. Returns the new settings on save so the
/// app can persist them and rebuild the remote client.
pub struct RemoteSettingsModal {
    open: bool,
    url_buffer: String,
}

impl RemoteSettingsModal {
    pub fn new() -> Self {
        Self { open: false, url_buffer: String::new() }
    }

    pub fn open_with(&mut self, settings: &SettingsData) {
        self.url_buffer = settings.remote_base_url.clone().unwrap_or_default();
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsData> {
        if !self.open {
            return None;
        }

        let mut saved: Option<SettingsData> = None;

        egui::Modal::new(egui::Id::new("remote_settings_modal")).show(ctx, |ui| {
            ui.set_width(450.0);

            ui.heading("Remote Store");
            ui.add_space(10.0);

            ui.label("Base URL of the document store (leave empty to work offline):");
            ui.text_edit_singleline(&mut self.url_buffer);
            ui.label(
                egui::RichText::new("The collection is stored under the 'verbs' document.")
                    .size(11.0)
                    .color(egui::Color32::GRAY),
            );

            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save").clicked() {
                    let url = self.url_buffer.trim();
                    saved = Some(SettingsData {
                        remote_base_url: if url.is_empty() {
                            None
                        } else {
                            Some(url.to_string())
                        },
                    });
                    self.open = false;
                }
                if ui.button("Cancel").clicked() {
                    self.open = false;
                }
            });
        });

        saved
    }
}

impl Default for RemoteSettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
