use eframe::egui;

/// Blocking yes/no prompt; delete-all only proceeds on an explicit yes.
pub struct ConfirmModal {
    open: bool,
    message: String,
    confirm_label: String,
}

impl ConfirmModal {
    pub fn new() -> Self {
        Self { open: false, message: String::new(), confirm_label: "Confirm".to_string() }
    }

    pub fn request(&mut self, message: impl Into<String>, confirm_label: impl Into<String>) {
        self.message = message.into();
        self.confirm_label = confirm_label.into();
        self.open = true;
    }

    /// Some(true) on confirm, Some(false) on cancel, None while undecided.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<bool> {
        if !self.open {
            return None;
        }

        let mut result: Option<bool> = None;

        egui::Modal::new(egui::Id::new("confirm_modal")).show(ctx, |ui| {
            ui.set_width(400.0);

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(24.0).color(egui::Color32::YELLOW));
                ui.label(
                    egui::RichText::new(&self.message).size(14.0).color(egui::Color32::WHITE),
                );
            });

            ui.add_space(15.0);

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(&self.confirm_label).clicked() {
                    result = Some(true);
                }
                if ui.button("Cancel").clicked() {
                    result = Some(false);
                }
            });
        });

        if result.is_some() {
            self.open = false;
        }
        result
    }
}

impl Default for ConfirmModal {
    fn default() -> Self {
        Self::new()
    }
}
