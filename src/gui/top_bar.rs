use eframe::egui::{self, containers};

use super::{
    actions::{ActionQueue, UiAction},
    settings_modal::RemoteSettingsModal,
    theme::Theme,
};
use crate::persistence::SettingsData;

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        actions: &mut ActionQueue,
        settings_modal: &mut RemoteSettingsModal,
        current_settings: &SettingsData,
        remote_configured: bool,
        remote_connected: bool,
        theme: &Theme,
    ) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            containers::menu::Bar::new().ui(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Import Spreadsheet…").clicked() {
                        actions.push(UiAction::ImportSpreadsheet);
                    }
                    if ui.button("Export Spreadsheet…").clicked() {
                        actions.push(UiAction::ExportSpreadsheet);
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Remote", |ui| {
                    if ui.button("Send Collection Now").clicked() {
                        actions.push(UiAction::SendToRemote);
                    }
                    if ui.button("Settings…").clicked() {
                        settings_modal.open_with(current_settings);
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    Self::show_remote_indicator(ui, remote_configured, remote_connected, theme);
                });
            });
        });
    }

    fn show_remote_indicator(
        ui: &mut egui::Ui,
        remote_configured: bool,
        remote_connected: bool,
        theme: &Theme,
    ) {
        let (color, hover) = if !remote_configured {
            (theme.comment, "Remote store not configured")
        } else if remote_connected {
            (theme.green, "Remote store reachable")
        } else {
            (theme.red, "Remote store unreachable")
        };

        ui.label(egui::RichText::new("● Remote").color(color)).on_hover_text(hover);
    }
}
