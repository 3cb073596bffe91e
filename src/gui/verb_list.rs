use eframe::egui;

use super::{
    actions::{ActionQueue, UiAction},
    theme::Theme,
};
use crate::core::{filter_verbs, VerbCollection, VerbId};

/// Left panel: search box, match count, and the filtered verb list with
/// per-row select and delete. The filter runs off the live collection every
/// frame, so every mutation re-renders through it.
pub fn show(
    ctx: &egui::Context,
    collection: &VerbCollection,
    search: &mut String,
    actions: &mut ActionQueue,
    theme: &Theme,
) {
    let selected = collection.selected();
    let rows: Vec<(VerbId, String, bool)> = filter_verbs(collection, search)
        .into_iter()
        .map(|verb| (verb.id, verb.display_name(), Some(verb.id) == selected))
        .collect();

    egui::SidePanel::left("verb_list").default_width(300.0).show(ctx, |ui| {
        ui.add_space(6.0);
        ui.heading(theme.heading("Verbs"));

        ui.add(egui::TextEdit::singleline(search).hint_text("Search infinitive or meaning"));

        ui.horizontal(|ui| {
            ui.label(theme.muted(&format!("{} verbs", rows.len())));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Delete All").clicked() {
                    actions.push(UiAction::RequestDeleteAll);
                }
            });
        });

        ui.separator();

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for (id, display_name, is_selected) in &rows {
                ui.horizontal(|ui| {
                    if ui.selectable_label(*is_selected, display_name).clicked() {
                        actions.push(UiAction::Select(*id));
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("Delete").clicked() {
                            actions.push(UiAction::Delete(*id));
                        }
                    });
                });
            }
        });
    });
}
