use eframe::egui;
use egui_extras::{Column, TableBuilder};

use super::{
    actions::{ActionQueue, UiAction},
    theme::Theme,
};
use crate::core::{Tense, VerbCollection, PERSONS};

/// Central panel: the conjugation table for the selected verb, one row per
/// grammatical person across the four tenses. Every cell is editable in
/// place; a commit overwrites exactly that cell in the collection.
pub fn show(
    ctx: &egui::Context,
    collection: &VerbCollection,
    actions: &mut ActionQueue,
    theme: &Theme,
) {
    let selected = collection.selected().and_then(|id| collection.get(id));

    let Some(verb) = selected else {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.label(theme.muted("Select a verb to see its conjugations."));
            });
        });
        return;
    };

    let id = verb.id;
    let header = verb.display_name();
    // Editable buffers seeded from the record each frame; edits round-trip
    // through the action queue and land before the next paint.
    let mut grid: Vec<Vec<String>> = Tense::ALL
        .iter()
        .map(|tense| {
            (0..PERSONS.len())
                .map(|person| verb.conjugation(*tense, person).unwrap_or("").to_string())
                .collect()
        })
        .collect();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(6.0);
        ui.horizontal(|ui| {
            ui.heading(theme.bold(&header));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Save Changes").clicked() {
                    actions.push(UiAction::SaveChanges);
                }
                if ui.button("🔊 Speak").clicked() {
                    actions.push(UiAction::Speak);
                }
            });
        });
        ui.separator();

        TableBuilder::new(ui)
            .striped(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .column(Column::auto().at_least(150.0))
            .columns(Column::remainder().at_least(110.0), Tense::ALL.len())
            .header(25.0, |mut header_row| {
                header_row.col(|ui| {
                    ui.label(theme.heading("Person"));
                });
                for tense in Tense::ALL {
                    header_row.col(|ui| {
                        ui.label(theme.heading(tense.label()));
                    });
                }
            })
            .body(|body| {
                body.rows(30.0, PERSONS.len(), |mut row| {
                    let person = row.index();
                    row.col(|ui| {
                        ui.label(PERSONS[person]);
                    });
                    for (tense_index, tense) in Tense::ALL.iter().enumerate() {
                        row.col(|ui| {
                            let buffer = &mut grid[tense_index][person];
                            let response =
                                ui.add(egui::TextEdit::singleline(buffer).hint_text("-"));
                            if response.changed() {
                                actions.push(UiAction::EditCell {
                                    id,
                                    tense: *tense,
                                    person,
                                    value: buffer.clone(),
                                });
                            }
                        });
                    }
                });
            });
    });
}
