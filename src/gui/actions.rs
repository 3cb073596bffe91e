use crate::core::{Tense, VerbId};

// A simple ui action queue so panel functions don't need mutable references
// to the collection while they are borrowing it for display.
#[derive(Debug, Clone)]
pub enum UiAction {
    // Verb list
    Select(VerbId),
    Delete(VerbId),
    RequestDeleteAll,

    // Detail editor
    EditCell { id: VerbId, tense: Tense, person: usize, value: String },
    Speak,
    SaveChanges,

    // File + remote surface
    ImportSpreadsheet,
    ExportSpreadsheet,
    SendToRemote,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}
