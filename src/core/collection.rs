use super::models::{Tense, VerbDraft, VerbId, VerbRecord, PERSONS};

/// The in-memory verb list. Insertion order is display order before
/// filtering. Owns the "current verb" selection and a revision counter that
/// the render and remote-sync layers watch instead of receiving callbacks:
/// every mutation bumps the revision, selection changes do not.
#[derive(Debug, Default)]
pub struct VerbCollection {
    verbs: Vec<VerbRecord>,
    selected: Option<VerbId>,
    next_id: u64,
    revision: u64,
}

impl VerbCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.verbs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VerbRecord> {
        self.verbs.iter()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Appends one verb at the end and returns its freshly assigned id.
    /// Duplicate infinitives are allowed and stay independently editable.
    pub fn append(&mut self, draft: VerbDraft) -> VerbId {
        self.next_id += 1;
        let id = VerbId(self.next_id);
        self.verbs.push(VerbRecord::from_draft(id, draft));
        self.revision += 1;
        id
    }

    /// Bulk append preserving input order; used by spreadsheet import and the
    /// startup remote pull. Repeated imports accumulate rather than replace.
    pub fn extend(&mut self, drafts: impl IntoIterator<Item = VerbDraft>) {
        for draft in drafts {
            self.append(draft);
        }
    }

    pub fn get(&self, id: VerbId) -> Option<&VerbRecord> {
        self.verbs.iter().find(|v| v.id == id)
    }

    /// Removes the record with the given id. An absent id is a no-op
    /// returning false. Removing the currently selected record clears the
    /// selection.
    pub fn remove(&mut self, id: VerbId) -> bool {
        let Some(index) = self.verbs.iter().position(|v| v.id == id) else {
            return false;
        };
        self.verbs.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        self.revision += 1;
        true
    }

    /// Empties the collection and clears the selection.
    pub fn clear(&mut self) {
        self.verbs.clear();
        self.selected = None;
        self.revision += 1;
    }

    pub fn select(&mut self, id: VerbId) {
        if self.verbs.iter().any(|v| v.id == id) {
            self.selected = Some(id);
        }
    }

    pub fn selected(&self) -> Option<VerbId> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Overwrites one conjugation cell in place. The tense vector is padded
    /// with empty strings when the edit lands beyond its current length, so
    /// editing a displayed placeholder cell sticks. Returns false for an
    /// unknown id or a person index outside the six grammatical persons.
    pub fn set_conjugation(
        &mut self,
        id: VerbId,
        tense: Tense,
        person: usize,
        value: String,
    ) -> bool {
        if person >= PERSONS.len() {
            return false;
        }
        let Some(verb) = self.verbs.iter_mut().find(|v| v.id == id) else {
            return false;
        };
        let forms = verb.conjugations_mut(tense);
        if forms.len() <= person {
            forms.resize(person + 1, String::new());
        }
        forms[person] = value;
        self.revision += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(infinitive: &str) -> VerbDraft {
        VerbDraft {
            infinitive: infinitive.to_string(),
            present: vec!["a".to_string(), "b".to_string()],
            ..Default::default()
        }
    }

    fn populated(names: &[&str]) -> VerbCollection {
        let mut collection = VerbCollection::new();
        collection.extend(names.iter().map(|n| draft(n)));
        collection
    }

    #[test]
    fn extend_appends_in_order_after_existing() {
        let mut collection = populated(&["ser", "estar"]);
        collection.extend(["hablar", "comer", "vivir"].iter().map(|n| draft(n)));

        assert_eq!(collection.len(), 5);
        let order: Vec<&str> = collection.iter().map(|v| v.infinitive.as_str()).collect();
        assert_eq!(order, ["ser", "estar", "hablar", "comer", "vivir"]);
    }

    #[test]
    fn ids_are_unique_and_stable() {
        let mut collection = populated(&["ser", "ser"]);
        let ids: Vec<VerbId> = collection.iter().map(|v| v.id).collect();
        assert_ne!(ids[0], ids[1]);

        collection.remove(ids[0]);
        assert_eq!(collection.get(ids[1]).unwrap().infinitive, "ser");
    }

    #[test]
    fn remove_absent_id_is_noop() {
        let mut collection = populated(&["ser"]);
        let revision = collection.revision();
        assert!(!collection.remove(VerbId(999)));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.revision(), revision);
    }

    #[test]
    fn remove_selected_clears_selection() {
        let mut collection = populated(&["ser", "estar"]);
        let first = collection.iter().next().unwrap().id;
        collection.select(first);

        assert!(collection.remove(first));
        assert_eq!(collection.selected(), None);
    }

    #[test]
    fn remove_other_keeps_selection() {
        let mut collection = populated(&["ser", "estar"]);
        let ids: Vec<VerbId> = collection.iter().map(|v| v.id).collect();
        collection.select(ids[0]);

        assert!(collection.remove(ids[1]));
        assert_eq!(collection.selected(), Some(ids[0]));
    }

    #[test]
    fn clear_empties_and_deselects() {
        let mut collection = populated(&["ser", "estar"]);
        let first = collection.iter().next().unwrap().id;
        collection.select(first);

        collection.clear();
        assert!(collection.is_empty());
        assert_eq!(collection.selected(), None);
    }

    #[test]
    fn select_absent_id_is_noop() {
        let mut collection = populated(&["ser"]);
        collection.select(VerbId(999));
        assert_eq!(collection.selected(), None);
    }

    #[test]
    fn set_conjugation_touches_only_that_cell() {
        let mut collection = populated(&["ser", "estar"]);
        let ids: Vec<VerbId> = collection.iter().map(|v| v.id).collect();

        assert!(collection.set_conjugation(ids[0], Tense::Present, 0, "soy".to_string()));

        let edited = collection.get(ids[0]).unwrap();
        assert_eq!(edited.present, ["soy", "b"]);
        assert!(edited.past.is_empty());

        let untouched = collection.get(ids[1]).unwrap();
        assert_eq!(untouched.present, ["a", "b"]);
    }

    #[test]
    fn set_conjugation_pads_short_tense_vector() {
        let mut collection = populated(&["ser"]);
        let id = collection.iter().next().unwrap().id;

        assert!(collection.set_conjugation(id, Tense::Future, 3, "seremos".to_string()));
        let verb = collection.get(id).unwrap();
        assert_eq!(verb.future, ["", "", "", "seremos"]);
    }

    #[test]
    fn set_conjugation_rejects_bad_targets() {
        let mut collection = populated(&["ser"]);
        let id = collection.iter().next().unwrap().id;

        assert!(!collection.set_conjugation(id, Tense::Present, 6, "x".to_string()));
        assert!(!collection.set_conjugation(VerbId(999), Tense::Present, 0, "x".to_string()));
    }

    #[test]
    fn revision_tracks_mutations_not_selection() {
        let mut collection = VerbCollection::new();
        let start = collection.revision();

        let id = collection.append(draft("ser"));
        assert!(collection.revision() > start);

        let after_append = collection.revision();
        collection.select(id);
        collection.clear_selection();
        assert_eq!(collection.revision(), after_append);

        collection.set_conjugation(id, Tense::Present, 0, "soy".to_string());
        assert!(collection.revision() > after_append);
    }
}
