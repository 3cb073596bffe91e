/// Stable key for a verb record, assigned by the collection at creation.
/// All select/edit/delete operations resolve through this key rather than
/// list position, so a record keeps its identity across reordering removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VerbId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tense {
    Present,
    Past,
    Imperfect,
    Future,
}

impl Tense {
    pub const ALL: [Tense; 4] = [Tense::Present, Tense::Past, Tense::Imperfect, Tense::Future];

    /// Display name, which is also the spreadsheet column header.
    pub fn label(&self) -> &'static str {
        match self {
            Tense::Present => "Present",
            Tense::Past => "Past",
            Tense::Imperfect => "Imperfect",
            Tense::Future => "Future",
        }
    }
}

/// Grammatical persons, in the order conjugation cells are stored.
pub const PERSONS: [&str; 6] =
    ["Yo", "Tú", "Él/Ella/Usted", "Nosotros/as", "Vosotros/as", "Ellos/Ellas/Ustedes"];

/// A verb as parsed from a spreadsheet row or a remote document, before the
/// collection has assigned it an id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerbDraft {
    pub infinitive: String,
    pub meaning: Option<String>,
    pub image: Option<String>,
    pub present: Vec<String>,
    pub past: Vec<String>,
    pub imperfect: Vec<String>,
    pub future: Vec<String>,
}

/// One conjugation entry. Tense vectors may hold fewer than six forms when
/// the source data omitted trailing persons; display treats missing indices
/// as empty.
#[derive(Debug, Clone, PartialEq)]
pub struct VerbRecord {
    pub id: VerbId,
    pub infinitive: String,
    pub meaning: Option<String>,
    pub image: Option<String>,
    pub present: Vec<String>,
    pub past: Vec<String>,
    pub imperfect: Vec<String>,
    pub future: Vec<String>,
}

impl VerbRecord {
    pub fn from_draft(id: VerbId, draft: VerbDraft) -> Self {
        Self {
            id,
            infinitive: draft.infinitive,
            meaning: draft.meaning,
            image: draft.image,
            present: draft.present,
            past: draft.past,
            imperfect: draft.imperfect,
            future: draft.future,
        }
    }

    pub fn conjugations(&self, tense: Tense) -> &[String] {
        match tense {
            Tense::Present => &self.present,
            Tense::Past => &self.past,
            Tense::Imperfect => &self.imperfect,
            Tense::Future => &self.future,
        }
    }

    pub fn conjugations_mut(&mut self, tense: Tense) -> &mut Vec<String> {
        match tense {
            Tense::Present => &mut self.present,
            Tense::Past => &mut self.past,
            Tense::Imperfect => &mut self.imperfect,
            Tense::Future => &mut self.future,
        }
    }

    pub fn conjugation(&self, tense: Tense, person: usize) -> Option<&str> {
        self.conjugations(tense).get(person).map(String::as_str)
    }

    /// List-row and detail-header text: `infinitive (meaning)`, with "N/A"
    /// standing in for a missing meaning.
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.infinitive, self.meaning.as_deref().unwrap_or("N/A"))
    }
}
