use serde::{
    Deserialize,
    Serialize,
};

use crate::core::{VerbDraft, VerbRecord};

/// Wire form of one verb in the remote document. Ids are session-local and
/// never persisted; the remote store holds plain records only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredVerb {
    pub infinitive: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub present: Vec<String>,
    #[serde(default)]
    pub past: Vec<String>,
    #[serde(default)]
    pub imperfect: Vec<String>,
    #[serde(default)]
    pub future: Vec<String>,
}

impl From<&VerbRecord> for StoredVerb {
    fn from(verb: &VerbRecord) -> Self {
        Self {
            infinitive: verb.infinitive.clone(),
            meaning: verb.meaning.clone(),
            image: verb.image.clone(),
            present: verb.present.clone(),
            past: verb.past.clone(),
            imperfect: verb.imperfect.clone(),
            future: verb.future.clone(),
        }
    }
}

impl From<StoredVerb> for VerbDraft {
    fn from(stored: StoredVerb) -> Self {
        Self {
            infinitive: stored.infinitive,
            meaning: stored.meaning,
            image: stored.image,
            present: stored.present,
            past: stored.past,
            imperfect: stored.imperfect,
            future: stored.future,
        }
    }
}
