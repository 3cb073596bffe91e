use super::{collection::VerbCollection, models::VerbRecord};

/// Projects the collection through the search box, preserving collection
/// order. The query is lower-cased before matching; the stored infinitive is
/// matched with its original casing while meanings are lower-cased first, so
/// infinitive search is case-sensitive on the verb side and meaning search is
/// case-insensitive. That asymmetry is long-standing display behavior and is
/// kept on purpose.
pub fn filter_verbs<'a>(collection: &'a VerbCollection, raw_query: &str) -> Vec<&'a VerbRecord> {
    let query = raw_query.to_lowercase();
    collection
        .iter()
        .filter(|verb| {
            verb.infinitive.contains(&query)
                || verb
                    .meaning
                    .as_ref()
                    .is_some_and(|meaning| meaning.to_lowercase().contains(&query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::VerbDraft;

    fn collection() -> VerbCollection {
        let mut collection = VerbCollection::new();
        collection.extend([
            VerbDraft {
                infinitive: "hablar".to_string(),
                meaning: Some("to speak".to_string()),
                ..Default::default()
            },
            VerbDraft {
                infinitive: "Hablar".to_string(),
                meaning: Some("TO SPEAK".to_string()),
                ..Default::default()
            },
            VerbDraft { infinitive: "comer".to_string(), meaning: None, ..Default::default() },
        ]);
        collection
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let collection = collection();
        let matches = filter_verbs(&collection, "");
        assert_eq!(matches.len(), collection.len());
        let order: Vec<&str> = matches.iter().map(|v| v.infinitive.as_str()).collect();
        assert_eq!(order, ["hablar", "Hablar", "comer"]);
    }

    #[test]
    fn infinitive_match_is_case_sensitive_on_the_verb_side() {
        let collection = collection();
        // The capitalized "Hablar" never contains the lower-cased query, and
        // its meaning "TO SPEAK" does not contain "hab" either.
        let matches = filter_verbs(&collection, "hab");
        let names: Vec<&str> = matches.iter().map(|v| v.infinitive.as_str()).collect();
        assert_eq!(names, ["hablar"]);
    }

    #[test]
    fn query_is_lowercased_before_matching() {
        let collection = collection();
        let matches = filter_verbs(&collection, "HAB");
        let names: Vec<&str> = matches.iter().map(|v| v.infinitive.as_str()).collect();
        assert_eq!(names, ["hablar"]);
    }

    #[test]
    fn meaning_match_is_case_insensitive() {
        let collection = collection();
        let matches = filter_verbs(&collection, "speak");
        let names: Vec<&str> = matches.iter().map(|v| v.infinitive.as_str()).collect();
        assert_eq!(names, ["hablar", "Hablar"]);
    }

    #[test]
    fn missing_meaning_never_matches_meaning_search() {
        let collection = collection();
        let matches = filter_verbs(&collection, "eat");
        assert!(matches.is_empty());
    }
}
