//! Spreadsheet codec: one row per verb, tense columns holding
//! comma-separated person-ordered forms. Embedded commas inside a form are
//! not escaped; a round-trip is lossless only while no form contains one.

mod xlsx;

pub use xlsx::{export, import};

pub const COL_INFINITIVE: &str = "Infinitive";
pub const COL_MEANING: &str = "Meaning";
pub const COL_IMAGE: &str = "Image";

/// Default export file name; overwrite semantics belong to the OS save dialog.
pub const EXPORT_FILE_NAME: &str = "verbs.xlsx";

pub(crate) fn split_forms(cell: &str) -> Vec<String> {
    cell.split(',').map(|form| form.trim().to_string()).collect()
}

pub(crate) fn join_forms(forms: &[String]) -> String {
    forms.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_each_form() {
        assert_eq!(split_forms("hablo, hablas ,habla"), ["hablo", "hablas", "habla"]);
    }

    #[test]
    fn split_keeps_empty_slots() {
        // A source row like "soy,,es" still lines up with person indices.
        assert_eq!(split_forms("soy,,es"), ["soy", "", "es"]);
    }

    #[test]
    fn join_is_the_inverse_without_embedded_commas() {
        let forms: Vec<String> = ["soy", "eres", "es"].iter().map(|s| s.to_string()).collect();
        assert_eq!(split_forms(&join_forms(&forms)), forms);
    }
}
