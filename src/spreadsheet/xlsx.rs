use std::{
    collections::HashMap,
    path::Path,
};

use calamine::{
    open_workbook_auto,
    Data,
    Range,
    Reader,
};
use rust_xlsxwriter::Workbook;

use super::{
    join_forms,
    split_forms,
    COL_IMAGE,
    COL_INFINITIVE,
    COL_MEANING,
};
use crate::core::{Tense, VerbDraft, VerbRecord, VerbarioError};

const SHEET_NAME: &str = "Verbs";

/// Decodes the first worksheet of an Excel file (xlsx, xls, ods) into verb
/// drafts, in file order. The first row is the header; columns are matched by
/// exact name. The whole batch fails on the first malformed row, and nothing
/// is handed to the collection until every row has parsed.
pub fn import(path: &Path) -> Result<Vec<VerbDraft>, VerbarioError> {
    let mut workbook = open_workbook_auto(path)
        .map_err(|e| VerbarioError::Spreadsheet(format!("Failed to open {:?}: {}", path, e)))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let Some(sheet_name) = sheet_names.first() else {
        return Err(VerbarioError::Spreadsheet("Workbook contains no sheets".to_string()));
    };

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|e| VerbarioError::Spreadsheet(format!("Failed to read '{}': {}", sheet_name, e)))?;

    parse_range(&range)
}

fn parse_range(range: &Range<Data>) -> Result<Vec<VerbDraft>, VerbarioError> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };

    let columns: HashMap<String, usize> = header
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| data_text(cell).map(|name| (name, index)))
        .collect();

    let mut drafts = Vec::new();
    for (index, row) in rows.enumerate() {
        // Spreadsheet row number, counting the header as row 1.
        let row_number = index + 2;

        if row.iter().all(|cell| matches!(cell, Data::Empty)) {
            continue;
        }

        let required = |field: &'static str| -> Result<String, VerbarioError> {
            columns
                .get(field)
                .and_then(|&col| row.get(col))
                .and_then(data_text)
                .ok_or(VerbarioError::MalformedRow { row: row_number, field })
        };
        let optional = |field: &str| -> Option<String> {
            columns.get(field).and_then(|&col| row.get(col)).and_then(data_text)
        };

        drafts.push(VerbDraft {
            infinitive: required(COL_INFINITIVE)?,
            meaning: optional(COL_MEANING),
            image: optional(COL_IMAGE),
            present: split_forms(&required(Tense::Present.label())?),
            past: split_forms(&required(Tense::Past.label())?),
            imperfect: split_forms(&required(Tense::Imperfect.label())?),
            future: split_forms(&required(Tense::Future.label())?),
        });
    }

    Ok(drafts)
}

fn data_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        }
        other => Some(other.to_string()),
    }
}

/// Encodes the collection back into an xlsx workbook: a `Verbs` sheet, the
/// header row, one row per record in collection order. Absent meaning/image
/// stay as empty cells so a re-import reads them as absent again.
pub fn export(verbs: &[VerbRecord], path: &Path) -> Result<(), VerbarioError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let headers = [
        COL_INFINITIVE,
        Tense::Present.label(),
        Tense::Past.label(),
        Tense::Imperfect.label(),
        Tense::Future.label(),
        COL_MEANING,
        COL_IMAGE,
    ];
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }

    for (index, verb) in verbs.iter().enumerate() {
        let row = (index + 1) as u32;
        worksheet.write_string(row, 0, &verb.infinitive)?;
        for (offset, tense) in Tense::ALL.iter().enumerate() {
            worksheet.write_string(row, (offset + 1) as u16, join_forms(verb.conjugations(*tense)))?;
        }
        if let Some(meaning) = &verb.meaning {
            worksheet.write_string(row, 5, meaning)?;
        }
        if let Some(image) = &verb.image {
            worksheet.write_string(row, 6, image)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{VerbCollection, VerbId};

    fn record(id: u64, infinitive: &str, meaning: Option<&str>) -> VerbRecord {
        VerbRecord {
            id: VerbId(id),
            infinitive: infinitive.to_string(),
            meaning: meaning.map(str::to_string),
            image: None,
            present: vec!["soy".to_string(), "eres".to_string(), "es".to_string()],
            past: vec!["fui".to_string(), "fuiste".to_string()],
            imperfect: vec!["era".to_string()],
            future: vec!["seré".to_string()],
        }
    }

    #[test]
    fn export_then_import_reproduces_records() {
        let records =
            vec![record(1, "ser", Some("to be")), record(2, "hablar", None)];

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verbs.xlsx");
        export(&records, &path).unwrap();

        let drafts = import(&path).unwrap();
        assert_eq!(drafts.len(), 2);

        assert_eq!(drafts[0].infinitive, "ser");
        assert_eq!(drafts[0].meaning.as_deref(), Some("to be"));
        assert_eq!(drafts[0].present, ["soy", "eres", "es"]);
        assert_eq!(drafts[0].past, ["fui", "fuiste"]);
        assert_eq!(drafts[0].imperfect, ["era"]);
        assert_eq!(drafts[0].future, ["seré"]);

        assert_eq!(drafts[1].infinitive, "hablar");
        assert_eq!(drafts[1].meaning, None);
        assert_eq!(drafts[1].image, None);
    }

    #[test]
    fn reimport_appends_after_existing_entries() {
        let records = vec![record(1, "ser", None)];
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("verbs.xlsx");
        export(&records, &path).unwrap();

        let mut collection = VerbCollection::new();
        collection.extend(import(&path).unwrap());
        collection.extend(import(&path).unwrap());

        assert_eq!(collection.len(), 2);
        let names: Vec<&str> = collection.iter().map(|v| v.infinitive.as_str()).collect();
        assert_eq!(names, ["ser", "ser"]);
    }

    #[test]
    fn missing_tense_column_fails_the_batch() {
        // Hand-built sheet without a Future column.
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (col, header) in ["Infinitive", "Present", "Past", "Imperfect"].iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }
        for (col, value) in ["ser", "soy", "fui", "era"].iter().enumerate() {
            sheet.write_string(1, col as u16, *value).unwrap();
        }
        workbook.save(&path).unwrap();

        match import(&path) {
            Err(VerbarioError::MalformedRow { row, field }) => {
                assert_eq!(row, 2);
                assert_eq!(field, "Future");
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn row_with_empty_required_cell_reports_its_row_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gap.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        let headers = ["Infinitive", "Present", "Past", "Imperfect", "Future"];
        for (col, header) in headers.iter().enumerate() {
            sheet.write_string(0, col as u16, *header).unwrap();
        }
        for (col, value) in ["ser", "soy", "fui", "era", "seré"].iter().enumerate() {
            sheet.write_string(1, col as u16, *value).unwrap();
        }
        // Row 3 has no Past cell.
        sheet.write_string(2, 0, "hablar").unwrap();
        sheet.write_string(2, 1, "hablo").unwrap();
        sheet.write_string(2, 3, "hablaba").unwrap();
        sheet.write_string(2, 4, "hablaré").unwrap();
        workbook.save(&path).unwrap();

        match import(&path) {
            Err(VerbarioError::MalformedRow { row, field }) => {
                assert_eq!(row, 3);
                assert_eq!(field, "Past");
            }
            other => panic!("expected MalformedRow, got {:?}", other),
        }
    }

    #[test]
    fn edited_cell_shows_up_in_the_next_export() {
        let mut collection = VerbCollection::new();
        collection.extend(vec![ser_draft()]);
        let id = collection.iter().next().unwrap().id;
        collection.set_conjugation(id, Tense::Present, 0, "SOY".to_string());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("edited.xlsx");
        let records: Vec<VerbRecord> = collection.iter().cloned().collect();
        export(&records, &path).unwrap();

        let drafts = import(&path).unwrap();
        assert_eq!(drafts[0].present[0], "SOY");
        assert_eq!(drafts[0].present[1], "eres");
    }

    fn ser_draft() -> VerbDraft {
        VerbDraft {
            infinitive: "ser".to_string(),
            present: vec!["soy".to_string(), "eres".to_string()],
            past: vec!["fui".to_string()],
            imperfect: vec!["era".to_string()],
            future: vec!["seré".to_string()],
            ..Default::default()
        }
    }
}
