use crate::core::VerbDraft;

/// Results posted back to the GUI thread by background tasks. Error payloads
/// are pre-rendered strings; the GUI decides whether they reach the user or
/// only the log.
#[derive(Debug, Clone)]
pub enum TaskResult {
    RemoteConnection(bool),
    RemotePulled(Result<Vec<VerbDraft>, String>),
    RemotePushed { revision: u64, announce: bool, result: Result<(), String> },
    SpreadsheetImported(Result<Vec<VerbDraft>, String>),
    SpreadsheetExported(Result<String, String>),
}
