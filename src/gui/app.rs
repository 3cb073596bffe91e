use std::time::{
    Duration,
    Instant,
};

use eframe::egui;

use super::{
    actions::{
        ActionQueue,
        UiAction,
    },
    confirm_modal::ConfirmModal,
    detail_panel,
    error_modal::ErrorModal,
    settings_modal::RemoteSettingsModal,
    status::StatusLine,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
    verb_list,
};
use crate::{
    core::{
        tasks::{
            TaskManager,
            TaskResult,
        },
        VerbCollection,
        VerbRecord,
        VerbarioError,
    },
    persistence::{
        load_json_or_default,
        save_json,
        SettingsData,
        SETTINGS_FILE,
    },
    remote::{
        RemoteClient,
        StoredVerb,
    },
    speech,
    spreadsheet,
};

const REMOTE_CHECK_INTERVAL: Duration = Duration::from_secs(10);

pub struct VerbarioApp {
    pub collection: VerbCollection,
    pub search: String,
    pub actions: ActionQueue,
    pub settings: SettingsData,
    pub theme: Theme,
    pub status: StatusLine,
    pub error_modal: ErrorModal,
    pub delete_all_modal: ConfirmModal,
    pub settings_modal: RemoteSettingsModal,
    remote: Option<RemoteClient>,
    remote_connected: bool,
    last_remote_check: Option<Instant>,
    task_manager: TaskManager,
    /// Collection revision last acknowledged by the remote store.
    pushed_revision: u64,
    /// Revision of the push currently in flight, if any. At most one
    /// implicit push runs at a time; a stale acknowledgement simply triggers
    /// the next one, so the remote end state is eventually consistent.
    inflight_push: Option<u64>,
}

impl VerbarioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let remote = RemoteClient::from_settings(&settings);

        let task_manager = TaskManager::new();
        if let Some(client) = &remote {
            task_manager.pull_remote(client.clone());
            task_manager.check_remote(client.clone());
        }

        let theme = Theme::dracula();
        set_theme(&cc.egui_ctx, &theme);

        Self {
            collection: VerbCollection::new(),
            search: String::new(),
            actions: ActionQueue::new(),
            settings,
            theme,
            status: StatusLine::new(),
            error_modal: ErrorModal::new(),
            delete_all_modal: ConfirmModal::new(),
            settings_modal: RemoteSettingsModal::new(),
            remote,
            remote_connected: false,
            last_remote_check: Some(Instant::now()),
            task_manager,
            pushed_revision: 0,
            inflight_push: None,
        }
    }

    fn handle_task_results(&mut self) {
        for result in self.task_manager.poll_results() {
            match result {
                TaskResult::RemoteConnection(connected) => {
                    self.remote_connected = connected;
                }
                TaskResult::RemotePulled(Ok(drafts)) => {
                    let count = drafts.len();
                    self.collection.extend(drafts);
                    // The pull is the synced baseline; don't echo it back.
                    self.pushed_revision = self.collection.revision();
                    if count > 0 {
                        self.status.set(format!("Loaded {} verbs from the remote store.", count));
                    }
                }
                TaskResult::RemotePulled(Err(e)) => {
                    self.remote_connected = false;
                    eprintln!("Remote pull failed: {}", e);
                    self.status.set("Could not load the collection from the remote store.");
                }
                TaskResult::RemotePushed { revision, announce, result } => {
                    self.inflight_push = None;
                    match result {
                        Ok(()) => {
                            self.pushed_revision = self.pushed_revision.max(revision);
                            if announce {
                                self.status.set("Collection sent to the remote store.");
                            }
                        }
                        Err(e) if announce => {
                            self.error_modal.show_error(
                                "Send Failed",
                                "Could not write the collection to the remote store.",
                                Some(e),
                            );
                        }
                        Err(e) => {
                            eprintln!("Remote push failed: {}", e);
                        }
                    }
                }
                TaskResult::SpreadsheetImported(Ok(drafts)) => {
                    let count = drafts.len();
                    self.collection.extend(drafts);
                    self.status.set(format!("Imported {} verbs.", count));
                }
                TaskResult::SpreadsheetImported(Err(e)) => {
                    self.error_modal.show_error(
                        "Import Failed",
                        "The spreadsheet could not be imported. No rows were added.",
                        Some(e),
                    );
                }
                TaskResult::SpreadsheetExported(Ok(path)) => {
                    self.status.set(format!("Exported collection to {}.", path));
                }
                TaskResult::SpreadsheetExported(Err(e)) => {
                    self.error_modal.show_error(
                        "Export Failed",
                        "The collection could not be written to a spreadsheet.",
                        Some(e),
                    );
                }
            }
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Select(id) => self.collection.select(id),
            UiAction::Delete(id) => {
                self.collection.remove(id);
            }
            UiAction::RequestDeleteAll => {
                self.delete_all_modal
                    .request("Are you sure you want to delete all verbs?", "Delete All");
            }
            UiAction::EditCell { id, tense, person, value } => {
                self.collection.set_conjugation(id, tense, person, value);
            }
            UiAction::Speak => self.speak_selected(),
            UiAction::SaveChanges => self.save_changes(),
            UiAction::ImportSpreadsheet => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("Spreadsheets", &["xlsx", "xls", "ods"])
                    .pick_file()
                {
                    self.task_manager.import_spreadsheet(path);
                }
            }
            UiAction::ExportSpreadsheet => {
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name(spreadsheet::EXPORT_FILE_NAME)
                    .add_filter("Excel workbook", &["xlsx"])
                    .save_file()
                {
                    let records: Vec<VerbRecord> = self.collection.iter().cloned().collect();
                    self.task_manager.export_spreadsheet(records, path);
                }
            }
            UiAction::SendToRemote => self.send_to_remote(),
        }
    }

    fn speak_selected(&mut self) {
        let Some(verb) = self.collection.selected().and_then(|id| self.collection.get(id)) else {
            return;
        };
        let header = verb.display_name();

        if let Err(e) = speech::speak(speech::spoken_fragment(&header)) {
            self.status.set(e.to_string());
        }
    }

    /// No extra mutation beyond what live cell edits already synced; this
    /// exists to give the user an explicit confirmation signal.
    fn save_changes(&mut self) {
        if self.collection.selected().is_some() {
            self.status.set("Changes saved successfully!");
            self.push_remote(false);
        } else {
            self.status.set("No verb selected to save.");
        }
    }

    fn send_to_remote(&mut self) {
        if self.remote.is_none() {
            self.error_modal.show_error(
                "Remote Store Not Configured",
                "Set the remote store URL under Remote → Settings before sending.",
                None::<String>,
            );
            return;
        }
        self.push_remote(true);
    }

    fn push_remote(&mut self, announce: bool) {
        let Some(client) = self.remote.clone() else {
            return;
        };
        let revision = self.collection.revision();
        let snapshot: Vec<StoredVerb> = self.collection.iter().map(StoredVerb::from).collect();
        self.inflight_push = Some(revision);
        self.task_manager.push_remote(client, snapshot, revision, announce);
    }

    /// Implicit sync: whenever the collection revision has moved past the
    /// last acknowledged push and nothing is in flight, push the whole
    /// collection. Failures stay in the log; the user-facing path is the
    /// explicit send action.
    fn maybe_push_remote(&mut self) {
        if self.inflight_push.is_some() {
            return;
        }
        let revision = self.collection.revision();
        if revision == self.pushed_revision {
            return;
        }

        if self.remote.is_none() {
            eprintln!("Remote push skipped: {}", VerbarioError::RemoteUnavailable);
            self.pushed_revision = revision;
            return;
        }

        self.push_remote(false);
    }

    fn maybe_check_remote(&mut self) {
        let Some(client) = self.remote.clone() else {
            return;
        };
        let due = self
            .last_remote_check
            .is_none_or(|checked| checked.elapsed() >= REMOTE_CHECK_INTERVAL);
        if due {
            self.last_remote_check = Some(Instant::now());
            self.task_manager.check_remote(client);
        }
    }

    fn apply_settings(&mut self, settings: SettingsData) {
        if let Err(e) = save_json(&settings, SETTINGS_FILE) {
            eprintln!("Failed to save settings: {}", e);
        }
        self.settings = settings;
        self.remote = RemoteClient::from_settings(&self.settings);
        self.remote_connected = false;
        self.last_remote_check = Some(Instant::now());
        if let Some(client) = self.remote.clone() {
            self.task_manager.check_remote(client);
        }
    }
}

impl eframe::App for VerbarioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_task_results();
        self.maybe_check_remote();

        let pending: Vec<UiAction> = self.actions.drain().collect();
        for action in pending {
            self.handle_action(action);
        }

        TopBar::show(
            ctx,
            &mut self.actions,
            &mut self.settings_modal,
            &self.settings,
            self.remote.is_some(),
            self.remote_connected,
            &self.theme,
        );
        verb_list::show(ctx, &self.collection, &mut self.search, &mut self.actions, &self.theme);
        detail_panel::show(ctx, &self.collection, &mut self.actions, &self.theme);

        if let Some(confirmed) = self.delete_all_modal.show(ctx) {
            if confirmed {
                self.collection.clear();
                self.status.set("All verbs deleted.");
            }
        }
        if let Some(new_settings) = self.settings_modal.show(ctx) {
            self.apply_settings(new_settings);
        }
        self.error_modal.show(ctx);
        self.status.show(ctx, &self.theme);

        self.maybe_push_remote();

        // Keep polling task results even while the user is idle.
        ctx.request_repaint_after(Duration::from_millis(200));
    }
}
