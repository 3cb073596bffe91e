use std::{
    path::PathBuf,
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    core::VerbRecord,
    remote::{
        RemoteClient,
        StoredVerb,
    },
    spreadsheet,
};

/// Background work runs on its own tokio runtime; the GUI thread polls
/// results over an mpsc channel once per frame. The collection itself is
/// only ever mutated on the GUI thread — tasks get snapshots.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    pub fn check_remote(&self, client: RemoteClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let connected = runtime.block_on(async { client.ping().await });
            let _ = sender.send(TaskResult::RemoteConnection(connected));
        });
    }

    /// One-shot startup fetch of the remote document.
    pub fn pull_remote(&self, client: RemoteClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                client
                    .pull_all()
                    .await
                    .map(|stored| stored.into_iter().map(Into::into).collect())
                    .map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::RemotePulled(result));
        });
    }

    /// Overwrites the remote document with the given snapshot. `revision` is
    /// the collection revision the snapshot was taken at; `announce` marks
    /// the user-triggered send, whose outcome is surfaced rather than logged.
    pub fn push_remote(
        &self,
        client: RemoteClient,
        snapshot: Vec<StoredVerb>,
        revision: u64,
        announce: bool,
    ) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime
                .block_on(async { client.push_all(&snapshot).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::RemotePushed { revision, announce, result });
        });
    }

    pub fn import_spreadsheet(&self, path: PathBuf) {
        let (sender, _) = self.task_context();

        thread::spawn(move || {
            let result = spreadsheet::import(&path).map_err(|e| e.to_string());
            let _ = sender.send(TaskResult::SpreadsheetImported(result));
        });
    }

    pub fn export_spreadsheet(&self, verbs: Vec<VerbRecord>, path: PathBuf) {
        let (sender, _) = self.task_context();

        thread::spawn(move || {
            let result = spreadsheet::export(&verbs, &path)
                .map(|_| path.display().to_string())
                .map_err(|e| e.to_string());
            let _ = sender.send(TaskResult::SpreadsheetExported(result));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
