#![allow(dead_code)]

use notenik_url_lib::{
    AlertPresenter, AppError, CollectionLink, CollectionRegistry, CollectionSchema, CollectionView, Collaborators,
    DraftNote, FileRevealer, FocusRequest, NoteRef, NoteStore, Preferences, ScriptLauncher, SpecialFolder,
    WindowHandle, WindowManager,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Host double that records every collaborator call as a short string.
#[derive(Default)]
pub struct RecordingHost {
    shortcuts: BTreeMap<String, PathBuf>,
    notes: BTreeMap<PathBuf, Vec<NoteRef>>,
    last_selected: Option<PathBuf>,
    windows: Mutex<Vec<String>>,
    opened: Mutex<Vec<CollectionLink>>,
    calls: Mutex<Vec<String>>,
    added: Mutex<Vec<DraftNote>>,
    alerts: Mutex<Vec<String>>,
}

impl RecordingHost {
    pub fn with_shortcut(mut self, shortcut: &str, path: impl Into<PathBuf>) -> Self {
        self.shortcuts.insert(shortcut.to_string(), path.into());
        self
    }

    pub fn with_note(mut self, collection: impl Into<PathBuf>, id: &str, title: &str) -> Self {
        self.notes.entry(collection.into()).or_default().push(NoteRef {
            id: id.to_string(),
            title: title.to_string(),
            file_path: None,
        });
        self
    }

    pub fn with_last_selected(mut self, path: impl Into<PathBuf>) -> Self {
        self.last_selected = Some(path.into());
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Keeps the filesystem classifier but swaps in this host for reveals and
    /// alerts so nothing reaches the OS.
    pub fn collaborators(self: &Arc<Self>) -> Collaborators {
        Collaborators::from_host(self.clone())
            .with_file_revealer(self.clone())
            .with_alerts(self.clone())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn opened(&self) -> Vec<CollectionLink> {
        self.opened.lock().expect("opened lock").clone()
    }

    pub fn added(&self) -> Vec<DraftNote> {
        self.added.lock().expect("added lock").clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().expect("alerts lock").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn notes_in(&self, window: &WindowHandle) -> Vec<NoteRef> {
        self.notes.get(&window.link.path).cloned().unwrap_or_default()
    }
}

impl CollectionRegistry for RecordingHost {
    fn multi_entry(&self, _shortcut: &str) -> Option<CollectionLink> {
        None
    }

    fn folder_for_shortcut(&self, shortcut: &str) -> Option<CollectionLink> {
        self.shortcuts.get(shortcut).and_then(|path| CollectionLink::from_path(path))
    }

    fn folder_for_path(&self, _path: &str) -> Option<CollectionLink> {
        None
    }
}

impl Preferences for RecordingHost {
    fn special_folder(&self, _folder: SpecialFolder) -> Option<CollectionLink> {
        None
    }

    fn last_selected_note_path(&self) -> Option<PathBuf> {
        self.last_selected.clone()
    }
}

impl WindowManager for RecordingHost {
    fn open(&self, link: &CollectionLink) -> Option<WindowHandle> {
        self.record(format!("open {}", link.path.display()));
        self.opened.lock().expect("opened lock").push(link.clone());
        let mut windows = self.windows.lock().expect("windows lock");
        let index = match windows.iter().position(|url| *url == link.url) {
            Some(index) => index,
            None => {
                windows.push(link.url.clone());
                windows.len() - 1
            }
        };
        Some(WindowHandle {
            id: index as u64 + 1,
            link: link.clone(),
        })
    }

    fn open_knowledge_base(&self) -> Option<WindowHandle> {
        self.record("open-kb".to_string());
        None
    }

    fn show_preferences(&self) {
        self.record("prefs".to_string());
    }
}

impl CollectionView for RecordingHost {
    fn focus(&self, window: &WindowHandle, request: &FocusRequest) -> bool {
        self.record(format!("focus {} {}", window.id, request.note.id));
        true
    }

    fn show_navigation(&self, window: &WindowHandle) {
        self.record(format!("navigation {}", window.id));
    }

    fn expand_tag(&self, window: &WindowHandle, tag: &str) {
        self.record(format!("expand {} {}", window.id, tag));
    }

    fn open_attachment(&self, window: &WindowHandle, title: &str) -> bool {
        self.record(format!("attachment {} {}", window.id, title));
        true
    }

    fn select_random(&self, window: &WindowHandle, log_selection: bool) {
        self.record(format!("random {} {}", window.id, log_selection));
    }

    fn select_note(&self, window: &WindowHandle) {
        self.record(format!("select {}", window.id));
    }

    fn ensure_quotes_mode(&self, window: &WindowHandle) {
        self.record(format!("quotes {}", window.id));
    }
}

impl NoteStore for RecordingHost {
    fn schema(&self, _window: &WindowHandle) -> Option<CollectionSchema> {
        Some(CollectionSchema {
            field_labels: vec!["Title".to_string(), "Tags".to_string(), "Body".to_string()],
            has_timestamp: false,
        })
    }

    fn note_known_as(&self, window: &WindowHandle, name: &str) -> Option<NoteRef> {
        self.notes_in(window).into_iter().find(|note| note.id == name || note.title == name)
    }

    fn note_for_id(&self, window: &WindowHandle, id: &str) -> Option<NoteRef> {
        self.notes_in(window).into_iter().find(|note| note.id == id)
    }

    fn note_for_timestamp(&self, _window: &WindowHandle, _timestamp: &str) -> Option<NoteRef> {
        None
    }

    fn selected_note(&self, _window: &WindowHandle) -> Option<NoteRef> {
        None
    }

    fn add_note(&self, window: &WindowHandle, note: DraftNote) -> Option<NoteRef> {
        let title = note.title.clone().unwrap_or_default();
        self.record(format!("add {} {}", window.id, title));
        self.added.lock().expect("added lock").push(note);
        Some(NoteRef {
            id: title.to_lowercase(),
            title,
            file_path: None,
        })
    }
}

impl ScriptLauncher for RecordingHost {
    fn launch(&self, script: &Path, immediate: bool) {
        self.record(format!("launch {} {}", script.display(), immediate));
    }
}

impl FileRevealer for RecordingHost {
    fn reveal(&self, path: &Path) -> bool {
        self.record(format!("reveal {}", path.display()));
        true
    }
}

impl AlertPresenter for RecordingHost {
    fn alert(&self, error: &AppError) {
        self.alerts.lock().expect("alerts lock").push(error.code().to_string());
    }
}
