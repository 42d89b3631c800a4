use crate::collaborators::{
    CollectionRegistry, CollectionView, Collaborators, FileRevealer, LinkClassifier, NoteStore, Preferences,
    ScriptLauncher, WindowManager,
};
use crate::models::{
    CollectionLink, CollectionSchema, FocusRequest, LinkType, NoteRef, SpecialFolder, WindowHandle,
};
use crate::notes::{to_common, DraftNote};
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory host that records every call it receives.
#[derive(Default)]
pub(crate) struct FakeHost {
    multi: BTreeMap<String, String>,
    shortcuts: BTreeMap<String, String>,
    paths: BTreeMap<String, String>,
    essential: Option<String>,
    knowledge_base: Option<String>,
    last_selected: Option<PathBuf>,
    schemas: BTreeMap<PathBuf, CollectionSchema>,
    schemaless: BTreeSet<PathBuf>,
    notes: BTreeMap<PathBuf, Vec<NoteRef>>,
    selected: BTreeMap<PathBuf, NoteRef>,
    refuse_open: bool,
    reject_adds: bool,
    refuse_reveal: bool,
    windows: Mutex<Vec<String>>,
    calls: Mutex<Vec<String>>,
    added: Mutex<Vec<DraftNote>>,
}

impl FakeHost {
    pub fn with_multi(mut self, shortcut: &str, path: &str) -> Self {
        self.multi.insert(shortcut.to_string(), path.to_string());
        self
    }

    pub fn with_shortcut(mut self, shortcut: &str, path: &str) -> Self {
        self.shortcuts.insert(shortcut.to_string(), path.to_string());
        self
    }

    pub fn with_registered_path(mut self, path: &str) -> Self {
        self.paths.insert(path.to_string(), path.to_string());
        self
    }

    pub fn with_essential(mut self, path: &str) -> Self {
        self.essential = Some(path.to_string());
        self
    }

    pub fn with_knowledge_base(mut self, path: &str) -> Self {
        self.knowledge_base = Some(path.to_string());
        self
    }

    pub fn with_last_selected(mut self, path: &str) -> Self {
        self.last_selected = Some(PathBuf::from(path));
        self
    }

    pub fn with_schema(mut self, collection: &str, schema: CollectionSchema) -> Self {
        self.schemas.insert(PathBuf::from(collection), schema);
        self
    }

    pub fn without_schema(mut self, collection: &str) -> Self {
        self.schemaless.insert(PathBuf::from(collection));
        self
    }

    pub fn with_note(mut self, collection: &str, id: &str, title: &str) -> Self {
        self.notes.entry(PathBuf::from(collection)).or_default().push(NoteRef {
            id: id.to_string(),
            title: title.to_string(),
            file_path: None,
        });
        self
    }

    pub fn with_selected(mut self, collection: &str, id: &str) -> Self {
        let note = NoteRef {
            id: id.to_string(),
            title: id.to_string(),
            file_path: None,
        };
        self.selected.insert(PathBuf::from(collection), note);
        self
    }

    pub fn refusing_windows(mut self) -> Self {
        self.refuse_open = true;
        self
    }

    pub fn rejecting_adds(mut self) -> Self {
        self.reject_adds = true;
        self
    }

    pub fn refusing_reveal(mut self) -> Self {
        self.refuse_reveal = true;
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn collaborators(self: &Arc<Self>) -> Collaborators {
        Collaborators::from_host(self.clone())
            .with_classifier(self.clone())
            .with_file_revealer(self.clone())
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock").clone()
    }

    pub fn added(&self) -> Vec<DraftNote> {
        self.added.lock().expect("added lock").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("calls lock").push(call);
    }

    fn link(path: &str) -> CollectionLink {
        CollectionLink::from_file_str(path).expect("fake link")
    }

    fn notes_in(&self, window: &WindowHandle) -> &[NoteRef] {
        self.notes
            .get(&window.link.path)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl CollectionRegistry for FakeHost {
    fn multi_entry(&self, shortcut: &str) -> Option<CollectionLink> {
        self.multi.get(shortcut).map(|path| Self::link(path))
    }

    fn folder_for_shortcut(&self, shortcut: &str) -> Option<CollectionLink> {
        self.shortcuts.get(shortcut).map(|path| Self::link(path))
    }

    fn folder_for_path(&self, path: &str) -> Option<CollectionLink> {
        self.paths.get(path).map(|path| Self::link(path))
    }
}

impl Preferences for FakeHost {
    fn special_folder(&self, folder: SpecialFolder) -> Option<CollectionLink> {
        match folder {
            SpecialFolder::Essential => self.essential.as_deref().map(Self::link),
            SpecialFolder::General => None,
        }
    }

    fn last_selected_note_path(&self) -> Option<PathBuf> {
        self.last_selected.clone()
    }
}

impl LinkClassifier for FakeHost {
    fn classify(&self, link: &CollectionLink) -> LinkType {
        match link.path.extension().and_then(|ext| ext.to_str()) {
            Some("tcz") | Some("scpt") => LinkType::Script,
            Some(_) => LinkType::File,
            None => LinkType::Collection,
        }
    }
}

impl WindowManager for FakeHost {
    fn open(&self, link: &CollectionLink) -> Option<WindowHandle> {
        if self.refuse_open {
            self.record(format!("open-refused {}", link.url));
            return None;
        }
        self.record(format!("open {}", link.url));
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
        let path = self.knowledge_base.as_deref()?;
        self.open(&Self::link(path))
    }

    fn show_preferences(&self) {
        self.record("prefs".to_string());
    }
}

impl CollectionView for FakeHost {
    fn focus(&self, window: &WindowHandle, request: &FocusRequest) -> bool {
        self.record(format!("focus {} {} {}", window.id, request.origin, request.note.id));
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

impl NoteStore for FakeHost {
    fn schema(&self, window: &WindowHandle) -> Option<CollectionSchema> {
        if self.schemaless.contains(&window.link.path) {
            return None;
        }
        Some(self.schemas.get(&window.link.path).cloned().unwrap_or_else(|| CollectionSchema {
            field_labels: vec!["Title".to_string(), "Body".to_string(), "Date".to_string(), "Tags".to_string()],
            has_timestamp: false,
        }))
    }

    fn note_known_as(&self, window: &WindowHandle, name: &str) -> Option<NoteRef> {
        self.record(format!("lookup known-as {}", name));
        self.notes_in(window)
            .iter()
            .find(|note| note.id == name || to_common(&note.title) == to_common(name))
            .cloned()
    }

    fn note_for_id(&self, window: &WindowHandle, id: &str) -> Option<NoteRef> {
        self.record(format!("lookup id {}", id));
        self.notes_in(window).iter().find(|note| note.id == id).cloned()
    }

    fn note_for_timestamp(&self, window: &WindowHandle, timestamp: &str) -> Option<NoteRef> {
        self.record(format!("lookup timestamp {}", timestamp));
        self.notes_in(window).iter().find(|note| note.id == timestamp).cloned()
    }

    fn selected_note(&self, window: &WindowHandle) -> Option<NoteRef> {
        self.selected.get(&window.link.path).cloned()
    }

    fn add_note(&self, window: &WindowHandle, note: DraftNote) -> Option<NoteRef> {
        if self.reject_adds {
            return None;
        }
        let title = note.title.clone().unwrap_or_default();
        self.record(format!("add {} {}", window.id, title));
        self.added.lock().expect("added lock").push(note);
        Some(NoteRef {
            id: to_common(&title),
            title,
            file_path: None,
        })
    }
}

impl ScriptLauncher for FakeHost {
    fn launch(&self, script: &Path, immediate: bool) {
        self.record(format!("launch {} {}", script.display(), immediate));
    }
}

impl FileRevealer for FakeHost {
    fn reveal(&self, path: &Path) -> bool {
        self.record(format!("reveal {}", path.display()));
        !self.refuse_reveal
    }
}
