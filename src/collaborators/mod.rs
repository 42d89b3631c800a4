pub mod fs;
pub mod preferences;

use crate::errors::AppError;
use crate::models::{
    CollectionLink, CollectionSchema, FocusRequest, LinkType, NoteRef, SpecialFolder, WindowHandle,
};
use crate::notes::DraftNote;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub use fs::{FsLinkClassifier, OsFileRevealer};
pub use preferences::SettingsPreferences;

/// Registries of collections the host already knows about.
pub trait CollectionRegistry: Send + Sync {
    fn multi_entry(&self, shortcut: &str) -> Option<CollectionLink>;
    fn folder_for_shortcut(&self, shortcut: &str) -> Option<CollectionLink>;
    fn folder_for_path(&self, path: &str) -> Option<CollectionLink>;
}

pub trait Preferences: Send + Sync {
    fn special_folder(&self, folder: SpecialFolder) -> Option<CollectionLink>;
    fn last_selected_note_path(&self) -> Option<PathBuf>;
}

pub trait LinkClassifier: Send + Sync {
    fn classify(&self, link: &CollectionLink) -> LinkType;
}

pub trait WindowManager: Send + Sync {
    /// Opens a window for the link, or surfaces the one already open.
    fn open(&self, link: &CollectionLink) -> Option<WindowHandle>;
    fn open_knowledge_base(&self) -> Option<WindowHandle>;
    fn show_preferences(&self);
}

pub trait CollectionView: Send + Sync {
    fn focus(&self, window: &WindowHandle, request: &FocusRequest) -> bool;
    fn show_navigation(&self, window: &WindowHandle);
    fn expand_tag(&self, window: &WindowHandle, tag: &str);
    fn open_attachment(&self, window: &WindowHandle, title: &str) -> bool;
    fn select_random(&self, window: &WindowHandle, log_selection: bool);
    fn select_note(&self, window: &WindowHandle);
    fn ensure_quotes_mode(&self, window: &WindowHandle);
}

pub trait NoteStore: Send + Sync {
    fn schema(&self, window: &WindowHandle) -> Option<CollectionSchema>;
    /// Matches by id, title or alias.
    fn note_known_as(&self, window: &WindowHandle, name: &str) -> Option<NoteRef>;
    fn note_for_id(&self, window: &WindowHandle, id: &str) -> Option<NoteRef>;
    fn note_for_timestamp(&self, window: &WindowHandle, timestamp: &str) -> Option<NoteRef>;
    fn selected_note(&self, window: &WindowHandle) -> Option<NoteRef>;
    fn add_note(&self, window: &WindowHandle, note: DraftNote) -> Option<NoteRef>;
}

pub trait ScriptLauncher: Send + Sync {
    fn launch(&self, script: &Path, immediate: bool);
}

pub trait FileRevealer: Send + Sync {
    fn reveal(&self, path: &Path) -> bool;
}

pub trait AlertPresenter: Send + Sync {
    fn alert(&self, error: &AppError);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAlerts;

impl AlertPresenter for SilentAlerts {
    fn alert(&self, _error: &AppError) {}
}

/// Everything the interpreter reaches outside itself.
#[derive(Clone)]
pub struct Collaborators {
    pub registry: Arc<dyn CollectionRegistry>,
    pub preferences: Arc<dyn Preferences>,
    pub classifier: Arc<dyn LinkClassifier>,
    pub windows: Arc<dyn WindowManager>,
    pub views: Arc<dyn CollectionView>,
    pub notes: Arc<dyn NoteStore>,
    pub scripts: Arc<dyn ScriptLauncher>,
    pub files: Arc<dyn FileRevealer>,
    pub alerts: Arc<dyn AlertPresenter>,
}

impl Collaborators {
    /// Wires a single host object into every slot it implements, using the
    /// filesystem classifier, the OS revealer and silent alerts for the rest.
    pub fn from_host<H>(host: Arc<H>) -> Self
    where
        H: CollectionRegistry
            + Preferences
            + WindowManager
            + CollectionView
            + NoteStore
            + ScriptLauncher
            + 'static,
    {
        Self {
            registry: host.clone(),
            preferences: host.clone(),
            classifier: Arc::new(FsLinkClassifier),
            windows: host.clone(),
            views: host.clone(),
            notes: host.clone(),
            scripts: host,
            files: Arc::new(OsFileRevealer),
            alerts: Arc::new(SilentAlerts),
        }
    }

    pub fn with_classifier(mut self, classifier: Arc<dyn LinkClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn with_file_revealer(mut self, files: Arc<dyn FileRevealer>) -> Self {
        self.files = files;
        self
    }

    pub fn with_alerts(mut self, alerts: Arc<dyn AlertPresenter>) -> Self {
        self.alerts = alerts;
        self
    }
}
