use super::Preferences;
use crate::models::{AppSettings, CollectionLink, SpecialFolder};
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

/// Preference state backed by the persisted [`AppSettings`].
#[derive(Debug, Default)]
pub struct SettingsPreferences {
    settings: RwLock<AppSettings>,
    last_selected_note: Mutex<Option<PathBuf>>,
}

impl SettingsPreferences {
    pub fn new(settings: AppSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
            last_selected_note: Mutex::new(None),
        }
    }

    pub fn replace_settings(&self, settings: AppSettings) {
        if let Ok(mut current) = self.settings.write() {
            *current = settings;
        }
    }

    /// Called by the host whenever the user selects a note.
    pub fn set_last_selected_note_path(&self, path: Option<PathBuf>) {
        if let Ok(mut slot) = self.last_selected_note.lock() {
            *slot = path;
        }
    }
}

impl Preferences for SettingsPreferences {
    fn special_folder(&self, folder: SpecialFolder) -> Option<CollectionLink> {
        let settings = self.settings.read().ok()?;
        let configured = match folder {
            SpecialFolder::Essential => settings.essential_folder.as_deref(),
            SpecialFolder::General => settings.general_folder.as_deref(),
        };
        configured.and_then(CollectionLink::from_file_str)
    }

    fn last_selected_note_path(&self) -> Option<PathBuf> {
        self.last_selected_note
            .lock()
            .ok()
            .and_then(|slot| slot.clone())
    }
}
