use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_URL_SCHEME: &str = "notenik";
pub const FILE_SCHEME_PREFIX: &str = "file://";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verb {
    Add,
    Help,
    Expand,
    Open,
    Prefs,
    Run,
    Find,
}

impl Verb {
    /// `prefs` and `settings` name the same command.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "add" => Some(Self::Add),
            "help" => Some(Self::Help),
            "expand" => Some(Self::Expand),
            "open" => Some(Self::Open),
            "prefs" | "settings" => Some(Self::Prefs),
            "run" => Some(Self::Run),
            "find" => Some(Self::Find),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Help => "help",
            Self::Expand => "expand",
            Self::Open => "open",
            Self::Prefs => "prefs",
            Self::Run => "run",
            Self::Find => "find",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    pub label: String,
    pub value: String,
}

impl QueryParam {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// A structurally valid command, produced once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCommand {
    pub scheme: String,
    pub verb: String,
    pub parameters: Vec<QueryParam>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpecialFolder {
    Essential,
    General,
}

impl SpecialFolder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "essential" => Some(Self::Essential),
            "general" => Some(Self::General),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkType {
    Collection,
    Folder,
    Script,
    File,
    #[default]
    Unknown,
}

/// A file reference to something a window can be opened for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionLink {
    pub url: String,
    pub path: PathBuf,
    /// `Unknown` until something has classified the target.
    #[serde(default)]
    pub link_type: LinkType,
}

impl CollectionLink {
    /// Accepts either a bare path or one already carrying the `file://` marker.
    pub fn from_file_str(value: &str) -> Option<Self> {
        let bare = value.strip_prefix(FILE_SCHEME_PREFIX).unwrap_or(value);
        if bare.trim().is_empty() {
            return None;
        }
        Some(Self {
            url: format!("{}{}", FILE_SCHEME_PREFIX, bare),
            path: PathBuf::from(bare),
            link_type: LinkType::Unknown,
        })
    }

    pub fn with_link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = link_type;
        self
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_file_str(&path.to_string_lossy())
    }
}

/// Identifies an open collection window owned by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowHandle {
    pub id: u64,
    pub link: CollectionLink,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteRef {
    pub id: String,
    pub title: String,
    pub file_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSchema {
    pub field_labels: Vec<String>,
    pub has_timestamp: bool,
}

/// What the receiving view needs to highlight a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRequest {
    pub origin: &'static str,
    pub note: NoteRef,
    pub position: Option<usize>,
    pub row: Option<usize>,
    pub search_phrase: Option<String>,
}

impl FocusRequest {
    pub fn new(origin: &'static str, note: NoteRef) -> Self {
        Self {
            origin,
            note,
            position: None,
            row: None,
            search_phrase: None,
        }
    }
}

/// A wiki-style link that has already been matched to a note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLinkResolution {
    /// Shortcut of the collection holding the note; empty means the current one.
    pub resolved_path: String,
    pub resolved_note: NoteRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppSettings {
    pub url_scheme: String,
    pub essential_folder: Option<String>,
    pub general_folder: Option<String>,
    pub alert_on_error: bool,
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            url_scheme: DEFAULT_URL_SCHEME.to_string(),
            essential_folder: None,
            general_folder: None,
            alert_on_error: true,
            log_level: "info".to_string(),
        }
    }
}
