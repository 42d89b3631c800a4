use crate::collaborators::Collaborators;
use crate::errors::{AppError, AppResult};
use crate::models::{CollectionLink, SpecialFolder, WindowHandle};

/// Any combination of the three ways a URL can name a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionRequest<'a> {
    pub shortcut: Option<&'a str>,
    pub path: Option<&'a str>,
    pub special: Option<&'a str>,
}

impl<'a> CollectionRequest<'a> {
    pub fn shortcut(value: &'a str) -> Self {
        Self {
            shortcut: Some(value),
            ..Self::default()
        }
    }

    pub fn path(value: &'a str) -> Self {
        Self {
            path: Some(value),
            ..Self::default()
        }
    }

    pub fn special(value: &'a str) -> Self {
        Self {
            special: Some(value),
            ..Self::default()
        }
    }

    fn describe(&self) -> String {
        let parts = [
            self.shortcut.map(|value| format!("shortcut '{}'", value)),
            self.path.map(|value| format!("path '{}'", value)),
            self.special.map(|value| format!("special '{}'", value)),
        ];
        let described = parts.into_iter().flatten().collect::<Vec<_>>().join(", ");
        if described.is_empty() {
            "no collection named".to_string()
        } else {
            described
        }
    }
}

pub struct CollectionResolver<'a> {
    host: &'a Collaborators,
}

impl<'a> CollectionResolver<'a> {
    pub fn new(host: &'a Collaborators) -> Self {
        Self { host }
    }

    /// Finds the link for a request and opens (or surfaces) its window.
    pub fn resolve(&self, request: &CollectionRequest<'_>) -> AppResult<WindowHandle> {
        let link = self
            .link_for(request)
            .ok_or_else(|| AppError::CollectionNotFound(format!("Unable to locate {}", request.describe())))?;
        self.host
            .windows
            .open(&link)
            .ok_or_else(|| AppError::CollectionNotFound(format!("Unable to open collection at {}", link.url)))
    }

    /// Priority: shortcut, registered path, special alias, then the literal path.
    pub fn link_for(&self, request: &CollectionRequest<'_>) -> Option<CollectionLink> {
        if let Some(link) = non_empty(request.shortcut).and_then(|shortcut| self.shortcut_link(shortcut)) {
            return Some(link);
        }
        if let Some(link) = non_empty(request.path).and_then(|path| self.host.registry.folder_for_path(path)) {
            return Some(link);
        }
        if let Some(link) = non_empty(request.special).and_then(|special| self.special_link(special)) {
            return Some(link);
        }

        let link = CollectionLink::from_file_str(request.path?)?;
        let link_type = self.host.classifier.classify(&link);
        tracing::debug!(url = %link.url, link_type = ?link_type, "synthesized collection link from path");
        Some(link.with_link_type(link_type))
    }

    /// The multi-collection registry wins over the shortcut registry.
    pub fn shortcut_link(&self, shortcut: &str) -> Option<CollectionLink> {
        self.host
            .registry
            .multi_entry(shortcut)
            .or_else(|| self.host.registry.folder_for_shortcut(shortcut))
    }

    fn special_link(&self, special: &str) -> Option<CollectionLink> {
        let folder = SpecialFolder::parse(special)?;
        self.host.preferences.special_folder(folder)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
