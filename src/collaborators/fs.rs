use super::{FileRevealer, LinkClassifier};
use crate::models::{CollectionLink, LinkType};
use std::path::Path;

/// File every Notenik collection folder carries at its root.
pub const COLLECTION_INFO_FILE: &str = "- INFO.nnk";
pub const SCRIPT_EXTENSION: &str = "tcz";

/// Classifies links by inspecting the filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLinkClassifier;

impl LinkClassifier for FsLinkClassifier {
    fn classify(&self, link: &CollectionLink) -> LinkType {
        let path = link.path.as_path();
        if path.is_dir() {
            if path.join(COLLECTION_INFO_FILE).is_file() {
                LinkType::Collection
            } else {
                LinkType::Folder
            }
        } else if path.is_file() {
            let is_script = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(SCRIPT_EXTENSION))
                .unwrap_or(false);
            if is_script {
                LinkType::Script
            } else {
                LinkType::File
            }
        } else {
            LinkType::Unknown
        }
    }
}

/// Hands paths to the platform's default opener.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileRevealer;

impl FileRevealer for OsFileRevealer {
    fn reveal(&self, path: &Path) -> bool {
        match open::that(path) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(path = %path.to_string_lossy(), error = %error, "os open failed");
                false
            }
        }
    }
}
