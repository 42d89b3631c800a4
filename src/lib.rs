mod actor;
mod collaborators;
mod diagnostics;
mod errors;
mod interpreters;
mod models;
mod notes;
mod query;
mod resolver;
pub mod settings;
mod validator;

#[cfg(test)]
mod test_support;

pub use crate::actor::{ActOutcome, UrlActor, NOTE_LINK_ORIGIN};
pub use crate::collaborators::{
    AlertPresenter, CollectionRegistry, CollectionView, Collaborators, FileRevealer, FsLinkClassifier, LinkClassifier,
    NoteStore, OsFileRevealer, Preferences, ScriptLauncher, SettingsPreferences, SilentAlerts, WindowManager,
};
pub use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
pub use crate::errors::{AppError, AppResult, ErrorKind};
pub use crate::interpreters::URL_COMMAND_ORIGIN;
pub use crate::models::{
    AppSettings, CollectionLink, CollectionSchema, FocusRequest, LinkType, NoteLinkResolution, NoteRef, QueryParam,
    RawCommand, SpecialFolder, Verb, WindowHandle, DEFAULT_URL_SCHEME,
};
pub use crate::notes::{to_common, DraftNote};
pub use crate::query::decode_query;
pub use crate::resolver::{CollectionRequest, CollectionResolver};
pub use crate::validator::parse_command;

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;

static LOG_GUARD: std::sync::OnceLock<WorkerGuard> = std::sync::OnceLock::new();

/// Installs the JSON file logger at the configured level. `RUST_LOG` wins
/// when set.
pub fn init_tracing(log_dir: &Path, settings: &AppSettings) -> AppResult<()> {
    std::fs::create_dir_all(log_dir)?;
    let file_appender = tracing_appender::rolling::daily(log_dir, "url-actor.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = LOG_GUARD.set(guard);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .json()
        .with_writer(non_blocking)
        .try_init()
        .map_err(|error| AppError::Internal(error.to_string()))
}
