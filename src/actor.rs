use crate::collaborators::Collaborators;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::errors::AppError;
use crate::interpreters::Invocation;
use crate::models::{AppSettings, CollectionLink, FocusRequest, NoteLinkResolution, Verb, WindowHandle};
use crate::resolver::CollectionResolver;
use crate::validator::parse_command;
use serde::Serialize;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Origin tag for focus requests issued while following note links.
pub const NOTE_LINK_ORIGIN: &str = "note-link-resolver";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActOutcome {
    pub invocation_id: Uuid,
    /// True once the URL was well formed and its command routed, whatever
    /// happened to individual parameters.
    pub accepted: bool,
    pub verb: Option<Verb>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Entry point the host calls for every custom URL it receives.
#[derive(Clone)]
pub struct UrlActor {
    host: Collaborators,
    settings: Arc<RwLock<AppSettings>>,
}

impl UrlActor {
    pub fn new(host: Collaborators, settings: AppSettings) -> Self {
        Self {
            host,
            settings: Arc::new(RwLock::new(settings)),
        }
    }

    pub fn settings(&self) -> AppSettings {
        self.settings
            .read()
            .map(|settings| settings.clone())
            .unwrap_or_default()
    }

    pub fn apply_settings(&self, settings: AppSettings) {
        if let Ok(mut current) = self.settings.write() {
            *current = settings;
        }
    }

    pub fn act(&self, raw: &str) -> bool {
        self.act_with_report(raw).accepted
    }

    pub fn act_with_report(&self, raw: &str) -> ActOutcome {
        let invocation_id = Uuid::new_v4();
        let span = tracing::info_span!("url_command", invocation_id = %invocation_id, url = %raw);
        let _entered = span.enter();

        let settings = self.settings();
        let alerts = settings.alert_on_error.then(|| self.host.alerts.clone());
        let mut diagnostics = Diagnostics::new(alerts);

        let outcome = |accepted: bool, verb: Option<Verb>, diagnostics: Diagnostics| ActOutcome {
            invocation_id,
            accepted,
            verb,
            diagnostics: diagnostics.into_entries(),
        };

        let command = match parse_command(raw, &settings.url_scheme) {
            Ok(command) => command,
            Err(error) => {
                diagnostics.error(error);
                return outcome(false, None, diagnostics);
            }
        };
        let Some(verb) = Verb::parse(&command.verb) else {
            diagnostics.error(AppError::UnknownCommand(command.verb));
            return outcome(false, None, diagnostics);
        };

        Invocation::new(&self.host, &mut diagnostics).run(verb, &command.parameters);
        let failures = diagnostics
            .entries()
            .iter()
            .filter(|entry| entry.code.is_some())
            .count();
        tracing::info!(verb = verb.as_str(), failures, "url command completed");
        outcome(true, Some(verb), diagnostics)
    }

    /// Opens a collection link and, when `id` is non-empty, focuses the note
    /// known by that id.
    pub fn open_link(&self, link: &CollectionLink, id: &str) -> bool {
        let Some(window) = self.host.windows.open(link) else {
            return false;
        };
        if id.is_empty() {
            return true;
        }
        let Some(note) = self.host.notes.note_known_as(&window, id) else {
            return false;
        };
        let request = FocusRequest::new(crate::interpreters::URL_COMMAND_ORIGIN, note);
        self.host.views.focus(&window, &request);
        true
    }

    /// Focuses the target of a resolved note link, opening the collection that
    /// holds it when it lives outside `current`.
    pub fn follow_note_link(
        &self,
        current: Option<&WindowHandle>,
        resolution: &NoteLinkResolution,
    ) -> Option<WindowHandle> {
        let request = FocusRequest::new(NOTE_LINK_ORIGIN, resolution.resolved_note.clone());

        if resolution.resolved_path.is_empty() {
            if let Some(window) = current {
                self.host.views.focus(window, &request);
                return Some(window.clone());
            }
        }

        let resolver = CollectionResolver::new(&self.host);
        let Some(link) = resolver.shortcut_link(&resolution.resolved_path) else {
            tracing::debug!(shortcut = %resolution.resolved_path, "note link names an unknown collection");
            return None;
        };
        let Some(window) = self.host.windows.open(&link) else {
            tracing::debug!(url = %link.url, "note link collection could not be opened");
            return None;
        };
        self.host.views.focus(&window, &request);
        Some(window)
    }
}
