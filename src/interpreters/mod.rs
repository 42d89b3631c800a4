pub mod add;
pub mod expand;
pub mod find;
pub mod help;
pub mod open;
pub mod prefs;
pub mod run;

use crate::collaborators::Collaborators;
use crate::diagnostics::Diagnostics;
use crate::errors::AppError;
use crate::models::{FocusRequest, NoteRef, QueryParam, Verb, WindowHandle};
use crate::notes::DraftNote;
use crate::resolver::{CollectionRequest, CollectionResolver};
use std::path::PathBuf;

/// Origin tag attached to every focus request issued by URL commands.
pub const URL_COMMAND_ORIGIN: &str = "custom-url-actor";

/// Accumulated state of one command, threaded through the parameter fold.
#[derive(Debug, Default)]
pub struct CommandContext {
    pub collection: Option<WindowHandle>,
    pub pending_note: Option<DraftNote>,
    pub run_target: RunTarget,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunTarget {
    pub script: Option<PathBuf>,
    pub immediate: bool,
}

/// Labels that name the collection later parameters act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKey {
    Shortcut,
    Path,
    Special,
}

impl CollectionKey {
    pub fn parse(label: &str) -> Option<Self> {
        match label {
            "shortcut" => Some(Self::Shortcut),
            "path" => Some(Self::Path),
            "special" => Some(Self::Special),
            _ => None,
        }
    }

    pub fn request(self, value: &str) -> CollectionRequest<'_> {
        match self {
            Self::Shortcut => CollectionRequest::shortcut(value),
            Self::Path => CollectionRequest::path(value),
            Self::Special => CollectionRequest::special(value),
        }
    }
}

/// Per-invocation access to collaborators and the diagnostics sink.
pub struct Invocation<'a> {
    pub host: &'a Collaborators,
    pub diagnostics: &'a mut Diagnostics,
}

impl<'a> Invocation<'a> {
    pub fn new(host: &'a Collaborators, diagnostics: &'a mut Diagnostics) -> Self {
        Self { host, diagnostics }
    }

    pub fn run(&mut self, verb: Verb, parameters: &[QueryParam]) {
        self.diagnostics.set_verb(verb.as_str());
        match verb {
            Verb::Add => add::interpret(self, parameters),
            Verb::Help => help::interpret(self, parameters),
            Verb::Expand => expand::interpret(self, parameters),
            Verb::Open => open::interpret(self, parameters),
            Verb::Prefs => prefs::interpret(self, parameters),
            Verb::Run => run::interpret(self, parameters),
            Verb::Find => find::interpret(self, parameters),
        }
    }

    pub fn report(&mut self, error: AppError) {
        self.diagnostics.error(error);
    }

    pub fn resolve(&mut self, request: &CollectionRequest<'_>) -> Option<WindowHandle> {
        match CollectionResolver::new(self.host).resolve(request) {
            Ok(window) => Some(window),
            Err(error) => {
                self.report(error);
                None
            }
        }
    }

    /// Resolves a collection into the context. A failed resolution leaves any
    /// earlier collection in place.
    pub fn establish(&mut self, ctx: &mut CommandContext, key: CollectionKey, value: &str) -> Option<WindowHandle> {
        let window = self.resolve(&key.request(value))?;
        ctx.collection = Some(window.clone());
        Some(window)
    }

    /// The context's collection, or a reported `MissingContext` failure.
    pub fn require_collection(&mut self, ctx: &CommandContext, label: &str) -> Option<WindowHandle> {
        if ctx.collection.is_none() {
            self.report(AppError::missing_context(label));
        }
        ctx.collection.clone()
    }

    pub fn focus(&mut self, window: &WindowHandle, note: NoteRef) -> bool {
        let request = FocusRequest::new(URL_COMMAND_ORIGIN, note);
        let focused = self.host.views.focus(window, &request);
        if !focused {
            tracing::debug!(window = window.id, note = %request.note.id, "view declined focus request");
        }
        focused
    }
}

/// Folds the parameters left to right through `step`, starting from `initial`.
pub(crate) fn fold_parameters<F>(initial: CommandContext, parameters: &[QueryParam], mut step: F) -> CommandContext
where
    F: FnMut(CommandContext, &QueryParam) -> CommandContext,
{
    parameters.iter().fold(initial, |ctx, param| step(ctx, param))
}
