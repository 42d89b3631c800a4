use super::{fold_parameters, CollectionKey, CommandContext, Invocation};
use crate::errors::AppError;
use crate::models::QueryParam;
use crate::notes::to_common;
use std::path::Path;

const VERB: &str = "open";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OpenParam {
    Collection(CollectionKey),
    Id,
    Timestamp,
    NotePath,
    Attachment,
    Select,
    Mode,
}

impl OpenParam {
    fn parse(label: &str) -> Option<Self> {
        if let Some(key) = CollectionKey::parse(label) {
            return Some(Self::Collection(key));
        }
        match label {
            "id" => Some(Self::Id),
            "timestamp" => Some(Self::Timestamp),
            "notepath" => Some(Self::NotePath),
            "attachment" => Some(Self::Attachment),
            "select" => Some(Self::Select),
            "mode" => Some(Self::Mode),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Random,
    RandomPick,
    Action,
}

impl Selection {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "random" => Some(Self::Random),
            "randompick" => Some(Self::RandomPick),
            "action" => Some(Self::Action),
            _ => None,
        }
    }
}

pub fn interpret(inv: &mut Invocation<'_>, parameters: &[QueryParam]) {
    fold_parameters(CommandContext::default(), parameters, |ctx, param| step(inv, ctx, param));
}

fn step(inv: &mut Invocation<'_>, mut ctx: CommandContext, param: &QueryParam) -> CommandContext {
    let value = param.value.as_str();
    let Some(kind) = OpenParam::parse(&param.label) else {
        inv.report(AppError::unrecognized(VERB, &param.label));
        return ctx;
    };

    match kind {
        OpenParam::Collection(key) => {
            inv.establish(&mut ctx, key, value);
        }
        OpenParam::Id => {
            let Some(window) = inv.require_collection(&ctx, &param.label) else {
                return ctx;
            };
            match inv.host.notes.note_known_as(&window, value) {
                Some(note) => {
                    inv.focus(&window, note);
                }
                None => inv.report(AppError::NoteNotFound(format!(
                    "Note could not be found with this ID: {}",
                    value
                ))),
            }
        }
        OpenParam::Timestamp => {
            let Some(window) = inv.require_collection(&ctx, &param.label) else {
                return ctx;
            };
            let has_timestamp = inv
                .host
                .notes
                .schema(&window)
                .map(|schema| schema.has_timestamp)
                .unwrap_or(false);
            if !has_timestamp {
                inv.report(AppError::NoteNotFound(
                    "Indicated Collection does not have a Timestamp field".to_string(),
                ));
                return ctx;
            }
            match inv.host.notes.note_for_timestamp(&window, value) {
                Some(note) => {
                    inv.focus(&window, note);
                }
                None => inv.report(AppError::NoteNotFound(format!(
                    "Note could not be found with this Timestamp: {}",
                    value
                ))),
            }
        }
        OpenParam::NotePath => open_note_path(inv, &mut ctx, value),
        OpenParam::Attachment => {
            let Some(window) = inv.require_collection(&ctx, &param.label) else {
                return ctx;
            };
            if inv.host.notes.selected_note(&window).is_none() {
                inv.report(AppError::NoteNotFound(format!(
                    "No note is selected to open attachment '{}'",
                    value
                )));
                return ctx;
            }
            if !inv.host.views.open_attachment(&window, value) {
                inv.report(AppError::NoteNotFound(format!("Attachment '{}' could not be opened", value)));
            }
        }
        OpenParam::Select => {
            let Some(window) = inv.require_collection(&ctx, &param.label) else {
                return ctx;
            };
            match Selection::parse(value) {
                Some(Selection::Random) => inv.host.views.select_random(&window, false),
                Some(Selection::RandomPick) => inv.host.views.select_random(&window, true),
                Some(Selection::Action) => inv.host.views.select_note(&window),
                None => inv.report(AppError::invalid_value(VERB, &param.label, value)),
            }
        }
        OpenParam::Mode => {
            if value != "quotes" {
                inv.report(AppError::invalid_value(VERB, &param.label, value));
                return ctx;
            }
            if let Some(window) = inv.require_collection(&ctx, &param.label) {
                inv.host.views.ensure_quotes_mode(&window);
            }
        }
    }
    ctx
}

/// Opens the folder holding a note file, then focuses the note whose id is the
/// common form of the file name.
fn open_note_path(inv: &mut Invocation<'_>, ctx: &mut CommandContext, value: &str) {
    let note_path = Path::new(value);
    if !note_path.exists() {
        inv.report(AppError::NoteNotFound(format!("Note file could not be located: {}", value)));
        return;
    }
    let Some(folder) = note_path.parent().map(|folder| folder.to_string_lossy().into_owned()) else {
        inv.report(AppError::CollectionNotFound(format!("Note file has no parent folder: {}", value)));
        return;
    };
    let Some(window) = inv.establish(ctx, CollectionKey::Path, &folder) else {
        return;
    };

    let stem = note_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let note_id = to_common(&stem);
    match inv.host.notes.note_for_id(&window, &note_id) {
        Some(note) => {
            inv.focus(&window, note);
        }
        None => inv.report(AppError::NoteNotFound(format!(
            "Note could not be found with this ID: {}",
            value
        ))),
    }
}
