use super::{fold_parameters, CollectionKey, CommandContext, Invocation};
use crate::errors::AppError;
use crate::models::QueryParam;
use crate::notes::DraftNote;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AddParam<'a> {
    Collection(CollectionKey),
    Note(NoteField<'a>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NoteField<'a> {
    Title,
    Body,
    Date,
    Custom(&'a str),
}

impl<'a> AddParam<'a> {
    fn parse(label: &'a str) -> Self {
        if let Some(key) = CollectionKey::parse(label) {
            return Self::Collection(key);
        }
        let field = match label {
            "title" | "name" => NoteField::Title,
            "body" | "note" => NoteField::Body,
            "date" | "due" | "completed" => NoteField::Date,
            other => NoteField::Custom(other),
        };
        Self::Note(field)
    }
}

pub fn interpret(inv: &mut Invocation<'_>, parameters: &[QueryParam]) {
    let ctx = fold_parameters(CommandContext::default(), parameters, |ctx, param| step(inv, ctx, param));

    let (Some(window), Some(note)) = (ctx.collection, ctx.pending_note) else {
        return;
    };
    match inv.host.notes.add_note(&window, note) {
        Some(added) => inv.diagnostics.info(format!("Added new Note titled {}", added.title)),
        None => inv.report(AppError::NoteCommitFailed("Note could not be added".to_string())),
    }
}

fn step(inv: &mut Invocation<'_>, mut ctx: CommandContext, param: &QueryParam) -> CommandContext {
    let value = param.value.as_str();
    match AddParam::parse(&param.label) {
        AddParam::Collection(key) => start_draft(inv, &mut ctx, key, value),
        AddParam::Note(field) => {
            let Some(note) = ctx.pending_note.as_mut() else {
                inv.report(AppError::missing_context(&param.label));
                return ctx;
            };
            match field {
                NoteField::Title => note.set_title(value),
                NoteField::Body => note.set_body(value),
                NoteField::Date => note.set_date(value),
                NoteField::Custom(label) => {
                    if !note.set_field(label, value) {
                        inv.report(AppError::FieldSetFailed(label.to_string()));
                    }
                }
            }
        }
    }
    ctx
}

/// A draft always belongs to the collection most recently resolved; one
/// without a readable schema leaves no draft at all.
fn start_draft(inv: &mut Invocation<'_>, ctx: &mut CommandContext, key: CollectionKey, value: &str) {
    let Some(window) = inv.establish(ctx, key, value) else {
        return;
    };
    ctx.pending_note = inv.host.notes.schema(&window).map(DraftNote::new);
    if ctx.pending_note.is_none() {
        inv.report(AppError::CollectionNotFound(format!(
            "Collection at {} has no readable schema",
            window.link.url
        )));
    }
}
