use super::{fold_parameters, CommandContext, Invocation};
use crate::errors::AppError;
use crate::models::QueryParam;

const VERB: &str = "help";

/// Focuses notes inside the knowledge base, which is opened first.
pub fn interpret(inv: &mut Invocation<'_>, parameters: &[QueryParam]) {
    let Some(window) = inv.host.windows.open_knowledge_base() else {
        inv.report(AppError::CollectionNotFound(
            "Notenik Knowledge Base could not be opened".to_string(),
        ));
        return;
    };

    let seeded = CommandContext {
        collection: Some(window),
        ..CommandContext::default()
    };
    fold_parameters(seeded, parameters, |ctx, param| step(inv, ctx, param));
}

fn step(inv: &mut Invocation<'_>, ctx: CommandContext, param: &QueryParam) -> CommandContext {
    if param.label != "id" {
        inv.report(AppError::unrecognized(VERB, &param.label));
        return ctx;
    }
    let Some(window) = inv.require_collection(&ctx, &param.label) else {
        return ctx;
    };
    match inv.host.notes.note_for_id(&window, &param.value) {
        Some(note) => {
            inv.focus(&window, note);
        }
        None => inv.report(AppError::NoteNotFound(format!(
            "Note could not be found with this ID: {}",
            param.value
        ))),
    }
    ctx
}
