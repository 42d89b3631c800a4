use super::{fold_parameters, CollectionKey, CommandContext, Invocation};
use crate::errors::AppError;
use crate::models::QueryParam;

const VERB: &str = "expand";

pub fn interpret(inv: &mut Invocation<'_>, parameters: &[QueryParam]) {
    fold_parameters(CommandContext::default(), parameters, |ctx, param| step(inv, ctx, param));
}

fn step(inv: &mut Invocation<'_>, mut ctx: CommandContext, param: &QueryParam) -> CommandContext {
    if let Some(key) = CollectionKey::parse(&param.label) {
        inv.establish(&mut ctx, key, &param.value);
        return ctx;
    }
    if param.label != "tag" {
        inv.report(AppError::unrecognized(VERB, &param.label));
        return ctx;
    }

    if let Some(window) = inv.require_collection(&ctx, &param.label) {
        let tag = param.value.strip_prefix('#').unwrap_or(&param.value);
        inv.host.views.show_navigation(&window);
        inv.host.views.expand_tag(&window, tag);
    }
    ctx
}
