use super::{fold_parameters, CommandContext, Invocation};
use crate::errors::AppError;
use crate::models::{CollectionLink, LinkType, QueryParam};

const VERB: &str = "run";

/// `go` and `path` accumulate independently; the launch happens once the
/// fold is complete, so their relative order does not matter.
pub fn interpret(inv: &mut Invocation<'_>, parameters: &[QueryParam]) {
    let ctx = fold_parameters(CommandContext::default(), parameters, |ctx, param| step(inv, ctx, param));
    if let Some(script) = ctx.run_target.script.as_deref() {
        inv.host.scripts.launch(script, ctx.run_target.immediate);
    }
}

fn step(inv: &mut Invocation<'_>, mut ctx: CommandContext, param: &QueryParam) -> CommandContext {
    let value = param.value.as_str();
    match param.label.as_str() {
        "go" => match value {
            "now" => ctx.run_target.immediate = true,
            "wait" => ctx.run_target.immediate = false,
            _ => inv.report(AppError::invalid_value(VERB, &param.label, value)),
        },
        "path" => {
            let Some(link) = CollectionLink::from_file_str(value) else {
                inv.report(AppError::ScriptPathInvalid(format!(
                    "Run path of '{}' could not be resolved",
                    value
                )));
                return ctx;
            };
            let link_type = inv.host.classifier.classify(&link);
            let link = link.with_link_type(link_type);
            if link.link_type == LinkType::Script {
                ctx.run_target.script = Some(link.path);
            } else {
                inv.report(AppError::ScriptPathInvalid(format!(
                    "Run path of '{}' does not point to a valid script file",
                    value
                )));
            }
        }
        other => inv.report(AppError::unrecognized(VERB, other)),
    }
    ctx
}
