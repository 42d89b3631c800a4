use super::Invocation;
use crate::errors::AppError;
use crate::models::QueryParam;

const VERB: &str = "prefs";

/// Takes no parameters; any supplied are reported and ignored.
pub fn interpret(inv: &mut Invocation<'_>, parameters: &[QueryParam]) {
    for param in parameters {
        inv.report(AppError::unrecognized(VERB, &param.label));
    }
    inv.host.windows.show_preferences();
}
