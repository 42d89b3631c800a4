use super::Invocation;
use crate::errors::AppError;
use crate::models::QueryParam;
use std::path::{Path, PathBuf};

const VERB: &str = "find";

pub fn interpret(inv: &mut Invocation<'_>, parameters: &[QueryParam]) {
    for param in parameters {
        if param.label != "path" {
            inv.report(AppError::unrecognized(VERB, &param.label));
            continue;
        }
        let base = inv.host.preferences.last_selected_note_path();
        let target = resolve_relative(&param.value, base.as_deref());
        if !inv.host.files.reveal(&target) {
            inv.report(AppError::FileRevealFailed(param.value.clone()));
        }
    }
}

/// Relative paths hang off the folder of the last selected note; absolute
/// paths, or a missing base, leave the value as given.
fn resolve_relative(value: &str, last_selected_note: Option<&Path>) -> PathBuf {
    let base = last_selected_note
        .filter(|path| !path.as_os_str().is_empty())
        .and_then(Path::parent);
    match base {
        Some(folder) => folder.join(value),
        None => PathBuf::from(value),
    }
}
