use crate::errors::AppResult;
use crate::models::AppSettings;
use std::path::Path;

pub const SETTINGS_FILE_NAME: &str = "url-actor-settings.json";

/// Missing files yield defaults; so do malformed ones, after a warning.
pub fn load_settings(path: &Path) -> AppResult<AppSettings> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(AppSettings::default()),
        Err(error) => return Err(error.into()),
    };
    match serde_json::from_str::<AppSettings>(&raw) {
        Ok(settings) => Ok(settings),
        Err(error) => {
            tracing::warn!(path = %path.display(), error = %error, "settings file unreadable, using defaults");
            Ok(AppSettings::default())
        }
    }
}

pub fn save_settings(path: &Path, settings: &AppSettings) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(settings)?)?;
    Ok(())
}

pub fn update_settings(path: &Path, update: serde_json::Value) -> AppResult<AppSettings> {
    let current = load_settings(path)?;
    let mut merged = serde_json::to_value(current)?;
    merge_json(&mut merged, update);
    let settings: AppSettings = serde_json::from_value(merged)?;
    save_settings(path, &settings)?;
    Ok(settings)
}

fn merge_json(target: &mut serde_json::Value, update: serde_json::Value) {
    match (target, update) {
        (serde_json::Value::Object(target_map), serde_json::Value::Object(update_map)) => {
            for (key, value) in update_map {
                merge_json(target_map.entry(key).or_insert(serde_json::Value::Null), value);
            }
        }
        (target, update) => {
            *target = update;
        }
    }
}
