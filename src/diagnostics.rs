use crate::collaborators::AlertPresenter;
use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub at: DateTime<Utc>,
    pub severity: Severity,
    pub code: Option<String>,
    pub message: String,
}

/// Collects and logs everything one invocation reports.
pub struct Diagnostics {
    alerts: Option<Arc<dyn AlertPresenter>>,
    verb: &'static str,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new(alerts: Option<Arc<dyn AlertPresenter>>) -> Self {
        Self {
            alerts,
            verb: "",
            entries: Vec::new(),
        }
    }

    pub fn set_verb(&mut self, verb: &'static str) {
        self.verb = verb;
    }

    pub fn info(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(verb = self.verb, "{}", message);
        self.entries.push(Diagnostic {
            at: Utc::now(),
            severity: Severity::Info,
            code: None,
            message,
        });
    }

    pub fn error(&mut self, error: AppError) {
        tracing::error!(verb = self.verb, code = error.code(), "{}", error);
        if let Some(alerts) = &self.alerts {
            alerts.alert(&error);
        }
        self.entries.push(Diagnostic {
            at: Utc::now(),
            severity: Severity::Error,
            code: Some(error.code().to_string()),
            message: error.to_string(),
        });
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<Diagnostic> {
        self.entries
    }
}
