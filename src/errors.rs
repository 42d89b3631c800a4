use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    Structural,
    Parameter,
    Resolution,
    Commit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("MALFORMED_URL: could not fashion a URL from this string: {0}")]
    MalformedUrl(String),
    #[error("MISSING_SCHEME: could not extract a scheme from this URL: {0}")]
    MissingScheme(String),
    #[error("WRONG_SCHEME: invalid scheme detected: {0}")]
    WrongScheme(String),
    #[error("MISSING_COMMAND: could not extract a command from this URL: {0}")]
    MissingCommand(String),
    #[error("UNKNOWN_COMMAND: invalid command: {0}")]
    UnknownCommand(String),
    #[error("UNRECOGNIZED_PARAMETER: {verb} query parameter of '{label}' not recognized")]
    UnrecognizedParameter { verb: String, label: String },
    #[error("INVALID_PARAMETER_VALUE: '{value}' is not a valid value for the {verb} {label} parameter")]
    InvalidParameterValue {
        verb: String,
        label: String,
        value: String,
    },
    #[error("MISSING_CONTEXT: '{label}' needs a collection, but none has been opened yet")]
    MissingContext { label: String },
    #[error("COLLECTION_NOT_FOUND: {0}")]
    CollectionNotFound(String),
    #[error("NOTE_NOT_FOUND: {0}")]
    NoteNotFound(String),
    #[error("FIELD_SET_FAILED: add query parameter of '{0}' not recognized")]
    FieldSetFailed(String),
    #[error("SCRIPT_PATH_INVALID: {0}")]
    ScriptPathInvalid(String),
    #[error("FILE_REVEAL_FAILED: item to be opened at {0} could not be used, possibly due to expired permissions")]
    FileRevealFailed(String),
    #[error("NOTE_COMMIT_FAILED: {0}")]
    NoteCommitFailed(String),
    #[error("IO_FAILURE: {0}")]
    Io(String),
    #[error("INTERNAL: {0}")]
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedUrl(_) => "MALFORMED_URL",
            Self::MissingScheme(_) => "MISSING_SCHEME",
            Self::WrongScheme(_) => "WRONG_SCHEME",
            Self::MissingCommand(_) => "MISSING_COMMAND",
            Self::UnknownCommand(_) => "UNKNOWN_COMMAND",
            Self::UnrecognizedParameter { .. } => "UNRECOGNIZED_PARAMETER",
            Self::InvalidParameterValue { .. } => "INVALID_PARAMETER_VALUE",
            Self::MissingContext { .. } => "MISSING_CONTEXT",
            Self::CollectionNotFound(_) => "COLLECTION_NOT_FOUND",
            Self::NoteNotFound(_) => "NOTE_NOT_FOUND",
            Self::FieldSetFailed(_) => "FIELD_SET_FAILED",
            Self::ScriptPathInvalid(_) => "SCRIPT_PATH_INVALID",
            Self::FileRevealFailed(_) => "FILE_REVEAL_FAILED",
            Self::NoteCommitFailed(_) => "NOTE_COMMIT_FAILED",
            Self::Io(_) => "IO_FAILURE",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedUrl(_)
            | Self::MissingScheme(_)
            | Self::WrongScheme(_)
            | Self::MissingCommand(_)
            | Self::UnknownCommand(_) => ErrorKind::Structural,
            Self::UnrecognizedParameter { .. }
            | Self::InvalidParameterValue { .. }
            | Self::MissingContext { .. } => ErrorKind::Parameter,
            Self::NoteCommitFailed(_) => ErrorKind::Commit,
            Self::CollectionNotFound(_)
            | Self::NoteNotFound(_)
            | Self::FieldSetFailed(_)
            | Self::ScriptPathInvalid(_)
            | Self::FileRevealFailed(_)
            | Self::Io(_)
            | Self::Internal(_) => ErrorKind::Resolution,
        }
    }

    pub(crate) fn unrecognized(verb: &str, label: &str) -> Self {
        Self::UnrecognizedParameter {
            verb: verb.to_string(),
            label: label.to_string(),
        }
    }

    pub(crate) fn invalid_value(verb: &str, label: &str, value: &str) -> Self {
        Self::InvalidParameterValue {
            verb: verb.to_string(),
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    pub(crate) fn missing_context(label: &str) -> Self {
        Self::MissingContext {
            label: label.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Internal(value.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
