use serde::{Deserialize, Serialize};

/// Error kinds used by callers to pick the documented fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    NotFound,
    Parse,
    Io,
    Validation,
    Render,
    Infrastructure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Parse => "parse",
            ErrorKind::Io => "io",
            ErrorKind::Validation => "validation",
            ErrorKind::Render => "render",
            ErrorKind::Infrastructure => "infrastructure",
        }
    }

    /// Missing data is expected (no README, no translation file) and is not worth a warning
    pub fn is_expected(&self) -> bool {
        matches!(self, ErrorKind::NotFound)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::NotFound(_) => ErrorKind::NotFound,
            DomainError::Parse(_) => ErrorKind::Parse,
            DomainError::Io(_) => ErrorKind::Io,
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::Render(_) => ErrorKind::Render,
            DomainError::Infrastructure(_) => ErrorKind::Infrastructure,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DomainError::NotFound(msg)
            | DomainError::Parse(msg)
            | DomainError::Io(msg)
            | DomainError::Validation(msg)
            | DomainError::Render(msg)
            | DomainError::Infrastructure(msg) => msg,
        }
    }

    /// Format error with its kind, e.g. `[parse] Parse error: ...`
    pub fn format_with_kind(&self) -> String {
        format!("[{}] {}", self.kind(), self)
    }
}

/// Extension trait for Result types to simplify error handling
pub trait ResultExt<T> {
    /// Convert an I/O error into `NotFound` or `Io`, prefixed with `context`
    fn to_io_err(self, context: &str) -> Result<T, DomainError>;
}

impl<T> ResultExt<T> for Result<T, std::io::Error> {
    fn to_io_err(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DomainError::NotFound(context.to_string()),
            _ => DomainError::Io(format!("{}: {}", context, e)),
        })
    }
}

/// Companion to [`ResultExt`] for JSON decoding
pub trait JsonResultExt<T> {
    fn to_parse_err(self, context: &str) -> Result<T, DomainError>;
}

impl<T> JsonResultExt<T> for Result<T, serde_json::Error> {
    fn to_parse_err(self, context: &str) -> Result<T, DomainError> {
        self.map_err(|e| DomainError::Parse(format!("{}: {}", context, e)))
    }
}
