use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CLUBHOUSE_API_TOKEN environment variable is not set. Set it or run 'clubhouse auth --token <TOKEN>'.")]
    ApiTokenNotFound,

    #[error("GOOGLE_SHEETS_ACCESS_TOKEN environment variable is not set. Set it or pass --dry-run.")]
    SheetsTokenNotFound,

    #[error("No spreadsheet configured. Set CLUBHOUSE_SPREADSHEET_ID or 'spreadsheet_id' in the config file.")]
    SpreadsheetNotConfigured,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Story {story_id} has unknown story type '{story_type}'")]
    UnknownStoryType { story_id: i64, story_type: String },

    #[error("Gave up after {0} pages; the search endpoint kept returning a next page")]
    PageLimitExceeded(usize),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

pub type ReportResult<T> = Result<T, ReportError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> ReportResult<T>;
    fn with_context<F>(self, f: F) -> ReportResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> ReportResult<T> {
        self.map_err(|e| ReportError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ReportResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ReportError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> ReportResult<T> {
        self.ok_or_else(|| ReportError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> ReportResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| ReportError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! report_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::ReportError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::ReportError::$error_type(format!($fmt, $($arg)*))
    };
}
