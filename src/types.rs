use std::fmt;

use quick_error::quick_error;
use serde::Deserialize;

/// Error reported by the backing service itself, passed through untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendError {
    pub status: u16,
    pub code: Option<String>,
    pub message: String,
}

impl BackendError {
    pub fn new(status: u16, code: Option<String>, message: impl Into<String>) -> Self {
        Self { status, code, message: message.into() }
    }

    /// Builds an error from a non-2xx response body. Understands both the storage
    /// api shape (`statusCode`, `error`, `message`) and the rest api shape (`code`,
    /// `message`, `details`, `hint`), otherwise keeps the raw body as the message.
    pub fn from_body(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct ErrorBody {
            #[serde(default)]
            error: Option<String>,
            #[serde(default)]
            code: Option<serde_json::Value>,
            #[serde(default)]
            message: Option<String>,
            #[serde(default)]
            details: Option<String>,
        }

        match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => {
                let code = parsed
                    .code
                    .map(|code| match code {
                        serde_json::Value::String(code) => code,
                        other => other.to_string(),
                    })
                    .or(parsed.error);
                let message = match (parsed.message, parsed.details) {
                    (Some(message), Some(details)) => format!("{} ({})", message, details),
                    (Some(message), None) => message,
                    (None, Some(details)) => details,
                    (None, None) => body.to_owned(),
                };

                Self { status, code, message }
            }
            Err(_) => Self { status, code: None, message: body.to_owned() },
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} [{}]: {}", self.status, code, self.message),
            None => write!(f, "{}: {}", self.status, self.message),
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum GalleryError {
        Backend(err: BackendError) {
            from()
            display("backend error {}", err)
        }
        Http(err: reqwest::Error) {
            from()
            display("http error {}", err)
        }
        UrlParse(err: url::ParseError) {
            from()
            display("invalid url {}", err)
        }
        Json(err: serde_json::Error) {
            from()
            display("json error {}", err)
        }
        Io(err: std::io::Error) {
            from()
            display("io error {}", err)
        }
        Sql(err: sqlx::Error) {
            from()
            display("sql error {}", err)
        }
        SqlMigrate(err: sqlx::migrate::MigrateError) {
            from()
            display("migration error {}", err)
        }
        InvalidConfig(message: String) {
            display("invalid configuration {}", message)
        }
        InvalidRow(message: String) {
            display("invalid row {}", message)
        }
        InvalidKey(message: String) {
            display("invalid key {}", message)
        }
        InvalidArgument(message: String) {
            display("invalid argument {}", message)
        }
    }
}

pub type Result<T> = std::result::Result<T, GalleryError>;
