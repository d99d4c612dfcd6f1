use std::fmt;

#[derive(Debug)]
pub enum Error {
    Http(reqwest::Error),
    Schema(String),
    InvalidConfig(String),
    Io(std::io::Error),
}

impl Error {
    /// Network failure or non-success status from the unit.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_))
    }

    /// The `ui_info` body was not JSON or lacked a consumed field.
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Error::Schema(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP error: {e}"),
            Error::Schema(msg) => write!(f, "schema mismatch: {msg}"),
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Error::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Http(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
