use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{source_name} API error: {status} - {body}")]
    SourceApi {
        source_name: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{0} rejected the credentials")]
    Unauthorized(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Errors that must stop the whole run instead of only the current language.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Unauthorized(_) | Error::Config(_) | Error::InvalidHeader(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatal_classification() {
        assert!(Error::Unauthorized("superjob".into()).is_fatal());
        assert!(Error::Config("missing".into()).is_fatal());
        assert!(!Error::ParseError("bad json".into()).is_fatal());
        assert!(!Error::SourceApi {
            source_name: "headhunter".into(),
            status: reqwest::StatusCode::BAD_GATEWAY,
            body: String::new(),
        }
        .is_fatal());
    }
}
