use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(
        "{variable} environment variable not set. \
         Get your token @ https://github.com/settings/tokens. \
         Also, assert the token has full control over repositories, \
         and it is configured via SSO to access the target organization {organization}"
    )]
    Auth {
        variable: String,
        organization: String,
    },

    #[error("GitHub API error: {status} from {endpoint} - {body}")]
    Http {
        status: reqwest::StatusCode,
        endpoint: String,
        body: String,
    },

    #[error("Aborted by user, no votes were deleted")]
    UserAbort,

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
    /// A declined confirmation ends the run without side effects; it is not a failure.
    pub fn is_abort(&self) -> bool {
        matches!(self, Error::UserAbort)
    }
}
