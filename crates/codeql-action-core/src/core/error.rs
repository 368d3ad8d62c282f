use thiserror::Error;

pub type ActionResult<T> = Result<T, ActionError>;

#[derive(Error, Debug)]
pub enum ActionError {
    #[error("{0}")]
    InvalidUrl(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    ConfigParse(String),

    #[error(
        "Cannot specify both `--github-auth` and `--github-auth-stdin`. Please use `--github-auth-stdin`, which is more secure."
    )]
    ConflictingAuthSources,

    #[error("Standard input is empty")]
    EmptyInput,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "No GitHub authentication token was specified. Please provide a token via the GITHUB_TOKEN environment variable, or by adding the `--github-auth-stdin` flag and passing the token via standard input."
    )]
    NoAuthProvided,

    #[error("Unknown mode: {0}.")]
    UnknownMode(String),

    #[error("{0} environment variable must be set")]
    MissingRequiredEnvVar(String),

    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request reached the server but came back with a non-success status.
    #[error("{message}")]
    HttpStatus { status: u16, message: String },

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("CodeQL error: {0}")]
    CodeQl(String),
}

impl ActionError {
    /// HTTP status code carried by the error, if it came from an HTTP response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ActionError::HttpStatus { status, .. } => Some(*status),
            ActionError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this error originated from an HTTP response
    pub fn is_http_error(&self) -> bool {
        self.status().is_some()
    }
}
