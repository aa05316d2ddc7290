use thiserror::Error;

#[derive(Error, Debug)]
pub enum MarqueeError {
    #[error("movie '{0}' not found")]
    MovieNotFound(String),

    #[error("invalid location '{0}': {1}")]
    InvalidLocation(String, String),

    #[error("invalid value '{1}' for {0}")]
    InvalidParam(&'static str, String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("movie service returned {0}")]
    ApiStatus(u16),

    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl MarqueeError {
    /// Constructor used for sort-order parsing
    pub fn invalid_sort_order(value: String) -> Self {
        Self::InvalidParam("sortOrder", value)
    }

    /// Constructor used for sort-key parsing
    pub fn invalid_sort_key(value: String) -> Self {
        Self::InvalidParam("sortBy", value)
    }
}

pub type Result<T> = std::result::Result<T, MarqueeError>;
