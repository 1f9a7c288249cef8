use std::path::{Path, PathBuf};

pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[derive(thiserror::Error, Debug)]
pub enum GeneratorError {
    #[error("io error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("serialization error")]
    Serialize(#[from] serde_json::Error),
    #[error("malformed collection at `{path}`: {message}")]
    Deserialize { path: String, message: String },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid collection: {0}")]
    Invalid(String),
}

impl GeneratorError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }

    /// Short machine-friendly tag, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            GeneratorError::Io { .. } => "io",
            GeneratorError::Serialize(_) => "serialize",
            GeneratorError::Deserialize { .. } => "deserialize",
            GeneratorError::Configuration(_) => "configuration",
            GeneratorError::Invalid(_) => "invalid",
        }
    }
}

impl From<serde_path_to_error::Error<serde_json::Error>> for GeneratorError {
    fn from(value: serde_path_to_error::Error<serde_json::Error>) -> Self {
        Self::Deserialize {
            path: value.path().to_string(),
            message: value.inner().to_string(),
        }
    }
}
