use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Cannot create {enum_name} from value '{value}'")]
    UnknownEnumValue { enum_name: String, value: String },

    #[error("Unknown shape: {name}")]
    UnknownShape { name: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Marshalling error: {message}")]
    MarshallingError { message: String },
}

impl ModelError {
    /// Short, user-facing message without the nested source chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ModelError::IoError(e) => format!("Could not read input: {}", e),
            ModelError::SerializationError(e) => format!("Input is not valid JSON for this shape: {}", e),
            ModelError::TomlError(e) => format!("Input is not valid TOML for this shape: {}", e),
            ModelError::UnknownShape { name } => {
                format!("'{}' is not a known shape, run with --list-shapes", name)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;
