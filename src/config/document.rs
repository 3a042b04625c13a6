//! JSON and TOML documents holding a single shape, keyed by wire names.

use crate::domain::ports::Unmarshaller;
use crate::utils::error::{ModelError, Result};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::LazyLock;
use strum::{Display, EnumString};

static ENV_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env reference pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(ascii_case_insensitive)]
pub enum DocumentFormat {
    #[strum(serialize = "json")]
    Json,
    #[strum(serialize = "toml")]
    Toml,
}

impl DocumentFormat {
    /// Picks the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        extension
            .parse()
            .map_err(|_| ModelError::InvalidConfigValueError {
                field: "input".to_string(),
                value: path.display().to_string(),
                reason: "Expected a .json or .toml document".to_string(),
            })
    }
}

/// Decodes shapes from JSON or TOML text.
///
/// `decode` and `unmarshall` parse the text exactly as given. Only documents
/// loaded from disk with `from_file` get `${VAR}` expansion.
#[derive(Debug, Clone, Copy)]
pub struct DocumentUnmarshaller {
    format: DocumentFormat,
}

impl DocumentUnmarshaller {
    pub fn new(format: DocumentFormat) -> Self {
        Self { format }
    }

    pub fn json() -> Self {
        Self::new(DocumentFormat::Json)
    }

    pub fn toml() -> Self {
        Self::new(DocumentFormat::Toml)
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn decode<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        let value = match self.format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Toml => toml::from_str(content)?,
        };
        Ok(value)
    }

    /// Reads `path`, choosing the format from its extension, and expands
    /// `${VAR}` references from the environment before parsing.
    pub fn from_file<T, P>(path: P) -> Result<T>
    where
        T: DeserializeOwned,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let (unmarshaller, content) = Self::read_document(path)?;
        unmarshaller.decode(&content)
    }

    /// Loads a user document: format from the extension, text with `${VAR}`
    /// references expanded.
    pub(crate) fn read_document(path: &Path) -> Result<(Self, String)> {
        let unmarshaller = Self::new(DocumentFormat::from_path(path)?);
        let content = substitute_env_vars(&std::fs::read_to_string(path)?);

        tracing::debug!(
            path = %path.display(),
            format = %unmarshaller.format,
            bytes = content.len(),
            "Loaded document"
        );

        Ok((unmarshaller, content))
    }
}

impl<T: DeserializeOwned> Unmarshaller<T> for DocumentUnmarshaller {
    fn unmarshall(&self, payload: &[u8]) -> Result<T> {
        let content = std::str::from_utf8(payload).map_err(|e| ModelError::MarshallingError {
            message: format!("Payload is not UTF-8: {}", e),
        })?;
        self.decode(content)
    }
}

/// Unset variables are left as written.
fn substitute_env_vars(content: &str) -> String {
    ENV_REFERENCE
        .replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
}
