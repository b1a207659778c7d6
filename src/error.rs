use std::fmt;
use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Excel import error: {0}")]
    Import(String),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Key error: {0}")]
    MissingKey(KeyErrorContext),

    #[error("Type error: {0}")]
    Type(String),
}

/// Details for a lookup of a key that the extracted tree does not have
#[derive(Debug, Clone, PartialEq)]
pub struct KeyErrorContext {
    pub key: String,
    pub available_keys: Vec<String>,
}

impl KeyErrorContext {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            available_keys: Vec::new(),
        }
    }

    pub fn with_available_keys(mut self, keys: Vec<String>) -> Self {
        self.available_keys = keys;
        self
    }

    /// Find a similar key name (case-insensitive, ignoring spaces)
    pub fn find_similar(&self, name: &str) -> Option<String> {
        let squash = |s: &str| -> String {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .flat_map(char::to_lowercase)
                .collect()
        };
        let wanted = squash(name);
        if wanted.is_empty() {
            return None;
        }

        // Exact match after squashing
        if let Some(k) = self.available_keys.iter().find(|k| squash(k) == wanted) {
            return Some(k.clone());
        }

        // Prefix, then contains
        self.available_keys
            .iter()
            .find(|k| squash(k).starts_with(&wanted))
            .or_else(|| {
                self.available_keys
                    .iter()
                    .find(|k| squash(k).contains(&wanted))
            })
            .cloned()
    }

    pub fn format_error(&self) -> String {
        let mut msg = format!("'{}' not found", self.key);

        if let Some(similar) = self.find_similar(&self.key) {
            msg.push_str(&format!("\n  Did you mean '{}'?", similar));
        }

        // Listing every key of a big block is noise
        if !self.available_keys.is_empty() && self.available_keys.len() <= 10 {
            msg.push_str(&format!(
                "\n  Available keys: {}",
                self.available_keys.join(", ")
            ));
        }

        msg
    }
}

impl fmt::Display for KeyErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_error())
    }
}

/// Helper to build a missing-key error
pub fn missing_key<I, S>(key: &str, available: I) -> SheetError
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    SheetError::MissingKey(
        KeyErrorContext::new(key)
            .with_available_keys(available.into_iter().map(Into::into).collect()),
    )
}
