//! Remote client error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure taxonomy shared by the edit and execution clients.
///
/// `Validation` is raised before any network call; `Transport` covers
/// network-level failures; `Remote` means the service was reached but
/// reported an error or an unusable payload. None of these are retried.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{message}")]
    Validation { message: String },

    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("remote service error: {message}")]
    Remote { message: String },
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn remote(message: impl Into<String>) -> Self {
        Self::Remote {
            message: message.into(),
        }
    }

    /// Whether the failure was caught before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            message: err.to_string(),
        }
    }
}

/// Bound an error body to something log- and terminal-friendly.
pub(crate) fn truncate(value: &str, max_chars: usize) -> String {
    let mut chars = value.chars();
    let truncated: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{truncated}...")
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_detection() {
        assert!(Error::validation("empty input").is_validation());
        assert!(!Error::transport("connection refused").is_validation());
        assert!(!Error::remote("bad payload").is_validation());
    }

    #[test]
    fn test_display_prefixes() {
        assert_eq!(Error::validation("no code to edit").to_string(), "no code to edit");
        assert!(Error::transport("timed out").to_string().starts_with("transport error:"));
        assert!(Error::remote("status 500").to_string().starts_with("remote service error:"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("0123456789", 10), "0123456789");
        assert_eq!(truncate("0123456789a", 10), "0123456789...");
    }
}
