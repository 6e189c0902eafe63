//! Error types for the blocklist pipeline.

use thiserror::Error;

/// Coarse classification of a [`BlocklistError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Network,
    Validation,
}

#[derive(Error, Debug)]
pub enum BlocklistError {
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP request to {url} failed with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("{0}")]
    Validation(String),
}

impl BlocklistError {
    /// Wrap an io error with the operation and path that failed.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        BlocklistError::Io {
            context: context.into(),
            source,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            BlocklistError::Io { .. } => ErrorKind::Io,
            BlocklistError::Network(_) | BlocklistError::HttpStatus { .. } => ErrorKind::Network,
            BlocklistError::Validation(_) => ErrorKind::Validation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_message_includes_cause() {
        let err = BlocklistError::io(
            "Failed to read data/list.ipv4",
            std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(
            err.to_string(),
            "Failed to read data/list.ipv4: No such file or directory"
        );
    }

    #[test]
    fn test_http_status_is_network_kind() {
        let err = BlocklistError::HttpStatus {
            url: "https://example.com/list.ipv4".to_string(),
            status: 404,
        };
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.to_string().contains("404"));
    }
}
