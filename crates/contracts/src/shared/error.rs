use thiserror::Error;

/// Failure to obtain the menu document. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("invalid menu document: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> Self {
        LoadError::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(LoadError::Status(404).to_string(), "HTTP 404");
        assert_eq!(
            LoadError::Network("offline".into()).to_string(),
            "network error: offline"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(LoadError::from(err), LoadError::Parse(_)));
    }
}
