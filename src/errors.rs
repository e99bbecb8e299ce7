use std::fmt;

#[derive(Debug, Clone)]
pub enum QaError {
    NotFoundError(String),
    UpstreamError(String),
    ConfigError(String),
}

impl fmt::Display for QaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QaError::NotFoundError(msg) => write!(f, "Not found: {}", msg),
            QaError::UpstreamError(msg) => write!(f, "Upstream error: {}", msg),
            QaError::ConfigError(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for QaError {}

impl From<reqwest::Error> for QaError {
    fn from(err: reqwest::Error) -> Self {
        QaError::UpstreamError(err.to_string())
    }
}

impl From<std::io::Error> for QaError {
    fn from(err: std::io::Error) -> Self {
        QaError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for QaError {
    fn from(err: serde_json::Error) -> Self {
        QaError::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    #[test]
    fn test_error_display_not_found() {
        let error = QaError::NotFoundError("no report for session".to_string());
        assert_eq!(error.to_string(), "Not found: no report for session");
    }

    #[test]
    fn test_error_display_upstream_error() {
        let error = QaError::UpstreamError("backend unreachable".to_string());
        assert_eq!(error.to_string(), "Upstream error: backend unreachable");
    }

    #[test]
    fn test_error_display_config_error() {
        let error = QaError::ConfigError("missing field".to_string());
        assert_eq!(error.to_string(), "Config error: missing field");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let error: QaError = io_err.into();
        match error {
            QaError::ConfigError(msg) => assert!(msg.contains("no such file")),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_error_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let error: QaError = json_err.into();
        assert!(matches!(error, QaError::ConfigError(_)));
    }

    #[test]
    fn test_error_debug() {
        let error = QaError::NotFoundError("test".to_string());
        let debug_str = format!("{:?}", error);
        assert!(debug_str.contains("NotFoundError"));
        assert!(debug_str.contains("test"));
    }

    #[test]
    fn test_error_source() {
        let error = QaError::UpstreamError("backend down".to_string());
        assert!(error.source().is_none());
    }

    #[test]
    fn test_error_clone() {
        let error = QaError::UpstreamError("timeout".to_string());
        let cloned = error.clone();
        assert_eq!(error.to_string(), cloned.to_string());
    }
}
