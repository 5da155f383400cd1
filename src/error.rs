use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Auth error: {0}")]
    AuthError(String),

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("Protocol error: {0}")]
    ProtocolError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type DemoResult<T> = Result<T, DemoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = DemoError::ConnectionError("connection refused".to_string());
        assert_eq!(err.to_string(), "Connection error: connection refused");

        let err = DemoError::AuthError("invalid master key".to_string());
        assert_eq!(err.to_string(), "Auth error: invalid master key");

        let err = DemoError::ServerError {
            status: 429,
            message: "Request rate is large".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Server error (HTTP 429): Request rate is large"
        );

        let err = DemoError::ProtocolError("missing Documents array".to_string());
        assert_eq!(err.to_string(), "Protocol error: missing Documents array");

        let err = DemoError::ConfigError("missing field".to_string());
        assert_eq!(err.to_string(), "Config error: missing field");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: DemoError = io.into();
        assert!(matches!(err, DemoError::IoError(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err: DemoError = parse_err.into();
        assert!(matches!(err, DemoError::JsonError(_)));
    }
}
