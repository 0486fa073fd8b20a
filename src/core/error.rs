//! Error types for the logger

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Raised by `panic`/`panicf` after the line was written.
    ///
    /// Displays as the written line, without the trailing newline.
    #[error("{line}")]
    Panic { line: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    pub fn panic(line: impl Into<String>) -> Self {
        LoggerError::Panic { line: line.into() }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// The line carried by a `Panic` error
    pub fn panic_line(&self) -> Option<&str> {
        match self {
            LoggerError::Panic { line } => Some(line),
            _ => None,
        }
    }

    pub fn is_panic(&self) -> bool {
        matches!(self, LoggerError::Panic { .. })
    }
}
