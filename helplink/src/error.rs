//! The error type.

/// An error raised by a host or by an invalid configuration.
#[derive(Debug)]
pub enum Error {
    /// A host operation failed.
    BackendError {
        /// The error message.
        msg: String,
        /// The underlying error, if any.
        err: Option<Box<dyn std::error::Error>>,
    },
    /// The configuration cannot be used.
    InvalidConfig(String),
}

impl Error {
    /// Create a `BackendError` with only a message.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::BackendError {
            msg: msg.into(),
            err: None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::BackendError { msg, err } => {
                if let Some(err) = err {
                    write!(f, "{}: {}", msg, err)?;
                } else {
                    write!(f, "{}", msg)?;
                }
            }
            Error::InvalidConfig(msg) => {
                write!(f, "Invalid configuration: {}", msg)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::BackendError { err, .. } => err.as_deref(),
            Error::InvalidConfig(_) => None,
        }
    }
}
