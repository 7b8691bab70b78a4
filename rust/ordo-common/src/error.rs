use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_operation(name: impl Into<String>) -> Error {
        Error(ErrorKind::InvalidOperation { name: name.into() }.into())
    }

    pub fn invalid_complementation(boundary: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidComplementation {
                boundary: boundary.into(),
            }
            .into(),
        )
    }

    pub fn invalid_state(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidState {
                message: message.into(),
            }
            .into(),
        )
    }

    /// Returns `true` if this error was raised by a validating constructor.
    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("invalid operation {name}")]
    InvalidOperation { name: String },

    #[error("{boundary} boundary has no complementation")]
    InvalidComplementation { boundary: String },

    #[error("invalid state: {message}")]
    InvalidState { message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let e = Error::invalid_arg("to", "to boundary is less than from boundary");
        assert!(e.is_invalid_arg());
        assert_eq!(
            e.to_string(),
            "invalid argument to: to boundary is less than from boundary"
        );

        let e = Error::invalid_complementation("infinite");
        assert_eq!(e.to_string(), "infinite boundary has no complementation");
        assert!(matches!(
            e.into_kind(),
            ErrorKind::InvalidComplementation { .. }
        ));

        let e = Error::invalid_operation("value of an empty boundary");
        assert_eq!(e.to_string(), "invalid operation value of an empty boundary");
        assert!(!e.is_invalid_arg());
    }
}
