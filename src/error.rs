/// Error type
#[derive(Debug)]
pub enum Error {
    /// An IO error.
    Io(std::io::Error),

    /// An average was requested over zero values.
    EmptyInput,
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => {
                write!(f, "{e}",)
            }
            Self::EmptyInput => {
                write!(f, "EmptyInput",)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::EmptyInput => None,
        }
    }
}

/// Result helper type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test_log::test]
    fn display_empty_input() {
        assert_eq!("EmptyInput", Error::EmptyInput.to_string());
        assert!(Error::EmptyInput.source().is_none());
    }

    #[test_log::test]
    fn io_error_is_wrapped() {
        let err = Error::from(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "pipe closed",
        ));

        assert!(matches!(err, Error::Io(_)));
        assert_eq!("pipe closed", err.to_string());
        assert!(err.source().is_some());
    }
}
