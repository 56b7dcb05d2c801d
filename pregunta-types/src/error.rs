/// Error raised synchronously while building a questionnaire.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A choice question was given no choices.
    #[error("Question '{prompt}' needs at least one choice")]
    EmptyChoices { prompt: String },

    /// A validator pattern failed to compile.
    #[error("Invalid validator pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Failure of the line device.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    /// Input ended before the questionnaire finished.
    #[error("Input closed")]
    Closed,

    /// User interrupted input (Ctrl+C).
    #[error("Input interrupted by user")]
    Interrupted,

    /// I/O failure while reading or writing.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Device-specific failure.
    #[error("Device error: {0}")]
    Other(anyhow::Error),
}

impl DeviceError {
    /// Create a device error from any error type.
    pub fn other(err: impl Into<anyhow::Error>) -> Self {
        Self::Other(err.into())
    }

    /// Map an I/O error, treating `Interrupted` and `UnexpectedEof` specially.
    pub fn from_io(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::Interrupted => Self::Interrupted,
            std::io::ErrorKind::UnexpectedEof => Self::Closed,
            _ => Self::Io(err),
        }
    }
}

/// Error returned from running a questionnaire.
#[derive(Debug, thiserror::Error)]
pub enum QuestionnaireError {
    /// The line device failed mid-run.
    #[error("Line device failed: {0}")]
    Device(#[from] DeviceError),
}

impl QuestionnaireError {
    /// Check if input ended before the questionnaire finished.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Device(DeviceError::Closed))
    }

    /// Check if the user interrupted the questionnaire.
    pub fn is_interrupted(&self) -> bool {
        matches!(self, Self::Device(DeviceError::Interrupted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_interrupted_maps_to_interrupted() {
        let err = DeviceError::from_io(std::io::Error::from(std::io::ErrorKind::Interrupted));
        assert!(matches!(err, DeviceError::Interrupted));
    }

    #[test]
    fn io_eof_maps_to_closed() {
        let err = DeviceError::from_io(std::io::Error::from(std::io::ErrorKind::UnexpectedEof));
        assert!(QuestionnaireError::from(err).is_closed());
    }

    #[test]
    fn error_messages() {
        let err = BuildError::EmptyChoices {
            prompt: "Color".to_string(),
        };
        assert_eq!(err.to_string(), "Question 'Color' needs at least one choice");

        let err = QuestionnaireError::from(DeviceError::Closed);
        assert_eq!(err.to_string(), "Line device failed: Input closed");
    }
}
