use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Drone driver error: {0}")]
    Driver(String),

    #[error("Invalid duration code 0 at note {index}")]
    InvalidDuration { index: usize },

    #[error("Invalid tempo: {0} BPM")]
    InvalidTempo(u32),

    #[error("Song not found: {0}")]
    SongNotFound(String),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }

    /// Wrap a backend failure message
    pub fn driver(message: impl Into<String>) -> Self {
        Error::Driver(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_not_found() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = Error::Io(io_err);
        assert!(err.is_not_found());

        let err2 = Error::driver("controller unplugged");
        assert!(!err2.is_not_found());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::InvalidDuration { index: 7 }.to_string(),
            "Invalid duration code 0 at note 7"
        );
        assert_eq!(Error::InvalidTempo(0).to_string(), "Invalid tempo: 0 BPM");
        assert_eq!(
            Error::driver("buzzer busy").to_string(),
            "Drone driver error: buzzer busy"
        );
    }
}
