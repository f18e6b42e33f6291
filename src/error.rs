use thiserror::Error;

/// Every failure the flashlight core can report. None of them are fatal, the
/// event handler turns each one into a single user notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("camera access was denied")]
    PermissionDenied,
    #[error("camera service unavailable: {0}")]
    HardwareUnavailable(String),
    #[error("device has no cameras")]
    NoCameras,
    #[error("no camera with a flash unit")]
    NoFlashCapableCamera,
    #[error("torch mode change rejected")]
    TorchUnsupported,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn unavailable(error: impl std::fmt::Display) -> Self {
        Error::HardwareUnavailable(error.to_string())
    }
}
