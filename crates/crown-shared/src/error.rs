use thiserror::Error;

/// Rejected user input. State is never mutated when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all fields: {0} is missing")]
    MissingField(&'static str),

    #[error("Year must be a whole number, got {0:?}")]
    InvalidYear(String),

    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Album name cannot be empty")]
    EmptyAlbumName,

    #[error("An album named {0:?} already exists")]
    DuplicateAlbum(String),
}

/// Failures reported by host-platform capabilities (camera, picker, image
/// transform, drawing surface).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapabilityError {
    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("No back-facing camera available")]
    NoDevice,

    #[error("Capture failed: {0}")]
    Capture(String),

    #[error("Image picker error: {0}")]
    Picker(String),

    #[error("Image transform failed: {0}")]
    Transform(String),

    #[error("Drawing surface error: {0}")]
    Surface(String),
}
