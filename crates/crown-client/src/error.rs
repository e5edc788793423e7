use crown_shared::{ArtworkId, CapabilityError, QuestId, Tab, ValidationError};
use crown_store::StoreError;
use thiserror::Error;

/// Errors surfaced by screen controllers and the shell.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Capability(#[from] CapabilityError),

    #[error("Artwork not found: {0}")]
    ArtworkNotFound(ArtworkId),

    #[error("Quest not found: {0}")]
    QuestNotFound(QuestId),

    #[error("Album not found: {0:?}")]
    AlbumNotFound(String),

    #[error("Camera is not ready: permission not granted or no device bound")]
    CameraUnavailable,

    #[error("No photo is open in the editor")]
    NothingToEdit,

    #[error("Cannot {action} while the quiz is {state}")]
    InvalidTransition {
        state: &'static str,
        action: &'static str,
    },

    #[error("No quest is open")]
    NoQuestOpen,

    #[error("Intro is still playing, cannot open {0}")]
    IntroInProgress(Tab),
}

pub type Result<T> = std::result::Result<T, ClientError>;
