// Types, constants and error enums shared by the store and the client.

pub mod constants;
pub mod error;
pub mod types;

pub use error::{CapabilityError, ValidationError};
pub use types::{ArtworkId, Difficulty, ImageRef, PermissionStatus, QuestId, SortDirection, Tab};
