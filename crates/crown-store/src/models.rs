//! Record shapes persisted as JSON values in the key-value store.
//!
//! Every struct derives `Serialize` and `Deserialize`; optional fields default
//! when missing so older values still load.

use crown_shared::{ArtworkId, ImageRef};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Artwork
// ---------------------------------------------------------------------------

/// A catalog entry, either seeded or added by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub artist: String,
    pub year: i32,
    pub description: String,
    /// Remote URI or local path of the artwork image.
    pub image: ImageRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

// ---------------------------------------------------------------------------
// Album
// ---------------------------------------------------------------------------

/// A user-named, ordered collection of image references.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Album {
    pub name: String,
    #[serde(default)]
    pub photos: Vec<ImageRef>,
}

impl Album {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            photos: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

/// The four profile fields. Each lives under its own key.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileRecord {
    pub name: String,
    pub bio: String,
    pub contact: String,
    pub avatar: Option<ImageRef>,
}
