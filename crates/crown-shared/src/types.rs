use serde::{Deserialize, Serialize};

use crate::constants::{TAB_ACTIVE_TINT, TAB_INACTIVE_TINT};

// Artwork identity: small literals for seeded entries, a millisecond
// timestamp for user additions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ArtworkId(pub String);

impl ArtworkId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ArtworkId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct QuestId(pub String);

impl QuestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for QuestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque image reference handed out by the platform: a local file path, a
/// remote URI or a data URI. Never decoded here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Quest difficulty. Variant order is severity order, so the derived `Ord`
/// sorts Easy < Medium < Hard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Camera permission as reported by the platform, plus the transient
/// `Requesting` state while a prompt is on screen.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    #[default]
    NotDetermined,
    Requesting,
    Granted,
    Denied,
}

/// Tab shell destinations, in tab-bar order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Tab {
    Catalog,
    Drawing,
    Quiz,
    Ar,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 5] = [Tab::Catalog, Tab::Drawing, Tab::Quiz, Tab::Ar, Tab::Profile];

    /// Route name used by the navigation capability.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Catalog => "Catalog",
            Self::Drawing => "Drawing",
            Self::Quiz => "Quiz",
            Self::Ar => "AR",
            Self::Profile => "Profile",
        }
    }

    /// Ionicons glyph for the tab bar.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Catalog => "image",
            Self::Drawing => "brush",
            Self::Quiz => "help-circle",
            Self::Ar => "cube",
            Self::Profile => "person",
        }
    }

    pub fn tint(&self, focused: bool) -> &'static str {
        if focused {
            TAB_ACTIVE_TINT
        } else {
            TAB_INACTIVE_TINT
        }
    }

    pub fn from_route(route: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.route() == route)
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.route())
    }
}
