/// Application name shown on the intro screen
pub const APP_NAME: &str = "Crown Art & Design";

/// Title rendered in every screen header
pub const HEADER_TITLE: &str = "Holland";

/// Storage keys. Each screen is the only writer of its own keys.
pub const KEY_FAVORITES: &str = "favorites";
pub const KEY_SAVED_DRAWINGS: &str = "saved_drawings";
pub const KEY_ALBUMS: &str = "albums";
pub const KEY_COMPLETED_QUESTS: &str = "completed_quests";
pub const KEY_PROFILE_NAME: &str = "profile_name";
pub const KEY_PROFILE_BIO: &str = "profile_bio";
pub const KEY_PROFILE_CONTACT: &str = "profile_contact";
pub const KEY_PROFILE_IMAGE: &str = "profile_image";
pub const KEY_CAPTURED_PHOTO: &str = "captured_photo";
pub const KEY_USER_ARTWORKS: &str = "user_artworks";

/// The four profile keys, in load/save order
pub const PROFILE_KEYS: [&str; 4] = [
    KEY_PROFILE_NAME,
    KEY_PROFILE_BIO,
    KEY_PROFILE_CONTACT,
    KEY_PROFILE_IMAGE,
];

/// Style assigned to user-added artworks that leave the field blank
pub const DEFAULT_ARTWORK_STYLE: &str = "Unknown";

/// Questions per quest
pub const QUIZ_LENGTH: usize = 5;

/// Answer options per question
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Columns of the saved-drawings grid
pub const GALLERY_COLUMNS: usize = 3;

/// Rotation applied by the photo edit step, in degrees
pub const ROTATION_DEGREES: i32 = 90;

/// Intro: first fade-in duration (ms)
pub const INTRO_FIRST_FADE_MS: u64 = 3_500;

/// Intro: delay before the second fade starts (ms)
pub const INTRO_SECOND_FADE_DELAY_MS: u64 = 500;

/// Intro: second fade-in duration (ms)
pub const INTRO_SECOND_FADE_MS: u64 = 7_500;

/// Intro: time from cold start until the tab shell takes over (ms)
pub const INTRO_TOTAL_MS: u64 = 8_000;

/// Tab bar palette
pub const TAB_ACTIVE_TINT: &str = "#FFC107";
pub const TAB_INACTIVE_TINT: &str = "white";
pub const TAB_INDICATOR_GRADIENT: [&str; 3] = ["#FFC107", "#FF5722", "#E91E63"];
