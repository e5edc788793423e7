//! Client configuration loaded from environment variables.
//!
//! All settings have defaults so the app starts with zero configuration.

use std::path::PathBuf;

/// Which screen the AR tab mounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArVariant {
    /// Live preview, capture and rotate edit step.
    #[default]
    Camera,
    /// Named albums filled from the photo library or the camera.
    Albums,
}

impl ArVariant {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "camera" => Some(Self::Camera),
            "albums" => Some(Self::Albums),
            _ => None,
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory holding `crown.db`.
    /// Env: `CROWN_DATA_DIR`
    /// Default: platform data directory.
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing survives the process.
    /// Env: `CROWN_IN_MEMORY` (true/false)
    /// Default: `false`
    pub in_memory: bool,

    /// Start directly in the tab shell.
    /// Env: `CROWN_SKIP_INTRO` (true/false)
    /// Default: `false`
    pub skip_intro: bool,

    /// Open the rotate editor after each capture.
    /// Env: `CROWN_CAMERA_EDITING` (true/false)
    /// Default: `true`
    pub camera_editing: bool,

    /// Env: `CROWN_AR_VARIANT` (camera/albums)
    /// Default: `camera`
    pub ar_variant: ArVariant,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            in_memory: false,
            skip_intro: false,
            camera_editing: true,
            ar_variant: ArVariant::Camera,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] but reading from an arbitrary source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup("CROWN_DATA_DIR") {
            if !dir.trim().is_empty() {
                config.data_dir = Some(PathBuf::from(dir));
            }
        }

        if let Some(val) = lookup("CROWN_IN_MEMORY") {
            config.in_memory = parse_flag("CROWN_IN_MEMORY", &val, config.in_memory);
        }

        if let Some(val) = lookup("CROWN_SKIP_INTRO") {
            config.skip_intro = parse_flag("CROWN_SKIP_INTRO", &val, config.skip_intro);
        }

        if let Some(val) = lookup("CROWN_CAMERA_EDITING") {
            config.camera_editing =
                parse_flag("CROWN_CAMERA_EDITING", &val, config.camera_editing);
        }

        if let Some(val) = lookup("CROWN_AR_VARIANT") {
            match ArVariant::parse(&val) {
                Some(variant) => config.ar_variant = variant,
                None => tracing::warn!(value = %val, "Invalid CROWN_AR_VARIANT, using default"),
            }
        }

        // RUST_LOG is handled directly by tracing-subscriber's EnvFilter.

        config
    }
}

fn parse_flag(name: &str, value: &str, default: bool) -> bool {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => {
            tracing::warn!(var = name, value = %value, "Invalid boolean, using default");
            default
        }
    }
}
