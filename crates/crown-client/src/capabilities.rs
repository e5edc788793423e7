//! Host-platform capabilities consumed by the screens.
//!
//! The native layer (camera hardware, system photo picker, image
//! manipulation, the drawing canvas) implements these traits; the screens
//! only ever see opaque [`ImageRef`]s coming back.

use std::sync::Arc;

use async_trait::async_trait;
use crown_shared::{CapabilityError, ImageRef, PermissionStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPosition {
    Back,
    Front,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraDevice {
    pub id: String,
    pub position: CameraPosition,
}

#[async_trait]
pub trait Camera: Send + Sync {
    /// Prompt for camera access. Resolves to `Granted`, `Denied` or
    /// `NotDetermined`; never `Requesting`.
    async fn request_permission(&self) -> PermissionStatus;

    async fn devices(&self) -> Vec<CameraDevice>;

    /// Make `device` the live preview source.
    async fn bind_preview(&self, device: &CameraDevice) -> Result<(), CapabilityError>;

    /// Capture a still from the bound device.
    async fn take_photo(&self, device: &CameraDevice) -> Result<ImageRef, CapabilityError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    Picked(ImageRef),
    Cancelled,
}

#[async_trait]
pub trait PhotoPicker: Send + Sync {
    async fn pick_image(&self) -> Result<PickResult, CapabilityError>;
}

#[async_trait]
pub trait ImageTransform: Send + Sync {
    /// Rotate clockwise by `degrees`, returning a new reference.
    async fn rotate(&self, image: &ImageRef, degrees: i32) -> Result<ImageRef, CapabilityError>;
}

/// The freehand canvas. Saving happens on the host side, which hands the
/// encoded image to [`crate::screens::drawing::DrawingScreen::save_drawing`].
pub trait DrawingSurface: Send + Sync {
    fn clear(&self) -> Result<(), CapabilityError>;
}

/// Everything the screens need from the host, bundled for [`crate::state::AppState`].
#[derive(Clone)]
pub struct Capabilities {
    pub camera: Arc<dyn Camera>,
    pub picker: Arc<dyn PhotoPicker>,
    pub transform: Arc<dyn ImageTransform>,
    pub surface: Arc<dyn DrawingSurface>,
}

impl std::fmt::Debug for Capabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Capabilities").finish_non_exhaustive()
    }
}
