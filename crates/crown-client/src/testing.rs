//! Test doubles for the store and the host capabilities.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use crown_shared::{CapabilityError, ImageRef, PermissionStatus};
use crown_store::{KeyValueStore, StoreError};

use crate::capabilities::{
    Camera, CameraDevice, CameraPosition, Capabilities, DrawingSurface, ImageTransform,
    PhotoPicker, PickResult,
};

/// A store whose every operation fails.
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> crown_store::Result<Option<String>> {
        Err(StoreError::Unavailable("get".into()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> crown_store::Result<()> {
        Err(StoreError::Unavailable("set".into()))
    }

    fn remove(&mut self, _key: &str) -> crown_store::Result<()> {
        Err(StoreError::Unavailable("remove".into()))
    }

    fn keys(&self) -> crown_store::Result<Vec<String>> {
        Err(StoreError::Unavailable("keys".into()))
    }
}

/// Counts successful clears.
#[derive(Default)]
pub struct RecordingSurface {
    clears: AtomicUsize,
    fail: bool,
}

impl RecordingSurface {
    pub fn failing() -> Self {
        Self {
            clears: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl DrawingSurface for RecordingSurface {
    fn clear(&self) -> Result<(), CapabilityError> {
        if self.fail {
            return Err(CapabilityError::Surface("canvas detached".into()));
        }
        self.clears.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Hands out queued results in order, then cancels.
pub struct MockPicker {
    results: Mutex<VecDeque<Result<PickResult, CapabilityError>>>,
    delay: Option<Duration>,
}

impl MockPicker {
    pub fn cancelling() -> Self {
        Self::with_results(Vec::new())
    }

    pub fn with_results(results: Vec<Result<PickResult, CapabilityError>>) -> Self {
        Self {
            results: Mutex::new(results.into()),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl PhotoPicker for MockPicker {
    async fn pick_image(&self) -> Result<PickResult, CapabilityError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(PickResult::Cancelled))
    }
}

pub struct MockCamera {
    permission: PermissionStatus,
    devices: Vec<CameraDevice>,
    fail_capture: bool,
    fail_bind: bool,
    delay: Option<Duration>,
    prompt_delay: Option<Duration>,
    shots: AtomicUsize,
}

impl MockCamera {
    /// A camera whose prompt always answers `permission`.
    pub fn with_permission(permission: PermissionStatus) -> Self {
        Self {
            permission,
            devices: vec![
                CameraDevice {
                    id: "front-0".into(),
                    position: CameraPosition::Front,
                },
                CameraDevice {
                    id: "back-0".into(),
                    position: CameraPosition::Back,
                },
            ],
            fail_capture: false,
            fail_bind: false,
            delay: None,
            prompt_delay: None,
            shots: AtomicUsize::new(0),
        }
    }

    pub fn granted() -> Self {
        Self::with_permission(PermissionStatus::Granted)
    }

    pub fn denied() -> Self {
        Self::with_permission(PermissionStatus::Denied)
    }

    pub fn front_only(mut self) -> Self {
        self.devices.retain(|d| d.position == CameraPosition::Front);
        self
    }

    pub fn failing_capture(mut self) -> Self {
        self.fail_capture = true;
        self
    }

    pub fn failing_bind(mut self) -> Self {
        self.fail_bind = true;
        self
    }

    /// Keep the permission prompt open for `delay`.
    pub fn with_prompt_delay(mut self, delay: Duration) -> Self {
        self.prompt_delay = Some(delay);
        self
    }

    /// Delay every capture.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

#[async_trait]
impl Camera for MockCamera {
    async fn request_permission(&self) -> PermissionStatus {
        if let Some(delay) = self.prompt_delay {
            tokio::time::sleep(delay).await;
        }
        self.permission
    }

    async fn devices(&self) -> Vec<CameraDevice> {
        self.devices.clone()
    }

    async fn bind_preview(&self, _device: &CameraDevice) -> Result<(), CapabilityError> {
        if self.fail_bind {
            return Err(CapabilityError::NoDevice);
        }
        Ok(())
    }

    async fn take_photo(&self, device: &CameraDevice) -> Result<ImageRef, CapabilityError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_capture {
            return Err(CapabilityError::Capture("shutter jammed".into()));
        }
        let n = self.shots.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(ImageRef::new(format!("file:///{}/photo-{n}.jpg", device.id)))
    }
}

pub struct MockTransform {
    fail: bool,
}

impl MockTransform {
    pub fn ok() -> Self {
        Self { fail: false }
    }

    pub fn failing() -> Self {
        Self { fail: true }
    }
}

#[async_trait]
impl ImageTransform for MockTransform {
    async fn rotate(&self, image: &ImageRef, degrees: i32) -> Result<ImageRef, CapabilityError> {
        if self.fail {
            return Err(CapabilityError::Transform("out of memory".into()));
        }
        Ok(ImageRef::new(format!("{}@rot{degrees}", image.as_str())))
    }
}

pub fn mock_capabilities() -> Capabilities {
    Capabilities {
        camera: Arc::new(MockCamera::granted()),
        picker: Arc::new(MockPicker::cancelling()),
        transform: Arc::new(MockTransform::ok()),
        surface: Arc::new(RecordingSurface::default()),
    }
}
