//! AR tab: camera permission, live preview, capture and the rotate editor.
//!
//! Permission moves `NotDetermined -> Requesting -> Granted | Denied`.  Only
//! when granted and a back-facing device is bound does the preview replace
//! the placeholder; every other state shows the placeholder with a retry.

use std::sync::Arc;

use crown_shared::constants::{KEY_CAPTURED_PHOTO, ROTATION_DEGREES};
use crown_shared::{ImageRef, PermissionStatus};
use crown_store::{lock, SharedStore};
use tracing::{debug, info, warn};

use crate::capabilities::{Camera, CameraDevice, CameraPosition, ImageTransform};
use crate::error::{ClientError, Result};
use crate::lifetime::ScreenLifetime;

pub struct CameraScreen {
    store: SharedStore,
    camera: Arc<dyn Camera>,
    transform: Arc<dyn ImageTransform>,
    lifetime: ScreenLifetime,
    editing_enabled: bool,
    permission: PermissionStatus,
    device: Option<CameraDevice>,
    saved_photo: Option<ImageRef>,
    editing: Option<ImageRef>,
}

impl CameraScreen {
    pub fn mount(
        store: SharedStore,
        camera: Arc<dyn Camera>,
        transform: Arc<dyn ImageTransform>,
        lifetime: ScreenLifetime,
        editing_enabled: bool,
    ) -> Self {
        let mut screen = Self {
            store,
            camera,
            transform,
            lifetime,
            editing_enabled,
            permission: PermissionStatus::NotDetermined,
            device: None,
            saved_photo: None,
            editing: None,
        };
        screen.load();
        screen
    }

    pub fn lifetime(&self) -> &ScreenLifetime {
        &self.lifetime
    }

    /// Read the last captured photo, if any.
    pub fn load(&mut self) {
        match lock(&self.store).and_then(|s| s.get(KEY_CAPTURED_PHOTO)) {
            Ok(photo) => self.saved_photo = photo.map(ImageRef::new),
            Err(e) => warn!(error = %e, "failed to load captured photo"),
        }
    }

    pub fn permission(&self) -> PermissionStatus {
        self.permission
    }

    pub fn device(&self) -> Option<&CameraDevice> {
        self.device.as_ref()
    }

    pub fn saved_photo(&self) -> Option<&ImageRef> {
        self.saved_photo.as_ref()
    }

    pub fn editing(&self) -> Option<&ImageRef> {
        self.editing.as_ref()
    }

    /// True while the permission placeholder (with its retry action) is shown.
    pub fn shows_placeholder(&self) -> bool {
        self.permission != PermissionStatus::Granted || self.device.is_none()
    }

    /// Prompt for camera access and bind the back camera when granted. Also
    /// the placeholder's retry action.
    pub async fn request_permission(&mut self) -> PermissionStatus {
        let previous = self.permission;
        self.permission = PermissionStatus::Requesting;

        let camera = self.camera.clone();
        let Some(status) = self.lifetime.guard(camera.request_permission()).await else {
            self.permission = previous;
            return previous;
        };

        self.permission = match status {
            PermissionStatus::Requesting => PermissionStatus::NotDetermined,
            other => other,
        };
        info!(status = ?self.permission, "camera permission resolved");

        if self.permission == PermissionStatus::Granted {
            self.bind_back_camera().await;
        } else {
            self.device = None;
        }

        self.permission
    }

    async fn bind_back_camera(&mut self) {
        let camera = self.camera.clone();
        let bind = async move {
            let device = camera
                .devices()
                .await
                .into_iter()
                .find(|d| d.position == CameraPosition::Back)?;
            match camera.bind_preview(&device).await {
                Ok(()) => Some(device),
                Err(e) => {
                    warn!(error = %e, "failed to bind camera preview");
                    None
                }
            }
        };

        match self.lifetime.guard(bind).await {
            Some(Some(device)) => {
                debug!(device = %device.id, "back camera bound");
                self.device = Some(device);
            }
            Some(None) => {
                warn!("no back-facing camera bound");
                self.device = None;
            }
            None => {}
        }
    }

    /// Capture a still, persist it as the last captured photo and, when the
    /// editor is enabled, open it. On failure nothing changes.
    pub async fn capture_photo(&mut self) -> Result<Option<ImageRef>> {
        let device = match (&self.permission, &self.device) {
            (PermissionStatus::Granted, Some(device)) => device.clone(),
            _ => return Err(ClientError::CameraUnavailable),
        };

        let camera = self.camera.clone();
        let Some(result) = self.lifetime.guard(camera.take_photo(&device)).await else {
            debug!("capture discarded, screen gone");
            return Ok(None);
        };

        let photo = match result {
            Ok(photo) => photo,
            Err(e) => {
                warn!(error = %e, "error capturing photo");
                return Err(e.into());
            }
        };

        self.persist_photo(&photo)?;
        self.saved_photo = Some(photo.clone());
        if self.editing_enabled {
            self.editing = Some(photo.clone());
        }

        info!(photo = %photo, "photo captured");
        Ok(Some(photo))
    }

    /// Rotate the photo in the editor by 90 degrees, persist the result and
    /// close the editor. On failure the editor stays open and nothing is
    /// persisted.
    pub async fn rotate_photo(&mut self) -> Result<Option<ImageRef>> {
        let Some(source) = self.editing.clone() else {
            return Err(ClientError::NothingToEdit);
        };

        let transform = self.transform.clone();
        let Some(result) = self
            .lifetime
            .guard(transform.rotate(&source, ROTATION_DEGREES))
            .await
        else {
            debug!("rotation discarded, screen gone");
            return Ok(None);
        };

        let rotated = match result {
            Ok(rotated) => rotated,
            Err(e) => {
                warn!(error = %e, "error editing photo");
                return Err(e.into());
            }
        };

        self.persist_photo(&rotated)?;
        self.saved_photo = Some(rotated.clone());
        self.editing = None;

        info!(photo = %rotated, "photo rotated");
        Ok(Some(rotated))
    }

    pub fn close_editor(&mut self) {
        self.editing = None;
    }

    fn persist_photo(&self, photo: &ImageRef) -> Result<()> {
        lock(&self.store)
            .and_then(|mut s| s.set(KEY_CAPTURED_PHOTO, photo.as_str()))
            .map_err(|e| {
                warn!(error = %e, "failed to persist captured photo");
                ClientError::Store(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crown_shared::CapabilityError;
    use crown_store::{shared, MemoryStore};

    use super::*;
    use crate::testing::{FailingStore, MockCamera, MockTransform};

    fn mount_with(
        store: &SharedStore,
        camera: MockCamera,
        transform: MockTransform,
        editing: bool,
    ) -> CameraScreen {
        CameraScreen::mount(
            store.clone(),
            Arc::new(camera),
            Arc::new(transform),
            ScreenLifetime::new(),
            editing,
        )
    }

    fn stored_photo(store: &SharedStore) -> Option<String> {
        lock(store).unwrap().get(KEY_CAPTURED_PHOTO).unwrap()
    }

    #[tokio::test]
    async fn granted_binds_back_camera() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(&store, MockCamera::granted(), MockTransform::ok(), true);

        assert_eq!(screen.permission(), PermissionStatus::NotDetermined);
        assert!(screen.shows_placeholder());

        assert_eq!(screen.request_permission().await, PermissionStatus::Granted);
        assert_eq!(screen.device().unwrap().position, CameraPosition::Back);
        assert!(!screen.shows_placeholder());
    }

    #[tokio::test]
    async fn denied_keeps_placeholder_and_blocks_capture() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(&store, MockCamera::denied(), MockTransform::ok(), true);

        assert_eq!(screen.request_permission().await, PermissionStatus::Denied);
        assert!(screen.shows_placeholder());
        assert!(matches!(
            screen.capture_photo().await,
            Err(ClientError::CameraUnavailable)
        ));

        // retry is allowed and still denied
        assert_eq!(screen.request_permission().await, PermissionStatus::Denied);
    }

    #[tokio::test]
    async fn granted_without_back_camera_shows_placeholder() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(
            &store,
            MockCamera::granted().front_only(),
            MockTransform::ok(),
            true,
        );

        screen.request_permission().await;
        assert!(screen.device().is_none());
        assert!(screen.shows_placeholder());
    }

    #[tokio::test]
    async fn capture_persists_and_opens_editor() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(&store, MockCamera::granted(), MockTransform::ok(), true);
        screen.request_permission().await;

        let photo = screen.capture_photo().await.unwrap().unwrap();
        assert_eq!(screen.saved_photo(), Some(&photo));
        assert_eq!(screen.editing(), Some(&photo));
        assert_eq!(stored_photo(&store).as_deref(), Some(photo.as_str()));

        // a remount sees the last capture
        let again = mount_with(&store, MockCamera::granted(), MockTransform::ok(), true);
        assert_eq!(again.saved_photo(), Some(&photo));
    }

    #[tokio::test]
    async fn capture_without_editor_variant() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(&store, MockCamera::granted(), MockTransform::ok(), false);
        screen.request_permission().await;

        screen.capture_photo().await.unwrap();
        assert!(screen.editing().is_none());
        assert!(screen.saved_photo().is_some());
    }

    #[tokio::test]
    async fn capture_failure_changes_nothing() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(
            &store,
            MockCamera::granted().failing_capture(),
            MockTransform::ok(),
            true,
        );
        screen.request_permission().await;

        assert!(matches!(
            screen.capture_photo().await,
            Err(ClientError::Capability(CapabilityError::Capture(_)))
        ));
        assert!(screen.saved_photo().is_none());
        assert!(screen.editing().is_none());
        assert_eq!(stored_photo(&store), None);
    }

    #[tokio::test]
    async fn capture_with_broken_storage_keeps_state() {
        let store = shared(FailingStore);
        let mut screen = mount_with(&store, MockCamera::granted(), MockTransform::ok(), true);
        screen.request_permission().await;

        assert!(matches!(
            screen.capture_photo().await,
            Err(ClientError::Store(_))
        ));
        assert!(screen.saved_photo().is_none());
        assert!(screen.editing().is_none());
    }

    #[tokio::test]
    async fn rotate_persists_and_closes_editor() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(&store, MockCamera::granted(), MockTransform::ok(), true);
        screen.request_permission().await;
        let original = screen.capture_photo().await.unwrap().unwrap();

        let rotated = screen.rotate_photo().await.unwrap().unwrap();
        assert_ne!(rotated, original);
        assert_eq!(rotated.as_str(), format!("{}@rot90", original.as_str()));
        assert!(screen.editing().is_none());
        assert_eq!(screen.saved_photo(), Some(&rotated));
        assert_eq!(stored_photo(&store).as_deref(), Some(rotated.as_str()));
    }

    #[tokio::test]
    async fn rotate_failure_keeps_editor_open() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(&store, MockCamera::granted(), MockTransform::failing(), true);
        screen.request_permission().await;
        let original = screen.capture_photo().await.unwrap().unwrap();

        assert!(screen.rotate_photo().await.is_err());
        assert_eq!(screen.editing(), Some(&original));
        assert_eq!(stored_photo(&store).as_deref(), Some(original.as_str()));
    }

    #[tokio::test]
    async fn rotate_requires_open_editor() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(&store, MockCamera::granted(), MockTransform::ok(), true);
        assert!(matches!(
            screen.rotate_photo().await,
            Err(ClientError::NothingToEdit)
        ));

        screen.request_permission().await;
        screen.capture_photo().await.unwrap();
        screen.close_editor();
        assert!(screen.editing().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn capture_after_teardown_is_dropped() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(
            &store,
            MockCamera::granted().with_delay(Duration::from_secs(2)),
            MockTransform::ok(),
            true,
        );
        screen.request_permission().await;
        let lifetime = screen.lifetime().clone();

        let (shot, _) = tokio::join!(screen.capture_photo(), async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            lifetime.teardown();
        });

        assert_eq!(shot.unwrap(), None);
        assert!(screen.saved_photo().is_none());
        assert_eq!(stored_photo(&store), None);
    }

    #[tokio::test]
    async fn undecided_prompt_keeps_placeholder() {
        let store = shared(MemoryStore::new());
        for answer in [PermissionStatus::NotDetermined, PermissionStatus::Requesting] {
            let mut screen = mount_with(
                &store,
                MockCamera::with_permission(answer),
                MockTransform::ok(),
                true,
            );

            assert_eq!(
                screen.request_permission().await,
                PermissionStatus::NotDetermined
            );
            assert_eq!(screen.permission(), PermissionStatus::NotDetermined);
            assert!(screen.device().is_none());
            assert!(screen.shows_placeholder());
        }
    }

    #[tokio::test]
    async fn failed_preview_bind_keeps_placeholder() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(
            &store,
            MockCamera::granted().failing_bind(),
            MockTransform::ok(),
            true,
        );

        assert_eq!(screen.request_permission().await, PermissionStatus::Granted);
        assert!(screen.device().is_none());
        assert!(screen.shows_placeholder());
        assert!(matches!(
            screen.capture_photo().await,
            Err(ClientError::CameraUnavailable)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn teardown_during_prompt_restores_previous_status() {
        let store = shared(MemoryStore::new());
        let mut screen = mount_with(
            &store,
            MockCamera::granted().with_prompt_delay(Duration::from_secs(2)),
            MockTransform::ok(),
            true,
        );
        let lifetime = screen.lifetime().clone();

        let (status, _) = tokio::join!(screen.request_permission(), async move {
            tokio::time::sleep(Duration::from_millis(500)).await;
            lifetime.teardown();
        });

        assert_eq!(status, PermissionStatus::NotDetermined);
        assert_eq!(screen.permission(), PermissionStatus::NotDetermined);
        assert!(screen.device().is_none());
        assert!(screen.shows_placeholder());
    }
}
