//! Photo albums filled from the photo library or the camera.

use std::sync::Arc;

use crown_shared::constants::KEY_ALBUMS;
use crown_shared::{CapabilityError, ImageRef, PermissionStatus, ValidationError};
use crown_store::{Album, SharedStore};
use tracing::{debug, info, warn};

use crate::capabilities::{Camera, CameraPosition, PhotoPicker, PickResult};
use crate::error::{ClientError, Result};
use crate::lifetime::ScreenLifetime;
use crate::screens::{read_or_default, write_best_effort};

pub struct AlbumsScreen {
    store: SharedStore,
    picker: Arc<dyn PhotoPicker>,
    camera: Arc<dyn Camera>,
    lifetime: ScreenLifetime,
    albums: Vec<Album>,
    selected: Option<String>,
    create_modal_open: bool,
}

impl AlbumsScreen {
    pub fn mount(
        store: SharedStore,
        picker: Arc<dyn PhotoPicker>,
        camera: Arc<dyn Camera>,
        lifetime: ScreenLifetime,
    ) -> Self {
        let mut screen = Self {
            store,
            picker,
            camera,
            lifetime,
            albums: Vec::new(),
            selected: None,
            create_modal_open: false,
        };
        screen.load_albums();
        screen
    }

    pub fn lifetime(&self) -> &ScreenLifetime {
        &self.lifetime
    }

    pub fn load_albums(&mut self) {
        self.albums = read_or_default(&self.store, KEY_ALBUMS);
        debug!(count = self.albums.len(), "albums loaded");
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn album(&self, name: &str) -> Option<&Album> {
        self.albums.iter().find(|a| a.name == name)
    }

    // -- Create ----------------------------------------------------------------

    pub fn open_create_modal(&mut self) {
        self.create_modal_open = true;
    }

    pub fn close_create_modal(&mut self) {
        self.create_modal_open = false;
    }

    pub fn is_create_modal_open(&self) -> bool {
        self.create_modal_open
    }

    /// Append an empty album. The name is trimmed; blank or already-used
    /// names are rejected and leave the modal open.
    pub fn create_album(&mut self, name: &str) -> Result<&Album> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyAlbumName.into());
        }
        if self.album(name).is_some() {
            return Err(ValidationError::DuplicateAlbum(name.to_string()).into());
        }

        self.albums.push(Album::new(name));
        self.persist();
        self.create_modal_open = false;

        info!(album = name, "album created");

        let idx = self.albums.len() - 1;
        Ok(&self.albums[idx])
    }

    // -- Photos ----------------------------------------------------------------

    /// Append `image` to the named album and persist the album list.
    pub fn add_photo(&mut self, album_name: &str, image: ImageRef) -> Result<()> {
        let album = self
            .albums
            .iter_mut()
            .find(|a| a.name == album_name)
            .ok_or_else(|| ClientError::AlbumNotFound(album_name.to_string()))?;

        album.photos.push(image);
        let count = album.photos.len();
        self.persist();

        info!(album = album_name, photos = count, "photo added");
        Ok(())
    }

    /// Pick from the system library. `Ok(None)` when the user cancels or the
    /// screen was left before the picker returned.
    pub async fn add_photo_from_library(&mut self, album_name: &str) -> Result<Option<ImageRef>> {
        if self.album(album_name).is_none() {
            return Err(ClientError::AlbumNotFound(album_name.to_string()));
        }

        let picker = self.picker.clone();
        let Some(result) = self.lifetime.guard(picker.pick_image()).await else {
            debug!(album = album_name, "picker result discarded, screen gone");
            return Ok(None);
        };

        match result {
            Ok(PickResult::Picked(image)) => {
                self.add_photo(album_name, image.clone())?;
                Ok(Some(image))
            }
            Ok(PickResult::Cancelled) => {
                debug!("user cancelled image picker");
                Ok(None)
            }
            Err(e) => {
                warn!(error = %e, "image picker failed");
                Err(e.into())
            }
        }
    }

    /// Capture with the back camera straight into the album.
    pub async fn add_photo_from_camera(&mut self, album_name: &str) -> Result<Option<ImageRef>> {
        if self.album(album_name).is_none() {
            return Err(ClientError::AlbumNotFound(album_name.to_string()));
        }

        let camera = self.camera.clone();
        let capture = async move {
            if camera.request_permission().await != PermissionStatus::Granted {
                return Err(CapabilityError::PermissionDenied);
            }
            let device = camera
                .devices()
                .await
                .into_iter()
                .find(|d| d.position == CameraPosition::Back)
                .ok_or(CapabilityError::NoDevice)?;
            camera.take_photo(&device).await
        };

        let Some(result) = self.lifetime.guard(capture).await else {
            debug!(album = album_name, "camera result discarded, screen gone");
            return Ok(None);
        };

        match result {
            Ok(image) => {
                self.add_photo(album_name, image.clone())?;
                Ok(Some(image))
            }
            Err(e) => {
                warn!(error = %e, "album capture failed");
                Err(e.into())
            }
        }
    }

    // -- Navigation ------------------------------------------------------------

    pub fn select_album(&mut self, name: &str) -> Result<&Album> {
        if self.album(name).is_none() {
            return Err(ClientError::AlbumNotFound(name.to_string()));
        }
        self.selected = Some(name.to_string());
        self.selected_album()
            .ok_or_else(|| ClientError::AlbumNotFound(name.to_string()))
    }

    pub fn deselect_album(&mut self) {
        self.selected = None;
    }

    pub fn selected_album(&self) -> Option<&Album> {
        self.selected.as_deref().and_then(|name| self.album(name))
    }

    fn persist(&self) {
        write_best_effort(&self.store, KEY_ALBUMS, &self.albums);
    }
}
