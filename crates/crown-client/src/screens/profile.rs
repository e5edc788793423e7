//! The user's profile. Unlike the other screens, save and clear report
//! storage failures to the caller.

use std::sync::Arc;

use crown_shared::constants::{
    KEY_PROFILE_BIO, KEY_PROFILE_CONTACT, KEY_PROFILE_IMAGE, KEY_PROFILE_NAME, PROFILE_KEYS,
};
use crown_shared::{ImageRef, ValidationError};
use crown_store::{lock, ProfileRecord, SharedStore};
use tracing::{debug, info, warn};

use crate::capabilities::{PhotoPicker, PickResult};
use crate::error::Result;
use crate::events::Notice;
use crate::lifetime::ScreenLifetime;

pub struct ProfileScreen {
    store: SharedStore,
    picker: Arc<dyn PhotoPicker>,
    lifetime: ScreenLifetime,
    profile: ProfileRecord,
}

impl ProfileScreen {
    pub fn mount(store: SharedStore, picker: Arc<dyn PhotoPicker>, lifetime: ScreenLifetime) -> Self {
        let mut screen = Self {
            store,
            picker,
            lifetime,
            profile: ProfileRecord::default(),
        };
        screen.load();
        screen
    }

    pub fn lifetime(&self) -> &ScreenLifetime {
        &self.lifetime
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    /// Read each field on its own; a missing or unreadable key leaves that
    /// field at its default.
    pub fn load(&mut self) {
        let read = |key: &str| -> Option<String> {
            match lock(&self.store).and_then(|s| s.get(key)) {
                Ok(value) => value,
                Err(e) => {
                    warn!(key, error = %e, "failed to load profile field");
                    None
                }
            }
        };

        let profile = ProfileRecord {
            name: read(KEY_PROFILE_NAME).unwrap_or_default(),
            bio: read(KEY_PROFILE_BIO).unwrap_or_default(),
            contact: read(KEY_PROFILE_CONTACT).unwrap_or_default(),
            avatar: read(KEY_PROFILE_IMAGE).map(ImageRef::new),
        };
        self.profile = profile;

        debug!(has_avatar = self.profile.avatar.is_some(), "profile loaded");
    }

    /// Persist `draft`. The avatar key is only written when the draft has one.
    pub fn save(&mut self, draft: ProfileRecord) -> Result<Notice> {
        if draft.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }

        {
            let mut store = lock(&self.store)?;
            store.set(KEY_PROFILE_NAME, &draft.name)?;
            store.set(KEY_PROFILE_BIO, &draft.bio)?;
            store.set(KEY_PROFILE_CONTACT, &draft.contact)?;
            if let Some(avatar) = &draft.avatar {
                store.set(KEY_PROFILE_IMAGE, avatar.as_str())?;
            }
        }

        info!(name = %draft.name, "profile saved");
        self.profile = draft;
        Ok(Notice::success("Profile updated successfully!"))
    }

    /// Remove all four keys and reset the fields.
    pub fn clear(&mut self) -> Result<Notice> {
        {
            let mut store = lock(&self.store)?;
            for key in PROFILE_KEYS {
                store.remove(key)?;
            }
        }

        self.profile = ProfileRecord::default();
        info!("profile cleared");
        Ok(Notice::success("Profile cleared"))
    }

    /// Pick a new avatar from the photo library. The choice is kept in memory
    /// until the next [`save`](Self::save).
    pub async fn pick_avatar(&mut self) -> Result<Option<ImageRef>> {
        let picker = self.picker.clone();
        let Some(result) = self.lifetime.guard(picker.pick_image()).await else {
            debug!("avatar pick discarded, screen gone");
            return Ok(None);
        };

        match result {
            Ok(PickResult::Picked(image)) => {
                debug!(avatar = %image, "avatar picked");
                self.profile.avatar = Some(image.clone());
                Ok(Some(image))
            }
            Ok(PickResult::Cancelled) => Ok(None),
            Err(e) => {
                warn!(error = %e, "failed to pick an image");
                Err(e.into())
            }
        }
    }
}
