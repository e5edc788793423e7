//! Application state: the store, the host capabilities and the shell.
//!
//! The host owns one [`AppState`] for the life of the process. Each call to
//! [`AppState::navigate`] mounts a fresh screen controller for the target
//! tab, which re-reads its keys from storage.

use crown_shared::Tab;
use crown_store::snapshot::{export_snapshot, import_snapshot, ImportStats, StoreSnapshot};
use crown_store::{lock, shared, Database, SharedStore, StoreError};
use tracing::info;

use crate::capabilities::Capabilities;
use crate::config::{AppConfig, ArVariant};
use crate::error::Result;
use crate::lifetime::ScreenLifetime;
use crate::screens::albums::AlbumsScreen;
use crate::screens::camera::CameraScreen;
use crate::screens::catalog::CatalogScreen;
use crate::screens::drawing::DrawingScreen;
use crate::screens::profile::ProfileScreen;
use crate::screens::quests::QuestsScreen;
use crate::shell::Shell;

/// A mounted screen controller.
pub enum Screen {
    Catalog(CatalogScreen),
    Drawing(DrawingScreen),
    Quiz(QuestsScreen),
    Camera(CameraScreen),
    Albums(AlbumsScreen),
    Profile(ProfileScreen),
}

impl Screen {
    pub fn lifetime(&self) -> &ScreenLifetime {
        match self {
            Screen::Catalog(s) => s.lifetime(),
            Screen::Drawing(s) => s.lifetime(),
            Screen::Quiz(s) => s.lifetime(),
            Screen::Camera(s) => s.lifetime(),
            Screen::Albums(s) => s.lifetime(),
            Screen::Profile(s) => s.lifetime(),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            Screen::Catalog(_) => Tab::Catalog,
            Screen::Drawing(_) => Tab::Drawing,
            Screen::Quiz(_) => Tab::Quiz,
            Screen::Camera(_) | Screen::Albums(_) => Tab::Ar,
            Screen::Profile(_) => Tab::Profile,
        }
    }
}

impl std::fmt::Debug for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Screen").field(&self.tab()).finish()
    }
}

pub struct AppState {
    pub config: AppConfig,
    store: SharedStore,
    capabilities: Capabilities,
    pub shell: Shell,
}

impl AppState {
    /// Open the store the configuration points at and start the intro.
    pub fn open(config: AppConfig, capabilities: Capabilities) -> Result<Self> {
        let db = if config.in_memory {
            Database::in_memory()?
        } else if let Some(dir) = &config.data_dir {
            Database::open_in_dir(dir)?
        } else {
            Database::new()?
        };

        info!(
            path = ?db.path(),
            in_memory = config.in_memory,
            "store opened"
        );

        Ok(Self::with_store(config, shared(db), capabilities))
    }

    pub fn with_store(config: AppConfig, store: SharedStore, capabilities: Capabilities) -> Self {
        let shell = Shell::new(config.skip_intro);
        Self {
            config,
            store,
            capabilities,
            shell,
        }
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Dump every stored entry as pretty-printed JSON.
    pub fn export_data(&self) -> Result<String> {
        let snapshot = export_snapshot(&*lock(&self.store)?)?;
        serde_json::to_string_pretty(&snapshot).map_err(|e| StoreError::from(e).into())
    }

    /// Write back a dump produced by [`export_data`](Self::export_data).
    /// Screens mounted afterwards see the imported values.
    pub fn import_data(&mut self, json: &str) -> Result<ImportStats> {
        let snapshot: StoreSnapshot = serde_json::from_str(json).map_err(StoreError::from)?;
        let stats = import_snapshot(&mut *lock(&self.store)?, &snapshot)?;
        info!(
            written = stats.entries_written,
            from = %snapshot.created_at,
            "data imported"
        );
        Ok(stats)
    }

    /// Switch tabs and mount the destination.
    pub fn navigate(&mut self, tab: Tab) -> Result<Screen> {
        self.shell.navigate(tab)?;
        Ok(self.mount(tab))
    }

    pub fn back(&mut self) -> Option<Screen> {
        let tab = self.shell.back()?;
        Some(self.mount(tab))
    }

    pub fn open_profile(&mut self) -> Result<Screen> {
        self.navigate(Tab::Profile)
    }

    /// Mount a fresh controller for `tab`, replacing the shell's current one.
    pub fn mount(&mut self, tab: Tab) -> Screen {
        let lifetime = ScreenLifetime::new();
        self.shell.attach(lifetime.clone());

        let store = self.store.clone();
        let caps = &self.capabilities;
        match tab {
            Tab::Catalog => Screen::Catalog(CatalogScreen::mount(store, lifetime)),
            Tab::Drawing => Screen::Drawing(DrawingScreen::mount(
                store,
                caps.surface.clone(),
                lifetime,
            )),
            Tab::Quiz => Screen::Quiz(QuestsScreen::mount(store, lifetime)),
            Tab::Ar => match self.config.ar_variant {
                ArVariant::Camera => Screen::Camera(CameraScreen::mount(
                    store,
                    caps.camera.clone(),
                    caps.transform.clone(),
                    lifetime,
                    self.config.camera_editing,
                )),
                ArVariant::Albums => Screen::Albums(AlbumsScreen::mount(
                    store,
                    caps.picker.clone(),
                    caps.camera.clone(),
                    lifetime,
                )),
            },
            Tab::Profile => Screen::Profile(ProfileScreen::mount(
                store,
                caps.picker.clone(),
                lifetime,
            )),
        }
    }
}
