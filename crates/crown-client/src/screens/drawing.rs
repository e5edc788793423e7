//! Freehand drawing gallery.

use std::sync::Arc;

use crown_shared::constants::{GALLERY_COLUMNS, KEY_SAVED_DRAWINGS};
use crown_store::SharedStore;
use tracing::{debug, info, warn};

use crate::capabilities::DrawingSurface;
use crate::lifetime::ScreenLifetime;
use crate::screens::{read_or_default, write_best_effort};

pub struct DrawingScreen {
    store: SharedStore,
    surface: Arc<dyn DrawingSurface>,
    lifetime: ScreenLifetime,
    gallery: Vec<String>,
    gallery_open: bool,
}

impl DrawingScreen {
    pub fn mount(
        store: SharedStore,
        surface: Arc<dyn DrawingSurface>,
        lifetime: ScreenLifetime,
    ) -> Self {
        let mut screen = Self {
            store,
            surface,
            lifetime,
            gallery: Vec::new(),
            gallery_open: false,
        };
        screen.load_gallery();
        screen
    }

    pub fn lifetime(&self) -> &ScreenLifetime {
        &self.lifetime
    }

    pub fn load_gallery(&mut self) {
        self.gallery = read_or_default(&self.store, KEY_SAVED_DRAWINGS);
        debug!(count = self.gallery.len(), "drawing gallery loaded");
    }

    /// Encoded images, oldest first.
    pub fn drawings(&self) -> &[String] {
        &self.gallery
    }

    /// Append the canvas output, persist the whole gallery, then blank the
    /// canvas. Every call appends, even for an image already saved.
    pub fn save_drawing(&mut self, encoded: impl Into<String>) {
        self.gallery.push(encoded.into());
        write_best_effort(&self.store, KEY_SAVED_DRAWINGS, &self.gallery);
        self.clear_surface();

        info!(count = self.gallery.len(), "drawing saved");
    }

    pub fn open_gallery(&mut self) {
        self.gallery_open = true;
        self.clear_surface();
    }

    pub fn close_gallery(&mut self) {
        self.gallery_open = false;
    }

    pub fn is_gallery_open(&self) -> bool {
        self.gallery_open
    }

    /// A canvas that fails to clear keeps its strokes; the gallery is
    /// unaffected.
    fn clear_surface(&self) {
        if let Err(e) = self.surface.clear() {
            warn!(error = %e, "failed to clear drawing surface");
        }
    }

    /// The gallery laid out as rows of the fixed grid width; the last row may
    /// be short.
    pub fn gallery_rows(&self) -> Vec<&[String]> {
        self.gallery.chunks(GALLERY_COLUMNS).collect()
    }
}
