//! Art catalog: seeded artworks plus user additions, favorites, year sort,
//! title search and the add-artwork form.

use crown_shared::constants::{DEFAULT_ARTWORK_STYLE, KEY_FAVORITES, KEY_USER_ARTWORKS};
use crown_shared::{ArtworkId, ImageRef, SortDirection, ValidationError};
use crown_store::{Artwork, SharedStore};
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::lifetime::ScreenLifetime;
use crate::screens::{read_or_default, write_best_effort};
use crate::seed::seed_artworks;

/// Raw text from the add-artwork form.
#[derive(Debug, Clone, Default)]
pub struct ArtworkForm {
    pub title: String,
    pub artist: String,
    pub year: String,
    pub description: String,
    pub image: String,
    /// Optional; blank means "Unknown".
    pub style: String,
}

impl ArtworkForm {
    fn validate(&self) -> std::result::Result<i32, ValidationError> {
        let required = [
            ("title", &self.title),
            ("artist", &self.artist),
            ("year", &self.year),
            ("description", &self.description),
            ("image", &self.image),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::MissingField(field));
            }
        }

        self.year
            .trim()
            .parse::<i32>()
            .map_err(|_| ValidationError::InvalidYear(self.year.clone()))
    }
}

pub struct CatalogScreen {
    store: SharedStore,
    lifetime: ScreenLifetime,
    /// User additions, in the order they were added.
    user_artworks: Vec<Artwork>,
    /// The working list: seed + additions, in the last applied sort order.
    sorted: Vec<Artwork>,
    favorites: Vec<ArtworkId>,
    /// Direction the next `sort_by_year` call applies.
    next_direction: SortDirection,
    /// Direction currently applied to `sorted`, if any sort happened.
    applied: Option<SortDirection>,
    query: String,
    detail: Option<ArtworkId>,
    add_form_open: bool,
}

impl CatalogScreen {
    /// Mount the screen and run [`CatalogScreen::load_catalog`].
    pub fn mount(store: SharedStore, lifetime: ScreenLifetime) -> Self {
        let mut screen = Self {
            store,
            lifetime,
            user_artworks: Vec::new(),
            sorted: Vec::new(),
            favorites: Vec::new(),
            next_direction: SortDirection::Ascending,
            applied: None,
            query: String::new(),
            detail: None,
            add_form_open: false,
        };
        screen.load_catalog();
        screen
    }

    /// Seed list followed by persisted user additions, plus the favorite set.
    pub fn load_catalog(&mut self) {
        self.user_artworks = read_or_default(&self.store, KEY_USER_ARTWORKS);
        self.favorites = read_or_default(&self.store, KEY_FAVORITES);

        let mut all = seed_artworks();
        all.extend(self.user_artworks.iter().cloned());
        self.sorted = all;
        self.applied = None;
        self.next_direction = SortDirection::Ascending;

        info!(
            artworks = self.sorted.len(),
            favorites = self.favorites.len(),
            "catalog loaded"
        );
    }

    pub fn lifetime(&self) -> &ScreenLifetime {
        &self.lifetime
    }

    /// The working list in its current order, unfiltered.
    pub fn artworks(&self) -> &[Artwork] {
        &self.sorted
    }

    pub fn get(&self, id: &ArtworkId) -> Option<&Artwork> {
        self.sorted.iter().find(|a| &a.id == id)
    }

    // -- Favorites -----------------------------------------------------------

    pub fn favorites(&self) -> &[ArtworkId] {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &ArtworkId) -> bool {
        self.favorites.contains(id)
    }

    /// Flip membership of `id` and persist the full set. Returns whether `id`
    /// is now a favorite.
    pub fn toggle_favorite(&mut self, id: &ArtworkId) -> bool {
        let now_favorite = match self.favorites.iter().position(|f| f == id) {
            Some(idx) => {
                self.favorites.remove(idx);
                false
            }
            None => {
                self.favorites.push(id.clone());
                true
            }
        };

        write_best_effort(&self.store, KEY_FAVORITES, &self.favorites);
        info!(artwork = %id, favorite = now_favorite, "favorite toggled");

        now_favorite
    }

    // -- Sort & search -------------------------------------------------------

    pub fn next_sort_direction(&self) -> SortDirection {
        self.next_direction
    }

    /// Sort by year in the pending direction, then flip it for the next call.
    pub fn sort_by_year(&mut self) -> SortDirection {
        let direction = self.next_direction;
        self.sort_by_year_in(direction);
        self.next_direction = direction.toggled();
        direction
    }

    /// Stable sort by year; ties keep their relative order.
    pub fn sort_by_year_in(&mut self, direction: SortDirection) {
        self.sorted
            .sort_by(|a, b| direction.apply(a.year.cmp(&b.year)));
        self.applied = Some(direction);
        debug!(?direction, "catalog sorted by year");
    }

    /// Set the search query and return the matching artworks.
    pub fn filter_by_title(&mut self, query: &str) -> Vec<&Artwork> {
        self.query = query.to_string();
        self.visible()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Working list filtered by the current query, case-insensitively.
    pub fn visible(&self) -> Vec<&Artwork> {
        let needle = self.query.to_lowercase();
        self.sorted
            .iter()
            .filter(|a| a.title.to_lowercase().contains(&needle))
            .collect()
    }

    // -- Add artwork ---------------------------------------------------------

    pub fn open_add_form(&mut self) {
        self.add_form_open = true;
    }

    pub fn close_add_form(&mut self) {
        self.add_form_open = false;
    }

    pub fn is_add_form_open(&self) -> bool {
        self.add_form_open
    }

    /// Validate `form` and append a new artwork. On a validation error nothing
    /// changes and the form stays open.
    pub fn add_artwork(&mut self, form: &ArtworkForm) -> Result<Artwork> {
        let year = form.validate()?;

        let style = match form.style.trim() {
            "" => DEFAULT_ARTWORK_STYLE.to_string(),
            s => s.to_string(),
        };

        let artwork = Artwork {
            id: self.fresh_id(),
            title: form.title.trim().to_string(),
            artist: form.artist.trim().to_string(),
            year,
            description: form.description.trim().to_string(),
            image: ImageRef::new(form.image.trim()),
            style: Some(style),
        };

        self.user_artworks.push(artwork.clone());
        self.sorted.push(artwork.clone());
        if let Some(direction) = self.applied {
            self.sort_by_year_in(direction);
        }

        write_best_effort(&self.store, KEY_USER_ARTWORKS, &self.user_artworks);
        self.add_form_open = false;

        info!(id = %artwork.id, title = %artwork.title, "artwork added");

        Ok(artwork)
    }

    /// Millisecond timestamp, bumped past any id already in the list.
    fn fresh_id(&self) -> ArtworkId {
        let mut candidate = chrono::Utc::now().timestamp_millis();
        loop {
            let id = ArtworkId(candidate.to_string());
            if self.get(&id).is_none() {
                return id;
            }
            candidate += 1;
        }
    }

    // -- Detail --------------------------------------------------------------

    pub fn open_detail(&mut self, id: &ArtworkId) -> Result<&Artwork> {
        if self.get(id).is_none() {
            return Err(ClientError::ArtworkNotFound(id.clone()));
        }
        self.detail = Some(id.clone());
        debug!(artwork = %id, "detail opened");
        self.detail().ok_or_else(|| ClientError::ArtworkNotFound(id.clone()))
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    pub fn detail(&self) -> Option<&Artwork> {
        self.detail.as_ref().and_then(|id| self.get(id))
    }
}
