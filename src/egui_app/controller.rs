//! Navigation state, background fetches and the status line.
//!
//! The controller owns the current [`Page`] and is the only place that
//! mutates it. Fetches run on background threads; their results come back
//! through [`jobs::JobMessage`] and are merged in
//! [`EguiController::poll_background_jobs`] only when they still belong to
//! the page on screen.

mod background_jobs;
mod history;
mod images;
mod jobs;
mod navigation;
#[cfg(test)]
mod test_support;

use std::{collections::HashMap, sync::Arc};

use crate::config::{self, AppConfig, ConfigError};
use crate::content::{Collection, ContentClient, ContentSource};
use crate::egui_app::state::UiState;
use crate::egui_app::ui::style::StatusTone;
use crate::images::ImageCache;
use crate::page::Page;
use crate::pagination::Pagination;
use crate::remote::RemoteData;
use crate::route::Route;

pub use history::NavigationHistory;
pub use images::ImageView;
pub use navigation::HistoryMode;

use jobs::ControllerJobs;

/// Worker threads downloading and decoding images.
const IMAGE_WORKERS: usize = 4;

/// Maintains app state and bridges content fetching to the egui UI.
pub struct EguiController {
    pub ui: UiState,
    config: AppConfig,
    page: Page,
    history: NavigationHistory,
    /// Successfully fetched collections keyed by category slug.
    collections: HashMap<String, Collection>,
    images: ImageCache,
    jobs: ControllerJobs,
}

impl EguiController {
    /// Controller backed by the HTTP content client described in `config`.
    pub fn new(config: AppConfig) -> Self {
        let source = Arc::new(ContentClient::new(config.content.clone()));
        Self::with_source(config, source)
    }

    /// Controller backed by an arbitrary content source.
    pub fn with_source(config: AppConfig, source: Arc<dyn ContentSource>) -> Self {
        let config = config.normalized();
        let capacity = image_cache_capacity(&config);
        let jobs = ControllerJobs::new(source, config.gallery.thumbnail_px, IMAGE_WORKERS);
        Self {
            ui: UiState::default(),
            config,
            page: Page::Home,
            history: NavigationHistory::new(Route::Home),
            collections: HashMap::new(),
            images: ImageCache::new(capacity),
            jobs,
        }
    }

    /// Show the first page: `initial`, else the last saved location, else home.
    pub fn start(&mut self, initial: Option<&str>) {
        let location = initial
            .map(str::to_string)
            .or_else(|| self.config.last_location.clone())
            .unwrap_or_else(|| "/".to_string());
        let route = self.parse(&location);
        tracing::info!("Starting at {}", route.location());
        self.history = NavigationHistory::new(route.clone());
        self.page = Page::from_route(route);
        self.sync_location();
        self.issue_fetches();
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Title of a category, falling back to its slug.
    pub fn category_title<'a>(&'a self, slug: &'a str) -> &'a str {
        self.config
            .category(slug)
            .map(|category| category.title.as_str())
            .unwrap_or(slug)
    }

    /// Paging of the current thumbnail grid once its collection has loaded.
    pub fn pagination(&self) -> Option<Pagination> {
        match &self.page {
            Page::Thumbnails { collection, .. } => collection
                .success()
                .map(|collection| Pagination::new(collection.albums.len(), self.page_size())),
            _ => None,
        }
    }

    /// True while any fetch or image load is still running.
    pub fn has_pending_work(&self) -> bool {
        self.page.is_loading() || self.jobs.has_in_flight() || self.images.loading_count() > 0
    }

    /// Remember the current location so the next launch resumes there.
    ///
    /// Only `last_location` is written back; the rest of the file stays as
    /// the user wrote it. Not-found locations are never recorded.
    pub fn persist_location(&mut self) -> Result<(), ConfigError> {
        let route = self.page.route();
        if matches!(route, Route::NotFound { .. }) {
            return Ok(());
        }
        let location = route.location();
        config::save_last_location(&location)?;
        self.config.last_location = Some(location);
        Ok(())
    }

    /// Open an outside link (contact links, resume download) in the OS browser.
    pub fn open_external(&mut self, url: &str) {
        match open::that(url) {
            Ok(()) => tracing::info!("Opened {url}"),
            Err(err) => {
                tracing::warn!("Failed to open {url}: {err}");
                self.set_status(format!("Could not open {url}: {err}"), StatusTone::Error);
            }
        }
    }

    pub(crate) fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        let text = text.into();
        if self.ui.status.text == text && self.ui.status.tone == tone {
            return;
        }
        self.ui.status.set(text, tone);
    }

    fn page_size(&self) -> usize {
        self.config.gallery.page_size
    }

    fn parse(&self, location: &str) -> Route {
        Route::parse(location, &self.config.category_slugs())
    }

    /// Mirror the current route into the address bar and window title.
    ///
    /// Route changes only; finished fetches go through [`Self::sync_title`].
    fn sync_location(&mut self) {
        self.ui.address = self.page.route().location();
        self.sync_title();
    }

    fn sync_title(&mut self) {
        let route = self.page.route();
        self.ui.title = match &route {
            Route::Thumbnails { category, .. } => self.category_title(category).to_string(),
            Route::FullSize { .. } => match &self.page {
                Page::FullSize { album, .. } => album
                    .success()
                    .map(|album| album.title.clone())
                    .unwrap_or_else(|| route.title()),
                _ => route.title(),
            },
            _ => route.title(),
        };
    }

    /// Derive the status line from the current page state.
    fn refresh_status(&mut self) {
        let (text, tone) = match &self.page {
            page if page.is_loading() => (
                format!("Loading {}", self.ui.title),
                StatusTone::Busy,
            ),
            Page::Thumbnails { collection, .. } => match collection.as_ref() {
                RemoteData::Success(collection) => (
                    format!("{} albums in {}", collection.albums.len(), self.ui.title),
                    StatusTone::Info,
                ),
                RemoteData::Failure(err) => {
                    (format!("Failed to load {}: {err}", self.ui.title), StatusTone::Error)
                }
                _ => ("Ready".to_string(), StatusTone::Idle),
            },
            Page::FullSize {
                album,
                images,
                image,
                ..
            } => match (album.failure(), images.as_ref()) {
                (Some(err), _) => (format!("Album unavailable: {err}"), StatusTone::Error),
                (None, RemoteData::Failure(err)) => {
                    (format!("Image listing failed: {err}"), StatusTone::Error)
                }
                (None, RemoteData::Success(list)) if list.is_empty() => {
                    ("This album has no images".to_string(), StatusTone::Warning)
                }
                (None, RemoteData::Success(list)) => (
                    format!("Image {} of {}", image + 1, list.len()),
                    StatusTone::Info,
                ),
                _ => ("Ready".to_string(), StatusTone::Idle),
            },
            Page::NotFound { location } => {
                (format!("Nothing at {location}"), StatusTone::Warning)
            }
            _ => ("Ready".to_string(), StatusTone::Idle),
        };
        self.set_status(text, tone);
    }
}

/// Room for two pages of thumbnails plus the images around the viewer.
fn image_cache_capacity(config: &AppConfig) -> usize {
    config
        .gallery
        .image_cache_entries
        .max(config.gallery.page_size * 2 + 8)
}
