use super::*;
use crate::page::FetchTarget;

/// How a navigation affects the back/forward history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMode {
    /// Add a new entry (links, address bar, page changes).
    Push,
    /// Overwrite the current entry (stepping through images, clamping).
    Replace,
    /// The history cursor already moved (back/forward).
    Traverse,
}

impl EguiController {
    /// Navigate to a location typed in the address bar or passed on the command line.
    pub fn navigate(&mut self, location: &str) {
        let route = self.parse(location.trim());
        self.navigate_to(route, HistoryMode::Push);
    }

    /// Show `route`. Going to the current route only resets the address bar.
    pub fn navigate_to(&mut self, route: Route, mode: HistoryMode) {
        if route == self.page.route() {
            self.sync_location();
            return;
        }
        tracing::debug!("Navigating to {} ({mode:?})", route.location());
        match mode {
            HistoryMode::Push => self.history.push(route.clone()),
            HistoryMode::Replace => self.history.replace(route.clone()),
            HistoryMode::Traverse => {}
        }
        if !self.page.retarget(&route) {
            self.page = Page::from_route(route);
        }
        self.clamp_position();
        self.sync_location();
        self.issue_fetches();
    }

    pub fn back(&mut self) {
        if let Some(route) = self.history.back() {
            self.navigate_to(route, HistoryMode::Traverse);
        }
    }

    pub fn forward(&mut self) {
        if let Some(route) = self.history.forward() {
            self.navigate_to(route, HistoryMode::Traverse);
        }
    }

    /// Open an album of the current category in the viewer.
    pub fn open_album(&mut self, slug: &str) {
        let Some(category) = self.page.route().category().map(str::to_string) else {
            return;
        };
        self.navigate_to(
            Route::FullSize {
                category,
                resource: slug.to_string(),
                image: 0,
            },
            HistoryMode::Push,
        );
    }

    /// Step to the next image; stays put on the last one.
    pub fn next_image(&mut self) {
        self.step_image(1);
    }

    /// Step to the previous image; stays put on the first one.
    pub fn prev_image(&mut self) {
        self.step_image(-1);
    }

    fn step_image(&mut self, delta: isize) {
        let Page::FullSize {
            category,
            resource,
            image,
            images,
            ..
        } = &self.page
        else {
            return;
        };
        let Some(count) = images.success().map(Vec::len) else {
            return;
        };
        let Some(next) = image.checked_add_signed(delta).filter(|next| *next < count) else {
            return;
        };
        let route = Route::FullSize {
            category: category.clone(),
            resource: resource.clone(),
            image: next,
        };
        self.navigate_to(route, HistoryMode::Replace);
    }

    /// Leave the viewer for the thumbnail page that lists the open album.
    pub fn close_viewer(&mut self) {
        let Page::FullSize {
            category, resource, ..
        } = &self.page
        else {
            return;
        };
        let page = self
            .collections
            .get(category)
            .and_then(|collection| {
                collection
                    .albums
                    .iter()
                    .position(|album| &album.slug == resource)
            })
            .map(|index| index / self.page_size() + 1)
            .unwrap_or(1);
        let route = Route::Thumbnails {
            category: category.clone(),
            page,
        };
        self.navigate_to(route, HistoryMode::Push);
    }

    pub fn next_page(&mut self) {
        self.step_page(1);
    }

    pub fn prev_page(&mut self) {
        self.step_page(-1);
    }

    fn step_page(&mut self, delta: isize) {
        let Some(pagination) = self.pagination() else {
            return;
        };
        let Page::Thumbnails { category, page, .. } = &self.page else {
            return;
        };
        let allowed = if delta > 0 {
            pagination.has_next(*page)
        } else {
            pagination.has_prev(*page)
        };
        let Some(next) = page.checked_add_signed(delta).filter(|_| allowed) else {
            return;
        };
        let route = Route::Thumbnails {
            category: category.clone(),
            page: next,
        };
        self.navigate_to(route, HistoryMode::Push);
    }

    /// Reissue whatever failed on the current page, including broken images.
    pub fn retry_current(&mut self) {
        let reset = self.page.reset_failures();
        let images = self.retry_failed_images();
        if reset {
            tracing::info!("Retrying {}", self.ui.address);
            self.issue_fetches();
        } else if images == 0 {
            self.refresh_status();
        }
    }

    /// Keep the page number and image index inside what was loaded.
    ///
    /// A corrected position replaces the current history entry.
    pub(super) fn clamp_position(&mut self) {
        let page_size = self.page_size();
        let changed = match &mut self.page {
            Page::Thumbnails {
                page, collection, ..
            } => match collection.success() {
                Some(collection) => {
                    let clamped = Pagination::new(collection.albums.len(), page_size).clamp(*page);
                    std::mem::replace(page, clamped) != clamped
                }
                None => false,
            },
            Page::FullSize { image, images, .. } => match images.success() {
                Some(list) => {
                    let clamped = (*image).min(list.len().saturating_sub(1));
                    std::mem::replace(image, clamped) != clamped
                }
                None => false,
            },
            _ => false,
        };
        if changed {
            self.history.replace(self.page.route());
            self.sync_location();
        }
    }

    /// Start the fetches the current page still needs.
    pub(super) fn issue_fetches(&mut self) {
        for target in self.page.pending_targets() {
            match target {
                FetchTarget::Collection { category } => self.request_collection(category),
                FetchTarget::Resource { category, resource } => {
                    match self.page.album_folder().map(str::to_string) {
                        Some(folder) => self.request_listing(category, resource, folder),
                        None => tracing::warn!("No folder known for {category}/{resource}"),
                    }
                }
            }
        }
        self.refresh_status();
    }

    fn request_collection(&mut self, category: String) {
        let target = FetchTarget::Collection {
            category: category.clone(),
        };
        if let Some(collection) = self.collections.get(&category).cloned() {
            tracing::debug!("Using cached collection for {category}");
            self.apply_collection(Ok(collection));
            return;
        }
        let Some(collection) = self
            .config
            .category(&category)
            .map(|config| config.collection_name().to_string())
        else {
            self.apply_collection(Err(format!("Unknown category {category}")));
            return;
        };
        self.page.mark_loading(&target);
        if !self.jobs.begin_collection_load(category, collection) {
            tracing::debug!("Collection fetch already running; waiting for it");
        }
    }

    fn request_listing(&mut self, category: String, resource: String, folder: String) {
        let target = FetchTarget::Resource {
            category: category.clone(),
            resource: resource.clone(),
        };
        self.page.mark_loading(&target);
        if !self.jobs.begin_listing_load(category, resource, folder) {
            tracing::debug!("Image listing already running; waiting for it");
        }
    }

    /// Merge a collection into the current page, chaining the image listing.
    pub(super) fn apply_collection(&mut self, result: Result<Collection, String>) {
        if let Some(folder) = self.page.apply_collection(result)
            && let Route::FullSize {
                category, resource, ..
            } = self.page.route()
        {
            self.request_listing(category, resource, folder);
        }
        self.clamp_position();
        self.sync_title();
    }
}
