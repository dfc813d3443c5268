use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    thread,
    time::{Duration, Instant},
};

use super::EguiController;
use crate::config::{AppConfig, CategoryConfig};
use crate::content::{Album, Collection, ContentError, ContentSource, ImageRef};
use crate::images::encode_test_png;

/// In-memory content with optional per-request delays and a call log.
#[derive(Default)]
pub(crate) struct FakeSource {
    pub(crate) collections: HashMap<String, Collection>,
    pub(crate) listings: HashMap<String, Vec<ImageRef>>,
    pub(crate) delays: HashMap<String, Duration>,
    pub(crate) broken_images: Vec<String>,
    pub(crate) calls: Mutex<Vec<String>>,
}

impl FakeSource {
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        if let Some(delay) = self.delays.get(&call) {
            thread::sleep(*delay);
        }
        self.calls.lock().unwrap().push(call);
    }
}

impl ContentSource for FakeSource {
    fn fetch_collection(&self, name: &str) -> Result<Collection, ContentError> {
        self.record(format!("collection:{name}"));
        self.collections
            .get(name)
            .cloned()
            .ok_or_else(|| ContentError::Status {
                url: format!("fake://collections/{name}"),
                code: 404,
            })
    }

    fn fetch_resource_images(&self, folder: &str) -> Result<Vec<ImageRef>, ContentError> {
        self.record(format!("listing:{folder}"));
        self.listings
            .get(folder)
            .cloned()
            .ok_or_else(|| ContentError::Status {
                url: format!("fake://list/{folder}"),
                code: 404,
            })
    }

    fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, ContentError> {
        self.record(format!("image:{url}"));
        if self.broken_images.iter().any(|broken| broken == url) {
            return Err(ContentError::Http {
                url: url.to_string(),
                message: "connection reset".into(),
            });
        }
        Ok(encode_test_png(8, 8))
    }
}

pub(crate) fn album(category: &str, slug: &str) -> Album {
    Album {
        slug: slug.into(),
        title: format!("{slug} title"),
        description: String::new(),
        thumbnail_url: Some(format!("fake://thumbs/{slug}.png")),
        folder: format!("{category}/{slug}"),
    }
}

pub(crate) fn collection(category: &str, slugs: &[&str]) -> Collection {
    Collection {
        name: category.into(),
        albums: slugs.iter().map(|slug| album(category, slug)).collect(),
    }
}

pub(crate) fn images(folder: &str, count: usize) -> Vec<ImageRef> {
    (1..=count)
        .map(|idx| ImageRef {
            name: format!("{idx:02}.jpg"),
            url: format!("fake://images/{folder}/{idx:02}.jpg"),
        })
        .collect()
}

/// Two categories with three albums each, every album holding three images.
pub(crate) fn sample_source() -> FakeSource {
    let mut source = FakeSource::default();
    for category in ["photography", "design"] {
        let slugs = ["one", "two", "three"];
        source
            .collections
            .insert(category.into(), collection(category, &slugs));
        for slug in slugs {
            let folder = format!("{category}/{slug}");
            source.listings.insert(folder.clone(), images(&folder, 3));
        }
    }
    source
}

pub(crate) fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.categories = vec![
        CategoryConfig::new("photography", "Photography"),
        CategoryConfig::new("design", "Design"),
    ];
    config.gallery.page_size = 2;
    config
}

pub(crate) fn controller_with(source: FakeSource) -> (EguiController, Arc<FakeSource>) {
    let source = Arc::new(source);
    let controller = EguiController::with_source(test_config(), source.clone());
    (controller, source)
}

/// Poll until no fetch or image load is pending.
pub(crate) fn settle(controller: &mut EguiController) {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        controller.poll_background_jobs();
        if !controller.has_pending_work() {
            return;
        }
        assert!(Instant::now() < deadline, "background work did not settle");
        thread::sleep(Duration::from_millis(5));
    }
}
