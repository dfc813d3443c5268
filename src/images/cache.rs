use std::collections::{HashMap, VecDeque};

use egui::{ColorImage, TextureHandle, TextureOptions};

use crate::remote::RemoteData;

/// A decoded image waiting for, or already uploaded to, the GPU.
pub struct LoadedImage {
    size: [usize; 2],
    pending: Option<ColorImage>,
    texture: Option<TextureHandle>,
}

impl LoadedImage {
    fn new(image: ColorImage) -> Self {
        Self {
            size: image.size,
            pending: Some(image),
            texture: None,
        }
    }

    /// Pixel size of the decoded image.
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    /// Upload on first use; the CPU copy is dropped afterwards.
    pub fn texture(&mut self, ctx: &egui::Context, name: &str) -> Option<TextureHandle> {
        if let Some(image) = self.pending.take() {
            self.texture = Some(ctx.load_texture(name, image, TextureOptions::LINEAR));
        }
        self.texture.clone()
    }
}

/// Images keyed by URL, bounded to `capacity` entries with oldest-first eviction.
pub struct ImageCache {
    slots: HashMap<String, RemoteData<LoadedImage>>,
    order: VecDeque<String>,
    capacity: usize,
}

impl ImageCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: HashMap::new(),
            order: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.slots.len()
    }

    /// Mark `url` as loading; returns `false` when it is already cached or in flight.
    pub fn request(&mut self, url: &str) -> bool {
        if self.slots.contains_key(url) {
            return false;
        }
        self.slots.insert(url.to_string(), RemoteData::Loading);
        self.order.push_back(url.to_string());
        self.evict_overflow();
        true
    }

    /// Turn a failed entry back into a pending request.
    pub fn retry(&mut self, url: &str) -> bool {
        match self.slots.get_mut(url) {
            Some(slot @ RemoteData::Failure(_)) => {
                *slot = RemoteData::Loading;
                true
            }
            _ => false,
        }
    }

    /// Store a finished load. Results for evicted URLs are dropped.
    pub fn finish(&mut self, url: &str, result: Result<ColorImage, String>) -> bool {
        let Some(slot) = self.slots.get_mut(url) else {
            return false;
        };
        *slot = RemoteData::from_result(result.map(LoadedImage::new));
        true
    }

    pub fn get(&self, url: &str) -> Option<&RemoteData<LoadedImage>> {
        self.slots.get(url)
    }

    pub fn get_mut(&mut self, url: &str) -> Option<&mut RemoteData<LoadedImage>> {
        self.slots.get_mut(url)
    }

    /// Number of requests still in flight.
    pub fn loading_count(&self) -> usize {
        self.slots.values().filter(|slot| slot.is_loading()).count()
    }

    fn evict_overflow(&mut self) {
        while self.slots.len() > self.capacity {
            let Some(oldest) = self.order.pop_front() else {
                break;
            };
            self.slots.remove(&oldest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ColorImage {
        ColorImage::from_rgba_unmultiplied([1, 1], &[255, 255, 255, 255])
    }

    #[test]
    fn requests_each_url_once() {
        let mut cache = ImageCache::new(4);
        assert!(cache.request("a"));
        assert!(!cache.request("a"));
        assert!(cache.get("a").unwrap().is_loading());
        assert_eq!(cache.loading_count(), 1);
    }

    #[test]
    fn finish_stores_success_and_failure() {
        let mut cache = ImageCache::new(4);
        cache.request("a");
        cache.request("b");
        assert!(cache.finish("a", Ok(pixel())));
        assert!(cache.finish("b", Err("boom".into())));
        assert_eq!(cache.get("a").unwrap().success().unwrap().size(), [1, 1]);
        assert_eq!(cache.get("b").unwrap().failure().unwrap(), "boom");
        assert!(!cache.finish("unknown", Ok(pixel())));
    }

    #[test]
    fn retry_only_resets_failures() {
        let mut cache = ImageCache::new(4);
        cache.request("a");
        assert!(!cache.retry("a"));
        cache.finish("a", Err("boom".into()));
        assert!(cache.retry("a"));
        assert!(cache.get("a").unwrap().is_loading());
    }

    #[test]
    fn evicts_oldest_beyond_capacity() {
        let mut cache = ImageCache::new(2);
        cache.request("a");
        cache.request("b");
        cache.request("c");
        assert_eq!(cache.len(), 2);
        assert!(cache.get("a").is_none());
        assert!(!cache.finish("a", Ok(pixel())));
        assert!(cache.request("a"));
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn texture_upload_happens_once() {
        let ctx = egui::Context::default();
        let mut cache = ImageCache::new(2);
        cache.request("a");
        cache.finish("a", Ok(pixel()));
        let loaded = cache.get_mut("a").unwrap();
        let RemoteData::Success(image) = loaded else {
            panic!("expected loaded image");
        };
        let first = image.texture(&ctx, "a").unwrap();
        let second = image.texture(&ctx, "a").unwrap();
        assert_eq!(first.id(), second.id());
    }
}
