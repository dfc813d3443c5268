use super::*;
use crate::images::{ImageJob, ImageKind};
use egui::TextureHandle;

/// What the renderer can show for one image URL right now.
#[derive(Clone)]
pub enum ImageView {
    Loading,
    Ready(TextureHandle, [usize; 2]),
    Failed(String),
}

impl EguiController {
    /// Look up an image, queueing its download on first use.
    pub fn image_view(&mut self, ctx: &egui::Context, url: &str, kind: ImageKind) -> ImageView {
        if self.request_image(url, kind) {
            return ImageView::Loading;
        }
        match self.images.get_mut(url) {
            Some(RemoteData::Success(image)) => {
                let size = image.size();
                match image.texture(ctx, url) {
                    Some(texture) => ImageView::Ready(texture, size),
                    None => ImageView::Loading,
                }
            }
            Some(RemoteData::Failure(err)) => ImageView::Failed(err.clone()),
            _ => ImageView::Loading,
        }
    }

    /// Queue a download without rendering it, e.g. the next image in the viewer.
    pub fn prefetch_image(&mut self, url: &str, kind: ImageKind) {
        self.request_image(url, kind);
    }

    /// Full-size image URL at `index` of the open album.
    pub fn image_url(&self, index: usize) -> Option<&str> {
        match &self.page {
            Page::FullSize { images, .. } => images
                .success()
                .and_then(|list| list.get(index))
                .map(|image| image.url.as_str()),
            _ => None,
        }
    }

    /// Returns `true` when a new download was queued.
    fn request_image(&mut self, url: &str, kind: ImageKind) -> bool {
        if !self.images.request(url) {
            return false;
        }
        self.dispatch_image(url, kind);
        true
    }

    fn dispatch_image(&mut self, url: &str, kind: ImageKind) {
        let job = ImageJob {
            url: url.to_string(),
            kind,
        };
        if let Err(err) = self.jobs.send_image_job(job) {
            tracing::error!("Cannot queue image {url}: {err}");
            self.images.finish(url, Err(err));
        }
    }

    /// Requeue failed images shown by the current page; returns how many.
    pub(super) fn retry_failed_images(&mut self) -> usize {
        let mut retried = 0;
        for (url, kind) in self.visible_images() {
            if self.images.retry(&url) {
                self.dispatch_image(&url, kind);
                retried += 1;
            }
        }
        if retried > 0 {
            tracing::info!("Retrying {retried} images");
        }
        retried
    }

    /// Images on the current page whose last download or decode failed.
    pub fn failed_image_count(&self) -> usize {
        self.visible_images()
            .iter()
            .filter(|(url, _)| matches!(self.images.get(url), Some(RemoteData::Failure(_))))
            .count()
    }

    /// Image URLs the current page displays.
    fn visible_images(&self) -> Vec<(String, ImageKind)> {
        match &self.page {
            Page::Thumbnails {
                page, collection, ..
            } => collection
                .success()
                .map(|collection| {
                    let range =
                        Pagination::new(collection.albums.len(), self.page_size()).range(*page);
                    collection.albums[range]
                        .iter()
                        .filter_map(|album| album.thumbnail_url.clone())
                        .map(|url| (url, ImageKind::Thumbnail))
                        .collect()
                })
                .unwrap_or_default(),
            Page::FullSize { image, .. } => self
                .image_url(*image)
                .map(|url| vec![(url.to_string(), ImageKind::FullSize)])
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}
