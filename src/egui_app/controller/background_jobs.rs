use super::jobs::JobMessage;
use super::*;
use std::sync::mpsc::TryRecvError;

impl EguiController {
    /// Drain finished fetches and image loads; call once per frame.
    pub fn poll_background_jobs(&mut self) {
        let mut page_changed = false;
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            page_changed |= self.handle_job_message(message);
        }
        loop {
            let loaded = match self.jobs.try_recv_image() {
                Ok(loaded) => loaded,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            };
            tracing::debug!(
                "Image {} ({:?}) finished in {} ms",
                loaded.url,
                loaded.kind,
                loaded.elapsed.as_millis()
            );
            if !self.images.finish(&loaded.url, loaded.result) {
                tracing::debug!("Dropping image {} evicted while loading", loaded.url);
            }
        }
        if page_changed {
            self.refresh_status();
        }
    }

    /// Merge one finished fetch. Returns `true` when the current page changed.
    fn handle_job_message(&mut self, message: JobMessage) -> bool {
        match message {
            JobMessage::CollectionLoaded(message) => {
                let target = message.target();
                self.jobs.finish(&target);
                if let Ok(collection) = &message.result {
                    self.collections
                        .insert(message.category.clone(), collection.clone());
                }
                if !self.page.accepts(&target) {
                    tracing::debug!(
                        "Discarding stale collection for {} after {} ms",
                        message.category,
                        message.elapsed.as_millis()
                    );
                    return false;
                }
                match &message.result {
                    Ok(collection) => tracing::info!(
                        "Loaded {} albums for {} in {} ms",
                        collection.albums.len(),
                        message.category,
                        message.elapsed.as_millis()
                    ),
                    Err(err) => {
                        tracing::warn!("Collection {} failed: {err}", message.category)
                    }
                }
                self.apply_collection(message.result);
                true
            }
            JobMessage::ListingLoaded(message) => {
                let target = message.target();
                self.jobs.finish(&target);
                if !self.page.accepts(&target) {
                    tracing::debug!(
                        "Discarding stale image listing for {}/{} after {} ms",
                        message.category,
                        message.resource,
                        message.elapsed.as_millis()
                    );
                    return false;
                }
                match &message.result {
                    Ok(images) => tracing::info!(
                        "Listed {} images for {}/{} in {} ms",
                        images.len(),
                        message.category,
                        message.resource,
                        message.elapsed.as_millis()
                    ),
                    Err(err) => tracing::warn!(
                        "Image listing for {}/{} failed: {err}",
                        message.category,
                        message.resource
                    ),
                }
                self.page.apply_images(message.result);
                self.clamp_position();
                true
            }
        }
    }
}
