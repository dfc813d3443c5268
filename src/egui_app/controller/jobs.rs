use std::{
    collections::HashSet,
    sync::{
        Arc,
        mpsc::{Receiver, Sender, TryRecvError},
    },
    thread,
    time::{Duration, Instant},
};

use crate::content::{Collection, ContentSource, ImageRef};
use crate::images::{ImageJob, ImageResult, spawn_image_loader};
use crate::page::FetchTarget;

pub(crate) enum JobMessage {
    CollectionLoaded(CollectionLoadResult),
    ListingLoaded(ListingLoadResult),
}

#[derive(Debug)]
pub(crate) struct CollectionLoadResult {
    pub(crate) category: String,
    pub(crate) result: Result<Collection, String>,
    pub(crate) elapsed: Duration,
}

impl CollectionLoadResult {
    pub(crate) fn target(&self) -> FetchTarget {
        FetchTarget::Collection {
            category: self.category.clone(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct ListingLoadResult {
    pub(crate) category: String,
    pub(crate) resource: String,
    pub(crate) result: Result<Vec<ImageRef>, String>,
    pub(crate) elapsed: Duration,
}

impl ListingLoadResult {
    pub(crate) fn target(&self) -> FetchTarget {
        FetchTarget::Resource {
            category: self.category.clone(),
            resource: self.resource.clone(),
        }
    }
}

/// Channels to the background workers plus in-flight bookkeeping.
pub(crate) struct ControllerJobs {
    source: Arc<dyn ContentSource>,
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    image_job_tx: Sender<ImageJob>,
    image_result_rx: Receiver<ImageResult>,
    in_flight: HashSet<FetchTarget>,
}

impl ControllerJobs {
    pub(super) fn new(source: Arc<dyn ContentSource>, thumbnail_px: u32, workers: usize) -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        let (image_job_tx, image_result_rx) =
            spawn_image_loader(Arc::clone(&source), thumbnail_px, workers);
        Self {
            source,
            message_tx,
            message_rx,
            image_job_tx,
            image_result_rx,
            in_flight: HashSet::new(),
        }
    }

    pub(super) fn has_in_flight(&self) -> bool {
        !self.in_flight.is_empty()
    }

    pub(super) fn finish(&mut self, target: &FetchTarget) {
        self.in_flight.remove(target);
    }

    /// Fetch `collection` for `category` unless the same fetch is already running.
    pub(super) fn begin_collection_load(&mut self, category: String, collection: String) -> bool {
        let target = FetchTarget::Collection {
            category: category.clone(),
        };
        if !self.in_flight.insert(target) {
            return false;
        }
        let source = Arc::clone(&self.source);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let start = Instant::now();
            let result = source
                .fetch_collection(&collection)
                .map_err(|err| err.to_string());
            let _ = tx.send(JobMessage::CollectionLoaded(CollectionLoadResult {
                category,
                result,
                elapsed: start.elapsed(),
            }));
        });
        true
    }

    /// List the images in `folder` for one album unless already running.
    pub(super) fn begin_listing_load(
        &mut self,
        category: String,
        resource: String,
        folder: String,
    ) -> bool {
        let target = FetchTarget::Resource {
            category: category.clone(),
            resource: resource.clone(),
        };
        if !self.in_flight.insert(target) {
            return false;
        }
        let source = Arc::clone(&self.source);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let start = Instant::now();
            let result = source
                .fetch_resource_images(&folder)
                .map_err(|err| err.to_string());
            let _ = tx.send(JobMessage::ListingLoaded(ListingLoadResult {
                category,
                resource,
                result,
                elapsed: start.elapsed(),
            }));
        });
        true
    }

    pub(super) fn send_image_job(&self, job: ImageJob) -> Result<(), String> {
        self.image_job_tx
            .send(job)
            .map_err(|_| "Image workers are not running".to_string())
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn try_recv_image(&self) -> Result<ImageResult, TryRecvError> {
        self.image_result_rx.try_recv()
    }
}
