use std::time::Instant;

use url::Url;

use super::{
    Collection, ContentError, ContentSource, ImageRef, decode_collection, decode_listing,
    encode_path,
};
use crate::config::ContentSettings;
use crate::http_client;

/// Upper bound for JSON responses from the content services.
pub const MAX_JSON_BYTES: usize = 4 * 1024 * 1024;
/// Upper bound for a single image download.
pub const MAX_IMAGE_BYTES: usize = 32 * 1024 * 1024;

const TOKEN_HEADER: &str = "Cockpit-Token";
const LISTING_DIR_PARAM: &str = "dir";

/// Blocking client for the content API and the directory-listing endpoint.
///
/// Calls run on background threads; the UI never blocks on them.
#[derive(Clone, Debug)]
pub struct ContentClient {
    settings: ContentSettings,
}

impl ContentClient {
    pub fn new(settings: ContentSettings) -> Self {
        Self { settings }
    }

    /// URL of a collection listing: `{api_base}/collections/get/{name}`.
    pub fn collection_url(&self, name: &str) -> Result<Url, ContentError> {
        parse_url(&format!(
            "{}/collections/get/{}",
            self.settings.api_base,
            encode_path(name)
        ))
    }

    /// URL of a folder listing: `{listing_endpoint}?dir={folder}`.
    pub fn listing_url(&self, folder: &str) -> Result<Url, ContentError> {
        let mut url = parse_url(&self.settings.listing_endpoint)?;
        url.query_pairs_mut().append_pair(LISTING_DIR_PARAM, folder);
        Ok(url)
    }

    fn get_bytes(
        &self,
        url: &Url,
        with_token: bool,
        max_bytes: usize,
    ) -> Result<Vec<u8>, ContentError> {
        let mut request = http_client::agent().get(url.as_str());
        if with_token && let Some(token) = self.settings.api_token.as_deref() {
            request = request.set(TOKEN_HEADER, token);
        }
        tracing::debug!("GET {url}");
        let response = request.call().map_err(|err| match err {
            ureq::Error::Status(code, _) => ContentError::Status {
                url: url.to_string(),
                code,
            },
            ureq::Error::Transport(transport) => ContentError::Http {
                url: url.to_string(),
                message: transport.to_string(),
            },
        })?;
        Ok(http_client::read_response_bytes(response, max_bytes)?)
    }
}

impl ContentSource for ContentClient {
    /// Fetch and decode the albums of one collection.
    fn fetch_collection(&self, name: &str) -> Result<Collection, ContentError> {
        let url = self.collection_url(name)?;
        let started = Instant::now();
        let body = self.get_bytes(&url, true, MAX_JSON_BYTES)?;
        let collection = decode_collection(name, &body, &self.settings.asset_base)?;
        tracing::info!(
            "Fetched collection {name}: {} albums in {:?}",
            collection.albums.len(),
            started.elapsed()
        );
        Ok(collection)
    }

    /// Fetch the full-size images inside an album folder.
    fn fetch_resource_images(&self, folder: &str) -> Result<Vec<ImageRef>, ContentError> {
        let url = self.listing_url(folder)?;
        let started = Instant::now();
        let body = self.get_bytes(&url, false, MAX_JSON_BYTES)?;
        let images = decode_listing(&body, &self.settings.listing_asset_base, folder)?;
        tracing::info!(
            "Listed {folder}: {} images in {:?}",
            images.len(),
            started.elapsed()
        );
        Ok(images)
    }

    /// Download raw image bytes.
    fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, ContentError> {
        let url = parse_url(url)?;
        self.get_bytes(&url, false, MAX_IMAGE_BYTES)
    }
}

fn parse_url(text: &str) -> Result<Url, ContentError> {
    Url::parse(text).map_err(|err| ContentError::InvalidUrl {
        url: text.to_string(),
        reason: err.to_string(),
    })
}
