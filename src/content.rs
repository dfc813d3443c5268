//! Content API client: collection metadata from the headless CMS and image
//! listings from the directory-listing endpoint.

mod client;
mod collection;
mod listing;

pub use client::{ContentClient, MAX_IMAGE_BYTES, MAX_JSON_BYTES};
pub use collection::decode_collection;
pub use listing::{decode_listing, is_image_name};

/// Where collections, listings and image bytes come from.
///
/// [`ContentClient`] talks HTTP; tests substitute in-memory sources.
pub trait ContentSource: Send + Sync {
    fn fetch_collection(&self, name: &str) -> Result<Collection, ContentError>;
    fn fetch_resource_images(&self, folder: &str) -> Result<Vec<ImageRef>, ContentError>;
    fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, ContentError>;
}

/// A named group of albums; one portfolio category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    pub name: String,
    pub albums: Vec<Album>,
}

impl Collection {
    /// Find an album by slug.
    pub fn album(&self, slug: &str) -> Option<&Album> {
        self.albums.iter().find(|album| album.slug == slug)
    }
}

/// Metadata for one sub-gallery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Album {
    /// Location segment identifying the album inside its category.
    pub slug: String,
    pub title: String,
    pub description: String,
    /// Absolute URL of the album's thumbnail, when the entry has one.
    pub thumbnail_url: Option<String>,
    /// Folder passed to the listing endpoint to enumerate full-size images.
    pub folder: String,
}

/// One full-size image inside an album folder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub name: String,
    pub url: String,
}

/// Errors from talking to the content services.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },
    #[error("{url} returned HTTP {code}")]
    Status { url: String, code: u16 },
    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unexpected response shape: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn encode_path(path: &str) -> String {
    use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
    const SEGMENT: &AsciiSet = &CONTROLS
        .add(b' ')
        .add(b'"')
        .add(b'#')
        .add(b'%')
        .add(b'<')
        .add(b'>')
        .add(b'?')
        .add(b'\\')
        .add(b'`')
        .add(b'{')
        .add(b'}');
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_path_escapes_segments_and_drops_empty_ones() {
        assert_eq!(encode_path("/photography//Iceland 2019/"), "photography/Iceland%202019");
        assert_eq!(encode_path("a#b/c?d"), "a%23b/c%3Fd");
        assert_eq!(encode_path("a\\b/c"), "a%5Cb/c");
    }
}
