//! Background image downloads, decoding and the in-memory image cache.

mod cache;
mod decode;
mod loader;

pub use cache::{ImageCache, LoadedImage};
pub use decode::{DecodeError, FULL_SIZE_MAX_EDGE, decode_image};
pub use loader::{ImageJob, ImageKind, ImageResult, spawn_image_loader};

#[cfg(test)]
pub(crate) use decode::encode_test_png;
