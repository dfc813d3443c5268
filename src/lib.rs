//! Library exports for the binary and integration tests.
/// Application directory resolution.
pub mod app_dirs;
/// TOML configuration.
pub mod config;
/// Content API client and response decoding.
pub mod content;
/// Shared egui UI modules.
pub mod egui_app;
pub(crate) mod http_client;
/// Image downloads, decoding and caching.
pub mod images;
/// Tracing setup.
pub mod logging;
/// Page model with per-page remote state.
pub mod page;
/// Thumbnail page arithmetic.
pub mod pagination;
/// Remote-data value.
pub mod remote;
/// Location parsing.
pub mod route;
