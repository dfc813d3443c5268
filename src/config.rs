//! Site configuration persisted as TOML in the `.folio` directory.
//!
//! The file holds the static page content (site title, about, resume), the
//! content endpoints, the portfolio categories and gallery tuning. A missing
//! file yields [`AppConfig::default`].

mod defaults;
mod errors;
mod io;
mod types;

pub use errors::ConfigError;
pub use io::{
    CONFIG_FILE_NAME, config_path, load_from_path, load_or_default, save, save_last_location,
    save_last_location_to_path, save_to_path,
};
pub use types::{
    AboutSettings, AppConfig, CategoryConfig, ContentSettings, GallerySettings, LinkConfig,
    ResumeEntry, ResumeSection, ResumeSettings, SiteSettings,
};
