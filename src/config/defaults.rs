use super::types::CategoryConfig;

pub(super) const MIN_PAGE_SIZE: usize = 1;
pub(super) const MAX_PAGE_SIZE: usize = 200;
pub(super) const MIN_THUMBNAIL_PX: u32 = 64;
pub(super) const MAX_THUMBNAIL_PX: u32 = 1024;
pub(super) const MIN_IMAGE_CACHE_ENTRIES: usize = 16;

pub(super) fn default_page_size() -> usize {
    12
}

pub(super) fn default_thumbnail_px() -> u32 {
    320
}

pub(super) fn default_image_cache_entries() -> usize {
    256
}

pub(super) fn default_site_title() -> String {
    "Portfolio".into()
}

pub(super) fn default_tagline() -> String {
    "Photography and design".into()
}

pub(super) fn default_api_base() -> String {
    "http://localhost:8080/api".into()
}

pub(super) fn default_asset_base() -> String {
    "http://localhost:8080".into()
}

pub(super) fn default_listing_endpoint() -> String {
    "http://localhost:8080/list.php".into()
}

pub(super) fn default_listing_asset_base() -> String {
    "http://localhost:8080/images".into()
}

pub(super) fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new("photography", "Photography"),
        CategoryConfig::new("design", "Design"),
    ]
}

pub(super) fn default_about_paragraphs() -> Vec<String> {
    vec!["Edit config.toml to describe yourself here.".into()]
}
