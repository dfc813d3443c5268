use serde::{Deserialize, Serialize};

use crate::route::is_route_segment;

use super::defaults::{
    MAX_PAGE_SIZE, MAX_THUMBNAIL_PX, MIN_IMAGE_CACHE_ENTRIES, MIN_PAGE_SIZE, MIN_THUMBNAIL_PX,
    default_about_paragraphs, default_api_base, default_asset_base, default_categories,
    default_image_cache_entries, default_listing_asset_base, default_listing_endpoint,
    default_page_size, default_site_title, default_tagline, default_thumbnail_px,
};

/// Aggregate site configuration loaded from `config.toml`.
///
/// Config keys: `last_location`, `site`, `about`, `resume`, `content`,
/// `gallery`, `categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Location shown when the app last closed; restored on launch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_location: Option<String>,
    #[serde(default)]
    pub site: SiteSettings,
    #[serde(default)]
    pub about: AboutSettings,
    #[serde(default)]
    pub resume: ResumeSettings,
    #[serde(default)]
    pub content: ContentSettings,
    #[serde(default)]
    pub gallery: GallerySettings,
    /// Portfolio categories in navigation order.
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            last_location: None,
            site: SiteSettings::default(),
            about: AboutSettings::default(),
            resume: ResumeSettings::default(),
            content: ContentSettings::default(),
            gallery: GallerySettings::default(),
            categories: default_categories(),
        }
    }
}

impl AppConfig {
    /// Look up a category by its location slug.
    pub fn category(&self, slug: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|category| category.slug == slug)
    }

    /// Slugs of every configured category, in navigation order.
    pub fn category_slugs(&self) -> Vec<String> {
        self.categories
            .iter()
            .map(|category| category.slug.clone())
            .collect()
    }

    /// Clamp numeric settings and drop unusable categories.
    pub fn normalized(mut self) -> Self {
        self.gallery = self.gallery.normalized();
        self.content = self.content.normalized();
        let mut seen = std::collections::HashSet::new();
        self.categories = self
            .categories
            .into_iter()
            .map(CategoryConfig::normalized)
            .filter(|category| is_route_segment(&category.slug) && !category.slug.contains('/'))
            .filter(|category| seen.insert(category.slug.clone()))
            .collect();
        self
    }
}

/// Site identity shown on the home page and in the top bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default = "default_site_title")]
    pub title: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default)]
    pub owner: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            tagline: default_tagline(),
            owner: String::new(),
        }
    }
}

/// Text and contact links for the about page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutSettings {
    #[serde(default = "default_about_paragraphs")]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub links: Vec<LinkConfig>,
}

impl Default for AboutSettings {
    fn default() -> Self {
        Self {
            paragraphs: default_about_paragraphs(),
            links: Vec::new(),
        }
    }
}

/// An external link opened in the OS browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub label: String,
    pub url: String,
}

/// Resume page content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSettings {
    /// Optional link to a downloadable resume document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(default)]
    pub sections: Vec<ResumeSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeSection {
    pub title: String,
    #[serde(default)]
    pub entries: Vec<ResumeEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeEntry {
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default)]
    pub details: Vec<String>,
}

/// Endpoints of the headless content API and the directory-listing service.
///
/// Config keys: `api_base`, `api_token`, `asset_base`, `listing_endpoint`,
/// `listing_asset_base`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSettings {
    /// Base URL of the content API (`{api_base}/collections/get/{name}`).
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Token sent with content API requests when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    /// Base URL that relative asset paths (album thumbnails) resolve against.
    #[serde(default = "default_asset_base")]
    pub asset_base: String,
    /// Directory-listing query endpoint (`{listing_endpoint}?dir={folder}`).
    #[serde(default = "default_listing_endpoint")]
    pub listing_endpoint: String,
    /// Base URL of the folders the listing endpoint enumerates.
    #[serde(default = "default_listing_asset_base")]
    pub listing_asset_base: String,
}

impl Default for ContentSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            api_token: None,
            asset_base: default_asset_base(),
            listing_endpoint: default_listing_endpoint(),
            listing_asset_base: default_listing_asset_base(),
        }
    }
}

impl ContentSettings {
    fn normalized(mut self) -> Self {
        for base in [
            &mut self.api_base,
            &mut self.asset_base,
            &mut self.listing_asset_base,
        ] {
            let trimmed = base.trim().trim_end_matches('/').to_string();
            *base = trimmed;
        }
        self.listing_endpoint = self.listing_endpoint.trim().to_string();
        self.api_token = self
            .api_token
            .map(|token| token.trim().to_string())
            .filter(|token| !token.is_empty());
        self
    }
}

/// Thumbnail grid and image cache tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GallerySettings {
    /// Albums shown per thumbnail page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Longest edge of decoded thumbnails, in pixels.
    #[serde(default = "default_thumbnail_px")]
    pub thumbnail_px: u32,
    /// Decoded images kept in memory before the oldest are evicted.
    #[serde(default = "default_image_cache_entries")]
    pub image_cache_entries: usize,
}

impl Default for GallerySettings {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            thumbnail_px: default_thumbnail_px(),
            image_cache_entries: default_image_cache_entries(),
        }
    }
}

impl GallerySettings {
    fn normalized(self) -> Self {
        Self {
            page_size: self.page_size.clamp(MIN_PAGE_SIZE, MAX_PAGE_SIZE),
            thumbnail_px: self.thumbnail_px.clamp(MIN_THUMBNAIL_PX, MAX_THUMBNAIL_PX),
            image_cache_entries: self.image_cache_entries.max(MIN_IMAGE_CACHE_ENTRIES),
        }
    }
}

/// One portfolio category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Path segment used in `/portfolio/{slug}`.
    pub slug: String,
    /// Label shown in navigation.
    pub title: String,
    /// Content API collection name; defaults to the slug.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub collection: String,
}

impl CategoryConfig {
    /// Build a category whose collection name matches its slug.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            collection: slug.clone(),
            slug,
            title: title.into(),
        }
    }

    /// Collection name queried for this category.
    pub fn collection_name(&self) -> &str {
        if self.collection.is_empty() {
            &self.slug
        } else {
            &self.collection
        }
    }

    fn normalized(mut self) -> Self {
        self.slug = self.slug.trim().trim_matches('/').to_string();
        self.collection = self.collection.trim().to_string();
        if self.title.trim().is_empty() {
            self.title = self.slug.clone();
        }
        self
    }
}
