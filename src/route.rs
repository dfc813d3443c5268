//! Location parsing: maps `/path?query` strings onto page shapes.

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use url::Url;

const PORTFOLIO_SEGMENT: &str = "portfolio";
const PAGE_PARAM: &str = "page";
const IMAGE_PARAM: &str = "image";

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// One of the known page shapes, derived purely from a location string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Resume,
    /// Album grid of one category; `page` is 1-based.
    Thumbnails { category: String, page: usize },
    /// Full-size viewer for one album; `image` is a 0-based index.
    FullSize {
        category: String,
        resource: String,
        image: usize,
    },
    NotFound { location: String },
}

impl Route {
    /// Parse a bare path (`/portfolio/design?page=2`) or a full URL.
    ///
    /// Portfolio routes only match when the category is one of `categories`.
    pub fn parse<S: AsRef<str>>(location: &str, categories: &[S]) -> Route {
        let trimmed = location.trim();
        let Some(url) = to_url(trimmed) else {
            return Route::not_found(trimmed);
        };
        let Some(segments) = path_segments(&url) else {
            return Route::not_found(trimmed);
        };
        let known = |category: &str| categories.iter().any(|known| known.as_ref() == category);
        let segments = segments.iter().map(String::as_str).collect::<Vec<_>>();
        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["resume"] => Route::Resume,
            [PORTFOLIO_SEGMENT, category] if known(*category) => Route::Thumbnails {
                category: category.to_string(),
                page: query_number(&url, PAGE_PARAM).unwrap_or(1),
            },
            [PORTFOLIO_SEGMENT, category, resource] if known(*category) => Route::FullSize {
                category: category.to_string(),
                resource: resource.to_string(),
                image: query_number(&url, IMAGE_PARAM).map_or(0, |n| n - 1),
            },
            _ => Route::not_found(trimmed),
        }
    }

    fn not_found(location: &str) -> Route {
        Route::NotFound {
            location: location.to_string(),
        }
    }

    /// Canonical location for this route; default query values are omitted.
    pub fn location(&self) -> String {
        match self {
            Route::Home => "/".into(),
            Route::About => "/about".into(),
            Route::Resume => "/resume".into(),
            Route::Thumbnails { category, page } => {
                let mut location = format!("/{PORTFOLIO_SEGMENT}/{}", encode(category));
                if *page > 1 {
                    location.push_str(&format!("?{PAGE_PARAM}={page}"));
                }
                location
            }
            Route::FullSize {
                category,
                resource,
                image,
            } => {
                let mut location = format!(
                    "/{PORTFOLIO_SEGMENT}/{}/{}",
                    encode(category),
                    encode(resource)
                );
                if *image > 0 {
                    location.push_str(&format!("?{IMAGE_PARAM}={}", image + 1));
                }
                location
            }
            Route::NotFound { location } => location.clone(),
        }
    }

    /// Category slug for portfolio routes.
    pub fn category(&self) -> Option<&str> {
        match self {
            Route::Thumbnails { category, .. } | Route::FullSize { category, .. } => {
                Some(category)
            }
            _ => None,
        }
    }

    /// Short heading for the route.
    pub fn title(&self) -> String {
        match self {
            Route::Home => "Home".into(),
            Route::About => "About".into(),
            Route::Resume => "Resume".into(),
            Route::Thumbnails { category, .. } => category.clone(),
            Route::FullSize { resource, .. } => resource.clone(),
            Route::NotFound { .. } => "Not found".into(),
        }
    }
}

/// True when `segment` can name a category or album in a location.
///
/// URL parsing collapses `.` and `..` segments even when percent-encoded,
/// so those names never survive a round trip through [`Route::location`].
pub fn is_route_segment(segment: &str) -> bool {
    !segment.is_empty() && !matches!(segment, "." | "..")
}

/// Host used to resolve bare paths; never contacted.
const LOCAL_ORIGIN: &str = "http://folio.invalid";

fn to_url(location: &str) -> Option<Url> {
    match Url::parse(location) {
        Ok(url) if url.has_host() => Some(url),
        _ if location.starts_with('/') => Url::parse(&format!("{LOCAL_ORIGIN}{location}")).ok(),
        _ => Url::parse(&format!("{LOCAL_ORIGIN}/{location}")).ok(),
    }
}

fn path_segments(url: &Url) -> Option<Vec<String>> {
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            percent_decode_str(segment)
                .decode_utf8()
                .ok()
                .map(|decoded| decoded.into_owned())
        })
        .collect()
}

fn query_number(url: &Url, name: &str) -> Option<usize> {
    url.query_pairs()
        .find(|(key, _)| key == name)
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .filter(|value| *value > 0)
}

fn encode(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}
