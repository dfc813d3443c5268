use serde::Deserialize;

use super::{Album, Collection, ContentError, encode_path};
use crate::route::is_route_segment;

#[derive(Debug, Deserialize)]
struct CollectionResponse {
    #[serde(default)]
    entries: Vec<EntryRecord>,
}

#[derive(Debug, Deserialize)]
struct EntryRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    thumbnail: Option<AssetRef>,
    #[serde(default)]
    folder: Option<String>,
    #[serde(default = "published_default")]
    published: bool,
}

/// Asset fields arrive either as `{ "path": ".." }` or as a bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AssetRef {
    Object { path: String },
    Path(String),
}

impl AssetRef {
    fn path(&self) -> &str {
        match self {
            AssetRef::Object { path } | AssetRef::Path(path) => path,
        }
    }
}

fn published_default() -> bool {
    true
}

/// Decode a collection listing response.
///
/// Entries without a usable slug or title are skipped, as are entries with
/// `published: false`. Relative thumbnail paths resolve against `asset_base`.
pub fn decode_collection(
    name: &str,
    body: &[u8],
    asset_base: &str,
) -> Result<Collection, ContentError> {
    let response: CollectionResponse = serde_json::from_slice(body)?;
    let albums = response
        .entries
        .into_iter()
        .filter(|entry| entry.published)
        .filter_map(|entry| album_from_entry(name, entry, asset_base))
        .collect();
    Ok(Collection {
        name: name.to_string(),
        albums,
    })
}

fn album_from_entry(collection: &str, entry: EntryRecord, asset_base: &str) -> Option<Album> {
    let title = entry.title.map(|t| t.trim().to_string()).unwrap_or_default();
    let slug = entry
        .slug
        .map(|s| s.trim().trim_matches('/').to_string())
        .filter(|s| is_route_segment(s) && !s.contains('/'))
        .unwrap_or_else(|| slugify(&title));
    if !is_route_segment(&slug) {
        tracing::debug!("Skipping {collection} entry without slug or title");
        return None;
    }
    let folder = entry
        .folder
        .map(|f| f.trim().trim_matches('/').to_string())
        .filter(|f| !f.is_empty())
        .unwrap_or_else(|| format!("{collection}/{slug}"));
    let thumbnail_url = entry
        .thumbnail
        .as_ref()
        .and_then(|asset| resolve_asset(asset_base, asset.path()));
    Some(Album {
        title: if title.is_empty() { slug.clone() } else { title },
        slug,
        description: entry.description.unwrap_or_default().trim().to_string(),
        thumbnail_url,
        folder,
    })
}

/// Keep absolute http(s) URLs; join anything else onto `base`.
fn resolve_asset(base: &str, path: &str) -> Option<String> {
    let path = path.trim();
    if path.is_empty() {
        return None;
    }
    if let Ok(url) = url::Url::parse(path)
        && matches!(url.scheme(), "http" | "https")
    {
        return Some(url.to_string());
    }
    let joined = format!("{}/{}", base.trim_end_matches('/'), encode_path(path));
    url::Url::parse(&joined).ok().map(|url| url.to_string())
}

fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://cms.example.com";

    #[test]
    fn decodes_cockpit_entries() {
        let body = br#"{
            "entries": [
                {
                    "_id": "1",
                    "title": "Iceland 2019",
                    "slug": "iceland-2019",
                    "description": " Highlands ",
                    "thumbnail": { "path": "/storage/uploads/iceland.jpg" }
                },
                {
                    "title": "Logos",
                    "thumbnail": "https://cdn.example.com/logos.png",
                    "folder": "/design/logo-work/"
                }
            ],
            "total": 2
        }"#;
        let collection = decode_collection("photography", body, BASE).unwrap();
        assert_eq!(collection.name, "photography");
        assert_eq!(
            collection.albums[0],
            Album {
                slug: "iceland-2019".into(),
                title: "Iceland 2019".into(),
                description: "Highlands".into(),
                thumbnail_url: Some(
                    "https://cms.example.com/storage/uploads/iceland.jpg".into()
                ),
                folder: "photography/iceland-2019".into(),
            }
        );
        let logos = collection.album("logos").unwrap();
        assert_eq!(
            logos.thumbnail_url.as_deref(),
            Some("https://cdn.example.com/logos.png")
        );
        assert_eq!(logos.folder, "design/logo-work");
    }

    #[test]
    fn skips_unpublished_and_anonymous_entries() {
        let body = br#"{"entries": [
            {"title": "Draft", "published": false},
            {"description": "no title"},
            {"title": "  ", "slug": ""},
            {"title": "Kept!"}
        ]}"#;
        let collection = decode_collection("design", body, BASE).unwrap();
        assert_eq!(collection.albums.len(), 1);
        assert_eq!(collection.albums[0].slug, "kept");
        assert_eq!(collection.albums[0].thumbnail_url, None);
    }

    #[test]
    fn dot_slugs_fall_back_to_the_title() {
        let body = br#"{"entries": [
            {"title": "Up One", "slug": ".."},
            {"title": "Here", "slug": "."},
            {"title": "...", "slug": "."},
            {"title": "Split", "slug": "a\\b"}
        ]}"#;
        let collection = decode_collection("design", body, BASE).unwrap();
        let slugs = collection
            .albums
            .iter()
            .map(|album| album.slug.as_str())
            .collect::<Vec<_>>();
        assert_eq!(slugs, ["up-one", "here", "a\\b"]);
    }

    #[test]
    fn missing_entries_is_an_empty_collection() {
        let collection = decode_collection("design", b"{}", BASE).unwrap();
        assert!(collection.albums.is_empty());
    }

    #[test]
    fn rejects_non_object_body() {
        let err = decode_collection("design", b"[1, 2]", BASE).unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Night & Day -- 2020"), "night-day-2020");
        assert_eq!(slugify("!!!"), "");
    }
}
