use std::cmp::Ordering;

use serde::Deserialize;

use super::{ContentError, ImageRef, encode_path};

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Listing entries arrive as bare file names or `{ "name": .. }` objects.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ListingEntry {
    Name(String),
    Object { name: String },
}

impl ListingEntry {
    fn into_name(self) -> String {
        match self {
            ListingEntry::Name(name) | ListingEntry::Object { name } => name,
        }
    }
}

/// True when `name` has an image extension the viewer can decode.
pub fn is_image_name(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(stem, ext)| {
            !stem.is_empty()
                && IMAGE_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

/// Decode a directory listing into image URLs under `asset_base/folder`.
///
/// Non-image files, hidden files and nested paths are dropped; the rest are
/// sorted in natural order so `img2` precedes `img10`.
pub fn decode_listing(
    body: &[u8],
    asset_base: &str,
    folder: &str,
) -> Result<Vec<ImageRef>, ContentError> {
    let entries: Vec<ListingEntry> = serde_json::from_slice(body)?;
    let mut names = entries
        .into_iter()
        .map(ListingEntry::into_name)
        .map(|name| name.trim().to_string())
        .filter(|name| !name.starts_with('.') && !name.contains('/'))
        .filter(|name| is_image_name(name))
        .collect::<Vec<_>>();
    names.sort_by(|a, b| natural_cmp(a, b));
    names.dedup();

    let prefix = format!("{}/{}", asset_base.trim_end_matches('/'), encode_path(folder));
    Ok(names
        .into_iter()
        .map(|name| ImageRef {
            url: format!("{prefix}/{}", encode_path(&name)),
            name,
        })
        .collect())
}

/// Compare strings treating digit runs as numbers, ignoring ASCII case.
fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_run = take_digits(&mut left);
                let r_run = take_digits(&mut right);
                let l_num = l_run.trim_start_matches('0');
                let r_num = r_run.trim_start_matches('0');
                let ord = l_num
                    .len()
                    .cmp(&r_num.len())
                    .then_with(|| l_num.cmp(r_num));
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            (Some(l), Some(r)) => {
                let ord = l.to_ascii_lowercase().cmp(&r.to_ascii_lowercase());
                if ord != Ordering::Equal {
                    return ord;
                }
                left.next();
                right.next();
            }
        }
    }
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(ch) = chars.next_if(char::is_ascii_digit) {
        run.push(ch);
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_images_in_natural_order() {
        let body = br#"["img10.jpg", "img2.JPG", ".DS_Store", "notes.txt", "img1.png", {"name": "cover.webp"}, "img2.JPG"]"#;
        let images = decode_listing(body, "https://img.example.com/", "photography/iceland").unwrap();
        let names = images.iter().map(|i| i.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["cover.webp", "img1.png", "img2.JPG", "img10.jpg"]);
        assert_eq!(
            images[0].url,
            "https://img.example.com/photography/iceland/cover.webp"
        );
    }

    #[test]
    fn escapes_names_in_urls() {
        let images = decode_listing(br#"["my photo #1.jpg"]"#, "http://h", "a b").unwrap();
        assert_eq!(images[0].url, "http://h/a%20b/my%20photo%20%231.jpg");
    }

    #[test]
    fn image_names_need_a_stem_and_known_extension() {
        assert!(is_image_name("a.JPEG"));
        assert!(!is_image_name(".png"));
        assert!(!is_image_name("archive.zip"));
        assert!(!is_image_name("noext"));
    }

    #[test]
    fn natural_order_compares_numbers_by_value() {
        assert_eq!(natural_cmp("a2", "a10"), Ordering::Less);
        assert_eq!(natural_cmp("a010", "a9"), Ordering::Greater);
        assert_eq!(natural_cmp("B1", "a2"), Ordering::Greater);
        assert_eq!(natural_cmp("a", "a1"), Ordering::Less);
    }

    #[test]
    fn non_array_listing_is_an_error() {
        assert!(matches!(
            decode_listing(br#"{"files": []}"#, "http://h", "x"),
            Err(ContentError::Json(_))
        ));
    }
}
