//! Page model: the current route plus the remote state fetched for it.

use crate::content::{Album, Collection, ImageRef};
use crate::remote::RemoteData;
use crate::route::Route;

/// Identifies what a background fetch was issued for.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FetchTarget {
    /// Album listing of a category's collection.
    Collection { category: String },
    /// Image listing of one album.
    Resource { category: String, resource: String },
}

/// The page currently shown, one variant per route shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Page {
    Home,
    About,
    Resume,
    Thumbnails {
        category: String,
        page: usize,
        collection: RemoteData<Collection>,
    },
    FullSize {
        category: String,
        resource: String,
        image: usize,
        album: RemoteData<Album>,
        images: RemoteData<Vec<ImageRef>>,
    },
    NotFound { location: String },
}

impl Page {
    /// Build a page with nothing fetched yet.
    pub fn from_route(route: Route) -> Page {
        match route {
            Route::Home => Page::Home,
            Route::About => Page::About,
            Route::Resume => Page::Resume,
            Route::Thumbnails { category, page } => Page::Thumbnails {
                category,
                page,
                collection: RemoteData::NotAsked,
            },
            Route::FullSize {
                category,
                resource,
                image,
            } => Page::FullSize {
                category,
                resource,
                image,
                album: RemoteData::NotAsked,
                images: RemoteData::NotAsked,
            },
            Route::NotFound { location } => Page::NotFound { location },
        }
    }

    /// Route describing this page, used for history and the address bar.
    pub fn route(&self) -> Route {
        match self {
            Page::Home => Route::Home,
            Page::About => Route::About,
            Page::Resume => Route::Resume,
            Page::Thumbnails { category, page, .. } => Route::Thumbnails {
                category: category.clone(),
                page: *page,
            },
            Page::FullSize {
                category,
                resource,
                image,
                ..
            } => Route::FullSize {
                category: category.clone(),
                resource: resource.clone(),
                image: *image,
            },
            Page::NotFound { location } => Route::NotFound {
                location: location.clone(),
            },
        }
    }

    /// Move to `route` in place when it shows the same collection or album.
    ///
    /// Only the page number or image index changes; fetched state is kept.
    /// Returns `false` when `route` needs a fresh page.
    pub fn retarget(&mut self, route: &Route) -> bool {
        match (self, route) {
            (
                Page::Thumbnails { category, page, .. },
                Route::Thumbnails {
                    category: next_category,
                    page: next_page,
                },
            ) if category == next_category => {
                *page = *next_page;
                true
            }
            (
                Page::FullSize {
                    category,
                    resource,
                    image,
                    ..
                },
                Route::FullSize {
                    category: next_category,
                    resource: next_resource,
                    image: next_image,
                },
            ) if category == next_category && resource == next_resource => {
                *image = *next_image;
                true
            }
            _ => false,
        }
    }

    /// Whether a completed fetch for `target` still belongs to this page.
    ///
    /// Both the page shape and the category/album identity must match, so a
    /// slow response for a page the user already left is dropped.
    pub fn accepts(&self, target: &FetchTarget) -> bool {
        match (self, target) {
            (
                Page::Thumbnails { category, .. } | Page::FullSize { category, .. },
                FetchTarget::Collection { category: target },
            ) => category == target,
            (
                Page::FullSize {
                    category, resource, ..
                },
                FetchTarget::Resource {
                    category: target_category,
                    resource: target_resource,
                },
            ) => category == target_category && resource == target_resource,
            _ => false,
        }
    }

    /// Fetches this page still needs, in issue order.
    pub fn pending_targets(&self) -> Vec<FetchTarget> {
        match self {
            Page::Thumbnails {
                category,
                collection,
                ..
            } if collection.should_fetch() => vec![FetchTarget::Collection {
                category: category.clone(),
            }],
            Page::FullSize {
                category,
                album,
                ..
            } if album.should_fetch() => vec![FetchTarget::Collection {
                category: category.clone(),
            }],
            Page::FullSize {
                category,
                resource,
                album: RemoteData::Success(_),
                images,
                ..
            } if images.should_fetch() => vec![FetchTarget::Resource {
                category: category.clone(),
                resource: resource.clone(),
            }],
            _ => Vec::new(),
        }
    }

    /// Listing folder of the resolved album on a full-size page.
    pub fn album_folder(&self) -> Option<&str> {
        match self {
            Page::FullSize {
                album: RemoteData::Success(album),
                ..
            } => Some(album.folder.as_str()),
            _ => None,
        }
    }

    /// Mark the remote value behind `target` as in flight.
    pub fn mark_loading(&mut self, target: &FetchTarget) {
        if !self.accepts(target) {
            return;
        }
        match (self, target) {
            (Page::Thumbnails { collection, .. }, FetchTarget::Collection { .. }) => {
                *collection = RemoteData::Loading;
            }
            (Page::FullSize { album, .. }, FetchTarget::Collection { .. }) => {
                *album = RemoteData::Loading;
            }
            (Page::FullSize { images, .. }, FetchTarget::Resource { .. }) => {
                *images = RemoteData::Loading;
            }
            _ => {}
        }
    }

    /// Merge a collection result.
    ///
    /// On a full-size page this resolves the album; the returned folder is
    /// the image listing that should be fetched next.
    pub fn apply_collection(&mut self, result: Result<Collection, String>) -> Option<String> {
        match self {
            Page::Thumbnails { collection, .. } => {
                *collection = RemoteData::from_result(result);
                None
            }
            Page::FullSize {
                category,
                resource,
                album,
                images,
                ..
            } => {
                let found = result.and_then(|collection| {
                    collection.album(resource.as_str()).cloned().ok_or_else(|| {
                        format!("No album named \"{resource}\" in {category}")
                    })
                });
                match found {
                    Ok(found) => {
                        let folder = found.folder.clone();
                        *album = RemoteData::Success(found);
                        images.should_fetch().then_some(folder)
                    }
                    Err(err) => {
                        *images = RemoteData::Failure(err.clone());
                        *album = RemoteData::Failure(err);
                        None
                    }
                }
            }
            _ => None,
        }
    }

    /// Merge an image listing result.
    pub fn apply_images(&mut self, result: Result<Vec<ImageRef>, String>) {
        if let Page::FullSize { images, .. } = self {
            *images = RemoteData::from_result(result);
        }
    }

    /// True while any remote value of this page is in flight.
    pub fn is_loading(&self) -> bool {
        match self {
            Page::Thumbnails { collection, .. } => collection.is_loading(),
            Page::FullSize { album, images, .. } => album.is_loading() || images.is_loading(),
            _ => false,
        }
    }

    /// Reset failed remote values so the next fetch pass reissues them.
    pub fn reset_failures(&mut self) -> bool {
        match self {
            Page::Thumbnails { collection, .. } if collection.failure().is_some() => {
                *collection = RemoteData::NotAsked;
                true
            }
            Page::FullSize { album, images, .. }
                if album.failure().is_some() || images.failure().is_some() =>
            {
                if album.failure().is_some() {
                    *album = RemoteData::NotAsked;
                }
                *images = RemoteData::NotAsked;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(slug: &str) -> Album {
        Album {
            slug: slug.into(),
            title: slug.to_uppercase(),
            description: String::new(),
            thumbnail_url: None,
            folder: format!("photography/{slug}"),
        }
    }

    fn collection() -> Collection {
        Collection {
            name: "photography".into(),
            albums: vec![album("iceland"), album("norway")],
        }
    }

    fn full_size(resource: &str) -> Page {
        Page::from_route(Route::FullSize {
            category: "photography".into(),
            resource: resource.into(),
            image: 0,
        })
    }

    fn collection_target(category: &str) -> FetchTarget {
        FetchTarget::Collection {
            category: category.into(),
        }
    }

    #[test]
    fn route_round_trips_through_page() {
        let route = Route::Thumbnails {
            category: "design".into(),
            page: 2,
        };
        assert_eq!(Page::from_route(route.clone()).route(), route);
    }

    #[test]
    fn stale_results_for_other_targets_are_rejected() {
        let page = full_size("iceland");
        assert!(page.accepts(&collection_target("photography")));
        assert!(!page.accepts(&collection_target("design")));
        assert!(page.accepts(&FetchTarget::Resource {
            category: "photography".into(),
            resource: "iceland".into(),
        }));
        assert!(!page.accepts(&FetchTarget::Resource {
            category: "photography".into(),
            resource: "norway".into(),
        }));
        assert!(!Page::About.accepts(&collection_target("photography")));
    }

    #[test]
    fn thumbnails_only_accept_their_collection() {
        let page = Page::from_route(Route::Thumbnails {
            category: "design".into(),
            page: 1,
        });
        assert!(page.accepts(&collection_target("design")));
        assert!(!page.accepts(&FetchTarget::Resource {
            category: "design".into(),
            resource: "logos".into(),
        }));
    }

    #[test]
    fn full_size_resolves_album_then_requests_listing() {
        let mut page = full_size("norway");
        assert_eq!(page.pending_targets(), vec![collection_target("photography")]);
        page.mark_loading(&collection_target("photography"));
        assert!(page.is_loading());
        assert!(page.pending_targets().is_empty());

        let folder = page.apply_collection(Ok(collection()));
        assert_eq!(folder.as_deref(), Some("photography/norway"));
        let Page::FullSize { album, .. } = &page else {
            panic!("expected full-size page");
        };
        assert_eq!(album.success().map(|a| a.slug.as_str()), Some("norway"));
    }

    #[test]
    fn missing_album_fails_both_values() {
        let mut page = full_size("peru");
        assert_eq!(page.apply_collection(Ok(collection())), None);
        let Page::FullSize { album, images, .. } = &page else {
            panic!("expected full-size page");
        };
        assert!(album.failure().unwrap().contains("peru"));
        assert!(images.failure().is_some());
        assert!(page.reset_failures());
        assert_eq!(page.pending_targets(), vec![collection_target("photography")]);
    }

    #[test]
    fn retarget_keeps_fetched_state() {
        let mut page = full_size("iceland");
        page.apply_collection(Ok(collection()));
        page.apply_images(Ok(vec![]));
        let next = Route::FullSize {
            category: "photography".into(),
            resource: "iceland".into(),
            image: 3,
        };
        assert!(page.retarget(&next));
        assert_eq!(page.route(), next);
        let Page::FullSize { images, .. } = &page else {
            panic!("expected full-size page");
        };
        assert!(images.is_settled());

        let other = Route::FullSize {
            category: "photography".into(),
            resource: "norway".into(),
            image: 0,
        };
        assert!(!page.retarget(&other));
        assert!(!page.retarget(&Route::About));
    }

    #[test]
    fn failed_listing_is_retried_without_refetching_the_album() {
        let mut page = full_size("iceland");
        page.apply_collection(Ok(collection()));
        page.apply_images(Err("timeout".into()));
        assert!(page.reset_failures());
        assert_eq!(page.album_folder(), Some("photography/iceland"));
        assert_eq!(
            page.pending_targets(),
            vec![FetchTarget::Resource {
                category: "photography".into(),
                resource: "iceland".into(),
            }]
        );
    }

    #[test]
    fn thumbnails_failure_can_be_retried() {
        let mut page = Page::from_route(Route::Thumbnails {
            category: "design".into(),
            page: 1,
        });
        page.mark_loading(&collection_target("design"));
        page.apply_collection(Err("offline".into()));
        assert!(!page.is_loading());
        assert!(page.pending_targets().is_empty());
        assert!(page.reset_failures());
        assert_eq!(page.pending_targets(), vec![collection_target("design")]);
    }
}
