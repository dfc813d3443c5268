use crate::route::Route;

/// Entries kept before the oldest are dropped.
const HISTORY_LIMIT: usize = 100;

/// Back/forward stack of visited routes.
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationHistory {
    entries: Vec<Route>,
    cursor: usize,
}

impl NavigationHistory {
    pub fn new(initial: Route) -> Self {
        Self {
            entries: vec![initial],
            cursor: 0,
        }
    }

    pub fn current(&self) -> &Route {
        &self.entries[self.cursor]
    }

    /// Record a new entry, dropping anything ahead of the cursor.
    pub fn push(&mut self, route: Route) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(route);
        if self.entries.len() > HISTORY_LIMIT {
            let excess = self.entries.len() - HISTORY_LIMIT;
            self.entries.drain(..excess);
        }
        self.cursor = self.entries.len() - 1;
    }

    /// Overwrite the current entry in place.
    pub fn replace(&mut self, route: Route) {
        self.entries[self.cursor] = route;
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn back(&mut self) -> Option<Route> {
        if !self.can_go_back() {
            return None;
        }
        self.cursor -= 1;
        Some(self.current().clone())
    }

    pub fn forward(&mut self) -> Option<Route> {
        if !self.can_go_forward() {
            return None;
        }
        self.cursor += 1;
        Some(self.current().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thumbnails(page: usize) -> Route {
        Route::Thumbnails {
            category: "design".into(),
            page,
        }
    }

    #[test]
    fn back_and_forward_walk_entries() {
        let mut history = NavigationHistory::new(Route::Home);
        history.push(Route::About);
        history.push(Route::Resume);
        assert_eq!(history.back(), Some(Route::About));
        assert_eq!(history.back(), Some(Route::Home));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some(Route::About));
        assert!(history.can_go_forward());
    }

    #[test]
    fn push_discards_forward_entries() {
        let mut history = NavigationHistory::new(Route::Home);
        history.push(Route::About);
        history.back();
        history.push(Route::Resume);
        assert!(!history.can_go_forward());
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), &Route::Resume);
    }

    #[test]
    fn replace_keeps_length() {
        let mut history = NavigationHistory::new(thumbnails(1));
        history.replace(thumbnails(2));
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), &thumbnails(2));
    }

    #[test]
    fn oldest_entries_fall_off() {
        let mut history = NavigationHistory::new(thumbnails(0));
        for page in 1..=HISTORY_LIMIT + 10 {
            history.push(thumbnails(page));
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.current(), &thumbnails(HISTORY_LIMIT + 10));
        assert!(history.can_go_back());
    }
}
