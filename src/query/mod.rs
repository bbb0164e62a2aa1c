use crate::models::Favorite;

/// Fixed window size for every paginated list in the app.
pub(crate) const PAGE_SIZE: usize = 10;

/// Records that can be narrowed by the free-text filter box.
pub(crate) trait Searchable {
    fn name(&self) -> &str;
    fn address(&self) -> Option<&str>;
}

impl Searchable for Favorite {
    fn name(&self) -> &str {
        &self.name
    }

    fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

/// Case-insensitive substring match on name OR address.
/// An absent address contributes nothing to the match (and never errors).
pub(crate) fn matches_query<T: Searchable>(record: &T, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    let needle = query.to_lowercase();
    if record.name().to_lowercase().contains(&needle) {
        return true;
    }

    record
        .address()
        .map(|a| a.to_lowercase().contains(&needle))
        .unwrap_or(false)
}

/// Narrow an already-fetched list without a server round-trip.
/// Empty query returns the full list, order preserved.
pub(crate) fn filter_records<T: Searchable + Clone>(records: &[T], query: &str) -> Vec<T> {
    records
        .iter()
        .filter(|r| matches_query(*r, query))
        .cloned()
        .collect()
}

/// Fixed-size window over a (possibly filtered) list, with clamped navigation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Pager {
    pub page_size: usize,
}

impl Default for Pager {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
        }
    }
}

impl Pager {
    /// ceil(len / page_size); an empty list has zero pages.
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size)
    }

    /// Clamp a requested page into `[1, total_pages]`. Out-of-range requests
    /// land on the nearest bound (clamp, not wrap, not error). An empty list
    /// clamps to page 1 so callers always hold a valid page number.
    pub fn clamp(&self, page: usize, total_pages: usize) -> usize {
        page.max(1).min(total_pages.max(1))
    }

    /// The visible window `[(p-1)*size, (p-1)*size + size)` for a clamped page.
    pub fn slice<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        let page = self.clamp(page, self.total_pages(items.len()));
        let start = (page - 1) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }
}

/// Filter text + visible page for a paginated tab list. Both live in one
/// value so a query change and its page reset land in the same update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ListControls {
    pub query: String,
    pub page: usize,
}

impl Default for ListControls {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
        }
    }
}

impl ListControls {
    /// A changed query restarts the list on the first page; re-entering the
    /// same text leaves the page where it was.
    pub fn set_query(&mut self, query: &str) {
        if query != self.query {
            self.query = query.to_string();
            self.page = 1;
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Place {
        name: &'static str,
        address: Option<&'static str>,
    }

    impl Searchable for Place {
        fn name(&self) -> &str {
            self.name
        }

        fn address(&self) -> Option<&str> {
            self.address
        }
    }

    fn sample() -> Vec<Place> {
        vec![
            Place {
                name: "Kopi Kenangan",
                address: Some("Jl. Sudirman"),
            },
            Place {
                name: "Starbucks",
                address: None,
            },
        ]
    }

    #[test]
    fn empty_query_returns_list_unchanged() {
        let places = sample();
        let filtered = filter_records(&places, "");
        assert_eq!(filtered, places);
    }

    #[test]
    fn matches_address_case_insensitively() {
        let filtered = filter_records(&sample(), "sudirman");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Kopi Kenangan");
    }

    #[test]
    fn absent_address_is_excluded_without_error() {
        // "sudirman" only appears in an address, so the record with no
        // address must simply not match.
        let filtered = filter_records(&sample(), "sudirman");
        assert!(filtered.iter().all(|p| p.name != "Starbucks"));
    }

    #[test]
    fn matches_name_case_insensitively() {
        let filtered = filter_records(&sample(), "STARB");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Starbucks");
    }

    #[test]
    fn filtering_is_idempotent() {
        let once = filter_records(&sample(), "ko");
        let twice = filter_records(&once, "ko");
        assert_eq!(once, twice);
    }

    #[test]
    fn total_pages_boundaries() {
        let pager = Pager::default();
        assert_eq!(pager.total_pages(0), 0);
        assert_eq!(pager.total_pages(1), 1);
        assert_eq!(pager.total_pages(10), 1);
        assert_eq!(pager.total_pages(11), 2);
        assert_eq!(pager.total_pages(25), 3);
    }

    #[test]
    fn clamp_never_leaves_bounds() {
        let pager = Pager::default();
        // 25 items -> 3 pages; page 5 clamps to 3, page 0 clamps to 1.
        assert_eq!(pager.clamp(5, 3), 3);
        assert_eq!(pager.clamp(0, 3), 1);
        assert_eq!(pager.clamp(2, 3), 2);
        // Empty list still yields a usable page number.
        assert_eq!(pager.clamp(4, 0), 1);
    }

    #[test]
    fn slice_returns_fixed_windows() {
        let items: Vec<usize> = (0..25).collect();
        let pager = Pager::default();
        assert_eq!(pager.slice(&items, 1), &items[0..10]);
        assert_eq!(pager.slice(&items, 2), &items[10..20]);
        assert_eq!(pager.slice(&items, 3), &items[20..25]);
        // Out-of-range requests clamp instead of producing a bad slice.
        assert_eq!(pager.slice(&items, 5), &items[20..25]);
        assert_eq!(pager.slice(&items, 0), &items[0..10]);
    }

    #[test]
    fn slice_of_empty_list_is_empty() {
        let items: Vec<usize> = vec![];
        assert!(Pager::default().slice(&items, 3).is_empty());
    }

    #[test]
    fn query_change_resets_to_first_page() {
        let mut controls = ListControls::default();
        controls.set_page(3);

        controls.set_query("kopi");
        assert_eq!(controls.page, 1);
        assert_eq!(controls.query, "kopi");
    }

    #[test]
    fn unchanged_query_keeps_current_page() {
        let mut controls = ListControls::default();
        controls.set_query("kopi");
        controls.set_page(2);

        controls.set_query("kopi");
        assert_eq!(controls.page, 2);
    }

    #[test]
    fn clearing_the_query_also_resets_the_page() {
        let mut controls = ListControls::default();
        controls.set_query("kopi");
        controls.set_page(2);

        controls.set_query("");
        assert_eq!(controls.page, 1);
        assert!(controls.query.is_empty());
    }
}
