//! List controller shared by the entity list screens.
//!
//! [`ListQuery`] translates sort/page/size gestures into the canonical
//! [`PageRequest`] shape the REST API expects; it never fetches anything
//! itself. [`Selection`] is the in-page multi-select set. The pagination
//! widget is 0-based while the API is 1-based; [`ListQuery::request`] is the
//! single place that conversion happens.

use std::collections::BTreeSet;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Canonical fetch request: 1-based page index, page size, sort key and
/// direction.
#[derive(Clone, PartialEq, Debug)]
pub struct PageRequest {
    pub page: u64,
    pub size: u64,
    pub sort: String,
    pub direction: SortDirection,
}

impl PageRequest {
    pub fn query(&self) -> String {
        format!(
            "page={}&size={}&sort={},{}",
            self.page,
            self.size,
            self.sort,
            self.direction.as_str()
        )
    }
}

/// Current sort and pagination parameters of one list screen. `page` is the
/// 0-based index the pagination widget works with.
#[derive(Clone, PartialEq, Debug)]
pub struct ListQuery {
    pub sort: String,
    pub direction: SortDirection,
    pub page: u64,
    pub per_page: u64,
}

impl ListQuery {
    pub fn new(sort: impl Into<String>, per_page: u64) -> Self {
        Self {
            sort: sort.into(),
            direction: SortDirection::Asc,
            page: 0,
            per_page,
        }
    }

    /// The 0-based to 1-based conversion boundary.
    pub fn request(&self) -> PageRequest {
        PageRequest {
            page: self.page + 1,
            size: self.per_page,
            sort: self.sort.clone(),
            direction: self.direction,
        }
    }

    /// One sort-header click: a new field starts ascending, the current
    /// field toggles direction. The page is left alone.
    pub fn sort_by(&mut self, field: &str) -> PageRequest {
        if self.sort == field {
            self.direction = self.direction.toggled();
        } else {
            self.sort = field.to_string();
            self.direction = SortDirection::Asc;
        }
        self.request()
    }

    pub fn set_page(&mut self, page: u64) -> PageRequest {
        self.page = page;
        self.request()
    }

    /// Changing the page size resets to the first page so the request can
    /// never point past the end of the shorter page range.
    pub fn set_per_page(&mut self, per_page: u64) -> PageRequest {
        self.per_page = per_page;
        self.page = 0;
        self.request()
    }
}

/// Ids marked selected within the currently displayed page. Cleared by the
/// list routes whenever a fetch resolves, so stale ids never outlive the
/// rows they came from.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Selection {
    ids: BTreeSet<i64>,
}

impl Selection {
    /// Symmetric-difference update for one row checkbox.
    pub fn toggle(&mut self, id: i64) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Select-all checkbox: checked selects every rendered row, unchecked
    /// empties the set.
    pub fn set_all(&mut self, checked: bool, ids: &[i64]) {
        if checked {
            self.ids = ids.iter().copied().collect();
        } else {
            self.ids.clear();
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn all_selected(&self, ids: &[i64]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.ids.contains(id))
    }
}

/// 1-based display bounds backing the "{from}-{to} of {count}" summary.
/// An empty list, or a page index that starts past the end of a shrunken
/// result set, shows 0-0.
pub fn display_range(page: u64, per_page: u64, total: u64) -> (u64, u64) {
    let from = page * per_page + 1;
    if total == 0 || from > total {
        return (0, 0);
    }
    let to = ((page + 1) * per_page).min(total);
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests the pagination index conversion.
    ///
    /// Verifies that the widget's first page (index 0) translates to a
    /// 1-based API request for page 1.
    ///
    /// Expected: page=1 in the request and query string
    #[test]
    fn first_page_requests_page_one() {
        let mut query = ListQuery::new("fullName", 10);

        let request = query.set_page(0);

        assert_eq!(request.page, 1);
        assert_eq!(request.query(), "page=1&size=10&sort=fullName,asc");
    }

    /// Tests page navigation.
    ///
    /// Verifies that widget index N maps to API page N+1 with the sort
    /// parameters carried along.
    ///
    /// Expected: page=4 for index 3
    #[test]
    fn page_index_offsets_by_one() {
        let mut query = ListQuery::new("createdDate", 25);
        query.direction = SortDirection::Desc;

        let request = query.set_page(3);

        assert_eq!(request.page, 4);
        assert_eq!(request.query(), "page=4&size=25&sort=createdDate,desc");
    }

    /// Tests changing the page size on a deep page.
    ///
    /// Verifies the query resets to the first page so the new request can
    /// never be out of range.
    ///
    /// Expected: index 0 / API page 1 with the new size
    #[test]
    fn per_page_change_resets_to_first_page() {
        let mut query = ListQuery::new("fullName", 10);
        query.set_page(5);

        let request = query.set_per_page(50);

        assert_eq!(query.page, 0);
        assert_eq!(request.page, 1);
        assert_eq!(request.size, 50);
    }

    /// Tests sorting by a new column.
    ///
    /// Verifies the direction defaults to ascending and the page is
    /// preserved.
    ///
    /// Expected: street ascending, still on the same page
    #[test]
    fn new_sort_field_defaults_ascending() {
        let mut query = ListQuery::new("fullName", 10);
        query.direction = SortDirection::Desc;
        query.set_page(2);

        let request = query.sort_by("street");

        assert_eq!(request.sort, "street");
        assert_eq!(request.direction, SortDirection::Asc);
        assert_eq!(request.page, 3);
    }

    /// Tests clicking the active sort column again.
    ///
    /// Verifies repeated clicks toggle the direction back and forth.
    ///
    /// Expected: desc after one repeat, asc after two
    #[test]
    fn repeated_sort_click_toggles_direction() {
        let mut query = ListQuery::new("fullName", 10);

        assert_eq!(query.sort_by("fullName").direction, SortDirection::Desc);
        assert_eq!(query.sort_by("fullName").direction, SortDirection::Asc);
    }

    /// Tests the select-all round trip.
    ///
    /// Verifies checking selects exactly the rendered ids and unchecking
    /// restores an empty set.
    ///
    /// Expected: 3 ids selected, then none
    #[test]
    fn select_all_round_trip() {
        let mut selection = Selection::default();
        let ids = [1, 2, 3];

        selection.set_all(true, &ids);
        assert_eq!(selection.len(), 3);
        assert!(selection.all_selected(&ids));

        selection.set_all(false, &ids);
        assert!(selection.is_empty());
    }

    /// Tests single-row toggling.
    ///
    /// Verifies the symmetric-difference behavior: absent inserts,
    /// present removes, order of operations irrelevant.
    ///
    /// Expected: membership flips per toggle
    #[test]
    fn toggle_is_symmetric_difference() {
        let mut selection = Selection::default();

        selection.toggle(42);
        assert!(selection.contains(42));

        selection.toggle(7);
        selection.toggle(42);
        assert!(!selection.contains(42));
        assert!(selection.contains(7));
        assert_eq!(selection.len(), 1);
    }

    /// Tests the selection policy on page replacement.
    ///
    /// Verifies that clearing (what the routes do when a fetch resolves)
    /// drops every previously selected id.
    ///
    /// Expected: empty selection after the page is replaced
    #[test]
    fn replacing_page_resets_selection() {
        let mut selection = Selection::default();
        selection.set_all(true, &[10, 11, 12]);

        selection.clear();

        assert!(selection.is_empty());
        assert!(!selection.contains(10));
    }

    /// Tests partial selection states used by the header checkbox.
    ///
    /// Verifies `all_selected` is false for partial sets and for empty
    /// pages.
    ///
    /// Expected: false when partial, false for no rows
    #[test]
    fn all_selected_requires_every_row() {
        let mut selection = Selection::default();
        selection.toggle(1);

        assert!(!selection.all_selected(&[1, 2]));
        assert!(!selection.all_selected(&[]));
        selection.toggle(2);
        assert!(selection.all_selected(&[1, 2]));
    }

    /// Tests the displayed range summary.
    ///
    /// Verifies full pages, the clamped last page, and the empty list.
    ///
    /// Expected: 11-20, 21-23, and 0-0 respectively
    #[test]
    fn display_range_bounds() {
        assert_eq!(display_range(1, 10, 55), (11, 20));
        assert_eq!(display_range(2, 10, 23), (21, 23));
        assert_eq!(display_range(0, 10, 0), (0, 0));
    }

    /// Tests a stale page index against a shrunken result set.
    ///
    /// Verifies the summary collapses to the empty range instead of
    /// inverting when the old page starts past the new total.
    ///
    /// Expected: 0-0 for page index 2 of 5 rows
    #[test]
    fn stale_page_past_end_shows_empty_range() {
        assert_eq!(display_range(2, 10, 5), (0, 0));
        assert_eq!(display_range(0, 10, 5), (1, 5));
    }
}
