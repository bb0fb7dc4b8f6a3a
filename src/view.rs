//! TableView - the view engine itself.
//!
//! A [`TableView`] owns a row collection and a [`QueryState`] and keeps a
//! derived index order consistent with them. Every mutation re-runs the
//! fixed pipeline (global filter, column filters, sort, page clamp), so a
//! caller can read the derived outputs immediately after any setter without
//! observing transient out-of-range state.

use crate::query::{QueryState, SortDirection, SortIndicator};
use crate::row::FieldAccess;
use crate::state::ViewStateSnapshot;
use crate::value;
use std::cmp::Ordering;

/// A filtered, sorted, paginated view over an in-memory row collection.
///
/// The view never mutates its rows; it maintains an index order over them.
/// All operations are synchronous, deterministic, and infallible.
#[derive(Debug, Clone)]
pub struct TableView<R: FieldAccess> {
    /// The authoritative row collection, as supplied by the caller
    rows: Vec<R>,
    /// Current filter/sort/page configuration
    state: QueryState,
    /// Indices into `rows` after filtering and sorting; pagination slices
    /// this
    order: Vec<usize>,
}

impl<R: FieldAccess> TableView<R> {
    /// Create a view over `rows` showing `page_size` rows per page.
    ///
    /// A `page_size` of zero is clamped to 1.
    pub fn new(rows: Vec<R>, page_size: usize) -> Self {
        Self::from_state(rows, QueryState::new(page_size))
    }

    /// Create a view with an existing query state, e.g. one restored from a
    /// snapshot. The state is normalized and the page clamped against the
    /// supplied rows.
    pub fn from_state(rows: Vec<R>, mut state: QueryState) -> Self {
        state.normalize();
        let mut view = Self {
            rows,
            state,
            order: Vec::new(),
        };
        view.recompute();
        view
    }

    /// Replace the row collection wholesale, keeping the current query
    /// state. The page is re-clamped against the new filtered size.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.recompute();
    }

    /// The full row collection, in input order, unfiltered.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// The current query state.
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    /// Set the free-text query. Matches case-insensitively against the text
    /// form of every field. Resets the page to 1.
    pub fn set_global_query(&mut self, query: impl Into<String>) {
        self.state.set_global_query(query);
        self.recompute();
    }

    /// Set or clear an exact-match (case-insensitive) filter on one field.
    /// Resets the page to 1.
    pub fn set_column_filter(&mut self, field: impl Into<crate::FieldName>, value: Option<String>) {
        self.state.set_column_filter(field, value);
        self.recompute();
    }

    /// Set a column filter from a raw select-element value; the `"All"`
    /// sentinel clears the filter. Resets the page to 1.
    pub fn set_column_filter_from_select(
        &mut self,
        field: impl Into<crate::FieldName>,
        raw: &str,
    ) {
        self.state.set_column_filter_from_select(field, raw);
        self.recompute();
    }

    /// Toggle sorting on a column: ascending first, then flipping between
    /// descending and ascending. Does not reset the page.
    pub fn request_sort(&mut self, field: impl Into<crate::FieldName>) {
        self.state.request_sort(field);
        self.recompute();
    }

    /// Jump to a page. Out-of-range values are silently clamped.
    pub fn set_page(&mut self, page: usize) {
        self.state.set_page(page);
        self.recompute();
    }

    /// Rows on the current page, in view order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &R> + '_ {
        let start = (self.state.page() - 1) * self.state.page_size();
        self.order
            .iter()
            .skip(start)
            .take(self.state.page_size())
            .map(move |&i| &self.rows[i])
    }

    /// Number of rows after filtering, before pagination.
    pub fn total_filtered(&self) -> usize {
        self.order.len()
    }

    /// Number of pages; 0 when nothing matches.
    pub fn total_pages(&self) -> usize {
        self.order.len().div_ceil(self.state.page_size())
    }

    /// The current page, 1-based and always in range.
    pub fn current_page(&self) -> usize {
        self.state.page()
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.state.page_size()
    }

    /// 1-based inclusive bounds of the visible slice, for "Showing X to Y
    /// of N" labels. `None` when nothing matches.
    pub fn item_range(&self) -> Option<(usize, usize)> {
        if self.order.is_empty() {
            return None;
        }
        let start = (self.state.page() - 1) * self.state.page_size() + 1;
        let end = (self.state.page() * self.state.page_size()).min(self.order.len());
        Some((start, end))
    }

    /// Header marker for a column.
    pub fn sort_indicator(&self, field: &str) -> SortIndicator {
        self.state.sort_indicator(field)
    }

    /// Capture the current query state as a serializable snapshot.
    pub fn export_state(&self) -> ViewStateSnapshot {
        ViewStateSnapshot::new(self.state.clone())
    }

    /// Replace the query state from a snapshot and re-run the pipeline.
    /// A snapshot taken against a different collection degrades gracefully:
    /// the page is clamped and stale filters simply match what they match.
    pub fn import_state(&mut self, snapshot: ViewStateSnapshot) {
        let mut state = snapshot.into_state();
        state.normalize();
        self.state = state;
        self.recompute();
    }

    /// Re-run the pipeline: filter, sort, clamp. Pagination itself is a
    /// cheap slice done on read.
    fn recompute(&mut self) {
        let query = self.state.global_query().to_lowercase();
        let filters: Vec<(&str, String)> = self
            .state
            .column_filters()
            .iter()
            .map(|(field, want)| (field.as_str(), want.to_lowercase()))
            .collect();

        self.order = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| {
                let global_match = query.is_empty()
                    || row.values().iter().any(|v| value::contains(v, &query));
                global_match
                    && filters.iter().all(|(field, want)| {
                        row.field(field).is_some_and(|v| value::equals(v, want))
                    })
            })
            .map(|(i, _)| i)
            .collect();

        if let Some(sort) = self.state.sort().cloned() {
            let rows = &self.rows;
            // sort_by is stable: rows comparing equal keep their input
            // order, including every row with a null or missing sort key.
            self.order.sort_by(|&a, &b| {
                let a = rows[a].field(&sort.field).filter(|v| !v.is_null());
                let b = rows[b].field(&sort.field).filter(|v| !v.is_null());
                match (a, b) {
                    (None, None) => Ordering::Equal,
                    // Nulls last regardless of direction.
                    (None, Some(_)) => Ordering::Greater,
                    (Some(_), None) => Ordering::Less,
                    (Some(a), Some(b)) => {
                        let ord = value::compare(a, b);
                        match sort.direction {
                            SortDirection::Ascending => ord,
                            SortDirection::Descending => ord.reverse(),
                        }
                    }
                }
            });
        }

        let total_pages = self.total_pages();
        self.state.clamp_page(total_pages);
    }
}
