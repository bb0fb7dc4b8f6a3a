//! Query state for a table view.
//!
//! [`QueryState`] holds everything that configures a view: the free-text
//! query, column filters, sort column/direction, and page. It owns the state
//! transition rules (query and filter changes reset the page, sort is a
//! two-state toggle) but knows nothing about rows; the view layer applies it
//! to a collection and clamps the page against the filtered size.

use crate::FieldName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// UI sentinel meaning "no restriction" in a column-filter select.
///
/// The sentinel is translated at the binding boundary only; inside the
/// engine an unrestricted column is simply absent from the filter map.
pub const ALL_FILTER_SENTINEL: &str = "All";

/// Sort direction for a sorted column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// The column a view is sorted by, and in which direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortSpec {
    /// Field name to sort by
    pub field: FieldName,
    /// Sort direction
    pub direction: SortDirection,
}

/// Marker for rendering a column header arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    /// Column is not the sort column
    None,
    /// Column is sorted ascending
    Ascending,
    /// Column is sorted descending
    Descending,
}

/// Filter, sort, and pagination configuration for one table view.
///
/// Serializes with deterministic field order (filters are a `BTreeMap`).
/// The page number is 1-based; the owning view clamps it against the
/// filtered result size after every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryState {
    /// Free-text query matched against every field; empty means no filter
    global_query: String,
    /// Exact-match filters by field name; absence means unrestricted
    column_filters: BTreeMap<FieldName, String>,
    /// Current sort column and direction, if any
    sort: Option<SortSpec>,
    /// Current page, 1-based
    page: usize,
    /// Rows per page, at least 1, fixed at construction
    page_size: usize,
}

impl QueryState {
    /// Create a fresh state on page 1 with no filters or sort.
    ///
    /// A `page_size` of zero is clamped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            global_query: String::new(),
            column_filters: BTreeMap::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// The current free-text query.
    pub fn global_query(&self) -> &str {
        &self.global_query
    }

    /// Set the free-text query. Resets the page to 1.
    pub fn set_global_query(&mut self, query: impl Into<String>) {
        self.global_query = query.into();
        self.page = 1;
    }

    /// The filter value for a field, if one is set.
    pub fn column_filter(&self, field: &str) -> Option<&str> {
        self.column_filters.get(field).map(String::as_str)
    }

    /// All column filters currently in effect.
    pub fn column_filters(&self) -> &BTreeMap<FieldName, String> {
        &self.column_filters
    }

    /// Set or clear the filter for a field. Resets the page to 1.
    pub fn set_column_filter(&mut self, field: impl Into<FieldName>, value: Option<String>) {
        let field = field.into();
        match value {
            Some(value) => {
                self.column_filters.insert(field, value);
            }
            None => {
                self.column_filters.remove(&field);
            }
        }
        self.page = 1;
    }

    /// Set a column filter from a raw select-element value, treating the
    /// [`ALL_FILTER_SENTINEL`] as "clear". The sentinel comparison is exact:
    /// a user-entered value of `"all"` is a real filter.
    pub fn set_column_filter_from_select(&mut self, field: impl Into<FieldName>, raw: &str) {
        let value = if raw == ALL_FILTER_SENTINEL {
            None
        } else {
            Some(raw.to_string())
        };
        self.set_column_filter(field, value);
    }

    /// The current sort column and direction, if any.
    pub fn sort(&self) -> Option<&SortSpec> {
        self.sort.as_ref()
    }

    /// Toggle sorting on a column.
    ///
    /// Sorting a new column starts ascending; sorting the current column
    /// flips the direction. There is no third "unsorted" state. Does not
    /// reset the page.
    pub fn request_sort(&mut self, field: impl Into<FieldName>) {
        let field = field.into();
        self.sort = match self.sort.take() {
            Some(spec) if spec.field == field => Some(SortSpec {
                field,
                direction: spec.direction.toggled(),
            }),
            _ => Some(SortSpec {
                field,
                direction: SortDirection::Ascending,
            }),
        };
    }

    /// Header marker for a column.
    pub fn sort_indicator(&self, field: &str) -> SortIndicator {
        match &self.sort {
            Some(spec) if spec.field == field => match spec.direction {
                SortDirection::Ascending => SortIndicator::Ascending,
                SortDirection::Descending => SortIndicator::Descending,
            },
            _ => SortIndicator::None,
        }
    }

    /// The current page, 1-based.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Set the page. Zero is treated as page 1; the upper bound is clamped
    /// by the owning view, which knows the filtered size.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Clamp the page to `[1, max(1, total_pages)]`.
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.page = self.page.clamp(1, total_pages.max(1));
    }

    /// Restore invariants on state that arrived from outside the
    /// constructor, e.g. a deserialized snapshot.
    pub(crate) fn normalize(&mut self) {
        self.page_size = self.page_size.max(1);
        self.page = self.page.max(1);
    }
}
