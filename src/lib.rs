//! # TableView Engine
//!
//! A deterministic filter/sort/paginate engine for in-memory record
//! collections.
//!
//! This crate provides the core logic behind tabular screens: given a
//! collection of uniformly-shaped rows, a free-text query, per-column
//! filters, a sort column, and a page number, it produces the slice of rows
//! the screen should render plus the metadata a pagination control needs.
//!
//! ## Design Principles
//!
//! - **No IO**: the engine has no knowledge of files, network, or platform
//! - **Deterministic**: the same rows and query state always produce the
//!   same view
//! - **Never fails**: every public table operation clamps or normalizes bad
//!   input instead of returning an error
//! - **Testable**: pure logic, no mocks needed
//!
//! ## Core Concepts
//!
//! ### Rows
//!
//! Rows are anything implementing [`FieldAccess`]: a named field lookup
//! plus enumeration of present values. Implementations are provided for
//! `serde_json::Value` objects and `serde_json::Map`. The engine never
//! mutates rows; it only reorders indices over them.
//!
//! ### Query state
//!
//! [`QueryState`] holds the current free-text query, column filters, sort
//! column/direction, and page. Query and filter changes reset the page to 1;
//! sort and page changes leave filters alone.
//!
//! ### The pipeline
//!
//! Every mutation recomputes the view in a fixed order:
//!
//! 1. **Global filter** - keep rows where any field's text form contains the
//!    query, case-insensitively
//! 2. **Column filters** - keep rows whose named field's text form equals
//!    the filter value, case-insensitively
//! 3. **Sort** - stable order by the sort column; null and missing values
//!    always sort last
//! 4. **Paginate** - slice the current page, clamping the page number to the
//!    available range
//!
//! ### View-state snapshots
//!
//! [`ViewStateSnapshot`] captures the query state (not the rows) so a host
//! application can restore a screen's view the way it was left. Snapshots
//! serialize to JSON and carry a format version.
//!
//! ## Quick Start
//!
//! ```rust
//! use tableview_engine::TableView;
//! use serde_json::json;
//!
//! let rows = vec![
//!     json!({"name": "Alice Smith", "status": "Active", "age": 34}),
//!     json!({"name": "Bob Jones", "status": "Suspended", "age": 41}),
//!     json!({"name": "Cara Smith", "status": "Active", "age": 29}),
//! ];
//!
//! let mut view = TableView::new(rows, 2);
//! assert_eq!(view.total_filtered(), 3);
//! assert_eq!(view.total_pages(), 2);
//!
//! view.set_global_query("smith");
//! assert_eq!(view.total_filtered(), 2);
//!
//! view.request_sort("age");
//! let ages: Vec<i64> = view
//!     .visible_rows()
//!     .map(|r| r["age"].as_i64().unwrap())
//!     .collect();
//! assert_eq!(ages, vec![29, 34]);
//! ```

pub mod error;
pub mod query;
pub mod row;
pub mod state;
pub mod value;
pub mod view;

// Re-export main types at crate root
pub use error::Error;
pub use query::{QueryState, SortDirection, SortIndicator, SortSpec, ALL_FILTER_SENTINEL};
pub use row::FieldAccess;
pub use state::{ViewStateSnapshot, STATE_FORMAT_VERSION};
pub use view::TableView;

/// Type aliases for clarity
pub type FieldName = String;
pub type FormatVersion = u32;
