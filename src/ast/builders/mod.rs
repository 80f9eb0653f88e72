//! Fluent builders for the select bucket.
//!
//! - `select` - `Query::select*` methods (columns, raw, sub-queries,
//!   aggregates, ROW_NUMBER())
//! - `order` - ORDER BY fragments for window functions

pub mod order;
pub mod select;

pub use order::{build_order_by, OrderTerm};
