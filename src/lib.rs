//! # fluentsql: fluent SELECT composition
//!
//! Build a query by chaining calls that append components to clause
//! buckets, then compile it into dialect SQL plus ordered bindings.
//!
//! ## Quick Example
//!
//! ```
//! use fluentsql::prelude::*;
//!
//! let q = Query::table("orders")
//!     .select(["customer_id"])
//!     .select_sum_with("total", |f| Some(f.where_eq("status", "paid")))
//!     .select_row_number("rn", &[OrderTerm::desc("total")], []);
//!
//! let compiled = q.to_sql();
//! assert_eq!(
//!     compiled.sql,
//!     "SELECT customer_id, SUM(total) FILTER (WHERE status = $1), \
//!      ROW_NUMBER() OVER (ORDER BY total DESC) AS [RN] FROM orders"
//! );
//! assert_eq!(compiled.bindings, vec![Value::from("paid")]);
//! ```
//!
//! ## Components
//!
//! | Builder                    | Component          |
//! |----------------------------|--------------------|
//! | `select`                   | `Column`           |
//! | `select_raw`, `select_row_number*` | `RawColumn` |
//! | `select_aggregate*`, `select_sum`, ... | `AggregatedColumn` |
//! | `select_query`, `select_with` | `QueryColumn`   |

pub mod ast;
pub mod config;
pub mod error;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::config::{CompilerConfig, Config};
    pub use crate::error::*;
    pub use crate::transpiler::{Compiler, Dialect, SqlResult, ToSql};
}
