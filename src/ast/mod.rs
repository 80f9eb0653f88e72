pub mod builders;
pub mod components;
pub mod expand;
pub mod query;
pub mod values;
pub mod verbs;

pub use self::builders::{build_order_by, OrderTerm};
pub use self::components::{
    AggregatedColumn, Column, Component, Condition, FromClause, LogicalOp, QueryColumn, RawColumn,
    SelectColumn,
};
pub use self::expand::{expand_all, expand_expression};
pub use self::query::{clause, Query};
pub use self::values::Value;
