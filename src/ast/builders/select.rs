//! SELECT clause builders.
//!
//! Every method appends to the `select` bucket in call order and never
//! edits an earlier component. Queries passed in as sub-selects or filters
//! are cloned before they are stored.

use crate::ast::builders::order::{build_order_by, OrderTerm};
use crate::ast::expand::expand_all;
use crate::ast::query::clause;
use crate::ast::{
    verbs, AggregatedColumn, Column, Component, Query, QueryColumn, RawColumn, SelectColumn,
    Value,
};
use crate::error::{QueryError, QueryResult};

impl Query {
    /// Select columns, expanding `table.{a, b}` lists.
    ///
    /// # Example
    /// ```
    /// use fluentsql::ast::Query;
    /// let q = Query::table("users").select(["id", "users.{name, email}"]);
    /// assert_eq!(q.select_columns().count(), 3);
    /// ```
    pub fn select<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.method = clause::SELECT.to_string();
        for name in expand_all(columns) {
            self.push_select(SelectColumn::Column(Column { name }));
        }
        self
    }

    /// Select a verbatim expression.
    ///
    /// Placeholder count is not checked against `bindings`.
    pub fn select_raw(
        mut self,
        sql: impl Into<String>,
        bindings: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.method = clause::SELECT.to_string();
        self.push_select(SelectColumn::Raw(RawColumn {
            expression: sql.into(),
            bindings: bindings.into_iter().collect(),
        }));
        self
    }

    /// Select a sub-query as a column. `query` is cloned; later changes to
    /// it do not reach this query.
    pub fn select_query(self, query: &Query, alias: impl Into<String>) -> Self {
        self.push_query_column(query.clone(), alias)
    }

    /// Build a sub-query on a fresh child and select it as a column.
    ///
    /// # Example
    /// ```
    /// use fluentsql::ast::Query;
    /// let q = Query::table("users")
    ///     .select(["id"])
    ///     .select_with(|q| Some(q.from("orders").select_raw("count(*)", [])), "orders")
    ///     .unwrap();
    /// assert_eq!(q.select_columns().count(), 2);
    /// ```
    pub fn select_with<F>(self, build: F, alias: impl Into<String>) -> QueryResult<Self>
    where
        F: FnOnce(Query) -> Option<Query>,
    {
        let alias = alias.into();
        match build(self.new_child()) {
            Some(query) => Ok(self.push_query_column(query, alias)),
            None => Err(QueryError::missing_subquery(alias)),
        }
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    /// Select `aggregate(column)`.
    pub fn select_aggregate(self, aggregate: impl Into<String>, column: impl Into<String>) -> Self {
        self.push_aggregate(aggregate, column, None)
    }

    /// Select `aggregate(column)` restricted by a copy of `filter`.
    pub fn select_aggregate_filtered(
        self,
        aggregate: impl Into<String>,
        column: impl Into<String>,
        filter: &Query,
    ) -> Self {
        self.push_aggregate(aggregate, column, Some(filter.clone()))
    }

    /// Select `aggregate(column)` with a filter built on a fresh child.
    /// A callback returning `None` means no filter.
    pub fn select_aggregate_with<F>(
        self,
        aggregate: impl Into<String>,
        column: impl Into<String>,
        filter: F,
    ) -> Self
    where
        F: FnOnce(Query) -> Option<Query>,
    {
        let filter = filter(self.new_child());
        self.push_aggregate(aggregate, column, filter)
    }

    pub fn select_sum(self, column: impl Into<String>) -> Self {
        self.select_aggregate("sum", column)
    }

    pub fn select_sum_with<F>(self, column: impl Into<String>, filter: F) -> Self
    where
        F: FnOnce(Query) -> Option<Query>,
    {
        self.select_aggregate_with("sum", column, filter)
    }

    pub fn select_count(self, column: impl Into<String>) -> Self {
        self.select_aggregate("count", column)
    }

    pub fn select_count_with<F>(self, column: impl Into<String>, filter: F) -> Self
    where
        F: FnOnce(Query) -> Option<Query>,
    {
        self.select_aggregate_with("count", column, filter)
    }

    pub fn select_avg(self, column: impl Into<String>) -> Self {
        self.select_aggregate("avg", column)
    }

    pub fn select_avg_with<F>(self, column: impl Into<String>, filter: F) -> Self
    where
        F: FnOnce(Query) -> Option<Query>,
    {
        self.select_aggregate_with("avg", column, filter)
    }

    pub fn select_min(self, column: impl Into<String>) -> Self {
        self.select_aggregate("min", column)
    }

    pub fn select_min_with<F>(self, column: impl Into<String>, filter: F) -> Self
    where
        F: FnOnce(Query) -> Option<Query>,
    {
        self.select_aggregate_with("min", column, filter)
    }

    pub fn select_max(self, column: impl Into<String>) -> Self {
        self.select_aggregate("max", column)
    }

    pub fn select_max_with<F>(self, column: impl Into<String>, filter: F) -> Self
    where
        F: FnOnce(Query) -> Option<Query>,
    {
        self.select_aggregate_with("max", column, filter)
    }

    // =========================================================================
    // ROW_NUMBER()
    // =========================================================================

    /// Select `ROW_NUMBER()`, ordered when `order_by` is non-empty.
    ///
    /// The alias is upper-cased and trimmed.
    ///
    /// # Example
    /// ```
    /// use fluentsql::ast::Query;
    /// use fluentsql::ast::builders::OrderTerm;
    /// let q = Query::table("users")
    ///     .select_row_number("rn", &[OrderTerm::desc("Id"), "Name".into()], []);
    /// ```
    pub fn select_row_number(
        self,
        alias: &str,
        order_by: &[OrderTerm],
        bindings: impl IntoIterator<Item = Value>,
    ) -> Self {
        let alias = normalize_alias(alias);
        let order = build_order_by(order_by);
        let statement = if order.trim().is_empty() {
            format!("{} {} [{}]", verbs::ROW_NUMBER, verbs::AS, alias)
        } else {
            format!(
                "{} {}) {} [{}]",
                verbs::ROW_NUMBER_ORDER_BY,
                order,
                verbs::AS,
                alias
            )
        };
        self.select_raw(statement, bindings)
    }

    /// Select `ROW_NUMBER() OVER (PARTITION BY ...)`.
    ///
    /// Falls back to [`Query::select_row_number`] when `partition` is empty.
    pub fn select_row_number_partitioned(
        self,
        alias: &str,
        partition: &[&str],
        order_by: &[OrderTerm],
        bindings: impl IntoIterator<Item = Value>,
    ) -> Self {
        if partition.is_empty() {
            return self.select_row_number(alias, order_by, bindings);
        }

        let alias = normalize_alias(alias);
        let order = build_order_by(order_by);
        let order_clause = if order.trim().is_empty() {
            String::new()
        } else {
            format!(" {} {}", verbs::ORDER_BY, order)
        };
        let statement = format!(
            "{} {}{}) {} [{}]",
            verbs::ROW_NUMBER_PARTITIONED,
            partition.join(","),
            order_clause,
            verbs::AS,
            alias
        );
        self.select_raw(statement, bindings)
    }

    /// Number rows in random order.
    pub fn select_row_number_at_random(
        self,
        alias: &str,
        bindings: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.select_row_number(alias, &[OrderTerm::asc(verbs::RANDOM_ID)], bindings)
    }

    /// Number rows in random order within each partition.
    pub fn select_row_number_at_random_partitioned(
        self,
        alias: &str,
        partition: &[&str],
        bindings: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.select_row_number_partitioned(
            alias,
            partition,
            &[OrderTerm::asc(verbs::RANDOM_ID)],
            bindings,
        )
    }

    fn push_select(&mut self, column: SelectColumn) {
        self.add_component(clause::SELECT, Component::Select(column));
    }

    fn push_query_column(mut self, query: Query, alias: impl Into<String>) -> Self {
        self.method = clause::SELECT.to_string();
        self.push_select(SelectColumn::Query(QueryColumn {
            query: Box::new(query.as_alias(alias)),
        }));
        self
    }

    fn push_aggregate(
        mut self,
        aggregate: impl Into<String>,
        column: impl Into<String>,
        filter: Option<Query>,
    ) -> Self {
        self.method = clause::SELECT.to_string();
        self.push_select(SelectColumn::Aggregated(AggregatedColumn {
            column: Column::new(column),
            aggregate: aggregate.into(),
            filter: filter.map(Box::new),
        }));
        self
    }
}

fn normalize_alias(alias: &str) -> String {
    alias.to_uppercase().trim().to_string()
}
