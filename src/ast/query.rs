use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ast::{Component, Condition, FromClause, LogicalOp, SelectColumn, Value};

/// Bucket names used by the builders and the transpiler.
pub mod clause {
    pub const SELECT: &str = "select";
    pub const FROM: &str = "from";
    pub const WHERE: &str = "where";
}

/// The mutable query aggregate: ordered components grouped by clause.
///
/// `Clone` is a deep copy. Nested queries are owned (`Box<Query>`), so a
/// clone never shares a component list with its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Intent of the most recent builder call (`select`)
    #[serde(default = "default_method")]
    pub method: String,
    /// Alias used when this query is embedded as a column or table
    #[serde(default)]
    pub alias: Option<String>,
    /// Clause name -> components in call order
    #[serde(default)]
    components: BTreeMap<String, Vec<Component>>,
}

fn default_method() -> String {
    clause::SELECT.to_string()
}

impl Default for Query {
    fn default() -> Self {
        Self {
            method: default_method(),
            alias: None,
            components: BTreeMap::new(),
        }
    }
}

impl Query {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty query reading from `table`.
    pub fn table(table: impl Into<String>) -> Self {
        Self::new().from(table)
    }

    /// A fresh, isolated query for building filters and sub-selects.
    pub fn new_child(&self) -> Query {
        Query::new()
    }

    /// Set the alias used when this query is embedded in another one.
    pub fn as_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Append a component to the end of `clause`'s bucket.
    pub fn add_component(&mut self, clause: &str, component: Component) -> &mut Self {
        tracing::debug!("Registering {} component", clause);
        self.components
            .entry(clause.to_string())
            .or_default()
            .push(component);
        self
    }

    /// Components of `clause` in insertion order (empty if none).
    pub fn get_components(&self, clause: &str) -> &[Component] {
        self.components
            .get(clause)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_component(&self, clause: &str) -> bool {
        !self.get_components(clause).is_empty()
    }

    /// Remove every component of `clause`.
    pub fn clear_component(&mut self, clause: &str) -> &mut Self {
        self.components.remove(clause);
        self
    }

    /// Read-only ordered view of the select bucket.
    pub fn select_columns(&self) -> impl Iterator<Item = &SelectColumn> {
        self.get_components(clause::SELECT)
            .iter()
            .filter_map(|c| match c {
                Component::Select(col) => Some(col),
                _ => None,
            })
    }

    /// The registered table source, if any.
    pub fn from_clause(&self) -> Option<&FromClause> {
        self.get_components(clause::FROM)
            .iter()
            .rev()
            .find_map(|c| match c {
                Component::From(from) => Some(from),
                _ => None,
            })
    }

    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.get_components(clause::WHERE)
            .iter()
            .filter_map(|c| match c {
                Component::Where(cond) => Some(cond),
                _ => None,
            })
    }

    // =========================================================================
    // FROM / WHERE
    // =========================================================================

    /// Set the table source. The last call wins.
    pub fn from(mut self, table: impl Into<String>) -> Self {
        self.clear_component(clause::FROM);
        self.add_component(
            clause::FROM,
            Component::From(FromClause {
                table: table.into(),
            }),
        );
        self
    }

    /// Add `column operator ?`, joined with AND.
    ///
    /// # Example
    /// ```
    /// use fluentsql::ast::Query;
    /// let q = Query::table("orders")
    ///     .where_op("total", ">", 100)
    ///     .where_op("status", "=", "paid");
    /// assert_eq!(q.conditions().count(), 2);
    /// ```
    pub fn where_op(
        self,
        column: impl AsRef<str>,
        operator: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Self {
        self.push_basic(LogicalOp::And, column, operator, value)
    }

    /// Add `column = ?`, joined with AND.
    pub fn where_eq(self, column: impl AsRef<str>, value: impl Into<Value>) -> Self {
        self.where_op(column, "=", value)
    }

    /// Add `column operator ?`, joined with OR.
    pub fn or_where(
        self,
        column: impl AsRef<str>,
        operator: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Self {
        self.push_basic(LogicalOp::Or, column, operator, value)
    }

    /// Add a verbatim predicate, joined with AND.
    pub fn where_raw(self, sql: impl Into<String>, bindings: impl IntoIterator<Item = Value>) -> Self {
        self.push_raw(LogicalOp::And, sql, bindings)
    }

    /// Add a verbatim predicate, joined with OR.
    pub fn or_where_raw(
        self,
        sql: impl Into<String>,
        bindings: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.push_raw(LogicalOp::Or, sql, bindings)
    }

    /// Add a parenthesized group built on a child query, joined with AND.
    ///
    /// # Example
    /// ```
    /// use fluentsql::ast::Query;
    /// let q = Query::table("users")
    ///     .where_eq("active", true)
    ///     .where_nested(|q| q.where_eq("role", "admin").or_where("role", "=", "owner"));
    /// assert_eq!(q.conditions().count(), 2);
    /// ```
    pub fn where_nested<F>(mut self, build: F) -> Self
    where
        F: FnOnce(Query) -> Query,
    {
        let nested = build(self.new_child());
        self.add_component(
            clause::WHERE,
            Component::Where(Condition::Nested {
                query: Box::new(nested),
                logic: LogicalOp::And,
            }),
        );
        self
    }

    fn push_basic(
        mut self,
        logic: LogicalOp,
        column: impl AsRef<str>,
        operator: impl AsRef<str>,
        value: impl Into<Value>,
    ) -> Self {
        self.add_component(
            clause::WHERE,
            Component::Where(Condition::Basic {
                column: column.as_ref().to_string(),
                operator: operator.as_ref().trim().to_string(),
                value: value.into(),
                logic,
            }),
        );
        self
    }

    fn push_raw(
        mut self,
        logic: LogicalOp,
        sql: impl Into<String>,
        bindings: impl IntoIterator<Item = Value>,
    ) -> Self {
        self.add_component(
            clause::WHERE,
            Component::Where(Condition::Raw {
                expression: sql.into(),
                bindings: bindings.into_iter().collect(),
                logic,
            }),
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{Column, RawColumn};

    fn column(name: &str) -> Component {
        Component::Select(SelectColumn::Column(Column::new(name)))
    }

    #[test]
    fn test_new_query_is_empty_select() {
        let q = Query::new();
        assert_eq!(q.method, "select");
        assert!(!q.has_component(clause::SELECT));
        assert!(q.get_components("anything").is_empty());
    }

    #[test]
    fn test_document_without_method_defaults_to_select() {
        let q: Query = serde_json::from_str(r#"{"alias": "t"}"#).unwrap();
        assert_eq!(q.method, "select");
        assert_eq!(q.alias.as_deref(), Some("t"));
        assert!(!q.has_component(clause::SELECT));

        let empty: Query = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, Query::new());
    }

    #[test]
    fn test_add_component_preserves_order() {
        let mut q = Query::new();
        q.add_component(clause::SELECT, column("a"))
            .add_component(clause::SELECT, column("b"))
            .add_component(clause::SELECT, column("c"));
        assert_eq!(
            q.get_components(clause::SELECT),
            &[column("a"), column("b"), column("c")]
        );
    }

    #[test]
    fn test_clone_is_isolated() {
        let mut original = Query::new();
        for name in ["a", "b", "c"] {
            original.add_component(clause::SELECT, column(name));
        }

        let mut copy = original.clone();
        copy.add_component(clause::SELECT, column("d"));
        copy.clear_component(clause::WHERE);

        assert_eq!(original.get_components(clause::SELECT).len(), 3);
        assert_eq!(copy.get_components(clause::SELECT).len(), 4);
        assert_eq!(
            original.get_components(clause::SELECT),
            &[column("a"), column("b"), column("c")]
        );
    }

    #[test]
    fn test_clone_copies_nested_queries() {
        let mut inner = Query::table("orders");
        inner.add_component(
            clause::SELECT,
            Component::Select(SelectColumn::Raw(RawColumn {
                expression: "count(*)".to_string(),
                bindings: vec![],
            })),
        );
        let mut outer = Query::table("users");
        outer.add_component(
            clause::WHERE,
            Component::Where(Condition::Nested {
                query: Box::new(inner),
                logic: LogicalOp::And,
            }),
        );

        let mut copy = outer.clone();
        if let Some(Component::Where(Condition::Nested { query, .. })) =
            copy.components.get_mut(clause::WHERE).and_then(|b| b.first_mut())
        {
            query.clear_component(clause::SELECT);
        }

        match outer.conditions().next() {
            Some(Condition::Nested { query, .. }) => assert!(query.has_component(clause::SELECT)),
            other => panic!("Expected nested condition, got {:?}", other),
        }
    }

    #[test]
    fn test_new_child_is_fresh() {
        let parent = Query::table("users").where_eq("id", 1).as_alias("u");
        let child = parent.new_child();
        assert_eq!(child, Query::new());
    }

    #[test]
    fn test_from_last_call_wins() {
        let q = Query::table("users").from("accounts as a");
        assert_eq!(q.get_components(clause::FROM).len(), 1);
        assert_eq!(q.from_clause().map(|f| f.table.as_str()), Some("accounts as a"));
    }

    #[test]
    fn test_where_builders_record_logic() {
        let q = Query::table("users")
            .where_eq("a", 1)
            .or_where("b", " < ", 2)
            .or_where_raw("c IS NULL", []);
        let logic: Vec<LogicalOp> = q.conditions().map(|c| c.logic()).collect();
        assert_eq!(logic, vec![LogicalOp::And, LogicalOp::Or, LogicalOp::Or]);
        match q.conditions().nth(1) {
            Some(Condition::Basic { operator, .. }) => assert_eq!(operator, "<"),
            other => panic!("Expected basic condition, got {:?}", other),
        }
    }

    #[test]
    fn test_serde_roundtrip_keeps_buckets() {
        let q = Query::table("users").where_eq("id", 7).as_alias("u");
        let json = serde_json::to_string(&q).unwrap();
        let back: Query = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }
}
