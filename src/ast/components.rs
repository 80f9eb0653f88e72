//! Clause components stored in a [`Query`]'s buckets.
//!
//! Components are passive data: they record WHAT was added and in WHICH
//! order. Rendering belongs to the transpiler.

use serde::{Deserialize, Serialize};

use crate::ast::{verbs, Query, Value};

/// A plain column or dotted/aliased identifier (`users.name as n`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Verbatim SQL owned by the caller. Bindings keep the order they were supplied in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawColumn {
    pub expression: String,
    #[serde(default)]
    pub bindings: Vec<Value>,
}

/// An aggregate over one column, optionally restricted by a filter query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedColumn {
    pub column: Column,
    /// Function name, lowercase by convention (`sum`, `count`, ...)
    pub aggregate: String,
    /// Conditional-aggregate predicate; owned, never shared with the parent
    #[serde(default)]
    pub filter: Option<Box<Query>>,
}

/// An aliased sub-query selected as a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryColumn {
    pub query: Box<Query>,
}

/// One selectable item of the `select` bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectColumn {
    Column(Column),
    Raw(RawColumn),
    Aggregated(AggregatedColumn),
    Query(QueryColumn),
}

impl SelectColumn {
    /// Bindings owned directly by this component (nested queries excluded).
    pub fn bindings(&self) -> &[Value] {
        match self {
            SelectColumn::Raw(raw) => &raw.bindings,
            _ => &[],
        }
    }
}

/// Table source of the `from` bucket (`users` or `users as u`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FromClause {
    pub table: String,
}

/// Boolean connective placed before a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum LogicalOp {
    #[default]
    And,
    Or,
}

impl LogicalOp {
    pub fn as_verb(&self) -> &'static str {
        match self {
            LogicalOp::And => verbs::AND,
            LogicalOp::Or => verbs::OR,
        }
    }
}

impl std::str::FromStr for LogicalOp {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if verbs::is_and_operator(token) {
            Ok(LogicalOp::And)
        } else if verbs::is_or_operator(token) {
            Ok(LogicalOp::Or)
        } else {
            Err(format!("Unknown logical operator: '{}'", token))
        }
    }
}

impl TryFrom<String> for LogicalOp {
    type Error = String;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<LogicalOp> for String {
    fn from(op: LogicalOp) -> Self {
        op.as_verb().to_string()
    }
}

/// A predicate of the `where` bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    /// `column operator ?`
    Basic {
        column: String,
        operator: String,
        value: Value,
        #[serde(default)]
        logic: LogicalOp,
    },
    /// Verbatim predicate with its own bindings
    Raw {
        expression: String,
        #[serde(default)]
        bindings: Vec<Value>,
        #[serde(default)]
        logic: LogicalOp,
    },
    /// Parenthesized group built on a child query
    Nested {
        query: Box<Query>,
        #[serde(default)]
        logic: LogicalOp,
    },
}

impl Condition {
    pub fn logic(&self) -> LogicalOp {
        match self {
            Condition::Basic { logic, .. }
            | Condition::Raw { logic, .. }
            | Condition::Nested { logic, .. } => *logic,
        }
    }
}

/// Anything that can be registered under a clause bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Component {
    Select(SelectColumn),
    From(FromClause),
    Where(Condition),
}
