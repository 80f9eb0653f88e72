//! SQL Transpiler for the query component model.
//!
//! Walks a [`Query`]'s buckets in stored order and produces dialect SQL plus
//! the positional binding list in the same order.

pub mod conditions;
pub mod dialect;
pub mod params;
pub mod select;
pub mod sql;
pub mod traits;

#[cfg(test)]
mod tests;

use crate::ast::{Query, Value};
use crate::config::CompilerConfig;

pub use dialect::Dialect;
pub use traits::{escape_identifier, SqlGenerator};

/// Compiled SQL and the bindings for its placeholders, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlResult {
    pub sql: String,
    pub bindings: Vec<Value>,
}

/// SQL text with generic `?` markers and the bindings they consume.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub sql: String,
    pub bindings: Vec<Value>,
}

impl Fragment {
    pub fn new(sql: impl Into<String>, bindings: Vec<Value>) -> Self {
        Self {
            sql: sql.into(),
            bindings,
        }
    }

    pub fn push_str(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append another fragment's text and bindings.
    pub fn append(&mut self, other: Fragment) {
        self.sql.push_str(&other.sql);
        self.bindings.extend(other.bindings);
    }

    pub fn wrap(self, open: &str, close: &str) -> Self {
        Self {
            sql: format!("{}{}{}", open, self.sql, close),
            bindings: self.bindings,
        }
    }
}

impl From<&str> for Fragment {
    fn from(sql: &str) -> Self {
        Self::new(sql, vec![])
    }
}

impl From<String> for Fragment {
    fn from(sql: String) -> Self {
        Self::new(sql, vec![])
    }
}

/// Compiles queries for one dialect.
pub struct Compiler {
    dialect: Dialect,
    generator: Box<dyn SqlGenerator>,
    warn_on_binding_mismatch: bool,
}

impl Compiler {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            generator: dialect.generator(),
            warn_on_binding_mismatch: true,
        }
    }

    pub fn from_config(config: &CompilerConfig) -> Self {
        Self {
            warn_on_binding_mismatch: config.warn_on_binding_mismatch,
            ..Self::new(config.dialect)
        }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Compile the full statement.
    pub fn compile(&self, query: &Query) -> SqlResult {
        self.finish(select::build_select(query, self.generator.as_ref()))
    }

    /// Compile only the `select` bucket into a column list.
    pub fn compile_select_clause(&self, query: &Query) -> SqlResult {
        self.finish(select::build_columns(query, self.generator.as_ref()))
    }

    fn finish(&self, frag: Fragment) -> SqlResult {
        let (sql, placeholders) = params::number_placeholders(&frag.sql, self.generator.as_ref());

        // Mismatches are passed through for the database to reject.
        if self.warn_on_binding_mismatch && placeholders != frag.bindings.len() {
            tracing::warn!(
                "{} placeholder(s) but {} binding(s) in: {}",
                placeholders,
                frag.bindings.len(),
                sql
            );
        }
        tracing::debug!("Compiled [{}]: {}", self.dialect, sql);

        SqlResult {
            sql,
            bindings: frag.bindings,
        }
    }
}

/// Trait for converting queries to SQL.
pub trait ToSql {
    /// Compile using the default dialect.
    fn to_sql(&self) -> SqlResult {
        self.to_sql_with_dialect(Dialect::default())
    }
    /// Compile for a specific dialect.
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult;
}

impl ToSql for Query {
    fn to_sql_with_dialect(&self, dialect: Dialect) -> SqlResult {
        Compiler::new(dialect).compile(self)
    }
}
