//! Transpiler traits and utilities.

use crate::ast::verbs;
use crate::transpiler::params::escape_markers;

/// SQL reserved words that must be quoted when used as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "order", "group", "user", "table", "select", "from", "where", "join", "left", "right", "inner",
    "outer", "on", "and", "or", "not", "null", "true", "false", "limit", "offset", "as", "in",
    "is", "like", "between", "having", "union", "all", "distinct", "case", "when", "then", "else",
    "end", "create", "alter", "drop", "insert", "update", "delete", "index", "key", "primary",
    "foreign", "references", "default", "constraint", "check",
];

/// Quote a single identifier part (no dots) when it is a reserved word,
/// starts with a digit or contains anything but `[A-Za-z0-9_]`.
pub fn escape_identifier(name: &str) -> String {
    let lower = name.to_lowercase();
    let needs_escaping = RESERVED_WORDS.contains(&lower.as_str())
        || name.chars().any(|c| !c.is_alphanumeric() && c != '_')
        || name.chars().next().is_some_and(|c| c.is_numeric());

    if needs_escaping {
        format!("\"{}\"", name.replace('"', "\"\""))
    } else {
        name.to_string()
    }
}

/// Split `name as alias` (case-insensitive) into its two halves.
pub fn split_alias(value: &str) -> (&str, Option<&str>) {
    let lower = value.to_ascii_lowercase();
    match lower.find(" as ") {
        Some(pos) => (value[..pos].trim(), Some(value[pos + 4..].trim())),
        None => (value.trim(), None),
    }
}

/// Trait for dialect-specific SQL generation.
pub trait SqlGenerator {
    /// Quote a single identifier part (no dots).
    fn quote_identifier(&self, name: &str) -> String;
    /// Generate the parameter placeholder (e.g., $1, ?, @p1) for a 1-based index.
    fn placeholder(&self, index: usize) -> String;
    /// Whether `AGG(col) FILTER (WHERE ...)` is understood; otherwise a CASE is emitted.
    fn supports_aggregate_filter(&self) -> bool;

    /// Quoted identifier safe to splice into a statement: a `?` inside the
    /// name is escaped so placeholder numbering leaves it alone.
    fn quote_part(&self, name: &str) -> String {
        escape_markers(&self.quote_identifier(name))
    }

    /// Quote a dotted reference part by part, leaving `*` untouched.
    fn wrap_value(&self, value: &str) -> String {
        value
            .split('.')
            .map(|part| {
                if part == verbs::PUSH_FIELD {
                    part.to_string()
                } else {
                    self.quote_part(part)
                }
            })
            .collect::<Vec<_>>()
            .join(".")
    }

    /// Quote `name` or `name as alias`, rendering the alias as `AS alias`.
    fn wrap_identifier(&self, value: &str) -> String {
        match split_alias(value) {
            (name, Some(alias)) => format!(
                "{} {} {}",
                self.wrap_value(name),
                verbs::AS,
                self.quote_part(alias)
            ),
            (name, None) => self.wrap_value(name),
        }
    }
}
