//! ORDER BY fragments for window functions.

use crate::ast::verbs;

/// One `(column, direction?)` entry of a window ORDER BY.
///
/// The direction is kept as the caller wrote it; only an exact
/// (case-insensitive, trimmed) `DESC` renders as descending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTerm {
    pub column: String,
    pub direction: Option<String>,
}

impl OrderTerm {
    pub fn new(column: impl Into<String>, direction: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: Some(direction.into()),
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: None,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column, verbs::DESC)
    }

    pub fn is_descending(&self) -> bool {
        self.direction
            .as_deref()
            .is_some_and(|d| d.trim().to_uppercase() == verbs::DESC)
    }
}

impl From<&str> for OrderTerm {
    fn from(column: &str) -> Self {
        OrderTerm::asc(column)
    }
}

impl From<(&str, &str)> for OrderTerm {
    fn from((column, direction): (&str, &str)) -> Self {
        OrderTerm::new(column, direction)
    }
}

/// Render `col1 DESC,col2 ` from the given terms.
///
/// Ascending entries keep the separating space but omit the direction
/// token. An empty list renders as an empty string, meaning "no ORDER BY".
pub fn build_order_by(order_by: &[OrderTerm]) -> String {
    order_by
        .iter()
        .map(|term| {
            let direction = if term.is_descending() { verbs::DESC } else { "" };
            format!("{} {}", term.column, direction)
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_order_by() {
        assert_eq!(build_order_by(&[]), "");
    }

    #[test]
    fn test_mixed_directions() {
        let terms = [OrderTerm::from(("Id", "DESC")), OrderTerm::from("Name")];
        assert_eq!(build_order_by(&terms), "Id DESC,Name ");
    }

    #[test]
    fn test_direction_is_case_insensitive_and_trimmed() {
        let terms = [OrderTerm::new("a", " desc "), OrderTerm::new("b", "Desc")];
        assert_eq!(build_order_by(&terms), "a DESC,b DESC");
    }

    #[test]
    fn test_unknown_direction_falls_back_to_ascending() {
        let terms = [OrderTerm::new("a", "DESCENDING"), OrderTerm::new("b", "ASC")];
        assert_eq!(build_order_by(&terms), "a ,b ");
    }
}
