//! Placeholder numbering.
//!
//! Components carry generic `?` markers. Once a statement is assembled the
//! markers are replaced left to right with the dialect's placeholder, which
//! keeps them aligned with the concatenated binding list.

use crate::transpiler::traits::SqlGenerator;

const ESCAPE: char = '\\';
const MARKER: char = '?';

/// Replace each unescaped `?` with a numbered placeholder.
/// Returns the rewritten SQL and the number of placeholders emitted.
pub fn number_placeholders(sql: &str, generator: &dyn SqlGenerator) -> (String, usize) {
    let mut out = String::with_capacity(sql.len());
    let mut count = 0;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE if chars.peek() == Some(&MARKER) => {
                out.push(MARKER);
                chars.next();
            }
            MARKER => {
                count += 1;
                out.push_str(&generator.placeholder(count));
            }
            _ => out.push(c),
        }
    }

    (out, count)
}

/// Escape every `?` so numbering emits it as a literal.
pub fn escape_markers(sql: &str) -> String {
    sql.replace(MARKER, "\\?")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpiler::Dialect;

    #[test]
    fn test_numbering_per_dialect() {
        let sql = "a = ? AND b IN (?, ?)";
        let pg = Dialect::Postgres.generator();
        let ms = Dialect::SqlServer.generator();
        let my = Dialect::MySql.generator();
        assert_eq!(
            number_placeholders(sql, pg.as_ref()),
            ("a = $1 AND b IN ($2, $3)".to_string(), 3)
        );
        assert_eq!(
            number_placeholders(sql, ms.as_ref()),
            ("a = @p1 AND b IN (@p2, @p3)".to_string(), 3)
        );
        assert_eq!(number_placeholders(sql, my.as_ref()), (sql.to_string(), 3));
    }

    #[test]
    fn test_escaped_marker_is_literal() {
        let pg = Dialect::Postgres.generator();
        assert_eq!(
            number_placeholders(r"data \? 'key' AND id = ?", pg.as_ref()),
            ("data ? 'key' AND id = $1".to_string(), 1)
        );
    }

    #[test]
    fn test_escaped_identifier_survives_numbering() {
        let pg = Dialect::Postgres.generator();
        let sql = format!("SELECT {} WHERE id = ?", escape_markers("\"why?\""));
        assert_eq!(
            number_placeholders(&sql, pg.as_ref()),
            ("SELECT \"why?\" WHERE id = $1".to_string(), 1)
        );
    }

    #[test]
    fn test_lone_backslash_is_kept() {
        let pg = Dialect::Postgres.generator();
        assert_eq!(
            number_placeholders(r"a \ b", pg.as_ref()),
            (r"a \ b".to_string(), 0)
        );
    }
}
