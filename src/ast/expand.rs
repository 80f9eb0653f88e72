//! Column expression expansion.
//!
//! ```text
//! users.{id, name as n}        ->  users.id, users.name as n
//! dbo.users.{id,email}         ->  dbo.users.id, dbo.users.email
//! ─────┬─── ───────┬────
//!      │           └── Braced list (split on commas)
//!      └── Prefix: one or two word segments
//! ```
//!
//! Anything that does not match is passed through unchanged.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::char,
    combinator::{opt, recognize},
    sequence::{pair, preceded},
    IResult,
};

/// Expand one column expression into the ordered list of concrete columns.
pub fn expand_expression(expression: &str) -> Vec<String> {
    match parse_braced(expression) {
        Ok((_, (prefix, body))) => {
            let columns: Vec<String> = body
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(|c| format!("{}.{}", prefix, c))
                .collect();
            if columns.is_empty() {
                vec![expression.to_string()]
            } else {
                columns
            }
        }
        Err(_) => vec![expression.to_string()],
    }
}

/// Expand every expression, flattening in input order.
pub fn expand_all<I, S>(expressions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    expressions
        .into_iter()
        .flat_map(|e| expand_expression(e.as_ref()))
        .collect()
}

/// Parse `prefix.{body}`, returning the prefix and everything up to the last `}`.
fn parse_braced(input: &str) -> IResult<&str, (&str, &str)> {
    let (input, prefix) = parse_prefix(input)?;
    let (input, _) = tag(".{")(input)?;
    match input.rfind('}') {
        Some(end) => Ok((&input[end + 1..], (prefix, &input[..end]))),
        None => Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::TakeUntil,
        ))),
    }
}

/// Parse `word` or `word.word`.
fn parse_prefix(input: &str) -> IResult<&str, &str> {
    recognize(pair(parse_word, opt(preceded(char('.'), parse_word))))(input)
}

fn parse_word(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphanumeric() || c == '_')(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_identifier_passes_through() {
        assert_eq!(expand_expression("id"), vec!["id"]);
        assert_eq!(expand_expression("users.name as n"), vec!["users.name as n"]);
        assert_eq!(expand_expression("*"), vec!["*"]);
    }

    #[test]
    fn test_braced_list_expands_in_order() {
        assert_eq!(
            expand_expression("users.{id, name as n ,email}"),
            vec!["users.id", "users.name as n", "users.email"]
        );
    }

    #[test]
    fn test_schema_qualified_prefix() {
        assert_eq!(
            expand_expression("dbo.users.{id,email}"),
            vec!["dbo.users.id", "dbo.users.email"]
        );
    }

    #[test]
    fn test_three_segment_prefix_is_not_expanded() {
        assert_eq!(expand_expression("a.b.c.{id}"), vec!["a.b.c.{id}"]);
    }

    #[test]
    fn test_unclosed_or_empty_braces_pass_through() {
        assert_eq!(expand_expression("users.{id"), vec!["users.{id"]);
        assert_eq!(expand_expression("users.{ }"), vec!["users.{ }"]);
    }

    #[test]
    fn test_expand_all_flattens() {
        assert_eq!(
            expand_all(["a", "t.{x,y}", "b"]),
            vec!["a", "t.x", "t.y", "b"]
        );
    }
}
