//! WHERE condition generation.

use crate::ast::{verbs, Condition, Query};
use crate::transpiler::traits::SqlGenerator;
use crate::transpiler::Fragment;

/// Render the `where` bucket of `query`, or `None` if it renders nothing.
///
/// The first rendered condition ignores its connective; each later one is
/// prefixed with `AND` / `OR`. Nested groups are parenthesized.
pub fn build_conditions(query: &Query, generator: &dyn SqlGenerator) -> Option<Fragment> {
    let mut out: Option<Fragment> = None;

    for cond in query.conditions() {
        let Some(piece) = build_condition(cond, generator) else {
            continue;
        };
        match out.as_mut() {
            Some(frag) => {
                frag.push_str(&format!(" {} ", cond.logic().as_verb()));
                frag.append(piece);
            }
            None => out = Some(piece),
        }
    }

    out
}

fn build_condition(cond: &Condition, generator: &dyn SqlGenerator) -> Option<Fragment> {
    match cond {
        Condition::Basic {
            column,
            operator,
            value,
            ..
        } => Some(Fragment::new(
            format!("{} {} ?", generator.wrap_value(column), operator),
            vec![value.clone()],
        )),
        Condition::Raw {
            expression,
            bindings,
            ..
        } => Some(Fragment::new(expression.clone(), bindings.clone())),
        Condition::Nested { query, .. } => build_conditions(query, generator)
            .map(|inner| inner.wrap(verbs::START_PARENTH, verbs::END_PARENTH)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Value;
    use crate::transpiler::Dialect;

    #[test]
    fn test_and_or_chain() {
        let q = Query::new()
            .where_eq("a", 1)
            .or_where("b", ">", 2)
            .where_raw("c IS NULL", []);
        let frag = build_conditions(&q, Dialect::Postgres.generator().as_ref()).unwrap();
        assert_eq!(frag.sql, "a = ? OR b > ? AND c IS NULL");
        assert_eq!(frag.bindings, vec![Value::Int(1), Value::Int(2)]);
    }

    #[test]
    fn test_leading_or_is_dropped() {
        let q = Query::new().or_where("a", "=", 1);
        let frag = build_conditions(&q, Dialect::Postgres.generator().as_ref()).unwrap();
        assert_eq!(frag.sql, "a = ?");
    }

    #[test]
    fn test_nested_groups_are_parenthesized() {
        let q = Query::new()
            .where_eq("a", 1)
            .where_nested(|q| q.where_eq("b", 2).or_where("c", "=", 3))
            .where_nested(|q| q);
        let frag = build_conditions(&q, Dialect::SqlServer.generator().as_ref()).unwrap();
        assert_eq!(frag.sql, "[a] = ? AND ([b] = ? OR [c] = ?)");
        assert_eq!(
            frag.bindings,
            vec![Value::Int(1), Value::Int(2), Value::Int(3)]
        );
    }

    #[test]
    fn test_empty_bucket_renders_nothing() {
        assert!(build_conditions(&Query::new(), Dialect::Postgres.generator().as_ref()).is_none());
    }
}
