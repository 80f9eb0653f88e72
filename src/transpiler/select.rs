//! SELECT statement generation.

use crate::ast::{verbs, AggregatedColumn, Query, QueryColumn, SelectColumn};
use crate::transpiler::conditions::build_conditions;
use crate::transpiler::traits::{split_alias, SqlGenerator};
use crate::transpiler::Fragment;

/// Render `SELECT <columns> [FROM ..] [WHERE ..]` with generic `?` markers.
pub fn build_select(query: &Query, generator: &dyn SqlGenerator) -> Fragment {
    let mut frag = Fragment::from("SELECT ");

    if query.select_columns().next().is_none() {
        frag.push_str(verbs::PUSH_FIELD);
    } else {
        frag.append(build_columns(query, generator));
    }

    if let Some(from) = query.from_clause() {
        frag.push_str(" FROM ");
        frag.push_str(&generator.wrap_identifier(&from.table));
    }

    if let Some(conditions) = build_conditions(query, generator) {
        frag.push_str(" WHERE ");
        frag.append(conditions);
    }

    frag
}

/// Render the select bucket as a column list. Bindings follow column order.
pub fn build_columns(query: &Query, generator: &dyn SqlGenerator) -> Fragment {
    let mut frag = Fragment::default();
    for (i, column) in query.select_columns().enumerate() {
        if i > 0 {
            frag.push_str(", ");
        }
        frag.append(build_column(column, generator));
    }
    frag
}

fn build_column(column: &SelectColumn, generator: &dyn SqlGenerator) -> Fragment {
    match column {
        SelectColumn::Column(col) => Fragment::from(generator.wrap_identifier(&col.name)),
        SelectColumn::Raw(raw) => Fragment::new(raw.expression.clone(), raw.bindings.clone()),
        SelectColumn::Aggregated(agg) => build_aggregate(agg, generator),
        SelectColumn::Query(sub) => build_subquery(sub, generator),
    }
}

fn build_aggregate(agg: &AggregatedColumn, generator: &dyn SqlGenerator) -> Fragment {
    let (name, alias) = split_alias(&agg.column.name);
    let column = generator.wrap_value(name);
    let func = agg.aggregate.to_uppercase();

    let filter = agg
        .filter
        .as_deref()
        .and_then(|f| build_conditions(f, generator));

    let mut frag = match filter {
        None => Fragment::from(format!("{}({})", func, column)),
        Some(cond) if generator.supports_aggregate_filter() => {
            let mut frag = Fragment::from(format!("{}({}) FILTER (WHERE ", func, column));
            frag.append(cond);
            frag.push_str(verbs::END_PARENTH);
            frag
        }
        Some(cond) => {
            // COUNT(CASE WHEN .. THEN * END) is invalid, count a constant instead
            let target = if name == verbs::PUSH_FIELD { "1".to_string() } else { column };
            let mut frag = Fragment::from(format!("{}({} ", func, verbs::CASE_WHEN));
            frag.append(cond);
            frag.push_str(&format!(" {} {} {})", verbs::THEN, target, verbs::END));
            frag
        }
    };

    if let Some(alias) = alias {
        frag.push_str(&format!(" {} {}", verbs::AS, generator.quote_part(alias)));
    }
    frag
}

fn build_subquery(sub: &QueryColumn, generator: &dyn SqlGenerator) -> Fragment {
    let mut frag = build_select(&sub.query, generator).wrap(verbs::START_PARENTH, verbs::END_PARENTH);
    if let Some(alias) = &sub.query.alias {
        frag.push_str(&format!(" {} {}", verbs::AS, generator.quote_part(alias)));
    }
    frag
}
