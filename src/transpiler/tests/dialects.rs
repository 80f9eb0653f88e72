//! Dialect-specific SQL generation tests.

use pretty_assertions::assert_eq;

use crate::ast::{Query, Value};
use crate::transpiler::{Dialect, ToSql};

#[test]
fn test_sqlserver_quoting_and_placeholders() {
    let q = Query::table("users").select(["id", "u.*"]).where_eq("id", 1);
    assert_eq!(
        q.to_sql_with_dialect(Dialect::SqlServer).sql,
        "SELECT [id], [u].* FROM [users] WHERE [id] = @p1"
    );
}

#[test]
fn test_mysql_quoting_and_placeholders() {
    let q = Query::table("users").select(["id as key"]).where_eq("id", 1);
    assert_eq!(
        q.to_sql_with_dialect(Dialect::MySql).sql,
        "SELECT `id` AS `key` FROM `users` WHERE `id` = ?"
    );
}

#[test]
fn test_sqlite_keeps_filter_clause() {
    let q = Query::table("orders").select_count_with("id", |f| Some(f.where_eq("paid", true)));
    assert_eq!(
        q.to_sql_with_dialect(Dialect::Sqlite).sql,
        "SELECT COUNT(id) FILTER (WHERE paid = ?) FROM orders"
    );
}

#[test]
fn test_case_fallback_for_aggregate_filter() {
    let q = Query::table("orders")
        .select_sum_with("total as paid_total", |f| {
            Some(f.where_eq("status", "paid").or_where("status", "=", "settled"))
        });
    let result = q.to_sql_with_dialect(Dialect::SqlServer);
    assert_eq!(
        result.sql,
        "SELECT SUM(CASE WHEN [status] = @p1 OR [status] = @p2 THEN [total] END) AS [paid_total] FROM [orders]"
    );
    assert_eq!(
        result.bindings,
        vec![Value::from("paid"), Value::from("settled")]
    );
}

#[test]
fn test_case_fallback_counts_constant_for_star() {
    let q = Query::table("orders").select_count_with("*", |f| Some(f.where_eq("ok", true)));
    assert_eq!(
        q.to_sql_with_dialect(Dialect::MySql).sql,
        "SELECT COUNT(CASE WHEN `ok` = ? THEN 1 END) FROM `orders`"
    );
}

#[test]
fn test_dialect_parsing() {
    assert_eq!("pg".parse::<Dialect>(), Ok(Dialect::Postgres));
    assert_eq!("MSSQL".parse::<Dialect>(), Ok(Dialect::SqlServer));
    assert_eq!("sqlite".parse::<Dialect>(), Ok(Dialect::Sqlite));
    assert!("oracle".parse::<Dialect>().is_err());
    assert_eq!(Dialect::MySql.to_string(), "mysql");
}
