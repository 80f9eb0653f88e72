//! Structural tokens shared by the builders and the transpiler.
//!
//! Builders emit these instead of string literals so the transpiler can
//! recognize structural text (parentheses, CASE arms, window prefixes).

pub const PUSH_FIELD: &str = "*";
pub const START_PARENTH: &str = "(";
pub const END_PARENTH: &str = ")";

pub const AND: &str = "AND";
pub const AND2: &str = "&&";
pub const AND3: &str = "&";
pub const OR: &str = "OR";
pub const OR2: &str = "||";
pub const OR3: &str = "|";
pub const OR4: &str = "<>";

pub const CASE_WHEN: &str = "CASE WHEN";
pub const WHEN: &str = "WHEN";
pub const ELSE: &str = "ELSE";
pub const THEN: &str = "THEN";
pub const END: &str = "END";
pub const AS: &str = "AS";
pub const ASC: &str = "ASC";
pub const DESC: &str = "DESC";

pub const ROW_NUMBER_PARTITIONED: &str = "ROW_NUMBER() OVER (PARTITION BY";
pub const ROW_NUMBER_ORDER_BY: &str = "ROW_NUMBER() OVER (ORDER BY";
pub const ROW_NUMBER: &str = "ROW_NUMBER()";
pub const ORDER_BY: &str = "ORDER BY";

/// Random generator used to shuffle row numbering.
pub const RANDOM_ID: &str = "NEWID()";

pub const SPECIAL_CHARS: &[&str] = &[START_PARENTH, END_PARENTH, PUSH_FIELD];
pub const AND_OR_OPERATORS: &[&str] = &[AND, AND2, AND3, OR, OR2, OR3, OR4];
pub const AND_OPERATORS: &[&str] = &[AND, AND2, AND3];
pub const OR_OPERATORS: &[&str] = &[OR, OR2, OR3, OR4];

/// Whether `token` belongs to the AND family (case-insensitive, trimmed).
pub fn is_and_operator(token: &str) -> bool {
    contains_token(AND_OPERATORS, token)
}

/// Whether `token` belongs to the OR family (case-insensitive, trimmed).
pub fn is_or_operator(token: &str) -> bool {
    contains_token(OR_OPERATORS, token)
}

pub fn is_special_char(token: &str) -> bool {
    SPECIAL_CHARS.contains(&token)
}

fn contains_token(set: &[&str], token: &str) -> bool {
    let token = token.trim().to_uppercase();
    set.iter().any(|t| *t == token)
}
