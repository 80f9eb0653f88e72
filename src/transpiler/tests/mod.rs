//! Transpiler test modules.
//!
//! - `core`: SELECT assembly, sub-queries, binding order (Postgres)
//! - `dialects`: quoting, placeholders and aggregate filters per dialect

mod dialects;
