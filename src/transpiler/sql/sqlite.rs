use crate::transpiler::traits::{escape_identifier, SqlGenerator};

pub struct SqliteGenerator;

impl SqlGenerator for SqliteGenerator {
    fn quote_identifier(&self, name: &str) -> String {
        escape_identifier(name)
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    // FILTER on aggregates since SQLite 3.30
    fn supports_aggregate_filter(&self) -> bool {
        true
    }
}
