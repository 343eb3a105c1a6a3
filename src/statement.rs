//! INSERT statement formatting.

use crate::value::{Dialect, SqlValue};

/// Statement terminator appended to every line written to disk
pub const STATEMENT_TERMINATOR: char = ';';

/// A single-row `INSERT INTO ... (...) VALUES (...)` statement
#[derive(Debug, Clone)]
pub struct InsertStatement<'a> {
    table: &'a str,
    columns: &'a [&'a str],
    values: Vec<SqlValue>,
}

impl<'a> InsertStatement<'a> {
    pub fn new(table: &'a str, columns: &'a [&'a str], values: Vec<SqlValue>) -> Self {
        debug_assert_eq!(
            columns.len(),
            values.len(),
            "column/value count mismatch for {}",
            table
        );
        Self {
            table,
            columns,
            values,
        }
    }

    pub fn table(&self) -> &str {
        self.table
    }

    pub fn values(&self) -> &[SqlValue] {
        &self.values
    }

    /// Render without the trailing terminator
    pub fn render(&self, dialect: Dialect) -> String {
        let values = self
            .values
            .iter()
            .map(|v| v.render(dialect))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            self.columns.join(", "),
            values
        )
    }

    pub fn render_terminated(&self, dialect: Dialect) -> String {
        let mut stmt = self.render(dialect);
        stmt.push(STATEMENT_TERMINATOR);
        stmt
    }
}
