//! Interface boundary to the external statement builder.
//!
//! The query/statement builder that composes fragments into full SQL text
//! lives upstream of this crate. The only operation the dialect layer needs
//! from it is an append-style mutation contract, used by
//! [`SqlDialect::page`](crate::dialect::SqlDialect::page) to attach the
//! dialect's row-limiting clause.

/// Mutable accumulator of SQL clause text.
pub trait StatementBuilder {
    /// Append a rendered fragment to the in-progress statement.
    fn append(&mut self, sql: &str);

    /// Whether an ORDER BY clause has been emitted.
    ///
    /// Dialects whose pagination demands a deterministic ordering consult
    /// this before appending their row-limiting clause.
    fn has_order_by(&self) -> bool;
}

/// Minimal in-memory [`StatementBuilder`].
///
/// Enough for tests and doc examples; real builders track clauses
/// structurally.
#[derive(Debug, Clone, Default)]
pub struct StatementBuffer {
    sql: String,
    has_order_by: bool,
}

impl StatementBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer pre-filled with statement text.
    pub fn with_sql(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            has_order_by: false,
        }
    }

    /// Append an ORDER BY clause over the given pre-rendered expression.
    pub fn order_by(&mut self, expr: &str) {
        self.sql.push_str(" ORDER BY ");
        self.sql.push_str(expr);
        self.has_order_by = true;
    }

    /// The accumulated statement text.
    pub fn as_sql(&self) -> &str {
        &self.sql
    }

    /// Consume the buffer, returning the statement text.
    pub fn into_sql(self) -> String {
        self.sql
    }
}

impl StatementBuilder for StatementBuffer {
    fn append(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    fn has_order_by(&self) -> bool {
        self.has_order_by
    }
}
