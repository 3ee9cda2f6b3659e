//! Shared helper functions for SQL dialect implementations.
//!
//! Reusable building blocks dialects compose to implement the `SqlDialect`
//! trait with minimal duplication.

// =============================================================================
// Identifier Quoting
// =============================================================================

/// Quote identifier with double quotes (ANSI style).
/// Used by: Postgres, DuckDB, Snowflake, Redshift
pub fn quote_double(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Quote identifier with backticks.
/// Used by: MySQL, BigQuery, Spark/Databricks
pub fn quote_backtick(ident: &str) -> String {
    format!("`{}`", ident.replace('`', "``"))
}

/// Quote identifier with square brackets.
/// Used by: T-SQL (SQL Server, Azure Synapse)
pub fn quote_bracket(ident: &str) -> String {
    format!("[{}]", ident.replace(']', "]]"))
}

// =============================================================================
// String Quoting
// =============================================================================

/// Quote string with single quotes, doubling embedded quotes.
/// Used by: all dialects; this is the sole sanitization boundary for string
/// literals.
pub fn quote_string_single(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

// =============================================================================
// Boolean Formatting
// =============================================================================

/// Format boolean as literal true/false.
/// Used by: Postgres, DuckDB, Snowflake
pub fn format_bool_literal(b: bool) -> &'static str {
    if b {
        "true"
    } else {
        "false"
    }
}

/// Format boolean as numeric 1/0.
/// Used by: T-SQL, MySQL, SQLite
pub fn format_bool_numeric(b: bool) -> &'static str {
    if b {
        "1"
    } else {
        "0"
    }
}

// =============================================================================
// DISTINCT / ORDER BY Reconciliation
// =============================================================================

/// Append ORDER BY columns missing from a SELECT DISTINCT list.
///
/// Most databases (Postgres and SQL Server among them) require every field
/// referenced in ORDER BY to also appear in the select list when DISTINCT is
/// used. Each order-by segment can be a field name or punctuation, so
/// punctuation and direction tokens are filtered out.
///
/// The membership test is textual: an order-by token spelled differently
/// from its select-list counterpart (aliasing, casing, whitespace) is
/// treated as a distinct column and appended. Callers must pass order-by
/// tokens in the same textual form they use in the select list.
pub fn reconcile_distinct_order_by(mut select: Vec<String>, order_by: &[String]) -> Vec<String> {
    for token in order_by {
        let trimmed = token.trim();

        if trimmed != "," && trimmed != "DESC" && trimmed != "ASC" && !select.contains(token) {
            select.push(",".to_string());
            select.push(token.clone());
        }
    }

    select
}
