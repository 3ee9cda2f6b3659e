//! SQL dialect definitions and fragment rendering rules.
//!
//! This module provides a trait-based abstraction for SQL dialect
//! differences. Each backend implements [`SqlDialect`] to handle its
//! specific syntax:
//!
//! - Identifier quoting: `"` (ANSI/PG), `` ` `` (MySQL), `[]` (T-SQL)
//! - Pagination: LIMIT/OFFSET vs OFFSET FETCH vs ranking rewrites
//! - Identity-column and foreign-key DDL
//! - Function names: `LEN` vs `LENGTH`, `GETDATE` vs `NOW`
//! - String concatenation: `||` vs `+` vs CONCAT()
//!
//! The default implementations follow generic SQL and read per-backend
//! properties from the dialect's [`DialectDescriptor`], so most concrete
//! dialects only build a descriptor, populate a [`FunctionRegistry`], and
//! implement the handful of operations with no generic rendering
//! ([`type_name`](SqlDialect::type_name), [`page`](SqlDialect::page),
//! [`drop_index`](SqlDialect::drop_index)).
//!
//! Every method returns a self-contained fragment: balanced quotes and
//! parentheses, safe to embed at the position the caller requested, with no
//! caller-side fixup.
//!
//! # Usage
//!
//! ```
//! use sqldialect::dialect::{Ansi, SqlDialect};
//!
//! let dialect = Ansi::new();
//! assert_eq!(dialect.quote_identifier("user"), "\"user\"");
//! assert_eq!(dialect.quote_string("O'Brien"), "'O''Brien'");
//! ```

mod ansi;
pub mod helpers;

pub use ansi::Ansi;

use crate::builder::StatementBuilder;
use crate::descriptor::DialectDescriptor;
use crate::error::DialectError;
use crate::functions::FunctionRegistry;
use crate::types::ScalarTypeTag;
use crate::value::SqlValue;

/// SQL dialect trait - translates abstract operations into backend-correct
/// SQL text fragments.
///
/// Instances are constructed once, are immutable afterwards, and may be
/// shared across threads for concurrent rendering.
pub trait SqlDialect: std::fmt::Debug + Send + Sync {
    /// Dialect name for display/logging.
    fn name(&self) -> &'static str;

    /// The per-backend configuration the default methods read from.
    fn descriptor(&self) -> &DialectDescriptor;

    /// The dialect's function registry, populated at construction time.
    fn functions(&self) -> &FunctionRegistry;

    // =========================================================================
    // Identifier and Literal Quoting
    // =========================================================================

    /// Quote an identifier (table, column, alias) in the descriptor's quote
    /// characters, escaping the closing character by doubling.
    fn quote_identifier(&self, ident: &str) -> String {
        let d = self.descriptor();
        let doubled: String = [d.identifier_close, d.identifier_close].iter().collect();
        format!(
            "{}{}{}",
            d.identifier_open,
            ident.replace(d.identifier_close, &doubled),
            d.identifier_close
        )
    }

    /// Quote a string literal: embedded single quotes are doubled, the
    /// result is wrapped in single quotes. Total over all inputs; this is
    /// the sole sanitization boundary for string values.
    fn quote_string(&self, s: &str) -> String {
        helpers::quote_string_single(s)
    }

    /// Format a boolean literal. Defaults to numeric `1`/`0`, the form every
    /// backend accepts.
    fn format_bool(&self, b: bool) -> &'static str {
        helpers::format_bool_numeric(b)
    }

    /// Render a runtime value as a SQL literal.
    ///
    /// Numeric text is culture-invariant: no grouping separators, `.` as the
    /// decimal point. Kinds with no portable literal form (binary blobs,
    /// non-finite floats) render as `null` rather than failing; bind those
    /// as parameters instead.
    fn render_literal(&self, value: &SqlValue) -> String {
        match value {
            SqlValue::Null => "null".into(),
            SqlValue::Bool(b) => self.format_bool(*b).into(),
            SqlValue::Int(n) => n.to_string(),
            SqlValue::UInt(n) => n.to_string(),
            SqlValue::Float(f) => {
                if !f.is_finite() {
                    return "null".into();
                }
                ryu::Buffer::new().format(*f).to_string()
            }
            SqlValue::Text(s) => self.quote_string(s),
            SqlValue::DateTime(dt) => format!("'{}'", dt.format("%Y-%m-%d %H:%M:%S%.f")),
            SqlValue::Uuid(u) => format!("'{}'", u),
            SqlValue::Bytes(_) => "null".into(),
        }
    }

    // =========================================================================
    // Predicate Operators
    // =========================================================================

    /// Render an IN predicate against a pre-rendered value list.
    ///
    /// A single bound-parameter placeholder (starts with the parameter
    /// marker, no comma) is emitted without parentheses, which lets backends
    /// bind an array/table-valued parameter.
    fn in_operator(&self, values: &str) -> String {
        if values.starts_with(self.descriptor().parameter_prefix) && !values.contains(',') {
            format!(" IN {}", values)
        } else {
            format!(" IN ({}) ", values)
        }
    }

    /// Render a NOT IN predicate against a pre-rendered value list.
    fn not_in_operator(&self, values: &str) -> String {
        format!(" NOT{}", self.in_operator(values))
    }

    /// Render an IN predicate against a subquery. A subquery is never a
    /// bare placeholder, so it is always parenthesized.
    fn in_select_operator(&self, subquery: &str) -> String {
        format!(" IN ({}) ", subquery)
    }

    /// Render a NOT IN predicate against a subquery.
    fn not_in_select_operator(&self, subquery: &str) -> String {
        format!(" NOT IN ({}) ", subquery)
    }

    // =========================================================================
    // DDL Fragments
    // =========================================================================

    /// Leading keywords of a CREATE TABLE statement.
    fn create_table_string(&self) -> &str {
        &self.descriptor().create_table_clause
    }

    /// Column clause declaring an identity/auto-increment primary key.
    fn identity_column_string(&self) -> Result<&str, DialectError> {
        let d = self.descriptor();
        if !d.supports_identity_columns {
            return Err(DialectError::Unsupported(format!(
                "{} does not support identity columns",
                self.name()
            )));
        }
        Ok(&d.identity_column_clause)
    }

    /// Clause appended to nullable column definitions.
    fn null_column_string(&self) -> &str {
        &self.descriptor().null_column_clause
    }

    /// Primary key clause.
    fn primary_key_string(&self) -> &str {
        &self.descriptor().primary_key_clause
    }

    /// Clause for inserting a row of all defaults.
    fn default_values_insert(&self) -> &str {
        &self.descriptor().default_values_insert
    }

    /// ORDER BY clause producing a random row ordering.
    fn random_order_by_clause(&self) -> &str {
        &self.descriptor().random_order_clause
    }

    /// Clause appended to DROP TABLE to cascade dependent constraints.
    fn cascade_constraints_string(&self) -> &str {
        &self.descriptor().cascade_constraints_clause
    }

    /// Render a DROP TABLE statement with the dialect's existence guard and
    /// cascade clause. Exactly one guard placement is used per dialect.
    fn drop_table(&self, table: &str) -> String {
        let d = self.descriptor();
        debug_assert!(
            !(d.if_exists_before_table_name && d.if_exists_after_table_name),
            "at most one IF EXISTS placement may be configured"
        );

        let mut sql = String::from("drop table ");
        if d.if_exists_before_table_name {
            sql.push_str("if exists ");
        }
        sql.push_str(&self.quote_identifier(table));
        sql.push_str(&d.cascade_constraints_clause);
        if d.if_exists_after_table_name {
            sql.push_str(" if exists");
        }
        sql
    }

    /// Render the ALTER TABLE fragment adding a foreign key constraint.
    ///
    /// Column names and the constraint name are embedded as given; callers
    /// quote them beforehand when the backend requires it. The target column
    /// list is omitted when the target side is its table's primary key.
    fn add_foreign_key_constraint(
        &self,
        name: &str,
        src_columns: &[&str],
        dest_table: &str,
        dest_columns: &[&str],
        primary_key: bool,
    ) -> Result<String, DialectError> {
        if name.trim().is_empty() {
            return Err(DialectError::MalformedInput(
                "foreign key constraint name is empty".into(),
            ));
        }
        if src_columns.is_empty() {
            return Err(DialectError::MalformedInput(
                "foreign key source column list is empty".into(),
            ));
        }
        if dest_table.trim().is_empty() {
            return Err(DialectError::MalformedInput(
                "foreign key target table name is empty".into(),
            ));
        }
        if !primary_key && dest_columns.is_empty() {
            return Err(DialectError::MalformedInput(
                "foreign key target column list is empty".into(),
            ));
        }

        let mut sql = String::with_capacity(200);
        if self.descriptor().foreign_key_in_alter_table {
            sql.push_str(" add");
        }
        sql.push_str(" constraint ");
        sql.push_str(name);
        sql.push_str(" foreign key (");
        sql.push_str(&src_columns.join(", "));
        sql.push_str(") references ");
        sql.push_str(dest_table);
        if !primary_key {
            sql.push_str(" (");
            sql.push_str(&dest_columns.join(", "));
            sql.push(')');
        }
        Ok(sql)
    }

    /// Render the ALTER TABLE fragment dropping a foreign key constraint.
    fn drop_foreign_key_constraint(&self, name: &str) -> Result<String, DialectError> {
        if name.trim().is_empty() {
            return Err(DialectError::MalformedInput(
                "foreign key constraint name is empty".into(),
            ));
        }
        Ok(format!(" drop constraint {}", name))
    }

    /// Render a DROP INDEX statement. No generic rendering exists: backends
    /// disagree on whether the owning table is named and where.
    fn drop_index(&self, index: &str, table: &str) -> Result<String, DialectError>;

    /// Map a scalar type tag (plus optional length/precision/scale) to the
    /// backend's native column type syntax. Must cover every tag; returns
    /// [`DialectError::Unsupported`] for combinations the backend cannot
    /// express.
    fn type_name(
        &self,
        tag: ScalarTypeTag,
        length: Option<u32>,
        precision: Option<u8>,
        scale: Option<u8>,
    ) -> Result<String, DialectError>;

    // =========================================================================
    // Pagination
    // =========================================================================

    /// Append the dialect's row-limiting clause to an in-progress statement.
    ///
    /// `offset` and `limit` are pre-rendered numeric-or-placeholder
    /// fragments; either may be absent, but not both. Combined with a
    /// preceding ORDER BY clause the result returns exactly the requested
    /// row window. No generic rendering exists: OFFSET/FETCH, LIMIT/OFFSET
    /// and ranking rewrites are mutually incompatible.
    fn page(
        &self,
        builder: &mut dyn StatementBuilder,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> Result<(), DialectError>;

    /// Whether this dialect's pagination demands a preceding ORDER BY.
    ///
    /// Implementations returning true check
    /// [`StatementBuilder::has_order_by`] in [`page`](SqlDialect::page) and
    /// fail fast instead of emitting a non-deterministic row window.
    fn requires_order_by_for_pagination(&self) -> bool {
        false
    }

    // =========================================================================
    // Function Rendering
    // =========================================================================

    /// Render a function call through the dialect's registry.
    ///
    /// Lookup is case-insensitive; unregistered names fall back to generic
    /// call syntax `name(a, b, ...)`.
    fn render_function(&self, name: &str, args: &[&str]) -> String {
        self.functions().render(name, args)
    }

    // =========================================================================
    // Concatenation
    // =========================================================================

    /// String concatenation operator.
    fn concat_operator(&self) -> &'static str {
        "||"
    }

    /// Write a parenthesized concatenation of the operands into `out`.
    ///
    /// Each operand is a fragment producer writing into the shared buffer,
    /// so nested concatenations compose without double evaluation.
    fn concat(&self, out: &mut String, operands: &[&dyn Fn(&mut String)]) {
        out.push('(');
        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
                out.push_str(self.concat_operator());
                out.push(' ');
            }
            operand(out);
        }
        out.push(')');
    }

    // =========================================================================
    // DISTINCT / ORDER BY Reconciliation
    // =========================================================================

    /// Append ORDER BY columns missing from a SELECT DISTINCT list.
    ///
    /// See [`helpers::reconcile_distinct_order_by`] for the algorithm and
    /// its textual-membership limitation.
    fn distinct_order_by_select(
        &self,
        select: Vec<String>,
        order_by: &[String],
    ) -> Vec<String> {
        helpers::reconcile_distinct_order_by(select, order_by)
    }
}
