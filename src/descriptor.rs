//! Per-backend dialect configuration.
//!
//! A [`DialectDescriptor`] is the set of named string/boolean properties a
//! concrete dialect fixes at construction time: quote characters, identity
//! syntax, existence-guard placement in DROP TABLE, cascade clause, decimal
//! defaults. The default trait methods on
//! [`SqlDialect`](crate::dialect::SqlDialect) read from it, so most dialects
//! only need to build a descriptor and override the handful of operations
//! with no generic rendering.
//!
//! Descriptors are read-only after construction; no two dialect instances
//! share mutable state.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// The per-backend configuration surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectDescriptor {
    /// Opening identifier quote character (`"`, `` ` `` or `[`).
    pub identifier_open: char,
    /// Closing identifier quote character; escaped by doubling.
    pub identifier_close: char,
    /// Bound-parameter marker (`@`, `$`, `:`).
    pub parameter_prefix: char,
    /// Leading keywords of a CREATE TABLE statement.
    pub create_table_clause: Cow<'static, str>,
    /// Column clause declaring an identity/auto-increment primary key.
    pub identity_column_clause: Cow<'static, str>,
    /// Whether the column's data type is written separately from the
    /// identity clause (when false, the clause embeds the type itself).
    pub has_data_type_in_identity_column: bool,
    /// Clause appended to nullable column definitions.
    pub null_column_clause: Cow<'static, str>,
    /// Primary key clause.
    pub primary_key_clause: Cow<'static, str>,
    /// Clause for inserting a row of all defaults.
    pub default_values_insert: Cow<'static, str>,
    /// ORDER BY clause producing a random row ordering.
    pub random_order_clause: Cow<'static, str>,
    /// Clause appended to DROP TABLE to cascade dependent constraints.
    pub cascade_constraints_clause: Cow<'static, str>,
    /// Whether DROP TABLE accepts `if exists` before the table name.
    pub if_exists_before_table_name: bool,
    /// Whether DROP TABLE accepts `if exists` after the table name.
    /// At most one of the two placements may be set.
    pub if_exists_after_table_name: bool,
    /// Whether adding a constraint requires `ALTER TABLE ... ADD` syntax.
    pub foreign_key_in_alter_table: bool,
    /// Whether the backend supports identity/auto-increment columns.
    pub supports_identity_columns: bool,
    /// Whether the backend supports UNIQUE constraints.
    pub supports_unique: bool,
    /// Decimal precision used when the caller does not specify one.
    pub default_decimal_precision: u8,
    /// Decimal scale used when the caller does not specify one.
    pub default_decimal_scale: u8,
}

impl Default for DialectDescriptor {
    fn default() -> Self {
        Self {
            identifier_open: '"',
            identifier_close: '"',
            parameter_prefix: '@',
            create_table_clause: Cow::Borrowed("create table"),
            identity_column_clause: Cow::Borrowed(
                "bigint generated always as identity primary key",
            ),
            has_data_type_in_identity_column: false,
            null_column_clause: Cow::Borrowed(""),
            primary_key_clause: Cow::Borrowed("primary key"),
            default_values_insert: Cow::Borrowed("DEFAULT VALUES"),
            random_order_clause: Cow::Borrowed("order by random()"),
            cascade_constraints_clause: Cow::Borrowed(""),
            if_exists_before_table_name: false,
            if_exists_after_table_name: false,
            foreign_key_in_alter_table: true,
            supports_identity_columns: true,
            supports_unique: true,
            default_decimal_precision: 19,
            default_decimal_scale: 5,
        }
    }
}
