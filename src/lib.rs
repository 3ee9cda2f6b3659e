//! # sqldialect
//!
//! A provider-neutral SQL dialect abstraction: a strategy object that
//! translates abstract, database-agnostic query and schema operations into
//! syntactically correct text for a specific relational backend.
//!
//! ## Architecture
//!
//! The crate sits beneath a query/schema builder, which assembles full
//! statements by calling into this layer for every backend-variable
//! fragment:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │          Query / Schema Builder (external)               │
//! └─────────────────────────────────────────────────────────┘
//!                          │ per-clause fragment requests
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │                SqlDialect (this crate)                   │
//! │  quoting · literals · DDL fragments · IN operators       │
//! │  pagination · function registry · concat · reconciler    │
//! └─────────────────────────────────────────────────────────┘
//!                          │ reads
//!                          ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │   DialectDescriptor · FunctionRegistry · type tag table  │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no internal orchestration loop: aside from the shared lookup
//! tables, every operation is a pure translation function over its
//! arguments. Dialect instances are built once, then shared read-only
//! across rendering threads.
//!
//! ## Example
//!
//! ```
//! use sqldialect::prelude::*;
//!
//! let dialect = Ansi::new();
//!
//! assert_eq!(dialect.quote_identifier("user"), "\"user\"");
//! assert_eq!(
//!     dialect.render_literal(&SqlValue::from("O'Brien")),
//!     "'O''Brien'"
//! );
//! assert_eq!(dialect.in_operator("1,2,3"), " IN (1,2,3) ");
//!
//! let mut stmt = StatementBuffer::with_sql("SELECT \"id\" FROM \"users\"");
//! stmt.order_by("\"id\"");
//! dialect.page(&mut stmt, Some("10"), Some("20")).unwrap();
//! assert_eq!(
//!     stmt.as_sql(),
//!     "SELECT \"id\" FROM \"users\" ORDER BY \"id\" OFFSET 10 ROWS FETCH FIRST 20 ROWS ONLY"
//! );
//! ```

pub mod builder;
pub mod descriptor;
pub mod dialect;
pub mod error;
pub mod functions;
pub mod types;
pub mod value;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::builder::{StatementBuffer, StatementBuilder};
    pub use crate::descriptor::DialectDescriptor;
    pub use crate::dialect::{Ansi, SqlDialect};
    pub use crate::error::DialectError;
    pub use crate::functions::{FunctionRegistry, SqlFunction};
    pub use crate::types::{scalar_type_tag, ScalarTypeTag};
    pub use crate::value::SqlValue;
}

// Also export at crate root for convenience
pub use builder::{StatementBuffer, StatementBuilder};
pub use descriptor::DialectDescriptor;
pub use dialect::{Ansi, SqlDialect};
pub use error::DialectError;
pub use functions::{FunctionRegistry, SqlFunction};
pub use types::{scalar_type_tag, ScalarTypeTag};
pub use value::SqlValue;
