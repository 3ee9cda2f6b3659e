//! Runtime values consumed by the literal formatter.
//!
//! [`SqlValue`] is the closed set of value kinds the dialect layer knows how
//! to render as SQL literals. Values are transient, caller-owned inputs with
//! no lifecycle beyond a single rendering call.

use chrono::{DateTime, NaiveDateTime, Utc};
use uuid::Uuid;

use crate::types::ScalarTypeTag;

/// A host runtime value to be rendered as a SQL literal.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    DateTime(NaiveDateTime),
    Uuid(Uuid),
}

impl SqlValue {
    /// The provider-neutral type tag for this value's kind.
    pub fn type_tag(&self) -> ScalarTypeTag {
        match self {
            SqlValue::Null => ScalarTypeTag::Object,
            SqlValue::Bool(_) => ScalarTypeTag::Boolean,
            SqlValue::Int(_) => ScalarTypeTag::Int64,
            SqlValue::UInt(_) => ScalarTypeTag::UInt64,
            SqlValue::Float(_) => ScalarTypeTag::Float64,
            SqlValue::Text(_) => ScalarTypeTag::String,
            SqlValue::Bytes(_) => ScalarTypeTag::Binary,
            SqlValue::DateTime(_) => ScalarTypeTag::DateTime,
            SqlValue::Uuid(_) => ScalarTypeTag::Guid,
        }
    }

    /// Returns true for [`SqlValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(v as i64)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<u64> for SqlValue {
    fn from(v: u64) -> Self {
        SqlValue::UInt(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        SqlValue::Float(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<Vec<u8>> for SqlValue {
    fn from(v: Vec<u8>) -> Self {
        SqlValue::Bytes(v)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(v: NaiveDateTime) -> Self {
        SqlValue::DateTime(v)
    }
}

impl From<DateTime<Utc>> for SqlValue {
    fn from(v: DateTime<Utc>) -> Self {
        SqlValue::DateTime(v.naive_utc())
    }
}

impl From<Uuid> for SqlValue {
    fn from(v: Uuid) -> Self {
        SqlValue::Uuid(v)
    }
}

/// Nullable values render as `null` when absent, as the inner value otherwise.
impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => SqlValue::Null,
        }
    }
}
