//! Provider-neutral scalar type tags.
//!
//! A [`ScalarTypeTag`] classifies a host runtime type by its storage kind,
//! independently of any backend. Dialects map tags to native column type
//! syntax via [`SqlDialect::type_name`](crate::dialect::SqlDialect::type_name).
//!
//! The tag table is a process-wide constant built once on first use and never
//! mutated afterwards, so unsynchronized concurrent reads are safe. Lookup is
//! total: unregistered types resolve to [`ScalarTypeTag::Object`] rather than
//! failing, degrading to a catch-all opaque representation instead of
//! aborting mid-statement.

use std::any::TypeId;
use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Provider-neutral classification of a value's storage kind.
///
/// This is a closed, stable set: any new host runtime type must map to
/// exactly one tag before it can be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarTypeTag {
    /// Opaque binary data (BLOB, BYTEA, VARBINARY).
    Binary,
    /// Character data of any length.
    String,
    /// Boolean.
    Boolean,
    /// 8-bit signed integer.
    Int8,
    /// 16-bit signed integer.
    Int16,
    /// 16-bit unsigned integer.
    UInt16,
    /// 32-bit signed integer.
    Int32,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit unsigned integer.
    UInt64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// Fixed-precision decimal.
    Decimal,
    /// Date and time of day.
    DateTime,
    /// GUID/UUID.
    Guid,
    /// Catch-all for unregistered types; rendered as opaque binary.
    Object,
}

impl ScalarTypeTag {
    /// Returns true if this tag is an integer width.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            ScalarTypeTag::Int8
                | ScalarTypeTag::Int16
                | ScalarTypeTag::UInt16
                | ScalarTypeTag::Int32
                | ScalarTypeTag::UInt32
                | ScalarTypeTag::Int64
                | ScalarTypeTag::UInt64
        )
    }

    /// Returns true if this tag is a numeric kind.
    pub fn is_numeric(&self) -> bool {
        self.is_integer()
            || matches!(
                self,
                ScalarTypeTag::Float32 | ScalarTypeTag::Float64 | ScalarTypeTag::Decimal
            )
    }
}

/// Registers a type and its nullable wrapper under the same tag.
///
/// `Option<T>` resolving to the tag of `T` is what makes nullable unwrapping
/// terminate: the table only ever holds one level of wrapping.
macro_rules! register_scalar {
    ($map:ident, $($ty:ty => $tag:expr),+ $(,)?) => {
        $(
            $map.insert(TypeId::of::<$ty>(), $tag);
            $map.insert(TypeId::of::<Option<$ty>>(), $tag);
        )+
    };
}

static TYPE_TAGS: Lazy<HashMap<TypeId, ScalarTypeTag>> = Lazy::new(|| {
    let mut m = HashMap::new();
    register_scalar!(m,
        Vec<u8> => ScalarTypeTag::Binary,
        String => ScalarTypeTag::String,
        &'static str => ScalarTypeTag::String,
        char => ScalarTypeTag::String,
        bool => ScalarTypeTag::Boolean,
        i8 => ScalarTypeTag::Int8,
        i16 => ScalarTypeTag::Int16,
        u16 => ScalarTypeTag::UInt16,
        i32 => ScalarTypeTag::Int32,
        u32 => ScalarTypeTag::UInt32,
        i64 => ScalarTypeTag::Int64,
        u64 => ScalarTypeTag::UInt64,
        f32 => ScalarTypeTag::Float32,
        f64 => ScalarTypeTag::Float64,
        chrono::NaiveDateTime => ScalarTypeTag::DateTime,
        chrono::DateTime<chrono::Utc> => ScalarTypeTag::DateTime,
        uuid::Uuid => ScalarTypeTag::Guid,
    );
    m
});

/// Resolve the scalar type tag for a host runtime type.
///
/// `Option<T>` resolves to the same tag as `T`. Unregistered types resolve
/// to [`ScalarTypeTag::Object`].
///
/// # Examples
///
/// ```
/// use sqldialect::types::{scalar_type_tag, ScalarTypeTag};
///
/// assert_eq!(scalar_type_tag::<i32>(), ScalarTypeTag::Int32);
/// assert_eq!(scalar_type_tag::<Option<i32>>(), ScalarTypeTag::Int32);
/// assert_eq!(scalar_type_tag::<Vec<i32>>(), ScalarTypeTag::Object);
/// ```
pub fn scalar_type_tag<T: 'static>() -> ScalarTypeTag {
    TYPE_TAGS
        .get(&TypeId::of::<T>())
        .copied()
        .unwrap_or(ScalarTypeTag::Object)
}
