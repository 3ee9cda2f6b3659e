//! ANSI SQL dialect - base reference implementation.
//!
//! This provides generic SQL-standard behavior as a reference. It is
//! exported for testing and documentation; real backends derive their own
//! dialect with specific overrides and are implemented outside this crate.

use super::SqlDialect;
use crate::builder::StatementBuilder;
use crate::descriptor::DialectDescriptor;
use crate::error::DialectError;
use crate::functions::FunctionRegistry;
use crate::types::ScalarTypeTag;

/// ANSI SQL dialect (reference implementation).
#[derive(Debug)]
pub struct Ansi {
    descriptor: DialectDescriptor,
    functions: FunctionRegistry,
}

impl Ansi {
    pub fn new() -> Self {
        let mut functions = FunctionRegistry::new();
        // ANSI spells substring with FROM/FOR rather than comma-separated
        // arguments.
        functions.register("substring", |args: &[&str]| match args {
            [s, start] => format!("substring({} from {})", s, start),
            [s, start, len] => format!("substring({} from {} for {})", s, start, len),
            _ => format!("substring({})", args.join(", ")),
        });

        Self {
            descriptor: DialectDescriptor::default(),
            functions,
        }
    }
}

impl Default for Ansi {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlDialect for Ansi {
    fn name(&self) -> &'static str {
        "ansi"
    }

    fn descriptor(&self) -> &DialectDescriptor {
        &self.descriptor
    }

    fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    fn drop_index(&self, index: &str, table: &str) -> Result<String, DialectError> {
        if index.trim().is_empty() {
            return Err(DialectError::MalformedInput("index name is empty".into()));
        }
        // Index names are schema-scoped here; the owning table is not named.
        let _ = table;
        Ok(format!("drop index {}", self.quote_identifier(index)))
    }

    fn type_name(
        &self,
        tag: ScalarTypeTag,
        length: Option<u32>,
        precision: Option<u8>,
        scale: Option<u8>,
    ) -> Result<String, DialectError> {
        let d = self.descriptor();
        let name = match tag {
            // The object catch-all degrades to an opaque binary column.
            ScalarTypeTag::Binary | ScalarTypeTag::Object => match length {
                Some(n) => format!("varbinary({})", n),
                None => "blob".into(),
            },
            ScalarTypeTag::String => match length {
                Some(n) => format!("varchar({})", n),
                None => "text".into(),
            },
            ScalarTypeTag::Boolean => "boolean".into(),
            // Unsigned widths widen to the next signed type.
            ScalarTypeTag::Int8 | ScalarTypeTag::Int16 => "smallint".into(),
            ScalarTypeTag::UInt16 | ScalarTypeTag::Int32 => "integer".into(),
            ScalarTypeTag::UInt32 | ScalarTypeTag::Int64 => "bigint".into(),
            ScalarTypeTag::UInt64 => "numeric(20, 0)".into(),
            ScalarTypeTag::Float32 => "real".into(),
            ScalarTypeTag::Float64 => "double precision".into(),
            ScalarTypeTag::Decimal => {
                let p = precision.unwrap_or(d.default_decimal_precision);
                let s = scale.unwrap_or(d.default_decimal_scale);
                if s > p {
                    return Err(DialectError::MalformedInput(format!(
                        "decimal scale {} exceeds precision {}",
                        s, p
                    )));
                }
                format!("decimal({}, {})", p, s)
            }
            ScalarTypeTag::DateTime => "timestamp".into(),
            ScalarTypeTag::Guid => "char(36)".into(),
        };
        Ok(name)
    }

    fn page(
        &self,
        builder: &mut dyn StatementBuilder,
        offset: Option<&str>,
        limit: Option<&str>,
    ) -> Result<(), DialectError> {
        if offset.is_none() && limit.is_none() {
            return Err(DialectError::MalformedInput(
                "pagination requires an offset or a limit".into(),
            ));
        }
        if self.requires_order_by_for_pagination() && !builder.has_order_by() {
            return Err(DialectError::MalformedInput(
                "pagination requires a preceding ORDER BY clause".into(),
            ));
        }

        if let Some(offset) = offset {
            builder.append(&format!(" OFFSET {} ROWS", offset));
        }
        if let Some(limit) = limit {
            builder.append(&format!(" FETCH FIRST {} ROWS ONLY", limit));
        }
        Ok(())
    }
}
