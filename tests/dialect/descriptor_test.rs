use std::borrow::Cow;

use sqldialect::prelude::*;

/// Dialect configured entirely through its descriptor, T-SQL flavored:
/// bracket quoting, IF EXISTS before the table name, FK outside ALTER ADD.
#[derive(Debug)]
struct Bracketed {
    descriptor: DialectDescriptor,
    functions: FunctionRegistry,
}

impl Bracketed {
    fn new() -> Self {
        let descriptor = DialectDescriptor {
            identifier_open: '[',
            identifier_close: ']',
            cascade_constraints_clause: Cow::Borrowed(" cascade constraints"),
            if_exists_before_table_name: true,
            foreign_key_in_alter_table: false,
            supports_identity_columns: false,
            ..DialectDescriptor::default()
        };
        Self {
            descriptor,
            functions: FunctionRegistry::new(),
        }
    }
}

impl SqlDialect for Bracketed {
    fn name(&self) -> &'static str {
        "bracketed"
    }

    fn descriptor(&self) -> &DialectDescriptor {
        &self.descriptor
    }

    fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    fn drop_index(&self, index: &str, table: &str) -> Result<String, DialectError> {
        Ok(format!(
            "drop index {} on {}",
            self.quote_identifier(index),
            self.quote_identifier(table)
        ))
    }

    fn type_name(
        &self,
        _tag: ScalarTypeTag,
        _length: Option<u32>,
        _precision: Option<u8>,
        _scale: Option<u8>,
    ) -> Result<String, DialectError> {
        Ok("sql_variant".into())
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
        if let Some(offset) = offset {
            builder.append(&format!(" OFFSET {} ROWS", offset));
        }
        if let Some(limit) = limit {
            builder.append(&format!(" FETCH NEXT {} ROWS ONLY", limit));
        }
        Ok(())
    }
}

#[test]
fn test_descriptor_drives_identifier_quoting() {
    let dialect = Bracketed::new();
    assert_eq!(dialect.quote_identifier("users"), "[users]");
    assert_eq!(dialect.quote_identifier("weird]name"), "[weird]]name]");
}

#[test]
fn test_descriptor_drives_drop_table_shape() {
    let dialect = Bracketed::new();
    assert_eq!(
        dialect.drop_table("users"),
        "drop table if exists [users] cascade constraints"
    );
}

#[test]
fn test_descriptor_disables_alter_add_prefix() {
    let dialect = Bracketed::new();
    let sql = dialect
        .add_foreign_key_constraint("FK1", &["a"], "Target", &["id"], false)
        .unwrap();
    assert_eq!(sql, " constraint FK1 foreign key (a) references Target (id)");
}

#[test]
fn test_descriptor_gates_identity_support() {
    let dialect = Bracketed::new();
    assert!(matches!(
        dialect.identity_column_string(),
        Err(DialectError::Unsupported(_))
    ));

    let ansi = Ansi::new();
    assert_eq!(
        ansi.identity_column_string().unwrap(),
        "bigint generated always as identity primary key"
    );
}

#[test]
fn test_descriptor_serde_round_trip() {
    let descriptor = Bracketed::new().descriptor.clone();

    let json = serde_json::to_string(&descriptor).unwrap();
    let back: DialectDescriptor = serde_json::from_str(&json).unwrap();

    assert_eq!(back.identifier_open, '[');
    assert_eq!(back.identifier_close, ']');
    assert_eq!(back.cascade_constraints_clause, " cascade constraints");
    assert!(back.if_exists_before_table_name);
    assert!(!back.foreign_key_in_alter_table);
    assert!(!back.supports_identity_columns);
}

#[test]
fn test_descriptor_deserialize_fills_defaults() {
    // Partial configuration: every omitted field takes its generic default.
    let back: DialectDescriptor =
        serde_json::from_str(r#"{"parameter_prefix": "$"}"#).unwrap();

    assert_eq!(back.parameter_prefix, '$');
    assert_eq!(back.identifier_open, '"');
    assert_eq!(back.create_table_clause, "create table");
    assert_eq!(back.default_decimal_precision, 19);
}

#[test]
fn test_parameter_prefix_drives_in_operator() {
    let back: DialectDescriptor =
        serde_json::from_str(r#"{"parameter_prefix": "$"}"#).unwrap();

    #[derive(Debug)]
    struct Dollar(DialectDescriptor, FunctionRegistry);

    impl SqlDialect for Dollar {
        fn name(&self) -> &'static str {
            "dollar"
        }
        fn descriptor(&self) -> &DialectDescriptor {
            &self.0
        }
        fn functions(&self) -> &FunctionRegistry {
            &self.1
        }
        fn drop_index(&self, index: &str, _table: &str) -> Result<String, DialectError> {
            Ok(format!("drop index {}", self.quote_identifier(index)))
        }
        fn type_name(
            &self,
            _tag: ScalarTypeTag,
            _length: Option<u32>,
            _precision: Option<u8>,
            _scale: Option<u8>,
        ) -> Result<String, DialectError> {
            Ok("text".into())
        }
        fn page(
            &self,
            builder: &mut dyn StatementBuilder,
            offset: Option<&str>,
            limit: Option<&str>,
        ) -> Result<(), DialectError> {
            if let Some(limit) = limit {
                builder.append(&format!(" LIMIT {}", limit));
            }
            if let Some(offset) = offset {
                builder.append(&format!(" OFFSET {}", offset));
            }
            Ok(())
        }
    }

    let dialect = Dollar(back, FunctionRegistry::new());
    assert_eq!(dialect.in_operator("$1"), " IN $1");
    assert_eq!(dialect.in_operator("@p1"), " IN (@p1) ");
}
