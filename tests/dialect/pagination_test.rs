use sqldialect::prelude::*;

/// Minimal dialect whose pagination demands a preceding ORDER BY, the way
/// OFFSET/FETCH does on SQL Server.
#[derive(Debug)]
struct OrderedPaging {
    descriptor: DialectDescriptor,
    functions: FunctionRegistry,
}

impl OrderedPaging {
    fn new() -> Self {
        Self {
            descriptor: DialectDescriptor::default(),
            functions: FunctionRegistry::new(),
        }
    }
}

impl SqlDialect for OrderedPaging {
    fn name(&self) -> &'static str {
        "ordered-paging"
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

    fn requires_order_by_for_pagination(&self) -> bool {
        true
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

        // FETCH is only valid after an OFFSET clause; a missing offset is
        // rendered as OFFSET 0.
        builder.append(&format!(" OFFSET {} ROWS", offset.unwrap_or("0")));
        if let Some(limit) = limit {
            builder.append(&format!(" FETCH NEXT {} ROWS ONLY", limit));
        }
        Ok(())
    }
}

#[test]
fn test_page_appends_after_order_by() {
    let dialect = OrderedPaging::new();
    let mut stmt = StatementBuffer::with_sql("SELECT \"id\" FROM \"users\"");
    stmt.order_by("\"id\"");

    dialect.page(&mut stmt, Some("10"), Some("20")).unwrap();
    assert_eq!(
        stmt.as_sql(),
        "SELECT \"id\" FROM \"users\" ORDER BY \"id\" OFFSET 10 ROWS FETCH NEXT 20 ROWS ONLY"
    );
}

#[test]
fn test_page_without_order_by_fails_fast() {
    let dialect = OrderedPaging::new();
    let mut stmt = StatementBuffer::with_sql("SELECT \"id\" FROM \"users\"");

    let before = stmt.as_sql().to_string();
    let err = dialect.page(&mut stmt, Some("10"), Some("20")).unwrap_err();

    assert!(matches!(err, DialectError::MalformedInput(_)));
    // Failed pagination must not leave a partial clause behind.
    assert_eq!(stmt.as_sql(), before);
}

#[test]
fn test_page_limit_only_synthesizes_offset() {
    let dialect = OrderedPaging::new();
    let mut stmt = StatementBuffer::with_sql("SELECT \"id\" FROM \"users\"");
    stmt.order_by("\"id\"");

    dialect.page(&mut stmt, None, Some("@count")).unwrap();
    assert_eq!(
        stmt.as_sql(),
        "SELECT \"id\" FROM \"users\" ORDER BY \"id\" OFFSET 0 ROWS FETCH NEXT @count ROWS ONLY"
    );
}

#[test]
fn test_page_rejects_empty_window() {
    let dialect = OrderedPaging::new();
    let mut stmt = StatementBuffer::with_sql("SELECT 1");
    stmt.order_by("1");

    assert!(matches!(
        dialect.page(&mut stmt, None, None),
        Err(DialectError::MalformedInput(_))
    ));
}

#[test]
fn test_ansi_page_does_not_demand_order_by() {
    let dialect = Ansi::new();
    assert!(!dialect.requires_order_by_for_pagination());

    let mut stmt = StatementBuffer::with_sql("SELECT \"id\" FROM \"users\"");
    dialect.page(&mut stmt, Some("10"), None).unwrap();
    assert_eq!(
        stmt.as_sql(),
        "SELECT \"id\" FROM \"users\" OFFSET 10 ROWS"
    );
}

#[test]
fn test_placeholder_bounds_pass_through_verbatim() {
    let dialect = Ansi::new();
    let mut stmt = StatementBuffer::with_sql("SELECT a FROM t");
    dialect.page(&mut stmt, Some("@skip"), Some("@take")).unwrap();
    assert_eq!(
        stmt.as_sql(),
        "SELECT a FROM t OFFSET @skip ROWS FETCH FIRST @take ROWS ONLY"
    );
}
