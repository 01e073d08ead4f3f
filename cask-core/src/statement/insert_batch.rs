use crate::{
    Constant, Database, Error, Result, Row, SqlWriter, Value, statement::check_duplicates,
    with_handle,
};

/// A per-column value source for batched statements.
///
/// `Derived` is resolved once per input row at execution time and renders one
/// placeholder; `Constant` renders keyword text and contributes nothing.
pub enum BatchValue<T> {
    Derived(Box<dyn Fn(&T) -> Value>),
    Constant(Constant),
}

impl<T> BatchValue<T> {
    pub(crate) fn write_sql(&self, writer: &dyn SqlWriter, out: &mut String) {
        match self {
            BatchValue::Derived(..) => writer.write_placeholder(out),
            BatchValue::Constant(constant) => writer.write_constant(out, constant),
        }
    }

    pub(crate) fn resolve(&self, row: &T) -> Option<Value> {
        match self {
            BatchValue::Derived(derive) => Some(derive(row)),
            BatchValue::Constant(..) => None,
        }
    }
}

/// Batched INSERT: one statement template, one argument row per input
/// element, derived values resolved per row in column order.
pub struct InsertBatchQuery<'a, T> {
    db: &'a dyn Database,
    table: String,
    values: Vec<(String, BatchValue<T>)>,
}

impl<'a, T> InsertBatchQuery<'a, T> {
    pub fn new(db: &'a dyn Database, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            values: Vec::new(),
        }
    }

    /// Bind the same value for every row.
    pub fn set(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.derived(column, move |_| value.clone())
    }

    /// Bind a per-row derived value.
    pub fn derived(mut self, column: impl Into<String>, derive: impl Fn(&T) -> Value + 'static) -> Self {
        self.values
            .push((column.into(), BatchValue::Derived(Box::new(derive))));
        self
    }

    pub fn constant(mut self, column: impl Into<String>, constant: Constant) -> Self {
        self.values
            .push((column.into(), BatchValue::Constant(constant)));
        self
    }

    /// Render the statement template shared by all rows.
    pub fn build(&self) -> Result<String> {
        if self.table.is_empty() || self.values.is_empty() {
            return Err(Error::Validation(
                "need table and columns to create an insert statement".into(),
            ));
        }
        check_duplicates(&self.values)?;
        let writer = self.db.dialect().writer();
        let mut sql = String::from("insert into ");
        sql.push_str(&self.table);
        sql.push_str(" (");
        for (i, (column, ..)) in self.values.iter().enumerate() {
            if i > 0 {
                sql.push(',');
            }
            sql.push_str(column);
        }
        sql.push_str(") values (");
        for (i, (.., value)) in self.values.iter().enumerate() {
            if i > 0 {
                sql.push(',');
            }
            value.write_sql(writer, &mut sql);
        }
        sql.push(')');
        Ok(sql)
    }

    /// Execute once per element of `data`. Zero rows short-circuit to an
    /// empty result without touching a handle.
    pub fn execute(&self, data: &[T]) -> Result<Vec<u64>> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        let sql = self.build()?;
        let rows: Vec<Row> = data.iter().map(|row| self.row_args(row)).collect();
        with_handle(self.db, |handle| handle.execute_batch(&sql, rows))
    }

    fn row_args(&self, row: &T) -> Row {
        self.values
            .iter()
            .filter_map(|(.., value)| value.resolve(row))
            .collect()
    }
}
