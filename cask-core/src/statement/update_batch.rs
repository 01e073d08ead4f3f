use crate::{
    BatchValue, Constant, Database, Error, Fragment, Predicate, Result, Row, Value,
    statement::check_duplicates, with_handle,
};

type WhereGenerator<T> = Box<dyn Fn(&T) -> Predicate>;

/// Batched UPDATE: one statement template, per-row arguments from the derived
/// SET values (in column order) followed by the per-row WHERE generator's
/// arguments.
///
/// The WHERE generator must produce the same predicate shape for every row;
/// the template is rendered from the first one.
pub struct UpdateBatchQuery<'a, T> {
    db: &'a dyn Database,
    table: String,
    params: Vec<(String, BatchValue<T>)>,
    filter: Option<WhereGenerator<T>>,
}

impl<'a, T> UpdateBatchQuery<'a, T> {
    pub fn new(db: &'a dyn Database, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            params: Vec::new(),
            filter: None,
        }
    }

    pub fn set(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        self.derived(column, move |_| value.clone())
    }

    pub fn derived(mut self, column: impl Into<String>, derive: impl Fn(&T) -> Value + 'static) -> Self {
        self.params
            .push((column.into(), BatchValue::Derived(Box::new(derive))));
        self
    }

    pub fn constant(mut self, column: impl Into<String>, constant: Constant) -> Self {
        self.params
            .push((column.into(), BatchValue::Constant(constant)));
        self
    }

    pub fn where_with(mut self, filter: impl Fn(&T) -> Predicate + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Render the statement template shared by all rows; the WHERE shape is
    /// taken from `sample`.
    pub fn build(&self, sample: &T) -> Result<String> {
        if self.table.is_empty() || self.params.is_empty() {
            return Err(Error::Validation(
                "need table and set parameters to create an update statement".into(),
            ));
        }
        check_duplicates(&self.params)?;
        let writer = self.db.dialect().writer();
        let mut sql = String::from("update ");
        sql.push_str(&self.table);
        sql.push_str(" set ");
        for (i, (column, value)) in self.params.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(column);
            sql.push_str(" = ");
            value.write_sql(writer, &mut sql);
        }
        if let Some(filter) = &self.filter {
            sql.push_str(" where ");
            filter(sample).write_sql(writer, &mut sql);
        }
        Ok(sql)
    }

    /// Execute once per element of `data`. Zero rows short-circuit to an
    /// empty result without touching a handle.
    pub fn execute(&self, data: &[T]) -> Result<Vec<u64>> {
        let Some(first) = data.first() else {
            return Ok(Vec::new());
        };
        let sql = self.build(first)?;
        let rows: Vec<Row> = data.iter().map(|row| self.row_args(row)).collect();
        with_handle(self.db, |handle| handle.execute_batch(&sql, rows))
    }

    fn row_args(&self, row: &T) -> Row {
        let mut args: Vec<Value> = self
            .params
            .iter()
            .filter_map(|(.., value)| value.resolve(row))
            .collect();
        if let Some(filter) = &self.filter {
            filter(row).append_args(&mut args);
        }
        args.into_boxed_slice()
    }
}
