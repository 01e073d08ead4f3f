use crate::{
    ColumnValue, Constant, Database, Error, Fragment, Predicate, Result, Value,
    statement::check_duplicates, with_handle,
};

/// UPDATE statement builder.
///
/// Argument order: SET-clause fragments in bind order, then WHERE arguments.
pub struct UpdateQuery<'a> {
    db: &'a dyn Database,
    table: String,
    params: Vec<(String, ColumnValue)>,
    filter: Option<Predicate>,
}

impl<'a> UpdateQuery<'a> {
    pub fn new(db: &'a dyn Database, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            params: Vec::new(),
            filter: None,
        }
    }

    pub fn set(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_fragment(column, ColumnValue::Bound(value.into()))
    }

    pub fn set_constant(self, column: impl Into<String>, constant: Constant) -> Self {
        self.set_fragment(column, ColumnValue::Constant(constant))
    }

    pub fn set_fragment(mut self, column: impl Into<String>, value: ColumnValue) -> Self {
        self.params.push((column.into(), value));
        self
    }

    pub fn where_(mut self, filter: Predicate) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Shorthand for the common single equality filter.
    pub fn where_equals(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.where_(Predicate::equals(column, value))
    }

    pub fn build(&self) -> Result<(String, Vec<Value>)> {
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
            filter.write_sql(writer, &mut sql);
        }

        let mut args: Vec<Value> = self
            .params
            .iter()
            .filter_map(|(.., value)| value.arg())
            .collect();
        if let Some(filter) = &self.filter {
            filter.append_args(&mut args);
        }
        Ok((sql, args))
    }

    pub fn execute(&self) -> Result<u64> {
        let (sql, args) = self.build()?;
        with_handle(self.db, |handle| handle.execute(&sql, &args))
    }
}
