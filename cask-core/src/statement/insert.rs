use crate::{
    ColumnValue, Constant, Database, Error, Fragment, Result, Value, statement::check_duplicates,
    with_handle,
};

/// INSERT statement builder.
///
/// Renders `insert into <table> (<columns>) values (<fragments>)`; only
/// fragments that contribute a placeholder add to the argument array.
pub struct InsertQuery<'a> {
    db: &'a dyn Database,
    table: String,
    values: Vec<(String, ColumnValue)>,
}

impl<'a> InsertQuery<'a> {
    pub fn new(db: &'a dyn Database, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            values: Vec::new(),
        }
    }

    /// Bind a plain value for a column.
    pub fn value(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fragment(column, ColumnValue::Bound(value.into()))
    }

    /// Use a literal constant for a column.
    pub fn constant(self, column: impl Into<String>, constant: Constant) -> Self {
        self.fragment(column, ColumnValue::Constant(constant))
    }

    /// Use an arbitrary value fragment (e.g. a cast) for a column.
    pub fn fragment(mut self, column: impl Into<String>, value: ColumnValue) -> Self {
        self.values.push((column.into(), value));
        self
    }

    pub fn build(&self) -> Result<(String, Vec<Value>)> {
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

        let args = self
            .values
            .iter()
            .filter_map(|(.., value)| value.arg())
            .collect();
        Ok((sql, args))
    }

    pub fn execute(&self) -> Result<u64> {
        let (sql, args) = self.build()?;
        with_handle(self.db, |handle| handle.execute(&sql, &args))
    }
}
