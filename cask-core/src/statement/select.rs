use crate::{
    Database, Error, Fragment, OrderBy, Predicate, Result, RowLabeled, SelectColumn, Value,
    with_handle,
};
use std::fmt::Write;

type Mapper<T> = Box<dyn Fn(&RowLabeled) -> Result<T>>;

/// SELECT statement builder.
///
/// The flattened argument array is always column-fragment arguments in column
/// order followed by WHERE arguments; GROUP BY, ORDER BY and the pagination
/// clause never contribute parameters.
pub struct SelectQuery<'a, T> {
    db: &'a dyn Database,
    table: String,
    columns: Vec<SelectColumn>,
    mapper: Option<Mapper<T>>,
    filter: Option<Predicate>,
    group_by: Option<String>,
    order_by: Vec<OrderBy>,
    limit: Option<(u64, u64)>,
    left_join: Option<(String, String, String)>,
}

impl<'a, T> SelectQuery<'a, T> {
    pub fn new(db: &'a dyn Database, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            columns: Vec::new(),
            mapper: None,
            filter: None,
            group_by: None,
            order_by: Vec::new(),
            limit: None,
            left_join: None,
        }
    }

    pub fn column(mut self, column: impl Into<SelectColumn>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn map_with(mut self, mapper: impl Fn(&RowLabeled) -> Result<T> + 'static) -> Self {
        self.mapper = Some(Box::new(mapper));
        self
    }

    pub fn where_(mut self, filter: Predicate) -> Self {
        self.filter = Some(filter);
        self
    }

    /// The grouping column must be one of the selected columns or aliases.
    pub fn group_by(mut self, column: impl Into<String>) -> Self {
        self.group_by = Some(column.into());
        self
    }

    pub fn order_by(mut self, order: OrderBy) -> Self {
        self.order_by.push(order);
        self
    }

    pub fn limit(self, row_count: u64) -> Self {
        self.limit_from(0, row_count)
    }

    pub fn limit_from(mut self, offset: u64, row_count: u64) -> Self {
        self.limit = Some((offset, row_count));
        self
    }

    /// Single LEFT JOIN on one column pair:
    /// `LEFT JOIN <table> ON <this>.<left_on> = <table>.<right_on>`.
    pub fn left_join_on(
        mut self,
        table: impl Into<String>,
        left_on: impl Into<String>,
        right_on: impl Into<String>,
    ) -> Self {
        self.left_join = Some((table.into(), left_on.into(), right_on.into()));
        self
    }

    fn validate(&self) -> Result<()> {
        if self.table.is_empty() || self.columns.is_empty() {
            return Err(Error::Validation(
                "need table and columns to create a select statement".into(),
            ));
        }
        if let Some(group_by) = &self.group_by {
            let selected = self
                .columns
                .iter()
                .any(|column| column.label() == Some(group_by.as_str()));
            if !selected {
                return Err(Error::Validation(
                    "the column grouped by must be selected".into(),
                ));
            }
        }
        if self.mapper.is_none() {
            return Err(Error::Validation(
                "need a mapper function to return the right data type".into(),
            ));
        }
        Ok(())
    }

    /// Render the final SQL text and the flattened argument array.
    pub fn build(&self) -> Result<(String, Vec<Value>)> {
        self.validate()?;
        let writer = self.db.dialect().writer();
        let mut sql = String::from("SELECT ");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            column.write_sql(writer, &mut sql);
        }
        sql.push_str(" FROM ");
        sql.push_str(&self.table);
        if let Some((table, left_on, right_on)) = &self.left_join {
            let _ = write!(
                sql,
                " LEFT JOIN {} ON {}.{} = {}.{}",
                table, self.table, left_on, table, right_on
            );
        }
        if let Some(filter) = &self.filter {
            sql.push_str(" WHERE ");
            filter.write_sql(writer, &mut sql);
        }
        if let Some(group_by) = &self.group_by {
            sql.push_str(" GROUP BY ");
            sql.push_str(group_by);
        }
        if !self.order_by.is_empty() {
            sql.push_str(" ORDER BY ");
            for (i, order) in self.order_by.iter().enumerate() {
                if i > 0 {
                    sql.push_str(", ");
                }
                order.write_sql(writer, &mut sql);
            }
        }
        if let Some((offset, row_count)) = self.limit {
            writer.write_limit(&mut sql, offset, row_count);
        }

        let mut args = Vec::new();
        for column in &self.columns {
            column.append_args(&mut args);
        }
        if let Some(filter) = &self.filter {
            filter.append_args(&mut args);
        }
        Ok((sql, args))
    }

    /// Execute and map the first resulting row, if any.
    pub fn execute(&self) -> Result<Option<T>> {
        let (sql, args) = self.build()?;
        let mapper = self.required_mapper()?;
        let row = with_handle(self.db, |handle| handle.query_first(&sql, &args))?;
        row.as_ref().map(|row| mapper(row)).transpose()
    }

    /// Execute and map every resulting row.
    pub fn execute_to_list(&self) -> Result<Vec<T>> {
        let (sql, args) = self.build()?;
        let mapper = self.required_mapper()?;
        let rows = with_handle(self.db, |handle| handle.query(&sql, &args))?;
        rows.iter().map(|row| mapper(row)).collect()
    }

    fn required_mapper(&self) -> Result<&Mapper<T>> {
        self.mapper.as_ref().ok_or_else(|| {
            Error::Validation("need a mapper function to return the right data type".into())
        })
    }
}
