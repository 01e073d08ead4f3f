use crate::{Database, Error, Fragment, Predicate, Result, Value, with_handle};

/// DELETE statement builder. The WHERE tree is required; every one of its
/// arguments is bound.
pub struct DeleteQuery<'a> {
    db: &'a dyn Database,
    table: String,
    filter: Option<Predicate>,
}

impl<'a> DeleteQuery<'a> {
    pub fn new(db: &'a dyn Database, table: impl Into<String>) -> Self {
        Self {
            db,
            table: table.into(),
            filter: None,
        }
    }

    pub fn where_(mut self, filter: Predicate) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn build(&self) -> Result<(String, Vec<Value>)> {
        let Some(filter) = &self.filter else {
            return Err(Error::Validation(
                "need table and a where clause to create a delete statement".into(),
            ));
        };
        if self.table.is_empty() {
            return Err(Error::Validation(
                "need table and a where clause to create a delete statement".into(),
            ));
        }
        let writer = self.db.dialect().writer();
        let mut sql = String::from("DELETE FROM ");
        sql.push_str(&self.table);
        sql.push_str(" WHERE ");
        filter.write_sql(writer, &mut sql);
        Ok((sql, filter.arguments()))
    }

    pub fn execute(&self) -> Result<u64> {
        let (sql, args) = self.build()?;
        with_handle(self.db, |handle| handle.execute(&sql, &args))
    }
}
