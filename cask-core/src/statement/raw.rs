use crate::{Database, Result, with_handle};

/// Raw SQL passthrough, executed on the current unit of work's handle.
pub struct SqlQuery<'a> {
    db: &'a dyn Database,
    sql: String,
}

impl<'a> SqlQuery<'a> {
    pub fn new(db: &'a dyn Database, sql: impl Into<String>) -> Self {
        Self {
            db,
            sql: sql.into(),
        }
    }

    pub fn execute(&self) -> Result<u64> {
        with_handle(self.db, |handle| handle.execute(&self.sql, &[]))
    }
}
