mod delete;
mod insert;
mod insert_batch;
mod raw;
mod select;
mod update;
mod update_batch;

pub use delete::*;
pub use insert::*;
pub use insert_batch::*;
pub use raw::*;
pub use select::*;
pub use update::*;
pub use update_batch::*;

use crate::{Database, Error, Result, RowLabeled};

/// Entry points mirroring the statement kinds.
pub fn select<'a, T>(
    db: &'a dyn Database,
    table: impl Into<String>,
    mapper: impl Fn(&RowLabeled) -> Result<T> + 'static,
) -> SelectQuery<'a, T> {
    SelectQuery::new(db, table).map_with(mapper)
}

pub fn insert<'a>(db: &'a dyn Database, table: impl Into<String>) -> InsertQuery<'a> {
    InsertQuery::new(db, table)
}

pub fn update<'a>(db: &'a dyn Database, table: impl Into<String>) -> UpdateQuery<'a> {
    UpdateQuery::new(db, table)
}

pub fn delete<'a>(db: &'a dyn Database, table: impl Into<String>) -> DeleteQuery<'a> {
    DeleteQuery::new(db, table)
}

pub fn insert_batch<'a, T>(
    db: &'a dyn Database,
    table: impl Into<String>,
) -> InsertBatchQuery<'a, T> {
    InsertBatchQuery::new(db, table)
}

pub fn update_batch<'a, T>(
    db: &'a dyn Database,
    table: impl Into<String>,
) -> UpdateBatchQuery<'a, T> {
    UpdateBatchQuery::new(db, table)
}

pub fn run<'a>(db: &'a dyn Database, sql: impl Into<String>) -> SqlQuery<'a> {
    SqlQuery::new(db, sql)
}

/// Duplicate column detection shared by the builders that bind named
/// parameters; the first name bound twice is reported.
pub(crate) fn check_duplicates<V>(params: &[(String, V)]) -> Result<()> {
    for (i, (name, ..)) in params.iter().enumerate() {
        if params[..i].iter().any(|(earlier, ..)| earlier == name) {
            return Err(Error::DuplicateParameter(name.clone()));
        }
    }
    Ok(())
}
