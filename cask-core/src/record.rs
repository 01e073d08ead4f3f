use crate::{Database, InsertQuery, Result, RowLabeled, SelectQuery, UpdateQuery, Value};

/// Explicit per-type column registration, the seam where an object mapping
/// layer plugs into the statement builders. Implementations are written (or
/// generated) per record type; the core never inspects types at runtime.
pub trait SqlRecord: Sized {
    /// Ordered column names, matching `to_values` order.
    fn columns() -> &'static [&'static str];
    /// Map a result row back into the record.
    fn from_row(row: &RowLabeled) -> Result<Self>;
    /// Column name/value pairs of this instance, in `columns()` order.
    fn to_values(&self) -> Vec<(&'static str, Value)>;
}

/// SELECT over all registered columns, mapped through the record type.
pub fn select_record<'a, T: SqlRecord + 'static>(
    db: &'a dyn Database,
    table: impl Into<String>,
) -> SelectQuery<'a, T> {
    let mut query = SelectQuery::new(db, table).map_with(|row| T::from_row(row));
    for column in T::columns() {
        query = query.column(*column);
    }
    query
}

/// INSERT binding every registered column of `record`.
pub fn insert_record<'a, T: SqlRecord>(
    db: &'a dyn Database,
    table: impl Into<String>,
    record: &T,
) -> InsertQuery<'a> {
    let mut query = InsertQuery::new(db, table);
    for (column, value) in record.to_values() {
        query = query.value(column, value);
    }
    query
}

/// UPDATE setting every registered column of `record`; the caller still
/// supplies the WHERE tree.
pub fn update_record<'a, T: SqlRecord>(
    db: &'a dyn Database,
    table: impl Into<String>,
    record: &T,
) -> UpdateQuery<'a> {
    let mut query = UpdateQuery::new(db, table);
    for (column, value) in record.to_values() {
        query = query.set(column, value);
    }
    query
}
