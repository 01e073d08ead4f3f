use crate::{Dialect, Result, Value};
use std::sync::Arc;

/// Isolation requested by the outermost transactional span, applied when the
/// shared handle is first opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IsolationLevel {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

/// Shared reference-counted column name list.
pub type RowNames = Arc<[String]>;
/// Owned row value slice matching `RowNames` length.
pub type Row = Box<[Value]>;

/// A result row with its corresponding column labels.
#[derive(Debug, Clone)]
pub struct RowLabeled {
    /// Column names.
    pub labels: RowNames,
    /// Data values (aligned by index with `labels`).
    pub values: Row,
}

impl RowLabeled {
    pub fn new(labels: RowNames, values: Row) -> Self {
        Self { labels, values }
    }
    pub fn names(&self) -> &[String] {
        &self.labels
    }
    pub fn values(&self) -> &[Value] {
        &self.values
    }
    pub fn get_column(&self, name: &str) -> Option<&Value> {
        self.labels
            .iter()
            .position(|v| v == name)
            .map(|i| &self.values[i])
    }
}

/// An open connection/session able to run statements and manage transaction
/// boundaries. Implemented by drivers, consumed by the core; the core never
/// opens one except through a [`Database`].
pub trait Handle {
    /// Run a statement with bound arguments, returning the affected row count.
    fn execute(&mut self, sql: &str, args: &[Value]) -> Result<u64>;

    /// Run a query and return all resulting rows.
    fn query(&mut self, sql: &str, args: &[Value]) -> Result<Vec<RowLabeled>>;

    /// First-result variant of [`query`](Handle::query).
    fn query_first(&mut self, sql: &str, args: &[Value]) -> Result<Option<RowLabeled>> {
        Ok(self.query(sql, args)?.into_iter().next())
    }

    /// Run one statement template once per argument row, returning per-row
    /// affected counts.
    fn execute_batch(&mut self, sql: &str, rows: Vec<Row>) -> Result<Vec<u64>>;

    fn begin(&mut self, isolation: Option<IsolationLevel>) -> Result<()>;
    fn commit(&mut self) -> Result<()>;
    fn rollback(&mut self) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}

/// Provider of handles; the entry point statement builders execute through.
pub trait Database {
    fn open(&self) -> Result<Box<dyn Handle>>;

    fn dialect(&self) -> Dialect {
        Dialect::Generic
    }
}
