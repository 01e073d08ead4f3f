#![allow(dead_code)]

use cask_core::{
    Database, Dialect, Error, Handle, IsolationLevel, Result, Row, RowLabeled, Value,
};
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Everything a mock handle was asked to do, tagged with the handle id.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Open(u32),
    Begin(u32, Option<IsolationLevel>),
    Execute(u32, String, Vec<Value>),
    Query(u32, String, Vec<Value>),
    Batch(u32, String, Vec<Row>),
    Commit(u32),
    Rollback(u32),
    Close(u32),
}

/// Recording fake of the handle provider. Statements whose SQL contains
/// `FAIL` error out, which is how tests inject execution failures.
#[derive(Default)]
pub struct MockDb {
    dialect: Dialect,
    next_id: AtomicU32,
    fail_opens: AtomicU32,
    fail_begin: AtomicBool,
    calls: Arc<Mutex<Vec<Call>>>,
    rows: Arc<Mutex<Vec<RowLabeled>>>,
}

impl MockDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Make the next `open` fail; later opens succeed again.
    pub fn fail_next_open(&self) {
        self.fail_opens.fetch_add(1, Ordering::SeqCst);
    }

    /// Make every `begin` fail.
    pub fn fail_begin(&self) {
        self.fail_begin.store(true, Ordering::SeqCst);
    }

    /// Queue a row to be returned by subsequent queries.
    pub fn push_row(&self, labels: &[&str], values: Vec<Value>) {
        let labels: Arc<[String]> = labels.iter().map(|s| s.to_string()).collect();
        self.rows
            .lock()
            .unwrap()
            .push(RowLabeled::new(labels, values.into_boxed_slice()));
    }
}

impl Database for MockDb {
    fn open(&self) -> Result<Box<dyn Handle>> {
        if self.fail_opens.load(Ordering::SeqCst) > 0 {
            self.fail_opens.fetch_sub(1, Ordering::SeqCst);
            return Err(Error::execution(io::Error::other("forced open failure")));
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.calls.lock().unwrap().push(Call::Open(id));
        Ok(Box::new(MockHandle {
            id,
            fail_begin: self.fail_begin.load(Ordering::SeqCst),
            calls: self.calls.clone(),
            rows: self.rows.clone(),
        }))
    }

    fn dialect(&self) -> Dialect {
        self.dialect
    }
}

pub struct MockHandle {
    id: u32,
    fail_begin: bool,
    calls: Arc<Mutex<Vec<Call>>>,
    rows: Arc<Mutex<Vec<RowLabeled>>>,
}

impl MockHandle {
    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn check(&self, sql: &str) -> Result<()> {
        if sql.contains("FAIL") {
            return Err(Error::execution(io::Error::other("forced failure")));
        }
        Ok(())
    }
}

impl Handle for MockHandle {
    fn execute(&mut self, sql: &str, args: &[Value]) -> Result<u64> {
        self.record(Call::Execute(self.id, sql.to_owned(), args.to_vec()));
        self.check(sql)?;
        Ok(1)
    }

    fn query(&mut self, sql: &str, args: &[Value]) -> Result<Vec<RowLabeled>> {
        self.record(Call::Query(self.id, sql.to_owned(), args.to_vec()));
        self.check(sql)?;
        Ok(self.rows.lock().unwrap().clone())
    }

    fn execute_batch(&mut self, sql: &str, rows: Vec<Row>) -> Result<Vec<u64>> {
        let count = rows.len();
        self.record(Call::Batch(self.id, sql.to_owned(), rows));
        self.check(sql)?;
        Ok(vec![1; count])
    }

    fn begin(&mut self, isolation: Option<IsolationLevel>) -> Result<()> {
        self.record(Call::Begin(self.id, isolation));
        if self.fail_begin {
            return Err(Error::execution(io::Error::other("forced begin failure")));
        }
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.record(Call::Commit(self.id));
        Ok(())
    }

    fn rollback(&mut self) -> Result<()> {
        self.record(Call::Rollback(self.id));
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.record(Call::Close(self.id));
        Ok(())
    }
}
