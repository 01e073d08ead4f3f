//! Thread-scoped unit of work coordination.
//!
//! A transactional span is an arbitrary region of code; nested spans and bare
//! handle uses inside it share one lazily opened handle. Only the outermost
//! span decides commit versus rollback, and the first captured failure wins:
//! it forces rollback of the whole unit of work and is the one the caller
//! observes, exactly once. State is confined to the current thread, so
//! concurrent units of work never interfere.

use crate::{Database, Error, Handle, IsolationLevel, Result};
use std::cell::RefCell;
use std::rc::Rc;

type SharedHandle = Rc<RefCell<Box<dyn Handle>>>;

struct UnitOfWork {
    depth: u32,
    handle: Option<SharedHandle>,
    isolation: Option<IsolationLevel>,
    /// First captured failure, as a message; set once, never overwritten.
    poison: Option<String>,
}

thread_local! {
    static CURRENT: RefCell<Option<UnitOfWork>> = const { RefCell::new(None) };
}

/// Whether the calling thread is inside a transactional span.
pub fn in_transaction() -> bool {
    CURRENT.with(|current| current.borrow().is_some())
}

/// Run `f` inside a transactional span with the default isolation level.
pub fn transactional<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    transactional_with(None, f)
}

/// Run `f` inside a transactional span.
///
/// The isolation request is honored only when this is the outermost span and
/// is applied when the shared handle is first opened; nested spans reuse the
/// outer handle and their request is ignored. No handle is opened at all if
/// the span never touches one.
pub fn transactional_with<T>(
    isolation: Option<IsolationLevel>,
    f: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let nested = CURRENT.with(|current| {
        let mut current = current.borrow_mut();
        match current.as_mut() {
            Some(unit) => {
                unit.depth += 1;
                true
            }
            None => {
                *current = Some(UnitOfWork {
                    depth: 1,
                    handle: None,
                    isolation,
                    poison: None,
                });
                false
            }
        }
    });
    let result = f();
    if nested {
        finish_nested(result)
    } else {
        finish_outermost(result)
    }
}

fn finish_nested<T>(result: Result<T>) -> Result<T> {
    CURRENT.with(|current| {
        if let Some(unit) = current.borrow_mut().as_mut() {
            unit.depth -= 1;
            if let Err(error) = &result {
                mark(unit, error);
            }
        }
    });
    result
}

fn finish_outermost<T>(result: Result<T>) -> Result<T> {
    let unit = CURRENT.with(|current| current.borrow_mut().take());
    let Some(mut unit) = unit else {
        // Exiting a span that was never entered cannot happen through the
        // public API.
        return result;
    };
    let failed = result.is_err() || unit.poison.is_some();
    let mut commit_error = None;
    if let Some(shared) = unit.handle.take() {
        let mut handle = shared.borrow_mut();
        if failed {
            log::debug!("rolling back unit of work");
            if let Err(error) = handle.rollback() {
                log::warn!("rollback failed: {error}");
            }
        } else if let Err(error) = handle.commit() {
            commit_error = Some(error);
        }
        if let Err(error) = handle.close() {
            log::warn!("closing transaction handle failed: {error}");
        }
    }
    match result {
        // The captured failure is re-thrown unchanged; being first, it also
        // takes precedence over anything that went wrong during cleanup.
        Err(error) => Err(error),
        Ok(value) => {
            if let Some(message) = unit.poison {
                Err(Error::Transaction(message))
            } else if let Some(error) = commit_error {
                Err(Error::Transaction(format!("commit failed: {error}")))
            } else {
                Ok(value)
            }
        }
    }
}

fn mark(unit: &mut UnitOfWork, error: &Error) {
    if unit.poison.is_none() {
        unit.poison = Some(error.to_string());
    }
}

fn poison(error: &Error) {
    CURRENT.with(|current| {
        if let Some(unit) = current.borrow_mut().as_mut() {
            mark(unit, error);
        }
    });
}

/// Acquire a handle and run `f` against it.
///
/// Inside a transactional span this reuses (lazily opening) the span's shared
/// handle and a failure from `f`, or from acquiring the handle at all, marks
/// the whole unit of work for rollback. Outside any span it opens a
/// short-lived handle and commits or rolls back that single operation
/// atomically.
pub fn with_handle<T>(
    db: &dyn Database,
    f: impl FnOnce(&mut dyn Handle) -> Result<T>,
) -> Result<T> {
    let shared = match shared_handle(db) {
        Ok(shared) => shared,
        Err(error) => {
            poison(&error);
            return Err(error);
        }
    };
    match shared {
        Some(shared) => {
            let result = {
                let mut handle = shared.borrow_mut();
                f(&mut **handle)
            };
            if let Err(error) = &result {
                poison(error);
            }
            result
        }
        None => {
            let mut handle = db.open()?;
            if let Err(error) = handle.begin(None) {
                close_logged(&mut *handle);
                return Err(error);
            }
            let result = f(&mut *handle);
            let mut commit_error = None;
            match &result {
                Ok(..) => {
                    if let Err(error) = handle.commit() {
                        commit_error = Some(error);
                    }
                }
                Err(..) => {
                    if let Err(error) = handle.rollback() {
                        log::warn!("rollback failed: {error}");
                    }
                }
            }
            close_logged(&mut *handle);
            match commit_error {
                Some(error) => Err(Error::Transaction(format!("commit failed: {error}"))),
                None => result,
            }
        }
    }
}

/// [`with_handle`] for callers without a return value.
pub fn use_handle(db: &dyn Database, f: impl FnOnce(&mut dyn Handle) -> Result<()>) -> Result<()> {
    with_handle(db, f)
}

fn close_logged(handle: &mut dyn Handle) {
    if let Err(error) = handle.close() {
        log::warn!("closing handle failed: {error}");
    }
}

/// The span's shared handle, opened on first use, or `None` outside any span.
fn shared_handle(db: &dyn Database) -> Result<Option<SharedHandle>> {
    let (needs_open, isolation) = CURRENT.with(|current| match current.borrow().as_ref() {
        Some(unit) => (unit.handle.is_none(), unit.isolation),
        None => (false, None),
    });
    if !in_transaction() {
        return Ok(None);
    }
    if needs_open {
        let mut handle = db.open()?;
        if let Err(error) = handle.begin(isolation) {
            close_logged(&mut *handle);
            return Err(error);
        }
        let shared: SharedHandle = Rc::new(RefCell::new(handle));
        CURRENT.with(|current| {
            if let Some(unit) = current.borrow_mut().as_mut() {
                unit.handle = Some(shared);
            }
        });
    }
    Ok(CURRENT.with(|current| {
        current
            .borrow()
            .as_ref()
            .and_then(|unit| unit.handle.clone())
    }))
}
