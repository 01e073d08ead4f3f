//! Cask (Composable Arguments and Statement Kit).
//!
//! Build parameterized SQL statements from composable fragments and execute
//! them on a shared, thread-scoped unit of work: nested transactional spans
//! and bare handle uses reuse one underlying handle, only the outermost span
//! decides commit versus rollback, and the first failure anywhere in the span
//! rolls the whole unit of work back.
//!
//! ```no_run
//! use cask::{Database, Predicate, insert, transactional, update};
//!
//! fn rename(db: &dyn Database) -> cask::Result<()> {
//!     transactional(|| {
//!         insert(db, "users")
//!             .value("id", 7)
//!             .value("name", "Donald")
//!             .execute()?;
//!         update(db, "users")
//!             .set("name", "Dolly")
//!             .where_(Predicate::equals("id", 7))
//!             .execute()?;
//!         Ok(())
//!     })
//! }
//! ```

pub use cask_core::*;
