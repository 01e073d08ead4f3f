mod error;
mod expr;
mod fragment;
mod handle;
mod record;
mod statement;
mod transaction;
mod value;
mod writer;

pub use error::*;
pub use expr::*;
pub use fragment::*;
pub use handle::*;
pub use record::*;
pub use statement::*;
pub use transaction::*;
pub use value::*;
pub use writer::*;

pub type Result<T, E = Error> = std::result::Result<T, E>;
