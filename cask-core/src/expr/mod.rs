mod case;
mod column;
mod column_value;
mod constant;
mod order;
mod predicate;

pub use case::*;
pub use column::*;
pub use column_value::*;
pub use constant::*;
pub use order::*;
pub use predicate::*;
