use crate::{SqlWriter, Value};
use std::fmt::Debug;

/// A composable unit producing SQL text plus its ordered bound arguments.
///
/// The invariant every implementation upholds, recursively through all
/// combinators: the number of placeholders written by [`write_sql`] equals
/// the number of values appended by [`append_args`], and argument order
/// matches left-to-right placeholder order.
///
/// [`write_sql`]: Fragment::write_sql
/// [`append_args`]: Fragment::append_args
pub trait Fragment: Debug {
    /// Serialize the fragment into the output string using the sql writer.
    fn write_sql(&self, writer: &dyn SqlWriter, out: &mut String);
    /// Append the bound arguments in placeholder order.
    fn append_args(&self, args: &mut Vec<Value>);

    fn render(&self, writer: &dyn SqlWriter) -> String {
        let mut out = String::new();
        self.write_sql(writer, &mut out);
        out
    }
    fn arguments(&self) -> Vec<Value> {
        let mut args = Vec::new();
        self.append_args(&mut args);
        args
    }
}
