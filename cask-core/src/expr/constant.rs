use crate::{Fragment, SqlWriter, Value};
use std::borrow::Cow;

/// Fixed SQL keyword text, contributing zero bound arguments.
///
/// `NextVal` is one of the two dialect substitution points: the generic and
/// Oracle writers render `<seq>.NEXTVAL`, the MSSQL writer
/// `NEXT VALUE FOR <seq>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constant {
    CurrentTimestamp,
    Null,
    NextVal(Cow<'static, str>),
    Verbatim(Cow<'static, str>),
}

impl Constant {
    pub fn next_val(sequence: impl Into<Cow<'static, str>>) -> Self {
        Constant::NextVal(sequence.into())
    }

    pub fn verbatim(sql: impl Into<Cow<'static, str>>) -> Self {
        Constant::Verbatim(sql.into())
    }
}

impl Fragment for Constant {
    fn write_sql(&self, writer: &dyn SqlWriter, out: &mut String) {
        writer.write_constant(out, self);
    }
    fn append_args(&self, _args: &mut Vec<Value>) {}
}
