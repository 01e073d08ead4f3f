use crate::{CaseExpr, Error, Fragment, Result, SqlWriter, Value};
use std::borrow::Cow;

/// A column of the SELECT list.
#[derive(Debug, Clone)]
pub enum SelectColumn {
    /// Verbatim column text, e.g. `name` or `count(*)`. Zero arguments.
    Name(Cow<'static, str>),
    /// A CASE expression; arguments forwarded unchanged.
    Case(CaseExpr),
    /// Wrapped fragment with an `as <alias>` suffix; arguments forwarded.
    Aliased(Box<SelectColumn>, String),
}

impl SelectColumn {
    pub fn name(name: impl Into<Cow<'static, str>>) -> Self {
        SelectColumn::Name(name.into())
    }

    /// Wrap in an alias. An empty alias is a construction failure.
    pub fn aliased(self, alias: impl Into<String>) -> Result<Self> {
        let alias = alias.into();
        if alias.is_empty() {
            return Err(Error::Configuration(
                "column alias cannot be empty".into(),
            ));
        }
        Ok(SelectColumn::Aliased(Box::new(self), alias))
    }

    /// The name under which this column appears in the result set, used by
    /// GROUP BY validation. A bare CASE expression has none.
    pub fn label(&self) -> Option<&str> {
        match self {
            SelectColumn::Name(name) => Some(name),
            SelectColumn::Case(..) => None,
            SelectColumn::Aliased(.., alias) => Some(alias),
        }
    }
}

impl Fragment for SelectColumn {
    fn write_sql(&self, writer: &dyn SqlWriter, out: &mut String) {
        match self {
            SelectColumn::Name(name) => out.push_str(name),
            SelectColumn::Case(case) => case.write_sql(writer, out),
            SelectColumn::Aliased(inner, alias) => {
                inner.write_sql(writer, out);
                out.push_str(" as ");
                out.push_str(alias);
            }
        }
    }

    fn append_args(&self, args: &mut Vec<Value>) {
        match self {
            SelectColumn::Name(..) => {}
            SelectColumn::Case(case) => case.append_args(args),
            SelectColumn::Aliased(inner, ..) => inner.append_args(args),
        }
    }
}

impl From<&'static str> for SelectColumn {
    fn from(value: &'static str) -> Self {
        SelectColumn::Name(value.into())
    }
}

impl From<String> for SelectColumn {
    fn from(value: String) -> Self {
        SelectColumn::Name(value.into())
    }
}

impl From<CaseExpr> for SelectColumn {
    fn from(value: CaseExpr) -> Self {
        SelectColumn::Case(value)
    }
}
