use crate::{Constant, Fragment, SqlWriter, Value};
use std::borrow::Cow;

/// A value taking part in an INSERT, UPDATE or CASE branch.
///
/// `Bound` renders one `?` and contributes one argument, `Cast` wraps the
/// placeholder in `CAST(? AS <type>)`, `Constant` renders keyword text and
/// contributes nothing.
#[derive(Debug, Clone)]
pub enum ColumnValue {
    Bound(Value),
    Cast(Value, Cow<'static, str>),
    Constant(Constant),
}

impl ColumnValue {
    pub fn cast(value: impl Into<Value>, sql_type: impl Into<Cow<'static, str>>) -> Self {
        ColumnValue::Cast(value.into(), sql_type.into())
    }

    /// Integer cast, `CAST(? AS INT)`.
    pub fn int(value: i32) -> Self {
        Self::cast(value, "INT")
    }

    /// Varchar cast sized to the value.
    pub fn varchar(value: impl Into<String>) -> Self {
        let value = value.into();
        let sql_type = format!("VARCHAR({})", value.len());
        ColumnValue::Cast(Value::Varchar(Some(value)), sql_type.into())
    }

    /// Whether this value renders a `?` and therefore carries an argument.
    pub fn has_placeholder(&self) -> bool {
        !matches!(self, ColumnValue::Constant(..))
    }

    pub fn arg(&self) -> Option<Value> {
        match self {
            ColumnValue::Bound(value) | ColumnValue::Cast(value, ..) => Some(value.clone()),
            ColumnValue::Constant(..) => None,
        }
    }
}

impl Fragment for ColumnValue {
    fn write_sql(&self, writer: &dyn SqlWriter, out: &mut String) {
        match self {
            ColumnValue::Bound(..) => writer.write_placeholder(out),
            ColumnValue::Cast(.., sql_type) => writer.write_cast_placeholder(out, sql_type),
            ColumnValue::Constant(constant) => writer.write_constant(out, constant),
        }
    }
    fn append_args(&self, args: &mut Vec<Value>) {
        if let Some(value) = self.arg() {
            args.push(value);
        }
    }
}

impl From<Value> for ColumnValue {
    fn from(value: Value) -> Self {
        ColumnValue::Bound(value)
    }
}

impl From<Constant> for ColumnValue {
    fn from(value: Constant) -> Self {
        ColumnValue::Constant(value)
    }
}
