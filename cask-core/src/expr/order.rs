use crate::{Fragment, SqlWriter, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn sql(&self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}

/// A single ORDER BY entry. Never parameterized.
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub column: String,
    pub order: Order,
}

impl OrderBy {
    pub fn asc(column: impl Into<String>) -> Self {
        OrderBy {
            column: column.into(),
            order: Order::Asc,
        }
    }
    pub fn desc(column: impl Into<String>) -> Self {
        OrderBy {
            column: column.into(),
            order: Order::Desc,
        }
    }
}

impl Fragment for OrderBy {
    fn write_sql(&self, _writer: &dyn SqlWriter, out: &mut String) {
        out.push_str(&self.column);
        out.push(' ');
        out.push_str(self.order.sql());
    }
    fn append_args(&self, _args: &mut Vec<Value>) {}
}
