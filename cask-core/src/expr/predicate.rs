use crate::{Fragment, SqlWriter, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Equal,
    NotEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
}

impl CompareOp {
    pub fn sql(&self) -> &'static str {
        match self {
            CompareOp::Equal => "=",
            CompareOp::NotEqual => "!=",
            CompareOp::Greater => ">",
            CompareOp::GreaterEqual => ">=",
            CompareOp::Less => "<",
            CompareOp::LessEqual => "<=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    pub fn sql(&self) -> &'static str {
        match self {
            LogicalOp::And => "AND",
            LogicalOp::Or => "OR",
        }
    }
}

/// Boolean WHERE tree.
///
/// A closed set of predicate nodes; combinators always parenthesize both
/// children so precedence stays correct under arbitrary nesting, and a
/// combinator's argument list is its left child's arguments followed by its
/// right child's, never reordered or deduplicated.
#[derive(Debug, Clone)]
pub enum Predicate {
    Compare {
        field: String,
        op: CompareOp,
        value: Value,
    },
    Like {
        field: String,
        pattern: Value,
    },
    /// One placeholder per element in collection order. An empty collection
    /// renders `<field> IN ()`, which most drivers reject; callers guard
    /// against empty inputs themselves.
    In {
        field: String,
        values: Vec<Value>,
    },
    IsNull {
        field: String,
    },
    IsNotNull {
        field: String,
    },
    Logical {
        op: LogicalOp,
        lhs: Box<Predicate>,
        rhs: Box<Predicate>,
    },
}

impl Predicate {
    fn compare(field: impl Into<String>, op: CompareOp, value: impl Into<Value>) -> Self {
        Predicate::Compare {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    pub fn equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Equal, value)
    }
    pub fn not_equals(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::NotEqual, value)
    }
    pub fn gt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Greater, value)
    }
    pub fn gteq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::GreaterEqual, value)
    }
    pub fn lt(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::Less, value)
    }
    pub fn lteq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(field, CompareOp::LessEqual, value)
    }

    pub fn like(field: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Predicate::Like {
            field: field.into(),
            pattern: pattern.into(),
        }
    }

    pub fn is_in<V: Into<Value>>(
        field: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Predicate::In {
            field: field.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_null(field: impl Into<String>) -> Self {
        Predicate::IsNull {
            field: field.into(),
        }
    }
    pub fn is_not_null(field: impl Into<String>) -> Self {
        Predicate::IsNotNull {
            field: field.into(),
        }
    }

    pub fn always_true() -> Self {
        Self::equals("1", "1")
    }
    pub fn always_false() -> Self {
        Self::not_equals("1", "1")
    }

    fn logical(self, op: LogicalOp, other: Predicate) -> Self {
        Predicate::Logical {
            op,
            lhs: Box::new(self),
            rhs: Box::new(other),
        }
    }

    pub fn and(self, other: Predicate) -> Self {
        self.logical(LogicalOp::And, other)
    }
    pub fn or(self, other: Predicate) -> Self {
        self.logical(LogicalOp::Or, other)
    }
    /// Combine with AND only when `condition` holds; handy for optional filters.
    pub fn and_if(self, other: Predicate, condition: bool) -> Self {
        if condition { self.and(other) } else { self }
    }
}

impl Fragment for Predicate {
    fn write_sql(&self, writer: &dyn SqlWriter, out: &mut String) {
        match self {
            Predicate::Compare { field, op, .. } => {
                out.push_str(field);
                out.push(' ');
                out.push_str(op.sql());
                out.push(' ');
                writer.write_placeholder(out);
            }
            Predicate::Like { field, .. } => {
                out.push_str(field);
                out.push_str(" LIKE ");
                writer.write_placeholder(out);
            }
            Predicate::In { field, values } => {
                out.push_str(field);
                out.push_str(" IN (");
                for i in 0..values.len() {
                    if i > 0 {
                        out.push(',');
                    }
                    writer.write_placeholder(out);
                }
                out.push(')');
            }
            Predicate::IsNull { field } => {
                out.push_str(field);
                out.push_str(" is null");
            }
            Predicate::IsNotNull { field } => {
                out.push_str(field);
                out.push_str(" is not null");
            }
            Predicate::Logical { op, lhs, rhs } => {
                out.push('(');
                lhs.write_sql(writer, out);
                out.push_str(") ");
                out.push_str(op.sql());
                out.push_str(" (");
                rhs.write_sql(writer, out);
                out.push(')');
            }
        }
    }

    fn append_args(&self, args: &mut Vec<Value>) {
        match self {
            Predicate::Compare { value, .. } => args.push(value.clone()),
            Predicate::Like { pattern, .. } => args.push(pattern.clone()),
            Predicate::In { values, .. } => args.extend(values.iter().cloned()),
            Predicate::IsNull { .. } | Predicate::IsNotNull { .. } => {}
            Predicate::Logical { lhs, rhs, .. } => {
                lhs.append_args(args);
                rhs.append_args(args);
            }
        }
    }
}
