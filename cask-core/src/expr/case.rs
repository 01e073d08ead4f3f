use crate::{ColumnValue, Fragment, Predicate, SqlWriter, Value};

/// A complete `CASE WHEN .. THEN .. ELSE .. END` expression.
///
/// Built through [`CaseWhen`], whose [`otherwise`] step supplies the
/// mandatory else branch, so an expression without one cannot be
/// constructed. Argument order is the concatenation, branch by branch, of
/// each condition's arguments followed by its value's argument, then the
/// else value's argument.
///
/// [`otherwise`]: CaseWhen::otherwise
#[derive(Debug, Clone)]
pub struct CaseExpr {
    branches: Vec<(Predicate, ColumnValue)>,
    fallback: ColumnValue,
}

impl CaseExpr {
    /// Start a CASE expression with its first branch.
    pub fn when(condition: Predicate, value: impl Into<ColumnValue>) -> CaseWhen {
        CaseWhen {
            branches: vec![(condition, value.into())],
        }
    }
}

/// Builder holding the WHEN branches collected so far.
#[derive(Debug, Clone)]
pub struct CaseWhen {
    branches: Vec<(Predicate, ColumnValue)>,
}

impl CaseWhen {
    pub fn when(mut self, condition: Predicate, value: impl Into<ColumnValue>) -> Self {
        self.branches.push((condition, value.into()));
        self
    }

    pub fn otherwise(self, value: impl Into<ColumnValue>) -> CaseExpr {
        CaseExpr {
            branches: self.branches,
            fallback: value.into(),
        }
    }
}

impl Fragment for CaseExpr {
    fn write_sql(&self, writer: &dyn SqlWriter, out: &mut String) {
        out.push_str("CASE ");
        for (condition, value) in &self.branches {
            out.push_str("WHEN ");
            condition.write_sql(writer, out);
            out.push_str(" THEN ");
            value.write_sql(writer, out);
            out.push(' ');
        }
        out.push_str("ELSE ");
        self.fallback.write_sql(writer, out);
        out.push_str(" END");
    }

    fn append_args(&self, args: &mut Vec<Value>) {
        for (condition, value) in &self.branches {
            condition.append_args(args);
            value.append_args(args);
        }
        self.fallback.append_args(args);
    }
}
