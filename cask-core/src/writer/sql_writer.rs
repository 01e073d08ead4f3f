use crate::Constant;

/// The single configuration flag selecting per-dialect string substitutions.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    #[default]
    Generic,
    Oracle,
    Mssql,
}

impl Dialect {
    pub fn writer(&self) -> &'static dyn SqlWriter {
        match self {
            Dialect::Generic => &GenericSqlWriter,
            Dialect::Oracle => &OracleSqlWriter,
            Dialect::Mssql => &MssqlSqlWriter,
        }
    }
}

/// Dialect printer converting semantic constructs into concrete SQL strings.
///
/// Default method bodies are the generic rendition; dialect writers override
/// only the pieces that differ. SQL stays driver-agnostic beyond these
/// substitution points.
pub trait SqlWriter: Send + Sync {
    /// Positional parameter marker.
    fn write_placeholder(&self, out: &mut String) {
        out.push('?');
    }

    /// Placeholder wrapped in an explicit cast.
    fn write_cast_placeholder(&self, out: &mut String, sql_type: &str) {
        out.push_str("CAST(");
        self.write_placeholder(out);
        out.push_str(" AS ");
        out.push_str(sql_type);
        out.push(')');
    }

    /// Render a literal constant, substituting dialect syntax where needed.
    fn write_constant(&self, out: &mut String, value: &Constant) {
        match value {
            Constant::CurrentTimestamp => out.push_str("CURRENT_TIMESTAMP"),
            Constant::Null => out.push_str("NULL"),
            Constant::NextVal(sequence) => {
                out.push_str(sequence);
                out.push_str(".NEXTVAL");
            }
            Constant::Verbatim(sql) => out.push_str(sql),
        }
    }

    /// Pagination clause. Offsets are rendered inline, never parameterized.
    fn write_limit(&self, out: &mut String, offset: u64, row_count: u64) {
        let mut buffer = itoa::Buffer::new();
        out.push_str(" OFFSET ");
        out.push_str(buffer.format(offset));
        out.push_str(" ROWS FETCH NEXT ");
        out.push_str(buffer.format(row_count));
        out.push_str(" ROWS ONLY");
    }
}

pub struct GenericSqlWriter;

impl SqlWriter for GenericSqlWriter {}

pub struct OracleSqlWriter;

impl SqlWriter for OracleSqlWriter {}

pub struct MssqlSqlWriter;

impl SqlWriter for MssqlSqlWriter {
    fn write_constant(&self, out: &mut String, value: &Constant) {
        if let Constant::NextVal(sequence) = value {
            out.push_str("NEXT VALUE FOR ");
            out.push_str(sequence);
        } else {
            GenericSqlWriter.write_constant(out, value);
        }
    }
}
