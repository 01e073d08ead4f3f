use rust_decimal::Decimal;
use std::fmt::{self, Display, Formatter};
use time::{Date, PrimitiveDateTime, Time};
use uuid::Uuid;

macro_rules! write_integer {
    ($f:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $f.write_str(buffer.format($value))
    }};
}

/// A bound statement argument.
///
/// Every variant carries an `Option` so a typed NULL stays distinguishable
/// from the untyped `Null`. Values never render themselves into SQL text,
/// they travel alongside the statement and are bound by the handle; `Display`
/// exists for logging only.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Date(Option<Date>),
    Time(Option<Time>),
    Timestamp(Option<PrimitiveDateTime>),
    Uuid(Option<Uuid>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(v) => v.is_none(),
            Value::Int32(v) => v.is_none(),
            Value::Int64(v) => v.is_none(),
            Value::Float64(v) => v.is_none(),
            Value::Decimal(v) => v.is_none(),
            Value::Varchar(v) => v.is_none(),
            Value::Blob(v) => v.is_none(),
            Value::Date(v) => v.is_none(),
            Value::Time(v) => v.is_none(),
            Value::Timestamp(v) => v.is_none(),
            Value::Uuid(v) => v.is_none(),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            v if v.is_null() => f.write_str("NULL"),
            Value::Boolean(Some(v)) => f.write_str(if *v { "TRUE" } else { "FALSE" }),
            Value::Int32(Some(v)) => write_integer!(f, *v),
            Value::Int64(Some(v)) => write_integer!(f, *v),
            Value::Float64(Some(v)) => {
                let mut buffer = ryu::Buffer::new();
                f.write_str(buffer.format(*v))
            }
            Value::Decimal(Some(v)) => write!(f, "{}", v),
            Value::Varchar(Some(v)) => write!(f, "'{}'", v.replace('\'', "''")),
            Value::Blob(Some(v)) => write!(f, "x'{}'", hex::encode(v)),
            Value::Date(Some(v)) => {
                f.write_str("'")?;
                write_date(f, v)?;
                f.write_str("'")
            }
            Value::Time(Some(v)) => {
                f.write_str("'")?;
                write_time(f, v)?;
                f.write_str("'")
            }
            Value::Timestamp(Some(v)) => {
                f.write_str("'")?;
                write_date(f, &v.date())?;
                f.write_str("T")?;
                write_time(f, &v.time())?;
                f.write_str("'")
            }
            Value::Uuid(Some(v)) => write!(f, "'{}'", v),
            _ => f.write_str("NULL"),
        }
    }
}

fn write_date(f: &mut Formatter<'_>, value: &Date) -> fmt::Result {
    write!(
        f,
        "{:04}-{:02}-{:02}",
        value.year(),
        value.month() as u8,
        value.day()
    )
}

fn write_time(f: &mut Formatter<'_>, value: &Time) -> fmt::Result {
    // Trim trailing zeros off the subsecond part but keep at least one digit.
    let mut subsecond = value.nanosecond();
    let mut width = 9;
    while width > 1 && subsecond % 10 == 0 {
        subsecond /= 10;
        width -= 1;
    }
    write!(
        f,
        "{:02}:{:02}:{:02}.{:0width$}",
        value.hour(),
        value.minute(),
        value.second(),
        subsecond
    )
}

macro_rules! impl_from {
    ($type:ty => $variant:ident) => {
        impl From<$type> for Value {
            fn from(value: $type) -> Self {
                Value::$variant(Some(value))
            }
        }
        impl From<Option<$type>> for Value {
            fn from(value: Option<$type>) -> Self {
                Value::$variant(value)
            }
        }
    };
}

impl_from!(bool => Boolean);
impl_from!(i32 => Int32);
impl_from!(i64 => Int64);
impl_from!(f64 => Float64);
impl_from!(Decimal => Decimal);
impl_from!(String => Varchar);
impl_from!(Date => Date);
impl_from!(Time => Time);
impl_from!(PrimitiveDateTime => Timestamp);
impl_from!(Uuid => Uuid);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Varchar(Some(value.to_owned()))
    }
}

impl From<Option<&str>> for Value {
    fn from(value: Option<&str>) -> Self {
        Value::Varchar(value.map(str::to_owned))
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(Some(value.into_boxed_slice()))
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Value::Blob(Some(value.into()))
    }
}
