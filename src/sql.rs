use chrono::{DateTime, FixedOffset, TimeZone};
use tracing::debug;

use crate::{Date, Error, UnsupportedTypeError};

/// A single column value as handed over by, or to, a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue {
    Null,
    Integer(i64),
    Real(f64),
    Bool(bool),
    Text(String),
    Bytes(Vec<u8>),
    Timestamp(DateTime<FixedOffset>),
}

impl ColumnValue {
    /// Name of the Rust type carried by this variant, used in error messages
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Integer(_) => "i64",
            Self::Real(_) => "f64",
            Self::Bool(_) => "bool",
            Self::Text(_) => "String",
            Self::Bytes(_) => "Vec<u8>",
            Self::Timestamp(_) => "DateTime<FixedOffset>",
        }
    }
}

impl From<String> for ColumnValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ColumnValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<u8>> for ColumnValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<i64> for ColumnValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for ColumnValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<bool> for ColumnValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for ColumnValue {
    fn from(value: DateTime<Tz>) -> Self {
        Self::Timestamp(value.fixed_offset())
    }
}

impl From<Date> for ColumnValue {
    fn from(date: Date) -> Self {
        date.value()
    }
}

impl Date {
    /// Overwrites `self` from a column value returned by a driver.
    ///
    /// Timestamps are projected onto their calendar day in their own offset.
    /// Text and bytes go through the same layouts as [`Date::unmarshal_text`].
    /// On error `self` is left unchanged.
    ///
    /// # Errors
    /// Returns `Error::Format` if text matches no known layout, and
    /// `Error::UnsupportedType` for any other kind of value.
    pub fn scan(&mut self, value: &ColumnValue) -> Result<(), Error> {
        match value {
            ColumnValue::Timestamp(ts) => {
                *self = Self::of(ts);
                Ok(())
            }
            ColumnValue::Bytes(bytes) => Ok(self.unmarshal_text(bytes)?),
            ColumnValue::Text(text) => Ok(self.unmarshal_text(text.as_bytes())?),
            other => {
                let type_name = other.type_name();
                debug!(type_name, "cannot scan column value into a date");
                Err(UnsupportedTypeError { type_name }.into())
            }
        }
    }

    /// Column value to bind for this date, always its canonical text form
    pub fn value(&self) -> ColumnValue {
        ColumnValue::Text(self.to_string())
    }
}

impl TryFrom<ColumnValue> for Date {
    type Error = Error;

    fn try_from(value: ColumnValue) -> Result<Self, Self::Error> {
        let mut date = Self::default();
        date.scan(&value)?;
        Ok(date)
    }
}

#[cfg(feature = "rusqlite")]
mod sqlite {
    use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

    use super::ColumnValue;
    use crate::{Date, Error};

    impl From<ValueRef<'_>> for ColumnValue {
        fn from(value: ValueRef<'_>) -> Self {
            match value {
                ValueRef::Null => Self::Null,
                ValueRef::Integer(i) => Self::Integer(i),
                ValueRef::Real(f) => Self::Real(f),
                ValueRef::Text(t) => Self::Bytes(t.to_vec()),
                ValueRef::Blob(b) => Self::Bytes(b.to_vec()),
            }
        }
    }

    impl FromSql for Date {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            Self::try_from(ColumnValue::from(value)).map_err(|err| match err {
                Error::UnsupportedType(_) => FromSqlError::InvalidType,
                other => FromSqlError::Other(Box::new(other)),
            })
        }
    }

    impl ToSql for Date {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(ToSqlOutput::from(self.to_string()))
        }
    }
}
