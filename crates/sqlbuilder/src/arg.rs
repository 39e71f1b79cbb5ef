//! Bound argument values.
//!
//! Builders carry arguments opaquely: an [`Arg`] is stored in insertion order and
//! handed back unchanged by `build()`. Use [`args!`](crate::args) to collect
//! heterogeneous values into a `Vec<Arg>`:
//!
//! ```
//! use sqlbuilder::{Arg, args};
//!
//! let values = args![1, "John", None::<i64>];
//! assert_eq!(values, vec![Arg::Int(1), Arg::Text("John".into()), Arg::Null]);
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// A single positional argument bound to a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Arg {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Json(serde_json::Value),
    Timestamp(DateTime<Utc>),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Uuid(Uuid),
    #[cfg(feature = "rust_decimal")]
    Decimal(rust_decimal::Decimal),
}

impl Arg {
    /// Whether this argument is SQL `NULL`.
    pub fn is_null(&self) -> bool {
        matches!(self, Arg::Null)
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Null => f.write_str("NULL"),
            Arg::Bool(v) => write!(f, "{v}"),
            Arg::Int(v) => write!(f, "{v}"),
            Arg::UInt(v) => write!(f, "{v}"),
            Arg::Float(v) => write!(f, "{v}"),
            Arg::Text(v) => f.write_str(v),
            Arg::Bytes(v) => {
                f.write_str("\\x")?;
                for b in v {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Arg::Json(v) => write!(f, "{v}"),
            Arg::Timestamp(v) => f.write_str(&v.to_rfc3339()),
            Arg::DateTime(v) => write!(f, "{v}"),
            Arg::Date(v) => write!(f, "{v}"),
            Arg::Uuid(v) => write!(f, "{v}"),
            #[cfg(feature = "rust_decimal")]
            Arg::Decimal(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),+ => $target:ty) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::$variant(value as $target)
                }
            }
        )+
    };
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::$variant(value)
                }
            }
        )+
    };
}

impl_from!(Int: i8, i16, i32, i64, isize => i64);
impl_from!(UInt: u8, u16, u32, u64, usize => u64);
impl_from!(Float: f32, f64 => f64);
impl_from!(Bool: bool);
impl_from!(Text: String);
impl_from!(Bytes: Vec<u8>);
impl_from!(Json: serde_json::Value);
impl_from!(Timestamp: DateTime<Utc>);
impl_from!(DateTime: NaiveDateTime);
impl_from!(Date: NaiveDate);
impl_from!(Uuid: Uuid);

#[cfg(feature = "rust_decimal")]
impl_from!(Decimal: rust_decimal::Decimal);

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Text(value.to_owned())
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Text(value.clone())
    }
}

impl From<&[u8]> for Arg {
    fn from(value: &[u8]) -> Self {
        Arg::Bytes(value.to_vec())
    }
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        value.map_or(Arg::Null, Into::into)
    }
}

/// Collect heterogeneous values into a `Vec<Arg>`.
///
/// `args![]` yields an empty list, which every builder treats as "no arguments".
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::Arg::from($value)),+]
    };
}
