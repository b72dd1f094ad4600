//! Cell value types

use std::borrow::Cow;
use std::fmt;

/// Represents the value stored in a cell
///
/// Request bodies carry heterogeneous values with no static type; every value
/// is decoded into one of these variants before it reaches a generator.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value (JSON `null`, `None`)
    #[default]
    Absent,

    /// Boolean value
    Boolean(bool),

    /// Integer value
    Integer(i64),

    /// Floating-point value
    Float(f64),

    /// String value
    String(String),

    /// Any other value, already rendered as text
    Other(String),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Create a value from a pre-rendered textual form
    pub fn other<S: Into<String>>(text: S) -> Self {
        CellValue::Other(text.into())
    }

    /// Check if the cell holds no value
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    /// Render the value as a delimited-text field.
    ///
    /// Integers use canonical base-10, floats the shortest text that parses
    /// back to the same value, booleans `true`/`false`, and absent values the
    /// empty string.
    ///
    /// ```
    /// use tabex_core::CellValue;
    ///
    /// assert_eq!(CellValue::from(42).to_delimited_text(), "42");
    /// assert_eq!(CellValue::from(3.140000).to_delimited_text(), "3.14");
    /// assert_eq!(CellValue::Absent.to_delimited_text(), "");
    /// ```
    pub fn to_delimited_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Absent => Cow::Borrowed(""),
            CellValue::Boolean(true) => Cow::Borrowed("true"),
            CellValue::Boolean(false) => Cow::Borrowed("false"),
            CellValue::Integer(n) => Cow::Owned(n.to_string()),
            CellValue::Float(f) => Cow::Owned(f.to_string()),
            CellValue::String(s) | CellValue::Other(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_delimited_text())
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

macro_rules! impl_from_lossless_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(n: $t) -> Self {
                    CellValue::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for CellValue {
                fn from(n: $t) -> Self {
                    match i64::try_from(n) {
                        Ok(n) => CellValue::Integer(n),
                        Err(_) => CellValue::Other(n.to_string()),
                    }
                }
            }
        )*
    };
}

// Values beyond i64 keep their exact decimal text.
impl_from_wide_int!(isize, usize, u64, i128, u128);

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Float(n)
    }
}

impl From<f32> for CellValue {
    /// Widens through the shortest `f32` representation, so `3.14f32`
    /// becomes `3.14` rather than `3.140000104904175`.
    fn from(n: f32) -> Self {
        let widened = n.to_string().parse::<f64>().unwrap_or(f64::from(n));
        CellValue::Float(widened)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::string(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Absent, Into::into)
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Value> for CellValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => CellValue::Absent,
            Value::Bool(b) => CellValue::Boolean(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    CellValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    CellValue::from(u)
                } else {
                    n.as_f64()
                        .map(CellValue::Float)
                        .unwrap_or_else(|| CellValue::Other(n.to_string()))
                }
            }
            Value::String(s) => CellValue::String(s),
            other @ (Value::Array(_) | Value::Object(_)) => CellValue::Other(other.to_string()),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CellValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(CellValue::from)
    }
}
