use std::fmt::{Display, Formatter, Result as FmtResult};

/// A runtime value substituted into a template.
///
/// # Example
///
/// ```
/// use wordform::Value;
///
/// let age: Value = 65.into();
/// let name: Value = "Bob".into();
/// assert_eq!(age.to_string(), "65");
/// assert_eq!(name.to_string(), "Bob");
/// assert_eq!(Value::from(true).to_string(), "1");
/// assert_eq!(Value::Null.to_string(), "");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer number.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// A boolean, rendered as `1` or the empty string.
    Bool(bool),

    /// A string value.
    String(String),

    /// No value; rendered as the empty string.
    Null,
}

impl Value {
    /// Convert anything printable into a string value.
    pub fn display(value: impl Display) -> Value {
        Value::String(value.to_string())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get this value as a number, if it is one.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as a string, if it is one.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(true) => f.write_str("1"),
            Value::Bool(false) | Value::Null => Ok(()),
            Value::String(s) => f.write_str(s),
        }
    }
}

// From implementations for common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Data for [`insert`](crate::insert): named pairs or positional values.
///
/// ```
/// use wordform::{Data, Value};
///
/// let named = Data::from([("name", "Bob"), ("age", "65")]);
/// assert_eq!(named.len(), 2);
///
/// let positional = Data::from(vec!["cat", "dog"]);
/// assert_eq!(positional.first(), Some(&Value::from("cat")));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// Ordered (key, value) pairs.
    Named(Vec<(String, Value)>),

    /// Ordered values, addressed as keys `0`, `1`, ... in pattern mode.
    Positional(Vec<Value>),
}

impl Data {
    pub fn len(&self) -> usize {
        match self {
            Data::Named(pairs) => pairs.len(),
            Data::Positional(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first value, in either shape.
    pub fn first(&self) -> Option<&Value> {
        match self {
            Data::Named(pairs) => pairs.first().map(|(_, value)| value),
            Data::Positional(values) => values.first(),
        }
    }

    /// (key, value) pairs, with positional values keyed by their index.
    pub fn into_pairs(self) -> Vec<(String, Value)> {
        match self {
            Data::Named(pairs) => pairs,
            Data::Positional(values) => values
                .into_iter()
                .enumerate()
                .map(|(index, value)| (index.to_string(), value))
                .collect(),
        }
    }
}

impl Default for Data {
    fn default() -> Self {
        Data::Named(Vec::new())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Data
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<V: Into<Value>> From<Vec<V>> for Data {
    fn from(values: Vec<V>) -> Self {
        Data::Positional(values.into_iter().map(Into::into).collect())
    }
}

impl<K, V> FromIterator<(K, V)> for Data
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Data::Named(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
