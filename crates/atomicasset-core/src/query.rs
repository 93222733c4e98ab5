//! Query-string encoding for filter values.
//!
//! Every filterable endpoint takes its filter as URL query parameters. Filter
//! structs implement [`FilterSpec`] by pushing their fields into a
//! [`QueryParams`] builder, one call per field:
//!
//! - scalars render through their canonical string form (`true`/`false`,
//!   decimal integers)
//! - [`QueryList`] renders as **one** key whose value is the elements joined
//!   by `,`, never as repeated keys
//! - fields holding their zero value (`""`, `0`, `false`, an unset enum, an
//!   empty list) are omitted
//!
//! Encoding is pure: the same filter always produces the same parameters and,
//! through [`QueryParams::to_query_string`], the same query string.

use crate::encoding::encode_query_component;
use std::fmt;

/// A value that can be rendered as a single query parameter value.
pub trait QueryValue {
    /// Render the value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value has no valid query representation.
    fn to_param(&self) -> Result<String, EncodeError>;

    /// Whether the value is its type's zero value.
    fn is_zero(&self) -> bool;

    /// Whether the value is an empty list. Empty lists are never encoded.
    fn is_empty_list(&self) -> bool {
        false
    }
}

impl QueryValue for String {
    fn to_param(&self) -> Result<String, EncodeError> {
        Ok(self.clone())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl QueryValue for &str {
    fn to_param(&self) -> Result<String, EncodeError> {
        Ok((*self).to_string())
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl QueryValue for bool {
    fn to_param(&self) -> Result<String, EncodeError> {
        Ok(self.to_string())
    }

    fn is_zero(&self) -> bool {
        !*self
    }
}

macro_rules! integer_query_value {
    ($($ty:ty),*) => {
        $(
            impl QueryValue for $ty {
                fn to_param(&self) -> Result<String, EncodeError> {
                    Ok(self.to_string())
                }

                fn is_zero(&self) -> bool {
                    *self == 0
                }
            }
        )*
    };
}

integer_query_value!(i32, i64, u32, u64, usize);

impl QueryValue for f64 {
    fn to_param(&self) -> Result<String, EncodeError> {
        if self.is_finite() {
            Ok(self.to_string())
        } else {
            Err(EncodeError::InvalidValue {
                key: String::new(),
                reason: format!("{self} is not a finite number"),
            })
        }
    }

    fn is_zero(&self) -> bool {
        *self == 0.0
    }
}

impl<T: QueryValue> QueryValue for Option<T> {
    fn to_param(&self) -> Result<String, EncodeError> {
        match self {
            Some(value) => value.to_param(),
            None => Ok(String::new()),
        }
    }

    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn is_empty_list(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_empty_list())
    }
}

/// A list parameter, encoded as one comma-joined value.
///
/// `QueryList::from(vec!["a", "b", "c"])` encodes as `key=a,b,c` rather than
/// `key=a&key=b&key=c`, which is what the API expects for every list filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryList<T>(pub Vec<T>);

impl<T> QueryList<T> {
    /// Create an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Whether the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<T> Default for QueryList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for QueryList<T> {
    fn from(items: Vec<T>) -> Self {
        Self(items)
    }
}

impl<T, const N: usize> From<[T; N]> for QueryList<T> {
    fn from(items: [T; N]) -> Self {
        Self(items.into())
    }
}

impl<T> FromIterator<T> for QueryList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: fmt::Display> QueryValue for QueryList<T> {
    fn to_param(&self) -> Result<String, EncodeError> {
        Ok(self
            .0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(","))
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn is_empty_list(&self) -> bool {
        self.is_empty()
    }
}

/// Sort direction shared by most list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Let the server pick its default order.
    #[default]
    None,
    /// `asc`
    Ascending,
    /// `desc`
    Descending,
}

impl SortOrder {
    /// Query representation; empty for [`SortOrder::None`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl QueryValue for SortOrder {
    fn to_param(&self) -> Result<String, EncodeError> {
        Ok(self.as_str().to_string())
    }

    fn is_zero(&self) -> bool {
        *self == Self::None
    }
}

/// Ordered query parameters under construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Add `key` unless `value` holds its zero value.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidValue`] naming `key` if the value cannot
    /// be rendered.
    pub fn insert<V: QueryValue + ?Sized>(
        &mut self,
        key: &str,
        value: &V,
    ) -> Result<&mut Self, EncodeError> {
        if value.is_zero() {
            return Ok(self);
        }
        self.push_rendered(key, value)
    }

    /// Add `key` even when `value` holds its zero value. Empty lists are
    /// still omitted.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidValue`] naming `key` if the value cannot
    /// be rendered.
    pub fn insert_always<V: QueryValue + ?Sized>(
        &mut self,
        key: &str,
        value: &V,
    ) -> Result<&mut Self, EncodeError> {
        if value.is_empty_list() {
            return Ok(self);
        }
        self.push_rendered(key, value)
    }

    fn push_rendered<V: QueryValue + ?Sized>(
        &mut self,
        key: &str,
        value: &V,
    ) -> Result<&mut Self, EncodeError> {
        let rendered = value.to_param().map_err(|e| e.for_key(key))?;
        self.pairs.push((key.to_string(), rendered));
        Ok(self)
    }

    /// Look up the first value recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether no parameter was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of recorded parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Recorded pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as a percent-encoded query string, sorted by key.
    ///
    /// The sort is stable, so repeated keys keep their insertion order.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<_> = self.pairs.iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        pairs
            .into_iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    encode_query_component(k),
                    encode_query_component(v)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// A structured filter value accepted by list endpoints.
pub trait FilterSpec {
    /// Push every encoded field into `query`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not a structured filter or a field
    /// cannot be rendered.
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError>;

    /// Encode into a fresh [`QueryParams`].
    ///
    /// # Errors
    ///
    /// See [`FilterSpec::encode`].
    fn to_query(&self) -> Result<QueryParams, EncodeError> {
        let mut query = QueryParams::new();
        self.encode(&mut query)?;
        Ok(query)
    }
}

impl FilterSpec for () {
    fn encode(&self, _query: &mut QueryParams) -> Result<(), EncodeError> {
        Ok(())
    }
}

impl<F: FilterSpec + ?Sized> FilterSpec for &F {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        (**self).encode(query)
    }
}

/// Dynamic filters built at runtime, e.g. from command-line arguments.
///
/// Only JSON objects are accepted. Each member is encoded with the same rules
/// as typed filters: arrays are comma-joined, `null`, `false`, `0` and `""`
/// are omitted. Nested objects have no query representation.
impl FilterSpec for serde_json::Value {
    fn encode(&self, query: &mut QueryParams) -> Result<(), EncodeError> {
        let serde_json::Value::Object(members) = self else {
            return Err(EncodeError::BadInput {
                found: json_type_name(self),
            });
        };

        for (key, value) in members {
            query.insert(key, &JsonParam(value))?;
        }
        Ok(())
    }
}

struct JsonParam<'a>(&'a serde_json::Value);

impl QueryValue for JsonParam<'_> {
    fn to_param(&self) -> Result<String, EncodeError> {
        use serde_json::Value;

        match self.0 {
            Value::Null => Ok(String::new()),
            Value::Bool(b) => Ok(b.to_string()),
            Value::Number(n) => Ok(n.to_string()),
            Value::String(s) => Ok(s.clone()),
            Value::Array(items) => {
                let rendered = items
                    .iter()
                    .map(|item| match item {
                        Value::Array(_) | Value::Object(_) => Err(EncodeError::InvalidValue {
                            key: String::new(),
                            reason: format!("{} list element", json_type_name(item)),
                        }),
                        other => JsonParam(other).to_param(),
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(rendered.join(","))
            }
            Value::Object(_) => Err(EncodeError::InvalidValue {
                key: String::new(),
                reason: "nested objects cannot be encoded".to_string(),
            }),
        }
    }

    fn is_zero(&self) -> bool {
        use serde_json::Value;

        match self.0 {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.as_f64() == Some(0.0),
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(_) => false,
        }
    }

    fn is_empty_list(&self) -> bool {
        matches!(self.0, serde_json::Value::Array(items) if items.is_empty())
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Errors that can occur while encoding a filter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    /// The filter is not a structured value
    #[error("expects object input, got {found}")]
    BadInput {
        /// Type of the value received
        found: &'static str,
    },
    /// A field's own serialization failed
    #[error("cannot encode query parameter '{key}': {reason}")]
    InvalidValue {
        /// Query key of the failing field
        key: String,
        /// Why the value was rejected
        reason: String,
    },
}

impl EncodeError {
    fn for_key(self, key: &str) -> Self {
        match self {
            Self::InvalidValue { reason, .. } => Self::InvalidValue {
                key: key.to_string(),
                reason,
            },
            other => other,
        }
    }
}
