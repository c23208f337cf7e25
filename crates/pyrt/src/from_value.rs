use crate::Value;
use std::collections::HashMap;
use std::hash::Hash;

/// Lossy, infallible conversion out of a [Value].
///
/// Numbers coerce between each other and parse from strings, falling back
/// to zero. Booleans follow Python truthiness. Containers convert element by
/// element.
pub trait FromValue: Sized {
    /// Convert the given value.
    fn from_value(value: Value) -> Self;
}

impl FromValue for Value {
    #[inline]
    fn from_value(value: Value) -> Self {
        value
    }
}

impl FromValue for i64 {
    #[inline]
    fn from_value(value: Value) -> Self {
        value.to_i64()
    }
}

/// Truncates integers outside of the range of `i32`.
impl FromValue for i32 {
    #[inline]
    fn from_value(value: Value) -> Self {
        value.to_i64() as i32
    }
}

impl FromValue for f64 {
    #[inline]
    fn from_value(value: Value) -> Self {
        value.to_f64()
    }
}

impl FromValue for f32 {
    #[inline]
    fn from_value(value: Value) -> Self {
        value.to_f64() as f32
    }
}

impl FromValue for bool {
    #[inline]
    fn from_value(value: Value) -> Self {
        value.to_bool()
    }
}

impl FromValue for String {
    #[inline]
    fn from_value(value: Value) -> Self {
        match value {
            Value::Str(s) => s,
            other => other.to_string(),
        }
    }
}

/// `None` converts to `None`, anything else to the converted value.
impl<T> FromValue for Option<T>
where
    T: FromValue,
{
    fn from_value(value: Value) -> Self {
        match value {
            Value::None => None,
            value => Some(T::from_value(value)),
        }
    }
}

/// Converts whatever iterating over the value produces.
impl<T> FromValue for Vec<T>
where
    T: FromValue,
{
    fn from_value(value: Value) -> Self {
        value.into_iter().map(T::from_value).collect()
    }
}

/// Converts the entries of a dict. Other values produce an empty map.
impl<K, V> FromValue for HashMap<K, V>
where
    K: FromValue + Eq + Hash,
    V: FromValue,
{
    fn from_value(value: Value) -> Self {
        match value {
            Value::Dict(dict) => dict
                .into_iter()
                .map(|(k, v)| (K::from_value(k), V::from_value(v)))
                .collect(),
            _ => HashMap::new(),
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty),*) => {
        $(
            impl From<Value> for $ty {
                #[inline]
                fn from(value: Value) -> Self {
                    <$ty>::from_value(value)
                }
            }
        )*
    };
}

impl_from!(i64, i32, f64, f32, bool, String);
