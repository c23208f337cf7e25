use crate::value::{StrKey, NONE};
use crate::{PyError, Value};
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::ops;

/// Python subscription which never fails.
///
/// Negative positions count from the end of the container. A position which
/// is out of range, a missing key or a value which can't be subscripted
/// produces the empty output of the implementation: `None` for options and
/// [Value::None] for values.
///
/// ```
/// use pyrt::{PyIndex, Value};
///
/// let v = vec![10i64, 20, 30];
/// assert_eq!(v.py_index(-1i64), Some(30));
/// assert_eq!(v.py_index(-4i64), None);
///
/// let value = Value::from(v);
/// assert_eq!(value.py_index(-3i64), Value::Int(10));
/// assert_eq!(value.py_index(-4i64), Value::None);
/// ```
pub trait PyIndex<Idx> {
    /// The result of the lookup.
    type Output;

    /// Look up the given index.
    fn py_index(&self, index: Idx) -> Self::Output;
}

/// Resolve a possibly negative Python index against a container of length
/// `len`.
pub(crate) fn resolve(index: i64, len: usize) -> Option<usize> {
    let len = i64::try_from(len).ok()?;
    let index = if index < 0 { index + len } else { index };

    if (0..len).contains(&index) {
        Some(index as usize)
    } else {
        None
    }
}

macro_rules! impl_positional {
    ($($ty:ty),*) => {
        $(
            impl<T> PyIndex<$ty> for [T]
            where
                T: Clone,
            {
                type Output = Option<T>;

                fn py_index(&self, index: $ty) -> Self::Output {
                    let index = resolve(i64::from(index), self.len())?;
                    Some(self[index].clone())
                }
            }

            impl<T> PyIndex<$ty> for Vec<T>
            where
                T: Clone,
            {
                type Output = Option<T>;

                fn py_index(&self, index: $ty) -> Self::Output {
                    self.as_slice().py_index(index)
                }
            }

            impl PyIndex<$ty> for str {
                type Output = Option<char>;

                fn py_index(&self, index: $ty) -> Self::Output {
                    let index = i64::from(index);

                    if index >= 0 {
                        return self.chars().nth(usize::try_from(index).ok()?);
                    }

                    let index = resolve(index, self.chars().count())?;
                    self.chars().nth(index)
                }
            }

            impl PyIndex<$ty> for String {
                type Output = Option<char>;

                fn py_index(&self, index: $ty) -> Self::Output {
                    self.as_str().py_index(index)
                }
            }

            impl PyIndex<$ty> for Value {
                type Output = Value;

                fn py_index(&self, index: $ty) -> Self::Output {
                    let index = i64::from(index);

                    match self {
                        Value::List(items) | Value::Tuple(items) => {
                            items.py_index(index).unwrap_or_default()
                        }
                        Value::Str(s) => s
                            .py_index(index)
                            .map(|c| Value::Str(c.to_string()))
                            .unwrap_or_default(),
                        Value::Dict(dict) => dict.get(&Value::Int(index)).cloned().unwrap_or_default(),
                        _ => Value::None,
                    }
                }
            }
        )*
    };
}

impl_positional!(i32, i64);

impl<V, S> PyIndex<&str> for HashMap<String, V, S>
where
    V: Clone,
    S: BuildHasher,
{
    type Output = Option<V>;

    fn py_index(&self, key: &str) -> Self::Output {
        self.get(key).cloned()
    }
}

impl PyIndex<&str> for Value {
    type Output = Value;

    fn py_index(&self, key: &str) -> Self::Output {
        self.get_str(key).cloned().unwrap_or_default()
    }
}

impl PyIndex<&Value> for Value {
    type Output = Value;

    fn py_index(&self, key: &Value) -> Self::Output {
        match (self, key) {
            (Value::Dict(dict), key) => dict.get(key).cloned().unwrap_or_default(),
            (_, Value::Int(index)) => self.py_index(*index),
            (_, Value::Bool(b)) => self.py_index(i64::from(*b)),
            _ => Value::None,
        }
    }
}

impl Value {
    /// Mutable counterpart to [Value::get_item].
    ///
    /// Dicts insert `None` under a missing key so that the returned slot can
    /// be assigned to. Tuples are immutable and always fail.
    pub fn get_item_mut(&mut self, index: i64) -> Result<&mut Value, PyError> {
        let type_name = self.type_name();

        let items = match self {
            Value::List(items) => items,
            Value::Dict(dict) => return Ok(dict.entry(Value::Int(index)).or_default()),
            Value::Tuple(..) => return Err(not_assignable(type_name)),
            _ => return Err(not_positional(type_name)),
        };

        let len = items.len();

        match resolve(index, len) {
            Some(index) => Ok(&mut items[index]),
            None => Err(PyError::index_out_of_range(format!(
                "{} index {} for length {}",
                type_name, index, len
            ))),
        }
    }
}

fn not_positional(type_name: &str) -> PyError {
    PyError::index_out_of_range(format!(
        "`{}` object is not subscriptable by position",
        type_name
    ))
}

fn not_assignable(type_name: &str) -> PyError {
    PyError::index_out_of_range(format!(
        "`{}` object does not support item assignment",
        type_name
    ))
}

fn not_keyed(type_name: &str) -> PyError {
    PyError::index_out_of_range(format!(
        "`{}` object is not subscriptable by key",
        type_name
    ))
}

#[track_caller]
fn raise(error: PyError) -> ! {
    log::trace!(target: "pyrt::index", "operator index failed: {}", error);
    panic!("{}", error)
}

fn to_i64(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}

/// Positional access, panicking when out of range.
///
/// ```should_panic
/// use pyrt::Value;
///
/// let value = Value::from(vec![10i64, 20, 30]);
/// assert_eq!(value[-1i64], Value::Int(30));
/// let _ = &value[-4i64];
/// ```
impl ops::Index<i64> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, index: i64) -> &Self::Output {
        match self.get_item(index) {
            Ok(value) => value,
            Err(error) => raise(error),
        }
    }
}

impl ops::Index<i32> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, index: i32) -> &Self::Output {
        &self[i64::from(index)]
    }
}

impl ops::Index<usize> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        &self[to_i64(index)]
    }
}

/// Key lookup in a dict, where a missing key is `None`.
impl ops::Index<&str> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, key: &str) -> &Self::Output {
        match self {
            Value::Dict(dict) => dict.get(&StrKey(key)).unwrap_or(&NONE),
            other => raise(not_keyed(other.type_name())),
        }
    }
}

impl ops::Index<&Value> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, key: &Value) -> &Self::Output {
        match (self, key) {
            (Value::Dict(dict), key) => dict.get(key).unwrap_or(&NONE),
            (_, Value::Int(index)) => &self[*index],
            (_, Value::Bool(b)) => &self[i64::from(*b)],
            (other, _) => raise(not_keyed(other.type_name())),
        }
    }
}

impl ops::Index<Value> for Value {
    type Output = Value;

    #[track_caller]
    fn index(&self, key: Value) -> &Self::Output {
        &self[&key]
    }
}

impl ops::IndexMut<i64> for Value {
    #[track_caller]
    fn index_mut(&mut self, index: i64) -> &mut Self::Output {
        match self.get_item_mut(index) {
            Ok(value) => value,
            Err(error) => raise(error),
        }
    }
}

impl ops::IndexMut<i32> for Value {
    #[track_caller]
    fn index_mut(&mut self, index: i32) -> &mut Self::Output {
        &mut self[i64::from(index)]
    }
}

impl ops::IndexMut<usize> for Value {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self[to_i64(index)]
    }
}

/// Assignment to a dict key, inserting it if missing.
impl ops::IndexMut<&str> for Value {
    #[track_caller]
    fn index_mut(&mut self, key: &str) -> &mut Self::Output {
        match self {
            Value::Dict(dict) => dict.entry(Value::Str(key.to_owned())).or_default(),
            other => raise(not_keyed(other.type_name())),
        }
    }
}

impl ops::IndexMut<&Value> for Value {
    #[track_caller]
    fn index_mut(&mut self, key: &Value) -> &mut Self::Output {
        match (self, key) {
            (Value::Dict(dict), key) => dict.entry(key.clone()).or_default(),
            (this, Value::Int(index)) => &mut this[*index],
            (this, Value::Bool(b)) => &mut this[i64::from(*b)],
            (other, _) => raise(not_keyed(other.type_name())),
        }
    }
}

impl ops::IndexMut<Value> for Value {
    #[track_caller]
    fn index_mut(&mut self, key: Value) -> &mut Self::Output {
        &mut self[&key]
    }
}

#[cfg(test)]
mod tests {
    use super::resolve;

    #[test]
    fn test_resolve() {
        assert_eq!(resolve(0, 3), Some(0));
        assert_eq!(resolve(-1, 3), Some(2));
        assert_eq!(resolve(-3, 3), Some(0));
        assert_eq!(resolve(-4, 3), None);
        assert_eq!(resolve(3, 3), None);
        assert_eq!(resolve(0, 0), None);
        assert_eq!(resolve(i64::MIN, 3), None);
    }
}
