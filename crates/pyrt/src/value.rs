use crate::collections::HashMap;
use crate::PyError;

mod cmp;
mod fmt;
mod hash;
#[cfg(test)]
mod tests;

pub(crate) use self::hash::StrKey;

/// The mapping stored in [Value::Dict].
pub type Dict = HashMap<Value, Value>;

/// A dynamically typed value with Python semantics.
///
/// Values own their contents. A list, dict or tuple is released together with
/// the value holding it, which also means values cannot form reference cycles.
/// Code that needs cyclic structures should keep its values in an arena and
/// link them through [Value::Int] indices.
///
/// Equality is structural and never coerces across variants, so
/// `Value::Int(1) != Value::Float(1.0)`. Floats compare and hash by their bit
/// pattern, which keeps equality reflexive for NaN. A [Value::Dict] hashes to
/// its variant tag alone: using one as a key is permitted but every dict key
/// will collide.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A boolean.
    Bool(bool),
    /// The absence of a value.
    #[default]
    None,
    /// An ordered, mutable sequence.
    List(Vec<Value>),
    /// A mapping from values to values.
    Dict(Dict),
    /// An ordered sequence used for unpacking.
    Tuple(Vec<Value>),
}

/// Shared `None` returned by reference from lookups that miss.
pub(crate) static NONE: Value = Value::None;

impl Value {
    /// Construct an empty dict.
    pub fn dict() -> Self {
        Self::Dict(Dict::new())
    }

    /// Construct a string value.
    pub fn str<S>(s: S) -> Self
    where
        S: Into<String>,
    {
        Self::Str(s.into())
    }

    /// The Python name of the type of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(..) => "int",
            Self::Float(..) => "float",
            Self::Str(..) => "str",
            Self::Bool(..) => "bool",
            Self::None => "NoneType",
            Self::List(..) => "list",
            Self::Dict(..) => "dict",
            Self::Tuple(..) => "tuple",
        }
    }

    /// Test if the value is `None`.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Test if the value is an integer.
    pub fn is_int(&self) -> bool {
        matches!(self, Self::Int(..))
    }

    /// Test if the value is a float.
    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float(..))
    }

    /// Test if the value is a string.
    pub fn is_str(&self) -> bool {
        matches!(self, Self::Str(..))
    }

    /// Test if the value is a boolean.
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Test if the value is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(..))
    }

    /// Test if the value is a dict.
    pub fn is_dict(&self) -> bool {
        matches!(self, Self::Dict(..))
    }

    /// Test if the value is a tuple.
    pub fn is_tuple(&self) -> bool {
        matches!(self, Self::Tuple(..))
    }

    /// The length of the value.
    ///
    /// Strings report their length in bytes, lists and tuples their number of
    /// elements and dicts their number of entries. Every other value has a
    /// length of zero.
    pub fn len(&self) -> usize {
        match self {
            Self::Str(s) => s.len(),
            Self::List(list) => list.len(),
            Self::Tuple(tuple) => tuple.len(),
            Self::Dict(dict) => dict.len(),
            _ => 0,
        }
    }

    /// Test if [Value::len] is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the string slice of a [Value::Str].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer of a [Value::Int].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the number of a [Value::Float] or a [Value::Int] as a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(n) => Some(*n),
            Self::Int(n) => Some(*n as f64),
            _ => None,
        }
    }

    /// Get the boolean of a [Value::Bool].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the elements of a [Value::List].
    pub fn as_list(&self) -> Option<&Vec<Value>> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Get the elements of a [Value::List] mutably.
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Self::List(list) => Some(list),
            _ => None,
        }
    }

    /// Get the entries of a [Value::Dict].
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Self::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    /// Get the entries of a [Value::Dict] mutably.
    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Self::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    /// Render the value as a string.
    ///
    /// Strings are returned as-is, everything else uses the [Display]
    /// rendering.
    ///
    /// [Display]: std::fmt::Display
    pub fn as_string(&self) -> String {
        match self {
            Self::Str(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Coerce into an integer.
    ///
    /// Floats truncate, booleans become one or zero and strings are parsed.
    /// Anything that can't be coerced is zero.
    pub fn to_i64(&self) -> i64 {
        match self {
            Self::Int(n) => *n,
            Self::Float(n) => *n as i64,
            Self::Bool(b) => i64::from(*b),
            Self::Str(s) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    /// Coerce into a float, following the same rules as [Value::to_i64].
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Float(n) => *n,
            Self::Int(n) => *n as f64,
            Self::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Self::Str(s) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Coerce into a boolean according to Python truthiness.
    pub fn to_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Int(n) => *n != 0,
            Self::Float(n) => *n != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::List(list) => !list.is_empty(),
            Self::Dict(dict) => !dict.is_empty(),
            Self::Tuple(tuple) => !tuple.is_empty(),
            Self::None => false,
        }
    }

    /// Iterate over the characters of a [Value::Str].
    ///
    /// Other values produce no characters.
    pub fn chars(&self) -> std::str::Chars<'_> {
        match self {
            Self::Str(s) => s.chars(),
            _ => "".chars(),
        }
    }

    /// Python's `in` for strings.
    ///
    /// A string contains any of its substrings, a list contains a string if
    /// one of its elements is that exact string.
    pub fn contains(&self, needle: &str) -> bool {
        match self {
            Self::Str(s) => s.contains(needle),
            Self::List(list) => list
                .iter()
                .any(|item| matches!(item, Self::Str(s) if s == needle)),
            _ => false,
        }
    }

    /// Insert an entry into a [Value::Dict].
    ///
    /// Does nothing on other values.
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<Value>,
        V: Into<Value>,
    {
        if let Self::Dict(dict) = self {
            dict.insert(key.into(), value.into());
        }
    }

    /// Remove an entry from a [Value::Dict], returning its value.
    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        match self {
            Self::Dict(dict) => dict.remove(key),
            _ => None,
        }
    }

    /// Look up a key in a [Value::Dict].
    pub fn get(&self, key: &Value) -> Option<&Value> {
        match self {
            Self::Dict(dict) => dict.get(key),
            _ => None,
        }
    }

    /// Look up a string key in a [Value::Dict] without allocating it.
    pub fn get_str(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Dict(dict) => dict.get(&StrKey(key)),
            _ => None,
        }
    }

    /// Test if a [Value::Dict] has the given key.
    pub fn contains_key(&self, key: &Value) -> bool {
        match self {
            Self::Dict(dict) => dict.contains_key(key),
            _ => false,
        }
    }

    /// Test if a [Value::Dict] has the given string key.
    pub fn contains_key_str(&self, key: &str) -> bool {
        match self {
            Self::Dict(dict) => dict.contains_key(&StrKey(key)),
            _ => false,
        }
    }

    /// Append to a [Value::List].
    ///
    /// Does nothing on other values.
    pub fn push<V>(&mut self, value: V)
    where
        V: Into<Value>,
    {
        if let Self::List(list) = self {
            list.push(value.into());
        }
    }

    /// Get a positional element of a list or tuple, or a keyed entry of a
    /// dict.
    ///
    /// Negative indexes count from the end. Dicts are looked up by
    /// [Value::Int] key and report a missing key as `None`.
    pub fn get_item(&self, index: i64) -> Result<&Value, PyError> {
        let items = match self {
            Self::List(items) | Self::Tuple(items) => items,
            Self::Dict(dict) => return Ok(dict.get(&Value::Int(index)).unwrap_or(&NONE)),
            other => {
                return Err(PyError::index_out_of_range(format!(
                    "`{}` object is not subscriptable by position",
                    other.type_name()
                )))
            }
        };

        match crate::index::resolve(index, items.len()) {
            Some(index) => Ok(&items[index]),
            None => Err(PyError::index_out_of_range(format!(
                "{} index {} for length {}",
                self.type_name(),
                index,
                items.len()
            ))),
        }
    }

    /// Get the element at `index` of a tuple or list being unpacked.
    ///
    /// # Panics
    ///
    /// Panics if the value is not a tuple or list, or if the index is out of
    /// range.
    #[track_caller]
    pub fn get_tuple_elem(&self, index: usize) -> Value {
        let items = match self {
            Self::Tuple(items) | Self::List(items) => items,
            other => panic!(
                "{}",
                PyError::bad_value(format!(
                    "cannot unpack non-sequence `{}`",
                    other.type_name()
                ))
            ),
        };

        match items.get(index) {
            Some(item) => item.clone(),
            None => panic!(
                "{}",
                PyError::index_out_of_range(format!(
                    "{} index {} for length {}",
                    self.type_name(),
                    index,
                    items.len()
                ))
            ),
        }
    }

    /// Unpack a tuple or list which must have exactly `expected` elements.
    pub fn try_extract_tuple(&self, expected: usize) -> Result<Vec<Value>, PyError> {
        let items = match self {
            Self::Tuple(items) | Self::List(items) => items,
            other => {
                return Err(PyError::bad_value(format!(
                    "cannot unpack non-sequence `{}`",
                    other.type_name()
                )))
            }
        };

        if items.len() != expected {
            return Err(PyError::bad_value(format!(
                "expected a {} of length {}, but found one with length {}",
                self.type_name(),
                expected,
                items.len()
            )));
        }

        Ok(items.clone())
    }

    /// Unpack a tuple or list which must have exactly `expected` elements.
    ///
    /// # Panics
    ///
    /// Panics with the error of [Value::try_extract_tuple] if the value can't
    /// be unpacked.
    #[track_caller]
    pub fn extract_tuple(&self, expected: usize) -> Vec<Value> {
        match self.try_extract_tuple(expected) {
            Ok(items) => items,
            Err(error) => panic!("{}", error),
        }
    }
}
