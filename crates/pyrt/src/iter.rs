use crate::collections::hash_map;
use crate::value::Dict;
use crate::Value;
use once_cell::sync::Lazy;
use std::{slice, vec};

/// Backs the key, value and item iterators of values which aren't dicts.
static EMPTY_DICT: Lazy<Dict> = Lazy::new(|| {
    log::trace!(target: "pyrt::iter", "initializing empty dict");
    Dict::new()
});

impl Value {
    /// Iterate over the elements of a list or tuple by reference.
    ///
    /// Other values produce an empty iterator.
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        match self {
            Value::List(items) | Value::Tuple(items) => items.iter(),
            _ => Default::default(),
        }
    }

    /// Iterate over the elements of a list by mutable reference.
    ///
    /// Other values, tuples included, produce an empty iterator.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        match self {
            Value::List(items) => items.iter_mut(),
            _ => Default::default(),
        }
    }

    /// Iterate over the keys of a dict.
    pub fn keys(&self) -> hash_map::Keys<'_, Value, Value> {
        self.dict_or_empty().keys()
    }

    /// Iterate over the values of a dict.
    pub fn values(&self) -> hash_map::Values<'_, Value, Value> {
        self.dict_or_empty().values()
    }

    /// Iterate over the entries of a dict.
    pub fn items(&self) -> hash_map::Iter<'_, Value, Value> {
        self.dict_or_empty().iter()
    }

    fn dict_or_empty(&self) -> &Dict {
        match self {
            Value::Dict(dict) => dict,
            _ => &EMPTY_DICT,
        }
    }
}

/// The owned iterator of a [Value].
///
/// Lists and tuples produce their elements, dicts their keys and strings one
/// single-character string per character.
pub struct IntoIter {
    inner: IntoIterInner,
}

enum IntoIterInner {
    Items(vec::IntoIter<Value>),
    Keys(hash_map::IntoKeys<Value, Value>),
    Chars(vec::IntoIter<char>),
    Empty,
}

impl Iterator for IntoIter {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IntoIterInner::Items(it) => it.next(),
            IntoIterInner::Keys(it) => it.next(),
            IntoIterInner::Chars(it) => it.next().map(|c| Value::Str(c.to_string())),
            IntoIterInner::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IntoIterInner::Items(it) => it.size_hint(),
            IntoIterInner::Keys(it) => it.size_hint(),
            IntoIterInner::Chars(it) => it.size_hint(),
            IntoIterInner::Empty => (0, Some(0)),
        }
    }
}

impl IntoIterator for Value {
    type Item = Value;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        let inner = match self {
            Value::List(items) | Value::Tuple(items) => IntoIterInner::Items(items.into_iter()),
            Value::Dict(dict) => IntoIterInner::Keys(dict.into_keys()),
            Value::Str(s) => IntoIterInner::Chars(s.chars().collect::<Vec<_>>().into_iter()),
            _ => IntoIterInner::Empty,
        };

        IntoIter { inner }
    }
}

/// The borrowing iterator of a [Value], producing the same sequence as
/// [IntoIter] with elements and keys cloned.
pub struct Iter<'a> {
    inner: IterInner<'a>,
}

enum IterInner<'a> {
    Items(slice::Iter<'a, Value>),
    Keys(hash_map::Keys<'a, Value, Value>),
    Chars(std::str::Chars<'a>),
    Empty,
}

impl Iterator for Iter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Items(it) => it.next().cloned(),
            IterInner::Keys(it) => it.next().cloned(),
            IterInner::Chars(it) => it.next().map(|c| Value::Str(c.to_string())),
            IterInner::Empty => None,
        }
    }
}

impl<'a> IntoIterator for &'a Value {
    type Item = Value;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        let inner = match self {
            Value::List(items) | Value::Tuple(items) => IterInner::Items(items.iter()),
            Value::Dict(dict) => IterInner::Keys(dict.keys()),
            Value::Str(s) => IterInner::Chars(s.chars()),
            _ => IterInner::Empty,
        };

        Iter { inner }
    }
}

impl FromIterator<Value> for Value {
    /// Collect into a [Value::List].
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::List(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::Value;

    #[test]
    fn test_non_containers_iterate_empty() {
        assert_eq!(Value::Int(1).iter().count(), 0);
        assert_eq!(Value::None.keys().count(), 0);
        assert_eq!(Value::Float(1.0).values().count(), 0);
        assert_eq!(Value::str("abc").items().count(), 0);
        assert_eq!(Value::Bool(true).into_iter().count(), 0);
    }

    #[test]
    fn test_iter_mut() {
        let mut value = Value::List(vec![Value::Int(1), Value::Int(2)]);

        for item in value.iter_mut() {
            *item = Value::Int(item.to_i64() * 10);
        }

        assert_eq!(value, Value::List(vec![Value::Int(10), Value::Int(20)]));
        assert_eq!(Value::None.iter_mut().count(), 0);

        let mut tuple = Value::Tuple(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(tuple.iter_mut().count(), 0);
        assert_eq!(tuple, Value::Tuple(vec![Value::Int(1), Value::Int(2)]));
    }

    #[test]
    fn test_dicts_iterate_keys() {
        let mut dict = Value::dict();
        dict.insert("a", 1);

        let borrowed = (&dict).into_iter().collect::<Vec<_>>();
        assert_eq!(borrowed, vec![Value::str("a")]);

        let owned = dict.into_iter().collect::<Vec<_>>();
        assert_eq!(owned, vec![Value::str("a")]);
    }

    #[test]
    fn test_strings_iterate_chars() {
        let value = Value::str("hé");
        let mut chars = Vec::new();

        for c in &value {
            chars.push(c);
        }

        assert_eq!(chars, vec![Value::str("h"), Value::str("é")]);
        assert_eq!(value.into_iter().count(), 2);
    }

    #[test]
    fn test_collect() {
        let value = (1..=3).map(Value::Int).collect::<Value>();
        assert_eq!(
            value,
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
    }
}
