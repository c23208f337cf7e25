use crate::value::Dict;
use crate::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;

macro_rules! impl_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(n: $ty) -> Self {
                    Value::Int(i64::from(n))
                }
            }
        )*
    };
}

impl_int!(i8, i16, i32, i64, u8, u16, u32);

/// Unsigned integers beyond `i64::MAX` saturate.
macro_rules! impl_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(n: $ty) -> Self {
                    Value::Int(i64::try_from(n).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

impl_wide_int!(u64, usize);

impl From<f64> for Value {
    #[inline]
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(n: f32) -> Self {
        Value::Float(f64::from(n))
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<char> for Value {
    #[inline]
    fn from(c: char) -> Self {
        Value::Str(c.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(s: &String) -> Self {
        Value::Str(s.clone())
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl From<()> for Value {
    #[inline]
    fn from(_: ()) -> Self {
        Value::None
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => value.into(),
            None => Value::None,
        }
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T> From<&[T]> for Value
where
    T: Clone + Into<Value>,
{
    fn from(items: &[T]) -> Self {
        Value::List(items.iter().cloned().map(Into::into).collect())
    }
}

fn dict<I, K, V>(entries: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Value>,
    V: Into<Value>,
{
    Value::Dict(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<Dict>(),
    )
}

impl<K, V, S> From<HashMap<K, V, S>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        dict(map)
    }
}

impl<K, V, S> From<hashbrown::HashMap<K, V, S>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(map: hashbrown::HashMap<K, V, S>) -> Self {
        dict(map)
    }
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<Value>,
    V: Into<Value>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        dict(map)
    }
}

/// Sets become lists, since values have no set variant.
impl<T, S> From<HashSet<T, S>> for Value
where
    T: Into<Value>,
{
    fn from(set: HashSet<T, S>) -> Self {
        Value::List(set.into_iter().map(Into::into).collect())
    }
}

impl<T, S> From<Arc<HashSet<T, S>>> for Value
where
    T: Clone + Into<Value>,
{
    fn from(set: Arc<HashSet<T, S>>) -> Self {
        Value::List(set.iter().cloned().map(Into::into).collect())
    }
}

impl<T> From<BTreeSet<T>> for Value
where
    T: Into<Value>,
{
    fn from(set: BTreeSet<T>) -> Self {
        Value::List(set.into_iter().map(Into::into).collect())
    }
}

macro_rules! impl_tuple {
    ($($ty:ident $var:ident),*) => {
        impl<$($ty),*> From<($($ty,)*)> for Value
        where
            $($ty: Into<Value>,)*
        {
            fn from(($($var,)*): ($($ty,)*)) -> Self {
                Value::Tuple(vec![$($var.into()),*])
            }
        }
    };
}

impl_tuple!(A a);
impl_tuple!(A a, B b);
impl_tuple!(A a, B b, C c);
impl_tuple!(A a, B b, C c, D d);

#[cfg(test)]
mod tests {
    use crate::Value;
    use std::collections::{BTreeMap, BTreeSet, HashMap};

    #[test]
    fn test_scalars() {
        assert_eq!(Value::from(3i32), Value::Int(3));
        assert_eq!(Value::from(u64::MAX), Value::Int(i64::MAX));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from('x'), Value::str("x"));
        assert_eq!(Value::from(()), Value::None);
        assert_eq!(Value::from(None::<i64>), Value::None);
        assert_eq!(Value::from(Some("a")), Value::str("a"));
    }

    #[test]
    fn test_containers() {
        assert_eq!(
            Value::from(vec!["a", "b"]),
            Value::List(vec![Value::str("a"), Value::str("b")])
        );
        assert_eq!(
            Value::from(&[1i64, 2][..]),
            Value::List(vec![Value::Int(1), Value::Int(2)])
        );
        assert_eq!(
            Value::from(BTreeSet::from([3i64, 1, 2])),
            Value::List(vec![Value::Int(1), Value::Int(2), Value::Int(3)])
        );
        assert_eq!(
            Value::from((1i64, "x")),
            Value::Tuple(vec![Value::Int(1), Value::str("x")])
        );

        let map = HashMap::from([(String::from("k"), 1i64)]);
        let value = Value::from(map);
        assert_eq!(value.get_str("k"), Some(&Value::Int(1)));

        let map = BTreeMap::from([(1i64, vec![true])]);
        let value = Value::from(map);
        assert_eq!(
            value.get(&Value::Int(1)),
            Some(&Value::List(vec![Value::Bool(true)]))
        );
    }
}
