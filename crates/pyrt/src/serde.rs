use crate::value::Dict;
use crate::Value;
use serde::{de, ser};
use std::fmt;

/// Dicts serialize as maps, lists and tuples as sequences and `None` as unit.
impl ser::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        use serde::ser::SerializeMap as _;
        use serde::ser::SerializeSeq as _;

        match self {
            Value::None => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(items) | Value::Tuple(items) => {
                let mut serializer = serializer.serialize_seq(Some(items.len()))?;

                for item in items {
                    serializer.serialize_element(item)?;
                }

                serializer.end()
            }
            Value::Dict(dict) => {
                let mut serializer = serializer.serialize_map(Some(dict.len()))?;

                for (key, value) in dict {
                    serializer.serialize_entry(key, value)?;
                }

                serializer.end()
            }
        }
    }
}

/// Sequences deserialize as lists, since the format can't tell tuples apart.
impl<'de> de::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

/// Preallocate from a length hint without trusting it beyond a bound.
fn cautious(hint: Option<usize>) -> usize {
    const MAX_PREALLOCATE: usize = 4096;
    hint.unwrap_or(0).min(MAX_PREALLOCATE)
}

struct ValueVisitor;

impl<'de> de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.write_str("any valid value")
    }

    #[inline]
    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Str(value.to_owned()))
    }

    #[inline]
    fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Str(value))
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Int(v))
    }

    /// Values beyond the range of `i64` become floats.
    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(match i64::try_from(v) {
            Ok(v) => Value::Int(v),
            Err(..) => Value::Float(v as f64),
        })
    }

    #[inline]
    fn visit_i128<E>(self, v: i128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(match i64::try_from(v) {
            Ok(v) => Value::Int(v),
            Err(..) => Value::Float(v as f64),
        })
    }

    #[inline]
    fn visit_u128<E>(self, v: u128) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(match i64::try_from(v) {
            Ok(v) => Value::Int(v),
            Err(..) => Value::Float(v as f64),
        })
    }

    #[inline]
    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Float(v))
    }

    #[inline]
    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::Bool(v))
    }

    #[inline]
    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::None)
    }

    #[inline]
    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        de::Deserialize::deserialize(deserializer)
    }

    #[inline]
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Value::None)
    }

    #[inline]
    fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: de::SeqAccess<'de>,
    {
        let mut vec = Vec::with_capacity(cautious(visitor.size_hint()));

        while let Some(elem) = visitor.next_element()? {
            vec.push(elem);
        }

        Ok(Value::List(vec))
    }

    #[inline]
    fn visit_map<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
    where
        V: de::MapAccess<'de>,
    {
        let mut dict = Dict::with_capacity(cautious(visitor.size_hint()));

        while let Some((key, value)) = visitor.next_entry::<Value, Value>()? {
            dict.insert(key, value);
        }

        Ok(Value::Dict(dict))
    }
}
