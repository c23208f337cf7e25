use super::Value;
use std::hash::{BuildHasher as _, BuildHasherDefault, Hash, Hasher};
use twox_hash::XxHash64;

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(self.rank());

        match self {
            Value::Int(n) => n.hash(state),
            Value::Float(n) => n.to_bits().hash(state),
            Value::Str(s) => s.hash(state),
            Value::Bool(b) => b.hash(state),
            Value::List(items) | Value::Tuple(items) => items.hash(state),
            // Dicts only contribute their tag.
            Value::None | Value::Dict(..) => (),
        }
    }
}

impl Value {
    /// Hash the value with a fixed-seed hasher.
    ///
    /// Unlike the randomly seeded hasher of a map, the result is the same in
    /// every process. Equal values always produce the same hash.
    pub fn hash_value(&self) -> u64 {
        let mut hasher = BuildHasherDefault::<XxHash64>::default().build_hasher();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// A borrowed string which looks up [Value::Str] keys in a dict without
/// allocating.
///
/// Hashes exactly like the corresponding [Value::Str].
pub(crate) struct StrKey<'a>(pub(crate) &'a str);

impl Hash for StrKey<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u8(Value::STR_RANK);
        self.0.hash(state);
    }
}

impl hashbrown::Equivalent<Value> for StrKey<'_> {
    fn equivalent(&self, key: &Value) -> bool {
        matches!(key, Value::Str(s) if s == self.0)
    }
}
