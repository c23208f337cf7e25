use crate::Value;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

/// Python truthiness, the predicate behind `if x:`.
///
/// Numbers are truthy when nonzero and collections when non-empty. An
/// [Option] is truthy when it is present, regardless of what it holds, so
/// `Some(false)` is truthy.
pub trait PyTruthy {
    /// Test if the value is truthy.
    fn is_true(&self) -> bool;
}

impl PyTruthy for Value {
    fn is_true(&self) -> bool {
        self.to_bool()
    }
}

impl PyTruthy for bool {
    fn is_true(&self) -> bool {
        *self
    }
}

macro_rules! impl_number {
    ($zero:expr => $($ty:ty),*) => {
        $(
            impl PyTruthy for $ty {
                fn is_true(&self) -> bool {
                    *self != $zero
                }
            }
        )*
    };
}

impl_number!(0 => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number!(0.0 => f32, f64);

impl PyTruthy for char {
    fn is_true(&self) -> bool {
        true
    }
}

impl PyTruthy for () {
    fn is_true(&self) -> bool {
        false
    }
}

impl PyTruthy for str {
    fn is_true(&self) -> bool {
        !self.is_empty()
    }
}

impl PyTruthy for String {
    fn is_true(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> PyTruthy for Option<T> {
    fn is_true(&self) -> bool {
        self.is_some()
    }
}

impl<T> PyTruthy for &T
where
    T: ?Sized + PyTruthy,
{
    fn is_true(&self) -> bool {
        (**self).is_true()
    }
}

impl<T> PyTruthy for Box<T>
where
    T: ?Sized + PyTruthy,
{
    fn is_true(&self) -> bool {
        (**self).is_true()
    }
}

macro_rules! impl_collection {
    ($($ty:ident $(<$($param:ident),*>)?),* $(,)?) => {
        $(
            impl$(<$($param),*>)? PyTruthy for $ty$(<$($param),*>)? {
                fn is_true(&self) -> bool {
                    !self.is_empty()
                }
            }
        )*
    };
}

impl_collection! {
    Vec<T>,
    VecDeque<T>,
    HashMap<K, V, S>,
    HashSet<T, S>,
    BTreeMap<K, V>,
    BTreeSet<T>,
}

impl<K, V, S> PyTruthy for hashbrown::HashMap<K, V, S> {
    fn is_true(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> PyTruthy for [T] {
    fn is_true(&self) -> bool {
        !self.is_empty()
    }
}

impl<T, const N: usize> PyTruthy for [T; N] {
    fn is_true(&self) -> bool {
        N != 0
    }
}

#[cfg(test)]
mod tests {
    use super::PyTruthy;
    use crate::Value;
    use std::collections::{BTreeSet, HashMap};

    #[test]
    fn test_natives() {
        assert!(!0i32.is_true());
        assert!((-1i64).is_true());
        assert!(!0.0f64.is_true());
        assert!(!(-0.0f64).is_true());
        assert!(f64::NAN.is_true());
        assert!(!"".is_true());
        assert!("x".is_true());
        assert!(!String::new().is_true());
        assert!(!Vec::<i32>::new().is_true());
        assert!(vec![0].is_true());
        assert!(!HashMap::<String, i32>::new().is_true());
        assert!(!BTreeSet::<i32>::new().is_true());
        assert!(!().is_true());
        assert!(![0u8; 0].is_true());
    }

    #[test]
    fn test_option_is_presence() {
        assert!(Some(false).is_true());
        assert!(Some(0).is_true());
        assert!(!None::<i32>.is_true());
    }

    #[test]
    fn test_values() {
        assert!(!Value::Int(0).is_true());
        assert!(!Value::Float(-0.0).is_true());
        assert!(!Value::str("").is_true());
        assert!(Value::List(vec![Value::None]).is_true());
        assert!(!Value::Tuple(vec![]).is_true());
        assert!(!Value::dict().is_true());
        assert!(!Value::None.is_true());
        assert!(Value::Bool(true).is_true());
        assert!((&Value::Int(3)).is_true());
    }
}
