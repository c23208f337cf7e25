//! Arithmetic on native strings, vectors and sets.
//!
//! `+` concatenates and `*` by an integer repeats, where a repetition count
//! of zero or less produces an empty sequence. Homogeneous numeric vectors
//! additionally support elementwise `-`, `*` and `/`, and broadcasting of a
//! scalar over an `f64` vector. Elementwise operations stop at the end of the
//! shorter operand and a zero divisor produces a `NaN` element.

use crate::ops::{float_div, PyAdd, PyDiv, PyMul, PySub};
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// Repeat a string `n` times.
pub(crate) fn repeat_str(s: &str, n: i64) -> String {
    match usize::try_from(n) {
        Ok(n) => s.repeat(n),
        Err(..) => String::new(),
    }
}

/// Repeat the elements of a slice `n` times.
pub(crate) fn repeat_vec<T>(items: &[T], n: i64) -> Vec<T>
where
    T: Clone,
{
    let n = usize::try_from(n).unwrap_or_default();
    let len = items.len().saturating_mul(n);
    items.iter().cloned().cycle().take(len).collect()
}

fn zip_with<T, U, F>(a: &[T], b: &[T], f: F) -> Vec<U>
where
    T: Copy,
    F: Fn(T, T) -> U,
{
    a.iter().zip(b).map(|(a, b)| f(*a, *b)).collect()
}

impl PyAdd for String {
    type Output = String;

    #[inline]
    fn py_add(mut self, rhs: String) -> String {
        self.push_str(&rhs);
        self
    }
}

impl PyAdd<&str> for String {
    type Output = String;

    #[inline]
    fn py_add(mut self, rhs: &str) -> String {
        self.push_str(rhs);
        self
    }
}

impl PyAdd<char> for String {
    type Output = String;

    #[inline]
    fn py_add(mut self, rhs: char) -> String {
        self.push(rhs);
        self
    }
}

impl PyAdd<&str> for &str {
    type Output = String;

    #[inline]
    fn py_add(self, rhs: &str) -> String {
        [self, rhs].concat()
    }
}

impl PyAdd<String> for &str {
    type Output = String;

    #[inline]
    fn py_add(self, mut rhs: String) -> String {
        rhs.insert_str(0, self);
        rhs
    }
}

impl PyAdd<char> for &str {
    type Output = String;

    #[inline]
    fn py_add(self, rhs: char) -> String {
        let mut out = String::with_capacity(self.len() + rhs.len_utf8());
        out.push_str(self);
        out.push(rhs);
        out
    }
}

macro_rules! impl_str_repeat {
    ($($ty:ty),*) => {
        $(
            impl PyMul<$ty> for String {
                type Output = String;

                #[inline]
                fn py_mul(self, n: $ty) -> String {
                    repeat_str(&self, i64::try_from(n).unwrap_or(i64::MAX))
                }
            }

            impl PyMul<$ty> for &str {
                type Output = String;

                #[inline]
                fn py_mul(self, n: $ty) -> String {
                    repeat_str(self, i64::try_from(n).unwrap_or(i64::MAX))
                }
            }

            impl PyMul<String> for $ty {
                type Output = String;

                #[inline]
                fn py_mul(self, s: String) -> String {
                    s.py_mul(self)
                }
            }

            impl PyMul<&str> for $ty {
                type Output = String;

                #[inline]
                fn py_mul(self, s: &str) -> String {
                    s.py_mul(self)
                }
            }
        )*
    };
}

impl_str_repeat!(i32, i64, usize);

impl<T> PyAdd for Vec<T> {
    type Output = Vec<T>;

    #[inline]
    fn py_add(mut self, rhs: Vec<T>) -> Vec<T> {
        self.extend(rhs);
        self
    }
}

impl<T> PyAdd<&Vec<T>> for Vec<T>
where
    T: Clone,
{
    type Output = Vec<T>;

    #[inline]
    fn py_add(mut self, rhs: &Vec<T>) -> Vec<T> {
        self.extend_from_slice(rhs);
        self
    }
}

impl<T> PyAdd<Vec<T>> for &Vec<T>
where
    T: Clone,
{
    type Output = Vec<T>;

    #[inline]
    fn py_add(self, rhs: Vec<T>) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len() + rhs.len());
        out.extend_from_slice(self);
        out.extend(rhs);
        out
    }
}

impl<T> PyAdd<&Vec<T>> for &Vec<T>
where
    T: Clone,
{
    type Output = Vec<T>;

    #[inline]
    fn py_add(self, rhs: &Vec<T>) -> Vec<T> {
        [self.as_slice(), rhs.as_slice()].concat()
    }
}

macro_rules! impl_vec_repeat {
    ($($ty:ty),*) => {
        $(
            impl<T> PyMul<$ty> for Vec<T>
            where
                T: Clone,
            {
                type Output = Vec<T>;

                #[inline]
                fn py_mul(self, n: $ty) -> Vec<T> {
                    repeat_vec(&self, i64::try_from(n).unwrap_or(i64::MAX))
                }
            }

            impl<T> PyMul<$ty> for &Vec<T>
            where
                T: Clone,
            {
                type Output = Vec<T>;

                #[inline]
                fn py_mul(self, n: $ty) -> Vec<T> {
                    repeat_vec(self, i64::try_from(n).unwrap_or(i64::MAX))
                }
            }

            impl<T> PyMul<Vec<T>> for $ty
            where
                T: Clone,
            {
                type Output = Vec<T>;

                #[inline]
                fn py_mul(self, items: Vec<T>) -> Vec<T> {
                    items.py_mul(self)
                }
            }
        )*
    };
}

impl_vec_repeat!(i32, i64, usize);

macro_rules! impl_elementwise {
    (@impl $elem:ty, $quot:ty, |$a:ident, $b:ident| $div:expr, $lhs:ty, $rhs:ty) => {
        impl PySub<$rhs> for $lhs {
            type Output = Vec<$elem>;

            #[inline]
            fn py_sub(self, rhs: $rhs) -> Vec<$elem> {
                zip_with(self.as_slice(), rhs.as_slice(), |a, b| a - b)
            }
        }

        impl PyMul<$rhs> for $lhs {
            type Output = Vec<$elem>;

            #[inline]
            fn py_mul(self, rhs: $rhs) -> Vec<$elem> {
                zip_with(self.as_slice(), rhs.as_slice(), |a, b| a * b)
            }
        }

        impl PyDiv<$rhs> for $lhs {
            type Output = Vec<$quot>;

            #[inline]
            fn py_div(self, rhs: $rhs) -> Vec<$quot> {
                zip_with(self.as_slice(), rhs.as_slice(), |$a, $b| $div)
            }
        }
    };

    ($elem:ty => $quot:ty, |$a:ident, $b:ident| $div:expr) => {
        impl_elementwise!(@impl $elem, $quot, |$a, $b| $div, Vec<$elem>, Vec<$elem>);
        impl_elementwise!(@impl $elem, $quot, |$a, $b| $div, Vec<$elem>, &Vec<$elem>);
        impl_elementwise!(@impl $elem, $quot, |$a, $b| $div, &Vec<$elem>, Vec<$elem>);
        impl_elementwise!(@impl $elem, $quot, |$a, $b| $div, &Vec<$elem>, &Vec<$elem>);
    };
}

impl_elementwise!(f64 => f64, |a, b| float_div(a, b));
impl_elementwise!(f32 => f32, |a, b| if b == 0.0 { f32::NAN } else { a / b });
impl_elementwise!(i64 => f64, |a, b| float_div(a as f64, b as f64));
impl_elementwise!(i32 => f64, |a, b| float_div(f64::from(a), f64::from(b)));

macro_rules! impl_broadcast {
    ($($ty:ty),*) => {
        $(
            impl PyAdd<f64> for $ty {
                type Output = Vec<f64>;

                #[inline]
                fn py_add(self, rhs: f64) -> Vec<f64> {
                    self.iter().map(|a| a + rhs).collect()
                }
            }

            impl PySub<f64> for $ty {
                type Output = Vec<f64>;

                #[inline]
                fn py_sub(self, rhs: f64) -> Vec<f64> {
                    self.iter().map(|a| a - rhs).collect()
                }
            }

            impl PyMul<f64> for $ty {
                type Output = Vec<f64>;

                #[inline]
                fn py_mul(self, rhs: f64) -> Vec<f64> {
                    self.iter().map(|a| a * rhs).collect()
                }
            }

            impl PyDiv<f64> for $ty {
                type Output = Vec<f64>;

                #[inline]
                fn py_div(self, rhs: f64) -> Vec<f64> {
                    self.iter().map(|a| float_div(*a, rhs)).collect()
                }
            }

            impl PyMul<$ty> for f64 {
                type Output = Vec<f64>;

                #[inline]
                fn py_mul(self, rhs: $ty) -> Vec<f64> {
                    rhs.py_mul(self)
                }
            }
        )*
    };
}

impl_broadcast!(Vec<f64>, &Vec<f64>);

impl<T, S> PySub for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Output = HashSet<T, S>;

    #[inline]
    fn py_sub(self, rhs: HashSet<T, S>) -> Self::Output {
        self.py_sub(&rhs)
    }
}

impl<T, S> PySub<&HashSet<T, S>> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    type Output = HashSet<T, S>;

    fn py_sub(mut self, rhs: &HashSet<T, S>) -> Self::Output {
        self.retain(|item| !rhs.contains(item));
        self
    }
}

impl<T> PySub for BTreeSet<T>
where
    T: Ord,
{
    type Output = BTreeSet<T>;

    fn py_sub(mut self, rhs: BTreeSet<T>) -> Self::Output {
        self.retain(|item| !rhs.contains(item));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{repeat_str, repeat_vec};

    #[test]
    fn test_repeat() {
        assert_eq!(repeat_str("ab", 3), "ababab");
        assert_eq!(repeat_str("ab", 0), "");
        assert_eq!(repeat_str("ab", -1), "");
        assert_eq!(repeat_vec(&[1, 2], 2), vec![1, 2, 1, 2]);
        assert!(repeat_vec::<i32>(&[], 5).is_empty());
        assert!(repeat_vec(&[1], i64::MIN).is_empty());
    }
}
