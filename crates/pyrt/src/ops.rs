//! The arithmetic algebra generated code emits against.
//!
//! Every operator is a trait with a single method, implemented for each
//! combination of operands where Python defines the operation. Integer
//! operands are promoted to `f64` when combined with a float and `py_div` is
//! always true division.
//!
//! Nothing in here fails. A zero divisor produces `NaN` for float results,
//! zero for integer results and [Value::None] for value results, and
//! operands Python would reject produce [Value::None].

use crate::Value;

mod floor;
mod value;

pub use self::floor::{checked_floordiv, floordiv, floordiv_f64, py_max, py_min, Integer};

/// Python's `+`.
pub trait PyAdd<Rhs = Self> {
    /// The result of the addition.
    type Output;

    /// Add `rhs` to `self`.
    fn py_add(self, rhs: Rhs) -> Self::Output;
}

/// Python's `-`.
pub trait PySub<Rhs = Self> {
    /// The result of the subtraction.
    type Output;

    /// Subtract `rhs` from `self`.
    fn py_sub(self, rhs: Rhs) -> Self::Output;
}

/// Python's `*`.
pub trait PyMul<Rhs = Self> {
    /// The result of the multiplication.
    type Output;

    /// Multiply `self` by `rhs`.
    fn py_mul(self, rhs: Rhs) -> Self::Output;
}

/// Python's `/`, which is always true division.
pub trait PyDiv<Rhs = Self> {
    /// The result of the division.
    type Output;

    /// Divide `self` by `rhs`.
    fn py_div(self, rhs: Rhs) -> Self::Output;
}

/// Python's `%`, where the sign of the result follows the divisor.
pub trait PyMod<Rhs = Self> {
    /// The result of the modulo.
    type Output;

    /// The remainder of dividing `self` by `rhs`.
    fn py_mod(self, rhs: Rhs) -> Self::Output;
}

/// Integer remainder with the sign of the divisor, zero for a zero divisor.
macro_rules! int_mod {
    ($a:expr, $b:expr) => {{
        let (a, b) = ($a, $b);

        if b == 0 {
            0
        } else {
            let r = a.wrapping_rem(b);

            if r != 0 && (r < 0) != (b < 0) {
                r + b
            } else {
                r
            }
        }
    }};
}

pub(crate) use int_mod;

/// True division, `NaN` for a zero divisor.
#[inline]
pub(crate) fn float_div(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        f64::NAN
    } else {
        a / b
    }
}

/// Float remainder with the sign of the divisor, `NaN` for a zero divisor.
pub(crate) fn float_mod(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return f64::NAN;
    }

    let r = a % b;

    if r == 0.0 {
        0.0f64.copysign(b)
    } else if (r < 0.0) != (b < 0.0) {
        r + b
    } else {
        r
    }
}

/// Integer results wrap on overflow.
macro_rules! impl_int_ops {
    ($($lhs:ty, $rhs:ty => $out:ty;)*) => {
        $(
            impl PyAdd<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn py_add(self, rhs: $rhs) -> $out {
                    <$out>::from(self).wrapping_add(<$out>::from(rhs))
                }
            }

            impl PySub<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn py_sub(self, rhs: $rhs) -> $out {
                    <$out>::from(self).wrapping_sub(<$out>::from(rhs))
                }
            }

            impl PyMul<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn py_mul(self, rhs: $rhs) -> $out {
                    <$out>::from(self).wrapping_mul(<$out>::from(rhs))
                }
            }

            impl PyDiv<$rhs> for $lhs {
                type Output = f64;

                #[inline]
                fn py_div(self, rhs: $rhs) -> f64 {
                    float_div(self as f64, rhs as f64)
                }
            }

            impl PyMod<$rhs> for $lhs {
                type Output = $out;

                #[inline]
                fn py_mod(self, rhs: $rhs) -> $out {
                    int_mod!(<$out>::from(self), <$out>::from(rhs))
                }
            }
        )*
    };
}

impl_int_ops! {
    i32, i32 => i32;
    i64, i64 => i64;
    i32, i64 => i64;
    i64, i32 => i64;
}

macro_rules! impl_float_ops {
    ($($lhs:ty, $rhs:ty;)*) => {
        $(
            impl PyAdd<$rhs> for $lhs {
                type Output = f64;

                #[inline]
                fn py_add(self, rhs: $rhs) -> f64 {
                    self as f64 + rhs as f64
                }
            }

            impl PySub<$rhs> for $lhs {
                type Output = f64;

                #[inline]
                fn py_sub(self, rhs: $rhs) -> f64 {
                    self as f64 - rhs as f64
                }
            }

            impl PyMul<$rhs> for $lhs {
                type Output = f64;

                #[inline]
                fn py_mul(self, rhs: $rhs) -> f64 {
                    self as f64 * rhs as f64
                }
            }

            impl PyDiv<$rhs> for $lhs {
                type Output = f64;

                #[inline]
                fn py_div(self, rhs: $rhs) -> f64 {
                    float_div(self as f64, rhs as f64)
                }
            }

            impl PyMod<$rhs> for $lhs {
                type Output = f64;

                #[inline]
                fn py_mod(self, rhs: $rhs) -> f64 {
                    float_mod(self as f64, rhs as f64)
                }
            }
        )*
    };
}

impl_float_ops! {
    f64, f64;
    f64, i32;
    f64, i64;
    i32, f64;
    i64, f64;
}

/// Native integers combined with a value coerce the value with
/// [Value::to_i64], or [Value::to_f64] for division. Results wrap on
/// overflow, like integer arithmetic between values.
macro_rules! impl_int_value_ops {
    ($($ty:ty),*) => {
        $(
            impl PyAdd<Value> for $ty {
                type Output = i64;

                #[inline]
                fn py_add(self, rhs: Value) -> i64 {
                    i64::from(self).wrapping_add(rhs.to_i64())
                }
            }

            impl PySub<Value> for $ty {
                type Output = i64;

                #[inline]
                fn py_sub(self, rhs: Value) -> i64 {
                    i64::from(self).wrapping_sub(rhs.to_i64())
                }
            }

            impl PyMul<Value> for $ty {
                type Output = i64;

                #[inline]
                fn py_mul(self, rhs: Value) -> i64 {
                    i64::from(self).wrapping_mul(rhs.to_i64())
                }
            }

            impl PyDiv<Value> for $ty {
                type Output = f64;

                #[inline]
                fn py_div(self, rhs: Value) -> f64 {
                    float_div(self as f64, rhs.to_f64())
                }
            }

            impl PyMod<Value> for $ty {
                type Output = i64;

                #[inline]
                fn py_mod(self, rhs: Value) -> i64 {
                    int_mod!(i64::from(self), rhs.to_i64())
                }
            }
        )*
    };
}

impl_int_value_ops!(i32, i64);

impl PyAdd<Value> for f64 {
    type Output = f64;

    #[inline]
    fn py_add(self, rhs: Value) -> f64 {
        self + rhs.to_f64()
    }
}

impl PySub<Value> for f64 {
    type Output = f64;

    #[inline]
    fn py_sub(self, rhs: Value) -> f64 {
        self - rhs.to_f64()
    }
}

impl PyMul<Value> for f64 {
    type Output = f64;

    #[inline]
    fn py_mul(self, rhs: Value) -> f64 {
        self * rhs.to_f64()
    }
}

impl PyDiv<Value> for f64 {
    type Output = f64;

    #[inline]
    fn py_div(self, rhs: Value) -> f64 {
        float_div(self, rhs.to_f64())
    }
}

impl PyMod<Value> for f64 {
    type Output = f64;

    #[inline]
    fn py_mod(self, rhs: Value) -> f64 {
        float_mod(self, rhs.to_f64())
    }
}
