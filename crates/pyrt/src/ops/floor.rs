use crate::PyError;
use std::cmp::Ordering;
use std::fmt;

mod private {
    pub trait Sealed {}
}

/// A native signed integer which [floordiv] accepts.
pub trait Integer: Copy + fmt::Display + private::Sealed {
    #[doc(hidden)]
    fn is_zero(self) -> bool;

    #[doc(hidden)]
    fn floor_div(self, rhs: Self) -> Self;
}

macro_rules! impl_integer {
    ($($ty:ty),*) => {
        $(
            impl private::Sealed for $ty {}

            impl Integer for $ty {
                #[inline]
                fn is_zero(self) -> bool {
                    self == 0
                }

                #[inline]
                fn floor_div(self, rhs: Self) -> Self {
                    let q = self.wrapping_div(rhs);
                    let r = self.wrapping_rem(rhs);

                    if r != 0 && (r < 0) != (rhs < 0) {
                        q - 1
                    } else {
                        q
                    }
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize);

/// Python's `//` on integers, rounding the quotient towards negative
/// infinity.
///
/// ```
/// use pyrt::floordiv;
///
/// assert_eq!(floordiv(-7, 2), -4);
/// assert_eq!(floordiv(7, -2), -4);
/// assert_eq!(floordiv(-7, -2), 3);
/// ```
///
/// # Panics
///
/// Panics if `b` is zero. Use [checked_floordiv] where Python code catches
/// `ZeroDivisionError`.
#[inline]
#[track_caller]
pub fn floordiv<T>(a: T, b: T) -> T
where
    T: Integer,
{
    if b.is_zero() {
        panic!("{}", PyError::divide_by_zero(format!("{} // 0", a)));
    }

    a.floor_div(b)
}

/// Python's `//` on integers which reports a zero divisor as an error.
pub fn checked_floordiv<T>(a: T, b: T) -> Result<T, PyError>
where
    T: Integer,
{
    if b.is_zero() {
        return Err(PyError::divide_by_zero(format!("{} // 0", a)));
    }

    Ok(a.floor_div(b))
}

/// Python's `//` on floats, `NaN` for a zero divisor.
pub fn floordiv_f64(a: f64, b: f64) -> f64 {
    if b == 0.0 {
        return f64::NAN;
    }

    let m = a % b;
    let mut div = (a - m) / b;

    if m != 0.0 && (b < 0.0) != (m < 0.0) {
        div -= 1.0;
    }

    if div == 0.0 {
        return 0.0f64.copysign(a / b);
    }

    let floor = div.floor();

    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Python's `min(a, b)`.
///
/// The first argument wins unless the second is strictly smaller, so a `NaN`
/// in second position is ignored.
pub fn py_min<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    match b.partial_cmp(&a) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

/// Python's `max(a, b)`.
///
/// The first argument wins unless the second is strictly larger, so a `NaN`
/// in second position is ignored.
pub fn py_max<T>(a: T, b: T) -> T
where
    T: PartialOrd,
{
    match b.partial_cmp(&a) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}
