use super::{float_mod, int_mod, PyAdd, PyDiv, PyMod, PyMul, PySub};
use crate::sequence::{repeat_str, repeat_vec};
use crate::Value;
use std::mem;
use std::ops;

/// Record an operation Python would have rejected and produce `None`.
fn unsupported(op: &str, a: &Value, b: &Value) -> Value {
    log::trace!(
        target: "pyrt::ops",
        "unsupported operand types for {}: `{}` and `{}`",
        op,
        a.type_name(),
        b.type_name()
    );

    Value::None
}

fn zero_division(op: &str, a: &Value) -> Value {
    log::trace!(target: "pyrt::ops", "`{}` {} zero is None", a.type_name(), op);
    Value::None
}

impl PyAdd for Value {
    type Output = Value;

    fn py_add(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_add(b)),
            (Value::Float(a), Value::Float(b)) => Value::Float(a + b),
            (Value::Int(a), Value::Float(b)) => Value::Float(a as f64 + b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a + b as f64),
            (Value::Str(a), Value::Str(b)) => Value::Str(a + &b),
            (Value::List(mut a), Value::List(b)) => {
                a.extend(b);
                Value::List(a)
            }
            (Value::Tuple(mut a), Value::Tuple(b)) => {
                a.extend(b);
                Value::Tuple(a)
            }
            (a, b) => unsupported("+", &a, &b),
        }
    }
}

impl PySub for Value {
    type Output = Value;

    fn py_sub(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_sub(b)),
            (Value::Float(a), Value::Float(b)) => Value::Float(a - b),
            (Value::Int(a), Value::Float(b)) => Value::Float(a as f64 - b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a - b as f64),
            (a, b) => unsupported("-", &a, &b),
        }
    }
}

impl PyMul for Value {
    type Output = Value;

    fn py_mul(self, rhs: Value) -> Value {
        match (self, rhs) {
            (Value::Int(a), Value::Int(b)) => Value::Int(a.wrapping_mul(b)),
            (Value::Float(a), Value::Float(b)) => Value::Float(a * b),
            (Value::Int(a), Value::Float(b)) => Value::Float(a as f64 * b),
            (Value::Float(a), Value::Int(b)) => Value::Float(a * b as f64),
            (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) => {
                Value::Str(repeat_str(&s, n))
            }
            (Value::List(items), Value::Int(n)) | (Value::Int(n), Value::List(items)) => {
                Value::List(repeat_vec(&items, n))
            }
            (Value::Tuple(items), Value::Int(n)) | (Value::Int(n), Value::Tuple(items)) => {
                Value::Tuple(repeat_vec(&items, n))
            }
            (a, b) => unsupported("*", &a, &b),
        }
    }
}

impl PyDiv for Value {
    type Output = Value;

    fn py_div(self, rhs: Value) -> Value {
        let (a, b) = match (&self, &rhs) {
            (Value::Int(a), Value::Int(b)) => (*a as f64, *b as f64),
            (Value::Float(a), Value::Float(b)) => (*a, *b),
            (Value::Int(a), Value::Float(b)) => (*a as f64, *b),
            (Value::Float(a), Value::Int(b)) => (*a, *b as f64),
            _ => return unsupported("/", &self, &rhs),
        };

        if b == 0.0 {
            return zero_division("/", &self);
        }

        Value::Float(a / b)
    }
}

impl PyMod for Value {
    type Output = Value;

    fn py_mod(self, rhs: Value) -> Value {
        match (&self, &rhs) {
            (Value::Int(_), Value::Int(0)) => zero_division("%", &self),
            (Value::Int(a), Value::Int(b)) => Value::Int(int_mod!(*a, *b)),
            (Value::Float(_) | Value::Int(_), Value::Float(_) | Value::Int(_)) => {
                let (a, b) = (self.to_f64(), rhs.to_f64());

                if b == 0.0 {
                    return zero_division("%", &self);
                }

                Value::Float(float_mod(a, b))
            }
            _ => unsupported("%", &self, &rhs),
        }
    }
}

macro_rules! impl_value_native {
    ($($ty:ty => $variant:ident),*) => {
        $(
            impl PyAdd<$ty> for Value {
                type Output = Value;

                #[inline]
                fn py_add(self, rhs: $ty) -> Value {
                    self.py_add(Value::$variant(rhs.into()))
                }
            }

            impl PySub<$ty> for Value {
                type Output = Value;

                #[inline]
                fn py_sub(self, rhs: $ty) -> Value {
                    self.py_sub(Value::$variant(rhs.into()))
                }
            }

            impl PyMul<$ty> for Value {
                type Output = Value;

                #[inline]
                fn py_mul(self, rhs: $ty) -> Value {
                    self.py_mul(Value::$variant(rhs.into()))
                }
            }

            impl PyDiv<$ty> for Value {
                type Output = Value;

                #[inline]
                fn py_div(self, rhs: $ty) -> Value {
                    self.py_div(Value::$variant(rhs.into()))
                }
            }

            impl PyMod<$ty> for Value {
                type Output = Value;

                #[inline]
                fn py_mod(self, rhs: $ty) -> Value {
                    self.py_mod(Value::$variant(rhs.into()))
                }
            }
        )*
    };
}

impl_value_native!(i32 => Int, i64 => Int, f64 => Float);

macro_rules! impl_std_op {
    ($($op:ident, $method:ident, $assign:ident, $assign_method:ident => $py:ident;)*) => {
        $(
            impl ops::$op for Value {
                type Output = Value;

                #[inline]
                fn $method(self, rhs: Value) -> Value {
                    self.$py(rhs)
                }
            }

            impl ops::$op<&Value> for &Value {
                type Output = Value;

                #[inline]
                fn $method(self, rhs: &Value) -> Value {
                    self.clone().$py(rhs.clone())
                }
            }

            impl ops::$assign for Value {
                #[inline]
                fn $assign_method(&mut self, rhs: Value) {
                    *self = mem::take(self).$py(rhs);
                }
            }

            impl_std_op!(@native $op, $method, $py, i32, i64, f64);
        )*
    };

    (@native $op:ident, $method:ident, $py:ident, $($ty:ty),*) => {
        $(
            impl ops::$op<$ty> for Value {
                type Output = Value;

                #[inline]
                fn $method(self, rhs: $ty) -> Value {
                    self.$py(rhs)
                }
            }

            impl ops::$op<Value> for $ty {
                type Output = Value;

                #[inline]
                fn $method(self, rhs: Value) -> Value {
                    Value::from(self).$py(rhs)
                }
            }
        )*
    };
}

impl_std_op! {
    Add, add, AddAssign, add_assign => py_add;
    Sub, sub, SubAssign, sub_assign => py_sub;
    Mul, mul, MulAssign, mul_assign => py_mul;
    Div, div, DivAssign, div_assign => py_div;
    Rem, rem, RemAssign, rem_assign => py_mod;
}

impl ops::Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        match self {
            Value::Int(n) => Value::Int(n.wrapping_neg()),
            Value::Float(n) => Value::Float(-n),
            Value::Bool(b) => Value::Int(-i64::from(b)),
            other => {
                log::trace!(target: "pyrt::ops", "bad operand type for unary -: `{}`", other.type_name());
                Value::None
            }
        }
    }
}

/// Python's `not`.
impl ops::Not for Value {
    type Output = bool;

    fn not(self) -> bool {
        !self.to_bool()
    }
}

impl ops::Not for &Value {
    type Output = bool;

    fn not(self) -> bool {
        !self.to_bool()
    }
}

macro_rules! impl_bit_op {
    ($($op:ident, $method:ident, $token:tt;)*) => {
        $(
            impl ops::$op for Value {
                type Output = Value;

                fn $method(self, rhs: Value) -> Value {
                    match (self, rhs) {
                        (Value::Int(a), Value::Int(b)) => Value::Int(a $token b),
                        (Value::Bool(a), Value::Bool(b)) => Value::Bool(a $token b),
                        (Value::Int(a), Value::Bool(b)) => Value::Int(a $token i64::from(b)),
                        (Value::Bool(a), Value::Int(b)) => Value::Int(i64::from(a) $token b),
                        (a, b) => unsupported(stringify!($token), &a, &b),
                    }
                }
            }

            impl ops::$op<i64> for Value {
                type Output = Value;

                #[inline]
                fn $method(self, rhs: i64) -> Value {
                    ops::$op::$method(self, Value::Int(rhs))
                }
            }
        )*
    };
}

impl_bit_op! {
    BitAnd, bitand, &;
    BitOr, bitor, |;
    BitXor, bitxor, ^;
}
