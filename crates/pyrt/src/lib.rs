//! A runtime giving Rust code generated from Python the semantics Python
//! programs rely on.
//!
//! The heart of the crate is [Value], a dynamically typed value which can
//! hold anything a Python variable can. Around it sit a family of traits
//! that generated code emits calls against:
//!
//! * [PyAdd], [PySub], [PyMul], [PyDiv] and [PyMod] for arithmetic with
//!   Python's promotion rules, true division and sign-of-divisor modulo.
//! * [PyIndex] for negative indexing.
//! * [PyTruthy] for the truth value of anything that can appear in an `if`.
//! * [PyStringMethods] and [PythonIntOps] for the methods of `str` and `int`.
//!
//! Conversion into a [Value] goes through [From], conversion out of one
//! through [FromValue].
//!
//! ```
//! use pyrt::{PyAdd, PyIndex, PyMod, PyTruthy, Value};
//!
//! let list = Value::from(vec![1i64, 2, 3]);
//! assert_eq!(list.py_index(-1i64), Value::Int(3));
//! assert_eq!((-7i64).py_mod(3i64), 2);
//! assert_eq!(Value::Int(3).py_add(Value::Float(0.5)), Value::Float(3.5));
//! assert!(!Value::None.is_true());
//! ```
//!
//! Operations never fail on bad input unless they say so. Where Python would
//! raise, the lenient operations produce a neutral result such as
//! [Value::None], `NaN` or zero and log the event at the `trace` level
//! through [log]. The fallible counterparts, like [Value::get_item] and
//! [checked_floordiv], return a [PyError].

#![deny(missing_docs)]

mod error;
mod from_value;
mod index;
mod int;
mod iter;
mod ops;
mod sequence;
#[cfg(feature = "serde")]
mod serde;
mod string;
mod to_value;
mod truthy;
mod value;

pub use crate::error::{PyError, PyErrorKind};
pub use crate::from_value::FromValue;
pub use crate::index::PyIndex;
pub use crate::int::PythonIntOps;
pub use crate::iter::{IntoIter, Iter};
pub use crate::ops::{
    checked_floordiv, floordiv, floordiv_f64, py_max, py_min, Integer, PyAdd, PyDiv, PyMod, PyMul,
    PySub,
};
pub use crate::string::PyStringMethods;
pub use crate::truthy::PyTruthy;
pub use crate::value::{Dict, Value};

mod collections {
    pub use hashbrown::{hash_map, HashMap};
}
