use super::{Dict, Value};
use std::cmp::Ordering;

impl Value {
    pub(crate) const STR_RANK: u8 = 4;

    /// The position of the variant when ordering values of different
    /// variants: `None < Bool < Int < Float < Str < List < Tuple < Dict`.
    pub(crate) fn rank(&self) -> u8 {
        match self {
            Value::None => 0,
            Value::Bool(..) => 1,
            Value::Int(..) => 2,
            Value::Float(..) => 3,
            Value::Str(..) => Self::STR_RANK,
            Value::List(..) => 5,
            Value::Tuple(..) => 6,
            Value::Dict(..) => 7,
        }
    }

    fn partial_cmp_i64(&self, other: i64) -> Option<Ordering> {
        match self {
            Value::Int(n) => Some(n.cmp(&other)),
            Value::Float(n) => n.partial_cmp(&(other as f64)),
            Value::Bool(b) => Some(i64::from(*b).cmp(&other)),
            _ => None,
        }
    }

    fn partial_cmp_f64(&self, other: f64) -> Option<Ordering> {
        match self {
            Value::Int(n) => (*n as f64).partial_cmp(&other),
            Value::Float(n) => n.partial_cmp(&other),
            Value::Bool(b) => f64::from(u8::from(*b)).partial_cmp(&other),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::None, Value::None) => true,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Values are totally ordered.
///
/// Integers and floats compare numerically, with an integer sorting before an
/// equal float. Other pairs of different variants are ordered by variant, so
/// `None` sorts before everything else.
impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Int(a), Value::Float(b)) => cmp_numbers(*a as f64, *b).then(Ordering::Less),
            (Value::Float(a), Value::Int(b)) => {
                cmp_numbers(*a, *b as f64).then(Ordering::Greater)
            }
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => a.cmp(b),
            (Value::Tuple(a), Value::Tuple(b)) => a.cmp(b),
            (Value::Dict(a), Value::Dict(b)) => cmp_dicts(a, b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

fn cmp_numbers(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Dicts order by size, then by their sorted entries.
fn cmp_dicts(a: &Dict, b: &Dict) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| {
        let mut a = a.iter().collect::<Vec<_>>();
        let mut b = b.iter().collect::<Vec<_>>();
        a.sort();
        b.sort();
        a.cmp(&b)
    })
}

macro_rules! native_cmp {
    ($ty:ty, $method:ident, $convert:path) => {
        impl PartialEq<$ty> for Value {
            fn eq(&self, other: &$ty) -> bool {
                self.$method($convert(*other)) == Some(Ordering::Equal)
            }
        }

        impl PartialEq<Value> for $ty {
            fn eq(&self, other: &Value) -> bool {
                other.$method($convert(*self)) == Some(Ordering::Equal)
            }
        }

        impl PartialOrd<$ty> for Value {
            fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                self.$method($convert(*other))
            }
        }

        impl PartialOrd<Value> for $ty {
            fn partial_cmp(&self, other: &Value) -> Option<Ordering> {
                other.$method($convert(*self)).map(Ordering::reverse)
            }
        }
    };
}

native_cmp!(i32, partial_cmp_i64, i64::from);
native_cmp!(i64, partial_cmp_i64, i64::from);
native_cmp!(f64, partial_cmp_f64, f64::from);
