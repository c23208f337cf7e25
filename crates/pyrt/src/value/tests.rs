use super::Value;
use crate::PyErrorKind;

fn list(items: Vec<Value>) -> Value {
    Value::List(items)
}

#[test]
fn test_default_is_none() {
    assert_eq!(Value::default(), Value::None);
    assert!(Value::default().is_none());
}

#[test]
fn test_equality_is_structural() {
    assert_eq!(Value::Float(f64::NAN), Value::Float(f64::NAN));
    assert_ne!(Value::Int(1), Value::Float(1.0));
    assert_ne!(Value::Int(1), Value::Bool(true));
    assert_ne!(
        Value::List(vec![Value::Int(1)]),
        Value::Tuple(vec![Value::Int(1)])
    );
    assert_eq!(
        list(vec![Value::Int(1), Value::str("a")]),
        list(vec![Value::Int(1), Value::str("a")])
    );
}

#[test]
fn test_native_comparisons_coerce() {
    assert_eq!(Value::Float(1.0), 1i64);
    assert_eq!(1i32, Value::Int(1));
    assert_eq!(Value::Int(2), 2.0f64);
    assert!(Value::Int(2) < 2.5f64);
    assert!(3i64 > Value::Float(2.5));
    assert_ne!(Value::str("1"), 1i64);
    assert!(Value::str("1").partial_cmp(&1i64).is_none());
}

#[test]
fn test_ordering() {
    assert!(Value::None < Value::Int(i64::MIN));
    assert!(Value::None < Value::Bool(false));
    assert!(Value::Int(1) < Value::Float(1.5));
    assert!(Value::Float(0.5) < Value::Int(1));
    assert!(Value::Int(1) < Value::Float(1.0));
    assert!(Value::str("a") < Value::str("b"));
    assert!(list(vec![Value::Int(1), Value::Int(2)]) < list(vec![Value::Int(1), Value::Int(3)]));
    assert!(list(vec![Value::Int(1)]) < list(vec![Value::Int(1), Value::Int(0)]));

    let mut values = vec![
        Value::str("b"),
        Value::List(vec![]),
        Value::Int(3),
        Value::None,
        Value::Float(1.5),
        Value::dict(),
        Value::Bool(true),
    ];

    values.sort();

    assert_eq!(
        values,
        vec![
            Value::None,
            Value::Bool(true),
            Value::Float(1.5),
            Value::Int(3),
            Value::str("b"),
            Value::List(vec![]),
            Value::dict(),
        ]
    );
}

#[test]
fn test_dict_ordering_is_consistent_with_equality() {
    let mut a = Value::dict();
    a.insert("x", 1);
    let mut b = Value::dict();
    b.insert("x", 2);

    assert!(a < b);
    assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);
}

#[test]
fn test_hash_value() {
    let a = list(vec![Value::Int(1), Value::Float(f64::NAN), Value::str("x")]);
    assert_eq!(a.hash_value(), a.clone().hash_value());
    assert_ne!(Value::Int(1).hash_value(), Value::Float(1.0).hash_value());

    let mut one = Value::dict();
    one.insert(1, 2);
    assert_eq!(one.hash_value(), Value::dict().hash_value());
}

#[test]
fn test_len() {
    assert_eq!(Value::str("héllo").len(), 6);
    assert_eq!(list(vec![Value::None, Value::None]).len(), 2);
    assert_eq!(Value::Tuple(vec![Value::None]).len(), 1);
    assert_eq!(Value::Int(42).len(), 0);
    assert!(Value::None.is_empty());
    assert!(!Value::str("a").is_empty());
}

#[test]
fn test_display() {
    assert_eq!(Value::str("raw").to_string(), "raw");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::Bool(true).to_string(), "true");
    assert_eq!(Value::None.to_string(), "None");
    assert_eq!(list(vec![Value::Int(1)]).to_string(), "[Int(1)]");
}

#[test]
fn test_py_repr() {
    assert_eq!(Value::Float(1.0).py_repr(), "1.0");
    assert_eq!(Value::Float(0.1).py_repr(), "0.1");
    assert_eq!(Value::Float(-0.0).py_repr(), "-0.0");
    assert_eq!(Value::Float(1e16).py_repr(), "1e+16");
    assert_eq!(Value::Float(1.5e-7).py_repr(), "1.5e-07");
    assert_eq!(Value::Float(1e-5).py_repr(), "1e-05");
    assert_eq!(Value::Float(0.0001).py_repr(), "0.0001");
    assert_eq!(Value::Float(f64::INFINITY).py_repr(), "inf");
    assert_eq!(Value::Float(f64::NAN).py_repr(), "nan");
    assert_eq!(Value::Bool(false).py_repr(), "False");
    assert_eq!(Value::str("it's").py_repr(), "\"it's\"");
    assert_eq!(Value::str("a\nb").py_repr(), "'a\\nb'");
    assert_eq!(Value::Tuple(vec![Value::Int(1)]).py_repr(), "(1,)");
    assert_eq!(
        Value::Tuple(vec![Value::Int(1), Value::None]).py_repr(),
        "(1, None)"
    );

    let mut dict = Value::dict();
    dict.insert("k", list(vec![Value::Bool(true)]));
    assert_eq!(dict.py_repr(), "{'k': [True]}");
    assert_eq!(Value::str("plain").py_str(), "plain");
}

#[test]
fn test_coercions() {
    assert_eq!(Value::Float(3.9).to_i64(), 3);
    assert_eq!(Value::Float(-3.9).to_i64(), -3);
    assert_eq!(Value::Bool(true).to_i64(), 1);
    assert_eq!(Value::str(" 42 ").to_i64(), 42);
    assert_eq!(Value::str("nope").to_i64(), 0);
    assert_eq!(Value::None.to_i64(), 0);
    assert_eq!(Value::str("2.5").to_f64(), 2.5);
    assert_eq!(Value::str("x").to_f64(), 0.0);
    assert_eq!(Value::Int(2).as_f64(), Some(2.0));
    assert_eq!(Value::Float(2.0).as_i64(), None);
    assert_eq!(Value::Int(7).as_string(), "7");
    assert_eq!(Value::str("s").as_string(), "s");
}

#[test]
fn test_dict_helpers() {
    let mut dict = Value::dict();
    dict.insert("name", "pyrt");
    dict.insert(1, 2.5);

    assert_eq!(dict.get_str("name"), Some(&Value::str("pyrt")));
    assert_eq!(dict.get(&Value::Int(1)), Some(&Value::Float(2.5)));
    assert!(dict.contains_key_str("name"));
    assert!(!dict.contains_key_str("missing"));
    assert!(dict.contains_key(&Value::Int(1)));
    assert_eq!(dict.remove(&Value::Int(1)), Some(Value::Float(2.5)));
    assert_eq!(dict.len(), 1);

    let mut not_a_dict = Value::Int(1);
    not_a_dict.insert("a", 1);
    assert_eq!(not_a_dict, Value::Int(1));
    assert_eq!(not_a_dict.get_str("a"), None);
}

#[test]
fn test_contains() {
    assert!(Value::str("hello").contains("ell"));
    assert!(list(vec![Value::str("a"), Value::Int(1)]).contains("a"));
    assert!(!list(vec![Value::str("ab")]).contains("a"));
    assert!(!Value::Int(1).contains("1"));
}

#[test]
fn test_get_item() {
    let value = list(vec![Value::Int(10), Value::Int(20), Value::Int(30)]);
    assert_eq!(value.get_item(-1).unwrap(), &Value::Int(30));
    assert_eq!(value.get_item(0).unwrap(), &Value::Int(10));

    let error = value.get_item(3).unwrap_err();
    assert!(matches!(error.kind(), PyErrorKind::IndexOutOfRange { .. }));
    assert!(Value::Int(1).get_item(0).is_err());

    let mut dict = Value::dict();
    dict.insert(5, "five");
    assert_eq!(dict.get_item(5).unwrap(), &Value::str("five"));
    assert_eq!(dict.get_item(6).unwrap(), &Value::None);
}

#[test]
fn test_tuple_unpacking() {
    let pair = Value::Tuple(vec![Value::Int(1), Value::str("b")]);
    assert_eq!(pair.get_tuple_elem(1), Value::str("b"));
    assert_eq!(pair.extract_tuple(2), vec![Value::Int(1), Value::str("b")]);

    let error = pair.try_extract_tuple(3).unwrap_err();
    assert!(matches!(error.kind(), PyErrorKind::BadValue { .. }));
    assert_eq!(
        error.to_string(),
        "value error: expected a tuple of length 3, but found one with length 2"
    );
}

#[test]
#[should_panic(expected = "expected a tuple of length 1")]
fn test_extract_tuple_wrong_arity() {
    Value::Tuple(vec![Value::None, Value::None]).extract_tuple(1);
}

#[test]
#[should_panic(expected = "index out of range")]
fn test_get_tuple_elem_out_of_range() {
    Value::Tuple(vec![Value::None]).get_tuple_elem(1);
}
