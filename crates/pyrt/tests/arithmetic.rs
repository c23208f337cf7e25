use pyrt::{floordiv, PyAdd, PyDiv, PyMod, PyMul, PySub, Value};

#[test]
fn test_modulo_boundaries() {
    assert_eq!((-7i64).py_mod(3i64), 2);
    assert_eq!(7i64.py_mod(-3i64), -2);
    assert_eq!(0i64.py_mod(5i64), 0);
    assert_eq!(5i64.py_mod(0i64), 0);
    assert!(5.0f64.py_mod(0.0f64).is_nan());
}

#[test]
fn test_floordiv_boundaries() {
    assert_eq!(floordiv(-7, 2), -4);
    assert_eq!(floordiv(7, -2), -4);
    assert_eq!(floordiv(-7, -2), 3);
    assert_eq!(floordiv(7, 2), 3);
}

#[test]
fn test_mixed_values() {
    assert_eq!(Value::Int(3).py_add(Value::Float(0.5)), Value::Float(3.5));
    assert_eq!(Value::str("a").py_add(Value::Int(1)), Value::None);
}

#[test]
fn test_generated_loop() {
    // total = 0
    // for x in [1, 2.5, "3"]: total = total + x
    let items = Value::from(vec![Value::Int(1), Value::Float(2.5), Value::str("3")]);
    let mut total = Value::Int(0);

    for item in &items {
        total = total.py_add(item);
    }

    // Python raises on the string, the runtime degrades to None.
    assert_eq!(total, Value::None);

    let mut total = Value::Int(0);

    for item in items.iter().filter(|item| !item.is_str()) {
        total = total.py_add(item.clone());
    }

    assert_eq!(total, Value::Float(3.5));
}

#[test]
fn test_average() {
    let scores = vec![90i64, 85, 77];
    let sum: i64 = scores.iter().sum();
    let average = sum.py_div(scores.len() as i64);
    assert!((average - 84.0).abs() < f64::EPSILON);

    let empty: Vec<i64> = Vec::new();
    assert!(0i64.py_div(empty.len() as i64).is_nan());
}

#[test]
fn test_natives_with_values() {
    let x = Value::str("12");
    assert_eq!(3i64.py_mul(x.clone()), 36);
    assert_eq!(100i32.py_sub(x), 88);
    assert_eq!(Value::Int(10).py_sub(2.5f64), Value::Float(7.5));
    assert_eq!(Value::Int(10).py_mul(3i32), Value::Int(30));
}
