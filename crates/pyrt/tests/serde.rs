#![cfg(feature = "serde")]

use pyrt::Value;

#[test]
fn test_serialize() {
    let mut dict = Value::dict();
    dict.insert("items", vec![Value::Int(1), Value::Float(2.5), Value::None]);
    dict.insert("pair", (true, "x"));

    let json = serde_json::to_value(&dict).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"items": [1, 2.5, null], "pair": [true, "x"]})
    );
}

#[test]
fn test_deserialize() {
    let value: Value =
        serde_json::from_str(r#"{"name": "pyrt", "tags": ["a", "b"], "size": 3, "big": 18446744073709551615}"#)
            .unwrap();

    assert_eq!(value["name"], Value::str("pyrt"));
    assert_eq!(value["tags"], Value::from(vec!["a", "b"]));
    assert_eq!(value["size"], Value::Int(3));
    assert_eq!(value["big"], Value::Float(u64::MAX as f64));
    assert_eq!(value["missing"], Value::None);
}

#[test]
fn test_tuples_come_back_as_lists() {
    let tuple = Value::from((1i64, 2i64));
    let json = serde_json::to_string(&tuple).unwrap();
    assert_eq!(json, "[1,2]");

    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value, Value::from(vec![1i64, 2]));
}
