use pyrt::{PyMul, PyStringMethods, Value};

#[test]
fn test_string_multiplication() {
    assert_eq!("ab".py_mul(3i64), "ababab");
    assert_eq!("ab".py_mul(0i64), "");
    assert_eq!("ab".py_mul(-1i64), "");
    assert_eq!(2i32.py_mul(String::from("xy")), "xyxy");
}

#[test]
fn test_normalize_names() {
    let names = ["  ada LOVELACE ", "alan turing", ""];
    let normalized: Vec<String> = names
        .iter()
        .map(|name| name.strip().title())
        .filter(|name| !name.is_empty())
        .collect();

    assert_eq!(normalized, vec!["Ada Lovelace", "Alan Turing"]);
}

#[test]
fn test_parse_record() {
    let line = "id=7; name=widget; price=3.50";
    let fields: Vec<(String, String)> = line
        .py_split(";")
        .iter()
        .map(|field| {
            let parts = field.strip().py_split("=");
            (parts[0].clone(), parts[1].clone())
        })
        .collect();

    assert_eq!(fields[1], (String::from("name"), String::from("widget")));
    assert_eq!(Value::str(&fields[2].1).to_f64(), 3.5);
}

#[test]
fn test_table_layout() {
    let header = format!("|{}|{}|", "name".ljust(6), "qty".rjust(4));
    assert_eq!(header, "|name  | qty|");
    assert_eq!("7".zfill(3), "007");
    assert_eq!("-7".zfill(3), "-07");
    assert_eq!("x".center(3), " x ");
}

#[test]
fn test_search_on_values() {
    let text = Value::str("the cat sat on the mat");
    assert_eq!(text.py_find("the"), 0);
    assert_eq!(text.py_rfind("the"), 15);
    assert_eq!(text.py_find("dog"), -1);
    assert_eq!(text.count("at"), 3);
    assert_eq!(text.py_replace("at", "og"), "the cog sog on the mog");
    assert!(text.contains("sat"));
    assert_eq!(text.upper().py_split_whitespace().len(), 6);
}

#[test]
fn test_unicode_positions() {
    assert_eq!("naïve café".py_find("café"), 6);
    assert_eq!("ÄbC".swapcase(), "äBc");
    assert_eq!("ÉCOLE".lower(), "école");
    assert_eq!("日本".center(4), " 日本 ");
}
