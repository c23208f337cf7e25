use super::Value;
use std::fmt;
use std::fmt::Write as _;

/// Strings display raw, containers display their debug form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Str(s) => f.write_str(s),
            Value::Bool(b) => write!(f, "{}", b),
            Value::None => f.write_str("None"),
            Value::List(items) | Value::Tuple(items) => write!(f, "{:?}", items),
            Value::Dict(dict) => write!(f, "{:?}", dict),
        }
    }
}

impl Value {
    /// Render the value the way Python's `repr()` would.
    ///
    /// ```
    /// use pyrt::Value;
    ///
    /// let value = Value::List(vec![Value::Int(1), Value::str("a"), Value::Float(2.0)]);
    /// assert_eq!(value.py_repr(), "[1, 'a', 2.0]");
    /// ```
    pub fn py_repr(&self) -> String {
        let mut out = String::new();
        write_repr(self, &mut out);
        out
    }

    /// Render the value the way Python's `str()` would.
    ///
    /// Only differs from [Value::py_repr] in that strings are not quoted.
    pub fn py_str(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            other => other.py_repr(),
        }
    }
}

fn write_repr(value: &Value, out: &mut String) {
    match value {
        Value::Int(n) => {
            let mut buffer = itoa::Buffer::new();
            out.push_str(buffer.format(*n));
        }
        Value::Float(n) => write_float(*n, out),
        Value::Str(s) => write_quoted(s, out),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::None => out.push_str("None"),
        Value::List(items) => {
            out.push('[');
            write_items(items, out);
            out.push(']');
        }
        Value::Tuple(items) => {
            out.push('(');
            write_items(items, out);

            if items.len() == 1 {
                out.push(',');
            }

            out.push(')');
        }
        Value::Dict(dict) => {
            out.push('{');
            let mut it = dict.iter().peekable();

            while let Some((key, value)) = it.next() {
                write_repr(key, out);
                out.push_str(": ");
                write_repr(value, out);

                if it.peek().is_some() {
                    out.push_str(", ");
                }
            }

            out.push('}');
        }
    }
}

fn write_items(items: &[Value], out: &mut String) {
    let mut it = items.iter().peekable();

    while let Some(item) = it.next() {
        write_repr(item, out);

        if it.peek().is_some() {
            out.push_str(", ");
        }
    }
}

/// Shortest round-trip representation with Python's exponent rules:
/// scientific notation below `1e-4` and from `1e16`, and a sign plus at
/// least two digits in the exponent.
fn write_float(n: f64, out: &mut String) {
    if n.is_nan() {
        out.push_str("nan");
        return;
    }

    if n.is_infinite() {
        out.push_str(if n < 0.0 { "-inf" } else { "inf" });
        return;
    }

    let mut buffer = ryu::Buffer::new();
    let s = buffer.format_finite(n);

    if let Some((mantissa, exponent)) = s.split_once('e') {
        push_scientific(mantissa, exponent.parse().unwrap_or(0), out);
        return;
    }

    if n != 0.0 && n.abs() < 1e-4 {
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", s),
        };

        // Of the form `0.0000ddd`.
        let fraction = digits.trim_start_matches("0.");
        let significant = fraction.trim_start_matches('0');
        let zeros = fraction.len() - significant.len();

        out.push_str(sign);
        out.push_str(&significant[..1]);

        if significant.len() > 1 {
            out.push('.');
            out.push_str(&significant[1..]);
        }

        push_exponent(-(zeros as i32) - 1, out);
        return;
    }

    out.push_str(s);
}

fn push_scientific(mantissa: &str, exponent: i32, out: &mut String) {
    out.push_str(mantissa.trim_end_matches(".0"));
    push_exponent(exponent, out);
}

fn push_exponent(exponent: i32, out: &mut String) {
    let sign = if exponent < 0 { '-' } else { '+' };
    let _ = write!(out, "e{}{:02}", sign, exponent.unsigned_abs());
}

fn write_quoted(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);

    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }

    out.push(quote);
}
