use crate::Value;

/// Python's `str` methods.
///
/// Every method is provided on top of [PyStringMethods::as_py_str]. When it
/// returns `None`, which is the case for a [Value] that isn't a string, the
/// methods return an empty string, `false`, zero, `-1` or an empty vector
/// instead of failing.
///
/// Widths and positions count characters, not bytes.
///
/// ```
/// use pyrt::{PyStringMethods, Value};
///
/// assert_eq!("hello world".title(), "Hello World");
/// assert_eq!("-42".zfill(5), "-0042");
/// assert_eq!("abc".py_find("z"), -1);
/// assert_eq!(Value::Int(1).upper(), "");
/// ```
pub trait PyStringMethods {
    /// The string operated on, if any.
    fn as_py_str(&self) -> Option<&str>;

    /// `str.lower()`.
    fn lower(&self) -> String {
        map_str(self, str::to_lowercase)
    }

    /// `str.upper()`.
    fn upper(&self) -> String {
        map_str(self, str::to_uppercase)
    }

    /// `str.strip()`, removing leading and trailing whitespace.
    fn strip(&self) -> String {
        map_str(self, |s| s.trim().to_owned())
    }

    /// `str.lstrip()`.
    fn lstrip(&self) -> String {
        map_str(self, |s| s.trim_start().to_owned())
    }

    /// `str.rstrip()`.
    fn rstrip(&self) -> String {
        map_str(self, |s| s.trim_end().to_owned())
    }

    /// `str.split(sep)`.
    ///
    /// An empty separator doesn't split the string at all.
    fn py_split(&self, sep: &str) -> Vec<String> {
        match self.as_py_str() {
            Some(s) if sep.is_empty() => vec![s.to_owned()],
            Some(s) => s.split(sep).map(str::to_owned).collect(),
            None => Vec::new(),
        }
    }

    /// `str.split()` without a separator, splitting on runs of whitespace.
    fn py_split_whitespace(&self) -> Vec<String> {
        match self.as_py_str() {
            Some(s) => s.split_whitespace().map(str::to_owned).collect(),
            None => Vec::new(),
        }
    }

    /// `str.replace(old, new)`.
    fn py_replace(&self, old: &str, new: &str) -> String {
        map_str(self, |s| s.replace(old, new))
    }

    /// `str.startswith(prefix)`.
    fn startswith(&self, prefix: &str) -> bool {
        self.as_py_str().map_or(false, |s| s.starts_with(prefix))
    }

    /// `str.endswith(suffix)`.
    fn endswith(&self, suffix: &str) -> bool {
        self.as_py_str().map_or(false, |s| s.ends_with(suffix))
    }

    /// `str.find(sub)`: the character position of the first occurrence, or
    /// `-1`.
    fn py_find(&self, sub: &str) -> i64 {
        match self.as_py_str() {
            Some(s) => s.find(sub).map_or(-1, |at| char_position(s, at)),
            None => -1,
        }
    }

    /// `str.rfind(sub)`: the character position of the last occurrence, or
    /// `-1`.
    fn py_rfind(&self, sub: &str) -> i64 {
        match self.as_py_str() {
            Some(s) => s.rfind(sub).map_or(-1, |at| char_position(s, at)),
            None => -1,
        }
    }

    /// `str.capitalize()`: the first character in upper case, the rest in
    /// lower case.
    fn capitalize(&self) -> String {
        map_str(self, |s| {
            let mut chars = s.chars();

            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
    }

    /// `str.title()`: every whitespace-separated word capitalized.
    fn title(&self) -> String {
        map_str(self, |s| {
            let mut out = String::with_capacity(s.len());
            let mut word_start = true;

            for c in s.chars() {
                if c.is_whitespace() {
                    out.push(c);
                    word_start = true;
                } else if word_start {
                    out.extend(c.to_uppercase());
                    word_start = false;
                } else {
                    out.extend(c.to_lowercase());
                }
            }

            out
        })
    }

    /// `str.swapcase()`.
    fn swapcase(&self) -> String {
        map_str(self, |s| {
            let mut out = String::with_capacity(s.len());

            for c in s.chars() {
                if c.is_uppercase() {
                    out.extend(c.to_lowercase());
                } else if c.is_lowercase() {
                    out.extend(c.to_uppercase());
                } else {
                    out.push(c);
                }
            }

            out
        })
    }

    /// `str.isalpha()`.
    fn isalpha(&self) -> bool {
        all_chars(self, char::is_alphabetic)
    }

    /// `str.isdigit()`.
    fn isdigit(&self) -> bool {
        all_chars(self, |c| c.is_ascii_digit())
    }

    /// `str.isalnum()`.
    fn isalnum(&self) -> bool {
        all_chars(self, char::is_alphanumeric)
    }

    /// `str.isspace()`.
    fn isspace(&self) -> bool {
        all_chars(self, char::is_whitespace)
    }

    /// `str.islower()`: has a lower case character and no upper case one.
    fn islower(&self) -> bool {
        self.as_py_str().map_or(false, |s| {
            s.chars().any(char::is_lowercase) && !s.chars().any(char::is_uppercase)
        })
    }

    /// `str.isupper()`: has an upper case character and no lower case one.
    fn isupper(&self) -> bool {
        self.as_py_str().map_or(false, |s| {
            s.chars().any(char::is_uppercase) && !s.chars().any(char::is_lowercase)
        })
    }

    /// `str.center(width)`.
    ///
    /// When the padding can't be split evenly the extra space goes to the
    /// left for odd widths and to the right for even ones.
    fn center(&self, width: usize) -> String {
        map_str(self, |s| {
            let len = s.chars().count();

            if len >= width {
                return s.to_owned();
            }

            let margin = width - len;
            let left = margin / 2 + (margin & width & 1);
            pad(s, left, margin - left, ' ')
        })
    }

    /// `str.ljust(width)`.
    fn ljust(&self, width: usize) -> String {
        map_str(self, |s| {
            let margin = width.saturating_sub(s.chars().count());
            pad(s, 0, margin, ' ')
        })
    }

    /// `str.rjust(width)`.
    fn rjust(&self, width: usize) -> String {
        map_str(self, |s| {
            let margin = width.saturating_sub(s.chars().count());
            pad(s, margin, 0, ' ')
        })
    }

    /// `str.zfill(width)`: pads with zeros on the left, after any leading
    /// sign.
    fn zfill(&self, width: usize) -> String {
        map_str(self, |s| {
            let margin = width.saturating_sub(s.chars().count());

            match s.strip_prefix(|c: char| c == '+' || c == '-') {
                Some(rest) => {
                    let mut out = pad(rest, margin, 0, '0');
                    out.insert_str(0, &s[..1]);
                    out
                }
                None => pad(s, margin, 0, '0'),
            }
        })
    }

    /// `str.count(sub)`: the number of non-overlapping occurrences.
    fn count(&self, sub: &str) -> usize {
        self.as_py_str().map_or(0, |s| s.matches(sub).count())
    }
}

impl PyStringMethods for str {
    #[inline]
    fn as_py_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl PyStringMethods for String {
    #[inline]
    fn as_py_str(&self) -> Option<&str> {
        Some(self)
    }
}

impl PyStringMethods for Value {
    #[inline]
    fn as_py_str(&self) -> Option<&str> {
        self.as_str()
    }
}

fn map_str<T, F>(this: &T, f: F) -> String
where
    T: ?Sized + PyStringMethods,
    F: FnOnce(&str) -> String,
{
    this.as_py_str().map(f).unwrap_or_default()
}

fn all_chars<T, F>(this: &T, f: F) -> bool
where
    T: ?Sized + PyStringMethods,
    F: FnMut(char) -> bool,
{
    match this.as_py_str() {
        Some(s) => !s.is_empty() && s.chars().all(f),
        None => false,
    }
}

fn char_position(s: &str, byte: usize) -> i64 {
    s[..byte].chars().count() as i64
}

fn pad(s: &str, left: usize, right: usize, fill: char) -> String {
    let mut out = String::with_capacity(s.len() + left + right);
    out.extend(std::iter::repeat(fill).take(left));
    out.push_str(s);
    out.extend(std::iter::repeat(fill).take(right));
    out
}

#[cfg(test)]
mod tests {
    use super::PyStringMethods;
    use crate::Value;

    #[test]
    fn test_case() {
        assert_eq!("hELLO wORLD".capitalize(), "Hello world");
        assert_eq!("hello   big\tworld".title(), "Hello   Big\tWorld");
        assert_eq!("hELLO".swapcase(), "Hello");
        assert_eq!("".capitalize(), "");
    }

    #[test]
    fn test_predicates_need_content() {
        assert!(!"".isalpha());
        assert!(!"".isdigit());
        assert!(!"".isalnum());
        assert!(!"".isspace());
        assert!(!"".islower());
        assert!(!"".isupper());
        assert!("abc".isalpha());
        assert!("0123".isdigit());
        assert!(!"12a".isdigit());
        assert!("a1".isalnum());
        assert!(" \t".isspace());
        assert!("abc1".islower());
        assert!(!"1".islower());
        assert!("ABC1".isupper());
    }

    #[test]
    fn test_padding() {
        assert_eq!("ab".center(5), "  ab ");
        assert_eq!("a".center(4), " a  ");
        assert_eq!("abc".center(2), "abc");
        assert_eq!("ab".ljust(4), "ab  ");
        assert_eq!("ab".rjust(4), "  ab");
        assert_eq!("héllo".rjust(5), "héllo");
        assert_eq!("42".zfill(5), "00042");
        assert_eq!("+4".zfill(4), "+004");
        assert_eq!("12345".zfill(3), "12345");
    }

    #[test]
    fn test_search() {
        assert_eq!("hello".py_find("l"), 2);
        assert_eq!("hello".py_rfind("l"), 3);
        assert_eq!("héllo".py_find("l"), 2);
        assert_eq!("hello".py_find(""), 0);
        assert_eq!("hello".count("l"), 2);
        assert_eq!("aaaa".count("aa"), 2);
        assert_eq!("abc".count(""), 4);
        assert!("hello".startswith("he"));
        assert!("hello".endswith("lo"));
    }

    #[test]
    fn test_split_and_replace() {
        assert_eq!("a,b,,c".py_split(","), vec!["a", "b", "", "c"]);
        assert_eq!("abc".py_split(""), vec!["abc"]);
        assert_eq!("  a  b ".py_split_whitespace(), vec!["a", "b"]);
        assert_eq!("aXbX".py_replace("X", "-"), "a-b-");
        assert_eq!(String::from("  x ").strip(), "x");
        assert_eq!("  x ".lstrip(), "x ");
        assert_eq!("  x ".rstrip(), "  x");
    }

    #[test]
    fn test_value_strings() {
        let value = Value::str("Hello");
        assert_eq!(value.lower(), "hello");
        assert_eq!(value.py_find("l"), 2);
        assert!(value.startswith("He"));
    }

    #[test]
    fn test_value_non_strings() {
        let value = Value::Int(42);
        assert_eq!(value.lower(), "");
        assert_eq!(value.center(4), "");
        assert_eq!(value.py_find("4"), -1);
        assert_eq!(value.count(""), 0);
        assert!(value.py_split(",").is_empty());
        assert!(!value.startswith(""));
        assert!(!value.isdigit());
    }
}
