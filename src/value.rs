use crate::format::shortest;
use std::fmt;

/// A positional argument passed through to the formatter and the observer.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(String),
}

impl Value {
    /// Name used when rendering placeholders such as `%!d(string=x)`.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float64",
            Value::Char(_) => "char",
            Value::Str(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Uint(u) => write!(f, "{u}"),
            Value::Float(x) => f.write_str(&shortest(*x)),
            Value::Char(c) => write!(f, "{c}"),
            Value::Str(s) => f.write_str(s),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident as $inner:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value as $inner)
                }
            }
        )+
    };
}

impl_from!(Int as i64: i8, i16, i32, i64, isize);
impl_from!(Uint as u64: u8, u16, u32, u64, usize);
impl_from!(Float as f64: f32, f64);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Str(value.clone())
    }
}

/// Builds a `Vec<Value>` from heterogeneous expressions.
///
/// ```
/// let args = tierlog::vargs![5, "five", 5.0];
/// assert_eq!(args.len(), 3);
/// ```
#[macro_export]
macro_rules! vargs {
    ($($arg:expr),* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::Value> = ::std::vec![$($crate::Value::from($arg)),*];
        args
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions_pick_variant() {
        assert_eq!(Value::from(-3i32), Value::Int(-3));
        assert_eq!(Value::from(3usize), Value::Uint(3));
        assert_eq!(Value::from(1.5f32), Value::Float(1.5));
        assert_eq!(Value::from('x'), Value::Char('x'));
        assert_eq!(Value::from("s"), Value::Str("s".to_string()));
        assert_eq!(Value::from(true), Value::Bool(true));
    }

    #[test]
    fn vargs_macro_preserves_order() {
        let args = vargs![1, "two", 3.0, false];
        assert_eq!(
            args,
            vec![
                Value::Int(1),
                Value::Str("two".to_string()),
                Value::Float(3.0),
                Value::Bool(false),
            ]
        );
        assert!(vargs![].is_empty());
    }

    #[test]
    fn display_renders_plain_value() {
        assert_eq!(Value::Float(2.0).to_string(), "2");
        assert_eq!(Value::Float(1e21).to_string(), "1e+21");
        assert_eq!(Value::Float(1.5).type_name(), "float64");
        assert_eq!(Value::Str("hi".to_string()).to_string(), "hi");
        assert_eq!(Value::Int(-7).to_string(), "-7");
    }
}
