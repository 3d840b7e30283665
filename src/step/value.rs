//! STEP parameter values.

use std::fmt;

/// A single parameter of an entity instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unset optional attribute (`$`)
    Null,
    /// Attribute re-declared as derived in a subtype (`*`)
    Derived,
    Integer(i64),
    Real(f64),
    /// Decoded string literal
    String(String),
    /// Enumeration literal without the surrounding dots (`.ELEMENT.` -> `ELEMENT`)
    Enum(String),
    /// Binary literal, kept as its hex digits
    Binary(String),
    /// Reference to another instance (`#42`)
    Ref(u64),
    List(Vec<Value>),
    /// Typed parameter such as `IFCLENGTHMEASURE(3.)`
    Typed(String, Box<Value>),
}

impl Value {
    /// Numeric value, looking through typed wrappers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Real(r) => Some(*r),
            Value::Typed(_, inner) => inner.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Typed(_, inner) => inner.as_str(),
            _ => None,
        }
    }

    pub fn as_ref_id(&self) -> Option<u64> {
        match self {
            Value::Ref(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// True for `$` and `*`.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null | Value::Derived)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Derived => "derived",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::String(_) => "string",
            Value::Enum(_) => "enumeration",
            Value::Binary(_) => "binary",
            Value::Ref(_) => "reference",
            Value::List(_) => "list",
            Value::Typed(..) => "typed",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "$"),
            Value::Derived => write!(f, "*"),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{:?}", r),
            Value::String(s) => write!(f, "'{}'", s),
            Value::Enum(e) => write!(f, ".{}.", e),
            Value::Binary(b) => write!(f, "\"{}\"", b),
            Value::Ref(id) => write!(f, "#{}", id),
            Value::List(items) => {
                write!(f, "(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, ")")
            }
            Value::Typed(name, inner) => write!(f, "{}({})", name, inner),
        }
    }
}
