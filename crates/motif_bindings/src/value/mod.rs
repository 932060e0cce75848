//! Values stored in a binding environment.
//!
//! A binding slot holds one `Value`, a closed union over the kinds a pattern
//! can produce. Each pattern is typed by a Rust type implementing
//! `ValueType`; reading a slot through a pattern checks the slot's kind
//! against that type, which is what separates an unbound variable from a
//! wrongly-typed one.

use std::fmt;

/// A concrete bound value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Value {
    /// Text.
    Str(String),
    /// Signed integer.
    Int(i64),
    /// Boolean.
    Bool(bool),
}

/// Kind tag of a `Value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Str,
    Int,
    Bool,
}

impl ValueKind {
    /// Short name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Str => "str",
            ValueKind::Int => "int",
            ValueKind::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Create a string value.
    pub fn string(text: impl Into<String>) -> Self {
        Value::Str(text.into())
    }

    /// The kind tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Str(_) => ValueKind::Str,
            Value::Int(_) => ValueKind::Int,
            Value::Bool(_) => ValueKind::Bool,
        }
    }

    /// Name of this value's kind.
    pub fn type_name(&self) -> &'static str {
        self.kind().name()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(text) => write!(f, "{text:?}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Str(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Str(text.to_owned())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A Rust type that a pattern can produce.
///
/// Ties the type to its `ValueKind` and converts between the type and a
/// binding slot. Comparison against a slot is structural: a slot of another
/// kind is never equal.
pub trait ValueType: Clone + PartialEq + fmt::Debug {
    /// Kind of value this type is stored as.
    const KIND: ValueKind;

    /// Convert into a binding slot value.
    fn into_value(self) -> Value;

    /// Read a slot as this type, or `None` if the slot holds another kind.
    fn from_value(value: &Value) -> Option<Self>;

    /// Whether `value` holds exactly `self`.
    fn matches_value(&self, value: &Value) -> bool;

    /// Borrow as text, for types that are text.
    fn as_text(&self) -> Option<&str> {
        None
    }

    /// Build from owned text, for types that are text.
    fn from_text(_text: String) -> Option<Self> {
        None
    }
}

impl ValueType for String {
    const KIND: ValueKind = ValueKind::Str;

    fn into_value(self) -> Value {
        Value::Str(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn matches_value(&self, value: &Value) -> bool {
        value.as_str() == Some(self.as_str())
    }

    fn as_text(&self) -> Option<&str> {
        Some(self)
    }

    fn from_text(text: String) -> Option<Self> {
        Some(text)
    }
}

impl ValueType for i64 {
    const KIND: ValueKind = ValueKind::Int;

    fn into_value(self) -> Value {
        Value::Int(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_int()
    }

    fn matches_value(&self, value: &Value) -> bool {
        value.as_int() == Some(*self)
    }
}

impl ValueType for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn into_value(self) -> Value {
        Value::Bool(self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn matches_value(&self, value: &Value) -> bool {
        value.as_bool() == Some(*self)
    }
}
