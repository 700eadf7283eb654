//! Runtime values produced by console evaluation.
//!
//! The formatter dispatches on a closed set of value kinds rather than on
//! dynamic type tests, so the dispatch stays exhaustive and checkable.
//! Kinds outside this set (floats, functions, handles) are encoded by the
//! evaluation binding as [`Value::Obj`] carrying a custom representation.

use serde::{Deserialize, Serialize};

/// A runtime value as seen by the formatter.
///
/// Containers own their children; a mapping is a pair vector so that
/// insertion order is structural and survives serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean
    Bool(bool),

    /// Signed integer
    Int(i64),

    /// Text string
    Text(String),

    /// Binary data
    Bytes(Vec<u8>),

    /// Ordered sequence
    Seq(Vec<Value>),

    /// Set; elements already deduplicated by the producer, kept in
    /// construction order
    Set(Vec<Value>),

    /// Key-value mapping in insertion order
    Map(Vec<(Value, Value)>),

    /// Opaque object described by [`ObjectValue`]
    Obj(Box<ObjectValue>),
}

impl Value {
    /// Get the kind name of this value.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Seq(_) => "sequence",
            Value::Set(_) => "set",
            Value::Map(_) => "mapping",
            Value::Obj(_) => "object",
        }
    }

    /// Build a set value from elements already deduplicated by the caller.
    pub fn set(elements: Vec<Value>) -> Self {
        Value::Set(elements)
    }

    /// Build a mapping value from entries in insertion order.
    pub fn map(entries: Vec<(Value, Value)>) -> Self {
        Value::Map(entries)
    }

    /// Build an opaque value from anything implementing [`Inspect`].
    pub fn from_inspect<T: Inspect + ?Sized>(value: &T) -> Self {
        Value::Obj(Box::new(ObjectValue::from_inspect(value)))
    }

    /// Get as boolean if this is a boolean value.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as integer if this is an integer value.
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as bytes if this is a binary value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Value::Seq(elements)
    }
}

impl From<ObjectValue> for Value {
    fn from(obj: ObjectValue) -> Self {
        Value::Obj(Box::new(obj))
    }
}

/// Description of an opaque object: its type name, an optional custom
/// textual representation, and an optional attribute listing.
///
/// `attrs: None` means the binding could not enumerate attributes; the
/// pretty renderer then falls back to [`ObjectValue::default_repr`].
/// Attribute names starting with `_` are treated as private and skipped
/// when pretty-printing. Listings keep the binding's order; the pretty
/// renderer sorts by name itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectValue {
    /// Name of the originating type.
    pub type_name: String,

    /// Custom textual representation, if the originating type defines one.
    pub repr: Option<String>,

    /// Attribute listing; `None` when enumeration is unavailable.
    pub attrs: Option<Vec<(String, Value)>>,
}

impl ObjectValue {
    /// Create an object with an empty attribute listing.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            repr: None,
            attrs: Some(Vec::new()),
        }
    }

    /// Create an object whose attributes cannot be enumerated.
    pub fn opaque(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            repr: None,
            attrs: None,
        }
    }

    /// Build from anything implementing [`Inspect`].
    pub fn from_inspect<T: Inspect + ?Sized>(value: &T) -> Self {
        Self {
            type_name: value.type_name().to_string(),
            repr: value.repr(),
            attrs: Some(value.attributes()),
        }
    }

    /// Set the custom textual representation.
    #[must_use]
    pub fn with_repr(mut self, repr: impl Into<String>) -> Self {
        self.repr = Some(repr.into());
        self
    }

    /// Append an attribute.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs
            .get_or_insert_with(Vec::new)
            .push((name.into(), value.into()));
        self
    }

    /// Whether the originating type defines its own representation.
    pub const fn has_custom_repr(&self) -> bool {
        self.repr.is_some()
    }

    /// The default textual representation: the custom one if present,
    /// otherwise the identity form `<TypeName object>`.
    pub fn default_repr(&self) -> String {
        match &self.repr {
            Some(repr) => repr.clone(),
            None => format!("<{} object>", self.type_name),
        }
    }
}

/// Capability for turning a native value into an opaque [`Value`].
///
/// Bindings list whatever they consider data attributes; callables never
/// appear because they are not values here. Returning an empty listing
/// is fine and renders as a bare type header.
pub trait Inspect {
    /// Name of the concrete type.
    fn type_name(&self) -> &str;

    /// Custom textual representation, if the type defines one.
    fn repr(&self) -> Option<String> {
        None
    }

    /// Attributes as `(name, value)` pairs, in declaration order.
    fn attributes(&self) -> Vec<(String, Value)>;
}
