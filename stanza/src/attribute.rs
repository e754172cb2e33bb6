use std::marker::PhantomData;

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;

use crate::Context;

/// Represents a typed attribute value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum AttributeValue<'bump> {
    /// A string value.
    String(BumpString<'bump>),
    /// An integer value.
    Int(i128),
    /// A floating-point value.
    Float(f64),
    /// A boolean value.
    Bool(bool),
}

impl<'bump> AttributeValue<'bump> {
    /// Returns the value as a string slice if this is a String variant.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the integer value if this is an Int variant.
    pub fn as_int(&self) -> Option<i128> {
        match self {
            AttributeValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the float value if this is a Float variant.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            AttributeValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the boolean value if this is a Bool variant.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AttributeValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// A key-value pair as stored on an element, with the context marker erased.
///
/// Duplicate keys are preserved in call order here; the renderer resolves them
/// last-write-wins when the element is emitted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AttributeEntry<'bump> {
    /// The key of the attribute.
    pub key: BumpString<'bump>,
    /// The value of the attribute. `None` renders as a bare boolean attribute.
    pub value: Option<AttributeValue<'bump>>,
}

/// An attribute tagged with the context it is valid in.
///
/// The marker is purely compile-time metadata: it gates which attribute
/// constructors are callable for a given element and is erased as soon as the
/// attribute is attached to a node. See [`crate::html`] for capability-gated
/// constructors such as `class` and `href`.
pub struct Attribute<'bump, C> {
    pub(crate) entry: AttributeEntry<'bump>,
    marker: PhantomData<C>,
}

impl<C> std::fmt::Debug for Attribute<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.entry.fmt(f)
    }
}

impl<'bump, C> Clone for Attribute<'bump, C> {
    fn clone(&self) -> Self {
        Attribute {
            entry: self.entry.clone(),
            marker: PhantomData,
        }
    }
}

impl<C> PartialEq for Attribute<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.entry == other.entry
    }
}

#[cfg(feature = "serde")]
impl<C> serde::Serialize for Attribute<'_, C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entry.serialize(serializer)
    }
}

impl<'bump, C: Context> Attribute<'bump, C> {
    pub(crate) fn from_entry(entry: AttributeEntry<'bump>) -> Self {
        Attribute {
            entry,
            marker: PhantomData,
        }
    }

    /// Create a new attribute with a string key and value.
    pub fn new(bump: &'bump Bump, key: &str, value: &str) -> Self {
        Self::from_entry(AttributeEntry {
            key: BumpString::from_str_in(key, bump),
            value: Some(AttributeValue::String(BumpString::from_str_in(value, bump))),
        })
    }

    /// Create a new attribute with an integer value.
    pub fn new_int(bump: &'bump Bump, key: &str, value: i128) -> Self {
        Self::from_entry(AttributeEntry {
            key: BumpString::from_str_in(key, bump),
            value: Some(AttributeValue::Int(value)),
        })
    }

    /// Create a new attribute with a float value.
    pub fn new_float(bump: &'bump Bump, key: &str, value: f64) -> Self {
        Self::from_entry(AttributeEntry {
            key: BumpString::from_str_in(key, bump),
            value: Some(AttributeValue::Float(value)),
        })
    }

    /// Create a new attribute with a boolean value.
    pub fn new_bool(bump: &'bump Bump, key: &str, value: bool) -> Self {
        Self::from_entry(AttributeEntry {
            key: BumpString::from_str_in(key, bump),
            value: Some(AttributeValue::Bool(value)),
        })
    }

    /// Create a boolean attribute (no value).
    pub fn boolean(bump: &'bump Bump, key: &str) -> Self {
        Self::from_entry(AttributeEntry {
            key: BumpString::from_str_in(key, bump),
            value: None,
        })
    }

    /// The key of the attribute.
    pub fn key(&self) -> &str {
        self.entry.key.as_str()
    }

    /// The value of the attribute, if any.
    pub fn value(&self) -> Option<&AttributeValue<'bump>> {
        self.entry.value.as_ref()
    }
}

/// Create an attribute in any context from a value that implements
/// [`IntoAttribute`].
///
/// This is the escape hatch for attributes the typed vocabulary does not
/// cover (`data-*`, `charset`, `rel`, ...); capability-gated constructors
/// should be preferred where they exist.
pub fn attr<'bump, C: Context>(
    bump: &'bump Bump,
    value: impl IntoAttribute<'bump>,
) -> Attribute<'bump, C> {
    Attribute::from_entry(value.into_entry(bump))
}

/// Trait for types that can be converted into an attribute entry with a bump
/// allocator.
pub trait IntoAttribute<'bump> {
    /// Convert this value into an attribute entry using the given bump allocator.
    fn into_entry(self, bump: &'bump Bump) -> AttributeEntry<'bump>;
}
impl<'bump> IntoAttribute<'bump> for AttributeEntry<'bump> {
    fn into_entry(self, _bump: &'bump Bump) -> AttributeEntry<'bump> {
        self
    }
}
impl<'bump> IntoAttribute<'bump> for &str {
    fn into_entry(self, bump: &'bump Bump) -> AttributeEntry<'bump> {
        AttributeEntry {
            key: BumpString::from_str_in(self, bump),
            value: None,
        }
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, &str) {
    fn into_entry(self, bump: &'bump Bump) -> AttributeEntry<'bump> {
        AttributeEntry {
            key: BumpString::from_str_in(self.0, bump),
            value: Some(AttributeValue::String(BumpString::from_str_in(self.1, bump))),
        }
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, String) {
    fn into_entry(self, bump: &'bump Bump) -> AttributeEntry<'bump> {
        (self.0, self.1.as_str()).into_entry(bump)
    }
}
impl<'bump> IntoAttribute<'bump> for (String, &str) {
    fn into_entry(self, bump: &'bump Bump) -> AttributeEntry<'bump> {
        (self.0.as_str(), self.1).into_entry(bump)
    }
}
impl<'bump> IntoAttribute<'bump> for (String, String) {
    fn into_entry(self, bump: &'bump Bump) -> AttributeEntry<'bump> {
        (self.0.as_str(), self.1.as_str()).into_entry(bump)
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, i128) {
    fn into_entry(self, bump: &'bump Bump) -> AttributeEntry<'bump> {
        AttributeEntry {
            key: BumpString::from_str_in(self.0, bump),
            value: Some(AttributeValue::Int(self.1)),
        }
    }
}
impl<'bump> IntoAttribute<'bump> for (&str, bool) {
    fn into_entry(self, bump: &'bump Bump) -> AttributeEntry<'bump> {
        AttributeEntry {
            key: BumpString::from_str_in(self.0, bump),
            value: Some(AttributeValue::Bool(self.1)),
        }
    }
}
