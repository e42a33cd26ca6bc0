//! Lazy object and array views, and the resolved element type.
//!
//! Views are cheap handles: a shared reference to the parse's arena plus
//! the id of one container subtree. Nothing is materialized until asked
//! for. Member and element lookups resolve to [`Resolved`], which carries
//! scalars by value and containers as further views into the same arena.
//!
//! Cloning a view (or resolving a nested container) adds another handle on
//! the arena, and every outstanding handle keeps the owning
//! [`Document`](crate::Document) from reparsing.

use std::fmt;
use std::rc::Rc;

use serde_json::{Map, Value};

use crate::arena::{Arena, Element, NodeId};
use crate::compare::{element_eq, int_uint_eq};
use crate::error::{Error, Result};
use crate::{pointer, search};

/// A resolved element: scalars by value, containers as lazy views.
///
/// This is what every lookup returns. Scalar variants own plain Rust
/// values (strings are copied out of the document); `Array` and `Object`
/// stay lazy and keep the underlying parse alive.
///
/// Equality between `Resolved` values is structural and tag-strict, with
/// the same rules as view equality: the two integer widths compare by
/// exact value, floats never equal integers, and object members must match
/// in document order.
#[derive(Clone, Debug)]
pub enum Resolved {
    /// JSON `null`.
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer representable as `i64`.
    Int64(i64),
    /// An integer above `i64::MAX`.
    UInt64(u64),
    /// A double-precision number.
    Double(f64),
    /// A string, copied out of the document.
    String(String),
    /// A lazy view over an array subtree.
    Array(ArrayView),
    /// A lazy view over an object subtree.
    Object(ObjectView),
}

impl Resolved {
    /// Returns `true` if this is JSON `null`.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The boolean, if this is [`Resolved::Bool`].
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The integer, if this is [`Resolved::Int64`].
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int64(i) => Some(*i),
            _ => None,
        }
    }

    /// The integer, if this is [`Resolved::UInt64`].
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::UInt64(u) => Some(*u),
            _ => None,
        }
    }

    /// The number, if this is [`Resolved::Double`].
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Double(d) => Some(*d),
            _ => None,
        }
    }

    /// The string, if this is [`Resolved::String`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The view, if this is [`Resolved::Array`].
    #[must_use]
    pub fn as_array(&self) -> Option<&ArrayView> {
        match self {
            Self::Array(view) => Some(view),
            _ => None,
        }
    }

    /// The view, if this is [`Resolved::Object`].
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectView> {
        match self {
            Self::Object(view) => Some(view),
            _ => None,
        }
    }
}

impl PartialEq for Resolved {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int64(a), Self::Int64(b)) => a == b,
            (Self::UInt64(a), Self::UInt64(b)) => a == b,
            (Self::Int64(a), Self::UInt64(b)) | (Self::UInt64(b), Self::Int64(a)) => {
                int_uint_eq(*a, *b)
            }
            (Self::Double(a), Self::Double(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

/// Converts the element behind `id` into its outward-facing form.
pub(crate) fn resolve(arena: &Rc<Arena>, id: NodeId) -> Resolved {
    match arena.element(id) {
        Element::Null => Resolved::Null,
        Element::Bool(b) => Resolved::Bool(*b),
        Element::Int64(i) => Resolved::Int64(*i),
        Element::UInt64(u) => Resolved::UInt64(*u),
        Element::Double(d) => Resolved::Double(*d),
        Element::String(s) => Resolved::String(s.to_string()),
        Element::Array(_) => Resolved::Array(ArrayView {
            arena: Rc::clone(arena),
            node: id,
        }),
        Element::Object(_) => Resolved::Object(ObjectView {
            arena: Rc::clone(arena),
            node: id,
        }),
    }
}

/// Read-only view over one object subtree.
///
/// Members are enumerated in document order, the order they appear in the
/// source text. Lookups by key return the first member with that key.
///
/// Equality compares structure: same keys, same order, equal values,
/// regardless of which document either view came from.
#[derive(Clone)]
pub struct ObjectView {
    arena: Rc<Arena>,
    node: NodeId,
}

impl ObjectView {
    fn members(&self) -> &[(Box<str>, NodeId)] {
        match self.arena.element(self.node) {
            Element::Object(members) => members,
            _ => unreachable!("object views always point at object elements"),
        }
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members().len()
    }

    /// Returns `true` if the object has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members().is_empty()
    }

    /// Returns `true` if any member has this key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.members().iter().any(|(k, _)| &**k == key)
    }

    /// Looks up a member by key.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] if no member has this key.
    ///
    /// # Examples
    ///
    /// ```
    /// let root = jsonlens::parse(r#"{"width": 800}"#)?;
    /// let obj = root.as_object().unwrap();
    /// assert_eq!(obj.get("width")?.as_i64(), Some(800));
    /// assert!(obj.get("height").is_err());
    /// # Ok::<(), jsonlens::Error>(())
    /// ```
    pub fn get(&self, key: &str) -> Result<Resolved> {
        self.members()
            .iter()
            .find(|(k, _)| &**k == key)
            .map(|(_, child)| resolve(&self.arena, *child))
            .ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Resolves a JSON-Pointer path against this subtree.
    ///
    /// The empty pointer resolves to this object. Pointers without a
    /// leading slash are accepted as shorthand for the rooted form.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] for the first failing object segment,
    /// [`Error::IndexOutOfBounds`] for the first failing array segment.
    ///
    /// # Examples
    ///
    /// ```
    /// let root = jsonlens::parse(r#"{"a": {"b": [10, 20]}}"#)?;
    /// let obj = root.as_object().unwrap();
    /// assert_eq!(obj.pointer("/a/b/1")?.as_i64(), Some(20));
    /// # Ok::<(), jsonlens::Error>(())
    /// ```
    pub fn pointer(&self, pointer: &str) -> Result<Resolved> {
        let target = pointer::lookup(&self.arena, self.node, pointer)?;
        Ok(resolve(&self.arena, target))
    }

    /// Iterates member keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members().iter().map(|(k, _)| &**k)
    }

    /// Iterates resolved member values in document order.
    pub fn values(&self) -> impl Iterator<Item = Resolved> {
        self.members()
            .iter()
            .map(|(_, child)| resolve(&self.arena, *child))
    }

    /// Iterates `(key, value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Resolved)> {
        self.members()
            .iter()
            .map(|(k, child)| (&**k, resolve(&self.arena, *child)))
    }

    /// Materializes a detached copy of this object.
    ///
    /// Nested containers convert recursively, so the result owns all of
    /// its data and holds no reference to the parse.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let mut map = Map::with_capacity(self.len());
        for (key, child) in self.members() {
            map.insert(key.to_string(), self.arena.to_value(*child));
        }
        map
    }
}

impl PartialEq for ObjectView {
    fn eq(&self, other: &Self) -> bool {
        element_eq(&self.arena, self.node, &other.arena, other.node)
    }
}

impl fmt::Debug for ObjectView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectView")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Read-only view over one array subtree.
///
/// Elements are addressed by position, with negative indices counting
/// back from the end. Equality compares structure element by element,
/// regardless of which document either view came from.
#[derive(Clone)]
pub struct ArrayView {
    arena: Rc<Arena>,
    node: NodeId,
}

impl ArrayView {
    fn ids(&self) -> &[NodeId] {
        match self.arena.element(self.node) {
            Element::Array(ids) => ids,
            _ => unreachable!("array views always point at array elements"),
        }
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids().len()
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }

    /// Looks up an element by position.
    ///
    /// Negative indices count back from the end, so `-1` is the last
    /// element of a non-empty array.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] if the index falls outside the array
    /// even after wraparound. The error reports the index as originally
    /// requested, not the wrapped form.
    ///
    /// # Examples
    ///
    /// ```
    /// let root = jsonlens::parse("[10, 20, 30]")?;
    /// let arr = root.as_array().unwrap();
    /// assert_eq!(arr.get(0)?.as_i64(), Some(10));
    /// assert_eq!(arr.get(-1)?.as_i64(), Some(30));
    /// assert!(arr.get(3).is_err());
    /// # Ok::<(), jsonlens::Error>(())
    /// ```
    pub fn get(&self, index: isize) -> Result<Resolved> {
        let ids = self.ids();
        let wrapped = if index >= 0 {
            usize::try_from(index).ok().filter(|&i| i < ids.len())
        } else {
            index
                .checked_add_unsigned(ids.len())
                .and_then(|i| usize::try_from(i).ok())
        };
        match wrapped {
            Some(i) => Ok(resolve(&self.arena, ids[i])),
            None => Err(Error::IndexOutOfBounds {
                index: index.to_string(),
                len: ids.len(),
            }),
        }
    }

    /// Resolves a JSON-Pointer path against this subtree.
    ///
    /// The empty pointer resolves to this array. Pointers without a
    /// leading slash are accepted as shorthand for the rooted form, so
    /// `"0"` addresses the first element.
    ///
    /// # Errors
    ///
    /// [`Error::KeyNotFound`] for the first failing object segment,
    /// [`Error::IndexOutOfBounds`] for the first failing array segment.
    pub fn pointer(&self, pointer: &str) -> Result<Resolved> {
        let target = pointer::lookup(&self.arena, self.node, pointer)?;
        Ok(resolve(&self.arena, target))
    }

    /// Iterates resolved elements in document order.
    pub fn iter(&self) -> impl Iterator<Item = Resolved> {
        self.ids().iter().map(|&id| resolve(&self.arena, id))
    }

    /// Materializes a detached copy of this array.
    ///
    /// Nested containers convert recursively, so the result owns all of
    /// its data and holds no reference to the parse.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.ids().iter().map(|&id| self.arena.to_value(id)).collect()
    }

    /// Counts elements equal to `needle`.
    ///
    /// Accepts anything convertible to a [`Value`]: scalars, strings, or
    /// whole container values for structural matches. Comparison follows
    /// the same tag-strict rules as view equality.
    ///
    /// # Examples
    ///
    /// ```
    /// let root = jsonlens::parse(r#"[1, 2, "x", 2, null]"#)?;
    /// let arr = root.as_array().unwrap();
    /// assert_eq!(arr.count(2), 2);
    /// assert_eq!(arr.count("x"), 1);
    /// # Ok::<(), jsonlens::Error>(())
    /// ```
    #[must_use]
    pub fn count<T: Into<Value>>(&self, needle: T) -> usize {
        search::count(&self.arena, self.ids(), &needle.into())
    }

    /// Position of the first element equal to `needle`.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element matches.
    ///
    /// # Examples
    ///
    /// ```
    /// let root = jsonlens::parse(r#"[1, 2, "x", 2, null]"#)?;
    /// let arr = root.as_array().unwrap();
    /// assert_eq!(arr.index_of(2)?, 1);
    /// assert_eq!(arr.index_of(jsonlens::Value::Null)?, 4);
    /// assert!(arr.index_of(99).is_err());
    /// # Ok::<(), jsonlens::Error>(())
    /// ```
    pub fn index_of<T: Into<Value>>(&self, needle: T) -> Result<usize> {
        search::index_of(&self.arena, self.ids(), &needle.into()).ok_or(Error::NotFound)
    }
}

impl PartialEq for ArrayView {
    fn eq(&self, other: &Self) -> bool {
        element_eq(&self.arena, self.node, &other.arena, other.node)
    }
}

impl fmt::Debug for ArrayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayView")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
