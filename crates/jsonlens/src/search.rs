//! Linear search over array elements, specialized by scalar tag.
//!
//! Both operations first try a tight loop specialized to the tag of the
//! array's first element, converting the needle once up front. The loop
//! stays valid only while elements keep that tag; the first foreign tag
//! abandons it and the whole array is rescanned with the generic
//! structural comparison instead. Because [`matches_needle`] applies the
//! same strictness as the specialized comparisons, the two paths always
//! agree on the result.
//!
//! `Null` needles skip specialization and use a dedicated tag scan, since
//! `Null` carries no scalar to convert.

use serde_json::Value;

use crate::arena::{Arena, Element, NodeId};
use crate::compare::matches_needle;

/// Outcome of a specialized scan.
enum Scan<T> {
    /// The scan ran to its answer without meeting a foreign tag.
    Complete(T),
    /// Foreign tag or non-converting needle; redo the scan generically.
    Fallback,
}

/// Number of elements equal to `needle`, over the whole array.
pub(crate) fn count(arena: &Arena, ids: &[NodeId], needle: &Value) -> usize {
    if ids.is_empty() {
        return 0;
    }
    if needle.is_null() {
        return ids
            .iter()
            .filter(|&&id| matches!(arena.element(id), Element::Null))
            .count();
    }
    match specialized_count(arena, ids, needle) {
        Scan::Complete(n) => n,
        Scan::Fallback => ids
            .iter()
            .filter(|&&id| matches_needle(arena, id, needle))
            .count(),
    }
}

/// Position of the first element equal to `needle`, in document order.
pub(crate) fn index_of(arena: &Arena, ids: &[NodeId], needle: &Value) -> Option<usize> {
    if ids.is_empty() {
        return None;
    }
    if needle.is_null() {
        return ids
            .iter()
            .position(|&id| matches!(arena.element(id), Element::Null));
    }
    match specialized_index(arena, ids, needle) {
        Scan::Complete(found) => found,
        Scan::Fallback => ids.iter().position(|&id| matches_needle(arena, id, needle)),
    }
}

fn specialized_count(arena: &Arena, ids: &[NodeId], needle: &Value) -> Scan<usize> {
    match arena.element(ids[0]) {
        Element::Bool(_) => match needle.as_bool() {
            Some(want) => typed_count(arena, ids, want, as_bool),
            None => Scan::Fallback,
        },
        Element::Int64(_) => match needle.as_i64() {
            Some(want) => typed_count(arena, ids, want, as_i64),
            None => Scan::Fallback,
        },
        Element::UInt64(_) => match needle.as_u64() {
            Some(want) => typed_count(arena, ids, want, as_u64),
            None => Scan::Fallback,
        },
        Element::Double(_) => match double_needle(needle) {
            Some(want) => typed_count(arena, ids, want, as_double),
            None => Scan::Fallback,
        },
        Element::String(_) => match needle.as_str() {
            Some(want) => typed_count(arena, ids, want, as_str),
            None => Scan::Fallback,
        },
        // Containers and null get no specialized loop.
        _ => Scan::Fallback,
    }
}

fn specialized_index(arena: &Arena, ids: &[NodeId], needle: &Value) -> Scan<Option<usize>> {
    match arena.element(ids[0]) {
        Element::Bool(_) => match needle.as_bool() {
            Some(want) => typed_index(arena, ids, want, as_bool),
            None => Scan::Fallback,
        },
        Element::Int64(_) => match needle.as_i64() {
            Some(want) => typed_index(arena, ids, want, as_i64),
            None => Scan::Fallback,
        },
        Element::UInt64(_) => match needle.as_u64() {
            Some(want) => typed_index(arena, ids, want, as_u64),
            None => Scan::Fallback,
        },
        Element::Double(_) => match double_needle(needle) {
            Some(want) => typed_index(arena, ids, want, as_double),
            None => Scan::Fallback,
        },
        Element::String(_) => match needle.as_str() {
            Some(want) => typed_index(arena, ids, want, as_str),
            None => Scan::Fallback,
        },
        _ => Scan::Fallback,
    }
}

fn typed_count<'a, T: PartialEq + 'a>(
    arena: &'a Arena,
    ids: &[NodeId],
    needle: T,
    extract: impl Fn(&'a Element) -> Option<T>,
) -> Scan<usize> {
    let mut matched = 0;
    for &id in ids {
        match extract(arena.element(id)) {
            Some(value) if value == needle => matched += 1,
            Some(_) => {}
            None => return Scan::Fallback,
        }
    }
    Scan::Complete(matched)
}

fn typed_index<'a, T: PartialEq + 'a>(
    arena: &'a Arena,
    ids: &[NodeId],
    needle: T,
    extract: impl Fn(&'a Element) -> Option<T>,
) -> Scan<Option<usize>> {
    for (position, &id) in ids.iter().enumerate() {
        match extract(arena.element(id)) {
            Some(value) if value == needle => return Scan::Complete(Some(position)),
            Some(_) => {}
            None => return Scan::Fallback,
        }
    }
    Scan::Complete(None)
}

/// Float needles must actually be floats; integer needles never match a
/// `Double` element.
fn double_needle(needle: &Value) -> Option<f64> {
    if needle.is_f64() { needle.as_f64() } else { None }
}

fn as_bool(element: &Element) -> Option<bool> {
    match element {
        Element::Bool(b) => Some(*b),
        _ => None,
    }
}

fn as_i64(element: &Element) -> Option<i64> {
    match element {
        Element::Int64(i) => Some(*i),
        _ => None,
    }
}

fn as_u64(element: &Element) -> Option<u64> {
    match element {
        Element::UInt64(u) => Some(*u),
        _ => None,
    }
}

fn as_double(element: &Element) -> Option<f64> {
    match element {
        Element::Double(d) => Some(*d),
        _ => None,
    }
}

fn as_str(element: &Element) -> Option<&str> {
    match element {
        Element::String(s) => Some(s),
        _ => None,
    }
}
