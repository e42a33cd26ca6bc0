//! Structural equality between parsed subtrees.
//!
//! Two entry points: [`element_eq`] compares elements (possibly from
//! different arenas) and backs `PartialEq` on the views, while
//! [`matches_needle`] compares an element against a caller-supplied
//! [`serde_json::Value`] and backs the generic search loop. Both are
//! tag-strict: `Null` equals only `Null`, floats never equal integers, and
//! the two integer widths compare by exact value. Objects compare
//! member-by-member in document order, so two objects with the same members
//! in a different order are unequal.

use serde_json::Value;

use crate::arena::{Arena, Element, NodeId};

/// Deep equality of two subtrees.
pub(crate) fn element_eq(a: &Arena, a_id: NodeId, b: &Arena, b_id: NodeId) -> bool {
    match (a.element(a_id), b.element(b_id)) {
        (Element::Null, Element::Null) => true,
        (Element::Bool(x), Element::Bool(y)) => x == y,
        (Element::Int64(x), Element::Int64(y)) => x == y,
        (Element::UInt64(x), Element::UInt64(y)) => x == y,
        (Element::Int64(x), Element::UInt64(y)) | (Element::UInt64(y), Element::Int64(x)) => {
            int_uint_eq(*x, *y)
        }
        (Element::Double(x), Element::Double(y)) => x == y,
        (Element::String(x), Element::String(y)) => x == y,
        (Element::Array(xs), Element::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(&x, &y)| element_eq(a, x, b, y))
        }
        (Element::Object(xs), Element::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .zip(ys)
                    .all(|((xk, xv), (yk, yv))| xk == yk && element_eq(a, *xv, b, *yv))
        }
        _ => false,
    }
}

/// Exact mixed-width integer comparison, with no narrowing.
pub(crate) fn int_uint_eq(i: i64, u: u64) -> bool {
    u64::try_from(i).is_ok_and(|v| v == u)
}

/// Equality of a subtree against a caller-supplied needle.
///
/// Mirrors [`element_eq`]'s strictness exactly, so the generic search loop
/// and the specialized ones can never disagree: integer needles compare by
/// exact value against either integer tag, float needles match only
/// `Double` elements, and object needles compare order-sensitively.
pub(crate) fn matches_needle(arena: &Arena, id: NodeId, needle: &Value) -> bool {
    match arena.element(id) {
        Element::Null => needle.is_null(),
        Element::Bool(b) => needle.as_bool() == Some(*b),
        Element::Int64(i) => needle.as_i64() == Some(*i),
        Element::UInt64(u) => needle.as_u64() == Some(*u),
        Element::Double(d) => needle.is_f64() && needle.as_f64() == Some(*d),
        Element::String(s) => needle.as_str() == Some(&**s),
        Element::Array(ids) => needle.as_array().is_some_and(|items| {
            ids.len() == items.len()
                && ids
                    .iter()
                    .zip(items)
                    .all(|(&child, item)| matches_needle(arena, child, item))
        }),
        Element::Object(members) => needle.as_object().is_some_and(|map| {
            members.len() == map.len()
                && members
                    .iter()
                    .zip(map)
                    .all(|((key, child), (needle_key, needle_value))| {
                        &**key == needle_key.as_str()
                            && matches_needle(arena, *child, needle_value)
                    })
        }),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn arena_of(text: &str) -> Arena {
        Arena::from_value(serde_json::from_str(text).unwrap())
    }

    fn eq_roots(a: &str, b: &str) -> bool {
        let (a, b) = (arena_of(a), arena_of(b));
        element_eq(&a, a.root(), &b, b.root())
    }

    #[test]
    fn null_only_equals_null() {
        assert!(eq_roots("null", "null"));
        assert!(!eq_roots("null", "0"));
        assert!(!eq_roots("null", "false"));
        assert!(!eq_roots("[null]", "[0]"));
    }

    #[test]
    fn numbers_compare_tag_strict() {
        assert!(eq_roots("2", "2"));
        assert!(eq_roots("2.5", "2.5"));
        assert!(!eq_roots("2", "2.0"));
        assert!(!eq_roots("-1", "18446744073709551615"));
    }

    #[test]
    fn object_equality_is_order_sensitive() {
        assert!(eq_roots(r#"{"a": 1, "b": 2}"#, r#"{"a": 1, "b": 2}"#));
        assert!(!eq_roots(r#"{"a": 1, "b": 2}"#, r#"{"b": 2, "a": 1}"#));
    }

    #[test]
    fn arrays_compare_positionally() {
        assert!(eq_roots("[1, [2, 3]]", "[1, [2, 3]]"));
        assert!(!eq_roots("[1, 2]", "[2, 1]"));
        assert!(!eq_roots("[1, 2]", "[1, 2, 3]"));
    }

    #[test]
    fn needle_matching_mirrors_element_equality() {
        let arena = arena_of(r#"[2, 2.0, "x", [1, 2], {"a": 1}]"#);
        let Element::Array(ids) = arena.element(arena.root()) else {
            panic!("expected array root");
        };
        assert!(matches_needle(&arena, ids[0], &json!(2)));
        assert!(!matches_needle(&arena, ids[0], &json!(2.0)));
        assert!(matches_needle(&arena, ids[1], &json!(2.0)));
        assert!(!matches_needle(&arena, ids[1], &json!(2)));
        assert!(matches_needle(&arena, ids[2], &json!("x")));
        assert!(matches_needle(&arena, ids[3], &json!([1, 2])));
        assert!(!matches_needle(&arena, ids[3], &json!([2, 1])));
        assert!(matches_needle(&arena, ids[4], &json!({"a": 1})));
        assert!(!matches_needle(&arena, ids[4], &json!({"a": 2})));
    }
}
