//! Flat element store backing one parse.
//!
//! A parse produces a [`serde_json::Value`] tree, which is immediately
//! re-homed into an [`Arena`]: one `Vec` of typed [`Element`]s addressed by
//! index. Views never copy document data; they hold a shared handle to the
//! arena plus the id of their subtree root, and child lookups are plain
//! index hops within the same allocation.

use serde_json::Value;

/// Index of an element within its [`Arena`].
pub(crate) type NodeId = usize;

/// One parsed JSON value, tagged with its concrete storage type.
///
/// Numbers keep the width the parser assigned them: `Int64` for anything
/// representable as `i64`, `UInt64` only for integers above `i64::MAX`, and
/// `Double` for everything else. Containers store the ids of their children,
/// which live in the same arena.
#[derive(Debug)]
pub(crate) enum Element {
    Null,
    Bool(bool),
    Int64(i64),
    UInt64(u64),
    Double(f64),
    String(Box<str>),
    Array(Vec<NodeId>),
    Object(Vec<(Box<str>, NodeId)>),
}

/// Owner of every element produced by one parse.
#[derive(Debug)]
pub(crate) struct Arena {
    nodes: Vec<Element>,
    root: NodeId,
}

impl Arena {
    /// Consumes a parsed tree and re-homes it into a fresh arena.
    ///
    /// Strings move without copying. Object members keep the parser's
    /// document order.
    pub(crate) fn from_value(value: Value) -> Self {
        let mut nodes = Vec::new();
        let root = intern(&mut nodes, value);
        Self { nodes, root }
    }

    pub(crate) fn root(&self) -> NodeId {
        self.root
    }

    /// Element behind `id`.
    ///
    /// Ids are only ever minted by [`Arena::from_value`] for this arena, so
    /// the index is always in range.
    pub(crate) fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id]
    }

    /// Rebuilds the native value for the subtree rooted at `id`.
    ///
    /// This is the detached-snapshot path: nested containers materialize
    /// recursively and the result owns all of its data.
    pub(crate) fn to_value(&self, id: NodeId) -> Value {
        match self.element(id) {
            Element::Null => Value::Null,
            Element::Bool(b) => Value::Bool(*b),
            Element::Int64(i) => Value::from(*i),
            Element::UInt64(u) => Value::from(*u),
            Element::Double(d) => Value::from(*d),
            Element::String(s) => Value::String(s.to_string()),
            Element::Array(ids) => {
                Value::Array(ids.iter().map(|&child| self.to_value(child)).collect())
            }
            Element::Object(members) => {
                let mut map = serde_json::Map::with_capacity(members.len());
                for (key, child) in members {
                    map.insert(key.to_string(), self.to_value(*child));
                }
                Value::Object(map)
            }
        }
    }
}

fn intern(nodes: &mut Vec<Element>, value: Value) -> NodeId {
    let element = match value {
        Value::Null => Element::Null,
        Value::Bool(b) => Element::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Element::Int64(i)
            } else if let Some(u) = n.as_u64() {
                Element::UInt64(u)
            } else {
                // Finite by construction: the parser rejects NaN and inf.
                Element::Double(n.as_f64().unwrap_or_default())
            }
        }
        Value::String(s) => Element::String(s.into_boxed_str()),
        Value::Array(items) => {
            let ids = items.into_iter().map(|item| intern(nodes, item)).collect();
            Element::Array(ids)
        }
        Value::Object(map) => {
            let members = map
                .into_iter()
                .map(|(key, member)| (key.into_boxed_str(), intern(nodes, member)))
                .collect();
            Element::Object(members)
        }
    };
    let id = nodes.len();
    nodes.push(element);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_of(text: &str) -> Arena {
        Arena::from_value(serde_json::from_str(text).unwrap())
    }

    fn root_ids(arena: &Arena) -> &[NodeId] {
        match arena.element(arena.root()) {
            Element::Array(ids) => ids,
            other => panic!("expected array root, got {other:?}"),
        }
    }

    #[test]
    fn tags_integers_by_width() {
        let arena =
            arena_of("[1, -1, 9223372036854775807, 9223372036854775808, 18446744073709551615]");
        let ids = root_ids(&arena);
        assert!(matches!(arena.element(ids[0]), Element::Int64(1)));
        assert!(matches!(arena.element(ids[1]), Element::Int64(-1)));
        assert!(matches!(arena.element(ids[2]), Element::Int64(i64::MAX)));
        assert!(matches!(
            arena.element(ids[3]),
            Element::UInt64(9_223_372_036_854_775_808)
        ));
        assert!(matches!(arena.element(ids[4]), Element::UInt64(u64::MAX)));
    }

    #[test]
    fn tags_non_integers_as_double() {
        let arena = arena_of("[1.5, 2.0, 1e300, -0.25]");
        for &id in root_ids(&arena) {
            assert!(matches!(arena.element(id), Element::Double(_)));
        }
    }

    #[test]
    fn preserves_member_order() {
        let arena = arena_of(r#"{"z": 1, "a": 2, "m": 3}"#);
        let Element::Object(members) = arena.element(arena.root()) else {
            panic!("expected object root");
        };
        let keys: Vec<&str> = members.iter().map(|(k, _)| &**k).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }

    #[test]
    fn to_value_round_trips() {
        let text = r#"{"a": [1, 2.5, "x", null, true], "b": {"c": 18446744073709551615}}"#;
        let original: Value = serde_json::from_str(text).unwrap();
        let arena = Arena::from_value(original.clone());
        assert_eq!(arena.to_value(arena.root()), original);
    }
}
