//! JSON-Pointer resolution over arena subtrees.
//!
//! The grammar is RFC 6901: `/`-delimited segments, `~1` unescaping to `/`
//! and `~0` to `~`, and array indices written as plain digits with no sign
//! and no leading zeros. The empty pointer addresses the subtree itself and
//! `"/"` addresses the member with the empty key. A pointer without a
//! leading slash is accepted as shorthand for the rooted form, so
//! `"a/b/0"` resolves like `"/a/b/0"`.
//!
//! Failures are reported per segment: object misses (and descents into
//! scalars) yield [`Error::KeyNotFound`], array misses yield
//! [`Error::IndexOutOfBounds`] with the raw segment text.

use std::borrow::Cow;

use crate::arena::{Arena, Element, NodeId};
use crate::error::{Error, Result};

/// Walks `pointer` down from `start` and returns the id it lands on.
pub(crate) fn lookup(arena: &Arena, start: NodeId, pointer: &str) -> Result<NodeId> {
    if pointer.is_empty() {
        return Ok(start);
    }
    let rest = pointer.strip_prefix('/').unwrap_or(pointer);
    let mut current = start;
    for raw in rest.split('/') {
        current = step(arena, current, raw)?;
    }
    Ok(current)
}

fn step(arena: &Arena, node: NodeId, raw: &str) -> Result<NodeId> {
    match arena.element(node) {
        Element::Object(members) => {
            let key = unescape(raw);
            members
                .iter()
                .find(|(k, _)| **k == *key)
                .map(|(_, child)| *child)
                .ok_or_else(|| Error::KeyNotFound {
                    key: key.into_owned(),
                })
        }
        Element::Array(ids) => match parse_index(raw).filter(|&i| i < ids.len()) {
            Some(i) => Ok(ids[i]),
            None => Err(Error::IndexOutOfBounds {
                index: raw.to_string(),
                len: ids.len(),
            }),
        },
        // Scalars have no members at all, so any segment is a missing key.
        _ => Err(Error::KeyNotFound {
            key: unescape(raw).into_owned(),
        }),
    }
}

/// Undoes RFC 6901 escaping: `~1` becomes `/`, then `~0` becomes `~`.
///
/// A `~` followed by anything else is kept literally rather than rejected,
/// so malformed escapes surface as ordinary missing keys.
fn unescape(segment: &str) -> Cow<'_, str> {
    if !segment.contains('~') {
        return Cow::Borrowed(segment);
    }
    let mut out = String::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        if c != '~' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            Some(other) => {
                out.push('~');
                out.push(other);
            }
            None => out.push('~'),
        }
    }
    Cow::Owned(out)
}

/// Array indices per the pointer grammar: digits only, no sign, no leading
/// zeros except `"0"` itself.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if segment.len() > 1 && segment.starts_with('0') {
        return None;
    }
    segment.parse().ok()
}
