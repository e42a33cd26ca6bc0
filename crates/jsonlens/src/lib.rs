//! Navigable, read-only views over a single parsed JSON document.
//!
//! A [`Document`] owns one parse at a time. Parsing returns the root as a
//! [`Resolved`] value: scalars come back as plain Rust values, containers
//! come back as [`ObjectView`] and [`ArrayView`] handles that read
//! straight out of the parsed tree without materializing anything.
//! Navigation stays lazy from there: member lookups, positional and
//! negative indexing, and JSON-Pointer paths all resolve to further
//! `Resolved` values, only converting to owned maps and vectors when
//! explicitly asked ([`ObjectView::to_map`], [`ArrayView::to_vec`]).
//!
//! Views borrow nothing; they share ownership of the parse. That makes
//! them cheap to clone and free to outlive their document, but it also
//! means a document will refuse to reparse while any view from the
//! current parse is alive, reporting [`Error::ReparseWhileLive`] instead
//! of silently invalidating them. Reference counts are non-atomic, so a
//! document and its views belong to a single thread.
//!
//! Comparisons are structural and tag-strict throughout: `null` equals
//! only `null`, floats never equal integers, the two integer widths
//! compare by exact value, and object members must match in document
//! order. The same rules drive [`ArrayView::count`] and
//! [`ArrayView::index_of`], which take any [`Value`]-convertible needle.
//!
//! ```
//! use jsonlens::{Resolved, parse};
//!
//! let root = parse(r#"{"a": {"b": [10, 20]}, "tags": ["x", "y", "x"]}"#)?;
//! let Resolved::Object(doc) = root else {
//!     panic!("expected an object root");
//! };
//!
//! assert_eq!(doc.pointer("/a/b/0")?.as_i64(), Some(10));
//!
//! let Resolved::Array(tags) = doc.get("tags")? else {
//!     panic!("expected an array");
//! };
//! assert_eq!(tags.count("x"), 2);
//! assert_eq!(tags.index_of("y")?, 1);
//! # Ok::<(), jsonlens::Error>(())
//! ```

mod arena;
mod compare;
mod document;
mod error;
mod pointer;
mod search;
mod view;

pub use document::{Document, load, parse};
pub use error::{Error, Result};
pub use view::{ArrayView, ObjectView, Resolved};

// Needles and snapshots speak `serde_json`'s value vocabulary.
pub use serde_json::{Map, Value};
