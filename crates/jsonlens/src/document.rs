//! Document ownership and the reparse liveness guard.

use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use crate::arena::Arena;
use crate::error::{Error, Result};
use crate::view::{Resolved, resolve};

/// Owner of one parsed JSON tree at a time.
///
/// A document can be reused for parse after parse, and each successful
/// parse replaces the previous tree wholesale. Views handed out by the
/// current parse keep that tree alive through a shared handle, and as long
/// as any of them exist the document refuses to reparse: replacing the
/// tree would otherwise free the storage those views still point into.
/// Drop every view first, then parse again.
///
/// Handles are reference counted without atomics, so documents and their
/// views stay on the thread that created them.
///
/// # Examples
///
/// ```
/// use jsonlens::{Document, Error};
///
/// let mut doc = Document::new();
/// let root = doc.parse(r#"{"a": 1}"#)?;
/// assert!(matches!(doc.parse("{}"), Err(Error::ReparseWhileLive { live: 1 })));
///
/// drop(root);
/// doc.parse("{}")?;
/// # Ok::<(), Error>(())
/// ```
#[derive(Default)]
pub struct Document {
    current: Option<Rc<Arena>>,
}

impl Document {
    /// Creates a document with no tree loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live views referencing the current parse.
    ///
    /// Scalar results are plain values and never count; only `Array` and
    /// `Object` views (and clones of them) hold the tree.
    #[must_use]
    pub fn live_views(&self) -> usize {
        self.current
            .as_ref()
            .map_or(0, |arena| Rc::strong_count(arena) - 1)
    }

    /// Reads a file and parses it, replacing any prior tree.
    ///
    /// # Errors
    ///
    /// [`Error::ReparseWhileLive`] if views from the current parse are
    /// still alive, [`Error::Io`] if the file cannot be read, and
    /// [`Error::Parse`] if its contents are not valid JSON. The prior
    /// tree is left in place on failure.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<Resolved> {
        self.ensure_no_views()?;
        let bytes = fs::read(path)?;
        self.replace(&bytes)
    }

    /// Parses an in-memory buffer, replacing any prior tree.
    ///
    /// Accepts anything viewable as bytes, `&str` included.
    ///
    /// # Errors
    ///
    /// [`Error::ReparseWhileLive`] if views from the current parse are
    /// still alive, and [`Error::Parse`] if the input is not valid JSON.
    /// The prior tree is left in place on failure.
    pub fn parse(&mut self, bytes: impl AsRef<[u8]>) -> Result<Resolved> {
        self.ensure_no_views()?;
        self.replace(bytes.as_ref())
    }

    fn ensure_no_views(&self) -> Result<()> {
        match self.live_views() {
            0 => Ok(()),
            live => Err(Error::ReparseWhileLive { live }),
        }
    }

    /// Parses and swaps in the new tree. The swap happens only after the
    /// parse succeeds, so a failed parse leaves the document untouched.
    fn replace(&mut self, bytes: &[u8]) -> Result<Resolved> {
        let tree = serde_json::from_slice(bytes)?;
        let arena = Rc::new(Arena::from_value(tree));
        let root = resolve(&arena, arena.root());
        self.current = Some(arena);
        Ok(root)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("loaded", &self.current.is_some())
            .field("live_views", &self.live_views())
            .finish()
    }
}

/// Reads and parses a JSON file with a fresh single-use document.
///
/// Equivalent to [`Document::load`] on a document that is dropped
/// immediately; the returned views are unaffected by the drop.
///
/// # Errors
///
/// [`Error::Io`] if the file cannot be read, [`Error::Parse`] if its
/// contents are not valid JSON.
pub fn load(path: impl AsRef<Path>) -> Result<Resolved> {
    Document::new().load(path)
}

/// Parses an in-memory buffer with a fresh single-use document.
///
/// # Errors
///
/// [`Error::Parse`] if the input is not valid JSON.
///
/// # Examples
///
/// ```
/// let root = jsonlens::parse(r#"{"k": "v"}"#)?;
/// let obj = root.as_object().unwrap();
/// assert_eq!(obj.get("k")?.as_str(), Some("v"));
/// # Ok::<(), jsonlens::Error>(())
/// ```
pub fn parse(bytes: impl AsRef<[u8]>) -> Result<Resolved> {
    Document::new().parse(bytes)
}
