use super::InvalidTermError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

lazy_static! {
    /// Shape of blank node identifiers, after the `BLANK_NODE_LABEL` rule of N-Triples.
    static ref BNODE_ID: Regex = Regex::new(r"^[\w]([\w.\-]*[\w\-])?$").unwrap();
}

static FRESH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Separates the prefix of [fresh](BlankNode::fresh) identifiers from their number.
///
/// It is allowed inside N-Triples blank node labels,
/// but rejected by [`BlankNode::new`], so fresh identifiers never clash with user-supplied ones.
const FRESH_MARK: char = '\u{B7}';

/// A blank node.
///
/// The identifier of a blank node is only meaningful inside the graph containing it.
/// Comparing graphs must therefore not rely on blank node identifiers
/// (see [`graphs_equal`](crate::graph::graphs_equal)).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(Arc<str>);

impl BlankNode {
    /// Build a blank node with the given identifier (without the `_:` prefix).
    ///
    /// # Errors
    /// Fails with [`InvalidTermError::InvalidBlankNodeId`]
    /// if `id` is empty or contains characters not allowed in N-Triples blank node labels,
    /// or if it has the shape of a [fresh](BlankNode::fresh) identifier.
    pub fn new<T: Into<Arc<str>>>(id: T) -> Result<Self, InvalidTermError> {
        let id = id.into();
        if !BNODE_ID.is_match(&id) || id.contains(FRESH_MARK) {
            return Err(InvalidTermError::InvalidBlankNodeId(id.to_string()));
        }
        Ok(BlankNode(id))
    }

    /// Rebuild a blank node from an identifier produced by this crate,
    /// either user-supplied or [fresh](BlankNode::fresh).
    pub(crate) fn from_canonical_id(id: &str) -> Result<Self, InvalidTermError> {
        match id.split_once(FRESH_MARK) {
            Some(("b", n)) if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => {
                Ok(BlankNode(id.into()))
            }
            _ => Self::new(id),
        }
    }

    /// Build a blank node with an identifier never returned before by this method
    /// in the current process.
    pub fn fresh() -> Self {
        let n = FRESH_COUNTER.fetch_add(1, Ordering::Relaxed);
        BlankNode(format!("b{FRESH_MARK}{n}").into())
    }

    /// The identifier of this blank node (without the `_:` prefix).
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}
