//! I define the RDF terms: [named nodes](NamedNode), [blank nodes](BlankNode)
//! and [literals](Literal), and [`Term`], the union of the three.
//!
//! Every term has a canonical textual form (its [`Display`](fmt::Display) implementation),
//! which is the N-Triples syntax of the term.
//! This form can be parsed back with [`str::parse`],
//! yielding a term equal to the original one.
//!
//! ```
//! # use rdfkit_api::term::{Literal, NamedNode, Term};
//! let name = Literal::lang("John Smith", "en").unwrap();
//! assert_eq!(name.to_string(), r#""John Smith"@en"#);
//!
//! let parsed: Term = r#""John Smith"@en"#.parse().unwrap();
//! assert_eq!(parsed, Term::from(name));
//! ```
use std::fmt;
use std::str::FromStr;

mod _blank_node;
pub use _blank_node::*;
mod _canonical;
mod _error;
pub use _error::*;
mod _literal;
pub use _literal::*;
mod _named_node;
pub use _named_node::*;

#[cfg(test)]
mod test;

/// An RDF term.
///
/// Terms are immutable values;
/// cloning them is cheap, as their textual content is reference-counted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// An IRI-named node
    NamedNode(NamedNode),
    /// A blank node
    BlankNode(BlankNode),
    /// A literal
    Literal(Literal),
}

/// The different kinds of [`Term`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TermKind {
    /// See [`Term::NamedNode`]
    NamedNode,
    /// See [`Term::BlankNode`]
    BlankNode,
    /// See [`Term::Literal`]
    Literal,
}

impl Term {
    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::NamedNode(_) => TermKind::NamedNode,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
        }
    }

    /// Whether this term is a named node.
    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    /// Whether this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Whether this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Borrow this term as a named node, if it is one.
    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Term::NamedNode(n) => Some(n),
            _ => None,
        }
    }

    /// Borrow this term as a blank node, if it is one.
    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Term::BlankNode(b) => Some(b),
            _ => None,
        }
    }

    /// Borrow this term as a literal, if it is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            _ => None,
        }
    }

    /// The textual value of this term:
    /// the IRI of a named node, the identifier of a blank node,
    /// or the lexical form of a literal.
    pub fn value(&self) -> &str {
        match self {
            Term::NamedNode(n) => n.as_str(),
            Term::BlankNode(b) => b.id(),
            Term::Literal(l) => l.value(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(n) => n.fmt(f),
            Term::BlankNode(b) => b.fmt(f),
            Term::Literal(l) => l.fmt(f),
        }
    }
}

impl FromStr for Term {
    type Err = InvalidTermError;

    fn from_str(txt: &str) -> Result<Self, Self::Err> {
        _canonical::parse_term(txt)
    }
}

impl From<NamedNode> for Term {
    fn from(other: NamedNode) -> Self {
        Term::NamedNode(other)
    }
}

impl From<BlankNode> for Term {
    fn from(other: BlankNode) -> Self {
        Term::BlankNode(other)
    }
}

impl From<Literal> for Term {
    fn from(other: Literal) -> Self {
        Term::Literal(other)
    }
}

impl PartialEq<NamedNode> for Term {
    fn eq(&self, other: &NamedNode) -> bool {
        self.as_named_node() == Some(other)
    }
}

impl PartialEq<BlankNode> for Term {
    fn eq(&self, other: &BlankNode) -> bool {
        self.as_blank_node() == Some(other)
    }
}

impl PartialEq<Literal> for Term {
    fn eq(&self, other: &Literal) -> bool {
        self.as_literal() == Some(other)
    }
}
