//! An RDF triple expresses a single fact.
//! It is formed of three terms called *subject*, *predicate* and *object*.
//!
//! You can think of a triple as a sentence of the form
//! "subject verb complement"
//! (although the *predicate* is often better expressed as a relationship than a verb).
//! Examples :
//!
//! * John is a person.
//! * John's name is "John Smith".
//! * John has a key, which is an RSA public key.

use crate::term::{BlankNode, InvalidTermError, NamedNode, Term};
use std::fmt;

/// An RDF triple.
///
/// Triples are immutable value objects.
/// Their subject is always a named node or a blank node,
/// and their predicate is always a named node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Triple {
    subject: Term,
    predicate: NamedNode,
    object: Term,
}

impl Triple {
    /// Build a triple.
    ///
    /// # Errors
    /// Fails with [`InvalidTermError::LiteralSubject`] if `subject` is a literal.
    pub fn new<S, O>(subject: S, predicate: NamedNode, object: O) -> Result<Self, InvalidTermError>
    where
        S: Into<Term>,
        O: Into<Term>,
    {
        let subject = subject.into();
        if let Term::Literal(lit) = &subject {
            return Err(InvalidTermError::LiteralSubject(lit.to_string()));
        }
        Ok(Triple {
            subject,
            predicate,
            object: object.into(),
        })
    }

    /// Build a triple whose subject is known not to be a literal.
    pub(crate) fn new_unchecked(subject: Term, predicate: NamedNode, object: Term) -> Self {
        debug_assert!(!subject.is_literal());
        Triple {
            subject,
            predicate,
            object,
        }
    }

    /// The subject of this triple.
    pub fn subject(&self) -> &Term {
        &self.subject
    }

    /// The predicate of this triple.
    pub fn predicate(&self) -> &NamedNode {
        &self.predicate
    }

    /// The object of this triple.
    pub fn object(&self) -> &Term {
        &self.object
    }

    /// Consume this triple into its components.
    pub fn into_parts(self) -> (Term, NamedNode, Term) {
        (self.subject, self.predicate, self.object)
    }

    /// Iterate over the blank nodes of this triple (in subject, then object position).
    pub fn blank_nodes(&self) -> impl Iterator<Item = &BlankNode> {
        [&self.subject, &self.object]
            .into_iter()
            .filter_map(Term::as_blank_node)
    }

    /// Whether this triple contains no blank node.
    pub fn is_ground(&self) -> bool {
        self.blank_nodes().next().is_none()
    }

    /// Whether this triple matches the given pattern,
    /// where `None` matches any term.
    pub fn matches(
        &self,
        subject: Option<&Term>,
        predicate: Option<&NamedNode>,
        object: Option<&Term>,
    ) -> bool {
        subject.map_or(true, |s| *s == self.subject)
            && predicate.map_or(true, |p| *p == self.predicate)
            && object.map_or(true, |o| *o == self.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}
