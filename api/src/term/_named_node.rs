use super::InvalidTermError;
use oxiri::Iri;
use std::fmt;
use std::sync::Arc;

/// A node named by an IRI.
///
/// Two named nodes are equal iff their IRIs are the same string.
/// No normalization is applied to the IRI.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedNode(Arc<str>);

impl NamedNode {
    /// Build a named node from an IRI.
    ///
    /// # Errors
    /// Fails with [`InvalidTermError::EmptyIri`] if `iri` is empty,
    /// and with [`InvalidTermError::InvalidIri`] if it is not an absolute IRI.
    pub fn new<T: Into<Arc<str>>>(iri: T) -> Result<Self, InvalidTermError> {
        let iri = iri.into();
        if iri.is_empty() {
            return Err(InvalidTermError::EmptyIri);
        }
        if let Err(err) = Iri::parse(&*iri) {
            return Err(InvalidTermError::InvalidIri {
                iri: iri.to_string(),
                reason: err.to_string(),
            });
        }
        Ok(NamedNode(iri))
    }

    /// Build a named node without checking its IRI.
    ///
    /// The caller must ensure that `iri` is a valid absolute IRI.
    pub fn new_unchecked<T: Into<Arc<str>>>(iri: T) -> Self {
        let iri = iri.into();
        debug_assert!(!iri.is_empty());
        NamedNode(iri)
    }

    /// The IRI of this node.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

impl AsRef<str> for NamedNode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for NamedNode {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for NamedNode {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}
