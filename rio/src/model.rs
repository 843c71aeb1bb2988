//! Conversion from [`rio_api::model`] types into `rdfkit_api` terms and triples.
//!
//! NB: since [`rio_api::model`] types have public fields,
//! they can not in general be trusted to contain valid data,
//! so every conversion is checked.
use rdfkit_api::parser::ParseError;
use rdfkit_api::term::{BlankNode, InvalidTermError, Literal, NamedNode, Term};
use rdfkit_api::triple::Triple;
use rio_api::model as rio;
use std::collections::HashMap;

/// Maps the blank node labels of one document to fresh [blank nodes](BlankNode::fresh).
///
/// Two occurrences of the same label in a document denote the same blank node,
/// but the same label in two different documents (or two parses of the same document)
/// denotes different blank nodes.
#[derive(Clone, Debug, Default)]
pub struct BlankNodeScope {
    labels: HashMap<String, BlankNode>,
}

impl BlankNodeScope {
    /// Build an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// The blank node standing for `label` in this scope.
    pub fn blank_node(&mut self, label: &str) -> BlankNode {
        if let Some(b) = self.labels.get(label) {
            return b.clone();
        }
        let b = BlankNode::fresh();
        self.labels.insert(label.to_string(), b.clone());
        b
    }

    /// The number of distinct labels seen in this scope.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether no label was seen in this scope.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Convert a Rio triple, replacing its blank nodes according to this scope.
    ///
    /// # Errors
    /// Fails on invalid terms, and on RDF-star quoted triples, which are not supported.
    pub fn triple(&mut self, t: rio::Triple) -> Result<Triple, ParseError> {
        let subject: Term = match t.subject {
            rio::Subject::NamedNode(n) => named_node(n)?.into(),
            rio::Subject::BlankNode(b) => self.blank_node(b.id).into(),
            _ => return Err(quoted_triple(&t)),
        };
        let object: Term = match t.object {
            rio::Term::NamedNode(n) => named_node(n)?.into(),
            rio::Term::BlankNode(b) => self.blank_node(b.id).into(),
            rio::Term::Literal(l) => literal(l)?.into(),
            _ => return Err(quoted_triple(&t)),
        };
        Ok(Triple::new(subject, named_node(t.predicate)?, object)?)
    }
}

/// Convert a Rio named node.
pub fn named_node(n: rio::NamedNode) -> Result<NamedNode, InvalidTermError> {
    NamedNode::new(n.iri)
}

/// Convert a Rio literal.
pub fn literal(l: rio::Literal) -> Result<Literal, InvalidTermError> {
    match l {
        rio::Literal::Simple { value } => Ok(Literal::simple(value)),
        rio::Literal::LanguageTaggedString { value, language } => Literal::lang(value, language),
        rio::Literal::Typed { value, datatype } => Ok(Literal::typed(value, named_node(datatype)?)),
    }
}

fn quoted_triple(t: &rio::Triple) -> ParseError {
    ParseError::new(format!("quoted triples (RDF-star) are not supported: {t}"))
}

#[cfg(test)]
mod test {
    use super::*;
    use rdfkit_api::ns::{rdf, xsd};

    #[test]
    fn scope_maps_labels_consistently() {
        let mut scope = BlankNodeScope::new();
        let a1 = scope.blank_node("a");
        let b = scope.blank_node("b");
        let a2 = scope.blank_node("a");
        assert_eq!(a1, a2);
        assert_ne!(a1, b);
        assert_eq!(scope.len(), 2);

        let mut other = BlankNodeScope::new();
        assert_ne!(other.blank_node("a"), a1);
    }

    #[test]
    fn convert_literals() {
        let simple = literal(rio::Literal::Simple { value: "x" }).unwrap();
        assert_eq!(simple.datatype(), Some(&*xsd::string));

        let tagged = literal(rio::Literal::LanguageTaggedString {
            value: "x",
            language: "en",
        })
        .unwrap();
        assert_eq!(tagged.language(), Some("en"));
        assert_eq!(tagged.effective_datatype(), &*rdf::langString);

        let typed = literal(rio::Literal::Typed {
            value: "1",
            datatype: rio::NamedNode {
                iri: xsd::integer.as_str(),
            },
        })
        .unwrap();
        assert_eq!(typed.datatype(), Some(&*xsd::integer));
    }

    #[test]
    fn convert_triple() {
        let mut scope = BlankNodeScope::new();
        let t = rio::Triple {
            subject: rio::BlankNode { id: "k" }.into(),
            predicate: rio::NamedNode {
                iri: "http://example.org/p",
            },
            object: rio::Literal::Simple { value: "v" }.into(),
        };
        let t = scope.triple(t).unwrap();
        assert!(t.subject().is_blank_node());
        assert_ne!(t.subject().value(), "k");
        assert_eq!(t.predicate().as_str(), "http://example.org/p");
    }

    #[test]
    fn reject_empty_iri() {
        let mut scope = BlankNodeScope::new();
        let t = rio::Triple {
            subject: rio::NamedNode { iri: "" }.into(),
            predicate: rio::NamedNode {
                iri: "http://example.org/p",
            },
            object: rio::NamedNode { iri: "http://example.org/o" }.into(),
        };
        assert!(scope.triple(t).is_err());
    }
}
