use thiserror::Error;

/// This error is raised when the creation of a term (or a triple) fails.
///
/// Terms are never silently corrected:
/// the faulty input is reported back to the caller.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidTermError {
    /// The IRI of a named node must not be empty.
    #[error("The IRI of a named node can not be empty")]
    EmptyIri,
    /// Named nodes must be identified by an absolute IRI.
    #[error("The given IRI '{iri}' is not valid: {reason}")]
    InvalidIri {
        /// The faulty IRI
        iri: String,
        /// Why it is not valid
        reason: String,
    },
    /// Blank node identifiers must follow the N-Triples production rules.
    #[error("The identifier '{0}' is not valid for a blank node")]
    InvalidBlankNodeId(String),
    /// Language tags must have the shape of a [BCP47](https://tools.ietf.org/html/bcp47) tag.
    #[error("The given language tag '{0}' is not valid according to BCP47")]
    InvalidLanguageTag(String),
    /// A literal can have a language tag or a datatype, but not both.
    #[error("The literal \"{value}\" can not have both a language tag ({language}) and a datatype ({datatype})")]
    LanguageAndDatatype {
        /// The lexical form of the faulty literal
        value: String,
        /// The supplied language tag
        language: String,
        /// The supplied datatype IRI
        datatype: String,
    },
    /// Only named nodes and blank nodes can be the subject of a triple.
    #[error("The literal {0} can not be the subject of a triple")]
    LiteralSubject(String),
    /// The canonical form of a term could not be parsed.
    #[error("Can not parse '{text}' as a term: {reason}")]
    Unparsable {
        /// The faulty text
        text: String,
        /// What is wrong with `text`
        reason: &'static str,
    },
}
