//! JSON-LD errors.
use rdfkit_api::parser::ParseError;
use rdfkit_api::term::InvalidTermError;

/// JSON-LD error
///
/// Most variants are named after the [error codes] of the JSON-LD processing algorithms.
///
/// [error codes]: https://www.w3.org/TR/json-ld11-api/#jsonlderrorcode
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum JsonLdError {
    /// Invalid JSON encountered while parsing.
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The document is valid JSON but not a JSON-LD document.
    #[error("invalid JSON-LD document: {0}")]
    InvalidDocument(String),

    /// The base IRI passed to the parser is not a valid absolute IRI.
    #[error("invalid base IRI <{iri}>: {message}")]
    InvalidBaseIri {
        /// The faulty IRI
        iri: String,
        /// What is wrong with it
        message: String,
    },

    /// A remote context could not be retrieved.
    #[error("loading document <{iri}> failed: {message}")]
    LoadingDocumentFailed {
        /// The IRI of the document
        iri: String,
        /// The message of the loader
        message: String,
    },

    /// A remote document does not contain a context.
    #[error("invalid remote context <{0}>")]
    InvalidRemoteContext(String),

    /// A context includes itself, directly or indirectly.
    #[error("recursive context inclusion <{0}>")]
    RecursiveContextInclusion(String),

    /// Too many remote contexts were referenced.
    #[error("context overflow: more than {0} remote contexts")]
    ContextOverflow(usize),

    /// A local context is malformed.
    #[error("invalid local context: {0}")]
    InvalidLocalContext(String),

    /// A term definition is malformed.
    #[error("invalid term definition for '{term}': {message}")]
    InvalidTermDefinition {
        /// The defined term
        term: String,
        /// What is wrong with its definition
        message: String,
    },

    /// A term can not be mapped to an IRI.
    #[error("invalid IRI mapping for term '{0}'")]
    InvalidIriMapping(String),

    /// A term is defined (indirectly) through itself.
    #[error("cyclic IRI mapping for term '{0}'")]
    CyclicIriMapping(String),

    /// A context attempts to redefine a keyword.
    #[error("keyword redefinition: {0}")]
    KeywordRedefinition(String),

    /// A value object is malformed.
    #[error("invalid value object: {0}")]
    InvalidValueObject(String),

    /// An RDF term could not be built from the document.
    #[error(transparent)]
    InvalidTerm(#[from] InvalidTermError),
}

impl From<JsonLdError> for ParseError {
    fn from(other: JsonLdError) -> Self {
        ParseError::with_source(other)
    }
}
