use super::{InvalidTermError, NamedNode};
use crate::ns::{rdf, xsd};
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::sync::Arc;

lazy_static! {
    static ref LANG_TAG: Regex = Regex::new(r"^[a-zA-Z]{1,8}(-[a-zA-Z0-9]{1,8})*$").unwrap();
}

/// A literal: a lexical form with either a language tag or a datatype.
///
/// Literals built without a language tag nor a datatype are given the datatype `xsd:string`.
/// Two literals are equal iff their lexical form, language tag and datatype are identical.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    value: Arc<str>,
    kind: LiteralKind,
}

/// What qualifies the lexical form of a [`Literal`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LiteralKind {
    /// A language tag (the datatype is implicitly `rdf:langString`)
    Lang(Arc<str>),
    /// A datatype IRI
    Datatype(NamedNode),
}

impl Literal {
    /// Build a literal from its lexical form, and an optional language tag or datatype.
    ///
    /// # Errors
    /// Fails if both `language` and `datatype` are provided,
    /// or if `language` is not a well-formed language tag.
    pub fn new<V: Into<Arc<str>>>(
        value: V,
        language: Option<&str>,
        datatype: Option<NamedNode>,
    ) -> Result<Self, InvalidTermError> {
        let value = value.into();
        match (language, datatype) {
            (Some(language), Some(datatype)) => Err(InvalidTermError::LanguageAndDatatype {
                value: value.to_string(),
                language: language.to_string(),
                datatype: datatype.as_str().to_string(),
            }),
            (Some(language), None) => Self::lang(value, language),
            (None, Some(datatype)) => Ok(Self::typed(value, datatype)),
            (None, None) => Ok(Self::simple(value)),
        }
    }

    /// Build a simple literal, with datatype `xsd:string`.
    pub fn simple<V: Into<Arc<str>>>(value: V) -> Self {
        Self::typed(value, xsd::string.clone())
    }

    /// Build a language-tagged literal.
    ///
    /// # Errors
    /// Fails if `tag` is not a well-formed language tag.
    pub fn lang<V: Into<Arc<str>>>(value: V, tag: &str) -> Result<Self, InvalidTermError> {
        if !LANG_TAG.is_match(tag) {
            return Err(InvalidTermError::InvalidLanguageTag(tag.to_string()));
        }
        Ok(Literal {
            value: value.into(),
            kind: LiteralKind::Lang(tag.into()),
        })
    }

    /// Build a literal with the given datatype.
    pub fn typed<V: Into<Arc<str>>>(value: V, datatype: NamedNode) -> Self {
        Literal {
            value: value.into(),
            kind: LiteralKind::Datatype(datatype),
        }
    }

    /// The lexical form of this literal.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The language tag of this literal, if any.
    pub fn language(&self) -> Option<&str> {
        match &self.kind {
            LiteralKind::Lang(tag) => Some(tag),
            LiteralKind::Datatype(_) => None,
        }
    }

    /// The datatype of this literal, if it is not language-tagged.
    pub fn datatype(&self) -> Option<&NamedNode> {
        match &self.kind {
            LiteralKind::Lang(_) => None,
            LiteralKind::Datatype(dt) => Some(dt),
        }
    }

    /// The datatype of this literal as defined by RDF 1.1,
    /// i.e. `rdf:langString` for language-tagged literals.
    pub fn effective_datatype(&self) -> &NamedNode {
        match &self.kind {
            LiteralKind::Lang(_) => &*rdf::langString,
            LiteralKind::Datatype(dt) => dt,
        }
    }

    /// Whether this literal has the datatype `xsd:string`.
    pub fn is_simple(&self) -> bool {
        self.datatype() == Some(&*xsd::string)
    }

    /// Borrow the language tag or datatype of this literal.
    pub fn kind(&self) -> &LiteralKind {
        &self.kind
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        super::_canonical::write_escaped(f, &self.value)?;
        f.write_str("\"")?;
        match &self.kind {
            LiteralKind::Lang(tag) => write!(f, "@{tag}"),
            LiteralKind::Datatype(dt) if *dt == *xsd::string => Ok(()),
            LiteralKind::Datatype(dt) => write!(f, "^^{dt}"),
        }
    }
}
