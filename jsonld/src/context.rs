//! JSON-LD contexts.
//!
//! An [`ActiveContext`] is built by processing the `@context` entries of a document
//! (and the optional `expandContext` option).
//! Remote contexts are retrieved beforehand by [`RemoteContexts::fetch`],
//! so that context processing itself is synchronous.
use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use log::trace;
use oxiri::Iri;
use regex::Regex;
use serde_json::{Map, Value};

use crate::error::JsonLdError;
use crate::loader::ContextLoader;

/// The maximum number of distinct remote contexts a document may reference.
pub const MAX_REMOTE_CONTEXTS: usize = 32;

const KEYWORDS: &[&str] = &[
    "@base",
    "@container",
    "@context",
    "@direction",
    "@graph",
    "@id",
    "@import",
    "@included",
    "@index",
    "@json",
    "@language",
    "@list",
    "@nest",
    "@none",
    "@prefix",
    "@propagate",
    "@protected",
    "@reverse",
    "@set",
    "@type",
    "@value",
    "@version",
    "@vocab",
];

lazy_static! {
    static ref KEYWORD_LIKE: Regex = Regex::new(r"^@[a-zA-Z]+$").unwrap();
}

/// Whether `value` is a JSON-LD keyword.
pub fn is_keyword(value: &str) -> bool {
    KEYWORDS.contains(&value)
}

/// Whether `value` has the form of a keyword (and must therefore be ignored if it is not one).
pub fn is_keyword_like(value: &str) -> bool {
    KEYWORD_LIKE.is_match(value)
}

/// Whether `value` is an absolute IRI.
pub fn is_absolute(value: &str) -> bool {
    Iri::parse(value).is_ok()
}

/// Resolve `value` against `base`, if `base` is a valid IRI.
pub fn resolve(base: &str, value: &str) -> Option<String> {
    Iri::parse(base)
        .and_then(|base| base.resolve(value))
        .ok()
        .map(Iri::into_inner)
}

/// The type mapping of a term definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeMapping {
    /// `@id`: string values are IRIs (resolved against the base IRI)
    Id,
    /// `@vocab`: string values are terms or IRIs (resolved against the vocabulary mapping)
    Vocab,
    /// string values are literals with this datatype
    Iri(String),
}

/// The container mapping of a term definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Container {
    /// `@list`
    List,
    /// `@set`
    Set,
    /// `@language`
    Language,
    /// `@index`
    Index,
}

/// A term definition.
#[derive(Clone, Debug, Default)]
pub struct TermDefinition {
    /// The IRI (or keyword) this term maps to; `None` for terms explicitly mapped to `null`.
    pub iri: Option<String>,
    /// Whether this term is a reverse property.
    pub reverse: bool,
    /// Whether this term can be used as the prefix of a compact IRI.
    pub prefix: bool,
    /// The type mapping of this term.
    pub type_mapping: Option<TypeMapping>,
    /// The container mapping of this term.
    pub container: Vec<Container>,
    /// The language mapping of this term; `Some(None)` means "no language".
    pub language: Option<Option<String>>,
    /// The scoped context of this term.
    pub context: Option<Value>,
    /// The IRI against which remote contexts in [`context`](Self::context) are resolved.
    pub context_base: Option<String>,
}

impl TermDefinition {
    /// Whether this term has the given container mapping.
    pub fn has_container(&self, container: Container) -> bool {
        self.container.contains(&container)
    }
}

/// Remote contexts, indexed by their (absolute) IRI.
///
/// Each entry is the value of the `@context` entry of the retrieved document.
#[derive(Clone, Debug, Default)]
pub struct RemoteContexts {
    contexts: HashMap<String, Value>,
}

impl RemoteContexts {
    /// Retrieve every remote context referenced by `doc` (and `expand_context`),
    /// including those referenced by the retrieved contexts themselves.
    ///
    /// Relative references are resolved against `base`,
    /// or against the IRI of the context containing them.
    pub async fn fetch(
        loader: &dyn ContextLoader,
        doc: &Value,
        expand_context: Option<&Value>,
        base: Option<&str>,
    ) -> Result<Self, JsonLdError> {
        let mut pending = vec![];
        if let Some(ctx) = expand_context {
            collect_context_refs(ctx, base, &mut pending)?;
        }
        collect_refs(doc, base, &mut pending)?;

        let mut contexts = HashMap::new();
        let mut seen = HashSet::new();
        while let Some(iri) = pending.pop() {
            if !seen.insert(iri.clone()) {
                continue;
            }
            if seen.len() > MAX_REMOTE_CONTEXTS {
                return Err(JsonLdError::ContextOverflow(MAX_REMOTE_CONTEXTS));
            }
            trace!("loading remote context <{iri}>");
            let mut doc = loader.load(&iri).await?;
            let Some(ctx) = doc.get_mut("@context").map(Value::take) else {
                return Err(JsonLdError::InvalidRemoteContext(iri));
            };
            collect_context_refs(&ctx, Some(&iri), &mut pending)?;
            contexts.insert(iri, ctx);
        }
        Ok(RemoteContexts { contexts })
    }

    /// The number of remote contexts.
    pub fn len(&self) -> usize {
        self.contexts.len()
    }

    /// Whether there is no remote context.
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty()
    }

    fn get(&self, iri: &str) -> Option<&Value> {
        self.contexts.get(iri)
    }
}

/// Find the remote context references in every `@context` entry of `value`.
fn collect_refs(value: &Value, base: Option<&str>, out: &mut Vec<String>) -> Result<(), JsonLdError> {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                if key == "@context" {
                    collect_context_refs(val, base, out)?;
                } else {
                    collect_refs(val, base, out)?;
                }
            }
        }
        Value::Array(values) => {
            for val in values {
                collect_refs(val, base, out)?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Find the remote context references in the context `value`,
/// including those in scoped contexts.
fn collect_context_refs(
    value: &Value,
    base: Option<&str>,
    out: &mut Vec<String>,
) -> Result<(), JsonLdError> {
    match value {
        Value::String(iri) => out.push(resolve_context_iri(iri, base)?),
        Value::Array(values) => {
            for val in values {
                collect_context_refs(val, base, out)?;
            }
        }
        Value::Object(_) => collect_refs(value, base, out)?,
        _ => {}
    }
    Ok(())
}

fn resolve_context_iri(iri: &str, base: Option<&str>) -> Result<String, JsonLdError> {
    if is_absolute(iri) {
        return Ok(iri.to_string());
    }
    base.and_then(|base| resolve(base, iri))
        .ok_or_else(|| JsonLdError::LoadingDocumentFailed {
            iri: iri.to_string(),
            message: "can not resolve relative context IRI".into(),
        })
}

/// The state of term definitions while processing one local context.
struct Definitions<'a> {
    local: &'a Map<String, Value>,
    defined: HashMap<String, bool>,
    base_url: Option<&'a str>,
}

/// An active context.
#[derive(Clone, Debug, Default)]
pub struct ActiveContext {
    original_base: Option<String>,
    base: Option<String>,
    vocab: Option<String>,
    language: Option<String>,
    terms: HashMap<String, TermDefinition>,
}

impl ActiveContext {
    /// Build an empty active context with the given base IRI.
    pub fn new(base: Option<String>) -> Self {
        ActiveContext {
            original_base: base.clone(),
            base,
            ..Self::default()
        }
    }

    /// The current base IRI.
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// The vocabulary mapping.
    pub fn vocab(&self) -> Option<&str> {
        self.vocab.as_deref()
    }

    /// The default language.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// The definition of `term`, if any.
    pub fn term(&self, term: &str) -> Option<&TermDefinition> {
        self.terms.get(term)
    }

    /// Process the local context `local`, producing a new active context.
    ///
    /// `base_url` is the IRI against which references to remote contexts are resolved.
    pub fn process(
        &self,
        local: &Value,
        base_url: Option<&str>,
        remote: &RemoteContexts,
    ) -> Result<ActiveContext, JsonLdError> {
        self.process_rec(local, base_url, remote, &mut vec![], false)
    }

    fn process_rec(
        &self,
        local: &Value,
        base_url: Option<&str>,
        remote: &RemoteContexts,
        stack: &mut Vec<String>,
        from_remote: bool,
    ) -> Result<ActiveContext, JsonLdError> {
        let mut result = self.clone();
        let contexts = match local {
            Value::Array(values) => values.as_slice(),
            other => std::slice::from_ref(other),
        };
        for ctx in contexts {
            match ctx {
                Value::Null => {
                    result = ActiveContext::new(self.original_base.clone());
                }
                Value::String(iri) => {
                    let iri = resolve_context_iri(iri, base_url)?;
                    if stack.contains(&iri) {
                        return Err(JsonLdError::RecursiveContextInclusion(iri));
                    }
                    let loaded =
                        remote
                            .get(&iri)
                            .ok_or_else(|| JsonLdError::LoadingDocumentFailed {
                                iri: iri.clone(),
                                message: "remote context was not retrieved".into(),
                            })?;
                    stack.push(iri.clone());
                    result = result.process_rec(loaded, Some(&iri), remote, stack, true)?;
                    stack.pop();
                }
                Value::Object(map) => {
                    result.define_all(map, base_url, from_remote)?;
                }
                other => {
                    return Err(JsonLdError::InvalidLocalContext(format!(
                        "unexpected context value {other}"
                    )))
                }
            }
        }
        Ok(result)
    }

    fn define_all(
        &mut self,
        map: &Map<String, Value>,
        base_url: Option<&str>,
        from_remote: bool,
    ) -> Result<(), JsonLdError> {
        if map.contains_key("@import") {
            return Err(JsonLdError::InvalidLocalContext(
                "@import is not supported".into(),
            ));
        }
        if let Some(base) = map.get("@base") {
            if !from_remote {
                self.base = match base {
                    Value::Null => None,
                    Value::String(iri) if is_absolute(iri) => Some(iri.clone()),
                    Value::String(iri) => {
                        let resolved = self.base.as_deref().and_then(|b| resolve(b, iri));
                        Some(resolved.ok_or_else(|| JsonLdError::InvalidBaseIri {
                            iri: iri.clone(),
                            message: "relative @base without a base IRI".into(),
                        })?)
                    }
                    other => {
                        return Err(JsonLdError::InvalidBaseIri {
                            iri: other.to_string(),
                            message: "@base must be a string or null".into(),
                        })
                    }
                };
            }
        }
        if let Some(vocab) = map.get("@vocab") {
            self.vocab = match vocab {
                Value::Null => None,
                Value::String(iri) => self.expand_iri(iri, true, true),
                other => {
                    return Err(JsonLdError::InvalidLocalContext(format!(
                        "invalid vocab mapping {other}"
                    )))
                }
            };
        }
        if let Some(language) = map.get("@language") {
            self.language = match language {
                Value::Null => None,
                Value::String(tag) => Some(tag.clone()),
                other => {
                    return Err(JsonLdError::InvalidLocalContext(format!(
                        "invalid default language {other}"
                    )))
                }
            };
        }

        let mut defs = Definitions {
            local: map,
            defined: HashMap::new(),
            base_url,
        };
        for term in map.keys() {
            if matches!(
                term.as_str(),
                "@base" | "@direction" | "@language" | "@propagate" | "@protected" | "@version" | "@vocab"
            ) {
                continue;
            }
            self.define_term(term, &mut defs)?;
        }
        Ok(())
    }

    fn define_term(&mut self, term: &str, defs: &mut Definitions) -> Result<(), JsonLdError> {
        match defs.defined.get(term) {
            Some(true) => return Ok(()),
            Some(false) => return Err(JsonLdError::CyclicIriMapping(term.to_string())),
            None => {}
        }
        if term.is_empty() {
            return Err(JsonLdError::InvalidTermDefinition {
                term: term.to_string(),
                message: "empty term".into(),
            });
        }
        let local = defs.local;
        let Some(value) = local.get(term) else {
            return Ok(());
        };
        if is_keyword(term) {
            return Err(JsonLdError::KeywordRedefinition(term.to_string()));
        }
        if is_keyword_like(term) {
            defs.defined.insert(term.to_string(), true);
            return Ok(());
        }
        defs.defined.insert(term.to_string(), false);
        self.terms.remove(term);

        let invalid = |message: &str| JsonLdError::InvalidTermDefinition {
            term: term.to_string(),
            message: message.to_string(),
        };
        let simple_term = !term.contains(':') && !term.contains('/');
        let mut def = TermDefinition::default();
        let map = match value {
            Value::Null => {
                defs.defined.insert(term.to_string(), true);
                self.terms.insert(term.to_string(), def);
                return Ok(());
            }
            Value::String(id) => {
                let mut map = Map::new();
                map.insert("@id".into(), Value::String(id.clone()));
                map
            }
            Value::Object(map) => map.clone(),
            _ => return Err(invalid("expected a string, an object or null")),
        };

        if let Some(reverse) = map.get("@reverse") {
            if map.contains_key("@id") || map.contains_key("@nest") {
                return Err(invalid("@reverse can not be combined with @id or @nest"));
            }
            let Value::String(reverse) = reverse else {
                return Err(invalid("@reverse must be a string"));
            };
            match self.expand_iri_defining(reverse, false, true, defs)? {
                Some(iri) if iri.contains(':') => def.iri = Some(iri),
                _ => return Err(JsonLdError::InvalidIriMapping(term.to_string())),
            }
            def.reverse = true;
        } else if let Some(id) = map.get("@id").filter(|id| id.as_str() != Some(term)) {
            match id {
                Value::Null => {}
                Value::String(id) if !is_keyword(id) && is_keyword_like(id) => {}
                Value::String(id) => {
                    match self.expand_iri_defining(id, false, true, defs)? {
                        Some(iri) if iri == "@context" => {
                            return Err(JsonLdError::InvalidIriMapping(term.to_string()))
                        }
                        Some(iri) if is_keyword(&iri) || iri.contains(':') => {
                            def.prefix = simple_term && iri.ends_with(['/', ':', '?', '#', '[', ']', '@']);
                            def.iri = Some(iri);
                        }
                        _ => return Err(JsonLdError::InvalidIriMapping(term.to_string())),
                    }
                }
                _ => return Err(invalid("@id must be a string or null")),
            }
        } else if let Some((prefix, suffix)) = term.split_once(':').filter(|(p, _)| !p.is_empty()) {
            if local.contains_key(prefix) {
                self.define_term(prefix, defs)?;
            }
            def.iri = match self.terms.get(prefix).and_then(|d| d.iri.as_ref()) {
                Some(iri) if prefix != "_" && !suffix.starts_with("//") => {
                    Some(format!("{iri}{suffix}"))
                }
                _ => Some(term.to_string()),
            };
        } else if term.contains('/') {
            def.iri = self.expand_iri(term, false, true);
        } else if term == "@type" {
            def.iri = Some("@type".to_string());
        } else {
            match &self.vocab {
                Some(vocab) => def.iri = Some(format!("{vocab}{term}")),
                None => return Err(JsonLdError::InvalidIriMapping(term.to_string())),
            }
        }

        if let Some(typ) = map.get("@type") {
            let Value::String(typ) = typ else {
                return Err(invalid("@type must be a string"));
            };
            def.type_mapping = match self.expand_iri_defining(typ, false, true, defs)?.as_deref() {
                Some("@id") => Some(TypeMapping::Id),
                Some("@vocab") => Some(TypeMapping::Vocab),
                Some(iri) if is_absolute(iri) => Some(TypeMapping::Iri(iri.to_string())),
                _ => return Err(invalid("invalid type mapping")),
            };
        }
        if let Some(container) = map.get("@container") {
            let values = match container {
                Value::Array(values) => values.as_slice(),
                other => std::slice::from_ref(other),
            };
            for value in values {
                def.container.push(match value.as_str() {
                    Some("@list") => Container::List,
                    Some("@set") => Container::Set,
                    Some("@language") => Container::Language,
                    Some("@index") => Container::Index,
                    _ => return Err(invalid("unsupported container mapping")),
                });
            }
            if def.reverse && def.has_container(Container::List) {
                return Err(invalid("reverse properties can not be lists"));
            }
        }
        if let Some(language) = map.get("@language") {
            def.language = match language {
                Value::Null => Some(None),
                Value::String(tag) => Some(Some(tag.clone())),
                _ => return Err(invalid("@language must be a string or null")),
            };
        }
        if let Some(prefix) = map.get("@prefix") {
            match prefix {
                Value::Bool(flag) if simple_term => def.prefix = *flag,
                _ => return Err(invalid("invalid @prefix")),
            }
        }
        if let Some(context) = map.get("@context") {
            def.context = Some(context.clone());
            def.context_base = defs.base_url.map(str::to_string);
        }

        defs.defined.insert(term.to_string(), true);
        self.terms.insert(term.to_string(), def);
        Ok(())
    }

    /// IRI expansion while processing a local context,
    /// where terms may be defined on demand.
    fn expand_iri_defining(
        &mut self,
        value: &str,
        document_relative: bool,
        vocab: bool,
        defs: &mut Definitions,
    ) -> Result<Option<String>, JsonLdError> {
        if !is_keyword(value) && !is_keyword_like(value) {
            if defs.local.contains_key(value) && defs.defined.get(value) != Some(&true) {
                self.define_term(value, defs)?;
            }
            if let Some((prefix, _)) = value.split_once(':') {
                if defs.local.contains_key(prefix) && defs.defined.get(prefix) != Some(&true) {
                    self.define_term(prefix, defs)?;
                }
            }
        }
        Ok(self.expand_iri(value, document_relative, vocab))
    }

    /// Expand `value` into an IRI, a blank node identifier or a keyword.
    ///
    /// Returns `None` for terms mapped to `null` and for keyword-like strings.
    /// Relative IRIs that can not be resolved are returned as is.
    pub fn expand_iri(&self, value: &str, document_relative: bool, vocab: bool) -> Option<String> {
        if is_keyword(value) {
            return Some(value.to_string());
        }
        if is_keyword_like(value) {
            return None;
        }
        if vocab {
            if let Some(def) = self.terms.get(value) {
                return def.iri.clone();
            }
        }
        if let Some((prefix, suffix)) = value.split_once(':') {
            if prefix == "_" || suffix.starts_with("//") {
                return Some(value.to_string());
            }
            if let Some(iri) = self
                .terms
                .get(prefix)
                .filter(|def| def.prefix)
                .and_then(|def| def.iri.as_ref())
            {
                return Some(format!("{iri}{suffix}"));
            }
            if is_absolute(value) {
                return Some(value.to_string());
            }
        }
        if vocab {
            if let Some(vocab) = &self.vocab {
                return Some(format!("{vocab}{value}"));
            }
        }
        if document_relative {
            if let Some(resolved) = self.base.as_deref().and_then(|base| resolve(base, value)) {
                return Some(resolved);
            }
        }
        Some(value.to_string())
    }

    /// Expand a key of a node object or value object,
    /// into a keyword or an IRI.
    pub fn expand_key(&self, key: &str) -> Option<String> {
        self.expand_iri(key, false, true)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::loader::StaticLoader;
    use serde_json::json;

    fn process(ctx: Value) -> Result<ActiveContext, JsonLdError> {
        ActiveContext::new(Some("http://example.org/doc".into())).process(
            &ctx,
            None,
            &RemoteContexts::default(),
        )
    }

    #[test]
    fn simple_terms() -> Result<(), JsonLdError> {
        let ctx = process(json!({
            "foaf": "http://xmlns.com/foaf/0.1/",
            "name": "foaf:name",
            "knows": {"@id": "foaf:knows", "@type": "@id"},
            "nick": {"@id": "foaf:nick", "@container": "@list"}
        }))?;
        assert_eq!(ctx.expand_key("name").as_deref(), Some("http://xmlns.com/foaf/0.1/name"));
        assert_eq!(ctx.expand_key("foaf:age").as_deref(), Some("http://xmlns.com/foaf/0.1/age"));
        assert_eq!(ctx.term("knows").and_then(|d| d.type_mapping.clone()), Some(TypeMapping::Id));
        assert!(ctx.term("nick").unwrap().has_container(Container::List));
        Ok(())
    }

    #[test]
    fn forward_reference() -> Result<(), JsonLdError> {
        let ctx = process(json!({
            "name": "ex:name",
            "ex": "http://example.org/ns#"
        }))?;
        assert_eq!(ctx.expand_key("name").as_deref(), Some("http://example.org/ns#name"));
        Ok(())
    }

    #[test]
    fn vocab_and_base() -> Result<(), JsonLdError> {
        let ctx = process(json!({"@vocab": "http://schema.org/", "@base": "http://ex.com/a/"}))?;
        assert_eq!(ctx.expand_key("Person").as_deref(), Some("http://schema.org/Person"));
        assert_eq!(ctx.expand_iri("b", true, false).as_deref(), Some("http://ex.com/a/b"));
        assert_eq!(ctx.expand_iri("_:b", true, false).as_deref(), Some("_:b"));
        Ok(())
    }

    #[test]
    fn aliases() -> Result<(), JsonLdError> {
        let ctx = process(json!({"id": "@id", "type": "@type", "nothing": null}))?;
        assert_eq!(ctx.expand_key("id").as_deref(), Some("@id"));
        assert_eq!(ctx.expand_key("type").as_deref(), Some("@type"));
        assert_eq!(ctx.expand_key("nothing"), None);
        assert_eq!(ctx.expand_key("@foo"), None);
        Ok(())
    }

    #[test]
    fn null_resets() -> Result<(), JsonLdError> {
        let ctx = process(json!([{"@vocab": "http://schema.org/"}, null]))?;
        assert_eq!(ctx.vocab(), None);
        assert_eq!(ctx.base(), Some("http://example.org/doc"));
        Ok(())
    }

    #[test]
    fn errors() {
        assert!(matches!(
            process(json!({"a": "b:x", "b": "a:y"})),
            Err(JsonLdError::CyclicIriMapping(_))
        ));
        assert!(matches!(
            process(json!({"@id": "http://example.org/"})),
            Err(JsonLdError::KeywordRedefinition(_))
        ));
        assert!(matches!(
            process(json!({"name": "name2"})),
            Err(JsonLdError::InvalidIriMapping(_))
        ));
        assert!(matches!(
            process(json!({"x": {"@id": "http://ex/x", "@container": "@graph"}})),
            Err(JsonLdError::InvalidTermDefinition { .. })
        ));
        assert!(matches!(
            process(json!(42)),
            Err(JsonLdError::InvalidLocalContext(_))
        ));
        assert!(matches!(
            process(json!("urn:unknown")),
            Err(JsonLdError::LoadingDocumentFailed { .. })
        ));
    }

    #[tokio::test]
    async fn remote_contexts() -> Result<(), JsonLdError> {
        let loader = StaticLoader::new()
            .with("http://example.org/ctx1", json!({"@context": ["ctx2", {"a": "ex:a"}]}))
            .with("http://example.org/ctx2", json!({"@context": {"ex": "http://example.org/ns#"}}));
        let doc = json!({"@context": "http://example.org/ctx1", "a": 42});
        let remote = RemoteContexts::fetch(&loader, &doc, None, None).await?;
        assert_eq!(remote.len(), 2);
        let ctx = ActiveContext::new(None).process(&doc["@context"], None, &remote)?;
        assert_eq!(ctx.expand_key("a").as_deref(), Some("http://example.org/ns#a"));
        Ok(())
    }

    #[tokio::test]
    async fn recursive_remote_contexts() -> Result<(), JsonLdError> {
        let loader = StaticLoader::new()
            .with("urn:ctx:a", json!({"@context": "urn:ctx:b"}))
            .with("urn:ctx:b", json!({"@context": "urn:ctx:a"}));
        let doc = json!({"@context": "urn:ctx:a"});
        let remote = RemoteContexts::fetch(&loader, &doc, None, None).await?;
        assert!(matches!(
            ActiveContext::new(None).process(&doc["@context"], None, &remote),
            Err(JsonLdError::RecursiveContextInclusion(_))
        ));
        Ok(())
    }

    #[tokio::test]
    async fn invalid_remote_context() {
        let loader = StaticLoader::new().with("urn:ctx", json!({"foo": "bar"}));
        let doc = json!({"@context": "urn:ctx"});
        assert!(matches!(
            RemoteContexts::fetch(&loader, &doc, None, None).await,
            Err(JsonLdError::InvalidRemoteContext(_))
        ));
    }
}
