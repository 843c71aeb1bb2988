//! Conversion of a JSON-LD document into RDF triples,
//! performing the expansion of the document on the fly.
use std::collections::HashMap;

use rdfkit_api::graph::Graph;
use rdfkit_api::ns::{rdf, xsd};
use rdfkit_api::term::{BlankNode, Literal, NamedNode, Term};
use rdfkit_api::triple::Triple;
use serde_json::{Map, Number, Value};

use crate::context::{is_absolute, ActiveContext, Container, RemoteContexts, TermDefinition, TypeMapping};
use crate::error::JsonLdError;

/// The state of the conversion of one document.
pub(crate) struct ToRdf<'a> {
    remote: &'a RemoteContexts,
    base_url: Option<&'a str>,
    labels: HashMap<String, BlankNode>,
    graph: Graph,
}

/// An entry of a JSON object, with its key expanded.
struct Entry<'v> {
    expanded: String,
    key: &'v str,
    value: &'v Value,
}

impl<'a> ToRdf<'a> {
    pub fn new(remote: &'a RemoteContexts, base_url: Option<&'a str>) -> Self {
        ToRdf {
            remote,
            base_url,
            labels: HashMap::new(),
            graph: Graph::new(),
        }
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// Convert a whole document.
    pub fn document(&mut self, doc: &Value, ctx: &ActiveContext) -> Result<(), JsonLdError> {
        match doc {
            Value::Array(items) => {
                for item in items {
                    self.top_level(item, ctx)?;
                }
                Ok(())
            }
            Value::Object(_) => self.top_level(doc, ctx),
            _ => Err(JsonLdError::InvalidDocument(
                "a JSON-LD document must be an object or an array".into(),
            )),
        }
    }

    fn top_level(&mut self, item: &Value, ctx: &ActiveContext) -> Result<(), JsonLdError> {
        match item {
            Value::Object(obj) => {
                let ctx = self.embedded_context(obj, ctx)?;
                let entries = expand_entries(obj, &ctx);
                if !entries.iter().any(|e| is_value_or_list(&e.expanded)) {
                    self.node(&entries, &ctx)?;
                }
                Ok(())
            }
            Value::Array(items) => {
                for item in items {
                    self.top_level(item, ctx)?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn embedded_context(
        &self,
        obj: &Map<String, Value>,
        ctx: &ActiveContext,
    ) -> Result<ActiveContext, JsonLdError> {
        match obj.get("@context") {
            Some(local) => ctx.process(local, self.base_url, self.remote),
            None => Ok(ctx.clone()),
        }
    }

    /// Convert a node object, returning its identifier.
    ///
    /// Nodes with a relative IRI as `@id` produce no triple,
    /// but their embedded nodes still do.
    /// Nodes with only a `@graph` entry (and possibly an `@id`)
    /// merely contribute the content of that graph, and are identified by `None`.
    fn node(&mut self, entries: &[Entry], ctx: &ActiveContext) -> Result<Option<Term>, JsonLdError> {
        let subject = match entries.iter().find(|e| e.expanded == "@id") {
            Some(entry) => {
                let Value::String(id) = entry.value else {
                    return Err(JsonLdError::InvalidDocument(format!(
                        "@id must be a string, found {}",
                        entry.value
                    )));
                };
                self.node_id(id, ctx, false)?
            }
            None if entries
                .iter()
                .all(|e| matches!(e.expanded.as_str(), "@graph" | "@index")) =>
            {
                None
            }
            None => Some(BlankNode::fresh().into()),
        };

        let mut prop_ctx = ctx.clone();
        if let Some(entry) = entries.iter().find(|e| e.expanded == "@type") {
            let mut types: Vec<&str> = as_slice(entry.value)
                .iter()
                .map(|t| {
                    t.as_str().ok_or_else(|| {
                        JsonLdError::InvalidDocument(format!("@type must be a string, found {t}"))
                    })
                })
                .collect::<Result<_, _>>()?;
            types.sort_unstable();
            for typ in types {
                if let Some(scoped) = ctx.term(typ).and_then(|d| d.context.as_ref()) {
                    let scoped_base = ctx.term(typ).and_then(|d| d.context_base.as_deref());
                    prop_ctx = prop_ctx.process(scoped, scoped_base, self.remote)?;
                }
                if let (Some(s), Some(o)) = (&subject, self.node_id(typ, ctx, true)?) {
                    self.emit(s, &rdf::type_, o)?;
                }
            }
        }

        self.properties(subject.as_ref(), entries, &prop_ctx)?;
        Ok(subject)
    }

    fn properties(
        &mut self,
        subject: Option<&Term>,
        entries: &[Entry],
        ctx: &ActiveContext,
    ) -> Result<(), JsonLdError> {
        for entry in entries {
            match entry.expanded.as_str() {
                "@id" | "@type" | "@context" | "@index" => {}
                "@graph" | "@included" => {
                    for item in as_slice(entry.value) {
                        self.top_level(item, ctx)?;
                    }
                }
                "@reverse" => {
                    let Value::Object(obj) = entry.value else {
                        return Err(JsonLdError::InvalidDocument(
                            "@reverse must be an object".into(),
                        ));
                    };
                    for reverse in expand_entries(obj, ctx) {
                        let Some(predicate) = predicate(&reverse.expanded) else {
                            continue;
                        };
                        let def = ctx.term(reverse.key);
                        let objects = self.objects(reverse.value, def, ctx)?;
                        if let Some(s) = subject {
                            for o in objects.into_iter().filter(|o| !o.is_literal()) {
                                self.emit(&o, &predicate, s.clone())?;
                            }
                        }
                    }
                }
                "@nest" => {
                    for nested in as_slice(entry.value) {
                        let Value::Object(obj) = nested else {
                            return Err(JsonLdError::InvalidDocument(
                                "@nest values must be objects".into(),
                            ));
                        };
                        let nested_entries = expand_entries(obj, ctx);
                        self.properties(subject, &nested_entries, ctx)?;
                    }
                }
                key if key.starts_with('@') => {
                    return Err(JsonLdError::InvalidDocument(format!(
                        "unexpected {key} in a node object"
                    )))
                }
                iri => {
                    let Some(predicate) = predicate(iri) else {
                        continue;
                    };
                    let def = ctx.term(entry.key);
                    let value_ctx = match def.and_then(|d| d.context.as_ref()) {
                        Some(scoped) => {
                            let base = def.and_then(|d| d.context_base.as_deref());
                            ctx.process(scoped, base, self.remote)?
                        }
                        None => ctx.clone(),
                    };
                    let objects = self.property_values(entry.value, def, &value_ctx)?;
                    let Some(s) = subject else {
                        continue;
                    };
                    if def.is_some_and(|d| d.reverse) {
                        for o in objects.into_iter().filter(|o| !o.is_literal()) {
                            self.emit(&o, &predicate, s.clone())?;
                        }
                    } else {
                        for o in objects {
                            self.emit(s, &predicate, o)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// The objects of a property, honouring the container mapping of its term.
    fn property_values(
        &mut self,
        value: &Value,
        def: Option<&TermDefinition>,
        ctx: &ActiveContext,
    ) -> Result<Vec<Term>, JsonLdError> {
        let container = |c| def.is_some_and(|d| d.has_container(c));
        match value {
            Value::Object(map) if container(Container::Language) => {
                let mut objects = vec![];
                for (tag, values) in map {
                    for value in as_slice(values) {
                        match value {
                            Value::String(text) if tag == "@none" => {
                                objects.push(Literal::simple(text.as_str()).into())
                            }
                            Value::String(text) => objects.push(Literal::lang(text.as_str(), tag)?.into()),
                            Value::Null => {}
                            other => {
                                return Err(JsonLdError::InvalidDocument(format!(
                                    "invalid language map value {other}"
                                )))
                            }
                        }
                    }
                }
                Ok(objects)
            }
            Value::Object(map) if container(Container::Index) && !is_value_or_node_with_keyword(map, ctx) => {
                let mut objects = vec![];
                for values in map.values() {
                    objects.extend(self.objects(values, def, ctx)?);
                }
                Ok(objects)
            }
            _ if container(Container::List) && !is_list_object(value, ctx) => {
                Ok(vec![self.list(value, def, ctx)?])
            }
            _ => self.objects(value, def, ctx),
        }
    }

    fn objects(
        &mut self,
        value: &Value,
        def: Option<&TermDefinition>,
        ctx: &ActiveContext,
    ) -> Result<Vec<Term>, JsonLdError> {
        let mut objects = vec![];
        for item in as_slice(value) {
            objects.extend(self.object(item, def, ctx)?);
        }
        Ok(objects)
    }

    /// The objects denoted by a single (non-array) JSON value.
    fn object(
        &mut self,
        value: &Value,
        def: Option<&TermDefinition>,
        ctx: &ActiveContext,
    ) -> Result<Vec<Term>, JsonLdError> {
        let type_mapping = def.and_then(|d| d.type_mapping.as_ref());
        let term = match value {
            Value::Null => None,
            Value::String(text) => match type_mapping {
                Some(TypeMapping::Id) => self.node_id(text, ctx, false)?,
                Some(TypeMapping::Vocab) => self.node_id(text, ctx, true)?,
                Some(TypeMapping::Iri(datatype)) => {
                    Some(Literal::typed(text.as_str(), NamedNode::new(datatype.as_str())?).into())
                }
                None => {
                    let language = match def.and_then(|d| d.language.as_ref()) {
                        Some(language) => language.as_deref(),
                        None => ctx.language(),
                    };
                    Some(Literal::new(text.as_str(), language, None)?.into())
                }
            },
            Value::Number(number) => {
                let datatype = match type_mapping {
                    Some(TypeMapping::Iri(datatype)) => Some(NamedNode::new(datatype.as_str())?),
                    _ => None,
                };
                Some(number_literal(number, datatype).into())
            }
            Value::Bool(flag) => {
                let datatype = match type_mapping {
                    Some(TypeMapping::Iri(datatype)) => NamedNode::new(datatype.as_str())?,
                    _ => xsd::boolean.clone(),
                };
                Some(Literal::typed(flag.to_string(), datatype).into())
            }
            Value::Object(obj) => {
                let ctx = self.embedded_context(obj, ctx)?;
                let entries = expand_entries(obj, &ctx);
                if entries.iter().any(|e| e.expanded == "@value") {
                    self.value_object(&entries, &ctx)?
                } else if let Some(entry) = entries.iter().find(|e| e.expanded == "@list") {
                    Some(self.list(entry.value, def, &ctx)?)
                } else if let Some(entry) = entries.iter().find(|e| e.expanded == "@set") {
                    return self.objects(entry.value, def, &ctx);
                } else {
                    self.node(&entries, &ctx)?
                }
            }
            Value::Array(_) => return self.objects(value, def, ctx),
        };
        Ok(term.into_iter().collect())
    }

    fn value_object(
        &mut self,
        entries: &[Entry],
        ctx: &ActiveContext,
    ) -> Result<Option<Term>, JsonLdError> {
        let mut value = &Value::Null;
        let mut language = None;
        let mut datatype = None;
        for entry in entries {
            match entry.expanded.as_str() {
                "@value" => value = entry.value,
                "@language" => match entry.value {
                    Value::String(tag) => language = Some(tag.as_str()),
                    Value::Null => {}
                    other => {
                        return Err(JsonLdError::InvalidValueObject(format!(
                            "invalid language {other}"
                        )))
                    }
                },
                "@type" => {
                    let iri = entry
                        .value
                        .as_str()
                        .and_then(|t| ctx.expand_iri(t, true, true))
                        .filter(|iri| is_absolute(iri))
                        .ok_or_else(|| {
                            JsonLdError::InvalidValueObject(format!(
                                "invalid typed value {}",
                                entry.value
                            ))
                        })?;
                    datatype = Some(NamedNode::new(iri)?);
                }
                "@index" | "@direction" | "@context" => {}
                other => {
                    return Err(JsonLdError::InvalidValueObject(format!(
                        "unexpected entry {other}"
                    )))
                }
            }
        }
        if language.is_some() && datatype.is_some() {
            return Err(JsonLdError::InvalidValueObject(
                "@language and @type can not be combined".into(),
            ));
        }
        match value {
            Value::Null => Ok(None),
            Value::String(text) => Ok(Some(Literal::new(text.as_str(), language, datatype)?.into())),
            Value::Number(number) if language.is_none() => {
                Ok(Some(number_literal(number, datatype).into()))
            }
            Value::Bool(flag) if language.is_none() => Ok(Some(
                Literal::typed(flag.to_string(), datatype.unwrap_or_else(|| xsd::boolean.clone())).into(),
            )),
            other => Err(JsonLdError::InvalidValueObject(format!(
                "invalid @value {other}"
            ))),
        }
    }

    /// Build an RDF collection, returning its head.
    fn list(
        &mut self,
        value: &Value,
        def: Option<&TermDefinition>,
        ctx: &ActiveContext,
    ) -> Result<Term, JsonLdError> {
        let mut items = vec![];
        for item in as_slice(value) {
            match item {
                Value::Array(_) => items.push(self.list(item, def, ctx)?),
                _ => items.extend(self.object(item, def, ctx)?),
            }
        }
        let mut head: Term = rdf::nil.clone().into();
        for item in items.into_iter().rev() {
            let node: Term = BlankNode::fresh().into();
            self.emit(&node, &rdf::first, item)?;
            self.emit(&node, &rdf::rest, head)?;
            head = node;
        }
        Ok(head)
    }

    /// The node identified by `id`, or `None` if `id` does not expand to an absolute IRI.
    fn node_id(
        &mut self,
        id: &str,
        ctx: &ActiveContext,
        vocab: bool,
    ) -> Result<Option<Term>, JsonLdError> {
        let Some(iri) = ctx.expand_iri(id, true, vocab) else {
            return Ok(None);
        };
        if let Some(label) = iri.strip_prefix("_:") {
            let node = self
                .labels
                .entry(label.to_string())
                .or_insert_with(BlankNode::fresh);
            return Ok(Some(node.clone().into()));
        }
        if is_absolute(&iri) {
            Ok(Some(NamedNode::new(iri)?.into()))
        } else {
            Ok(None)
        }
    }

    fn emit(&mut self, subject: &Term, predicate: &NamedNode, object: Term) -> Result<(), JsonLdError> {
        self.graph
            .add(Triple::new(subject.clone(), predicate.clone(), object)?);
        Ok(())
    }
}

fn expand_entries<'v>(obj: &'v Map<String, Value>, ctx: &ActiveContext) -> Vec<Entry<'v>> {
    obj.iter()
        .filter(|(key, _)| key.as_str() != "@context")
        .filter_map(|(key, value)| {
            Some(Entry {
                expanded: ctx.expand_key(key)?,
                key,
                value,
            })
        })
        .collect()
}

fn as_slice(value: &Value) -> &[Value] {
    match value {
        Value::Array(values) => values.as_slice(),
        other => std::slice::from_ref(other),
    }
}

fn is_value_or_list(expanded: &str) -> bool {
    matches!(expanded, "@value" | "@list" | "@set")
}

fn is_list_object(value: &Value, ctx: &ActiveContext) -> bool {
    match value {
        Value::Object(obj) => obj
            .keys()
            .any(|key| ctx.expand_key(key).as_deref() == Some("@list")),
        _ => false,
    }
}

fn is_value_or_node_with_keyword(obj: &Map<String, Value>, ctx: &ActiveContext) -> bool {
    obj.keys()
        .any(|key| matches!(ctx.expand_key(key).as_deref(), Some("@value" | "@id")))
}

/// Only absolute IRIs are valid predicates; blank node predicates are dropped.
fn predicate(iri: &str) -> Option<NamedNode> {
    if iri.starts_with("_:") || !is_absolute(iri) {
        return None;
    }
    NamedNode::new(iri).ok()
}

/// Convert a JSON number into a literal,
/// using the canonical lexical forms of `xsd:integer` and `xsd:double`.
fn number_literal(number: &Number, datatype: Option<NamedNode>) -> Literal {
    let is_double = datatype.as_ref() == Some(&*xsd::double);
    if !is_double {
        if number.is_i64() || number.is_u64() {
            let datatype = datatype.unwrap_or_else(|| xsd::integer.clone());
            return Literal::typed(number.to_string(), datatype);
        }
    }
    let float = number.as_f64().unwrap_or(f64::NAN);
    if !is_double && float.fract() == 0.0 && float.abs() < 1e21 {
        let datatype = datatype.unwrap_or_else(|| xsd::integer.clone());
        return Literal::typed(format!("{float:.0}"), datatype);
    }
    let datatype = datatype.unwrap_or_else(|| xsd::double.clone());
    Literal::typed(canonical_double(float), datatype)
}

/// The canonical lexical form of an `xsd:double`, e.g. `1.5E0` or `1.0E21`.
pub(crate) fn canonical_double(value: f64) -> String {
    let repr = format!("{value:E}");
    match repr.split_once('E') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{mantissa}.0E{exponent}")
        }
        _ => repr,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case(5.3, "5.3E0"; "decimal")]
    #[test_case(1e21, "1.0E21"; "large")]
    #[test_case(0.1, "1.0E-1"; "small")]
    #[test_case(-12.5, "-1.25E1"; "negative")]
    fn double_lexical_form(value: f64, expected: &str) {
        assert_eq!(canonical_double(value), expected);
    }

    #[test_case("42", "42", &*xsd::integer; "integer")]
    #[test_case("4.0", "4", &*xsd::integer; "integral float")]
    #[test_case("4.5", "4.5E0", &*xsd::double; "float")]
    #[test_case("1e21", "1.0E21", &*xsd::double; "huge")]
    fn number_literals(json: &str, lex: &str, datatype: &NamedNode) {
        let number: Number = serde_json::from_str(json).unwrap();
        let lit = number_literal(&number, None);
        assert_eq!(lit.value(), lex);
        assert_eq!(lit.datatype(), Some(datatype));
    }

    #[test]
    fn explicit_double() {
        let number: Number = serde_json::from_str("3").unwrap();
        let lit = number_literal(&number, Some(xsd::double.clone()));
        assert_eq!(lit.value(), "3.0E0");
        assert_eq!(lit.datatype(), Some(&*xsd::double));
    }
}
