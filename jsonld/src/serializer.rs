//! A JSON-LD serializer implementing the
//! [`Serialize RDF as JSON-LD Algorithm`], producing the expanded document form.
//!
//! [`Serialize RDF as JSON-LD Algorithm`]: https://www.w3.org/TR/json-ld11-api/#serialize-rdf-as-json-ld-algorithm
use rdfkit_api::graph::Graph;
use rdfkit_api::ns::{rdf, xsd};
use rdfkit_api::serializer::{SerializeError, SyncSerializer};
use rdfkit_api::term::{Literal, LiteralKind, Term};
use serde_json::{Map, Number, Value};

use crate::config::JsonLdConfig;
use crate::to_rdf::canonical_double;


/// A JSON-LD serializer.
///
/// Each subject of the graph is serialized as one node object;
/// lists are kept as `rdf:first`/`rdf:rest` chains.
#[derive(Clone, Debug, Default)]
pub struct JsonLdSerializer {
    config: JsonLdConfig,
}

impl JsonLdSerializer {
    /// Build a new JSON-LD serializer with the default config.
    #[inline]
    pub fn new() -> JsonLdSerializer {
        Self::default()
    }

    /// Build a new JSON-LD serializer with the given config.
    pub fn new_with_config(config: JsonLdConfig) -> JsonLdSerializer {
        JsonLdSerializer { config }
    }

    /// Borrow this serializer's configuration.
    pub fn config(&self) -> &JsonLdConfig {
        &self.config
    }

    /// Convert a graph into a JSON-LD document in expanded form.
    pub fn to_json(&self, graph: &Graph) -> Value {
        let mut nodes: Vec<Map<String, Value>> = vec![];
        let mut current = None;
        for triple in graph {
            if current != Some(triple.subject()) {
                let mut node = Map::new();
                node.insert("@id".into(), node_id(triple.subject()).into());
                nodes.push(node);
                current = Some(triple.subject());
            }
            let Some(node) = nodes.last_mut() else {
                continue;
            };
            let (key, value) = if !self.config.use_rdf_type
                && triple.predicate() == &*rdf::type_
                && !triple.object().is_literal()
            {
                ("@type".to_string(), node_id(triple.object()).into())
            } else {
                (
                    triple.predicate().as_str().to_string(),
                    self.object(triple.object()),
                )
            };
            if let Value::Array(values) = node.entry(key).or_insert_with(|| Value::Array(vec![])) {
                values.push(value);
            }
        }
        Value::Array(nodes.into_iter().map(Value::Object).collect())
    }

    fn object(&self, term: &Term) -> Value {
        let mut obj = Map::new();
        match term {
            Term::Literal(lit) => {
                if let Some(native) = self.native_value(lit) {
                    obj.insert("@value".into(), native);
                } else {
                    obj.insert("@value".into(), lit.value().into());
                    match lit.kind() {
                        LiteralKind::Lang(tag) => {
                            obj.insert("@language".into(), Value::from(&**tag));
                        }
                        LiteralKind::Datatype(datatype) if datatype != &*xsd::string => {
                            obj.insert("@type".into(), datatype.as_str().into());
                        }
                        LiteralKind::Datatype(_) => {}
                    }
                }
            }
            _ => {
                obj.insert("@id".into(), node_id(term).into());
            }
        }
        Value::Object(obj)
    }

    /// The native JSON value of `lit`, if native types are enabled
    /// and `lit` converts back to the same literal.
    fn native_value(&self, lit: &Literal) -> Option<Value> {
        if !self.config.use_native_types {
            return None;
        }
        let datatype = lit.datatype()?;
        let value = lit.value();
        if datatype == &*xsd::boolean {
            match value {
                "true" => Some(Value::Bool(true)),
                "false" => Some(Value::Bool(false)),
                _ => None,
            }
        } else if datatype == &*xsd::integer {
            value
                .parse::<i64>()
                .ok()
                .filter(|i| i.to_string() == value)
                .map(Value::from)
        } else if datatype == &*xsd::double {
            value
                .parse::<f64>()
                .ok()
                .filter(|f| canonical_double(*f) == value)
                // integral numbers are read back as xsd:integer
                .filter(|f| f.fract() != 0.0 || f.abs() >= 1e21)
                .and_then(Number::from_f64)
                .map(Value::Number)
        } else {
            None
        }
    }
}

impl SyncSerializer for JsonLdSerializer {
    fn serialize(&self, graph: &Graph) -> Result<String, SerializeError> {
        let json = self.to_json(graph);
        let txt = if self.config.pretty {
            serde_json::to_string_pretty(&json)
        } else {
            serde_json::to_string(&json)
        };
        txt.map_err(SerializeError::with_source)
    }
}

fn node_id(term: &Term) -> String {
    match term {
        Term::BlankNode(bnode) => format!("_:{}", bnode.id()),
        other => other.value().to_string(),
    }
}
