//! A JSON-LD parser, converting JSON-LD documents into RDF graphs.
use futures_util::future::{BoxFuture, FutureExt};
use log::trace;
use oxiri::Iri;
use rdfkit_api::graph::Graph;
use rdfkit_api::parser::{AsyncParser, ParseError};
use serde_json::Value;

use crate::context::{ActiveContext, RemoteContexts};
use crate::error::JsonLdError;
use crate::options::JsonLdOptions;
use crate::to_rdf::ToRdf;


/// A JSON-LD parser.
///
/// Remote contexts are retrieved through the [loader](JsonLdOptions::loader) of its options,
/// which is why this parser is asynchronous.
/// Blank node labels of the document are mapped to fresh blank nodes on each parse.
#[derive(Clone, Debug, Default)]
pub struct JsonLdParser {
    options: JsonLdOptions,
}

impl JsonLdParser {
    /// Make a new [`JsonLdParser`] with the default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Make a new [`JsonLdParser`] with the given options
    pub fn new_with_options(options: JsonLdOptions) -> Self {
        JsonLdParser { options }
    }

    /// Borrow the options of this parser
    pub fn options(&self) -> &JsonLdOptions {
        &self.options
    }

    /// Parse (as RDF) a pre-parsed (as JSON) document.
    ///
    /// `base` overrides the base IRI of the options, if any.
    pub async fn parse_json(&self, doc: &Value, base: Option<&str>) -> Result<Graph, JsonLdError> {
        let base = base.or(self.options.base());
        if let Some(base) = base {
            Iri::parse(base).map_err(|err| JsonLdError::InvalidBaseIri {
                iri: base.to_string(),
                message: err.to_string(),
            })?;
        }
        let expand_context = self.options.expand_context();
        let remote =
            RemoteContexts::fetch(self.options.loader(), doc, expand_context, base).await?;
        trace!("retrieved {} remote context(s)", remote.len());

        let mut ctx = ActiveContext::new(base.map(str::to_string));
        if let Some(expand_context) = expand_context {
            ctx = ctx.process(expand_context, base, &remote)?;
        }
        let mut to_rdf = ToRdf::new(&remote, base);
        to_rdf.document(doc, &ctx)?;
        Ok(to_rdf.into_graph())
    }

    /// Parse (as RDF) a JSON-LD document.
    pub async fn parse_str(&self, text: &str, base: Option<&str>) -> Result<Graph, JsonLdError> {
        let doc: Value = serde_json::from_str(text)?;
        self.parse_json(&doc, base).await
    }
}

impl AsyncParser for JsonLdParser {
    fn parse<'a>(
        &'a self,
        text: &'a str,
        base: Option<&'a str>,
    ) -> BoxFuture<'a, Result<Graph, ParseError>> {
        async move { Ok(self.parse_str(text, base).await?) }.boxed()
    }
}
