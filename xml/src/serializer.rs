//! Serializer for the [RDF/XML] concrete syntax of RDF.
//! based on [`rio_xml`].
//!
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/
use rdfkit_api::graph::Graph;
use rdfkit_api::serializer::{SerializeError, SyncSerializer};
use rdfkit_rio::serializer::format_rio;
use rio_xml::RdfXmlFormatter;

/// RDF/XML serializer configuration.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlConfig {
    indentation: usize,
}

impl RdfXmlConfig {
    /// Size of the indentation to use in the serialization.
    /// (defaults to 0, meaning no indentation nor linebreaks)
    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// Build a new default [`RdfXmlConfig`]
    pub fn new() -> Self {
        Default::default()
    }

    /// Transform an [`RdfXmlConfig`] by setting the [`indentation`](RdfXmlConfig::indentation).
    pub fn with_indentation(mut self, i: usize) -> Self {
        self.indentation = i;
        self
    }
}

/// RDF/XML serializer.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlSerializer {
    config: RdfXmlConfig,
}

impl RdfXmlSerializer {
    /// Build a new RDF/XML serializer with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a new RDF/XML serializer with the given config.
    pub fn new_with_config(config: RdfXmlConfig) -> Self {
        RdfXmlSerializer { config }
    }

    /// Borrow this serializer's configuration.
    pub fn config(&self) -> &RdfXmlConfig {
        &self.config
    }
}

impl SyncSerializer for RdfXmlSerializer {
    fn serialize(&self, graph: &Graph) -> Result<String, SerializeError> {
        let mut buf = Vec::new();
        let mut tf = if self.config.indentation > 0 {
            RdfXmlFormatter::with_indentation(&mut buf, self.config.indentation)
        } else {
            RdfXmlFormatter::new(&mut buf)
        }?;
        format_rio(&mut tf, graph)?;
        tf.finish()?;
        String::from_utf8(buf).map_err(SerializeError::with_source)
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
