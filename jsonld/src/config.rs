//! JSON-LD serializer configuration.

/// JSON-LD serializer configuration.
#[derive(Clone, Debug, Default)]
pub struct JsonLdConfig {
    /// Whether the output is pretty-printed (one key per line, indented)
    /// rather than compact.
    pub pretty: bool,

    /// The [`useNativeTypes`] flag, which causes the `Serialize RDF as JSON-LD Algorithm`
    /// to use native JSON values in value objects avoiding the need for an explicit `@type`.
    ///
    /// [`useNativeTypes`]: https://www.w3.org/TR/json-ld11-api/#dom-jsonldoptions-usenativetypes
    pub use_native_types: bool,

    /// The [`useRdfType`] flag, which enables special rules for the `Serialize RDF as JSON-LD
    /// Algorithm` causing `rdf:type` properties to be kept as IRIs in the output, rather than use
    /// `@type`.
    ///
    /// [`useRdfType`]: https://www.w3.org/TR/json-ld11-api/#dom-jsonldoptions-userdftype
    pub use_rdf_type: bool,
}

impl JsonLdConfig {
    /// Build a new JSON-LD serializer configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the output is pretty-printed.
    pub fn with_pretty(mut self, flag: bool) -> Self {
        self.pretty = flag;
        self
    }

    /// Set the [`useNativeTypes`] flag.
    ///
    /// [`useNativeTypes`]: https://www.w3.org/TR/json-ld11-api/#dom-jsonldoptions-usenativetypes
    pub fn with_native_types(mut self, flag: bool) -> Self {
        self.use_native_types = flag;
        self
    }

    /// Set the [`useRdfType`] flag.
    ///
    /// [`useRdfType`]: https://www.w3.org/TR/json-ld11-api/#dom-jsonldoptions-userdftype
    pub fn with_rdf_type(mut self, flag: bool) -> Self {
        self.use_rdf_type = flag;
        self
    }
}
