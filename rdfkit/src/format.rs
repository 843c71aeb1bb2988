//! Registry of the concrete syntaxes bundled with this crate.
use std::fmt;

use log::debug;
use rdfkit_adapter::{ParserAdapter, SerializerAdapter};
use rdfkit_jsonld::{JsonLdParser, JsonLdSerializer};
use rdfkit_turtle::parser::nt::NTriplesParser;
use rdfkit_turtle::parser::turtle::TurtleParser;
use rdfkit_turtle::serializer::nt::NTriplesSerializer;
use rdfkit_turtle::serializer::turtle::TurtleSerializer;
use rdfkit_xml::parser::RdfXmlParser;
use rdfkit_xml::serializer::RdfXmlSerializer;

/// A concrete syntax of RDF, with a bundled parser and serializer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// [Turtle](https://www.w3.org/TR/turtle/)
    Turtle,
    /// [N-Triples](https://www.w3.org/TR/n-triples/)
    NTriples,
    /// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/)
    RdfXml,
    /// [JSON-LD](https://www.w3.org/TR/json-ld11/)
    JsonLd,
}

impl Format {
    /// All the bundled formats.
    pub const ALL: [Format; 4] = [
        Format::Turtle,
        Format::NTriples,
        Format::RdfXml,
        Format::JsonLd,
    ];

    /// An adapter around the default parser for this format.
    pub fn parser(self) -> ParserAdapter {
        let adapter = match self {
            Format::Turtle => ParserAdapter::from_sync(TurtleParser::default()),
            Format::NTriples => ParserAdapter::from_sync(NTriplesParser {}),
            Format::RdfXml => ParserAdapter::from_sync(RdfXmlParser::default()),
            Format::JsonLd => ParserAdapter::from_async(JsonLdParser::new()),
        };
        adapter.with_label(self.name())
    }

    /// An adapter around the default serializer for this format.
    pub fn serializer(self) -> SerializerAdapter {
        let adapter = match self {
            Format::Turtle => SerializerAdapter::from_sync(TurtleSerializer {}),
            Format::NTriples => SerializerAdapter::from_sync(NTriplesSerializer {}),
            Format::RdfXml => SerializerAdapter::from_sync(RdfXmlSerializer::new()),
            Format::JsonLd => SerializerAdapter::from_sync(JsonLdSerializer::new()),
        };
        adapter.with_label(self.name())
    }

    /// The human readable name of this format.
    pub fn name(self) -> &'static str {
        match self {
            Format::Turtle => "Turtle",
            Format::NTriples => "N-Triples",
            Format::RdfXml => "RDF/XML",
            Format::JsonLd => "JSON-LD",
        }
    }

    /// The registered media type of this format.
    pub fn media_type(self) -> &'static str {
        match self {
            Format::Turtle => "text/turtle",
            Format::NTriples => "application/n-triples",
            Format::RdfXml => "application/rdf+xml",
            Format::JsonLd => "application/ld+json",
        }
    }

    /// The usual file extension of this format (without the leading dot).
    pub fn extension(self) -> &'static str {
        match self {
            Format::Turtle => "ttl",
            Format::NTriples => "nt",
            Format::RdfXml => "rdf",
            Format::JsonLd => "jsonld",
        }
    }

    /// Find the format of a media type.
    ///
    /// Parameters (such as `charset`) are ignored, and so is case.
    pub fn from_media_type(media_type: &str) -> Option<Format> {
        let essence = media_type.split(';').next().unwrap_or_default().trim();
        let found = Self::ALL
            .into_iter()
            .find(|f| f.media_type().eq_ignore_ascii_case(essence));
        if found.is_none() {
            debug!("unsupported media type {media_type:?}");
        }
        found
    }

    /// Find the format of a file extension (with or without the leading dot).
    pub fn from_extension(extension: &str) -> Option<Format> {
        let ext = extension.strip_prefix('.').unwrap_or(extension);
        match ext.to_ascii_lowercase().as_str() {
            "ttl" => Some(Format::Turtle),
            "nt" => Some(Format::NTriples),
            "rdf" | "xml" | "owl" => Some(Format::RdfXml),
            "jsonld" | "json" => Some(Format::JsonLd),
            _ => {
                debug!("unsupported file extension {extension:?}");
                None
            }
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
