//! Standard namespaces used throughout the toolkit.
//!
//! NB: since `type` is a reserved keyword in Rust,
//! the term `rdf:type` spells `rdf::type_` (with a trailing underscore).
//!
//! ```
//! # use rdfkit_api::ns::{rdf, xsd};
//! assert_eq!(rdf::type_.as_str(), "http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
//! assert_eq!(xsd::integer.as_str(), "http://www.w3.org/2001/XMLSchema#integer");
//! ```

/// Define a namespace module: its prefix IRI, and one lazily built [`NamedNode`](crate::term::NamedNode)
/// per listed suffix.
macro_rules! namespace {
    ($iri_prefix:expr, $($suffix:ident),*; $($r_id:ident, $r_sf:expr),*) => {
        /// The IRI of this namespace.
        pub const PREFIX: &str = $iri_prefix;
        lazy_static::lazy_static! {
            $(
                #[allow(non_upper_case_globals)]
                pub static ref $suffix: $crate::term::NamedNode =
                    $crate::term::NamedNode::new_unchecked(concat!($iri_prefix, stringify!($suffix)));
            )*
            $(
                #[allow(non_upper_case_globals)]
                pub static ref $r_id: $crate::term::NamedNode =
                    $crate::term::NamedNode::new_unchecked(concat!($iri_prefix, $r_sf));
            )*
        }
    };
    ($iri_prefix:expr, $($suffix:ident),*) => {
        namespace!($iri_prefix, $($suffix),*;);
    };
}

/// The standard `rdf:` namespace.
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        first,
        langString,
        nil,
        rest,
        Property,
        Statement,
        subject,
        predicate,
        object,
        XMLLiteral;
        type_, "type"
    );
}

/// The standard `xsd:` namespace.
pub mod xsd {
    namespace!(
        "http://www.w3.org/2001/XMLSchema#",
        anyURI,
        boolean,
        date,
        dateTime,
        decimal,
        double,
        float,
        hexBinary,
        int,
        integer,
        long,
        string
    );
}
