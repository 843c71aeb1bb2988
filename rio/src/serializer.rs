//! Common implementations for adapting
//! [RIO](https://docs.rs/rio_api/) serializers.
use rdfkit_api::graph::Graph;
use rdfkit_api::ns::xsd;
use rdfkit_api::term::{LiteralKind, Term};
use rdfkit_api::triple::Triple;
use rio_api::formatter::TriplesFormatter;
use rio_api::model as rio;

/// Format all triples of `graph` using `tf`, in the iteration order of the graph.
pub fn format_rio<TF>(tf: &mut TF, graph: &Graph) -> Result<(), TF::Error>
where
    TF: TriplesFormatter,
{
    for t in graph {
        if let Some(rt) = rio_triple(t) {
            tf.format(&rt)?;
        }
    }
    log::trace!("formatted {} triple(s)", graph.len());
    Ok(())
}

/// Borrow `t` as a Rio triple.
pub fn rio_triple(t: &Triple) -> Option<rio::Triple<'_>> {
    let subject = match t.subject() {
        Term::NamedNode(n) => rio::NamedNode { iri: n.as_str() }.into(),
        Term::BlankNode(b) => rio::BlankNode { id: b.id() }.into(),
        Term::Literal(_) => return None, // never built by Triple::new
    };
    Some(rio::Triple {
        subject,
        predicate: rio::NamedNode {
            iri: t.predicate().as_str(),
        },
        object: rio_term(t.object()),
    })
}

fn rio_term(term: &Term) -> rio::Term<'_> {
    match term {
        Term::NamedNode(n) => rio::NamedNode { iri: n.as_str() }.into(),
        Term::BlankNode(b) => rio::BlankNode { id: b.id() }.into(),
        Term::Literal(lit) => match lit.kind() {
            LiteralKind::Lang(tag) => rio::Literal::LanguageTaggedString {
                value: lit.value(),
                language: &**tag,
            }
            .into(),
            LiteralKind::Datatype(dt) if *dt == *xsd::string => {
                rio::Literal::Simple { value: lit.value() }.into()
            }
            LiteralKind::Datatype(dt) => rio::Literal::Typed {
                value: lit.value(),
                datatype: rio::NamedNode { iri: dt.as_str() },
            }
            .into(),
        },
    }
}
