use super::*;
use crate::ns::{rdf, xsd};
use test_case::test_case;

#[test_case("<http://example.org/>"; "iri")]
#[test_case("<tag:x>"; "non-http iri")]
#[test_case("_:b0"; "blank node")]
#[test_case("_:a.b-c"; "blank node with punctuation")]
#[test_case(r#""hello""#; "simple literal")]
#[test_case(r#""""#; "empty literal")]
#[test_case(r#""chat"@fr"#; "language tagged literal")]
#[test_case(r#""colour"@en-GB"#; "language tagged literal with region")]
#[test_case(r#""42"^^<http://www.w3.org/2001/XMLSchema#integer>"#; "typed literal")]
#[test_case(r#""a \"quoted\"\nline\\"@en"#; "escaped literal")]
#[test_case(r#""bell\u0007""#; "control character")]
fn canonical_round_trip(txt: &str) {
    let term: Term = txt.parse().unwrap();
    assert_eq!(term.to_string(), txt);
    let again: Term = term.to_string().parse().unwrap();
    assert_eq!(again, term);
}

#[test_case(r#""caf\u00E9""#, "café"; "short unicode escape")]
#[test_case(r#""\U0001F600""#, "\u{1F600}"; "long unicode escape")]
#[test_case(r#""tab\there""#, "tab\there"; "tab")]
#[test_case(r#""it\'s""#, "it's"; "single quote")]
fn unescape(txt: &str, expected: &str) {
    let term: Term = txt.parse().unwrap();
    assert_eq!(term.value(), expected);
}

#[test_case("http://example.org/x"; "iri")]
#[test_case("multi\nline \"quoted\" \\ text"; "special characters")]
#[test_case("\u{0}\u{1f}\u{7f}"; "control characters")]
#[test_case("日本語"; "non-ascii")]
fn escape_round_trip(value: &str) {
    let lit = Literal::simple(value);
    let parsed: Term = lit.to_string().parse().unwrap();
    assert_eq!(parsed, lit);
    assert_eq!(parsed.value(), value);
}

#[test_case(""; "empty")]
#[test_case("http://example.org/"; "missing bracket")]
#[test_case("<http://example.org/"; "unclosed iri")]
#[test_case("<>"; "empty iri")]
#[test_case("_:"; "empty blank node id")]
#[test_case("_:a b"; "blank node id with space")]
#[test_case(r#""unterminated"#; "unterminated string")]
#[test_case(r#""x"@"#; "empty language tag")]
#[test_case(r#""x"@en_US"#; "bad language tag")]
#[test_case(r#""x"^^_:b"#; "blank datatype")]
#[test_case(r#""x"foo"#; "garbage after string")]
#[test_case(r#""bad \q escape""#; "bad escape")]
fn unparsable(txt: &str) {
    assert!(txt.parse::<Term>().is_err());
}

#[test]
fn empty_iri() {
    assert_eq!(NamedNode::new(""), Err(InvalidTermError::EmptyIri));
    assert!(NamedNode::new("x:").is_ok());
}

#[test_case("x"; "relative")]
#[test_case("../a/b"; "relative path")]
#[test_case("#me"; "fragment only")]
#[test_case("http://example.org/a b"; "space")]
#[test_case("http://example.org/a>b"; "closing bracket")]
#[test_case("http://example.org/<a>"; "angle brackets")]
#[test_case("http://example.org/\"a\""; "quotes")]
fn invalid_iri(iri: &str) {
    assert!(matches!(
        NamedNode::new(iri),
        Err(InvalidTermError::InvalidIri { .. })
    ));
}

#[test]
fn invalid_iri_in_canonical_form() {
    assert!("<not an iri>".parse::<Term>().is_err());
    assert!("<relative>".parse::<Term>().is_err());
}

#[test_case(""; "empty")]
#[test_case("a b"; "space")]
#[test_case("a."; "trailing dot")]
#[test_case("_:a"; "prefix included")]
fn invalid_blank_node_id(id: &str) {
    assert_eq!(
        BlankNode::new(id),
        Err(InvalidTermError::InvalidBlankNodeId(id.to_string()))
    );
}

#[test_case("en")]
#[test_case("en-US")]
#[test_case("zh-Hant-TW")]
fn valid_language_tag(tag: &str) {
    let lit = Literal::lang("x", tag).unwrap();
    assert_eq!(lit.language(), Some(tag));
    assert_eq!(lit.datatype(), None);
    assert_eq!(lit.effective_datatype(), &*rdf::langString);
}

#[test_case(""; "empty")]
#[test_case("en_US"; "underscore")]
#[test_case("-en"; "leading hyphen")]
#[test_case("toolongsubtag"; "subtag too long")]
fn invalid_language_tag(tag: &str) {
    assert_eq!(
        Literal::lang("x", tag),
        Err(InvalidTermError::InvalidLanguageTag(tag.to_string()))
    );
}

#[test]
fn literal_with_language_and_datatype() {
    let err = Literal::new("x", Some("en"), Some(xsd::string.clone())).unwrap_err();
    assert!(matches!(err, InvalidTermError::LanguageAndDatatype { .. }));
    assert!(err.to_string().contains("both a language tag"));
}

#[test]
fn literal_defaults_to_xsd_string() {
    let lit = Literal::new("x", None, None).unwrap();
    assert_eq!(lit, Literal::simple("x"));
    assert_eq!(lit, Literal::typed("x", xsd::string.clone()));
    assert!(lit.is_simple());
    assert_eq!(lit.to_string(), r#""x""#);
}

#[test]
fn literal_equality_is_component_wise() {
    let simple = Literal::simple("1");
    let int = Literal::typed("1", xsd::integer.clone());
    let en = Literal::lang("1", "en").unwrap();
    let fr = Literal::lang("1", "fr").unwrap();
    assert_ne!(simple, int);
    assert_ne!(simple, en);
    assert_ne!(en, fr);
    assert_ne!(int, Literal::typed("01", xsd::integer.clone()));
}

#[test]
fn term_kinds_are_distinct() {
    let n: Term = NamedNode::new("x:").unwrap().into();
    let b: Term = BlankNode::new("x").unwrap().into();
    let l: Term = Literal::simple("x:").into();
    assert_eq!(n.kind(), TermKind::NamedNode);
    assert_eq!(b.kind(), TermKind::BlankNode);
    assert_eq!(l.kind(), TermKind::Literal);
    assert_ne!(n, b);
    assert_ne!(b, l);
    assert_ne!(n, l);
    assert_eq!(n.value(), l.value());
    assert_eq!(b.value(), "x");
}

#[test]
fn fresh_blank_nodes_are_distinct() {
    let bnodes: std::collections::BTreeSet<BlankNode> =
        (0..100).map(|_| BlankNode::fresh()).collect();
    assert_eq!(bnodes.len(), 100);
    for b in &bnodes {
        let parsed: Term = b.to_string().parse().unwrap();
        assert_eq!(parsed, Term::from(b.clone()));
    }
}

#[test]
fn fresh_blank_nodes_never_clash_with_given_ids() {
    let fresh = BlankNode::fresh();
    assert!(BlankNode::new(fresh.id()).is_err());
    for i in 0..8 {
        for prefix in ["b", "g"] {
            let given = BlankNode::new(format!("{prefix}{i}")).unwrap();
            assert_ne!(fresh, given);
        }
    }
}
