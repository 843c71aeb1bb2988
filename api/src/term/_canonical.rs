//! Canonical (N-Triples) textual form of terms.
use super::{BlankNode, InvalidTermError, Literal, NamedNode, Term};
use std::fmt;

/// Write `value` as the content of an N-Triples string literal.
pub(crate) fn write_escaped(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    let mut start = 0;
    for (i, c) in value.char_indices() {
        let escaped = match c {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\n' => "\\n",
            '\r' => "\\r",
            c if (c as u32) < 0x20 || c == '\u{7f}' => "",
            _ => continue,
        };
        f.write_str(&value[start..i])?;
        if escaped.is_empty() {
            write!(f, "\\u{:04X}", c as u32)?;
        } else {
            f.write_str(escaped)?;
        }
        start = i + c.len_utf8();
    }
    f.write_str(&value[start..])
}

/// Parse the canonical form of a term, as produced by its `Display` implementation.
pub(crate) fn parse_term(txt: &str) -> Result<Term, InvalidTermError> {
    let unparsable = |reason| InvalidTermError::Unparsable {
        text: txt.to_string(),
        reason,
    };
    if let Some(rest) = txt.strip_prefix('<') {
        let iri = rest
            .strip_suffix('>')
            .ok_or_else(|| unparsable("missing closing '>'"))?;
        Ok(NamedNode::new(iri)?.into())
    } else if let Some(id) = txt.strip_prefix("_:") {
        Ok(BlankNode::from_canonical_id(id)?.into())
    } else if let Some(rest) = txt.strip_prefix('"') {
        let (value, suffix) = split_string(rest).ok_or_else(|| unparsable("unterminated string"))?;
        let value = unescape(value).ok_or_else(|| unparsable("invalid escape sequence"))?;
        if suffix.is_empty() {
            Ok(Literal::simple(value).into())
        } else if let Some(tag) = suffix.strip_prefix('@') {
            Ok(Literal::lang(value, tag)?.into())
        } else if let Some(dt) = suffix.strip_prefix("^^") {
            match parse_term(dt)? {
                Term::NamedNode(dt) => Ok(Literal::typed(value, dt).into()),
                _ => Err(unparsable("datatype must be an IRI")),
            }
        } else {
            Err(unparsable("unexpected text after string"))
        }
    } else {
        Err(unparsable("unrecognized term syntax"))
    }
}

/// Split the (escaped) content of a string from what follows its closing quote.
fn split_string(txt: &str) -> Option<(&str, &str)> {
    let mut escaped = false;
    for (i, c) in txt.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' => escaped = true,
            '"' => return Some((&txt[..i], &txt[i + 1..])),
            _ => {}
        }
    }
    None
}

fn unescape(txt: &str) -> Option<String> {
    let mut out = String::with_capacity(txt.len());
    let mut chars = txt.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let unescaped = match chars.next()? {
            't' => '\t',
            'b' => '\u{8}',
            'n' => '\n',
            'r' => '\r',
            'f' => '\u{c}',
            '"' => '"',
            '\'' => '\'',
            '\\' => '\\',
            'u' => hex_char(&mut chars, 4)?,
            'U' => hex_char(&mut chars, 8)?,
            _ => return None,
        };
        out.push(unescaped);
    }
    Some(out)
}

fn hex_char(chars: &mut std::str::Chars, len: usize) -> Option<char> {
    let mut code = 0;
    for _ in 0..len {
        code = code * 16 + chars.next()?.to_digit(16)?;
    }
    char::from_u32(code)
}
