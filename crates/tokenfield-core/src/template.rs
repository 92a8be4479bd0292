#![forbid(unsafe_code)]

//! The `${name}` template codec.
//!
//! [`decode`] turns a template string into a [`Document`]; [`encode`] walks
//! a document back into the textual form. Decoding is total and verbatim
//! preserving: every input that is not a resolvable marker stays literal
//! text, so `encode(decode(t))` reproduces `t` byte for byte.
//!
//! The scan rules, in order at each `$`:
//!
//! - `$` not followed by `{` is literal text, including a trailing `$`.
//! - `${` with no closing `}` anywhere after it is literal text to the end.
//! - `${name}` scans to the *next* `}`; the name is everything between.
//! - A name resolved exactly in the catalog becomes a chip; anything else
//!   (unknown name, empty name) stays literal text, braces included.
//!
//! ```
//! use tokenfield_core::{Catalog, template};
//!
//! let catalog = Catalog::new(["host"]);
//! let doc = template::decode("ping ${host} $5 ${oops", &catalog);
//! assert_eq!(doc.variable_names().collect::<Vec<_>>(), ["host"]);
//! assert_eq!(template::encode(&doc), "ping ${host} $5 ${oops");
//! ```

use crate::catalog::Catalog;
use crate::document::{Document, Segment};

/// Decode a template into a document against a catalog.
///
/// Line breaks in literal text are preserved as characters; templates are
/// not subject to the single-line folding applied to interactive edits.
#[must_use]
pub fn decode(template: &str, catalog: &Catalog) -> Document {
    let mut segments: Vec<Segment> = Vec::new();
    let mut text = String::new();
    let mut rest = template;
    while let Some(dollar) = rest.find('$') {
        text.push_str(&rest[..dollar]);
        let after_dollar = &rest[dollar + 1..];
        if let Some(brace_rest) = after_dollar.strip_prefix('{') {
            if let Some(close) = brace_rest.find('}') {
                let name = &brace_rest[..close];
                if catalog.resolve(name).is_some() {
                    segments.push(Segment::Text(std::mem::take(&mut text)));
                    segments.push(Segment::variable(name));
                } else {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(name, "unresolved placeholder kept as literal text");
                    text.push_str(&rest[dollar..dollar + close + 3]);
                }
                rest = &brace_rest[close + 1..];
            } else {
                text.push_str(&rest[dollar..]);
                rest = "";
            }
        } else {
            text.push('$');
            rest = after_dollar;
        }
    }
    text.push_str(rest);
    segments.push(Segment::Text(text));
    Document::from_segments(segments)
}

/// Encode a document back into template text.
///
/// Text segments pass through verbatim; each chip becomes `${name}`.
#[must_use]
pub fn encode(document: &Document) -> String {
    let mut out = String::new();
    for seg in document.segments() {
        match seg {
            Segment::Text(text) => out.push_str(text),
            Segment::Variable { name } => {
                out.push_str("${");
                out.push_str(name);
                out.push('}');
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Span;

    fn catalog() -> Catalog {
        Catalog::new(["user", "host", "var1", "var10"])
    }

    #[test]
    fn test_decode_plain_text() {
        let d = decode("hello world", &catalog());
        assert_eq!(d.segments(), &[Segment::text("hello world")]);
    }

    #[test]
    fn test_decode_known_marker_becomes_chip() {
        let d = decode("hi ${user}!", &catalog());
        assert_eq!(
            d.segments(),
            &[
                Segment::text("hi "),
                Segment::variable("user"),
                Segment::text("!"),
            ]
        );
    }

    #[test]
    fn test_decode_unknown_marker_stays_literal() {
        let d = decode("hi ${stranger}!", &catalog());
        assert_eq!(d.segments(), &[Segment::text("hi ${stranger}!")]);
    }

    #[test]
    fn test_decode_empty_name_stays_literal() {
        let d = decode("a${}b", &catalog());
        assert_eq!(d.segments(), &[Segment::text("a${}b")]);
    }

    #[test]
    fn test_decode_bare_dollar_is_literal() {
        let d = decode("cost: $5 and 10$", &catalog());
        assert_eq!(d.segments(), &[Segment::text("cost: $5 and 10$")]);
    }

    #[test]
    fn test_decode_unterminated_marker_runs_to_end() {
        let d = decode("start ${user", &catalog());
        assert_eq!(d.segments(), &[Segment::text("start ${user")]);
    }

    #[test]
    fn test_decode_scans_to_next_close_brace() {
        // The name is "us${er", which does not resolve, so the whole
        // run up to the first `}` stays literal.
        let d = decode("${us${er}", &catalog());
        assert_eq!(d.segments(), &[Segment::text("${us${er}")]);
    }

    #[test]
    fn test_decode_adjacent_markers() {
        let d = decode("${user}${host}", &catalog());
        assert_eq!(d.variable_names().collect::<Vec<_>>(), ["user", "host"]);
        assert_eq!(d.atom_len(), 2);
    }

    #[test]
    fn test_decode_marker_alone_pads_canonically() {
        let d = decode("${user}", &catalog());
        assert_eq!(
            d.segments(),
            &[
                Segment::text(""),
                Segment::variable("user"),
                Segment::text(""),
            ]
        );
    }

    #[test]
    fn test_decode_exact_resolution_no_prefix_shadowing() {
        let d = decode("${var1} ${var10}", &catalog());
        assert_eq!(d.variable_names().collect::<Vec<_>>(), ["var1", "var10"]);
    }

    #[test]
    fn test_decode_preserves_line_breaks_in_literal_text() {
        let d = decode("a\nb ${user}", &catalog());
        assert_eq!(d.text_between(Span::new(0, 4)), "a\nb ");
        assert_eq!(encode(&d), "a\nb ${user}");
    }

    #[test]
    fn test_encode_builds_markers_from_chips() {
        let d = Document::from_segments(vec![
            Segment::text("cp "),
            Segment::variable("file"),
            Segment::text(" /tmp"),
        ]);
        assert_eq!(encode(&d), "cp ${file} /tmp");
    }

    #[test]
    fn test_round_trip_mixed_template() {
        let c = catalog();
        let template = "run ${user}@${host}: $HOME ${nope} ${user";
        assert_eq!(encode(&decode(template, &c)), template);
    }
}
