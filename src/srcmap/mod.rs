// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

//! Source-location index: maps compiled nodes and edges back to spans in the
//! raw text, for click-to-source navigation.
//!
//! This is a best-effort textual search over line-prefix patterns, not a
//! structural parse position. A span that cannot be located degrades
//! navigation for that one element; it never fails the index. The index is
//! built once per compile cycle and replaced wholesale on the next edit,
//! never patched incrementally.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use memchr::memmem;
use regex::Regex;
use serde::Serialize;

use crate::model::{Document, NodeId};

/// A located region of the source text: 0-based line, byte column, byte
/// length. Valid only for the text snapshot the index was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    pub line: usize,
    pub column: usize,
    pub len: usize,
}

impl Span {
    /// The substring this span covers, against the text it was built from.
    pub fn slice<'a>(&self, raw: &'a str) -> Option<&'a str> {
        let line = raw.split('\n').nth(self.line)?;
        line.get(self.column..self.column + self.len)
    }
}

/// Matches a top-level list-entry header like `- reality:`. Also the
/// terminator for edge scans: predecessor lists never span across sibling
/// node declarations.
fn entry_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^-\s+([A-Za-z0-9_]+)\s*:").expect("entry header pattern compiles")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocationIndex {
    nodes: BTreeMap<NodeId, Span>,
    edges: BTreeMap<NodeId, BTreeMap<NodeId, Span>>,
}

impl LocationIndex {
    /// Builds the index for one text snapshot alongside its document.
    pub fn build(raw: &str, document: &Document) -> Self {
        let lines: Vec<&str> = raw.split('\n').collect();
        let header_re = entry_header_regex();

        // First declaration header per id, in one pass over the text.
        let mut headers: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for (line_no, line) in lines.iter().enumerate() {
            if let Some(caps) = header_re.captures(line) {
                if let (Some(full), Some(id)) = (caps.get(0), caps.get(1)) {
                    headers.entry(id.as_str()).or_insert((line_no, full.end()));
                }
            }
        }

        let mut index = Self::default();
        for node in document.nodes() {
            if let Some(&(line, len)) = headers.get(node.id().as_str()) {
                index.nodes.insert(
                    node.id().clone(),
                    Span {
                        line,
                        column: 0,
                        len,
                    },
                );
            }
            for reference in node.predecessors() {
                if let Some(span) =
                    find_reference_span(&lines, &headers, node.id().as_str(), reference.as_str())
                {
                    index
                        .edges
                        .entry(reference.clone())
                        .or_default()
                        .entry(node.id().clone())
                        .or_insert(span);
                }
            }
        }
        index
    }

    /// Span of the node's declaration header, if it was located.
    pub fn span_for_node(&self, id: &str) -> Option<Span> {
        self.nodes.get(id).copied()
    }

    /// Span of the `- <from>` reference under `<to>`'s declaration, if it
    /// was located.
    pub fn span_for_edge(&self, from: &str, to: &str) -> Option<Span> {
        self.edges.get(from)?.get(to).copied()
    }
}

/// Scans forward from the successor's header line for the predecessor
/// reference, stopping at the next top-level entry header.
fn find_reference_span(
    lines: &[&str],
    headers: &BTreeMap<&str, (usize, usize)>,
    to: &str,
    from: &str,
) -> Option<Span> {
    let &(header_line, _) = headers.get(to)?;
    let needle = format!("- {from}");
    let finder = memmem::Finder::new(needle.as_bytes());

    for (offset, line) in lines.iter().enumerate().skip(header_line + 1) {
        if entry_header_regex().is_match(line) {
            return None;
        }
        let bytes = line.as_bytes();
        let mut start = 0;
        while let Some(pos) = finder.find(&bytes[start..]) {
            let column = start + pos;
            let end = column + needle.len();
            // An id that is a prefix of another id must not match.
            if ends_at_boundary(bytes, end) {
                return Some(Span {
                    line: offset,
                    column,
                    len: needle.len(),
                });
            }
            start = column + 1;
        }
    }
    None
}

fn ends_at_boundary(bytes: &[u8], end: usize) -> bool {
    match bytes.get(end) {
        None => true,
        Some(byte) => !(byte.is_ascii_alphanumeric() || *byte == b'_'),
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Document, SEED_DOCUMENT};

    use super::{LocationIndex, Span};

    fn index_for(source: &str) -> LocationIndex {
        let value: serde_yaml::Value = serde_yaml::from_str(source).expect("valid yaml");
        let document = Document::from_value(&value).expect("valid document");
        LocationIndex::build(source, &document)
    }

    #[test]
    fn seed_node_span_covers_the_declaration_header() {
        let index = index_for(SEED_DOCUMENT);
        let span = index.span_for_node("reality").expect("node span");
        assert_eq!(
            span,
            Span {
                line: 3,
                column: 0,
                len: "- reality:".len()
            }
        );
        assert_eq!(span.slice(SEED_DOCUMENT), Some("- reality:"));
    }

    #[test]
    fn seed_edge_span_covers_the_predecessor_reference() {
        let index = index_for(SEED_DOCUMENT);
        let span = index
            .span_for_edge("reality", "initial_attack")
            .expect("edge span");
        assert_eq!(span.slice(SEED_DOCUMENT), Some("- reality"));

        let lines: Vec<&str> = SEED_DOCUMENT.split('\n').collect();
        assert_eq!(lines[span.line].trim_start(), "- reality");
    }

    #[test]
    fn removed_declaration_yields_no_span_after_rebuild() {
        let index = index_for(SEED_DOCUMENT);
        assert!(index.span_for_node("defense").is_some());

        let edited = SEED_DOCUMENT.replace(
            "mitigations:\n- defense: Defense mechanism\n  from:\n  - initial_attack\n",
            "",
        );
        // The document no longer declares the node, so a rebuilt index has
        // nothing to find.
        let rebuilt = index_for(&edited);
        assert_eq!(rebuilt.span_for_node("defense"), None);
        assert_eq!(rebuilt.span_for_edge("initial_attack", "defense"), None);
    }

    #[test]
    fn edge_scan_stops_at_the_next_entry_header() {
        // `phish` declares its predecessor in flow style, so no `- reality`
        // line exists inside its own block; the only textual occurrence sits
        // under `other`. The scan must stop at `- other:` and yield no span
        // instead of borrowing the neighbour's reference.
        let source = concat!(
            "facts:\n",
            "- reality: Starting point\n",
            "attacks:\n",
            "- phish: Phishing\n",
            "  from: [reality]\n",
            "- other: Something else\n",
            "  from:\n",
            "  - reality\n",
        );
        let index = index_for(source);
        assert_eq!(index.span_for_edge("reality", "phish"), None);
        assert!(index.span_for_edge("reality", "other").is_some());
    }

    #[test]
    fn reference_search_rejects_prefix_matches() {
        let source = concat!(
            "facts:\n",
            "- real: Short id\n",
            "- reality: Long id\n",
            "attacks:\n",
            "- phish: Phishing\n",
            "  from:\n",
            "  - reality\n",
            "  - real\n",
        );
        let index = index_for(source);

        let long = index.span_for_edge("reality", "phish").expect("edge span");
        assert_eq!(long.slice(source), Some("- reality"));

        // `- real` must match its own line, not the `- reality` prefix.
        let short = index.span_for_edge("real", "phish").expect("edge span");
        assert_eq!(short.line, 7);
        assert_eq!(short.slice(source), Some("- real"));
    }

    #[test]
    fn rebuild_on_unchanged_text_is_identical() {
        let first = index_for(SEED_DOCUMENT);
        let second = index_for(SEED_DOCUMENT);
        assert_eq!(first, second);
    }

    #[test]
    fn unconventional_formatting_degrades_to_no_span() {
        // Flow-style entry; no `- id:` header line exists to find.
        let source = "facts: [{reality: Starting point}]\n";
        let index = index_for(source);
        assert_eq!(index.span_for_node("reality"), None);
    }
}
