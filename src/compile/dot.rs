// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

//! Graphviz DOT emission for a compiled graph description.

use super::GraphDescription;

impl GraphDescription {
    /// Renders the description as Graphviz DOT.
    ///
    /// Node and edge statements follow the description's own order, so the
    /// DOT text is byte-identical for identical descriptions. Identifiers
    /// and labels are always quoted; Graphviz keeps the quoted id as the
    /// element title in SVG output, which is what click handling keys off.
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        out.push_str("digraph attack_tree {\n");
        out.push_str(&format!("    bgcolor=\"{}\";\n", escape(self.background)));
        out.push_str("    labelloc=\"t\";\n");
        out.push_str(&format!("    label=\"{}\";\n", escape(&self.title)));
        out.push_str(&format!("    fontname=\"{}\";\n", escape(self.font)));
        out.push_str("    fontsize=\"18\";\n");
        out.push_str("    rankdir=\"TB\";\n");
        out.push_str(&format!("    edge [color=\"{}\"];\n", escape(self.edge_color)));

        out.push('\n');
        for node in &self.nodes {
            out.push_str(&format!(
                "    \"{}\" [label=\"{}\", shape={}, style=filled, fillcolor=\"{}\", color=\"{}\", fontcolor=\"{}\", fontname=\"{}\"];\n",
                escape(node.id.as_str()),
                escape(&node.label),
                node.style.shape.dot_name(),
                escape(node.style.fill),
                escape(node.style.border),
                escape(node.style.text),
                escape(node.style.font),
            ));
        }

        out.push('\n');
        for edge in &self.edges {
            out.push_str(&format!(
                "    \"{}\" -> \"{}\";\n",
                escape(edge.from.as_str()),
                escape(edge.to.as_str()),
            ));
        }
        out.push_str("}\n");
        out
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::escape;

    #[test]
    fn escape_handles_quotes_backslashes_and_newlines() {
        assert_eq!(escape(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape(r"a\b"), r"a\\b");
        assert_eq!(escape("two\nlines"), "two\\nlines");
        assert_eq!(escape("plain"), "plain");
    }
}
