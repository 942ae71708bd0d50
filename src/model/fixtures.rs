// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

//! The seed document used when creating a new attack tree.
//!
//! This is the canonical smallest valid document: one fact, one attack from
//! that fact, one mitigation and one goal from the attack.

use super::document::Document;

pub const SEED_DOCUMENT: &str = "title: New Attack Tree

facts:
- reality: Starting point
  from: []

attacks:
- initial_attack: Initial attack vector
  from:
  - reality

mitigations:
- defense: Defense mechanism
  from:
  - initial_attack

goals:
- compromise: System compromise
  from:
  - initial_attack
";

/// Parses [`SEED_DOCUMENT`]; infallible because the seed text is a fixture.
pub fn seed_document() -> Document {
    let value: serde_yaml::Value =
        serde_yaml::from_str(SEED_DOCUMENT).expect("seed document is valid yaml");
    Document::from_value(&value).expect("seed document is a valid attack tree")
}

#[cfg(test)]
mod tests {
    use crate::model::Category;

    use super::seed_document;

    #[test]
    fn seed_document_has_one_node_per_category() {
        let doc = seed_document();
        assert_eq!(doc.title(), "New Attack Tree");
        assert_eq!(doc.node_count(), 4);
        for category in Category::ALL {
            assert_eq!(doc.category(category).len(), 1, "{category}");
        }
    }
}
