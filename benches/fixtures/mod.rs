// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

//! Synthetic attack-tree documents for benchmarks.

use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    Large,
}

impl Case {
    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    fn facts(self) -> usize {
        match self {
            Self::Small => 2,
            Self::Medium => 20,
            Self::Large => 200,
        }
    }
}

/// Generates a layered tree: every attack derives from two facts, every
/// mitigation and goal from two attacks.
pub fn attack_tree_yaml(case: Case) -> String {
    let facts = case.facts();
    let mut out = String::new();
    out.push_str("title: Generated attack tree\n\nfacts:\n");
    for i in 0..facts {
        let _ = writeln!(out, "- fact_{i}: Fact number {i}");
        out.push_str("  from: []\n");
    }
    out.push_str("\nattacks:\n");
    for i in 0..facts {
        let _ = writeln!(out, "- attack_{i}: Attack number {i}");
        out.push_str("  from:\n");
        let _ = writeln!(out, "  - fact_{i}");
        let _ = writeln!(out, "  - fact_{}", (i + 1) % facts);
    }
    out.push_str("\nmitigations:\n");
    for i in 0..facts {
        let _ = writeln!(out, "- mitigation_{i}: Mitigation number {i}");
        out.push_str("  from:\n");
        let _ = writeln!(out, "  - attack_{i}");
        let _ = writeln!(out, "  - attack_{}", (i + 1) % facts);
    }
    out.push_str("\ngoals:\n");
    for i in 0..facts {
        let _ = writeln!(out, "- goal_{i}: Goal number {i}");
        out.push_str("  from:\n");
        let _ = writeln!(out, "  - attack_{i}");
        let _ = writeln!(out, "  - attack_{}", (i + 1) % facts);
    }
    out
}
