// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

//! Deciduous — attack-tree compiler.
//!
//! Compiles YAML threat-model documents (facts, attacks, mitigations, goals)
//! into a styled, deterministic Graphviz DOT graph description, and builds a
//! source-location index so a host editor can map rendered nodes and edges
//! back to spans in the text.

pub mod compile;
pub mod format;
pub mod model;
pub mod ops;
pub mod srcmap;
pub mod theme;
