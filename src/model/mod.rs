// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

//! Core data model.
//!
//! A [`Document`] is one immutable snapshot of an attack tree: a title, a
//! theme name, and four ordered node collections (facts, attacks,
//! mitigations, goals).

pub mod document;
pub mod fixtures;
pub mod ids;

pub use document::{Category, Document, DocumentError, Node, Predecessors};
pub use fixtures::{seed_document, SEED_DOCUMENT};
pub use ids::{IdError, NodeId};
