// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

//! Attack-tree graph compiler.
//!
//! [`compile`] turns a validated [`Document`] into a [`GraphDescription`]:
//! referential-integrity checks, edge derivation, and theme-driven styling.
//! The output enumeration order is fixed (facts, attacks, mitigations, goals,
//! each in document order; edges grouped by target node in that same order)
//! so the layout engine and the source-location index see stable ids across
//! successive renders.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::model::{Category, Document, NodeId};
use crate::theme::{CategoryStyle, ThemeRegistry};

mod dot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub label: String,
    pub category: Category,
    pub style: CategoryStyle,
}

/// A directed predecessor → successor pair. Carries no identity beyond the
/// pair itself; duplicate listings collapse to one edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
}

/// Engine-agnostic graph description consumed by an external layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphDescription {
    pub title: String,
    pub theme: String,
    pub background: &'static str,
    pub edge_color: &'static str,
    pub font: &'static str,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

/// Compiles a document against the registry's themes.
///
/// Pure: the same document and registry contents always produce a
/// byte-identical description.
pub fn compile(
    document: &Document,
    registry: &ThemeRegistry,
) -> Result<GraphDescription, CompileError> {
    let mut declared = BTreeSet::new();
    for node in document.nodes() {
        if !declared.insert(node.id().as_str()) {
            return Err(CompileError::DuplicateId {
                id: node.id().clone(),
            });
        }
    }

    // Scan order fixes which violation is reported when several exist.
    for node in document.nodes() {
        for reference in node.predecessors() {
            if !declared.contains(reference.as_str()) {
                return Err(CompileError::UnknownReference {
                    node_id: node.id().clone(),
                    missing_id: reference.clone(),
                });
            }
        }
    }

    let theme = registry.resolve(document.theme().unwrap_or(ThemeRegistry::DEFAULT_THEME));

    let mut nodes = Vec::with_capacity(document.node_count());
    let mut edges = Vec::new();
    let mut seen = BTreeSet::new();
    for node in document.nodes() {
        nodes.push(GraphNode {
            id: node.id().clone(),
            label: node.label().to_owned(),
            category: node.category(),
            style: *theme.category_style(node.category()),
        });
        for reference in node.predecessors() {
            if seen.insert((reference.as_str(), node.id().as_str())) {
                edges.push(GraphEdge {
                    from: reference.clone(),
                    to: node.id().clone(),
                });
            }
        }
    }

    Ok(GraphDescription {
        title: document.title().to_owned(),
        theme: theme.name().to_owned(),
        background: theme.background(),
        edge_color: theme.edge_color(),
        font: theme.font(),
        nodes,
        edges,
    })
}

/// Structural errors; any of these fails the whole compile and no graph
/// description is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    DuplicateId { id: NodeId },
    UnknownReference { node_id: NodeId, missing_id: NodeId },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(
                f,
                "duplicate node id '{id}' (ids must be unique across facts, attacks, mitigations, and goals)"
            ),
            Self::UnknownReference {
                node_id,
                missing_id,
            } => write!(
                f,
                "node '{node_id}' references '{missing_id}', which is not declared anywhere"
            ),
        }
    }
}

impl std::error::Error for CompileError {}
