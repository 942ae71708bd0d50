// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

//! One edit-triggered compile cycle: parse, compile, index.
//!
//! The host invokes [`compile_tree`] on every text change and on load, hands
//! the DOT string to its layout engine, and routes click events through the
//! returned [`LocationIndex`]. Everything here is stateless; a stale result
//! is always safely discardable, so last-write-wins queueing is the host's
//! choice to make.

use std::fmt;

use crate::compile::{compile, CompileError, GraphDescription};
use crate::format::{parse_document, ParseDocumentError};
use crate::srcmap::LocationIndex;
use crate::theme::ThemeRegistry;

/// The output of one successful compile cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTree {
    pub title: String,
    pub graph: GraphDescription,
    pub dot: String,
    pub index: LocationIndex,
}

/// Compiles raw text end to end.
///
/// `theme_override` is the host's theme-selector value; it wins over the
/// document's own `theme:` key, mirroring how the selector behaves in the
/// editor surface.
pub fn compile_tree(
    source: &str,
    theme_override: Option<&str>,
    registry: &ThemeRegistry,
) -> Result<CompiledTree, AttackTreeError> {
    let mut document = parse_document(source)?;
    if let Some(theme) = theme_override {
        document.set_theme(Some(theme));
    }
    let graph = compile(&document, registry)?;
    let index = LocationIndex::build(source, &document);
    let dot = graph.to_dot();
    Ok(CompiledTree {
        title: graph.title.clone(),
        graph,
        dot,
        index,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackTreeError {
    Parse(ParseDocumentError),
    Compile(CompileError),
}

impl fmt::Display for AttackTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(error) => error.fmt(f),
            Self::Compile(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for AttackTreeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(error) => Some(error),
            Self::Compile(error) => Some(error),
        }
    }
}

impl From<ParseDocumentError> for AttackTreeError {
    fn from(error: ParseDocumentError) -> Self {
        Self::Parse(error)
    }
}

impl From<CompileError> for AttackTreeError {
    fn from(error: CompileError) -> Self {
        Self::Compile(error)
    }
}
