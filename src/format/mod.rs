// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

//! YAML front end for attack-tree documents.
//!
//! The serialization layer itself is generic (`serde_yaml`); everything
//! attack-tree-specific happens in [`Document::from_value`].

use std::fmt;

use crate::model::{Document, DocumentError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseDocumentError {
    /// The text is not well-formed YAML at the primitive level.
    Yaml { message: String },
    /// The YAML is well-formed but does not have attack-tree shape.
    Document(DocumentError),
}

impl fmt::Display for ParseDocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml { message } => write!(f, "invalid yaml: {message}"),
            Self::Document(error) => error.fmt(f),
        }
    }
}

impl std::error::Error for ParseDocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Yaml { .. } => None,
            Self::Document(error) => Some(error),
        }
    }
}

impl From<DocumentError> for ParseDocumentError {
    fn from(error: DocumentError) -> Self {
        Self::Document(error)
    }
}

/// Parses raw text into a fresh [`Document`] snapshot.
pub fn parse_document(raw: &str) -> Result<Document, ParseDocumentError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(raw).map_err(|error| ParseDocumentError::Yaml {
            message: error.to_string(),
        })?;
    Ok(Document::from_value(&value)?)
}
