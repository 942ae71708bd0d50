// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

use std::fmt;

use serde::Serialize;
use serde_yaml::Value;
use smallvec::SmallVec;

use super::ids::{IdError, NodeId};

/// Reserved sibling key inside a node entry; everything else is the id.
const FROM_KEY: &str = "from";
const LABEL_KEY: &str = "label";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fact,
    Attack,
    Mitigation,
    Goal,
}

impl Category {
    /// Declaration order: facts, attacks, mitigations, goals.
    pub const ALL: [Category; 4] = [
        Category::Fact,
        Category::Attack,
        Category::Mitigation,
        Category::Goal,
    ];

    /// The top-level document key holding this category's node list.
    pub fn key(self) -> &'static str {
        match self {
            Self::Fact => "facts",
            Self::Attack => "attacks",
            Self::Mitigation => "mitigations",
            Self::Goal => "goals",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Predecessor lists are almost always tiny; keep them inline.
pub type Predecessors = SmallVec<[NodeId; 4]>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    label: String,
    category: Category,
    predecessors: Predecessors,
}

impl Node {
    pub fn new(
        id: NodeId,
        label: impl Into<String>,
        category: Category,
        predecessors: Predecessors,
    ) -> Self {
        Self {
            id,
            label: label.into(),
            category,
            predecessors,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn predecessors(&self) -> &[NodeId] {
        &self.predecessors
    }
}

/// One attack-tree document snapshot.
///
/// Built fresh from the current text on every compile cycle and never mutated
/// in place; the only post-construction write is the theme-name override the
/// host's theme selector applies before compiling.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    title: Option<String>,
    theme: Option<String>,
    facts: Vec<Node>,
    attacks: Vec<Node>,
    mitigations: Vec<Node>,
    goals: Vec<Node>,
}

impl Document {
    pub const DEFAULT_TITLE: &'static str = "Attack Tree";

    /// Validates an already-parsed generic mapping/list structure into a
    /// typed document, failing with a path-naming error on the first shape
    /// violation. Cross-reference checks are the compiler's job.
    pub fn from_value(value: &Value) -> Result<Self, DocumentError> {
        let mapping = match value {
            Value::Mapping(mapping) => mapping,
            _ => return Err(DocumentError::NotAMapping),
        };

        let title = match mapping.get("title") {
            None | Some(Value::Null) => None,
            Some(Value::String(title)) => Some(title.clone()),
            Some(_) => return Err(DocumentError::InvalidTitle),
        };

        let theme = match mapping.get("theme") {
            None | Some(Value::Null) => None,
            Some(Value::String(theme)) => Some(theme.clone()),
            Some(_) => return Err(DocumentError::InvalidTheme),
        };

        let mut document = Self {
            title,
            theme,
            ..Self::default()
        };

        for category in Category::ALL {
            let entries = match mapping.get(category.key()) {
                None | Some(Value::Null) => continue,
                Some(Value::Sequence(entries)) => entries,
                Some(_) => return Err(DocumentError::CategoryNotAList { category }),
            };
            for (index, entry) in entries.iter().enumerate() {
                let node = parse_entry(category, index, entry)?;
                document.category_mut(category).push(node);
            }
        }

        Ok(document)
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(Self::DEFAULT_TITLE)
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    pub fn set_theme<T: Into<String>>(&mut self, theme: Option<T>) {
        self.theme = theme.map(Into::into);
    }

    pub fn category(&self, category: Category) -> &[Node] {
        match category {
            Category::Fact => &self.facts,
            Category::Attack => &self.attacks,
            Category::Mitigation => &self.mitigations,
            Category::Goal => &self.goals,
        }
    }

    fn category_mut(&mut self, category: Category) -> &mut Vec<Node> {
        match category {
            Category::Fact => &mut self.facts,
            Category::Attack => &mut self.attacks,
            Category::Mitigation => &mut self.mitigations,
            Category::Goal => &mut self.goals,
        }
    }

    /// All nodes in declaration order: facts, attacks, mitigations, goals,
    /// each in document order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        Category::ALL
            .into_iter()
            .flat_map(|category| self.category(category).iter())
    }

    pub fn node_count(&self) -> usize {
        self.facts.len() + self.attacks.len() + self.mitigations.len() + self.goals.len()
    }
}

fn parse_entry(category: Category, index: usize, entry: &Value) -> Result<Node, DocumentError> {
    let mapping = match entry {
        Value::Mapping(mapping) => mapping,
        _ => return Err(DocumentError::EntryNotAMapping { category, index }),
    };

    let mut id_key = None;
    for key in mapping.keys() {
        let key = match key {
            Value::String(key) => key.as_str(),
            _ => return Err(DocumentError::EntryKeyNotAString { category, index }),
        };
        if key == FROM_KEY {
            continue;
        }
        if id_key.replace(key).is_some() {
            return Err(DocumentError::MultipleIds { category, index });
        }
    }
    let raw_id = id_key.ok_or(DocumentError::MissingId { category, index })?;
    let id = NodeId::new(raw_id).map_err(|reason| DocumentError::InvalidId {
        category,
        index,
        reason,
    })?;

    let mut predecessors = Predecessors::new();
    let label = match mapping.get(raw_id) {
        Some(Value::String(label)) => label.clone(),
        Some(Value::Mapping(record)) => {
            let label = match record.get(LABEL_KEY) {
                Some(Value::String(label)) => label.clone(),
                Some(_) | None => {
                    return Err(DocumentError::MissingLabel {
                        category,
                        index,
                        id: raw_id.to_owned(),
                    })
                }
            };
            parse_from(category, index, raw_id, record.get(FROM_KEY), &mut predecessors)?;
            label
        }
        _ => {
            return Err(DocumentError::InvalidLabel {
                category,
                index,
                id: raw_id.to_owned(),
            })
        }
    };

    parse_from(category, index, raw_id, mapping.get(FROM_KEY), &mut predecessors)?;

    Ok(Node::new(id, label, category, predecessors))
}

fn parse_from(
    category: Category,
    index: usize,
    id: &str,
    from: Option<&Value>,
    predecessors: &mut Predecessors,
) -> Result<(), DocumentError> {
    let entries = match from {
        None | Some(Value::Null) => return Ok(()),
        Some(Value::Sequence(entries)) => entries,
        Some(_) => {
            return Err(DocumentError::InvalidFrom {
                category,
                index,
                id: id.to_owned(),
            })
        }
    };
    for entry in entries {
        let reference = match entry {
            Value::String(reference) => reference.as_str(),
            _ => {
                return Err(DocumentError::InvalidPredecessor {
                    category,
                    index,
                    id: id.to_owned(),
                })
            }
        };
        let reference = NodeId::new(reference).map_err(|_| DocumentError::InvalidPredecessor {
            category,
            index,
            id: id.to_owned(),
        })?;
        predecessors.push(reference);
    }
    Ok(())
}

/// Shape violations below the category level; fails the whole compile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    NotAMapping,
    InvalidTitle,
    InvalidTheme,
    CategoryNotAList {
        category: Category,
    },
    EntryNotAMapping {
        category: Category,
        index: usize,
    },
    EntryKeyNotAString {
        category: Category,
        index: usize,
    },
    MissingId {
        category: Category,
        index: usize,
    },
    MultipleIds {
        category: Category,
        index: usize,
    },
    InvalidId {
        category: Category,
        index: usize,
        reason: IdError,
    },
    MissingLabel {
        category: Category,
        index: usize,
        id: String,
    },
    InvalidLabel {
        category: Category,
        index: usize,
        id: String,
    },
    InvalidFrom {
        category: Category,
        index: usize,
        id: String,
    },
    InvalidPredecessor {
        category: Category,
        index: usize,
        id: String,
    },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAMapping => f.write_str("document root must be a mapping"),
            Self::InvalidTitle => f.write_str("title: expected a string"),
            Self::InvalidTheme => f.write_str("theme: expected a string"),
            Self::CategoryNotAList { category } => {
                write!(f, "{category}: expected a list of node entries")
            }
            Self::EntryNotAMapping { category, index } => {
                write!(f, "{category}[{index}]: expected a mapping entry")
            }
            Self::EntryKeyNotAString { category, index } => {
                write!(f, "{category}[{index}]: entry keys must be strings")
            }
            Self::MissingId { category, index } => {
                write!(f, "{category}[{index}]: entry has no id key")
            }
            Self::MultipleIds { category, index } => {
                write!(f, "{category}[{index}]: entry declares more than one id")
            }
            Self::InvalidId {
                category,
                index,
                reason,
            } => {
                write!(f, "{category}[{index}]: invalid id ({reason})")
            }
            Self::MissingLabel {
                category,
                index,
                id,
            } => {
                write!(f, "{category}[{index}]: missing label for '{id}'")
            }
            Self::InvalidLabel {
                category,
                index,
                id,
            } => write!(
                f,
                "{category}[{index}]: value for '{id}' must be a label string or a record with a label"
            ),
            Self::InvalidFrom {
                category,
                index,
                id,
            } => {
                write!(f, "{category}[{index}]: 'from' under '{id}' must be a list of ids")
            }
            Self::InvalidPredecessor {
                category,
                index,
                id,
            } => write!(
                f,
                "{category}[{index}]: 'from' entries under '{id}' must be non-empty strings"
            ),
        }
    }
}

impl std::error::Error for DocumentError {}
