// SPDX-FileCopyrightText: 2026 The Deciduous Authors
// SPDX-License-Identifier: MIT

//! Built-in themes and the immutable theme registry.
//!
//! Themes are cosmetic and must never block rendering: unknown theme names
//! resolve to the default theme instead of failing.

use serde::Serialize;

use crate::model::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeShape {
    Box,
    Ellipse,
    Diamond,
    Hexagon,
    DoubleOctagon,
}

impl NodeShape {
    /// The Graphviz `shape` attribute value.
    pub fn dot_name(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Ellipse => "ellipse",
            Self::Diamond => "diamond",
            Self::Hexagon => "hexagon",
            Self::DoubleOctagon => "doubleoctagon",
        }
    }
}

/// Per-category style record: shape, colors, and font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryStyle {
    pub shape: NodeShape,
    pub fill: &'static str,
    pub border: &'static str,
    pub text: &'static str,
    pub font: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: &'static str,
    background: &'static str,
    edge_color: &'static str,
    font: &'static str,
    fact: CategoryStyle,
    attack: CategoryStyle,
    mitigation: CategoryStyle,
    goal: CategoryStyle,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn background(&self) -> &'static str {
        self.background
    }

    pub fn edge_color(&self) -> &'static str {
        self.edge_color
    }

    /// Font used for the graph-level title.
    pub fn font(&self) -> &'static str {
        self.font
    }

    pub fn category_style(&self, category: Category) -> &CategoryStyle {
        match category {
            Category::Fact => &self.fact,
            Category::Attack => &self.attack,
            Category::Mitigation => &self.mitigation,
            Category::Goal => &self.goal,
        }
    }
}

/// Process-wide, read-only theme table. Built once; no mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    themes: Vec<Theme>,
}

impl ThemeRegistry {
    pub const DEFAULT_THEME: &'static str = "default";

    pub fn builtin() -> Self {
        Self {
            themes: vec![
                theme_default(),
                theme_dark(),
                theme_classic(),
                theme_accessible(),
            ],
        }
    }

    /// Unknown names fall back to the default theme rather than failing.
    pub fn resolve(&self, name: &str) -> &Theme {
        self.themes
            .iter()
            .find(|theme| theme.name == name)
            .unwrap_or_else(|| self.default_theme())
    }

    pub fn default_theme(&self) -> &Theme {
        &self.themes[0]
    }

    /// Registration-order theme names, for populating a theme selector.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.themes.iter().map(|theme| theme.name)
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

const fn style(
    shape: NodeShape,
    fill: &'static str,
    border: &'static str,
    text: &'static str,
    font: &'static str,
) -> CategoryStyle {
    CategoryStyle {
        shape,
        fill,
        border,
        text,
        font,
    }
}

fn theme_default() -> Theme {
    Theme {
        name: "default",
        background: "transparent",
        edge_color: "#4d4d4d",
        font: "Arial",
        fact: style(NodeShape::Box, "#f0f0f0", "#5f5f5f", "#1f1f1f", "Arial"),
        attack: style(NodeShape::Ellipse, "#ffb3b3", "#b30000", "#4d0000", "Arial"),
        mitigation: style(NodeShape::Box, "#bcd9f2", "#1668a6", "#0b3352", "Arial"),
        goal: style(NodeShape::Ellipse, "#b8e6b8", "#2e7d32", "#163a16", "Arial"),
    }
}

fn theme_dark() -> Theme {
    Theme {
        name: "dark",
        background: "#1e1e1e",
        edge_color: "#cccccc",
        font: "Arial",
        fact: style(NodeShape::Box, "#3a3f44", "#9aa0a6", "#e8eaed", "Arial"),
        attack: style(NodeShape::Ellipse, "#5c2b29", "#f28b82", "#fce8e6", "Arial"),
        mitigation: style(NodeShape::Box, "#1f3a5f", "#8ab4f8", "#e8f0fe", "Arial"),
        goal: style(NodeShape::Ellipse, "#2e4d2f", "#81c995", "#e6f4ea", "Arial"),
    }
}

fn theme_classic() -> Theme {
    Theme {
        name: "classic",
        background: "#ffffff",
        edge_color: "#000000",
        font: "Times-Roman",
        fact: style(NodeShape::Box, "#ffffff", "#000000", "#000000", "Times-Roman"),
        attack: style(
            NodeShape::Ellipse,
            "#ffffff",
            "#000000",
            "#000000",
            "Times-Roman",
        ),
        mitigation: style(NodeShape::Box, "#ffffff", "#000000", "#000000", "Times-Roman"),
        goal: style(
            NodeShape::DoubleOctagon,
            "#ffffff",
            "#000000",
            "#000000",
            "Times-Roman",
        ),
    }
}

// Okabe-Ito palette plus shape redundancy so categories stay distinguishable
// without color vision.
fn theme_accessible() -> Theme {
    Theme {
        name: "accessible",
        background: "#ffffff",
        edge_color: "#000000",
        font: "Verdana",
        fact: style(NodeShape::Box, "#ffffff", "#000000", "#000000", "Verdana"),
        attack: style(NodeShape::Hexagon, "#e69f00", "#000000", "#000000", "Verdana"),
        mitigation: style(NodeShape::Diamond, "#56b4e9", "#000000", "#000000", "Verdana"),
        goal: style(
            NodeShape::DoubleOctagon,
            "#009e73",
            "#000000",
            "#000000",
            "Verdana",
        ),
    }
}
