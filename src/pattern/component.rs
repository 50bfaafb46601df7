use serde::{Deserialize, Serialize};

use super::span::GroupKind;

/// Half-open `[start, end)` range of Unicode scalar value indexes into the
/// original pattern string. Counted in chars, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub start: usize,
    pub end: usize,
}

impl Position {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentKind {
    Literal,
    CharacterClass,
    Quantifier,
    Group,
    Anchor,
    Assertion,
    Backreference,
    Escape,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternComponent {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub value: String,
    pub description: String,
    pub position: Position,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PatternComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_kind: Option<GroupKind>,
    pub is_optional: bool,
    pub is_repeating: bool,
}

impl PatternComponent {
    pub fn new(
        kind: ComponentKind,
        value: String,
        description: String,
        position: Position,
    ) -> Self {
        Self {
            kind,
            value,
            description,
            position,
            children: Vec::new(),
            group_kind: None,
            is_optional: false,
            is_repeating: false,
        }
    }
}

/// Ordinal complexity scale. The derived `Ord` follows declaration order,
/// so `Simple < Moderate < Complex < VeryComplex`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "camelCase")]
pub enum Complexity {
    #[default]
    Simple,
    Moderate,
    Complex,
    VeryComplex,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternAnalysis {
    pub pattern: String,
    pub components: Vec<PatternComponent>,
    pub summary: String,
    pub complexity: Complexity,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}
