use serde::Serialize;

use crate::analyzer::analyze_pattern;
use crate::pattern::{ComponentKind, PatternComponent};

const NODE_HEIGHT: f32 = 36.0;
const ROW_GAP: f32 = 12.0;
const CHAR_WIDTH: f32 = 8.0;
const NODE_PADDING: f32 = 16.0;
const NODE_GAP: f32 = 10.0;

/// One node of the visualizer graph. Projected from the same scan that
/// feeds the explanation view, so the two can never disagree about how a
/// pattern decomposes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutNode {
    pub label: String,
    pub kind: ComponentKind,
    pub color: &'static str,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutNode>,
}

pub fn tokenize_for_layout(pattern: &str) -> Vec<LayoutNode> {
    let analysis = analyze_pattern(pattern);
    let mut cursor = 0.0;
    project_siblings(&analysis.components, 0, &mut cursor)
}

fn project_siblings(
    components: &[PatternComponent],
    depth: usize,
    cursor: &mut f32,
) -> Vec<LayoutNode> {
    components
        .iter()
        .map(|component| project(component, depth, cursor))
        .collect()
}

fn project(component: &PatternComponent, depth: usize, cursor: &mut f32) -> LayoutNode {
    let label = component.value.clone();
    let width = NODE_PADDING * 2.0 + CHAR_WIDTH * label.chars().count() as f32;
    let x = *cursor;
    let y = depth as f32 * (NODE_HEIGHT + ROW_GAP);

    let children = if component.children.is_empty() {
        Vec::new()
    } else {
        let mut child_cursor = x + NODE_PADDING;
        project_siblings(&component.children, depth + 1, &mut child_cursor)
    };

    *cursor = x + width + NODE_GAP;

    LayoutNode {
        label,
        kind: component.kind,
        color: color_for(component.kind),
        x,
        y,
        width,
        children,
    }
}

pub fn color_for(kind: ComponentKind) -> &'static str {
    match kind {
        ComponentKind::Literal => "#4e79a7",
        ComponentKind::CharacterClass => "#f28e2b",
        ComponentKind::Quantifier => "#e15759",
        ComponentKind::Group => "#76b7b2",
        ComponentKind::Anchor => "#59a14f",
        ComponentKind::Assertion => "#edc948",
        ComponentKind::Backreference => "#b07aa1",
        ComponentKind::Escape => "#9c755f",
    }
}
