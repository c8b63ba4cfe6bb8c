//! Lookup and summary helpers over a raw document tree.

use canopy_types::{BoundingBox, Size};
use serde::Serialize;

use crate::node::{Paint, RawNode, RawTextStyle};

const FRAME_TYPES: [&str; 3] = ["FRAME", "COMPONENT", "COMPONENT_SET"];
const COMPONENT_TYPES: [&str; 3] = ["COMPONENT", "COMPONENT_SET", "INSTANCE"];

/// How many characters of a text node a summary carries.
const TEXT_PREVIEW_LIMIT: usize = 100;
/// How many children a summary lists before truncating.
const CHILD_SUMMARY_LIMIT: usize = 10;

/// Finds the node with the given id, searching depth first.
pub fn find_by_id<'a>(root: &'a RawNode, node_id: &str) -> Option<&'a RawNode> {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.id == node_id {
            return Some(node);
        }
        stack.extend(node.children.iter().rev());
    }
    None
}

/// Finds the first node whose name matches, ignoring case and surrounding
/// whitespace. An empty query never matches.
pub fn find_by_name<'a>(root: &'a RawNode, name: &str) -> Option<&'a RawNode> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.name.trim().to_lowercase() == wanted {
            return Some(node);
        }
        stack.extend(node.children.iter().rev());
    }
    None
}

/// A frame-level entry point into a document, with the page it lives on.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    pub page: String,
}

/// Lists the frames sitting directly under each page of the document.
pub fn top_level_frames(document: &RawNode) -> Vec<FrameRef> {
    let mut frames = Vec::new();
    for page in &document.children {
        let page_name = match page.name.trim() {
            "" => "Unnamed Page",
            name => name,
        };
        for node in &page.children {
            if FRAME_TYPES.contains(&node.node_type.as_str()) {
                frames.push(FrameRef {
                    id: node.id.clone(),
                    name: match node.name.trim() {
                        "" => "Unnamed".to_string(),
                        name => name.to_string(),
                    },
                    node_type: node.node_type.clone(),
                    page: page_name.to_string(),
                });
            }
        }
    }
    frames
}

/// A component, component set, or instance found anywhere in the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentRef {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
}

/// Collects every component-like node in the document, depth first.
pub fn all_components(document: &RawNode) -> Vec<ComponentRef> {
    let mut found = Vec::new();
    collect_components(document, &mut found);
    found
}

fn collect_components(node: &RawNode, found: &mut Vec<ComponentRef>) {
    if COMPONENT_TYPES.contains(&node.node_type.as_str()) {
        found.push(ComponentRef {
            id: node.id.clone(),
            name: node.name.clone(),
            node_type: node.node_type.clone(),
        });
    }
    for child in &node.children {
        collect_components(child, found);
    }
}

/// A shallow, bounded description of a node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub characters: Option<String>,
    pub child_count: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSummary>,
    #[serde(skip_serializing_if = "is_false")]
    pub children_truncated: bool,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Summarizes a node one level deep. Text is previewed, and only the first
/// few children appear, each without their own children.
pub fn summarize(node: &RawNode) -> NodeSummary {
    let mut summary = summarize_shallow(node);
    summary.children = node
        .children
        .iter()
        .take(CHILD_SUMMARY_LIMIT)
        .map(summarize_shallow)
        .collect();
    summary.children_truncated = node.children.len() > CHILD_SUMMARY_LIMIT;
    summary
}

/// Summarizes a node without listing its children. The child count is
/// still reported.
pub fn summarize_shallow(node: &RawNode) -> NodeSummary {
    NodeSummary {
        id: node.id.clone(),
        name: node.name.clone(),
        node_type: node.node_type.clone(),
        size: node.absolute_bounding_box.as_ref().map(Size::from),
        characters: node
            .characters
            .as_ref()
            .map(|text| text.chars().take(TEXT_PREVIEW_LIMIT).collect()),
        child_count: node.children.len(),
        children: Vec::new(),
        children_truncated: false,
    }
}

/// The styling block of a summary, grouping paint, text, and layout facts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSummary {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fills: Vec<Paint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strokes: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effects: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_style: Option<RawTextStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LayoutSummary>,
}

/// Auto-layout facts, present only when the node declares a layout mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSummary {
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
}

/// Gathers a node's styling into one record.
pub fn style_summary(node: &RawNode) -> StyleSummary {
    StyleSummary {
        fills: node.fills.clone(),
        strokes: node.strokes.clone(),
        effects: node.effects.clone(),
        text_style: node.text_style.clone(),
        bounding_box: node.absolute_bounding_box.clone(),
        layout: node.layout_mode.as_ref().map(|mode| LayoutSummary {
            mode: mode.clone(),
            item_spacing: node.item_spacing,
            padding_left: node.padding_left,
            padding_right: node.padding_right,
            padding_top: node.padding_top,
            padding_bottom: node.padding_bottom,
        }),
    }
}
