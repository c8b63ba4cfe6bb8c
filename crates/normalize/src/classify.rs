//! Classification of raw nodes into semantic kinds and layout axes.

use canopy_ir::{LayoutAxis, NodeKind};
use canopy_raw::RawNode;

/// Raw node types that reach code generation as flattened imagery.
const IMAGE_TYPES: [&str; 2] = ["VECTOR", "BOOLEAN_OPERATION"];

/// Name prefix that marks a node as a control when its type carries no
/// better signal.
const BUTTON_PREFIX: &str = "btn";

/// Decides the semantic kind of a raw node.
///
/// The node type wins over the name: a TEXT node stays text no matter
/// what it is called. Only otherwise-plain nodes fall through to the
/// name heuristic for controls.
pub fn classify_kind(node: &RawNode) -> NodeKind {
    if node.node_type == "TEXT" {
        return NodeKind::Text;
    }
    if IMAGE_TYPES.contains(&node.node_type.as_str()) {
        return NodeKind::Image;
    }
    let name = node.name.trim().to_lowercase();
    if name.contains("button") || name.starts_with(BUTTON_PREFIX) {
        return NodeKind::InteractiveControl;
    }
    NodeKind::Container
}

/// Maps the auto-layout mode onto a stacking axis.
pub fn classify_layout(node: &RawNode) -> LayoutAxis {
    match node.layout_mode.as_deref() {
        Some("HORIZONTAL") => LayoutAxis::Row,
        Some("VERTICAL") => LayoutAxis::Column,
        _ => LayoutAxis::None,
    }
}
