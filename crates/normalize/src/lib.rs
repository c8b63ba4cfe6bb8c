//! Turns a raw document subtree into the normalized representation.
//!
//! Normalization walks the raw tree once, top down. Each node is
//! classified, its style is resolved, and children flagged invisible are
//! pruned together with everything below them.

pub mod classify;

pub use classify::{classify_kind, classify_layout};

use canopy_ir::{NodeKind, NormalizedNode};
use canopy_raw::RawNode;
use canopy_style::resolve_style;
use canopy_types::NodeId;
use log::trace;

/// Normalizes a raw subtree rooted at `raw`.
///
/// The root itself is always kept; visibility pruning applies to the
/// children encountered during the walk.
pub fn normalize(raw: &RawNode) -> NormalizedNode {
    let kind = classify::classify_kind(raw);
    let text = match kind {
        NodeKind::Text => raw.characters.clone(),
        _ => None,
    };
    let children = raw
        .children
        .iter()
        .filter(|child| {
            let keep = child.is_visible();
            if !keep {
                trace!("pruning invisible node {} ({})", child.id, child.name);
            }
            keep
        })
        .map(normalize)
        .collect();

    NormalizedNode {
        id: NodeId::from(raw.id.as_str()),
        name: raw.name.clone(),
        kind,
        layout: classify::classify_layout(raw),
        text,
        style: resolve_style(raw),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_ir::LayoutAxis;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawNode {
        RawNode::from_value(value).unwrap()
    }

    #[test]
    fn test_field_carry_over() {
        let node = normalize(&raw(json!({
            "id": "1:1",
            "name": "Card",
            "type": "FRAME",
            "layoutMode": "VERTICAL",
            "fills": [{ "type": "SOLID", "color": { "r": 1.0, "g": 1.0, "b": 1.0 } }],
            "children": [
                { "id": "1:2", "name": "Title", "type": "TEXT", "characters": "Hello" },
            ],
        })));

        assert_eq!(node.id.as_str(), "1:1");
        assert_eq!(node.name, "Card");
        assert_eq!(node.kind, NodeKind::Container);
        assert_eq!(node.layout, LayoutAxis::Column);
        assert_eq!(node.style.background.as_deref(), Some("rgb(255, 255, 255)"));
        assert_eq!(node.children[0].text.as_deref(), Some("Hello"));
    }

    #[test]
    fn test_invisible_subtree_pruning() {
        let node = normalize(&raw(json!({
            "id": "1:1",
            "type": "FRAME",
            "children": [
                { "id": "1:2", "type": "FRAME", "visible": false, "children": [
                    { "id": "1:3", "type": "TEXT", "characters": "never seen" },
                ]},
                { "id": "1:4", "type": "FRAME", "visible": true },
                { "id": "1:5", "type": "FRAME" },
            ],
        })));

        let ids: Vec<&str> = node.children.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1:4", "1:5"]);
        assert_eq!(node.node_count(), 3);
    }

    #[test]
    fn test_invisible_root_normalized() {
        let node = normalize(&raw(json!({
            "id": "1:1",
            "type": "FRAME",
            "visible": false,
        })));
        assert_eq!(node.id.as_str(), "1:1");
    }

    #[test]
    fn test_text_only_on_text_nodes() {
        let node = normalize(&raw(json!({
            "id": "2:1",
            "type": "FRAME",
            "characters": "not text content",
        })));
        assert_eq!(node.text, None);

        let text = normalize(&raw(json!({
            "id": "2:2",
            "type": "TEXT",
            "characters": "actual content",
        })));
        assert_eq!(text.text.as_deref(), Some("actual content"));
    }
}
