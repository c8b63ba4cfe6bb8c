//! Structural fingerprints for normalized nodes.
//!
//! A fingerprint is a canonical JSON string over a node's kind, layout,
//! style, text content, and the fingerprints of its children, in order.
//! Two subtrees that would render the same way (ignoring ids and layer
//! names) share a fingerprint, which is what the component extractor
//! groups by.
//!
//! Canonical means object keys appear in lexicographic order and numbers
//! that cannot be represented in JSON are dropped rather than encoded.
//! `serde_json`'s default map preserves both properties.

use std::fmt;
use std::sync::Arc;

use canopy_ir::{NodeKind, NormalizedNode};
use canopy_style::NodeStyle;
use serde_json::{Map, Number, Value};

/// A node's structural fingerprint.
///
/// Cheap to clone and usable as a hash key. The inner string is the
/// canonical form itself, so equal fingerprints mean equal structure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signature(Arc<str>);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Computes the fingerprint of a normalized subtree.
pub fn signature_of(node: &NormalizedNode) -> Signature {
    Signature(sig_string(node).into())
}

fn sig_string(node: &NormalizedNode) -> String {
    let mut record = Map::new();
    record.insert(
        "children".to_string(),
        Value::Array(
            node.children
                .iter()
                .map(|child| Value::String(sig_string(child)))
                .collect(),
        ),
    );
    record.insert(
        "kind".to_string(),
        Value::String(node.kind.as_str().to_string()),
    );
    record.insert(
        "layout".to_string(),
        Value::String(node.layout.as_str().to_string()),
    );
    record.insert("style".to_string(), style_record(&node.style));
    // The text key appears only on text nodes, so its absence is itself
    // part of the canonical form.
    if node.kind == NodeKind::Text {
        if let Some(text) = &node.text {
            record.insert("text".to_string(), Value::String(text.clone()));
        }
    }
    Value::Object(record).to_string()
}

fn style_record(style: &NodeStyle) -> Value {
    let mut map = Map::new();
    if let Some(background) = &style.background {
        map.insert("background".to_string(), Value::String(background.clone()));
    }
    if let Some(color) = &style.color {
        map.insert("color".to_string(), Value::String(color.clone()));
    }
    if let Some(size) = style.font_size {
        map.insert("fontSize".to_string(), Value::Number(size.into()));
    }
    if let Some(weight) = style.font_weight {
        if let Some(number) = Number::from_f64(weight) {
            map.insert("fontWeight".to_string(), Value::Number(number));
        }
    }
    if let Some(width) = style.width {
        map.insert("width".to_string(), Value::Number(width.into()));
    }
    if let Some(height) = style.height {
        map.insert("height".to_string(), Value::Number(height.into()));
    }
    if let Some(padding) = style.padding {
        if let Some(number) = Number::from_f64(padding) {
            map.insert("padding".to_string(), Value::Number(number));
        }
    }
    if let Some(gap) = style.gap {
        if let Some(number) = Number::from_f64(gap) {
            map.insert("gap".to_string(), Value::Number(number));
        }
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use canopy_ir::LayoutAxis;
    use canopy_types::NodeId;

    fn plain(id: &str, name: &str) -> NormalizedNode {
        NormalizedNode {
            id: NodeId::from(id),
            name: name.to_string(),
            kind: NodeKind::Container,
            layout: LayoutAxis::None,
            text: None,
            style: NodeStyle::default(),
            children: Vec::new(),
        }
    }

    fn text(id: &str, content: &str) -> NormalizedNode {
        NormalizedNode {
            kind: NodeKind::Text,
            text: Some(content.to_string()),
            ..plain(id, "Label")
        }
    }

    #[test]
    fn test_ids_and_names_ignored() {
        let a = plain("1:1", "Card");
        let b = plain("9:9", "Completely Different");
        assert_eq!(signature_of(&a), signature_of(&b));
    }

    #[test]
    fn test_kind_layout_and_style_sensitivity() {
        let base = plain("1:1", "x");

        let control = NormalizedNode {
            kind: NodeKind::InteractiveControl,
            ..base.clone()
        };
        assert_ne!(signature_of(&base), signature_of(&control));

        let row = NormalizedNode {
            layout: LayoutAxis::Row,
            ..base.clone()
        };
        assert_ne!(signature_of(&base), signature_of(&row));

        let painted = NormalizedNode {
            style: NodeStyle {
                background: Some("rgb(0, 0, 0)".to_string()),
                ..NodeStyle::default()
            },
            ..base.clone()
        };
        assert_ne!(signature_of(&base), signature_of(&painted));
    }

    #[test]
    fn test_text_content_sensitivity() {
        let alice = text("1:1", "Alice");
        let bob = text("2:2", "Bob");
        assert_ne!(signature_of(&alice), signature_of(&bob));

        let twin = text("3:3", "Alice");
        assert_eq!(signature_of(&alice), signature_of(&twin));

        let empty = NormalizedNode {
            text: None,
            ..alice.clone()
        };
        assert_ne!(signature_of(&alice), signature_of(&empty));
    }

    #[test]
    fn test_child_order_and_count_sensitivity() {
        let title = text("1:1", "t");
        let painted = NormalizedNode {
            style: NodeStyle {
                background: Some("rgb(1, 2, 3)".to_string()),
                ..NodeStyle::default()
            },
            ..plain("1:2", "x")
        };

        let forward = NormalizedNode {
            children: vec![title.clone(), painted.clone()],
            ..plain("1:0", "row")
        };
        let backward = NormalizedNode {
            children: vec![painted.clone(), title.clone()],
            ..plain("1:0", "row")
        };
        assert_ne!(signature_of(&forward), signature_of(&backward));

        let shorter = NormalizedNode {
            children: vec![title.clone()],
            ..plain("1:0", "row")
        };
        assert_ne!(signature_of(&forward), signature_of(&shorter));
    }

    #[test]
    fn test_canonical_form() {
        let empty = plain("1:1", "Box");
        assert_eq!(
            signature_of(&empty).as_str(),
            r#"{"children":[],"kind":"container","layout":"none","style":{}}"#
        );

        let label = NormalizedNode {
            style: NodeStyle {
                color: Some("rgb(0, 0, 0)".to_string()),
                ..NodeStyle::default()
            },
            ..text("1:2", "Hi")
        };
        assert_eq!(
            signature_of(&label).as_str(),
            r#"{"children":[],"kind":"text","layout":"none","style":{"color":"rgb(0, 0, 0)"},"text":"Hi"}"#
        );
    }

    #[test]
    fn test_nan_style_values_dropped() {
        let odd = NormalizedNode {
            style: NodeStyle {
                font_weight: Some(f64::NAN),
                ..NodeStyle::default()
            },
            ..plain("1:1", "x")
        };
        assert_eq!(signature_of(&odd), signature_of(&plain("2:2", "y")));
    }
}
