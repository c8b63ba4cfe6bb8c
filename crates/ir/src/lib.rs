//! The normalized intermediate representation.
//!
//! A [`NormalizedNode`] tree is what the raw document becomes once node
//! types are classified, styles are resolved, and invisible branches are
//! pruned. Everything downstream of normalization works on this tree.

use canopy_style::NodeStyle;
use canopy_types::NodeId;

/// The semantic role of a normalized node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
    #[default]
    Container,
    Text,
    Image,
    InteractiveControl,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Container => "container",
            NodeKind::Text => "text",
            NodeKind::Image => "image",
            NodeKind::InteractiveControl => "interactive-control",
        }
    }
}

/// The stacking direction a container lays its children out along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LayoutAxis {
    Row,
    Column,
    #[default]
    None,
}

impl LayoutAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutAxis::Row => "row",
            LayoutAxis::Column => "column",
            LayoutAxis::None => "none",
        }
    }
}

/// One node of the normalized tree.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedNode {
    pub id: NodeId,
    pub name: String,
    pub kind: NodeKind,
    pub layout: LayoutAxis,
    /// Text content, carried only by [`NodeKind::Text`] nodes.
    pub text: Option<String>,
    pub style: NodeStyle,
    pub children: Vec<NormalizedNode>,
}

impl NormalizedNode {
    pub fn is_container(&self) -> bool {
        self.kind == NodeKind::Container
    }

    /// Counts this node and everything below it.
    pub fn node_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(NormalizedNode::node_count)
            .sum::<usize>()
    }
}
