//! Derives presentation styles from raw node attributes.
//!
//! The resolver reads fills, text styling, bounds, and auto-layout spacing
//! off a raw node and produces the flat [`NodeStyle`] record the rest of
//! the pipeline works with. Non-finite numbers never become a property;
//! the property is simply absent.

use canopy_raw::{Paint, RawNode};
use canopy_types::Color;
use serde::{Deserialize, Serialize};

/// The resolved presentation of a single node.
///
/// Every field is optional. `background` is set for painted non-text
/// nodes, `color` for painted text nodes; the two are never both set by
/// the resolver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

impl NodeStyle {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Resolves the style record for one raw node.
pub fn resolve_style(node: &RawNode) -> NodeStyle {
    let mut style = NodeStyle::default();

    let fill = node.fills.iter().find(|p| p.is_visible() && p.is_solid());
    if let Some(css) = fill.and_then(solid_color) {
        if node.node_type == "TEXT" {
            style.color = Some(css);
        } else {
            style.background = Some(css);
        }
    }

    if let Some(text) = &node.text_style {
        style.font_size = text.font_size.and_then(finite).map(|v| v.round() as u32);
        style.font_weight = text.font_weight.and_then(finite);
    }

    if let Some(bounds) = &node.absolute_bounding_box {
        style.width = bounds.width.and_then(finite).map(|v| v.round() as u32);
        style.height = bounds.height.and_then(finite).map(|v| v.round() as u32);
    }

    style.padding = uniform_padding(node);
    style.gap = node.item_spacing.and_then(finite);

    style
}

/// Converts a solid paint into its CSS color string. A non-finite channel
/// drops the paint; a missing or non-finite alpha and opacity count as
/// fully opaque.
fn solid_color(paint: &Paint) -> Option<String> {
    let channels = paint.color.as_ref()?;
    let r = finite(channels.r)?;
    let g = finite(channels.g)?;
    let b = finite(channels.b)?;
    let alpha = finite(channels.a).unwrap_or(1.0);
    let opacity = paint.opacity.and_then(finite).unwrap_or(1.0);
    Some(Color::from_unit(r, g, b, alpha).with_opacity(opacity).to_css())
}

/// Collapses the four padding sides into one value when they all agree.
fn uniform_padding(node: &RawNode) -> Option<f64> {
    let top = finite(node.padding_top?)?;
    let right = finite(node.padding_right?)?;
    let bottom = finite(node.padding_bottom?)?;
    let left = finite(node.padding_left?)?;
    (top == right && top == bottom && top == left).then_some(top)
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}
