use serde::{Deserialize, Serialize};

/// Resolved bounding box of a raw node, as reported by the design service.
/// Individual fields can be missing in degenerate documents, so every one is
/// optional rather than defaulted to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

/// Width/height pair used in node summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl From<&BoundingBox> for Size {
    fn from(bounds: &BoundingBox) -> Self {
        Self { width: bounds.width, height: bounds.height }
    }
}
