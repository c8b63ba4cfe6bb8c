//! Raw design-document model.
//!
//! This crate owns the input contract of the pipeline: a serde model of the
//! design service's node tree, plus the pure helpers that operate on it
//! before normalization (lookup by id or name, frame and component listings,
//! display summaries, and service-URL parsing). Only the documented subset of
//! the wire format is modeled; unknown fields are ignored, never rejected.

pub mod document;
pub mod link;
pub mod node;

pub use document::{
    ComponentRef, FrameRef, LayoutSummary, NodeSummary, StyleSummary, all_components, find_by_id,
    find_by_name, style_summary, summarize, summarize_shallow, top_level_frames,
};
pub use link::{LinkError, extract_file_key, extract_node_id};
pub use node::{Paint, PaintColor, RawFile, RawNode, RawTextStyle};
