//! # canopy
//!
//! Design-tree transformation engine for code generation.
//!
//! Canopy takes the raw node tree a design service returns and turns it
//! into material a code generator can work from:
//! - **raw**: serde model of the wire format, document queries, share links
//! - **style**: resolution of fills, text styling, bounds, and spacing
//! - **normalize**: classification and pruning into the intermediate tree
//! - **signature**: canonical structural fingerprints
//! - **extract**: promotion of repeated structures into shared components
//! - **tokens**: design token tables over colors, type, and spacing
//!
//! The member crates can be used on their own; [`transform`] runs the
//! whole pipeline over one subtree.

pub mod pipeline;

pub use pipeline::{Screen, transform};

// Shared primitives
pub use canopy_types::{BoundingBox, Color, NodeId, Size};

// Wire model and document queries
pub use canopy_raw::{
    ComponentRef, FrameRef, LayoutSummary, LinkError, NodeSummary, Paint, PaintColor, RawFile,
    RawNode, RawTextStyle, StyleSummary, all_components, extract_file_key, extract_node_id,
    find_by_id, find_by_name, style_summary, summarize, summarize_shallow, top_level_frames,
};

// Style resolution
pub use canopy_style::{NodeStyle, resolve_style};

// Intermediate representation
pub use canopy_ir::{LayoutAxis, NodeKind, NormalizedNode};

// Pipeline stages
pub use canopy_extract::{
    ComponentLibrary, MintedName, NameMinter, SharedComponent, extract_components,
};
pub use canopy_normalize::{classify_kind, classify_layout, normalize};
pub use canopy_signature::{Signature, signature_of};
pub use canopy_tokens::{TokenDomain, TokenEntry, TokenResolver, TokenValue};
