//! The end-to-end transformation pipeline.

use canopy_extract::{ComponentLibrary, extract_components};
use canopy_ir::NormalizedNode;
use canopy_normalize::normalize;
use canopy_raw::RawNode;
use canopy_tokens::TokenResolver;
use log::debug;

/// Everything the pipeline derives from one raw subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    /// The normalized tree.
    pub root: NormalizedNode,
    /// Shared definitions promoted out of the tree, in first-seen order.
    pub components: ComponentLibrary,
    /// Token table over the tree and the promoted definitions.
    pub tokens: TokenResolver,
}

/// Runs normalization, component extraction, and token resolution over
/// one raw subtree, typically a frame picked from a file's pages.
pub fn transform(raw: &RawNode) -> Screen {
    let root = normalize(raw);
    debug!(
        "normalized '{}' into {} node(s)",
        root.name,
        root.node_count()
    );

    let components = extract_components(&root);
    let tokens = TokenResolver::build(
        std::iter::once(&root).chain(components.components().iter().map(|c| &c.node)),
    );
    debug!(
        "transformed '{}': {} shared component(s), {} token(s)",
        root.name,
        components.len(),
        tokens.len()
    );

    Screen {
        root,
        components,
        tokens,
    }
}
