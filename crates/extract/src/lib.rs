//! Promotion of repeated structures into shared component definitions.
//!
//! The extractor walks a normalized tree, fingerprints every container
//! that is large enough to be interesting, and promotes each fingerprint
//! that occurs more than once. The first occurrence becomes the
//! representative subtree; later occurrences only raise the count.

pub mod naming;

pub use naming::{MintedName, NameMinter};

use std::collections::HashMap;

use canopy_ir::NormalizedNode;
use canopy_signature::{Signature, signature_of};
use log::debug;

/// Containers with fewer children than this are never candidates.
const MIN_CHILDREN: usize = 2;
/// A structure must occur this often to be promoted.
const MIN_OCCURRENCES: usize = 2;

/// A promoted definition together with how often it occurs.
#[derive(Debug, Clone, PartialEq)]
pub struct SharedComponent {
    /// PascalCase component name.
    pub name: String,
    /// Kebab-case selector.
    pub selector: String,
    pub signature: Signature,
    /// The first occurrence, kept whole as the representative subtree.
    pub node: NormalizedNode,
    pub occurrences: usize,
}

/// The definitions extracted from one screen, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentLibrary {
    components: Vec<SharedComponent>,
    by_signature: HashMap<Signature, usize>,
}

impl ComponentLibrary {
    pub fn components(&self) -> &[SharedComponent] {
        &self.components
    }

    /// Looks a definition up by the fingerprint of an occurrence.
    pub fn find(&self, signature: &Signature) -> Option<&SharedComponent> {
        self.by_signature
            .get(signature)
            .map(|&index| &self.components[index])
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

struct Bucket<'a> {
    count: usize,
    sample: &'a NormalizedNode,
}

/// Fingerprint buckets in first-seen order.
#[derive(Default)]
struct Buckets<'a> {
    order: Vec<Signature>,
    by_signature: HashMap<Signature, Bucket<'a>>,
}

impl<'a> Buckets<'a> {
    fn collect(&mut self, node: &'a NormalizedNode) {
        if node.is_container() && node.children.len() >= MIN_CHILDREN {
            let signature = signature_of(node);
            match self.by_signature.get_mut(&signature) {
                Some(bucket) => bucket.count += 1,
                None => {
                    self.order.push(signature.clone());
                    self.by_signature
                        .insert(signature, Bucket { count: 1, sample: node });
                }
            }
        }
        for child in &node.children {
            self.collect(child);
        }
    }
}

/// Extracts the shared components of the subtree rooted at `root`.
pub fn extract_components(root: &NormalizedNode) -> ComponentLibrary {
    let mut buckets = Buckets::default();
    buckets.collect(root);
    let Buckets {
        order,
        mut by_signature,
    } = buckets;

    let mut minter = NameMinter::new();
    let mut library = ComponentLibrary::default();
    for signature in order {
        let Some(bucket) = by_signature.remove(&signature) else {
            continue;
        };
        if bucket.count < MIN_OCCURRENCES {
            continue;
        }
        let minted = minter.mint(&bucket.sample.name);
        debug!(
            "promoting '{}' as {} ({} occurrences)",
            bucket.sample.name, minted.selector, bucket.count
        );
        let index = library.components.len();
        library.by_signature.insert(signature.clone(), index);
        library.components.push(SharedComponent {
            name: minted.component_name,
            selector: minted.selector,
            signature,
            node: bucket.sample.clone(),
            occurrences: bucket.count,
        });
    }
    debug!("extracted {} shared component(s)", library.len());
    library
}
