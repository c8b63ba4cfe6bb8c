//! Selector and component names for promoted definitions.

use std::collections::HashSet;

/// Suffix appended to every shared selector.
const SHARED_SUFFIX: &str = "shared";
/// Base used when a layer name slugs down to nothing.
const FALLBACK_BASE: &str = "component";

/// The name pair a promoted component receives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintedName {
    /// Kebab-case selector, e.g. `user-card-shared`.
    pub selector: String,
    /// PascalCase component name, e.g. `UserCardShared`.
    pub component_name: String,
}

/// Mints unique name pairs from layer names.
///
/// Both the selector and the component name are kept unique across one
/// minter; a clash on either side bumps the numeric suffix for both.
#[derive(Debug, Default)]
pub struct NameMinter {
    used_selectors: HashSet<String>,
    used_names: HashSet<String>,
}

impl NameMinter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the next free name pair for a layer name. Collisions are
    /// resolved with a numeric suffix counting up from 2.
    pub fn mint(&mut self, layer_name: &str) -> MintedName {
        let mut base = slug::slugify(layer_name);
        if base.is_empty() {
            base = FALLBACK_BASE.to_string();
        }

        let mut candidate = format!("{base}-{SHARED_SUFFIX}");
        let mut counter = 2;
        loop {
            let name = pascal_case(&candidate);
            if !self.used_selectors.contains(&candidate) && !self.used_names.contains(&name) {
                self.used_selectors.insert(candidate.clone());
                self.used_names.insert(name.clone());
                return MintedName {
                    selector: candidate,
                    component_name: name,
                };
            }
            candidate = format!("{base}-{SHARED_SUFFIX}-{counter}");
            counter += 1;
        }
    }
}

fn pascal_case(selector: &str) -> String {
    selector
        .split('-')
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
