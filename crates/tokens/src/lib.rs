//! Design token resolution.
//!
//! The resolver scans normalized trees for style values and assigns each
//! distinct value a stable symbol within its domain. Colors keep the
//! order they were first encountered in; the numeric domains are sorted
//! ascending. Symbols are one-based, so the first color is `color-1`.
//!
//! Color identity is the exact CSS string. Two strings that would paint
//! the same pixels but are spelled differently stay separate tokens.

use std::collections::{HashMap, HashSet};
use std::fmt;

use canopy_ir::NormalizedNode;
use itertools::Itertools;
use log::debug;

/// The four value domains tokens are minted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenDomain {
    Color,
    FontSize,
    FontWeight,
    Spacing,
}

impl TokenDomain {
    /// The symbol prefix of the domain.
    pub fn prefix(&self) -> &'static str {
        match self {
            TokenDomain::Color => "color",
            TokenDomain::FontSize => "font-size",
            TokenDomain::FontWeight => "font-weight",
            TokenDomain::Spacing => "spacing",
        }
    }
}

impl fmt::Display for TokenDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// The concrete value behind a token symbol.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Color(String),
    FontSize(u32),
    FontWeight(f64),
    Spacing(f64),
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Color(css) => f.write_str(css),
            TokenValue::FontSize(size) => write!(f, "{size}px"),
            TokenValue::FontWeight(weight) => write!(f, "{weight}"),
            TokenValue::Spacing(value) => write!(f, "{value}px"),
        }
    }
}

/// One row of the resolved token table.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenEntry {
    pub domain: TokenDomain,
    pub symbol: String,
    pub value: TokenValue,
}

/// The token table of one or more trees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenResolver {
    colors: Vec<String>,
    color_index: HashMap<String, usize>,
    font_sizes: Vec<u32>,
    font_weights: Vec<f64>,
    spacings: Vec<f64>,
}

impl TokenResolver {
    /// Builds the table from any number of normalized trees, visited in
    /// the order given.
    pub fn build<'a, I>(roots: I) -> Self
    where
        I: IntoIterator<Item = &'a NormalizedNode>,
    {
        let mut collector = Collector::default();
        for root in roots {
            collector.visit(root);
        }

        let font_sizes: Vec<u32> = collector
            .font_sizes
            .into_iter()
            .sorted_unstable()
            .dedup()
            .collect();
        let font_weights: Vec<f64> = collector
            .font_weights
            .into_iter()
            .sorted_unstable_by(|a, b| a.total_cmp(b))
            .dedup()
            .collect();
        let spacings: Vec<f64> = collector
            .spacings
            .into_iter()
            .sorted_unstable_by(|a, b| a.total_cmp(b))
            .dedup()
            .collect();

        let color_index = collector
            .colors
            .iter()
            .enumerate()
            .map(|(index, color)| (color.clone(), index))
            .collect();

        let resolver = Self {
            colors: collector.colors,
            color_index,
            font_sizes,
            font_weights,
            spacings,
        };
        debug!(
            "token table: {} color(s), {} font size(s), {} font weight(s), {} spacing(s)",
            resolver.colors.len(),
            resolver.font_sizes.len(),
            resolver.font_weights.len(),
            resolver.spacings.len()
        );
        resolver
    }

    /// The symbol of a color, if the exact string was seen.
    pub fn color_token(&self, css: &str) -> Option<String> {
        self.color_index
            .get(css)
            .map(|&index| symbol(TokenDomain::Color, index))
    }

    pub fn font_size_token(&self, size: u32) -> Option<String> {
        self.font_sizes
            .binary_search(&size)
            .ok()
            .map(|index| symbol(TokenDomain::FontSize, index))
    }

    pub fn font_weight_token(&self, weight: f64) -> Option<String> {
        self.font_weights
            .binary_search_by(|probe| probe.total_cmp(&weight))
            .ok()
            .map(|index| symbol(TokenDomain::FontWeight, index))
    }

    pub fn spacing_token(&self, value: f64) -> Option<String> {
        self.spacings
            .binary_search_by(|probe| probe.total_cmp(&value))
            .ok()
            .map(|index| symbol(TokenDomain::Spacing, index))
    }

    /// Resolves a symbol like `color-2` back to its value.
    pub fn lookup(&self, token: &str) -> Option<TokenValue> {
        let (prefix, rank) = token.rsplit_once('-')?;
        let rank: usize = rank.parse().ok()?;
        let index = rank.checked_sub(1)?;
        match prefix {
            "color" => self.colors.get(index).cloned().map(TokenValue::Color),
            "font-size" => self.font_sizes.get(index).copied().map(TokenValue::FontSize),
            "font-weight" => self
                .font_weights
                .get(index)
                .copied()
                .map(TokenValue::FontWeight),
            "spacing" => self.spacings.get(index).copied().map(TokenValue::Spacing),
            _ => None,
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn font_sizes(&self) -> &[u32] {
        &self.font_sizes
    }

    pub fn font_weights(&self) -> &[f64] {
        &self.font_weights
    }

    pub fn spacings(&self) -> &[f64] {
        &self.spacings
    }

    /// Total number of tokens across all domains.
    pub fn len(&self) -> usize {
        self.colors.len() + self.font_sizes.len() + self.font_weights.len() + self.spacings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every token with its symbol and value, domain by domain.
    pub fn entries(&self) -> Vec<TokenEntry> {
        let mut entries = Vec::with_capacity(self.len());
        for (index, color) in self.colors.iter().enumerate() {
            entries.push(TokenEntry {
                domain: TokenDomain::Color,
                symbol: symbol(TokenDomain::Color, index),
                value: TokenValue::Color(color.clone()),
            });
        }
        for (index, size) in self.font_sizes.iter().enumerate() {
            entries.push(TokenEntry {
                domain: TokenDomain::FontSize,
                symbol: symbol(TokenDomain::FontSize, index),
                value: TokenValue::FontSize(*size),
            });
        }
        for (index, weight) in self.font_weights.iter().enumerate() {
            entries.push(TokenEntry {
                domain: TokenDomain::FontWeight,
                symbol: symbol(TokenDomain::FontWeight, index),
                value: TokenValue::FontWeight(*weight),
            });
        }
        for (index, value) in self.spacings.iter().enumerate() {
            entries.push(TokenEntry {
                domain: TokenDomain::Spacing,
                symbol: symbol(TokenDomain::Spacing, index),
                value: TokenValue::Spacing(*value),
            });
        }
        entries
    }
}

fn symbol(domain: TokenDomain, index: usize) -> String {
    format!("{}-{}", domain.prefix(), index + 1)
}

/// Gathers raw style values in document order.
#[derive(Default)]
struct Collector {
    colors: Vec<String>,
    seen_colors: HashSet<String>,
    font_sizes: Vec<u32>,
    font_weights: Vec<f64>,
    spacings: Vec<f64>,
}

impl Collector {
    fn visit(&mut self, node: &NormalizedNode) {
        let style = &node.style;
        // Background before text color keeps the encounter order of the
        // node's own properties well defined.
        for color in [&style.background, &style.color].into_iter().flatten() {
            if self.seen_colors.insert(color.clone()) {
                self.colors.push(color.clone());
            }
        }
        if let Some(size) = style.font_size {
            self.font_sizes.push(size);
        }
        if let Some(weight) = style.font_weight {
            self.font_weights.push(weight);
        }
        for value in [style.padding, style.gap].into_iter().flatten() {
            self.spacings.push(value);
        }
        for child in &node.children {
            self.visit(child);
        }
    }
}
