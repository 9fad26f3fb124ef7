//! Faceted filter state and evaluator
//!
//! A [`FilterState`] holds up to three facets (category, label set, price
//! range). [`apply`] keeps the items that pass all active facets, in their
//! original catalog order.
//!
//! # Facet semantics
//!
//! - Category: `All` passes everything, `Only(c)` passes items in `c`.
//! - Labels: an empty selection passes everything; otherwise an item passes
//!   when it carries *any* selected label (ANY-match, not ALL-match).
//! - Price: inactive when `None`; otherwise `min <= price <= max`, inclusive.

use crate::catalog::{Faceted, Price};
use crate::error::{Result, ShowcaseError};
use std::collections::BTreeSet;
use tracing::debug;

/// Single-select category facet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter<C> {
    #[default]
    All,
    Only(C),
}

impl<C: Copy + Eq> CategoryFilter<C> {
    pub fn matches(&self, category: C) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    /// Tab order: `All` first, then every category in `categories` order.
    pub fn tabs(categories: impl IntoIterator<Item = C>) -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(categories.into_iter().map(Self::Only))
            .collect()
    }
}

/// Inclusive price bounds with `min <= max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    min: Price,
    max: Price,
}

impl PriceRange {
    pub fn new(min: Price, max: Price) -> Result<Self> {
        if min > max {
            return Err(ShowcaseError::InvalidPriceRange {
                min: min.cents(),
                max: max.cents(),
            });
        }
        Ok(Self { min, max })
    }

    /// `(0, ceiling)`
    pub fn up_to(ceiling: Price) -> Self {
        Self {
            min: Price::ZERO,
            max: ceiling,
        }
    }

    pub fn min(&self) -> Price {
        self.min
    }

    pub fn max(&self) -> Price {
        self.max
    }

    pub fn contains(&self, price: Price) -> bool {
        self.min <= price && price <= self.max
    }
}

/// Current selection across all facets of one view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<C, L: Ord> {
    category: CategoryFilter<C>,
    labels: BTreeSet<L>,
    price_range: Option<PriceRange>,
    /// Range restored by [`FilterState::reset`]
    default_range: Option<PriceRange>,
}

impl<C, L: Ord> Default for FilterState<C, L> {
    fn default() -> Self {
        Self {
            category: CategoryFilter::All,
            labels: BTreeSet::new(),
            price_range: None,
            default_range: None,
        }
    }
}

impl<C: Copy + Eq, L: Copy + Ord> FilterState<C, L> {
    /// Default selection with the price facet active over `range`.
    pub fn with_price_range(range: PriceRange) -> Self {
        Self {
            price_range: Some(range),
            default_range: Some(range),
            ..Self::default()
        }
    }

    pub fn category(&self) -> CategoryFilter<C> {
        self.category
    }

    pub fn labels(&self) -> &BTreeSet<L> {
        &self.labels
    }

    pub fn price_range(&self) -> Option<PriceRange> {
        self.price_range
    }

    pub fn is_label_selected(&self, label: L) -> bool {
        self.labels.contains(&label)
    }

    pub fn select_category(&mut self, category: CategoryFilter<C>) {
        self.category = category;
    }

    /// Select `label` if absent, deselect it if present.
    pub fn toggle_label(&mut self, label: L) {
        if !self.labels.remove(&label) {
            self.labels.insert(label);
        }
    }

    pub fn clear_labels(&mut self) {
        self.labels.clear();
    }

    pub fn set_price_range(&mut self, range: Option<PriceRange>) {
        self.price_range = range;
    }

    /// Back to the state the view mounted with.
    pub fn reset(&mut self) {
        self.category = CategoryFilter::All;
        self.labels.clear();
        self.price_range = self.default_range;
    }

    /// Number of facets narrowing the result right now
    pub fn active_facet_count(&self) -> usize {
        let category = usize::from(self.category != CategoryFilter::All);
        let labels = usize::from(!self.labels.is_empty());
        let range = usize::from(self.price_range.is_some() && self.price_range != self.default_range);
        category + labels + range
    }

    pub fn is_default(&self) -> bool {
        self.active_facet_count() == 0
    }

    /// Whether `item` passes every active facet
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Faceted<Category = C, Label = L>,
    {
        self.category.matches(item.category())
            && (self.labels.is_empty() || !self.labels.is_disjoint(item.labels()))
            && self
                .price_range
                .is_none_or(|range| range.contains(item.price()))
    }
}

/// Stable filter: the items of `items` that pass `state`, in original order.
pub fn apply<'a, T: Faceted>(
    items: &'a [T],
    state: &FilterState<T::Category, T::Label>,
) -> Vec<&'a T> {
    let visible: Vec<&T> = items.iter().filter(|item| state.matches(*item)).collect();
    debug!(
        total = items.len(),
        visible = visible.len(),
        labels = state.labels().len(),
        "filter recomputed"
    );
    visible
}
