//! Immutable item catalogs
//!
//! A [`Catalog`] is built once from static data, validated on construction and
//! never mutated afterwards. Products and menu entries share the [`Faceted`]
//! trait so the same filter evaluator serves both screens.

use crate::error::{Result, ShowcaseError};
use crate::filter::{self, FilterState};
use crate::types::{DietaryTag, MenuCategory, ProductCategory, ProductLabel};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::hash::Hash;

/// Non-negative amount in whole cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    /// Saturates at `u32::MAX` cents.
    pub const fn from_dollars(dollars: u32) -> Self {
        Self(dollars.saturating_mul(100))
    }

    pub const fn cents(self) -> u32 {
        self.0
    }

    /// Whole dollars, rounded up
    pub const fn dollars_ceil(self) -> u32 {
        self.0.div_ceil(100)
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }

    pub fn saturating_sub(self, other: Price) -> Price {
        Price(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// An item that can be narrowed down by category, labels and price.
pub trait Faceted {
    type Category: Copy + Eq + Ord + Hash;
    type Label: Copy + Ord;

    fn id(&self) -> u32;
    fn name(&self) -> &str;
    fn category(&self) -> Self::Category;
    fn labels(&self) -> &BTreeSet<Self::Label>;
    fn price(&self) -> Price;

    /// Item-level invariants, checked when a catalog is built.
    fn check(&self) -> Result<()> {
        Ok(())
    }
}

/// E-commerce listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: ProductCategory,
    pub labels: BTreeSet<ProductLabel>,
    /// Selling price in cents
    pub price: Price,
    /// Pre-discount price in cents; never below `price`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Price>,
}

impl Product {
    pub fn new(id: u32, name: impl Into<String>, category: ProductCategory, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            labels: BTreeSet::new(),
            price,
            original_price: None,
        }
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = ProductLabel>) -> Self {
        self.labels.extend(labels);
        self
    }

    pub fn with_original_price(mut self, original: Price) -> Self {
        self.original_price = Some(original);
        self
    }

    /// Whole-percent discount against the original price, if any
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        if original <= self.price || original == Price::ZERO {
            return None;
        }
        let saved = u64::from(original.cents() - self.price.cents());
        Some((saved * 100 / u64::from(original.cents())) as u32)
    }
}

impl Faceted for Product {
    type Category = ProductCategory;
    type Label = ProductLabel;

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> ProductCategory {
        self.category
    }

    fn labels(&self) -> &BTreeSet<ProductLabel> {
        &self.labels
    }

    fn price(&self) -> Price {
        self.price
    }

    fn check(&self) -> Result<()> {
        match self.original_price {
            Some(original) if original < self.price => Err(ShowcaseError::catalog(format!(
                "product {} has original price {} below selling price {}",
                self.id, original, self.price
            ))),
            _ => Ok(()),
        }
    }
}

/// Restaurant menu entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub category: MenuCategory,
    pub labels: BTreeSet<DietaryTag>,
    pub price: Price,
}

impl MenuItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        category: MenuCategory,
        price: Price,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category,
            labels: BTreeSet::new(),
            price,
        }
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = DietaryTag>) -> Self {
        self.labels.extend(labels);
        self
    }
}

impl Faceted for MenuItem {
    type Category = MenuCategory;
    type Label = DietaryTag;

    fn id(&self) -> u32 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> MenuCategory {
        self.category
    }

    fn labels(&self) -> &BTreeSet<DietaryTag> {
        &self.labels
    }

    fn price(&self) -> Price {
        self.price
    }
}

/// One page of a carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub title: &'static str,
    pub body: &'static str,
}

/// Validated, immutable list of items in display order
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
}

impl<T: Faceted> Catalog<T> {
    /// Build a catalog, rejecting duplicate ids and items that fail
    /// [`Faceted::check`].
    pub fn new(items: Vec<T>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(ShowcaseError::catalog(format!(
                    "duplicate item id {}",
                    item.id()
                )));
            }
            item.check()?;
        }
        Ok(Self { items })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items passing every active facet of `state`, in catalog order.
    pub fn filter(&self, state: &FilterState<T::Category, T::Label>) -> Vec<&T> {
        filter::apply(&self.items, state)
    }

    /// Highest price in the catalog, or zero when empty
    pub fn max_price(&self) -> Price {
        self.items
            .iter()
            .map(Faceted::price)
            .max()
            .unwrap_or(Price::ZERO)
    }

    /// Number of items per category; categories without items are absent.
    pub fn category_counts(&self) -> BTreeMap<T::Category, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.category()).or_insert(0) += 1;
        }
        counts
    }
}
