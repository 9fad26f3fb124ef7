//! E-commerce listing: category tabs, label toggles, a price range and a
//! promo carousel over the product catalog.

use super::{CategoryTabs, clamp_selection};
use crate::catalog::{Catalog, Price, Product, Slide};
use crate::cursor::Carousel;
use crate::data;
use crate::error::Result;
use crate::filter::{FilterState, PriceRange};
use crate::types::{ProductCategory, ProductLabel};
use strum::IntoEnumIterator;
use tracing::debug;

/// Filter selection of the shop listing
pub type ProductFilter = FilterState<ProductCategory, ProductLabel>;

#[derive(Debug, Clone)]
pub struct ShopView {
    catalog: Catalog<Product>,
    filter: ProductFilter,
    tabs: CategoryTabs<ProductCategory>,
    promos: &'static [Slide],
    promo_cursor: Carousel,
    selected: usize,
    price_step: Price,
    ceiling: Price,
}

impl ShopView {
    /// Shop over the compiled-in catalog.
    pub fn mount(price_step: Price) -> Result<Self> {
        Self::new(data::sample_products()?, data::SHOP_PROMOS, price_step)
    }

    /// The price ceiling is the most expensive item rounded up to a whole
    /// step, and the price facet starts out spanning `(0, ceiling)`.
    pub fn new(catalog: Catalog<Product>, promos: &'static [Slide], price_step: Price) -> Result<Self> {
        let step = price_step.cents().max(1);
        let ceiling = Price::from_cents(catalog.max_price().cents().div_ceil(step).saturating_mul(step));
        Ok(Self {
            filter: ProductFilter::with_price_range(PriceRange::up_to(ceiling)),
            tabs: CategoryTabs::new(ProductCategory::iter())?,
            promo_cursor: Carousel::new(promos.len())?,
            promos,
            catalog,
            selected: 0,
            price_step: Price::from_cents(step),
            ceiling,
        })
    }

    pub fn catalog(&self) -> &Catalog<Product> {
        &self.catalog
    }

    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    pub fn tabs(&self) -> &CategoryTabs<ProductCategory> {
        &self.tabs
    }

    pub fn ceiling(&self) -> Price {
        self.ceiling
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Products passing the current filter, in catalog order
    pub fn visible(&self) -> Vec<&Product> {
        self.catalog.filter(&self.filter)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.visible().get(self.selected).copied()
    }

    pub fn promos(&self) -> &'static [Slide] {
        self.promos
    }

    pub fn promo_cursor(&self) -> &Carousel {
        &self.promo_cursor
    }

    pub fn current_promo(&self) -> &'static Slide {
        let promos: &'static [Slide] = self.promos;
        &promos[self.promo_cursor.position()]
    }

    pub fn next_tab(&mut self) {
        let tab = self.tabs.next();
        self.filter.select_category(tab);
        self.refilter();
    }

    pub fn previous_tab(&mut self) {
        let tab = self.tabs.previous();
        self.filter.select_category(tab);
        self.refilter();
    }

    pub fn toggle_label(&mut self, label: ProductLabel) {
        self.filter.toggle_label(label);
        self.refilter();
    }

    pub fn raise_max_price(&mut self) {
        self.adjust_range(|min, max, step, ceiling| (min, max.saturating_add(step).min(ceiling)));
    }

    pub fn lower_max_price(&mut self) {
        self.adjust_range(|min, max, step, _| (min, max.saturating_sub(step).max(min)));
    }

    pub fn raise_min_price(&mut self) {
        self.adjust_range(|min, max, step, _| (min.saturating_add(step).min(max), max));
    }

    pub fn lower_min_price(&mut self) {
        self.adjust_range(|min, max, step, _| (min.saturating_sub(step), max));
    }

    /// Clear every facet and return to the `All` tab.
    pub fn reset_filters(&mut self) {
        self.filter.reset();
        self.tabs.reset();
        self.refilter();
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        self.selected = clamp_selection(self.selected + 1, self.visible().len());
    }

    pub fn next_promo(&mut self) {
        self.promo_cursor.advance();
    }

    pub fn previous_promo(&mut self) {
        self.promo_cursor.retreat();
    }

    /// Direct jump from a number key; an index past the last promo is ignored.
    pub fn jump_to_promo(&mut self, index: usize) {
        if let Err(e) = self.promo_cursor.jump_to(index) {
            debug!("promo jump ignored: {}", e);
        }
    }

    fn adjust_range(&mut self, f: impl FnOnce(Price, Price, Price, Price) -> (Price, Price)) {
        let current = self
            .filter
            .price_range()
            .unwrap_or(PriceRange::up_to(self.ceiling));
        let (min, max) = f(current.min(), current.max(), self.price_step, self.ceiling);
        match PriceRange::new(min, max) {
            Ok(range) => {
                debug!(min = %range.min(), max = %range.max(), "price range changed");
                self.filter.set_price_range(Some(range));
                self.refilter();
            }
            Err(e) => debug!("price range change ignored: {}", e),
        }
    }

    fn refilter(&mut self) {
        self.selected = clamp_selection(self.selected, self.visible().len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::CategoryFilter;

    fn shop() -> ShopView {
        ShopView::mount(Price::from_dollars(50)).unwrap()
    }

    #[test]
    fn test_mounts_with_everything_visible() {
        let view = shop();
        assert_eq!(view.visible().len(), view.catalog().len());
        assert!(view.filter().is_default());
        assert_eq!(view.ceiling(), Price::from_dollars(250));
    }

    #[test]
    fn test_tab_switch_narrows_and_clamps_selection() {
        let mut view = shop();
        for _ in 0..5 {
            view.select_next();
        }
        assert_eq!(view.selected(), 5);
        view.next_tab();
        assert_eq!(view.filter().category(), CategoryFilter::Only(ProductCategory::Clothing));
        assert_eq!(view.visible().len(), 2);
        assert_eq!(view.selected(), 1);
    }

    #[test]
    fn test_max_price_never_drops_below_min() {
        let mut view = shop();
        view.raise_min_price();
        for _ in 0..10 {
            view.lower_max_price();
        }
        let range = view.filter().price_range().unwrap();
        assert_eq!(range.min(), range.max());
        assert_eq!(range.min(), Price::from_dollars(50));
    }

    #[test]
    fn test_max_price_never_exceeds_ceiling() {
        let mut view = shop();
        view.raise_max_price();
        assert_eq!(view.filter().price_range().unwrap().max(), view.ceiling());
    }

    #[test]
    fn test_zero_results_is_a_valid_state() {
        let mut view = shop();
        // Bags tab, then only items on sale: the duffel is not
        for _ in 0..4 {
            view.next_tab();
        }
        view.toggle_label(ProductLabel::Sale);
        assert!(view.visible().is_empty());
        assert!(view.selected_product().is_none());
        view.reset_filters();
        assert_eq!(view.visible().len(), 6);
        assert_eq!(view.tabs().active_index(), 0);
    }

    #[test]
    fn test_promo_jump_out_of_range_is_ignored() {
        let mut view = shop();
        view.jump_to_promo(1);
        view.jump_to_promo(99);
        assert_eq!(view.promo_cursor().position(), 1);
        view.previous_promo();
        view.previous_promo();
        assert_eq!(view.promo_cursor().position(), view.promos().len() - 1);
    }
}
