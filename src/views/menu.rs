//! Restaurant menu browser: category tabs, dietary filters and a chef's
//! specials carousel.

use super::{CategoryTabs, clamp_selection};
use crate::catalog::{Catalog, MenuItem, Slide};
use crate::cursor::Carousel;
use crate::data;
use crate::error::Result;
use crate::filter::FilterState;
use crate::types::{DietaryTag, MenuCategory};
use strum::IntoEnumIterator;
use tracing::debug;

/// Filter selection of the menu; the price facet stays inactive.
pub type MenuFilter = FilterState<MenuCategory, DietaryTag>;

#[derive(Debug, Clone)]
pub struct MenuView {
    catalog: Catalog<MenuItem>,
    filter: MenuFilter,
    tabs: CategoryTabs<MenuCategory>,
    specials: &'static [Slide],
    specials_cursor: Carousel,
    selected: usize,
}

impl MenuView {
    pub fn mount() -> Result<Self> {
        Self::new(data::sample_menu()?, data::MENU_SPECIALS)
    }

    pub fn new(catalog: Catalog<MenuItem>, specials: &'static [Slide]) -> Result<Self> {
        Ok(Self {
            catalog,
            filter: MenuFilter::default(),
            tabs: CategoryTabs::new(MenuCategory::iter())?,
            specials_cursor: Carousel::new(specials.len())?,
            specials,
            selected: 0,
        })
    }

    pub fn catalog(&self) -> &Catalog<MenuItem> {
        &self.catalog
    }

    pub fn filter(&self) -> &MenuFilter {
        &self.filter
    }

    pub fn tabs(&self) -> &CategoryTabs<MenuCategory> {
        &self.tabs
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn visible(&self) -> Vec<&MenuItem> {
        self.catalog.filter(&self.filter)
    }

    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.visible().get(self.selected).copied()
    }

    pub fn specials(&self) -> &'static [Slide] {
        self.specials
    }

    pub fn specials_cursor(&self) -> &Carousel {
        &self.specials_cursor
    }

    pub fn current_special(&self) -> &'static Slide {
        let specials: &'static [Slide] = self.specials;
        &specials[self.specials_cursor.position()]
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

    pub fn toggle_tag(&mut self, tag: DietaryTag) {
        self.filter.toggle_label(tag);
        self.refilter();
    }

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

    pub fn next_special(&mut self) {
        self.specials_cursor.advance();
    }

    pub fn previous_special(&mut self) {
        self.specials_cursor.retreat();
    }

    pub fn jump_to_special(&mut self, index: usize) {
        if let Err(e) = self.specials_cursor.jump_to(index) {
            debug!("specials jump ignored: {}", e);
        }
    }

    fn refilter(&mut self) {
        self.selected = clamp_selection(self.selected, self.visible().len());
    }
}
