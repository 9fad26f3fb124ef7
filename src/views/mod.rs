//! Per-screen view state.
//!
//! Each screen owns one explicit state struct. A view is created when its
//! screen opens and dropped when the user leaves, so nothing carries over
//! between visits. All mutation goes through methods that delegate to the
//! pure filter, cursor and wizard types.

pub mod email;
pub mod landing;
pub mod menu;
pub mod shop;
pub mod signup;

pub use email::EmailView;
pub use landing::LandingView;
pub use menu::MenuView;
pub use shop::ShopView;
pub use signup::{SignupView, SubmitOutcome};

use crate::cursor::Carousel;
use crate::error::Result;
use crate::filter::CategoryFilter;

/// Category tab strip; switching tabs wraps around like a carousel.
#[derive(Debug, Clone)]
pub struct CategoryTabs<C> {
    tabs: Vec<CategoryFilter<C>>,
    cursor: Carousel,
}

impl<C: Copy + Eq> CategoryTabs<C> {
    /// `All` followed by `categories`.
    pub fn new(categories: impl IntoIterator<Item = C>) -> Result<Self> {
        let tabs = CategoryFilter::tabs(categories);
        let cursor = Carousel::new(tabs.len())?;
        Ok(Self { tabs, cursor })
    }

    pub fn tabs(&self) -> &[CategoryFilter<C>] {
        &self.tabs
    }

    pub fn active_index(&self) -> usize {
        self.cursor.position()
    }

    pub fn active(&self) -> CategoryFilter<C> {
        self.tabs[self.cursor.position()]
    }

    pub fn next(&mut self) -> CategoryFilter<C> {
        self.cursor.advance();
        self.active()
    }

    pub fn previous(&mut self) -> CategoryFilter<C> {
        self.cursor.retreat();
        self.active()
    }

    /// Back to the `All` tab.
    pub fn reset(&mut self) {
        // Slide 0 always exists
        let _ = self.cursor.jump_to(0);
    }
}

/// Keep a list selection inside `[0, len)`; 0 for an empty list.
pub(crate) fn clamp_selection(selected: usize, len: usize) -> usize {
    selected.min(len.saturating_sub(1))
}
