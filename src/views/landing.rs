//! Landing page: a list of the demo screens.

use crate::types::Screen;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingView {
    /// Index into [`Screen::DEMOS`]
    pub selected: usize,
}

impl LandingView {
    /// Landing page with `screen` highlighted, e.g. when returning from it.
    pub fn with_selection(screen: Screen) -> Self {
        let selected = Screen::DEMOS
            .iter()
            .position(|demo| *demo == screen)
            .unwrap_or(0);
        Self { selected }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < Screen::DEMOS.len() {
            self.selected += 1;
        }
    }

    pub fn selected_screen(&self) -> Screen {
        Screen::DEMOS[self.selected.min(Screen::DEMOS.len() - 1)]
    }
}
