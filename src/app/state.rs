//! Application state definitions
//!
//! `AppState` holds the active screen's view plus the shell flags (help
//! overlay, status line). `AppState::apply` is the only way state changes,
//! so the whole interaction model is testable without a terminal.

use crate::catalog::Price;
use crate::components::keybindings::KeyAction;
use crate::config::ShowcaseConfig;
use crate::error::Result;
use crate::types::Screen;
use crate::views::{EmailView, LandingView, MenuView, ShopView, SignupView, SubmitOutcome};
use crate::wizard::ValidationRules;
use tracing::{debug, info, warn};

/// State of the screen currently on display
#[derive(Debug, Clone)]
pub enum ActiveView {
    Landing(LandingView),
    Signup(SignupView),
    Email(EmailView),
    Menu(MenuView),
    Shop(ShopView),
}

impl ActiveView {
    pub fn screen(&self) -> Screen {
        match self {
            Self::Landing(_) => Screen::Landing,
            Self::Signup(_) => Screen::Signup,
            Self::Email(_) => Screen::Email,
            Self::Menu(_) => Screen::Menu,
            Self::Shop(_) => Screen::Shop,
        }
    }
}

/// Whether the event loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Quit,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// View of the current screen
    pub view: ActiveView,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// One-line feedback shown above the nav bar
    pub status_message: Option<String>,
    rules: ValidationRules,
    price_step: Price,
}

impl AppState {
    /// State opened on the configured start screen.
    pub fn new(config: &ShowcaseConfig) -> Self {
        let mut state = Self {
            view: ActiveView::Landing(LandingView::default()),
            help_visible: false,
            status_message: None,
            rules: config.validation_rules(),
            price_step: config.price_step(),
        };
        if config.start_screen != Screen::Landing {
            state.open(config.start_screen);
        }
        state
    }

    pub fn screen(&self) -> Screen {
        self.view.screen()
    }

    /// Whether typed characters go into a text field
    pub fn is_text_entry(&self) -> bool {
        matches!(&self.view, ActiveView::Signup(view) if view.is_text_entry())
    }

    /// Mount a fresh view for `screen`, dropping the current one.
    ///
    /// A view that fails to mount leaves the user on the landing page with the
    /// error in the status line.
    pub fn open(&mut self, screen: Screen) {
        let leaving = self.screen();
        match self.mount(screen, leaving) {
            Ok(view) => {
                info!(from = %leaving, to = %screen, "screen opened");
                self.view = view;
            }
            Err(e) => {
                warn!("failed to open {}: {}", screen, e);
                self.status_message = Some(format!("Could not open {}: {}", screen.title(), e));
                self.view = ActiveView::Landing(LandingView::with_selection(screen));
            }
        }
        self.help_visible = false;
    }

    fn mount(&self, screen: Screen, leaving: Screen) -> Result<ActiveView> {
        Ok(match screen {
            Screen::Landing => ActiveView::Landing(LandingView::with_selection(leaving)),
            Screen::Signup => ActiveView::Signup(SignupView::new(self.rules)),
            Screen::Email => ActiveView::Email(EmailView::mount()?),
            Screen::Menu => ActiveView::Menu(MenuView::mount()?),
            Screen::Shop => ActiveView::Shop(ShopView::mount(self.price_step)?),
        })
    }

    /// Apply one key action.
    pub fn apply(&mut self, action: KeyAction) -> Transition {
        debug!(?action, screen = %self.screen(), "apply");

        match action {
            KeyAction::Quit => return Transition::Quit,
            KeyAction::Help => {
                self.help_visible = !self.help_visible;
                return Transition::Continue;
            }
            _ => {}
        }

        if self.help_visible {
            // The overlay swallows input until it is closed
            if action == KeyAction::Back {
                self.help_visible = false;
            }
            return Transition::Continue;
        }

        self.status_message = None;

        match &mut self.view {
            ActiveView::Landing(view) => match action {
                KeyAction::NavigateUp => view.select_previous(),
                KeyAction::NavigateDown => view.select_next(),
                KeyAction::Select => {
                    let screen = view.selected_screen();
                    self.open(screen);
                }
                KeyAction::Back => return Transition::Quit,
                _ => {}
            },
            ActiveView::Signup(view) => match action {
                KeyAction::NavigateUp => view.focus_previous(),
                KeyAction::NavigateDown => view.focus_next(),
                KeyAction::InsertChar(c) => view.insert_char(c),
                KeyAction::DeleteChar => view.delete_char(),
                KeyAction::ToggleInterest => view.toggle_interest(),
                KeyAction::Continue => match view.submit() {
                    SubmitOutcome::Advanced | SubmitOutcome::Rejected => {}
                    SubmitOutcome::Finished => {
                        let name = view.wizard().form().name.trim().to_string();
                        self.open(Screen::Landing);
                        self.status_message = Some(format!("Welcome aboard, {}!", name));
                    }
                },
                KeyAction::Back => {
                    if !view.back() {
                        self.open(Screen::Landing);
                    }
                }
                _ => {}
            },
            ActiveView::Email(view) => match action {
                KeyAction::CarouselNext => view.next_hero(),
                KeyAction::CarouselPrevious => view.previous_hero(),
                KeyAction::CarouselJump(index) => view.jump_to_hero(index),
                KeyAction::SwitchPreview => view.switch_preview(),
                KeyAction::Back => self.open(Screen::Landing),
                _ => {}
            },
            ActiveView::Menu(view) => match action {
                KeyAction::NavigateUp => view.select_previous(),
                KeyAction::NavigateDown => view.select_next(),
                KeyAction::PreviousTab => view.previous_tab(),
                KeyAction::NextTab => view.next_tab(),
                KeyAction::ToggleDietaryTag(tag) => view.toggle_tag(tag),
                KeyAction::ResetFilters => view.reset_filters(),
                KeyAction::CarouselNext => view.next_special(),
                KeyAction::CarouselPrevious => view.previous_special(),
                KeyAction::CarouselJump(index) => view.jump_to_special(index),
                KeyAction::Back => self.open(Screen::Landing),
                _ => {}
            },
            ActiveView::Shop(view) => match action {
                KeyAction::NavigateUp => view.select_previous(),
                KeyAction::NavigateDown => view.select_next(),
                KeyAction::PreviousTab => view.previous_tab(),
                KeyAction::NextTab => view.next_tab(),
                KeyAction::ToggleProductLabel(label) => view.toggle_label(label),
                KeyAction::RaiseMaxPrice => view.raise_max_price(),
                KeyAction::LowerMaxPrice => view.lower_max_price(),
                KeyAction::RaiseMinPrice => view.raise_min_price(),
                KeyAction::LowerMinPrice => view.lower_min_price(),
                KeyAction::ResetFilters => view.reset_filters(),
                KeyAction::CarouselNext => view.next_promo(),
                KeyAction::CarouselPrevious => view.previous_promo(),
                KeyAction::CarouselJump(index) => view.jump_to_promo(index),
                KeyAction::Back => self.open(Screen::Landing),
                _ => {}
            },
        }

        Transition::Continue
    }
}
