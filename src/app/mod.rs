//! Application module
//!
//! Contains the event loop that ties key events, state and rendering together.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, ActiveView, Transition)
//! - Main module - App struct and event loop

mod state;

pub use state::{ActiveView, AppState, Transition};

use crate::components::keybindings::KeybindingContext;
use crate::config::ShowcaseConfig;
use crate::error::Result;
use crate::ui::UiRenderer;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::Backend};
use tracing::{debug, info};

/// Main application struct
pub struct App {
    state: AppState,
    ui_renderer: UiRenderer,
    /// Keybinding context for key resolution and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    pub fn new(config: &ShowcaseConfig) -> Self {
        Self {
            state: AppState::new(config),
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop until the user quits.
    ///
    /// There are no timers, so the loop blocks on the next terminal event.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!(screen = %self.state.screen(), "starting main application loop");

        loop {
            self.draw(terminal)?;

            match crossterm::event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    if self.handle_key_event(key_event) == Transition::Quit {
                        break;
                    }
                }
                // Redrawn at the top of the loop
                Event::Resize(width, height) => debug!(width, height, "terminal resized"),
                _ => {}
            }
        }

        info!("main application loop finished");
        Ok(())
    }

    /// Render the current state once
    pub fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal.draw(|f| {
            self.ui_renderer
                .render(f, &self.state, &self.keybinding_context)
        })?;
        Ok(())
    }

    /// Resolve a key event against the active screen and apply it
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Transition {
        let action = self.keybinding_context.resolve(
            self.state.screen(),
            key_event,
            self.state.is_text_entry() && !self.state.help_visible,
        );
        match action {
            Some(action) => self.state.apply(action),
            None => Transition::Continue,
        }
    }
}
