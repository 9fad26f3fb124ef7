//! User interface rendering module
//!
//! Rendering is a pure function of `AppState`; nothing here mutates state.
//! - `header` - Banner, title, nav bar and shared widgets (tabs, carousel)
//! - `landing`, `signup`, `email`, `menu`, `shop` - One renderer per screen

mod email;
mod header;
mod landing;
mod menu;
mod shop;
mod signup;

pub use header::HeaderRenderer;

use crate::app::{ActiveView, AppState};
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

/// UI renderer for the application
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Render the complete UI: active screen, status line, nav bar, and the
    /// help overlay on top when visible.
    pub fn render(&self, f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
        let screen = state.screen();
        let [content_area, status_area, nav_bar_area] = Layout::vertical([
            Constraint::Min(1),    // Main content area
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Navigation bar
        ])
        .areas(f.area());

        match &state.view {
            ActiveView::Landing(view) => {
                landing::render_landing(f, content_area, view, &self.header);
            }
            other => {
                let [title_area, body_area] =
                    Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(content_area);
                self.header.render_title(f, title_area, screen);
                match other {
                    ActiveView::Signup(view) => signup::render_signup(f, body_area, view),
                    ActiveView::Email(view) => email::render_email(f, body_area, view),
                    ActiveView::Menu(view) => menu::render_menu(f, body_area, view),
                    ActiveView::Shop(view) => shop::render_shop(f, body_area, view),
                    ActiveView::Landing(_) => {}
                }
            }
        }

        header::render_status(f, status_area, state.status_message.as_deref());
        header::render_nav_bar(f, nav_bar_area, &keybinding_ctx.get_nav_items(screen));

        if state.help_visible {
            header::render_help_overlay(f, screen, keybinding_ctx);
        }
    }
}
