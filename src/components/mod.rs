//! Reusable UI components
//!
//! - `keybindings` - Screen-aware key registry, the source for the nav bar and help
//! - `help_overlay` - Floating help window

pub mod help_overlay;
pub mod keybindings;

pub use help_overlay::HelpOverlay;
pub use keybindings::{HelpSection, KeyAction, Keybinding, KeybindingContext, NavBarItem};
