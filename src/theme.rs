//! Centralized theme and styling for the TUI
//!
//! All colors and styles used by the renderers live here rather than being
//! hardcoded in widgets.
//!
//! # Usage
//! ```rust
//! use uxshowcase::theme::{Colors, Styles};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! ```

use crate::types::{DietaryTag, ProductLabel};
use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Dark background for overlays and cards
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Gauge/progress bar background
    pub const BG_GAUGE: Color = Color::Rgb(40, 40, 50);

    pub const FG_PRIMARY: Color = Color::White;
    pub const FG_SECONDARY: Color = Color::Gray;
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Selected items, emphasis
    pub const SECONDARY: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // Semantic Colors
    // -------------------------------------------------------------------------

    pub const SUCCESS: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
    pub const INFO: Color = Color::Blue;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    pub const BORDER_ACTIVE: Color = Color::Cyan;
    pub const BORDER_INACTIVE: Color = Color::DarkGray;
    pub const SELECTED_BG: Color = Color::Yellow;
    /// Selected item text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;
    pub const PROGRESS: Color = Color::Green;

    // -------------------------------------------------------------------------
    // Badge Colors
    // -------------------------------------------------------------------------

    pub const BADGE_POPULAR: Color = Color::Magenta;
    pub const BADGE_SALE: Color = Color::Red;
    pub const BADGE_NEW: Color = Color::Green;
    pub const BADGE_DIET: Color = Color::LightGreen;
    pub const BADGE_SPICY: Color = Color::LightRed;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI patterns
pub struct Styles;

impl Styles {
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    pub fn text_secondary() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Main title style (cyan, bold)
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    pub fn panel_bg() -> Style {
        Style::default().bg(Colors::BG_PRIMARY)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Focused item (cyan highlight)
    pub fn focused() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn success() -> Style {
        Style::default().fg(Colors::SUCCESS)
    }

    pub fn warning() -> Style {
        Style::default().fg(Colors::WARNING)
    }

    pub fn error() -> Style {
        Style::default().fg(Colors::ERROR)
    }

    /// Enabled button
    pub fn button_active() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Disabled button
    pub fn button_disabled() -> Style {
        Style::default()
            .fg(Colors::FG_MUTED)
            .add_modifier(Modifier::CROSSED_OUT)
    }

    pub fn progress() -> Style {
        Style::default().fg(Colors::PROGRESS).bg(Colors::BG_GAUGE)
    }

    /// Navigation hint (keybindings)
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Key caption in the nav bar
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::SECONDARY)
            .add_modifier(Modifier::BOLD)
    }
}

// =============================================================================
// THEME CONTEXT
// =============================================================================

/// Semantic style lookups
pub struct Theme;

impl Theme {
    pub fn product_label(label: ProductLabel) -> Style {
        let color = match label {
            ProductLabel::Popular => Colors::BADGE_POPULAR,
            ProductLabel::Sale => Colors::BADGE_SALE,
            ProductLabel::New => Colors::BADGE_NEW,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn dietary_tag(tag: DietaryTag) -> Style {
        let color = match tag {
            DietaryTag::Popular => Colors::BADGE_POPULAR,
            DietaryTag::Spicy => Colors::BADGE_SPICY,
            DietaryTag::Vegetarian | DietaryTag::Vegan | DietaryTag::GlutenFree => {
                Colors::BADGE_DIET
            }
        };
        Style::default().fg(color)
    }

    /// Style of a filter toggle chip
    pub fn chip(active: bool) -> Style {
        if active {
            Styles::selected()
        } else {
            Styles::text_secondary()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sale_badge_is_red() {
        assert_eq!(Theme::product_label(ProductLabel::Sale).fg, Some(Colors::BADGE_SALE));
    }

    #[test]
    fn test_chip_styles_differ() {
        assert_ne!(Theme::chip(true), Theme::chip(false));
    }
}
