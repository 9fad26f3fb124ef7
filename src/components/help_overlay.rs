//! Help overlay component
//!
//! Displays context-sensitive help in a centered window drawn over the
//! current screen.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::theme::{Colors, Styles};
use crate::types::Screen;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    const WIDTH_PERCENT: u16 = 60;
    const MIN_WIDTH: u16 = 44;
    const MAX_WIDTH: u16 = 72;

    /// Create a new help overlay for the given screen
    pub fn new(screen: Screen, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(screen);
        Self {
            content: Self::build_content(&sections, screen),
        }
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.content
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], screen: Screen) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = vec![
            Line::from(vec![
                Span::styled("Current: ", Styles::text_muted()),
                Span::styled(screen.title(), Style::default().fg(Colors::SECONDARY)),
            ]),
            Line::from(""),
        ];

        for section in sections {
            lines.push(Line::from(Span::styled(
                format!("  {}", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(format!("{:<8}", key), Styles::focused()),
                    Span::styled(description.clone(), Styles::text()),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines
    }

    /// Render the help overlay centered in `parent`
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let percent_width = u32::from(parent.width) * u32::from(Self::WIDTH_PERCENT) / 100;
        let width = u16::try_from(percent_width)
            .unwrap_or(u16::MAX)
            .clamp(Self::MIN_WIDTH, Self::MAX_WIDTH)
            .min(parent.width);
        // Content plus borders
        let height = (self.content.len() as u16 + 2).min(parent.height);
        let area = centered_rect(parent, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .title_style(Styles::title())
            .title_bottom(Line::from(" Press ? or Esc to close ").alignment(Alignment::Center))
            .border_style(Styles::border_active())
            .style(Styles::panel_bg());

        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(self.content.clone()).block(block), area);
    }
}

/// A `width` x `height` rect centered in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_screen_bindings() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(Screen::Shop, &ctx);
        let text: String = overlay
            .lines()
            .iter()
            .flat_map(|line| line.spans.iter().map(|span| span.content.to_string()))
            .collect();
        assert!(text.contains("Shop Listing"));
        assert!(text.contains("Raise max price"));
        assert!(text.contains("1-9"));
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered_rect(area, 40, 10);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }
}
