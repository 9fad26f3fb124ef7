//! Header and common widget rendering
//!
//! This module contains the banner, screen title, nav bar, tab strips and
//! carousel widgets shared by the screens.

use crate::catalog::Slide;
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::{KeybindingContext, NavBarItem};
use crate::cursor::Carousel;
use crate::theme::{Colors, Styles};
use crate::types::Screen;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

/// Header renderer containing the landing banner
pub struct HeaderRenderer {
    banner_lines: Vec<Line<'static>>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    pub fn new() -> Self {
        Self {
            banner_lines: Self::create_banner(),
        }
    }

    /// Height the banner needs
    pub fn banner_height(&self) -> u16 {
        self.banner_lines.len() as u16
    }

    /// Render the banner
    pub fn render_banner(&self, f: &mut Frame, area: Rect) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let banner = Paragraph::new(self.banner_lines.clone()).alignment(Alignment::Center);
        f.render_widget(banner, area);
    }

    /// Render a screen title section
    pub fn render_title(&self, f: &mut Frame, area: Rect, screen: Screen) {
        let title_widget = Paragraph::new(screen.title())
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Colors::PRIMARY));
        f.render_widget(title_widget, area);
    }

    fn create_banner() -> Vec<Line<'static>> {
        [
            "╦ ╦═╗ ╦  ╔═╗┬ ┬┌─┐┬ ┬┌─┐┌─┐┌─┐┌─┐",
            "║ ║╔╩╦╝  ╚═╗├─┤│ ││││├─┘│  ├─┤└─┐",
            "╚═╝╩ ╚═  ╚═╝┴ ┴└─┘└┴┘┴  └─┘┴ ┴└─┘",
        ]
        .into_iter()
        .map(|line| Line::from(Span::styled(line, Style::default().fg(Colors::PRIMARY))))
        .collect()
    }
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, area: Rect, items: &[NavBarItem]) {
    let mut spans = Vec::with_capacity(items.len() * 3);
    for item in items {
        spans.push(Span::styled(format!(" {} ", item.key_display), Styles::nav_key()));
        spans.push(Span::styled(item.action_label.clone(), Styles::nav_hint()));
        spans.push(Span::raw("  "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the status line, if there is anything to say
pub fn render_status(f: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let status = Paragraph::new(format!(" {}", message)).style(Styles::success());
        f.render_widget(status, area);
    }
}

/// Render a tab strip with `active` highlighted
pub fn render_tabs(f: &mut Frame, area: Rect, titles: Vec<String>, active: usize) {
    let tabs = Tabs::new(titles)
        .select(active)
        .block(Block::default().borders(Borders::BOTTOM).border_style(Styles::border_inactive()))
        .style(Styles::text_secondary())
        .highlight_style(Styles::selected())
        .divider("│");
    f.render_widget(tabs, area);
}

/// Position dots, e.g. `○ ● ○`
pub fn carousel_dots(cursor: &Carousel) -> Line<'static> {
    let spans: Vec<Span<'static>> = (0..cursor.slide_count())
        .map(|index| {
            if index == cursor.position() {
                Span::styled("● ", Styles::focused())
            } else {
                Span::styled("○ ", Styles::text_muted())
            }
        })
        .collect();
    Line::from(spans).alignment(Alignment::Center)
}

/// Render one carousel slide with arrows and position dots
pub fn render_carousel(f: &mut Frame, area: Rect, title: &str, slide: &Slide, cursor: &Carousel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .title_style(Styles::title())
        .border_style(Styles::border_active());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [body, dots] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);
    let lines = vec![
        Line::from(vec![
            Span::styled("◀  ", Styles::text_muted()),
            Span::styled(slide.title, Style::default().fg(Colors::SECONDARY)),
            Span::styled("  ▶", Styles::text_muted()),
        ])
        .alignment(Alignment::Center),
        Line::from(Span::styled(slide.body, Styles::text())).alignment(Alignment::Center),
    ];
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), body);
    f.render_widget(Paragraph::new(carousel_dots(cursor)), dots);
}

/// Render the help overlay over the whole frame
pub fn render_help_overlay(f: &mut Frame, screen: Screen, keybinding_ctx: &KeybindingContext) {
    let help_overlay = HelpOverlay::new(screen, keybinding_ctx);
    help_overlay.render(f, f.area());
}
