//! Landing page rendering

use super::header::HeaderRenderer;
use crate::theme::{Colors, Styles};
use crate::types::Screen;
use crate::views::LandingView;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

pub fn render_landing(f: &mut Frame, area: Rect, view: &LandingView, header: &HeaderRenderer) {
    let [banner, title, menu] = Layout::vertical([
        Constraint::Length(header.banner_height() + 1),
        Constraint::Length(3),
        Constraint::Min(6),
    ])
    .areas(area);

    header.render_banner(f, banner);
    header.render_title(f, title, Screen::Landing);

    let items: Vec<ListItem> = Screen::DEMOS
        .iter()
        .enumerate()
        .map(|(index, screen)| {
            let is_selected = index == view.selected;
            let (prefix, name_style) = if is_selected {
                (
                    "▸ ",
                    Style::default()
                        .fg(Colors::SECONDARY)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("  ", Styles::text())
            };
            ListItem::new(vec![
                Line::from(Span::styled(format!("{}{}", prefix, screen.title()), name_style)),
                Line::from(Span::styled(format!("    {}", screen.tagline()), Styles::text_muted())),
            ])
        })
        .collect();

    let menu_widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", Screen::Landing.tagline()))
            .title_style(Styles::title())
            .border_style(Styles::border_active()),
    );
    f.render_widget(menu_widget, menu);
}
