//! Marketing email rendering. The body is laid out at the width of the
//! selected preview mode.

use super::header;
use crate::theme::{Colors, Styles};
use crate::types::PreviewMode;
use crate::views::EmailView;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use strum::IntoEnumIterator;

pub fn render_email(f: &mut Frame, area: Rect, view: &EmailView) {
    let [tabs, body] = Layout::vertical([Constraint::Length(2), Constraint::Min(8)]).areas(area);

    let titles: Vec<String> = PreviewMode::iter().map(|mode| mode.to_string()).collect();
    let active = PreviewMode::iter()
        .position(|mode| mode == view.preview())
        .unwrap_or(0);
    header::render_tabs(f, tabs, titles, active);

    let [column] = Layout::horizontal([Constraint::Length(view.preview().body_width())])
        .flex(Flex::Center)
        .areas(body);
    render_body(f, column, view);
}

fn render_body(f: &mut Frame, area: Rect, view: &EmailView) {
    let content = view.content();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", content.subject))
        .title_style(Styles::title())
        .border_style(Styles::border_active());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let features = content.features.len() as u16;
    let [meta, hero, greeting, feature_area, cta, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Length(2),
        Constraint::Length(features + 1),
        Constraint::Length(2),
        Constraint::Min(1),
    ])
    .areas(inner);

    let meta_lines = vec![
        Line::from(vec![
            Span::styled("From: ", Styles::text_muted()),
            Span::styled(content.sender, Styles::text()),
        ]),
        Line::from(Span::styled(content.preheader, Styles::text_muted())),
    ];
    f.render_widget(Paragraph::new(meta_lines), meta);

    header::render_carousel(f, hero, "Featured", view.current_hero(), view.hero_cursor());

    f.render_widget(
        Paragraph::new(content.greeting).style(Styles::text()),
        greeting,
    );

    let feature_lines: Vec<Line> = content
        .features
        .iter()
        .map(|feature| {
            Line::from(vec![
                Span::styled("✓ ", Styles::success()),
                Span::styled(feature.title, Styles::focused()),
                Span::styled(format!(": {}", feature.body), Styles::text_secondary()),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(feature_lines).wrap(Wrap { trim: true }),
        feature_area,
    );

    let button = Paragraph::new(Span::styled(
        format!(" {} ", content.call_to_action),
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(button, cta);

    f.render_widget(
        Paragraph::new(content.footer)
            .style(Styles::text_muted())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        footer,
    );
}
