//! Restaurant menu rendering

use super::header;
use crate::filter::CategoryFilter;
use crate::theme::{Styles, Theme};
use crate::types::DietaryTag;
use crate::views::MenuView;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

pub fn render_menu(f: &mut Frame, area: Rect, view: &MenuView) {
    let [tabs, chips, list, specials] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Length(5),
    ])
    .areas(area);

    let titles: Vec<String> = view
        .tabs()
        .tabs()
        .iter()
        .map(|tab| match tab {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::Only(category) => category.title().to_string(),
        })
        .collect();
    header::render_tabs(f, tabs, titles, view.tabs().active_index());

    let chip_spans: Vec<Span> = DietaryTag::iter()
        .flat_map(|tag| {
            [
                Span::styled(
                    format!(" {} ", tag.title()),
                    Theme::chip(view.filter().is_label_selected(tag)),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    f.render_widget(Paragraph::new(Line::from(chip_spans)), chips);

    render_items(f, list, view);
    header::render_carousel(
        f,
        specials,
        "Chef's Specials",
        view.current_special(),
        view.specials_cursor(),
    );
}

fn render_items(f: &mut Frame, area: Rect, view: &MenuView) {
    let visible = view.visible();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} dishes ", visible.len()))
        .title_style(Styles::title())
        .border_style(Styles::border_active());

    if visible.is_empty() {
        let empty = Paragraph::new("Nothing on the menu matches these tags.")
            .style(Styles::text_muted())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|item| {
            let mut heading = vec![
                Span::styled(format!("{:<30}", item.name), Styles::text().add_modifier(Modifier::BOLD)),
                Span::styled(format!("{:>8}", item.price.to_string()), Styles::text()),
            ];
            for tag in &item.labels {
                heading.push(Span::raw(" "));
                heading.push(Span::styled(format!("[{}]", tag.title()), Theme::dietary_tag(*tag)));
            }
            ListItem::new(vec![
                Line::from(heading),
                Line::from(Span::styled(format!("  {}", item.description), Styles::text_muted())),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(Some(view.selected()));
    f.render_stateful_widget(list, area, &mut list_state);
}
