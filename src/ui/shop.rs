//! Shop listing rendering: tabs with item counts, filter chips, the price
//! range, the promo carousel and the filtered product list.

use super::header;
use crate::catalog::Product;
use crate::filter::CategoryFilter;
use crate::theme::{Styles, Theme};
use crate::types::ProductLabel;
use crate::views::ShopView;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;

pub fn render_shop(f: &mut Frame, area: Rect, view: &ShopView) {
    let [tabs, filters, promo, list] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(5),
        Constraint::Min(4),
    ])
    .areas(area);

    let counts = view.catalog().category_counts();
    let titles: Vec<String> = view
        .tabs()
        .tabs()
        .iter()
        .map(|tab| match tab {
            CategoryFilter::All => format!("All ({})", view.catalog().len()),
            CategoryFilter::Only(category) => format!(
                "{} ({})",
                category.title(),
                counts.get(category).copied().unwrap_or(0)
            ),
        })
        .collect();
    header::render_tabs(f, tabs, titles, view.tabs().active_index());

    render_filters(f, filters, view);
    header::render_carousel(f, promo, "Promotions", view.current_promo(), view.promo_cursor());
    render_products(f, list, view);
}

fn render_filters(f: &mut Frame, area: Rect, view: &ShopView) {
    let filter = view.filter();
    let mut spans = Vec::new();
    for label in ProductLabel::iter() {
        spans.push(Span::styled(
            format!(" {} ", label.title()),
            Theme::chip(filter.is_label_selected(label)),
        ));
        spans.push(Span::raw(" "));
    }
    if let Some(range) = filter.price_range() {
        spans.push(Span::styled(
            format!("  Price {} to {}", range.min(), range.max()),
            Styles::text(),
        ));
    }

    let active = filter.active_facet_count();
    let summary = if active == 0 {
        Span::styled("No filters active", Styles::text_muted())
    } else {
        Span::styled(
            format!("{} filter{} active, r to reset", active, if active == 1 { "" } else { "s" }),
            Styles::warning(),
        )
    };

    f.render_widget(Paragraph::new(vec![Line::from(spans), Line::from(summary)]), area);
}

fn product_line(product: &Product) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{:<26}", product.name), Styles::text()),
        Span::styled(
            format!("{:>9}", product.price.to_string()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(original) = product.original_price {
        spans.push(Span::styled(
            format!(" {}", original),
            Styles::text_muted().add_modifier(Modifier::CROSSED_OUT),
        ));
    }
    if let Some(percent) = product.discount_percent() {
        spans.push(Span::styled(format!(" -{}%", percent), Styles::error()));
    }
    for label in &product.labels {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("[{}]", label.title()),
            Theme::product_label(*label),
        ));
    }
    Line::from(spans)
}

fn render_products(f: &mut Frame, area: Rect, view: &ShopView) {
    let visible = view.visible();
    let title = format!(" {} item{} ", visible.len(), if visible.len() == 1 { "" } else { "s" });
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_style(Styles::title())
        .border_style(Styles::border_active());

    if visible.is_empty() {
        let empty = Paragraph::new("No products match these filters.")
            .style(Styles::text_muted())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .iter()
        .map(|product| ListItem::new(product_line(product)))
        .collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected())
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default().with_selected(Some(view.selected()));
    f.render_stateful_widget(list, area, &mut list_state);
}
