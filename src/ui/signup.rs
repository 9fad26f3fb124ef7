//! Signup wizard rendering: progress, the current step's form, and the
//! Continue button with its inline hint.

use crate::theme::{Colors, Styles};
use crate::types::Interest;
use crate::views::SignupView;
use crate::wizard::{SignupStep, StepCheck};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
};
use strum::IntoEnumIterator;

pub fn render_signup(f: &mut Frame, area: Rect, view: &SignupView) {
    let [progress, body, button] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(6),
        Constraint::Length(3),
    ])
    .areas(area);

    render_progress(f, progress, view);
    match view.step() {
        SignupStep::Name | SignupStep::Account => render_fields(f, body, view),
        SignupStep::Interests => render_interests(f, body, view),
        SignupStep::Complete => render_summary(f, body, view),
    }
    render_continue(f, button, view);
}

fn render_progress(f: &mut Frame, area: Rect, view: &SignupView) {
    let cursor = view.wizard().cursor();
    let step = view.step();
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(format!(
            " Step {} of {}: {} ",
            cursor.position(),
            cursor.steps(),
            step.title()
        )))
        .gauge_style(Styles::progress())
        .percent(cursor.percent());
    f.render_widget(gauge, area);
}

fn render_fields(f: &mut Frame, area: Rect, view: &SignupView) {
    let fields = view.step().fields();
    let rows = Layout::vertical(fields.iter().map(|_| Constraint::Length(3)))
        .margin(1)
        .split(area);
    let form = view.wizard().form();

    for (field, row) in fields.iter().zip(rows.iter()) {
        let is_current = view.focused_field() == Some(*field);
        let value = form.field(*field);
        let display_value = if field.is_secret() {
            "*".repeat(value.chars().count())
        } else {
            value.to_string()
        };
        let cursor = if is_current { "_" } else { "" };

        let (label_style, border_style) = if is_current {
            (Styles::focused(), Styles::border_active())
        } else {
            (Styles::text_secondary(), Styles::border_inactive())
        };

        let widget = Paragraph::new(format!("  {}: {}{}", field.label(), display_value, cursor))
            .style(label_style)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        f.render_widget(widget, *row);
    }
}

fn render_interests(f: &mut Frame, area: Rect, view: &SignupView) {
    let chosen = &view.wizard().form().interests;
    let lines: Vec<Line> = Interest::iter()
        .enumerate()
        .map(|(index, interest)| {
            let marker = if chosen.contains(&interest) { "[x]" } else { "[ ]" };
            let style = if index == view.interest_cursor() {
                Styles::focused()
            } else {
                Styles::text()
            };
            Line::from(Span::styled(format!("  {} {}", marker, interest.title()), style))
        })
        .collect();

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" What are you into? ")
            .border_style(Styles::border_active()),
    );
    f.render_widget(widget, area);
}

fn render_summary(f: &mut Frame, area: Rect, view: &SignupView) {
    let form = view.wizard().form();
    let interests: Vec<&str> = form.interests.iter().map(|i| i.title()).collect();
    let lines = vec![
        Line::from(Span::styled(
            format!("All set, {}!", form.name.trim()),
            Style::default()
                .fg(Colors::SUCCESS)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Email:     ", Styles::text_muted()),
            Span::styled(form.email.clone(), Styles::text()),
        ]),
        Line::from(vec![
            Span::styled("Interests: ", Styles::text_muted()),
            Span::styled(interests.join(", "), Styles::text()),
        ]),
    ];
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(Styles::border_active()));
    f.render_widget(widget, area);
}

fn render_continue(f: &mut Frame, area: Rect, view: &SignupView) {
    let check = view.wizard().check();
    let label = if view.step() == SignupStep::Complete {
        " [ Finish ] "
    } else {
        " [ Continue ] "
    };
    let button_style = if check.is_passed() {
        Styles::button_active()
    } else {
        Styles::button_disabled()
    };

    let mut spans = vec![Span::styled(label, button_style)];
    if let StepCheck::Blocked(hint) = check {
        spans.push(Span::styled(format!("  {}", hint), Styles::warning()));
    }

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(Styles::border_inactive()));
    f.render_widget(widget, area);
}
