//! UI rendering

mod attributes_view;
mod breakdown_view;
mod build_view;
mod equipment_view;
mod help_view;
mod stat_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.current_tab {
        Tab::Build => build_view::draw(f, app, chunks[1]),
        Tab::Attributes => attributes_view::draw(f, app, chunks[1]),
        Tab::Equipment => equipment_view::draw(f, app, chunks[1]),
        Tab::Stats => stat_view::draw(f, app, chunks[1]),
        Tab::Breakdown => breakdown_view::draw(f, app, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("t", "Theme"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Build => vec![
            ("←/→", "Column"),
            ("↑/↓", "Select"),
            ("Enter", "Pick"),
            ("u", "Clear"),
        ],
        Tab::Attributes => vec![
            ("↑/↓", "Stat"),
            ("←/→ -/+", "Adjust"),
            ("0-9 Enter", "Type value"),
            ("u", "Zero"),
        ],
        Tab::Equipment => vec![
            ("←/→", "Slots/Items"),
            ("Enter", "Equip"),
            ("u", "Unequip"),
        ],
        Tab::Stats => vec![("↑/↓", "Scroll"), ("x", "Export"), ("r", "Reset")],
        Tab::Breakdown => vec![("↑/↓", "Scroll")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default()
                .fg(app.theme.highlight())
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(app.theme.accent()),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(app.theme.highlight())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let title = match &app.status {
        Some(status) => format!(" Arcane Build ({}) │ {} ", app.theme.name(), status),
        None => format!(" Arcane Build ({}) ", app.theme.name()),
    };

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.accent()))
                .title(title),
        )
        .highlight_style(Style::default().fg(app.theme.highlight()))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section_header(app: &App, title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default()
            .fg(app.theme.accent())
            .add_modifier(Modifier::BOLD),
    ))
}

pub fn stat_line(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

/// Grey label + dim placeholder, for empty selections
pub fn empty_line(name: &str, placeholder: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray)),
    ])
}

pub fn bonus_lines(bonuses: Vec<String>) -> Vec<Line<'static>> {
    if bonuses.is_empty() {
        return vec![Line::from(Span::styled(
            "    (no bonuses)",
            Style::default().fg(Color::DarkGray),
        ))];
    }
    bonuses
        .into_iter()
        .map(|b| {
            Line::from(Span::styled(
                format!("    {}", b),
                Style::default().fg(Color::Green),
            ))
        })
        .collect()
}
