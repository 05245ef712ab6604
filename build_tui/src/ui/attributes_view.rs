//! Attributes tab - point allocation against the budget

use super::{section_header, stat_line};
use crate::app::App;
use build_core::PrimaryStat;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const BAR_WIDTH: usize = 24;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_allocation(f, app, chunks[0]);
    draw_budget(f, app, chunks[1]);
}

fn draw_allocation(f: &mut Frame, app: &App, area: Rect) {
    let allocation = app.build.selection().allocation;
    let combined = app.build.combined_attributes();
    let budget_total = app.build.budget().total().max(1);

    let mut lines = vec![
        Line::from(Span::styled(
            format!("  {:12} {:>8} {:>8}", "Stat", "Points", "Base"),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ];

    for (i, &stat) in PrimaryStat::all().iter().enumerate() {
        let is_selected = i == app.selected_stat;
        let points = match (&app.attr_input, is_selected) {
            (Some(input), true) => format!("{}_", input),
            _ => allocation.get(stat).to_string(),
        };

        let (prefix, style) = if is_selected {
            (
                "> ",
                Style::default()
                    .fg(app.theme.highlight())
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(format!("{:12}", stat.name()), style),
            Span::styled(format!("{:>8}", points), style),
            Span::styled(
                format!("{:>8}  ", combined.get(stat)),
                Style::default().fg(Color::Green),
            ),
            Span::styled(
                bar(allocation.get(stat), budget_total),
                Style::default().fg(app.theme.accent()),
            ),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Base = race innate + level scaling + points",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent()))
            .title(" Attribute Points "),
    );

    f.render_widget(paragraph, area);
}

fn draw_budget(f: &mut Frame, app: &App, area: Rect) {
    let budget = app.build.budget();
    let constants = app.build.constants();
    let spent = app.build.selection().allocation.total();
    let remaining = app.build.remaining_points();

    let remaining_color = if remaining == 0 {
        Color::Red
    } else {
        Color::Green
    };

    let lines = vec![
        section_header(app, "Budget"),
        stat_line("Level cap", constants.level_cap.to_string()),
        stat_line("Points per level", constants.points_per_level.to_string()),
        stat_line("Level points", budget.base.to_string()),
        stat_line("Race bonus", format!("+{}", budget.race_bonus)),
        stat_line("Total", budget.total().to_string()),
        Line::from(""),
        stat_line("Spent", spent.to_string()),
        Line::from(vec![
            Span::styled(format!("{:20}", "Remaining"), Style::default().fg(Color::Gray)),
            Span::styled(
                remaining.to_string(),
                Style::default()
                    .fg(remaining_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            bar(spent, budget.total().max(1)),
            Style::default().fg(remaining_color),
        )),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Budget "));

    f.render_widget(paragraph, area);
}

fn bar(value: u32, max: u32) -> String {
    let filled = ((f64::from(value) / f64::from(max)) * BAR_WIDTH as f64) as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
