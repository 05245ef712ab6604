//! Stat breakdown tab - shows how each stat is calculated

use super::section_header;
use crate::app::App;
use build_core::stat_block::{
    StatBreakdown, ARCANE_DAMAGE_PER_POINT, BASE_CRIT_DAMAGE, BASE_DAMAGE, BASE_HEALTH,
    CRIT_CHANCE_PER_LUCK, CRIT_DAMAGE_PER_LUCK, HEALTH_PER_ENDURANCE, STRENGTH_DAMAGE_PER_POINT,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_breakdown(f, app, chunks[0]);
    draw_formulas(f, app, chunks[1]);
}

fn draw_breakdown(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for row in app.build.breakdown() {
        lines.push(section_header(app, row.stat.name()));
        lines.extend(breakdown_lines(&row));
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.accent()))
                .title(" Attribute Breakdown "),
        )
        .scroll((app.breakdown_scroll as u16, 0));

    f.render_widget(paragraph, area);
}

fn breakdown_lines(row: &StatBreakdown) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let parts = [
        ("Race innate", f64::from(row.race_innate)),
        ("Level scaling", f64::from(row.level_scaling)),
        ("Allocated", f64::from(row.allocated)),
        ("Classes", row.class_flat),
        ("Equipment", row.equipment_flat),
    ];
    for (label, value) in parts {
        if value != 0.0 {
            lines.push(part_line(label, format!("{:+.0}", value)));
        }
    }
    if row.percent != 0.0 {
        let suffix = if row.percent_applies() { "" } else { " (no effect)" };
        lines.push(part_line("Percent", format!("{:+.1}%{}", row.percent, suffix)));
    }

    let mut total = vec![
        Span::styled(format!("  {:16}", "Total"), Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.1}", row.total),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ];
    if (row.effective - row.total).abs() > f64::EPSILON {
        total.push(Span::styled(
            format!(" → {:.2} effective", row.effective),
            Style::default().fg(Color::Green),
        ));
    }
    lines.push(Line::from(total));
    lines
}

fn part_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:16}", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(Color::White)),
    ])
}

fn draw_formulas(f: &mut Frame, app: &App, area: Rect) {
    let formula = |text: String| Line::from(Span::styled(text, Style::default().fg(Color::White)));
    let note = |text: &str| {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(Color::DarkGray),
        ))
    };

    let lines = vec![
        section_header(app, "Totals"),
        formula("  Total = Base + Class + Equipment".to_string()),
        formula("  Effective STR = Total STR × (1 + STR% / 100)".to_string()),
        formula("  Effective ARC = Total ARC × (1 + ARC% / 100)".to_string()),
        note("  END/SPD/LCK percents do not scale"),
        Line::from(""),
        section_header(app, "Derived"),
        formula(format!(
            "  Health = {} + END × {} + HP bonus",
            BASE_HEALTH, HEALTH_PER_ENDURANCE
        )),
        formula(format!(
            "  Phys Dmg = {}% + eff STR × {:.4}",
            BASE_DAMAGE, STRENGTH_DAMAGE_PER_POINT
        )),
        formula(format!(
            "  Magic Dmg = {}% + eff ARC × {:.2}",
            BASE_DAMAGE, ARCANE_DAMAGE_PER_POINT
        )),
        formula(format!(
            "  Crit % = LCK × {} + crit bonus",
            CRIT_CHANCE_PER_LUCK
        )),
        formula(format!(
            "  Crit Dmg = {}x + LCK × {} + bonus / 100",
            BASE_CRIT_DAMAGE, CRIT_DAMAGE_PER_LUCK
        )),
        note("  Regen and defense are plain sums of bonuses"),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Formulas "));

    f.render_widget(paragraph, area);
}
