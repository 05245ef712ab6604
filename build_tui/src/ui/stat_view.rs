//! Stats tab view - final stats and passive effects

use super::{empty_line, section_header, stat_line};
use crate::app::App;
use build_core::ClassTier;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_final_stats(f, app, chunks[0]);
    draw_summary(f, app, chunks[1]);
}

fn draw_final_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = app.build.final_stats();

    let lines = vec![
        section_header(app, "Survival"),
        stat_line("Health", format!("{:.1}", stats.health)),
        stat_line("HP Regen", format!("{:.1}", stats.hp_regen)),
        stat_line("Energy Regen", format!("{:.1}", stats.energy_regen)),
        Line::from(""),
        section_header(app, "Offense"),
        stat_line("Physical Damage", format!("{:.1}%", stats.physical_damage)),
        stat_line("Magic Damage", format!("{:.1}%", stats.magic_damage)),
        stat_line("Crit Chance", format!("{:.2}%", stats.crit_chance)),
        stat_line("Crit Damage", format!("{:.2}x", stats.crit_damage)),
        Line::from(""),
        section_header(app, "Defense"),
        stat_line("Physical Defense", format!("{:.1}", stats.physical_defense)),
        stat_line("Magic Defense", format!("{:.1}", stats.magic_defense)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.accent()))
                .title(" Final Stats "),
        )
        .scroll((app.stats_scroll as u16, 0));

    f.render_widget(paragraph, area);
}

fn draw_summary(f: &mut Frame, app: &App, area: Rect) {
    let selection = app.build.selection();
    let mut lines = vec![section_header(app, "Build")];

    match selection.race.as_deref() {
        Some(race) => lines.push(stat_line("Race", race.to_string())),
        None => lines.push(empty_line("Race", "(none)")),
    }
    for &tier in ClassTier::all() {
        let label = format!("{} Class", tier.name());
        match selection.class(tier) {
            Some(class) => lines.push(stat_line(&label, class.to_string())),
            None => lines.push(empty_line(&label, "(none)")),
        }
    }

    lines.push(Line::from(""));
    lines.push(section_header(app, "Passive Effects"));
    let effects = app.build.passive_effects();
    if effects.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No passive effects active",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for effect in effects {
        lines.push(Line::from(Span::styled(
            format!("  ✦ {}", effect),
            Style::default().fg(Color::Magenta),
        )));
    }

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Summary "));

    f.render_widget(paragraph, area);
}
