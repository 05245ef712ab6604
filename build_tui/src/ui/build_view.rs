//! Build tab - race and class pickers

use super::{bonus_lines, section_header, stat_line};
use crate::app::{App, BuildFocus};
use build_core::{ClassTier, RaceRarity};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(10)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    for (i, focus) in BuildFocus::all().iter().enumerate() {
        draw_picker(f, app, *focus, app.picker_cursor[i], columns[i]);
    }
    draw_details(f, app, rows[1]);
}

fn draw_picker(f: &mut Frame, app: &App, focus: BuildFocus, cursor: usize, area: Rect) {
    let is_focused = app.build_focus == focus;
    let selected = app.picker_selected(focus);
    let options = app.picker_options(focus);

    let mut lines: Vec<Line> = Vec::new();
    if options.is_empty() {
        lines.push(Line::from(Span::styled(
            "  (none available)",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, name) in options.iter().enumerate() {
        let is_cursor = is_focused && i == cursor;
        let is_selected = selected == Some(*name);
        let marker = if is_selected { "● " } else { "  " };
        let prefix = if is_cursor { ">" } else { " " };

        let mut style = if is_selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if is_cursor {
            style = style.fg(app.theme.highlight()).add_modifier(Modifier::REVERSED);
        }

        let mut spans = vec![
            Span::styled(prefix, Style::default().fg(app.theme.highlight())),
            Span::styled(marker, Style::default().fg(Color::Green)),
            Span::styled(name.to_string(), style),
        ];
        if focus == BuildFocus::Race {
            let obtainable = app
                .build
                .dataset()
                .race(name)
                .is_some_and(|r| r.rarity == RaceRarity::Obtainable);
            if obtainable {
                spans.push(Span::styled(" ◆", Style::default().fg(Color::Magenta)));
            }
        }
        lines.push(Line::from(spans));
    }

    let border_color = if is_focused {
        app.theme.accent()
    } else {
        Color::White
    };
    let scroll = cursor.saturating_sub(area.height.saturating_sub(3) as usize) as u16;
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {} ", focus.title())),
        )
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

/// Description of the entry under the cursor
fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let focus = app.build_focus;
    let options = app.picker_options(focus);
    let cursor_name = options.get(app.picker_cursor[focus.index()]).copied();
    let dataset = app.build.dataset();

    let mut lines: Vec<Line> = Vec::new();
    match (focus, cursor_name) {
        (_, None) => {}
        (BuildFocus::Race, Some(name)) => {
            if let Some(race) = dataset.race(name) {
                lines.push(section_header(app, &race.name));
                lines.push(Line::from(race.description.clone()));
                let innate: Vec<String> = race
                    .base_stats
                    .iter()
                    .map(|(stat, value)| format!("{} {}", stat.abbrev(), value))
                    .collect();
                lines.push(stat_line("Innate", innate.join("  ")));
                lines.push(stat_line(
                    "Level scaling",
                    format!("+{} to every stat", app.build.constants().scaling_increment()),
                ));
                let modifiers = race.modifiers.describe();
                if !modifiers.is_empty() {
                    lines.push(stat_line("Modifiers", modifiers.join(", ")));
                }
                if !race.modifiers.tags.is_empty() {
                    lines.push(stat_line("Tags", race.modifiers.tags.join(", ")));
                }
            }
        }
        (BuildFocus::Class(tier), Some(name)) => {
            if let Some(class) = dataset.class_of_tier(name, tier) {
                lines.push(section_header(app, &class.name));
                lines.push(Line::from(class.description.clone()));
                let path = class.path.map(|p| format!("{:?}", p)).unwrap_or_default();
                lines.push(stat_line("Tier", format!("{} {}", tier.name(), path)));
                if tier == ClassTier::Super && !class.derived_from.is_empty() {
                    lines.push(stat_line("Requires", class.derived_from.join(" / ")));
                }
                lines.extend(bonus_lines(class.stat_bonuses.describe()));
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
