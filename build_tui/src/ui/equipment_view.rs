//! Equipment tab view - slot and item selection

use super::{bonus_lines, section_header};
use crate::app::{App, EquipFocus};
use build_core::GearSlot;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    // Split into three columns: slots, items, preview
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area);

    draw_slots(f, app, chunks[0]);
    draw_items(f, app, chunks[1]);
    draw_preview(f, app, chunks[2]);
}

fn draw_slots(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.equip_focus == EquipFocus::Slots;
    let mut lines: Vec<Line> = vec![Line::from("")];

    for (i, &slot) in GearSlot::all().iter().enumerate() {
        let is_selected = i == app.selected_slot;
        let (prefix, style) = if is_selected && is_focused {
            (
                "> ",
                Style::default()
                    .fg(app.theme.highlight())
                    .add_modifier(Modifier::BOLD),
            )
        } else if is_selected {
            ("> ", Style::default().fg(Color::White))
        } else {
            ("  ", Style::default().fg(Color::White))
        };

        let item = match app.build.selection().equipment(slot) {
            Some(name) => Span::styled(name.to_string(), Style::default().fg(Color::Green)),
            None => Span::styled("(empty)", Style::default().fg(Color::DarkGray)),
        };
        lines.push(Line::from(vec![
            Span::styled(prefix, style),
            Span::styled(format!("{:13}", slot.label()), style),
            item,
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [u] Unequip  [→] Items",
        Style::default().fg(Color::DarkGray),
    )));

    let border_color = if is_focused {
        app.theme.accent()
    } else {
        Color::White
    };
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(" Equipped "),
    );

    f.render_widget(paragraph, area);
}

fn draw_items(f: &mut Frame, app: &App, area: Rect) {
    let is_focused = app.equip_focus == EquipFocus::Items;
    let items = app.slot_items();
    let equipped = app.build.selection().equipment(app.current_slot());

    let mut lines: Vec<Line> = Vec::new();
    if items.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No items available for this slot",
            Style::default().fg(Color::DarkGray),
        )));
    }

    for (i, name) in items.iter().enumerate() {
        let is_selected = is_focused && i == app.selected_item;
        let name_style = if is_selected {
            Style::default()
                .fg(app.theme.highlight())
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if equipped == Some(*name) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(if is_selected { "> " } else { "  " }, name_style),
            Span::styled(name.to_string(), name_style),
        ]));
    }

    let border_color = if is_focused {
        app.theme.accent()
    } else {
        Color::White
    };
    let scroll = app
        .selected_item
        .saturating_sub(area.height.saturating_sub(3) as usize) as u16;
    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(format!(" {} Items ", app.current_slot().label())),
        )
        .scroll((scroll, 0));

    f.render_widget(paragraph, area);
}

/// Item under the cursor, or the equipped item when the slot list has focus
fn draw_preview(f: &mut Frame, app: &App, area: Rect) {
    let name = match app.equip_focus {
        EquipFocus::Items => app.slot_items().get(app.selected_item).copied(),
        EquipFocus::Slots => app.build.selection().equipment(app.current_slot()),
    };
    let item = name.and_then(|n| app.build.dataset().item(n));

    let mut lines: Vec<Line> = Vec::new();
    match item {
        Some(item) => {
            lines.push(section_header(app, &item.name));
            lines.push(Line::from(Span::styled(
                item.description.clone(),
                Style::default().fg(Color::Gray),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "  Bonuses:",
                Style::default().fg(Color::Gray),
            )));
            lines.extend(bonus_lines(item.stat_bonuses.describe()));
            if !item.passive_effects.is_empty() {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "  Passives:",
                    Style::default().fg(Color::Gray),
                )));
                for effect in &item.passive_effects {
                    lines.push(Line::from(Span::styled(
                        format!("    ✦ {}", effect),
                        Style::default().fg(Color::Magenta),
                    )));
                }
            }
        }
        None => lines.push(Line::from(Span::styled(
            "  Nothing selected",
            Style::default().fg(Color::DarkGray),
        ))),
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Preview "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
