//! Help tab view

use super::section_header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let lines = vec![
        section_header(app, "Navigation"),
        key_line(app, "1-6", "Jump to tab (outside Attrs)"),
        key_line(app, "Tab / Shift+Tab", "Next/previous tab"),
        key_line(app, "↑/k  ↓/j", "Navigate lists / scroll"),
        key_line(app, "q / Ctrl+C", "Quit"),
        key_line(app, "?", "Toggle help"),
        Line::from(""),
        section_header(app, "Build"),
        key_line(app, "←/→", "Switch between race and class columns"),
        key_line(app, "Enter", "Pick entry (Sub class: again to remove)"),
        key_line(app, "u", "Clear focused column"),
        Line::from(""),
        section_header(app, "Attributes"),
        key_line(app, "←/→ or -/+", "Remove/add one point"),
        key_line(app, "0-9 then Enter", "Type an exact value"),
        key_line(app, "Esc", "Cancel typed value"),
        key_line(app, "u", "Zero the selected stat"),
        Line::from(""),
        section_header(app, "Equipment"),
        key_line(app, "←/→", "Switch between slots and items"),
        key_line(app, "Enter", "Equip selected item"),
        key_line(app, "u", "Unequip selected slot"),
        Line::from(""),
        section_header(app, "Session"),
        key_line(app, "t", "Toggle Chaotic/Orderly theme"),
        key_line(app, "x", "Export build summary to the log"),
        key_line(app, "r", "Reset build"),
        Line::from(""),
        section_header(app, "Rules"),
        Line::from("  Budget = (level cap - 1) × points per level + race bonus"),
        Line::from("  A race adds its innate stats plus level cap / 5 to each stat"),
        Line::from("  Edits past the budget are cut to the points left"),
        Line::from("  Super classes are listed for the chosen Base class"),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn key_line(app: &App, key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(app.theme.highlight()),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
