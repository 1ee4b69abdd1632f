//! The UI renders the application state into something visible and navigable.
//!
//! A sectioned document gets a section list beside a body pane; the body pane
//! shows the full section when it is visible and a short preview when collapsed.
//! A document without headings is drawn as one block.

use crate::app_state::AppState;
use crate::disclosure::Visibility;
use crate::document::Metadata;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const HELP: &str =
    "↑/↓: Navigate | ←/→: Parent/Child | Shift+↑/↓: Siblings | Enter: Toggle | e/c: Expand/Collapse all | q: Quit";

/// Renders the document view based on current application state.
pub fn draw(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Metadata
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Help
        ])
        .split(f.area());

    let header = Paragraph::new(metadata_line(&app.document.metadata))
        .block(Block::default().borders(Borders::ALL).title("Document"));
    f.render_widget(header, chunks[0]);

    if app.session.is_some() {
        draw_sections(f, app, chunks[1]);
    } else {
        let body = Paragraph::new(app.document.content.as_str())
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(body, body_area(chunks[1], app.wrap_width));
    }

    let help_text = app.message.as_deref().unwrap_or(HELP);
    let help = Paragraph::new(help_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}

fn metadata_line(metadata: &Metadata) -> String {
    let mut line = format!(
        "Version {} | Last updated {}",
        metadata.version,
        metadata.last_updated.format("%Y-%m-%d")
    );
    if let Some(effective) = metadata.effective_date {
        line.push_str(&format!(" | Effective {}", effective.format("%Y-%m-%d")));
    }
    line
}

/// Disclosure affordance shown before a section title.
fn marker(visibility: Visibility) -> &'static str {
    match visibility {
        Visibility::AlwaysVisible => "  ",
        Visibility::CollapsedDefault => "▸ ",
        Visibility::ExpandedByUser => "▾ ",
    }
}

fn level_color(level: usize) -> Color {
    match level {
        1 => Color::Cyan,
        2 => Color::Blue,
        3 => Color::Green,
        4 => Color::Yellow,
        5 => Color::Magenta,
        _ => Color::Gray,
    }
}

/// Caps the body pane at the configured wrap width plus its borders.
fn body_area(area: Rect, wrap_width: usize) -> Rect {
    let max_width = u16::try_from(wrap_width)
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    Rect {
        width: area.width.min(max_width),
        ..area
    }
}

fn draw_sections(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let items: Vec<ListItem> = session
        .entries()
        .map(|entry| {
            let section = entry.section;
            let indent = "  ".repeat(section.level.saturating_sub(1));
            let mut title_style = Style::default().fg(level_color(section.level));
            if section.level <= 2 {
                title_style = title_style.add_modifier(Modifier::BOLD);
            }
            let line = Line::from(vec![
                Span::raw(indent),
                Span::raw(marker(entry.visibility)),
                Span::styled(section.title.clone(), title_style),
            ]);
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Sections"))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut list_state = ListState::default().with_selected(Some(app.current_section_index));
    f.render_stateful_widget(list, columns[0], &mut list_state);

    let (Some(section), Some(visibility)) = (app.current_section(), app.current_visibility())
    else {
        return;
    };

    let mut lines: Vec<Line> = if visibility.is_visible() {
        section.body.split('\n').map(Line::raw).collect()
    } else {
        section
            .preview(app.preview_lines)
            .split('\n')
            .map(|l| Line::raw(l.to_string()))
            .collect()
    };
    if !visibility.is_visible() && section.is_truncated_at(app.preview_lines) {
        lines.push(Line::styled(
            "… (Enter to expand)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let title = match visibility {
        Visibility::AlwaysVisible => app.breadcrumb(),
        Visibility::CollapsedDefault => format!("{} (collapsed)", app.breadcrumb()),
        Visibility::ExpandedByUser => format!("{} (expanded)", app.breadcrumb()),
    };
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(body, body_area(columns[1], app.wrap_width));
}
