use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::app::App;

const MAX_VISIBLE: u16 = 8;

/// Dropdown under the search bar. The drawn area is recorded for mouse hit
/// testing; nothing is recorded while the list is hidden.
pub fn render_suggestions(f: &mut Frame, app: &mut App, below: Rect) {
    app.regions.suggestions = None;
    app.regions.suggestion_offset = 0;
    if !app.suggestions.visible || app.suggestions.items.is_empty() {
        return;
    }

    let screen = f.area();
    let rows = (app.suggestions.items.len() as u16).min(MAX_VISIBLE);
    let y = below.y + below.height;
    let height = (rows + 2).min(screen.height.saturating_sub(y));
    if height < 3 {
        return;
    }
    let area = Rect::new(below.x, y, below.width, height);

    let items: Vec<ListItem> = app
        .suggestions
        .items
        .iter()
        .map(|suggestion| ListItem::new(Line::from(suggestion.clone())))
        .collect();
    let list = List::new(items)
        .block(Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Suggestions"))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    let mut state = ListState::default();
    state.select(app.suggestions.selected);

    f.render_widget(Clear, area);
    f.render_stateful_widget(list, area, &mut state);
    app.regions.suggestions = Some(area);
    app.regions.suggestion_offset = state.offset();
}
