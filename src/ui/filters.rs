use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::app::{App, FilterPanel, FilterRow, Focus};
use crate::config::{RATING_MAX, RATING_STEP};
use super::components::pane_block;

fn slider(label: &str, value: f64) -> Line<'static> {
    let steps = (RATING_MAX / RATING_STEP) as usize;
    let filled = (value / RATING_STEP).round() as usize;
    let bar: String = (0..steps).map(|i| if i < filled { '━' } else { '─' }).collect();
    Line::from(vec![
        Span::raw(format!("{label:<4} ")),
        Span::styled(bar, Style::default().fg(Color::Yellow)),
        Span::raw(format!(" {value:.1}")),
    ])
}

/// Lines of the panel, plus the line index of the cursor row.
fn panel_lines(panel: &FilterPanel) -> (Vec<ListItem<'static>>, usize) {
    let header = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let mut items = Vec::new();
    let mut cursor_line = 0;
    let current = panel.current_row();

    for (group_index, group) in panel.groups.iter().enumerate() {
        items.push(ListItem::new(Line::from(Span::styled(group.kind.title(), header))));
        if group.options.is_empty() {
            items.push(ListItem::new(Line::from(Span::styled(
                "  (none)",
                Style::default().fg(Color::DarkGray),
            ))));
        }
        for (index, option) in group.options.iter().enumerate() {
            if current == (FilterRow::Choice { group: group_index, index }) {
                cursor_line = items.len();
            }
            let mark = if option.checked { "[x]" } else { "[ ]" };
            let mut spans = vec![Span::raw(format!("{mark} {}", option.value))];
            if let Some(count) = option.count {
                spans.push(Span::styled(format!(" ({count})"), Style::default().fg(Color::DarkGray)));
            }
            items.push(ListItem::new(Line::from(spans)));
        }
    }

    items.push(ListItem::new(Line::from(Span::styled("Rating", header))));
    if current == FilterRow::MinRating {
        cursor_line = items.len();
    }
    items.push(ListItem::new(slider("Min", panel.min_rating)));
    if current == FilterRow::MaxRating {
        cursor_line = items.len();
    }
    items.push(ListItem::new(slider("Max", panel.max_rating)));

    (items, cursor_line)
}

pub fn render_filters(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Filters;
    let (items, cursor_line) = panel_lines(&app.filter_panel);

    let checked = app.filter_panel.checked_count();
    let title = if checked > 0 {
        format!("Filters ({checked} selected)")
    } else {
        "Filters".to_string()
    };

    let list = List::new(items)
        .block(pane_block(title, focused))
        .highlight_style(if focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        });

    let mut state = ListState::default();
    state.select(Some(cursor_line));
    f.render_stateful_widget(list, area, &mut state);
}
