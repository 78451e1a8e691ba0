use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;
use super::{
    components::{render_details, render_footer, render_search_bar, render_status_line},
    filters::render_filters,
    results::render_results,
    suggestions::render_suggestions,
};

pub fn render_ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_search_bar(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);
    render_results(f, app, body[0]);
    render_filters(f, app, body[1]);

    render_status_line(f, app, chunks[2]);
    render_footer(f, app, chunks[3]);

    // Overlays go last so they draw over the panes
    render_suggestions(f, app, chunks[0]);
    if app.show_details {
        render_details(f, app);
    }
}
