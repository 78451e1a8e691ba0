use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::render::Segment;

pub fn highlight_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD)
}

/// Map renderer segments onto spans, styling the highlighted ones.
pub fn segment_spans(segments: &[Segment], base: Style) -> Vec<Span<'static>> {
    segments
        .iter()
        .map(|segment| {
            let style = if segment.highlighted { highlight_style() } else { base };
            Span::styled(segment.text.clone(), style)
        })
        .collect()
}

pub fn pane_block(title: String, focused: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

pub fn render_search_bar(f: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::SearchInput;
    let mut title = format!("Search [{}]", app.state.mode.label());
    if app.affordances.loading {
        title.push_str(&format!(" {} searching", app.spinner_frame()));
    }

    let mut spans = vec![Span::raw(app.input.clone())];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(Color::Cyan)));
    }
    let input = Paragraph::new(Line::from(spans)).block(pane_block(title, focused));
    f.render_widget(input, area);
    app.regions.input = area;
}

pub fn render_status_line(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = if let Some(ref failure) = app.last_failure {
        Line::from(Span::styled(failure.clone(), Style::default().fg(Color::Red)))
    } else if let Some(at) = app.last_response_at {
        Line::from(format!(
            "Updated {} | page {} | {} shown",
            at.format("%H:%M:%S"),
            app.state.page,
            app.cards.len()
        ))
    } else {
        Line::from("")
    };
    f.render_widget(Paragraph::new(left), chunks[0]);

    let labels = app.state.filters.labels();
    let mut badges = Vec::with_capacity(labels.len() * 2 + 1);
    if !labels.is_empty() {
        badges.push(Span::raw("Filters: "));
        for label in labels {
            badges.push(Span::styled(
                format!(" {label} "),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ));
            badges.push(Span::raw(" "));
        }
    }
    f.render_widget(Paragraph::new(Line::from(badges)).alignment(Alignment::Right), chunks[1]);
}

pub fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let help = if app.show_details {
        "Esc/Enter: Close details | Ctrl+C: Quit"
    } else {
        match app.focus {
            Focus::SearchInput => {
                "Enter: Search | ↑↓: Suggestions | Esc: Hide suggestions | PgDn: Load more | Ctrl+T: Mode | Tab: Next pane | Ctrl+C: Quit"
            }
            Focus::Results => {
                "↑↓: Navigate | Enter: Details | m: Load more | 1/2/3: Mode | /: Search | Tab: Next pane | q: Quit"
            }
            Focus::Filters => {
                "↑↓: Navigate | Space: Toggle | ◄►: Rating | a: Apply | r: Reset | 1/2/3: Mode | Tab: Next pane | q: Quit"
            }
        }
    };
    let footer = Paragraph::new(help)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

pub fn render_details(f: &mut Frame, app: &App) {
    let Some(card) = app.selected_card_view() else { return };
    let area = centered_rect(60, 50, f.area());

    let label = Style::default().fg(Color::Cyan);
    let mut lines = vec![
        Line::from(vec![Span::styled("ID: ", label), Span::raw(card.id.clone())]),
        Line::from(vec![Span::styled("Name: ", label), Span::raw(card.title_text())]),
        Line::from(vec![Span::styled("Brand: ", label), Span::raw(card.brand.clone())]),
    ];
    if let Some(ref manufacturer) = card.manufacturer {
        lines.push(Line::from(vec![
            Span::styled("Manufacturer: ", label),
            Span::raw(manufacturer.clone()),
        ]));
    }
    let mut categories = card.category_label();
    if card.hidden_categories > 0 {
        categories.push_str(&format!(" (+{} more)", card.hidden_categories));
    }
    lines.push(Line::from(vec![Span::styled("Categories: ", label), Span::raw(categories)]));
    lines.push(Line::from(vec![
        Span::styled("Rating: ", label),
        Span::raw(format!("{} from {} review(s)", card.rating_label(), card.review_count)),
    ]));
    if let Some(ref review) = card.review {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(review.title.clone(), Style::default().add_modifier(Modifier::BOLD))));
        lines.push(Line::from(segment_spans(&review.text, Style::default().fg(Color::Gray))));
    }

    f.render_widget(Clear, area);
    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default()
            .borders(Borders::ALL)
            .title("Product details")
            .style(Style::default().fg(Color::White)));
    f.render_widget(details, area);
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
