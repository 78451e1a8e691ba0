use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use crate::render::CardView;
use super::components::{pane_block, segment_spans};

fn card_item(card: &CardView) -> ListItem<'static> {
    let mut lines = Vec::with_capacity(5);

    lines.push(Line::from(segment_spans(
        &card.title,
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::styled(format!("Brand: {}", card.brand), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled(card.rating_label(), Style::default().fg(Color::Yellow)),
    ]));

    if !card.categories.is_empty() {
        let mut badges = Vec::with_capacity(card.categories.len() * 2 + 1);
        for category in &card.categories {
            badges.push(Span::styled(
                format!(" {category} "),
                Style::default().fg(Color::Black).bg(Color::Blue),
            ));
            badges.push(Span::raw(" "));
        }
        if card.hidden_categories > 0 {
            badges.push(Span::styled(
                format!("+{}", card.hidden_categories),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(badges));
    }

    if let Some(ref review) = card.review {
        let mut spans = vec![Span::styled(
            format!("{}: ", review.title),
            Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
        )];
        spans.extend(segment_spans(&review.text, Style::default().fg(Color::DarkGray)));
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    ListItem::new(lines)
}

fn render_message(f: &mut Frame, area: Rect, title: String, focused: bool, message: Line<'static>) {
    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(pane_block(title, focused));
    f.render_widget(paragraph, area);
}

pub fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Results;
    let affordances = app.affordances;

    if affordances.loading {
        let message = Line::from(format!("{} Searching...", app.spinner_frame()));
        render_message(f, area, "Results".to_string(), focused, message);
        return;
    }

    if !affordances.results_visible || app.cards.is_empty() {
        let message = if affordances.no_results {
            Line::from(Span::styled("No results found", Style::default().fg(Color::Red)))
        } else {
            Line::from(Span::styled(
                "Type a query and press Enter",
                Style::default().fg(Color::DarkGray),
            ))
        };
        render_message(f, area, "Results".to_string(), focused, message);
        return;
    }

    let mut items: Vec<ListItem> = app.cards.iter().map(card_item).collect();
    if affordances.load_more {
        items.push(ListItem::new(Line::from(Span::styled(
            "▼ Load more (m)",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ))));
    } else if affordances.no_results {
        items.push(ListItem::new(Line::from(Span::styled(
            "No more results",
            Style::default().fg(Color::DarkGray),
        ))));
    }

    let title = format!("Results ({} shown, page {})", app.cards.len(), app.state.page);
    let list = List::new(items)
        .block(pane_block(title, focused))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(if focused { "▶ " } else { "  " });

    let mut state = ListState::default();
    state.select(Some(app.selected_card.min(app.cards.len() - 1)));
    f.render_stateful_widget(list, area, &mut state);
}
