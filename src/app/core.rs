//! Core application logic and initialization

use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use chrono::{DateTime, Local};
use cli_log::*;
use ratatui::layout::Rect;
use tokio::task::JoinHandle;

use crate::api::{SearchBackend, SearchRequest};
use crate::config::SUGGEST_DEBOUNCE_MS;
use crate::data::FilterCatalog;
use crate::render::CardView;
use super::debounce::DebounceTimer;
use super::filters::FilterPanel;
use super::sequence::RequestTracker;
use super::state::SearchState;
use super::suggestions::SuggestionList;
use super::types::{Affordances, Focus, SearchMode};
use super::updates::{self, Inbox, Reply};

/// Screen areas recorded at draw time, used to hit-test mouse clicks.
#[derive(Debug, Default, Clone, Copy)]
pub struct HitRegions {
    pub input: Rect,
    pub suggestions: Option<Rect>,
    /// Index of the first suggestion shown in the dropdown after scrolling.
    pub suggestion_offset: usize,
}

pub struct App {
    // Backend access
    pub backend: Arc<dyn SearchBackend>,
    pub(crate) inbox: Inbox,
    pub(crate) tasks: Vec<JoinHandle<()>>,
    pub(crate) search_requests: RequestTracker,
    pub(crate) suggestion_requests: RequestTracker,

    // Canonical search state and what is rendered for it
    pub state: SearchState,
    pub affordances: Affordances,
    pub cards: Vec<CardView>,

    // Input and suggestions
    pub input: String,
    pub suggestions: SuggestionList,
    pub debounce: DebounceTimer<String>,

    // Filters
    pub filter_panel: FilterPanel,

    // UI state
    pub focus: Focus,
    pub selected_card: usize,
    pub show_details: bool,
    pub needs_redraw: bool,
    pub regions: HitRegions,
    pub last_failure: Option<String>,
    pub last_response_at: Option<DateTime<Local>>,
    pub started_at: Instant,
}

impl App {
    pub fn new(backend: Arc<dyn SearchBackend>, catalog: &FilterCatalog, mode: SearchMode) -> Self {
        Self {
            backend,
            inbox: Arc::new(Mutex::new(Vec::new())),
            tasks: Vec::new(),
            search_requests: RequestTracker::default(),
            suggestion_requests: RequestTracker::default(),
            state: SearchState::with_mode(mode),
            affordances: Affordances::default(),
            cards: Vec::new(),
            input: String::new(),
            suggestions: SuggestionList::default(),
            debounce: DebounceTimer::new(Duration::from_millis(SUGGEST_DEBOUNCE_MS)),
            filter_panel: FilterPanel::from_catalog(catalog),
            focus: Focus::SearchInput,
            selected_card: 0,
            show_details: false,
            needs_redraw: true,
            regions: HitRegions::default(),
            last_failure: None,
            last_response_at: None,
            started_at: Instant::now(),
        }
    }

    /// Periodic work for the event loop: fire due suggestion fetches, apply
    /// backend replies and forget finished tasks.
    pub fn update(&mut self) {
        self.fire_due_suggestions(Instant::now());
        updates::process_backend_updates(self);
        self.tasks.retain(|task| !task.is_finished());
    }

    /// Wait for every in-flight backend call and apply its reply.
    pub async fn settle(&mut self) {
        while !self.tasks.is_empty() {
            for task in std::mem::take(&mut self.tasks) {
                if let Err(e) = task.await {
                    warn!("Backend task failed: {e}");
                }
            }
            updates::process_backend_updates(self);
        }
        updates::process_backend_updates(self);
    }

    pub fn in_flight(&self) -> usize {
        self.tasks.iter().filter(|task| !task.is_finished()).count()
    }

    pub(crate) fn spawn_search(&mut self, seq: u64, request: SearchRequest) {
        let backend = Arc::clone(&self.backend);
        let reply = Reply::for_search(Arc::clone(&self.inbox), seq, request.page);
        self.tasks.push(tokio::spawn(async move {
            let outcome = backend.search(&request).await;
            reply.send_search(outcome);
        }));
    }

    pub(crate) fn spawn_suggestions(&mut self, seq: u64, prefix: String) {
        let backend = Arc::clone(&self.backend);
        let reply = Reply::for_suggestions(Arc::clone(&self.inbox), seq);
        self.tasks.push(tokio::spawn(async move {
            let outcome = backend.suggest(&prefix).await;
            reply.send_suggestions(outcome);
        }));
    }

    pub fn selected_card_view(&self) -> Option<&CardView> {
        self.cards.get(self.selected_card)
    }

    /// Frame of the loading spinner, derived from the elapsed time.
    pub fn spinner_frame(&self) -> char {
        const FRAMES: [char; 4] = ['|', '/', '-', '\\'];
        let tick = self.started_at.elapsed().as_millis() / 120;
        FRAMES[(tick % FRAMES.len() as u128) as usize]
    }
}
