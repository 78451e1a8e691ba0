//! Replies from backend tasks and their hand-off to the event loop

use std::sync::{Arc, Mutex, PoisonError};

use cli_log::*;

use crate::data::ResultPage;
use crate::error::SearchError;
use super::core::App;

#[derive(Debug)]
pub enum BackendEvent {
    Search {
        seq: u64,
        page: u32,
        outcome: Result<ResultPage, SearchError>,
    },
    Suggestions {
        seq: u64,
        outcome: Result<Vec<String>, SearchError>,
    },
}

/// Shared queue filled by backend tasks and drained by the event loop.
pub type Inbox = Arc<Mutex<Vec<BackendEvent>>>;

fn push_event(inbox: &Inbox, event: BackendEvent) {
    inbox.lock().unwrap_or_else(PoisonError::into_inner).push(event);
}

pub fn drain(inbox: &Inbox) -> Vec<BackendEvent> {
    std::mem::take(&mut *inbox.lock().unwrap_or_else(PoisonError::into_inner))
}

#[derive(Debug, Clone, Copy)]
enum ReplyKind {
    Search { page: u32 },
    Suggestions,
}

/// Completion guard owned by a backend task. If the task ends without calling
/// one of the send methods (panic, runtime shutdown) the guard reports
/// [`SearchError::Aborted`], so the loading state is always released.
pub struct Reply {
    inbox: Inbox,
    seq: u64,
    kind: ReplyKind,
    sent: bool,
}

impl Reply {
    pub fn for_search(inbox: Inbox, seq: u64, page: u32) -> Self {
        Self { inbox, seq, kind: ReplyKind::Search { page }, sent: false }
    }

    pub fn for_suggestions(inbox: Inbox, seq: u64) -> Self {
        Self { inbox, seq, kind: ReplyKind::Suggestions, sent: false }
    }

    pub fn send_search(mut self, outcome: Result<ResultPage, SearchError>) {
        if let ReplyKind::Search { page } = self.kind {
            self.sent = true;
            push_event(&self.inbox, BackendEvent::Search { seq: self.seq, page, outcome });
        }
    }

    pub fn send_suggestions(mut self, outcome: Result<Vec<String>, SearchError>) {
        if let ReplyKind::Suggestions = self.kind {
            self.sent = true;
            push_event(&self.inbox, BackendEvent::Suggestions { seq: self.seq, outcome });
        }
    }
}

impl Drop for Reply {
    fn drop(&mut self) {
        if self.sent {
            return;
        }
        let event = match self.kind {
            ReplyKind::Search { page } => BackendEvent::Search {
                seq: self.seq,
                page,
                outcome: Err(SearchError::Aborted),
            },
            ReplyKind::Suggestions => BackendEvent::Suggestions {
                seq: self.seq,
                outcome: Err(SearchError::Aborted),
            },
        };
        push_event(&self.inbox, event);
    }
}

pub fn process_backend_updates(app: &mut App) {
    let events = drain(&app.inbox);
    if events.is_empty() {
        return;
    }
    debug!("Applying {} backend event(s)", events.len());

    for event in events {
        apply_backend_event(app, event);
    }
    app.needs_redraw = true;
}

pub fn apply_backend_event(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::Search { seq, page, outcome } => app.apply_search_result(seq, page, outcome),
        BackendEvent::Suggestions { seq, outcome } => app.apply_suggestions(seq, outcome),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inbox() -> Inbox {
        Arc::new(Mutex::new(Vec::new()))
    }

    #[test]
    fn sent_reply_is_delivered_once() {
        let inbox = inbox();
        Reply::for_search(inbox.clone(), 3, 2).send_search(Ok(ResultPage::default()));

        let events = drain(&inbox);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], BackendEvent::Search { seq: 3, page: 2, outcome: Ok(_) }));
        assert!(drain(&inbox).is_empty());
    }

    #[test]
    fn dropped_reply_reports_abort() {
        let inbox = inbox();
        drop(Reply::for_suggestions(inbox.clone(), 9));

        let events = drain(&inbox);
        assert!(matches!(
            events.as_slice(),
            [BackendEvent::Suggestions { seq: 9, outcome: Err(SearchError::Aborted) }]
        ));
    }

    #[test]
    fn panicking_task_still_replies() {
        let inbox = inbox();
        let reply = Reply::for_search(inbox.clone(), 1, 1);
        let result = std::thread::spawn(move || {
            let _reply = reply;
            panic!("backend blew up");
        })
        .join();
        assert!(result.is_err());
        assert!(matches!(
            drain(&inbox).as_slice(),
            [BackendEvent::Search { seq: 1, outcome: Err(SearchError::Aborted), .. }]
        ));
    }
}
