//! Query-term highlighting

use cli_log::*;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::config::{HIGHLIGHT_PATTERN_LIMIT, MIN_HIGHLIGHT_TOKEN};

/// A run of display text, either plain or matching one of the query terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), highlighted: false }
    }

    pub fn marked(text: impl Into<String>) -> Self {
        Self { text: text.into(), highlighted: true }
    }
}

/// Case-insensitive matcher built from the query tokens longer than two characters.
#[derive(Debug, Clone)]
pub struct Highlighter {
    pattern: Option<Regex>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        let tokens: Vec<String> = query
            .split_whitespace()
            .filter(|token| token.chars().count() >= MIN_HIGHLIGHT_TOKEN)
            .map(regex::escape)
            .collect();

        if tokens.is_empty() {
            return Self { pattern: None };
        }

        let built = RegexBuilder::new(&tokens.join("|"))
            .case_insensitive(true)
            .size_limit(HIGHLIGHT_PATTERN_LIMIT)
            .build();
        let pattern = match built {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!("Highlighting disabled for this query: {e}");
                None
            }
        };
        Self { pattern }
    }

    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Split `text` into plain and highlighted segments. Concatenating the
    /// segment texts always gives back `text`.
    pub fn segments(&self, text: &str) -> Vec<Segment> {
        if text.is_empty() {
            return Vec::new();
        }
        let Some(pattern) = &self.pattern else {
            return vec![Segment::plain(text)];
        };

        let mut segments = Vec::new();
        let mut last = 0;
        for found in pattern.find_iter(text) {
            if found.start() > last {
                segments.push(Segment::plain(&text[last..found.start()]));
            }
            segments.push(Segment::marked(found.as_str()));
            last = found.end();
        }
        if last < text.len() {
            segments.push(Segment::plain(&text[last..]));
        }
        segments
    }
}
