pub mod client;
pub mod messages;

// Re-export commonly used types
pub use client::{HttpBackend, SearchBackend, SearchRequest};
pub use messages::{RawRecord, SearchResponse, SuggestionResponse};
