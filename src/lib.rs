// Library exports for the interactive product search client
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod render;
pub mod ui;

// Re-export commonly used types
pub use api::{HttpBackend, SearchBackend, SearchRequest};
pub use app::{App, SearchMode, SearchState};
pub use cli::{Cli, OutputFormat};
pub use data::{FilterCatalog, FilterSet, ResultItem, ResultPage, Review};
pub use error::SearchError;
pub use render::{render_items, CardView, Segment};
pub use ui::render_ui;
