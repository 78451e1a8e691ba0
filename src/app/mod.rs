// App module structure: the search controller and its collaborators

pub mod types;
pub mod core;
pub mod state;
pub mod sequence;
pub mod debounce;
pub mod dispatch;
pub mod suggestions;
pub mod filters;
pub mod input;
pub mod navigation;
pub mod updates;

// Re-export the main App struct and key types
pub use self::core::{App, HitRegions};
pub use debounce::DebounceTimer;
pub use filters::{FilterKind, FilterOption, FilterPanel, FilterRow};
pub use state::SearchState;
pub use suggestions::SuggestionList;
pub use types::{Affordances, Focus, SearchMode};
pub use updates::BackendEvent;
