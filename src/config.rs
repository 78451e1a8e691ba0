// Configuration constants for the application

/// API endpoints
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";
pub const SEARCH_PATH: &str = "/api/search";
pub const SUGGESTIONS_PATH: &str = "/api/suggestions";

/// Network settings
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Search limits
pub const PAGE_SIZE: usize = 12; // Fixed page size requested from the backend
pub const MIN_SUGGEST_PREFIX: usize = 2;
pub const SUGGEST_DEBOUNCE_MS: u64 = 300;

/// Rendering limits
pub const PREVIEW_MAX_CHARS: usize = 100;
pub const MAX_CATEGORY_LABELS: usize = 3;
pub const MIN_HIGHLIGHT_TOKEN: usize = 3; // Tokens of 2 chars or less are never highlighted
pub const HIGHLIGHT_PATTERN_LIMIT: usize = 1 << 20; // Compiled size cap for the highlight regex, in bytes
pub const ELLIPSIS: &str = "...";
pub const UNKNOWN_BRAND: &str = "Unknown";
pub const UNTITLED_PRODUCT: &str = "Untitled product";

/// Rating slider bounds
pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 5.0;
pub const RATING_STEP: f64 = 0.5;

/// Update intervals (in milliseconds)
pub const TICK_RATE_MS: u64 = 15;
pub const DATA_UPDATE_RATE_MS: u64 = 25;
pub const UI_UPDATE_RATE_MS: u64 = 1000;

/// Default CLI values
pub const DEFAULT_MODE: &str = "hybrid";
pub const ENDPOINT_ENV: &str = "PRODUCT_SEARCH_ENDPOINT";
