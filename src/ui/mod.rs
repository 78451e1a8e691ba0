// UI module organization
pub mod layout;
pub mod components;
pub mod results;
pub mod filters;
pub mod suggestions;

// Re-export the main UI function
pub use layout::render_ui;
