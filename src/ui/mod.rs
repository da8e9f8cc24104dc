//! UI module
//!
//! Contains all terminal UI components:
//! - Styles for consistent theming
//! - Page layout and content rendering
//! - Header and footer
//! - Help popup

mod styles;
pub mod layout;
pub mod page_view;
mod header;
mod footer;
mod popup;

pub use styles::Styles;
pub use layout::{layout_page, DiffSpan, PageLayout};
pub use page_view::{render_message, render_page_content, GUTTER_WIDTH};
pub use header::render_header;
pub use footer::render_footer;
pub use popup::render_help_popup;
