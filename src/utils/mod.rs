//! Utility modules supporting search operations.
//!
//! - [`render_table`]: terminal table rendering for postings

mod display;

pub use display::render_table;
