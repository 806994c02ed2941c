//! Human-facing output for the inspection binary.

pub mod text;

pub use text::render_summary;
