//! Result types and rendering
//!
//! Defines the records returned by a search provider and turns them into
//! terminal output.

mod render;
mod types;

pub use render::{render, render_json, OutputFormat, RenderStyle, RenderedLines, MISSING};
pub use types::*;
