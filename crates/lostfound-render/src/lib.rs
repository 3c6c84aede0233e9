//! Rendering utilities for terminal surfaces (Markdown pages, JSON documents).
//!
//! Renderers take the `Renderable*` model only. Whatever reaches this crate
//! has already been redacted.

#![forbid(unsafe_code)]

mod json;
mod markdown;
mod model;

pub use json::render_json;
pub use markdown::{render_detail_markdown, render_listing_markdown, render_match_notices_markdown};
pub use model::{
    RenderableDetail, RenderableImage, RenderableListing, RenderableMatchNotice, RenderableRow,
};
