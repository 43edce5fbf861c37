//! Single-pass renderer for a small Markdown dialect.
//!
//! The whole document is held in memory and walked once by a
//! priority-ordered set of grammar rules; each rule writes its HTML
//! directly to the output while it matches, so no syntax tree is ever
//! built. Unrecognized bytes fall through to entity escaping or a
//! verbatim copy, which means malformed markup degrades to plain text
//! instead of failing.

mod render;
mod tables;

pub use render::{render, render_with_options};

/// Per-conversion configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Options {
    /// Escape all HTML strictly: the raw-HTML and comment passthrough
    /// rules are disabled, so `<`, `>` and `&` in the source always
    /// reach the output as entities.
    pub strict_escape: bool,
}
