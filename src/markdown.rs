//! Thin wrapper over the markdown converter. The converter itself is an
//! external collaborator; this module only fixes the extension set the
//! site uses.

use pulldown_cmark::{html, Options, Parser};

/// Converts markdown to HTML with footnotes, strikethrough, tables, and
/// task lists enabled.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut out = String::new();
    html::push_html(&mut out, Parser::new_ext(markdown, options));
    out
}
