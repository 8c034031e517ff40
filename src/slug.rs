//! Turns heading titles into URL-fragment anchors. Both the table of
//! contents ([`crate::toc::build`]) and the heading-ID injection pass
//! ([`crate::toc::inject_anchors`]) derive their anchors here; the two
//! passes run over the same titles independently and must produce
//! byte-identical results.

use regex::Regex;
use std::sync::LazyLock;

static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s-]").unwrap());
static SEPARATOR_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").unwrap());

/// Converts a title into an identifier usable as an HTML fragment anchor:
/// lowercased, punctuation stripped, runs of whitespace and hyphens
/// collapsed to a single hyphen, leading and trailing hyphens trimmed.
///
/// Pure and idempotent. A title with no word characters at all reduces to
/// the empty string, and two titles that normalize the same way share an
/// anchor; no disambiguation is applied.
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    let stripped = DISALLOWED.replace_all(&lowered, "");
    let collapsed = SEPARATOR_RUN.replace_all(&stripped, "-");
    collapsed.trim_matches('-').to_owned()
}
