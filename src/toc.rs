//! Builds the collapsible table of contents from a document's headings,
//! and injects matching `id` attributes into the rendered HTML. The two
//! operations are independent passes over the same titles; both lean on
//! [`crate::slug::slugify`] so their anchors can never drift apart.

use crate::slug::slugify;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static HEADING_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.*)$").unwrap());
static HEADING_ELEMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<h([1-6])>(.*?)</h([1-6])>").unwrap());
static INNER_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

/// A heading scanned from the markdown source. Nesting is implied by
/// `level`; the collection stays a flat, document-ordered list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Heading {
    pub level: usize,
    pub title: String,
    pub anchor: String,
}

/// Scans every heading line (1–6 `#` markers followed by whitespace and
/// text) in document order.
pub fn headings(text: &str) -> Vec<Heading> {
    text.lines()
        .filter_map(|line| HEADING_LINE.captures(line))
        .map(|caps| {
            let title = caps[2].trim().to_owned();
            Heading {
                level: caps[1].len(),
                anchor: slugify(&title),
                title,
            }
        })
        .collect()
}

/// Builds the collapsible table-of-contents fragment for a document.
/// Returns the empty string when the document has no headings; the
/// caller must then render no TOC markup at all, not an empty container.
pub fn build(text: &str) -> String {
    let headings = headings(text);
    if headings.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div class=\"table-of-contents\">\n");
    html.push_str(
        "<input type=\"checkbox\" id=\"toc-toggle\" class=\"toc-checkbox\">\n",
    );
    html.push_str(
        "<label for=\"toc-toggle\" class=\"toc-header\">Table of Contents \
         <span class=\"toc-arrow\"></span></label>\n",
    );
    html.push_str("<ul class=\"toc-content\">\n");
    for heading in &headings {
        html.push_str(&format!(
            "  <li class=\"toc-level-{}\"><a href=\"#{}\">{}</a></li>\n",
            heading.level, heading.anchor, heading.title
        ));
    }
    html.push_str("</ul>\n");
    html.push_str("</div>");
    html
}

/// Re-derives each heading's anchor from its literal inner text in the
/// rendered HTML and injects it as an `id` attribute. Inline tags inside
/// the heading are stripped before slugging, so a heading containing
/// `<code>` spans still matches the anchor computed from the source.
pub fn inject_anchors(html: &str) -> String {
    HEADING_ELEMENT
        .replace_all(html, |caps: &Captures| {
            if caps[1] != caps[3] {
                return caps[0].to_owned();
            }
            let inner = &caps[2];
            let anchor = slugify(&INNER_TAG.replace_all(inner, ""));
            format!(
                "<h{level} id=\"{anchor}\">{inner}</h{level}>",
                level = &caps[1],
                anchor = anchor,
                inner = inner
            )
        })
        .into_owned()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::markdown;

    #[test]
    fn test_headings_levels_and_anchors() {
        let text = "# Title\n\ntext\n\n## Getting Started\n\n### Deep-Dive: Q&A\n";
        let found = headings(text);
        assert_eq!(3, found.len());
        assert_eq!(
            Heading {
                level: 1,
                title: "Title".to_owned(),
                anchor: "title".to_owned(),
            },
            found[0]
        );
        assert_eq!(2, found[1].level);
        assert_eq!("getting-started", found[1].anchor);
        assert_eq!(3, found[2].level);
        assert_eq!("deep-dive-qa", found[2].anchor);
    }

    #[test]
    fn test_build_empty_without_headings() {
        assert_eq!("", build("just a paragraph\n\nand another\n"));
    }

    #[test]
    fn test_build_lists_every_heading() {
        let html = build("# One\n\n## Two\n");
        assert!(html.starts_with("<div class=\"table-of-contents\">"));
        assert!(html.contains(
            "<li class=\"toc-level-1\"><a href=\"#one\">One</a></li>"
        ));
        assert!(html.contains(
            "<li class=\"toc-level-2\"><a href=\"#two\">Two</a></li>"
        ));
        assert!(html.ends_with("</div>"));
    }

    #[test]
    fn test_inject_anchors() {
        assert_eq!(
            "<h2 id=\"getting-started\">Getting Started</h2>",
            inject_anchors("<h2>Getting Started</h2>"),
        );
    }

    #[test]
    fn test_inject_anchors_strips_inner_tags() {
        assert_eq!(
            "<h3 id=\"using-weft\">Using <code>weft</code></h3>",
            inject_anchors("<h3>Using <code>weft</code></h3>"),
        );
    }

    #[test]
    fn test_inject_leaves_mismatched_tags_alone() {
        let html = "<h2>open</h3>";
        assert_eq!(html, inject_anchors(html));
    }

    // Cross-pass invariant: every anchor the TOC references equals the
    // id injected into the corresponding rendered heading.
    #[test]
    fn test_toc_hrefs_match_injected_ids() {
        let text = "# The Title\n\nintro\n\n## Getting Started\n\n\
                    body\n\n### Using `weft`\n\nmore\n\n## What's Next?\n";
        let toc = build(text);
        let rendered = inject_anchors(&markdown::to_html(text));

        let href = Regex::new("href=\"#([^\"]*)\"").unwrap();
        let id = Regex::new("<h[1-6] id=\"([^\"]*)\"").unwrap();
        let hrefs: Vec<&str> =
            href.captures_iter(&toc).map(|c| c.get(1).unwrap().as_str()).collect();
        let ids: Vec<&str> =
            id.captures_iter(&rendered).map(|c| c.get(1).unwrap().as_str()).collect();

        assert_eq!(hrefs, ids);
        assert!(!hrefs.is_empty());
    }

    #[test]
    fn test_duplicate_headings_share_anchor() {
        let toc = build("## Notes\n\ntext\n\n## Notes\n");
        assert_eq!(2, toc.matches("href=\"#notes\"").count());
    }
}
