//! The per-document pipeline: reads one scanned entry, derives its
//! metadata and table of contents, converts the body, and renders the
//! document-page template. Produces the [`PostSummary`] consumed by the
//! chronological index.

use crate::config::SiteConfig;
use crate::meta::{self, SummaryBudget};
use crate::scan::Entry;
use crate::sidecar;
use crate::social::{self, PageKind};
use crate::template::{self, RelativePaths};
use crate::{markdown, toc};
use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::Path;

/// A markdown source unit, fully read into memory.
pub struct Document {
    pub entry: Entry,
    pub text: String,
}

impl Document {
    /// Reads the entry's source text. Kept separate from scanning so a
    /// single unreadable file is an error for that document alone.
    pub fn load(entry: &Entry) -> io::Result<Document> {
        Ok(Document {
            entry: entry.clone(),
            text: fs::read_to_string(&entry.path)?,
        })
    }
}

/// The merged, display-ready record for one document, aggregated by the
/// index page and the main-page digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostSummary {
    pub title: String,
    pub summary: String,

    /// Link target, relative to whichever page embeds the summary.
    pub url: String,

    pub date: NaiveDate,
    pub thumbnail: Option<String>,
    pub thumbnail_alt: String,
}

impl PostSummary {
    /// The long-format display date, e.g. `March 7, 2024`.
    pub fn date_display(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }
}

/// Output path segments for a document: the content-relative path with
/// the extension changed to `.html`, joined with forward slashes.
pub fn href(rel_path: &Path) -> String {
    rel_path
        .with_extension("html")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Renders a document page. Returns the page HTML alongside the
/// document's [`PostSummary`] (with its `url` relative to the section
/// index page, which is where the summary is embedded).
pub fn render(
    doc: &Document,
    page_template: &str,
    config: &SiteConfig,
) -> (String, PostSummary) {
    let content = meta::extract(&doc.text, SummaryBudget::Page);
    let sidecar = sidecar::load(&doc.entry.path);
    let toc_html = toc::build(&doc.text);
    let body = toc::inject_anchors(&markdown::to_html(&doc.text));
    let social = social::resolve(
        &sidecar,
        &content.title,
        &content.summary,
        config,
        PageKind::Article,
    );
    let paths = RelativePaths::for_depth(doc.entry.depth);

    let href = href(&doc.entry.rel_path);
    let canonical_url = format!("blog/{}", href);
    let published = format!("{}T00:00:00Z", doc.entry.date.format("%Y-%m-%d"));

    let html = template::render(
        page_template,
        &[
            ("TITLE", &content.title),
            ("TABLE_OF_CONTENTS", &toc_html),
            ("CONTENT", &body),
            ("CSS_PATH", &paths.stylesheet),
            ("HOME_PATH", &paths.home),
            ("BLOG_INDEX_PATH", &paths.section_index),
            ("SUMMARY", &content.summary),
            ("PUBLISHED_DATE", &published),
            ("BLOG_URL", &canonical_url),
            ("OG_TYPE", &social.object_type),
            ("OG_IMAGE_META", &social.og_image_block()),
            ("TWITTER_CARD_TYPE", &social.card_type),
            ("TWITTER_IMAGE_META", &social.twitter_image_block()),
        ],
    );

    let summary = PostSummary {
        title: content.title,
        summary: content.summary,
        url: href,
        date: doc.entry.date,
        thumbnail: sidecar.thumbnail.image.clone(),
        thumbnail_alt: sidecar.thumbnail.alt.clone().unwrap_or_default(),
    };

    (html, summary)
}
