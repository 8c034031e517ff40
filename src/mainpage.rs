//! Renders the site's main landing page: a curated list of items read
//! from YAML, a digest of the most recent posts, and the page's social
//! meta-tag block resolved from the template's own sidecar.

use crate::config::SiteConfig;
use crate::meta::{self, SummaryBudget};
use crate::post::{self, PostSummary};
use crate::scan::Entry;
use crate::sidecar;
use crate::social::{self, PageKind};
use crate::{index, template};
use log::error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// How many posts the recent-posts digest shows.
pub const RECENT_POST_LIMIT: usize = 5;

/// Fallback page title when the main page has no sidecar title.
pub const DEFAULT_PAGE_TITLE: &str = "Personal Site";

#[derive(Debug, Default, Deserialize)]
struct PresentationFile {
    #[serde(default)]
    presentations: Vec<Presentation>,
}

/// One curated item on the main page.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Presentation {
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub thumbnail_alt: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub download_url: String,
    #[serde(default)]
    pub download_format: String,
}

/// Loads the curated-items list. Any failure (unreadable file, bad
/// YAML) yields an empty list with an error logged; the build goes on
/// without the section's content.
pub fn load_presentations(path: &Path) -> Vec<Presentation> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            error!("could not read {}: {}", path.display(), err);
            return Vec::new();
        }
    };
    match serde_yaml::from_str::<Option<PresentationFile>>(&contents) {
        Ok(file) => file.unwrap_or_default().presentations,
        Err(err) => {
            error!("could not parse {}: {}", path.display(), err);
            Vec::new()
        }
    }
}

/// Builds the digest summaries: every document is read and summarized
/// with the digest budget, failures are logged and skipped per document,
/// and the newest `limit` posts win.
pub fn recent_posts(entries: &[Entry], limit: usize) -> Vec<PostSummary> {
    let mut posts = Vec::new();
    for entry in entries {
        match digest_summary(entry) {
            Ok(summary) => posts.push(summary),
            Err(err) => {
                error!("processing {}: {}", entry.path.display(), err);
            }
        }
    }
    index::sort_by_date(&mut posts);
    posts.truncate(limit);
    posts
}

// The digest variant of the per-document summary: shorter budget, link
// prefixed to be valid from the site root.
fn digest_summary(entry: &Entry) -> std::io::Result<PostSummary> {
    let text = fs::read_to_string(&entry.path)?;
    let content = meta::extract(&text, SummaryBudget::Digest);
    let sidecar = sidecar::load(&entry.path);
    Ok(PostSummary {
        title: content.title,
        summary: content.summary,
        url: format!("blog/{}", post::href(&entry.rel_path)),
        date: entry.date,
        thumbnail: sidecar.thumbnail.image,
        thumbnail_alt: sidecar.thumbnail.alt.unwrap_or_default(),
    })
}

/// Renders the main page from its template. `template_path` also names
/// the sidecar carrying the page's own metadata
/// (`index.html.template` → `index.html.meta.yaml`).
pub fn render(
    main_template: &str,
    template_path: &Path,
    presentations: &[Presentation],
    recent: &[PostSummary],
    config: &SiteConfig,
) -> String {
    let page_meta = sidecar::load(template_path);
    let social = social::resolve(
        &page_meta,
        DEFAULT_PAGE_TITLE,
        "",
        config,
        PageKind::MainPage,
    );
    template::render(
        main_template,
        &[
            ("PRESENTATIONS", &render_presentations(presentations)),
            ("RECENT_BLOGS", &render_recent(recent)),
            ("SOCIAL_META_TAGS", &social.head_block()),
            ("PAGE_TITLE", &social.title),
        ],
    )
}

fn render_presentations(presentations: &[Presentation]) -> String {
    presentations
        .iter()
        .map(|p| {
            format!(
                "      <div class=\"presentation\">\
                 \n        <div class=\"thumbnail\">\
                 \n          <img src=\"{thumbnail}\" alt=\"{thumbnail_alt}\" />\
                 \n        </div>\
                 \n        <div class=\"description\">\
                 \n          <h1>{title}</h1>\
                 \n          <div class=\"summary\">\
                 \n            {summary}\
                 \n          </div>\
                 \n          <div class=\"download-link\">\
                 \n            <a href=\"{download_url}\">Download</a> ({download_format})\
                 \n          </div>\
                 \n        </div>\
                 \n      </div>",
                thumbnail = p.thumbnail,
                thumbnail_alt = p.thumbnail_alt,
                title = p.title,
                summary = p.summary,
                download_url = p.download_url,
                download_format = p.download_format,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_recent(posts: &[PostSummary]) -> String {
    if posts.is_empty() {
        return "<p class=\"no-blogs\">No blog posts yet.</p>".to_owned();
    }
    posts
        .iter()
        .map(|post| {
            let thumbnail = match &post.thumbnail {
                Some(image) => format!(
                    "\n        <div class=\"blog-thumbnail\">\
                     \n          <img src=\"{}\" alt=\"{}\" />\
                     \n        </div>",
                    image, post.thumbnail_alt
                ),
                None => String::new(),
            };
            format!(
                "      <div class=\"recent-blog-post\">{thumbnail}\
                 \n        <div class=\"blog-content\">\
                 \n          <h3><a href=\"{url}\">{title}</a></h3>\
                 \n          <p class=\"blog-date\">{date}</p>\
                 \n          <p class=\"blog-summary\">{summary}</p>\
                 \n        </div>\
                 \n      </div>",
                thumbnail = thumbnail,
                url = post.url,
                title = post.title,
                date = post.date_display(),
                summary = post.summary,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
