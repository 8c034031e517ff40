//! Aggregates per-document summaries into the chronological index page:
//! newest first, stable for same-day posts, one listing-entry fragment
//! per document.

use crate::post::PostSummary;
use crate::template;

/// Sorts summaries by date descending. The sort is stable, so documents
/// sharing a date keep their input order.
pub fn sort_by_date(summaries: &mut [PostSummary]) {
    summaries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Renders the listing page from the index template's `BLOG_POSTS`
/// placeholder. Summaries arrive pre-truncated; no further trimming
/// happens here.
pub fn render_listing(
    mut summaries: Vec<PostSummary>,
    index_template: &str,
) -> String {
    sort_by_date(&mut summaries);
    let entries: Vec<String> =
        summaries.iter().map(listing_entry).collect();
    template::render(index_template, &[("BLOG_POSTS", &entries.join("\n"))])
}

// One <article> fragment per post. The thumbnail block is omitted
// entirely when the post has none.
fn listing_entry(post: &PostSummary) -> String {
    let thumbnail = match &post.thumbnail {
        Some(image) => format!(
            "\n            <div class=\"blog-thumbnail\">\
             \n                <img src=\"{}\" alt=\"{}\" />\
             \n            </div>",
            image, post.thumbnail_alt
        ),
        None => String::new(),
    };
    format!(
        "\n        <article class=\"blog-post-preview\">{thumbnail}\
         \n            <div class=\"blog-content\">\
         \n                <h2><a href=\"{url}\">{title}</a></h2>\
         \n                <p class=\"blog-date\">{date}</p>\
         \n                <p class=\"blog-summary\">{summary}</p>\
         \n            </div>\
         \n        </article>",
        thumbnail = thumbnail,
        url = post.url,
        title = post.title,
        date = post.date_display(),
        summary = post.summary,
    )
}
