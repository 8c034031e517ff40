//! Exports [`build_site`], which stitches together the high-level steps
//! of a build: load the templates, scan the content tree, render one
//! page per document, render the chronological index, and render the
//! main landing page.
//!
//! A missing template is the only fatal condition. Individual documents
//! that fail to read or transform are skipped with an error logged, in
//! both the standalone-page pass and the digest pass; the failures are
//! returned to the caller for reporting.

use crate::config::SiteConfig;
use crate::post::{self, Document};
use crate::{index, mainpage, scan};
use chrono::Local;
use log::{error, info};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Subdirectory of the output root receiving document pages and the
/// chronological index.
pub const SECTION_OUTPUT_DIRECTORY: &str = "blog";

/// Everything a build needs, assembled by the caller (the CLI driver, in
/// practice).
pub struct BuildConfig {
    pub content_directory: PathBuf,
    pub post_template: PathBuf,
    pub index_template: PathBuf,
    pub main_template: PathBuf,
    pub presentations_file: PathBuf,
    pub site_config_file: PathBuf,
    pub output_directory: PathBuf,
}

/// What a completed build produced: how many document pages were
/// written, and which documents were skipped and why.
pub struct BuildReport {
    pub pages_written: usize,
    pub failures: Vec<(PathBuf, Error)>,
}

/// Runs a full build. Returns `Err` only for fatal conditions (template
/// files that cannot be read, or I/O failures writing the aggregate
/// pages); per-document failures land in the report instead.
pub fn build_site(config: &BuildConfig) -> Result<BuildReport> {
    let post_template = read_template(&config.post_template)?;
    let index_template = read_template(&config.index_template)?;
    let main_template = read_template(&config.main_template)?;

    let site = SiteConfig::load(&config.site_config_file);
    let today = Local::now().date_naive();
    let entries = scan::scan(&config.content_directory, today);
    let section_out = config.output_directory.join(SECTION_OUTPUT_DIRECTORY);

    let mut summaries = Vec::new();
    let mut failures = Vec::new();
    for entry in &entries {
        match render_document(entry, &post_template, &site, &section_out) {
            Ok(summary) => summaries.push(summary),
            Err(err) => {
                error!("processing {}: {}", entry.path.display(), err);
                failures.push((entry.path.clone(), err));
            }
        }
    }

    if summaries.is_empty() {
        info!(
            "no posts found under {}",
            config.content_directory.display()
        );
    } else {
        info!("generated {} post pages", summaries.len());
        let listing =
            index::render_listing(summaries.clone(), &index_template);
        write_page(&section_out.join("index.html"), &listing)?;
    }

    let presentations =
        mainpage::load_presentations(&config.presentations_file);
    let recent =
        mainpage::recent_posts(&entries, mainpage::RECENT_POST_LIMIT);
    let main_html = mainpage::render(
        &main_template,
        &config.main_template,
        &presentations,
        &recent,
        &site,
    );
    write_page(&config.output_directory.join("index.html"), &main_html)?;

    Ok(BuildReport {
        pages_written: summaries.len(),
        failures,
    })
}

fn render_document(
    entry: &scan::Entry,
    post_template: &str,
    site: &SiteConfig,
    section_out: &Path,
) -> Result<post::PostSummary> {
    let doc = Document::load(entry)?;
    let (html, summary) = post::render(&doc, post_template, site);
    write_page(
        &section_out.join(entry.rel_path.with_extension("html")),
        &html,
    )?;
    Ok(summary)
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| Error::Template {
        path: path.to_owned(),
        err,
    })
}

fn write_page(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}

pub type Result<T> = std::result::Result<T, Error>;

/// The error type for building a site.
#[derive(Debug)]
pub enum Error {
    /// Returned when a required template file cannot be read. Fatal.
    Template { path: PathBuf, err: io::Error },

    /// Returned for other I/O errors.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Template { path, err } => {
                write!(f, "reading template file '{}': {}", path.display(), err)
            }
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Template { path: _, err } => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for Error {
    /// Converts [`io::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use std::path::Path;

    const POST_TEMPLATE: &str = "<title>{{TITLE}}</title>\n\
        {{TABLE_OF_CONTENTS}}\n<main>{{CONTENT}}</main>\n\
        <a href=\"{{BLOG_INDEX_PATH}}\">index</a>\n";
    const INDEX_TEMPLATE: &str = "<section>{{BLOG_POSTS}}</section>\n";
    const MAIN_TEMPLATE: &str = "<head>{{SOCIAL_META_TAGS}}\
        <title>{{PAGE_TITLE}}</title></head>\n\
        <div id=\"talks\">{{PRESENTATIONS}}</div>\n\
        <div id=\"recent\">{{RECENT_BLOGS}}</div>\n";

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn build_config(root: &Path) -> BuildConfig {
        BuildConfig {
            content_directory: root.join("src/blog"),
            post_template: root.join("templates/blog-post.html.template"),
            index_template: root.join("templates/blog-index.html.template"),
            main_template: root.join("templates/index.html.template"),
            presentations_file: root.join("templates/presentations.yaml"),
            site_config_file: root.join("src/config.yml"),
            output_directory: root.join("dist"),
        }
    }

    fn write_templates(root: &Path) {
        write(
            &root.join("templates/blog-post.html.template"),
            POST_TEMPLATE,
        );
        write(
            &root.join("templates/blog-index.html.template"),
            INDEX_TEMPLATE,
        );
        write(&root.join("templates/index.html.template"), MAIN_TEMPLATE);
    }

    #[test]
    fn test_build_site_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_templates(root);
        write(
            &root.join("src/blog/2024/03/07/launch.md"),
            "# Launch\n\nWe shipped.\n\n## Details\n\nLots of them.\n",
        );
        write(
            &root.join("src/blog/2024/06/15/update.md"),
            "# Update\n\nStill going.\n",
        );
        write(
            &root.join("templates/presentations.yaml"),
            "presentations:\n  - title: Talk\n    summary: S\n    \
             thumbnail: t.png\n    thumbnail_alt: a\n    \
             download_url: d.pdf\n    download_format: PDF\n",
        );

        let report = build_site(&build_config(root)).unwrap();
        assert_eq!(2, report.pages_written);
        assert!(report.failures.is_empty());

        let launch = fs::read_to_string(
            root.join("dist/blog/2024/03/07/launch.html"),
        )
        .unwrap();
        assert!(launch.contains("<title>Launch</title>"));
        assert!(launch.contains("<h2 id=\"details\">Details</h2>"));
        assert!(launch.contains("href=\"#details\""));
        assert!(launch.contains("<a href=\"../../../index.html\">index</a>"));

        let listing =
            fs::read_to_string(root.join("dist/blog/index.html")).unwrap();
        let update = listing.find("Update").unwrap();
        let launch_pos = listing.find("Launch").unwrap();
        assert!(update < launch_pos);

        let main = fs::read_to_string(root.join("dist/index.html")).unwrap();
        assert!(main.contains("<h1>Talk</h1>"));
        assert!(main.contains("blog/2024/06/15/update.html"));
        assert!(main.contains("<title>Personal Site</title>"));
    }

    #[test]
    fn test_missing_template_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write(
            &root.join("templates/blog-index.html.template"),
            INDEX_TEMPLATE,
        );
        write(&root.join("templates/index.html.template"), MAIN_TEMPLATE);

        match build_site(&build_config(root)) {
            Err(Error::Template { path, err: _ }) => {
                assert!(path.ends_with("blog-post.html.template"));
            }
            other => panic!(
                "expected a template error, got {:?}",
                other.map(|r| r.pages_written)
            ),
        }
    }

    #[test]
    fn test_empty_content_tree_still_builds_main_page() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        write_templates(root);

        let report = build_site(&build_config(root)).unwrap();
        assert_eq!(0, report.pages_written);
        assert!(!root.join("dist/blog/index.html").exists());

        let main = fs::read_to_string(root.join("dist/index.html")).unwrap();
        assert!(main.contains("No blog posts yet."));
    }
}
