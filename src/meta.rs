//! Extracts display metadata from a document's body: the title (first
//! top-level heading) and the summary (first paragraph line, with inline
//! markdown stripped and truncated to a per-context budget).

use regex::Regex;
use std::sync::LazyLock;

/// Summary character budget for standalone document pages.
pub const PAGE_SUMMARY_LIMIT: usize = 200;

/// Summary character budget for the main page's recent-posts digest.
pub const DIGEST_SUMMARY_LIMIT: usize = 150;

/// Title used when a document has no top-level heading.
pub const DEFAULT_TITLE: &str = "Untitled";

/// Summary used when a document has no paragraph text.
pub const DEFAULT_SUMMARY: &str = "No summary available.";

const ELLIPSIS: &str = "...";

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());
static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());
static INLINE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Selects the truncation budget for a summary. The two rendering
/// contexts have observably different budgets; keep both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SummaryBudget {
    /// Standalone document pages ([`PAGE_SUMMARY_LIMIT`] chars).
    Page,
    /// The main-page digest ([`DIGEST_SUMMARY_LIMIT`] chars).
    Digest,
}

impl SummaryBudget {
    pub const fn limit(self) -> usize {
        match self {
            SummaryBudget::Page => PAGE_SUMMARY_LIMIT,
            SummaryBudget::Digest => DIGEST_SUMMARY_LIMIT,
        }
    }

    // Inline code markers are only stripped on the page path.
    const fn strips_inline_code(self) -> bool {
        matches!(self, SummaryBudget::Page)
    }
}

/// Title and summary extracted from a document body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentMeta {
    pub title: String,
    pub summary: String,
}

/// Scans the document top to bottom and extracts its title and summary,
/// substituting [`DEFAULT_TITLE`] / [`DEFAULT_SUMMARY`] where the
/// document has no eligible line.
pub fn extract(text: &str, budget: SummaryBudget) -> ContentMeta {
    ContentMeta {
        title: extract_title(text)
            .unwrap_or_else(|| DEFAULT_TITLE.to_owned()),
        summary: extract_summary(text, budget)
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_owned()),
    }
}

// The title is the text of the first `# `-prefixed line.
fn extract_title(text: &str) -> Option<String> {
    text.lines().find_map(|line| {
        line.strip_prefix("# ").map(|rest| rest.trim().to_owned())
    })
}

// The summary is the first line that is neither blank nor a heading,
// with link syntax replaced by its label and emphasis markers stripped.
fn extract_summary(text: &str, budget: SummaryBudget) -> Option<String> {
    let line = text
        .lines()
        .find(|line| !line.trim().is_empty() && !line.starts_with('#'))?;
    let clean = LINK.replace_all(line, "$1");
    let clean = BOLD.replace_all(&clean, "$1");
    let clean = ITALIC.replace_all(&clean, "$1");
    let clean = if budget.strips_inline_code() {
        INLINE_CODE.replace_all(&clean, "$1").into_owned()
    } else {
        clean.into_owned()
    };
    Some(truncate(clean.trim(), budget.limit()))
}

fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() > limit {
        let mut out: String = text.chars().take(limit).collect();
        out.push_str(ELLIPSIS);
        out
    } else {
        text.to_owned()
    }
}
