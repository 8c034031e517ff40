//! Walks the content tree and produces the catalog of markdown documents
//! to build. Publish dates are derived from `YYYY/MM/DD/`-prefixed paths,
//! with a silent fall-back to the build date for anything else; ordering
//! of the catalog itself is whatever the walk yields; dates only matter
//! once the index sorts by them.

use chrono::NaiveDate;
use log::error;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const MARKDOWN_EXTENSION: &str = ".md";

/// One discovered document. Immutable once scanned; the body is read
/// later, per document, so a single unreadable file cannot sink the walk.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// Full path to the source file.
    pub path: PathBuf,

    /// Path relative to the content root; mirrored in the output tree.
    pub rel_path: PathBuf,

    /// Derived publish date (day granularity).
    pub date: NaiveDate,

    /// Number of parent directories in `rel_path`.
    pub depth: usize,
}

/// Recursively enumerates the markdown documents under `content_root`.
/// Symbolic links are not followed. `today` is the fallback date for
/// documents whose paths don't encode one; it is injected rather than
/// read from the clock here so the policy is testable.
pub fn scan(content_root: &Path, today: NaiveDate) -> Vec<Entry> {
    let mut entries = Vec::new();
    if !content_root.exists() {
        return entries;
    }
    for result in WalkDir::new(content_root) {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                error!("walking {}: {}", content_root.display(), err);
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        if !entry
            .file_name()
            .to_string_lossy()
            .ends_with(MARKDOWN_EXTENSION)
        {
            continue;
        }
        // strip_prefix can't fail; every entry is under the root
        let rel_path = entry
            .path()
            .strip_prefix(content_root)
            .unwrap()
            .to_path_buf();
        let depth = rel_path.components().count().saturating_sub(1);
        let date = date_from_path(&rel_path, today);
        entries.push(Entry {
            path: entry.into_path(),
            rel_path,
            date,
            depth,
        });
    }
    entries
}

/// Derives a publish date from a relative path whose first three
/// segments encode year/month/day (`2024/03/07/launch.md`). Paths with
/// fewer than three segments, non-numeric segments, or an invalid
/// calendar date fall back to `today`. The fallback is silent by policy: such
/// documents are treated as published on the day of the build.
pub fn date_from_path(rel_path: &Path, today: NaiveDate) -> NaiveDate {
    let mut segments = rel_path.iter().map(|s| s.to_string_lossy());
    let (Some(year), Some(month), Some(day)) =
        (segments.next(), segments.next(), segments.next())
    else {
        return today;
    };
    match (year.parse(), month.parse(), day.parse()) {
        (Ok(year), Ok(month), Ok(day)) => {
            NaiveDate::from_ymd_opt(year, month, day).unwrap_or(today)
        }
        _ => today,
    }
}
