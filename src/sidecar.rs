//! Loads the optional sidecar metadata file that can accompany any
//! document (and the main-page template). The sidecar carries structured
//! overrides that aren't expressible in the document body: social-sharing
//! fields and a listing thumbnail.

use log::warn;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Suffix distinguishing a sidecar file from the document it describes.
pub const SIDECAR_EXTENSION: &str = "meta.yaml";

/// The parsed sidecar record. Every field is optional; an absent file is
/// equivalent to a record with nothing set. Unrecognized keys are
/// ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct SidecarMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub og: OpenGraph,
    #[serde(default)]
    pub twitter: Twitter,
    #[serde(default)]
    pub thumbnail: Thumbnail,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub object_type: Option<String>,
    pub url: Option<String>,
    pub site_name: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Twitter {
    pub card: Option<String>,
    pub image: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct Thumbnail {
    pub image: Option<String>,
    pub alt: Option<String>,
}

/// Derives the sidecar path for a document by swapping its final
/// extension for [`SIDECAR_EXTENSION`] (`foo.md` → `foo.meta.yaml`,
/// `index.html.template` → `index.html.meta.yaml`).
pub fn sidecar_path(document_path: &Path) -> PathBuf {
    document_path.with_extension(SIDECAR_EXTENSION)
}

/// Loads the sidecar record for a document. A missing sidecar is the
/// common case and yields an empty record with no logging; a sidecar
/// that exists but cannot be read or parsed also yields an empty record,
/// with a warning.
pub fn load(document_path: &Path) -> SidecarMeta {
    let path = sidecar_path(document_path);
    let contents = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return SidecarMeta::default();
        }
        Err(err) => {
            warn!("could not read metadata from {}: {}", path.display(), err);
            return SidecarMeta::default();
        }
    };

    // An empty file parses as YAML null, hence the Option wrapper.
    match serde_yaml::from_str::<Option<SidecarMeta>>(&contents) {
        Ok(meta) => meta.unwrap_or_default(),
        Err(err) => {
            warn!("could not parse metadata from {}: {}", path.display(), err);
            SidecarMeta::default()
        }
    }
}
