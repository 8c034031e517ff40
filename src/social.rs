//! Resolves the social-sharing metadata for a page from its fallback
//! chains: sidecar overrides first, then content-derived values, then
//! literal defaults. Image paths come out absolutized against the
//! configured base URL.

use crate::config::SiteConfig;
use crate::sidecar::SidecarMeta;

const DEFAULT_CARD_TYPE: &str = "summary_large_image";

/// Which kind of page the tags are being resolved for. The OpenGraph
/// object type defaults differently for the two kinds; everything else
/// resolves identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    MainPage,
    Article,
}

impl PageKind {
    const fn default_object_type(self) -> &'static str {
        match self {
            PageKind::MainPage => "website",
            PageKind::Article => "article",
        }
    }
}

/// Fully resolved social-sharing metadata for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SocialTags {
    pub title: String,
    pub description: String,
    pub object_type: String,
    pub card_type: String,
    pub site_name: String,
    pub url: String,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub twitter_image: Option<String>,
}

/// Resolves the tags for one page.
///
/// Fallback chains:
/// * title: sidecar `title` → `fallback_title`
/// * description: sidecar `description` → `fallback_description`
/// * image: `og.image` → `thumbnail.image`; alt: `og.image_alt` →
///   `thumbnail.alt`
/// * twitter image: `twitter.image` → the resolved OpenGraph image
/// * `og:type`: `og.type` → per-kind default; `twitter:card`:
///   `twitter.card` → `"summary_large_image"`
/// * `og:site_name`: `og.site_name` → resolved title
pub fn resolve(
    meta: &SidecarMeta,
    fallback_title: &str,
    fallback_description: &str,
    config: &SiteConfig,
    kind: PageKind,
) -> SocialTags {
    let title = meta
        .title
        .clone()
        .unwrap_or_else(|| fallback_title.to_owned());
    let description = meta
        .description
        .clone()
        .unwrap_or_else(|| fallback_description.to_owned());
    let site_name = meta.og.site_name.clone().unwrap_or_else(|| title.clone());
    let image = meta
        .og
        .image
        .clone()
        .or_else(|| meta.thumbnail.image.clone())
        .map(|image| config.absolutize(&image));
    let image_alt = meta
        .og
        .image_alt
        .clone()
        .or_else(|| meta.thumbnail.alt.clone());
    let twitter_image = meta
        .twitter
        .image
        .clone()
        .map(|image| config.absolutize(&image))
        .or_else(|| image.clone());

    SocialTags {
        object_type: meta
            .og
            .object_type
            .clone()
            .unwrap_or_else(|| kind.default_object_type().to_owned()),
        card_type: meta
            .twitter
            .card
            .clone()
            .unwrap_or_else(|| DEFAULT_CARD_TYPE.to_owned()),
        url: meta
            .og
            .url
            .clone()
            .unwrap_or_else(|| config.absolutize("")),
        title,
        description,
        site_name,
        image,
        image_alt,
        twitter_image,
    }
}

impl SocialTags {
    /// The `og:image` meta-tag block for a document page, or the empty
    /// string when no image resolved.
    pub fn og_image_block(&self) -> String {
        let Some(image) = &self.image else {
            return String::new();
        };
        let mut block = format!(
            "\n    <meta property=\"og:image\" content=\"{}\">",
            image
        );
        if let Some(alt) = &self.image_alt {
            block.push_str(&format!(
                "\n    <meta property=\"og:image:alt\" content=\"{}\">",
                alt
            ));
        }
        block
    }

    /// The `twitter:image` meta-tag block for a document page, or the
    /// empty string when no image resolved.
    pub fn twitter_image_block(&self) -> String {
        match &self.twitter_image {
            Some(image) => format!(
                "\n    <meta name=\"twitter:image\" content=\"{}\">",
                image
            ),
            None => String::new(),
        }
    }

    /// The full head meta-tag block for the main page.
    pub fn head_block(&self) -> String {
        let mut tags = format!(
            concat!(
                "\n    <meta charset=\"UTF-8\">",
                "\n    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">",
                "\n    <meta name=\"description\" content=\"{description}\">",
                "\n",
                "\n    <!-- OpenGraph metadata -->",
                "\n    <meta property=\"og:title\" content=\"{title}\">",
                "\n    <meta property=\"og:description\" content=\"{description}\">",
                "\n    <meta property=\"og:type\" content=\"{object_type}\">",
                "\n    <meta property=\"og:url\" content=\"{url}\">",
                "\n    <meta property=\"og:site_name\" content=\"{site_name}\">",
            ),
            description = self.description,
            title = self.title,
            object_type = self.object_type,
            url = self.url,
            site_name = self.site_name,
        );
        tags.push_str(&self.og_image_block());
        tags.push_str(&format!(
            concat!(
                "\n",
                "\n    <!-- Twitter Card metadata -->",
                "\n    <meta name=\"twitter:card\" content=\"{card_type}\">",
                "\n    <meta name=\"twitter:title\" content=\"{title}\">",
                "\n    <meta name=\"twitter:description\" content=\"{description}\">",
            ),
            card_type = self.card_type,
            title = self.title,
            description = self.description,
        ));
        tags.push_str(&self.twitter_image_block());
        tags
    }
}
