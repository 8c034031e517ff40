//! The library code for the `weft` static site generator. The architecture
//! can be generally broken down into three distinct steps:
//!
//! 1. Scanning the content tree for markdown documents ([`crate::scan`])
//! 2. Deriving per-document data: title and summary ([`crate::meta`]),
//!    sidecar overrides ([`crate::sidecar`]), social-sharing tags
//!    ([`crate::social`]), and the table of contents ([`crate::toc`])
//! 3. Rendering pages from templates and writing them to disk
//!    ([`crate::post`], [`crate::index`], [`crate::mainpage`])
//!
//! The third step produces three kinds of output: one HTML page per
//! document (mirroring the content tree), a chronological index page for
//! the whole tree, and the site's main landing page, which embeds a
//! curated list of items and a short digest of the most recent posts.
//!
//! Anchors deserve a note: the table of contents is built from the
//! markdown source, while heading `id` attributes are injected into the
//! rendered HTML in a second, independent pass. Both passes derive their
//! anchors through [`crate::slug::slugify`], which is what keeps the two
//! in agreement; see that module before touching either pass.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod config;
pub mod index;
pub mod mainpage;
pub mod markdown;
pub mod meta;
pub mod post;
pub mod scan;
pub mod sidecar;
pub mod slug;
pub mod social;
pub mod template;
pub mod toc;
