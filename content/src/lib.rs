//! Shared content model for the storefront homepage.
//!
//! This crate owns the props record handed from the server to the Leptos
//! view, the [`ContentSource`] boundary the server loads it through, and the
//! assembler that validates list keys before anything is rendered. Both
//! `server` and `client` depend on it so the JSON shape stays in one place.

pub mod assemble;
pub mod catalog;
pub mod source;
pub mod validate;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use assemble::assemble_home_props;
pub use catalog::StaticContentSource;
pub use source::{ContentDocument, ContentSource, FileContentSource};
pub use validate::{ContentWarning, lint};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while loading or assembling homepage content.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// The content document could not be read from disk.
    #[error("failed to read content document {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The content document extension is not one we know how to parse.
    #[error("unsupported content document format: {path} (expected .yaml, .yml or .json)")]
    UnsupportedFormat { path: String },

    /// A YAML content document failed to parse.
    #[error("invalid YAML content: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON content document failed to parse.
    #[error("invalid JSON content: {0}")]
    Json(#[from] serde_json::Error),

    /// Two entries in the same list share a key that must be unique.
    #[error("duplicate {field} '{key}' in {list}")]
    DuplicateKey { list: &'static str, field: &'static str, key: String },
}

// =============================================================================
// ENTRY ID
// =============================================================================

/// Stable list key for an entry, independent of its display text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Derive an id from a business key: lowercase ASCII alphanumerics with
    /// every other run of characters collapsed to a single `-`.
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        let mut slug = String::with_capacity(key.len());
        let mut pending_dash = false;
        for ch in key.chars() {
            if ch.is_ascii_alphanumeric() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(ch.to_ascii_lowercase());
            } else {
                pending_dash = true;
            }
        }
        Self(slug)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// RECORDS
// =============================================================================

/// One rotating panel of the hero carousel.
///
/// `tagline` and `title` default to `""` and render blank when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BannerSlide {
    #[serde(default)]
    pub id: EntryId,
    pub url: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub title: String,
}

impl BannerSlide {
    /// A slide with only its image set.
    #[must_use]
    pub fn image(url: impl Into<String>) -> Self {
        Self { url: url.into(), ..Self::default() }
    }
}

/// A category tile in the "Shop by Curtain Type" grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CurtainType {
    #[serde(default)]
    pub id: EntryId,
    pub name: String,
    pub image: String,
    pub href: String,
}

/// A product card in the "New Arrivals" grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArrivalItem {
    #[serde(default)]
    pub id: EntryId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
    pub href: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavLink {
    pub text: String,
    pub url: String,
}

/// Header chrome data, passed through to the layout untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeaderData {
    pub logo: String,
    #[serde(default)]
    pub nav_links: Vec<NavLink>,
}

// =============================================================================
// PROPS RECORD
// =============================================================================

/// Everything the home page renders, computed once before render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeProps {
    pub header_data: HeaderData,
    #[serde(default)]
    pub banner: Vec<BannerSlide>,
    #[serde(default)]
    pub curtain_types: Vec<CurtainType>,
    #[serde(default)]
    pub new_arrivals: Vec<ArrivalItem>,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
