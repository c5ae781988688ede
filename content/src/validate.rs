//! Key uniqueness checks and non-fatal content lints.
//!
//! Duplicate list keys are rejected outright: two tiles sharing a key would
//! be reconciled as one node by the view. Everything else a content editor
//! can get wrong (blank images, odd links) only degrades the page visually,
//! so it is reported as a [`ContentWarning`] instead.

use std::collections::HashSet;
use std::fmt;

use crate::{ContentError, HomeProps};

/// Fail on the first key that appears twice in `keys`.
fn ensure_unique<'a>(
    list: &'static str,
    field: &'static str,
    keys: impl IntoIterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(ContentError::DuplicateKey { list, field, key: key.to_owned() });
        }
    }
    Ok(())
}

/// Reject props whose list keys collide.
///
/// Checked: slide ids, curtain type ids and names, arrival ids and titles.
///
/// # Errors
///
/// Returns [`ContentError::DuplicateKey`] naming the first repeated key.
pub fn check_keys(props: &HomeProps) -> Result<(), ContentError> {
    ensure_unique("banner", "id", props.banner.iter().map(|s| s.id.as_str()))?;
    ensure_unique("curtainTypes", "id", props.curtain_types.iter().map(|c| c.id.as_str()))?;
    ensure_unique("curtainTypes", "name", props.curtain_types.iter().map(|c| c.name.as_str()))?;
    ensure_unique("newArrivals", "id", props.new_arrivals.iter().map(|a| a.id.as_str()))?;
    ensure_unique("newArrivals", "title", props.new_arrivals.iter().map(|a| a.title.as_str()))?;
    Ok(())
}

// =============================================================================
// LINTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarningKind {
    BlankImage,
    BlankHref,
    ExternalHref,
}

/// A non-fatal problem with one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentWarning {
    pub list: &'static str,
    pub key: String,
    pub kind: WarningKind,
}

impl fmt::Display for ContentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            WarningKind::BlankImage => "has no image url",
            WarningKind::BlankHref => "has no link target",
            WarningKind::ExternalHref => "links outside the site",
        };
        write!(f, "{} entry '{}' {what}", self.list, self.key)
    }
}

fn lint_link(out: &mut Vec<ContentWarning>, list: &'static str, key: &str, image: &str, href: &str) {
    if image.trim().is_empty() {
        out.push(ContentWarning { list, key: key.to_owned(), kind: WarningKind::BlankImage });
    }
    if href.trim().is_empty() {
        out.push(ContentWarning { list, key: key.to_owned(), kind: WarningKind::BlankHref });
    } else if !href.starts_with('/') {
        out.push(ContentWarning { list, key: key.to_owned(), kind: WarningKind::ExternalHref });
    }
}

/// Collect visual-defect warnings, in list order.
#[must_use]
pub fn lint(props: &HomeProps) -> Vec<ContentWarning> {
    let mut out = Vec::new();
    for slide in &props.banner {
        if slide.url.trim().is_empty() {
            out.push(ContentWarning { list: "banner", key: slide.id.to_string(), kind: WarningKind::BlankImage });
        }
    }
    for curtain in &props.curtain_types {
        lint_link(&mut out, "curtainTypes", &curtain.name, &curtain.image, &curtain.href);
    }
    for item in &props.new_arrivals {
        lint_link(&mut out, "newArrivals", &item.title, &item.image, &item.href);
    }
    out
}

#[cfg(test)]
#[path = "validate_test.rs"]
mod tests;
