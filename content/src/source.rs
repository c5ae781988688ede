//! Content sources: the boundary the homepage data is loaded through.
//!
//! DESIGN
//! ======
//! The server never hardcodes page data. It holds a `dyn ContentSource` and
//! asks it for the four sequences whenever props are (re)assembled. Sources
//! backed by a single document override [`ContentSource::document`] so one
//! assembly reads one consistent version of that document.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{ArrivalItem, BannerSlide, ContentError, CurtainType, HeaderData};

/// Supplies the record sequences the homepage is assembled from.
pub trait ContentSource {
    /// Header chrome passed through to the layout.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] if the source cannot be read.
    fn header_data(&self) -> Result<HeaderData, ContentError>;

    /// Hero carousel slides, in display order.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] if the source cannot be read.
    fn banner(&self) -> Result<Vec<BannerSlide>, ContentError>;

    /// Category tiles, in display order.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] if the source cannot be read.
    fn curtain_types(&self) -> Result<Vec<CurtainType>, ContentError>;

    /// New arrival cards, in display order.
    ///
    /// # Errors
    ///
    /// Returns a [`ContentError`] if the source cannot be read.
    fn new_arrivals(&self) -> Result<Vec<ArrivalItem>, ContentError>;

    /// Read all four sequences at once.
    ///
    /// # Errors
    ///
    /// Returns the first [`ContentError`] raised by any of the getters.
    fn document(&self) -> Result<ContentDocument, ContentError> {
        Ok(ContentDocument {
            header_data: self.header_data()?,
            banner: self.banner()?,
            curtain_types: self.curtain_types()?,
            new_arrivals: self.new_arrivals()?,
        })
    }

    /// Short human-readable label used in logs.
    fn describe(&self) -> String;
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// On-disk shape of a content document. Keys match the props record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContentDocument {
    pub header_data: HeaderData,
    #[serde(default)]
    pub banner: Vec<BannerSlide>,
    #[serde(default)]
    pub curtain_types: Vec<CurtainType>,
    #[serde(default)]
    pub new_arrivals: Vec<ArrivalItem>,
}

impl ContentSource for ContentDocument {
    fn header_data(&self) -> Result<HeaderData, ContentError> {
        Ok(self.header_data.clone())
    }

    fn banner(&self) -> Result<Vec<BannerSlide>, ContentError> {
        Ok(self.banner.clone())
    }

    fn curtain_types(&self) -> Result<Vec<CurtainType>, ContentError> {
        Ok(self.curtain_types.clone())
    }

    fn new_arrivals(&self) -> Result<Vec<ArrivalItem>, ContentError> {
        Ok(self.new_arrivals.clone())
    }

    fn document(&self) -> Result<ContentDocument, ContentError> {
        Ok(self.clone())
    }

    fn describe(&self) -> String {
        "in-memory document".to_owned()
    }
}

// =============================================================================
// FILE SOURCE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick a format from the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::UnsupportedFormat`] for any extension other
    /// than `yaml`, `yml` or `json` (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, ContentError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ContentError::UnsupportedFormat { path: path.display().to_string() }),
        }
    }

    /// Parse a document body in this format.
    ///
    /// # Errors
    ///
    /// Returns the parser's error wrapped in [`ContentError`].
    pub fn parse(self, raw: &str) -> Result<ContentDocument, ContentError> {
        match self {
            Self::Yaml => Ok(serde_yaml::from_str(raw)?),
            Self::Json => Ok(serde_json::from_str(raw)?),
        }
    }
}

/// Content document read from disk on every assembly.
#[derive(Clone, Debug)]
pub struct FileContentSource {
    path: PathBuf,
    format: DocumentFormat,
}

impl FileContentSource {
    /// # Errors
    ///
    /// Returns [`ContentError::UnsupportedFormat`] if the extension is not
    /// a known document format. The file itself is not touched until read.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self, ContentError> {
        let path = path.into();
        let format = DocumentFormat::from_path(&path)?;
        Ok(Self { path, format })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn format(&self) -> DocumentFormat {
        self.format
    }
}

impl ContentSource for FileContentSource {
    fn header_data(&self) -> Result<HeaderData, ContentError> {
        Ok(self.document()?.header_data)
    }

    fn banner(&self) -> Result<Vec<BannerSlide>, ContentError> {
        Ok(self.document()?.banner)
    }

    fn curtain_types(&self) -> Result<Vec<CurtainType>, ContentError> {
        Ok(self.document()?.curtain_types)
    }

    fn new_arrivals(&self) -> Result<Vec<ArrivalItem>, ContentError> {
        Ok(self.document()?.new_arrivals)
    }

    fn document(&self) -> Result<ContentDocument, ContentError> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|source| ContentError::Io { path: self.path.display().to_string(), source })?;
        self.format.parse(&raw)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
