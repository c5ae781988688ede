//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor and
//! into Leptos renders as context. It holds the configured content source
//! and the last props record assembled from it. Readers take a cheap `Arc`
//! snapshot; a reload swaps the snapshot only after assembly succeeds, so a
//! broken content edit never replaces a working page.

use std::sync::{Arc, PoisonError, RwLock};

use content::{ContentError, ContentSource, HomeProps, assemble_home_props, lint};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    props: Arc<RwLock<Arc<HomeProps>>>,
    source: Arc<dyn ContentSource + Send + Sync>,
}

impl AppState {
    /// Assemble the initial props record from `source`.
    ///
    /// # Errors
    ///
    /// Returns the [`ContentError`] if the first assembly fails.
    pub fn new(source: Arc<dyn ContentSource + Send + Sync>) -> Result<Self, ContentError> {
        let props = assemble(source.as_ref())?;
        Ok(Self { props: Arc::new(RwLock::new(Arc::new(props))), source })
    }

    /// Current props record.
    #[must_use]
    pub fn snapshot(&self) -> Arc<HomeProps> {
        let guard = self.props.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Re-assemble props from the source and publish them.
    ///
    /// # Errors
    ///
    /// Returns the [`ContentError`] and leaves the current props in place.
    pub fn reload(&self) -> Result<Arc<HomeProps>, ContentError> {
        let fresh = Arc::new(assemble(self.source.as_ref())?);
        let mut guard = self.props.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::clone(&fresh);
        Ok(fresh)
    }

    #[must_use]
    pub fn source_label(&self) -> String {
        self.source.describe()
    }
}

/// Assemble and log the result, including non-fatal lint findings.
fn assemble(source: &(dyn ContentSource + Send + Sync)) -> Result<HomeProps, ContentError> {
    let label = source.describe();
    let props = assemble_home_props(source).inspect_err(|e| {
        tracing::error!(source = %label, error = %e, "homepage content rejected");
    })?;
    for warning in lint(&props) {
        tracing::warn!(source = %label, list = warning.list, key = %warning.key, "{warning}");
    }
    tracing::info!(
        source = %label,
        slides = props.banner.len(),
        curtain_types = props.curtain_types.len(),
        new_arrivals = props.new_arrivals.len(),
        "homepage props assembled"
    );
    Ok(props)
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
