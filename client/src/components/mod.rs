//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the home page regions from the plain view model in
//! `crate::view`. They hold no content of their own.

pub mod arrivals_grid;
pub mod category_grid;
pub mod hero_carousel;
pub mod layout;

#[cfg(all(test, feature = "ssr"))]
#[path = "render_test.rs"]
mod render_test;
