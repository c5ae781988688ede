//! View model for the home page.
//!
//! DESIGN
//! ======
//! `home_view` is a pure function of the props record: no signals, no
//! browser access. Components call it on every render, so anything worth
//! asserting about the rendered regions (counts, order, keys, link targets,
//! blank-text fallbacks) is tested here without a DOM.

use content::{ArrivalItem, BannerSlide, CurtainType, HeaderData, HomeProps};

pub const CTA_LABEL: &str = "Shop Now";
pub const CTA_HREF: &str = "/products";
pub const FALLBACK_SLIDE_ALT: &str = "Banner Image";

pub const CATEGORY_HEADING: &str = "Shop by Curtain Type";
pub const CATEGORY_SUBTITLE: &str = "Find the perfect style for any room. From light and airy sheers to \
    room-darkening blackouts, we have a curtain for every need.";
pub const ARRIVALS_HEADING: &str = "New Arrivals";
pub const ARRIVALS_SUBTITLE: &str =
    "Explore our latest collection of curtains, designed to bring style and elegance to any room.";

// =============================================================================
// CAROUSEL
// =============================================================================

/// Hero carousel behaviour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselOptions {
    /// Slide transition duration.
    pub speed_ms: u32,
    /// Time each slide stays up before autoplay advances.
    pub autoplay_delay_ms: u32,
    /// Stop autoplay once the visitor picks a slide.
    pub disable_on_interaction: bool,
    /// Pagination bullets jump to their slide.
    pub clickable_pagination: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self { speed_ms: 600, autoplay_delay_ms: 3000, disable_on_interaction: false, clickable_pagination: true }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideView {
    pub key: String,
    pub image: String,
    pub alt: String,
    pub tagline: String,
    pub title: String,
    pub cta_label: &'static str,
    pub cta_href: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarouselView {
    pub slides: Vec<SlideView>,
    pub options: CarouselOptions,
}

/// Index after `current`, wrapping. Zero when there are no slides.
#[must_use]
pub fn next_slide(current: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (current + 1) % len }
}

/// Index before `current`, wrapping. Zero when there are no slides.
#[must_use]
pub fn prev_slide(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current % len + len - 1) % len
    }
}

/// A visitor action on the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideControl {
    Prev,
    Next,
    Goto(usize),
}

/// What autoplay does after a visitor moves the carousel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoplayAfterInteraction {
    /// Start the full delay again from the chosen slide.
    Restart,
    Stop,
}

impl CarouselOptions {
    #[must_use]
    pub fn after_interaction(self) -> AutoplayAfterInteraction {
        if self.disable_on_interaction { AutoplayAfterInteraction::Stop } else { AutoplayAfterInteraction::Restart }
    }
}

impl SlideControl {
    /// Slide index after applying this control to `current`.
    ///
    /// Out-of-range `Goto` targets and bullet clicks with non-clickable
    /// pagination leave the carousel where it is.
    #[must_use]
    pub fn apply(self, current: usize, len: usize, options: &CarouselOptions) -> usize {
        match self {
            Self::Prev => prev_slide(current, len),
            Self::Next => next_slide(current, len),
            Self::Goto(target) if options.clickable_pagination && target < len => target,
            Self::Goto(_) => current,
        }
    }
}

fn slide_view(index: usize, slide: &BannerSlide) -> SlideView {
    let key = if slide.id.is_blank() { format!("slide-{}", index + 1) } else { slide.id.to_string() };
    let alt = if slide.title.trim().is_empty() { FALLBACK_SLIDE_ALT.to_owned() } else { slide.title.clone() };
    SlideView {
        key,
        image: slide.url.clone(),
        alt,
        tagline: slide.tagline.clone(),
        title: slide.title.clone(),
        cta_label: CTA_LABEL,
        cta_href: CTA_HREF,
    }
}

// =============================================================================
// GRIDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileView {
    pub key: String,
    pub label: String,
    pub href: String,
    pub image: String,
    pub alt: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardView {
    pub key: String,
    pub title: String,
    pub description: String,
    pub href: String,
    pub image: String,
    pub alt: String,
}

/// A titled section holding one grid of links.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridView<T> {
    pub heading: &'static str,
    pub subtitle: &'static str,
    pub items: Vec<T>,
}

fn tile_view(curtain: &CurtainType) -> TileView {
    let key = if curtain.id.is_blank() { curtain.name.clone() } else { curtain.id.to_string() };
    TileView {
        key,
        label: curtain.name.clone(),
        href: curtain.href.clone(),
        image: curtain.image.clone(),
        alt: curtain.name.clone(),
    }
}

fn card_view(item: &ArrivalItem) -> CardView {
    let key = if item.id.is_blank() { item.title.clone() } else { item.id.to_string() };
    CardView {
        key,
        title: item.title.clone(),
        description: item.description.clone(),
        href: item.href.clone(),
        image: item.image.clone(),
        alt: item.title.clone(),
    }
}

// =============================================================================
// PAGE
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeView {
    pub header: HeaderData,
    pub carousel: CarouselView,
    pub categories: GridView<TileView>,
    pub arrivals: GridView<CardView>,
}

/// Map a props record into the three page regions, preserving input order.
#[must_use]
pub fn home_view(props: &HomeProps) -> HomeView {
    HomeView {
        header: props.header_data.clone(),
        carousel: CarouselView {
            slides: props.banner.iter().enumerate().map(|(i, s)| slide_view(i, s)).collect(),
            options: CarouselOptions::default(),
        },
        categories: GridView {
            heading: CATEGORY_HEADING,
            subtitle: CATEGORY_SUBTITLE,
            items: props.curtain_types.iter().map(tile_view).collect(),
        },
        arrivals: GridView {
            heading: ARRIVALS_HEADING,
            subtitle: ARRIVALS_SUBTITLE,
            items: props.new_arrivals.iter().map(card_view).collect(),
        },
    }
}

#[cfg(test)]
#[path = "view_test.rs"]
mod tests;
