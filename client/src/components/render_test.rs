//! Server-render checks on the markup each region produces.
//!
//! Run with `cargo test -p client --features ssr`.

use content::{BannerSlide, CurtainType, EntryId, HeaderData, HomeProps, NavLink, StaticContentSource, assemble_home_props};
use leptos::prelude::*;

use super::arrivals_grid::ArrivalsGrid;
use super::category_grid::CategoryGrid;
use super::hero_carousel::HeroCarousel;
use super::layout::Layout;
use crate::view::home_view;

fn static_props() -> HomeProps {
    assemble_home_props(&StaticContentSource::new()).unwrap()
}

#[test]
fn single_curtain_type_renders_one_linked_tile() {
    let props = HomeProps {
        curtain_types: vec![CurtainType {
            id: EntryId::new("sheers"),
            name: "Sheer Curtains".into(),
            image: "X".into(),
            href: "/Curtains/sheers".into(),
        }],
        ..HomeProps::default()
    };
    let grid = home_view(&props).categories;
    let html = Owner::new().with(|| view! { <CategoryGrid grid/> }.to_html());

    assert_eq!(html.matches("class=\"curtain-type-card\"").count(), 1);
    let link = html.find("href=\"/Curtains/sheers\"").unwrap();
    let label = html.find("Sheer Curtains</div>").unwrap();
    assert!(link < label);
    assert!(html.contains("Shop by Curtain Type"));
}

#[test]
fn category_tiles_follow_input_order() {
    let grid = home_view(&static_props()).categories;
    let html = Owner::new().with(|| view! { <CategoryGrid grid/> }.to_html());

    assert_eq!(html.matches("class=\"curtain-type-card\"").count(), 4);
    let positions: Vec<usize> = ["/Curtains/sheers", "/Curtains/blackout", "/Curtains/roomdark", "/Curtains/thermalblackout"]
        .iter()
        .map(|href| html.find(&format!("href=\"{href}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn empty_banner_renders_carousel_without_slides() {
    let carousel = home_view(&HomeProps::default()).carousel;
    let html = Owner::new().with(|| view! { <HeroCarousel carousel/> }.to_html());

    assert!(html.contains("hero-banner"));
    assert_eq!(html.matches("hero-slide__image").count(), 0);
    assert_eq!(html.matches("hero-pagination__bullet").count(), 0);
    assert!(!html.contains("hero-arrow"));
}

#[test]
fn banner_renders_every_slide_in_order() {
    let carousel = home_view(&static_props()).carousel;
    let html = Owner::new().with(|| view! { <HeroCarousel carousel/> }.to_html());

    assert_eq!(html.matches("hero-slide__image").count(), 4);
    let first = html.find("Discover Our New Collection").unwrap();
    let last = html.find("Velvet Room Darkening").unwrap();
    assert!(first < last);
    assert!(html.contains("Previous slide"));
    assert!(html.contains("Next slide"));
}

#[test]
fn url_only_slide_renders_with_fallback_alt() {
    let props = HomeProps {
        banner: vec![BannerSlide::image("https://img.test/a.jpg")],
        ..HomeProps::default()
    };
    let carousel = home_view(&props).carousel;
    let html = Owner::new().with(|| view! { <HeroCarousel carousel/> }.to_html());

    assert_eq!(html.matches("hero-slide__image").count(), 1);
    assert!(html.contains("src=\"https://img.test/a.jpg\""));
    assert!(html.contains("alt=\"Banner Image\""));
    assert!(html.contains("class=\"tagline\""));
    assert!(html.contains("Shop Now"));
    assert!(html.contains("href=\"/products\""));
}

#[test]
fn empty_arrivals_keep_section_heading() {
    let grid = home_view(&HomeProps::default()).arrivals;
    let html = Owner::new().with(|| view! { <ArrivalsGrid grid/> }.to_html());

    assert!(html.contains("New Arrivals"));
    assert_eq!(html.matches("arrival-card").count(), 0);
}

#[test]
fn arrival_cards_link_to_products() {
    let grid = home_view(&static_props()).arrivals;
    let html = Owner::new().with(|| view! { <ArrivalsGrid grid/> }.to_html());

    assert_eq!(html.matches("class=\"arrival-card\"").count(), 2);
    assert!(html.contains("href=\"/products/sheer\""));
    assert!(html.contains("For privacy and peaceful sleep"));
}

#[test]
fn layout_renders_header_links_and_children() {
    let header = HeaderData {
        logo: "/logo.png".into(),
        nav_links: vec![
            NavLink { text: "Curtains".into(), url: "/curtains".into() },
            NavLink { text: "About Us".into(), url: "/about".into() },
        ],
    };
    let html = Owner::new().with(|| {
        view! {
            <Layout header>
                <p class="page-body">"body"</p>
            </Layout>
        }
        .to_html()
    });

    assert!(html.contains("src=\"/logo.png\""));
    let curtains = html.find("href=\"/curtains\"").unwrap();
    let about = html.find("href=\"/about\"").unwrap();
    assert!(curtains < about);
    assert!(html.contains("page-body"));
}
