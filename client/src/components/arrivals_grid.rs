//! "New Arrivals" section: one linked product card per item.
//!
//! The heading and subtitle render even when there are no cards.

use leptos::prelude::*;

use crate::view::{CardView, GridView};

#[component]
pub fn ArrivalsGrid(grid: GridView<CardView>) -> impl IntoView {
    let GridView { heading, subtitle, items } = grid;

    view! {
        <section class="home-section home-section--muted">
            <div class="container">
                <h2 class="section-title">{heading}</h2>
                <p class="section-subtitle">{subtitle}</p>
                <div class="new-arrivals-grid">
                    <For
                        each=move || items.clone()
                        key=|card: &CardView| card.key.clone()
                        children=|card: CardView| {
                            view! {
                                <a class="arrival-card" href=card.href>
                                    <div class="arrival-image-wrapper">
                                        <img class="arrival-image" src=card.image alt=card.alt loading="lazy"/>
                                    </div>
                                    <div class="arrival-info">
                                        <h3 class="arrival-title">{card.title}</h3>
                                        <p class="arrival-desc">{card.description}</p>
                                    </div>
                                </a>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
