//! "Shop by Curtain Type" section: one linked tile per category.

use leptos::prelude::*;

use crate::view::{GridView, TileView};

#[component]
pub fn CategoryGrid(grid: GridView<TileView>) -> impl IntoView {
    let GridView { heading, subtitle, items } = grid;

    view! {
        <section class="home-section">
            <div class="container">
                <h2 class="section-title">{heading}</h2>
                <p class="section-subtitle">{subtitle}</p>
                <div class="curtain-type-grid">
                    <For
                        each=move || items.clone()
                        key=|tile: &TileView| tile.key.clone()
                        children=|tile: TileView| {
                            view! {
                                <a class="curtain-type-card" href=tile.href>
                                    <img
                                        class="category-image"
                                        src=tile.image
                                        alt=tile.alt
                                        width="400"
                                        height="400"
                                        loading="lazy"
                                    />
                                    <div class="category-name">{tile.label}</div>
                                </a>
                            }
                        }
                    />
                </div>
            </div>
        </section>
    }
}
