//! Storefront home page: hero carousel, category grid, new arrivals.
//!
//! DATA FLOW
//! =========
//! The server assembles `HomeProps` once and provides it as context for each
//! render. The page wraps it in a serialized `Resource`, so the browser
//! hydrates from the copy embedded in the HTML instead of refetching.

use content::HomeProps;
use leptos::prelude::*;

use crate::components::{
    arrivals_grid::ArrivalsGrid, category_grid::CategoryGrid, hero_carousel::HeroCarousel, layout::Layout,
};
use crate::view::home_view;

pub(crate) const UNAVAILABLE_MESSAGE: &str = "Homepage content is unavailable.";

/// Resolve the props record handed down by the server, if any.
pub(crate) fn resolve_props(provided: Option<HomeProps>) -> Result<HomeProps, String> {
    provided.ok_or_else(|| UNAVAILABLE_MESSAGE.to_owned())
}

#[component]
pub fn HomePage() -> impl IntoView {
    let provided = use_context::<HomeProps>();
    let props = Resource::new(
        || (),
        move |()| {
            let provided = provided.clone();
            async move { resolve_props(provided) }
        },
    );

    view! {
        <Suspense fallback=move || view! { <p class="home-loading">"Loading..."</p> }>
            {move || {
                props
                    .get()
                    .map(|result| match result {
                        Ok(props) => view! { <HomeContent props/> }.into_any(),
                        Err(message) => view! { <p class="home-error">{message}</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}

/// The three page regions inside the site layout.
#[component]
pub fn HomeContent(props: HomeProps) -> impl IntoView {
    let view_model = home_view(&props);

    view! {
        <section class="home-page">
            <Layout header=view_model.header>
                <HeroCarousel carousel=view_model.carousel/>
                <CategoryGrid grid=view_model.categories/>
                <ArrivalsGrid grid=view_model.arrivals/>
            </Layout>
        </section>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
