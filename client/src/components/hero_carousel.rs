//! Full-bleed hero carousel with autoplay, arrows and pagination bullets.
//!
//! Server render shows the first slide active. After hydration an interval
//! advances the active index every `autoplay_delay_ms`. Any visitor control
//! either restarts that delay from the chosen slide or stops autoplay, per
//! `CarouselOptions::after_interaction`.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::view::next_slide;
use crate::view::{AutoplayAfterInteraction, CarouselView, SlideControl, SlideView};

#[component]
pub fn HeroCarousel(carousel: CarouselView) -> impl IntoView {
    let CarouselView { slides, options } = carousel;
    let len = slides.len();
    let active = RwSignal::new(0_usize);
    let paused = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let autoplay = StoredValue::new(None::<IntervalHandle>);

    #[cfg(feature = "hydrate")]
    let restart_autoplay = move || {
        if let Some(handle) = autoplay.try_get_value().flatten() {
            handle.clear();
        }
        autoplay.set_value(None);
        if len < 2 || paused.get_untracked() {
            return;
        }
        let delay = std::time::Duration::from_millis(u64::from(options.autoplay_delay_ms));
        match set_interval_with_handle(move || active.update(|i| *i = next_slide(*i, len)), delay) {
            Ok(handle) => autoplay.set_value(Some(handle)),
            Err(e) => log::warn!("carousel autoplay unavailable: {e:?}"),
        }
    };

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || restart_autoplay());
        on_cleanup(move || {
            if let Some(handle) = autoplay.try_get_value().flatten() {
                handle.clear();
            }
        });
    }

    let on_control = move |control: SlideControl| {
        active.set(control.apply(active.get_untracked(), len, &options));
        if options.after_interaction() == AutoplayAfterInteraction::Stop {
            paused.set(true);
        }
        #[cfg(feature = "hydrate")]
        restart_autoplay();
    };

    let speed_style = format!("--slide-speed: {}ms", options.speed_ms);
    let indexed: Vec<(usize, SlideView)> = slides.into_iter().enumerate().collect();
    let bullets: Vec<usize> = (0..len).collect();

    view! {
        <div class="hero-banner">
            <div class="hero-carousel" style=speed_style aria-roledescription="carousel">
                <For
                    each=move || indexed.clone()
                    key=|entry: &(usize, SlideView)| entry.1.key.clone()
                    children=move |entry: (usize, SlideView)| {
                        let (index, slide) = entry;
                        view! {
                            <div
                                class="hero-slide"
                                class:hero-slide--active=move || active.get() == index
                                aria-hidden=move || if active.get() == index { "false" } else { "true" }
                            >
                                <img class="hero-slide__image" src=slide.image alt=slide.alt/>
                                <div class="container hero-section">
                                    <h2 class="tagline">{slide.tagline}</h2>
                                    <h1 class="hero-title">{slide.title}</h1>
                                    <a href=slide.cta_href class="shop-btn">{slide.cta_label}</a>
                                </div>
                            </div>
                        }
                    }
                />
                {(len > 1)
                    .then(|| {
                        view! {
                            <button
                                class="hero-arrow hero-arrow--prev"
                                aria-label="Previous slide"
                                on:click=move |_| on_control(SlideControl::Prev)
                            >
                                "‹"
                            </button>
                            <button
                                class="hero-arrow hero-arrow--next"
                                aria-label="Next slide"
                                on:click=move |_| on_control(SlideControl::Next)
                            >
                                "›"
                            </button>
                        }
                    })}
                <div class="hero-pagination">
                    <For
                        each=move || bullets.clone()
                        key=|index: &usize| *index
                        children=move |index: usize| {
                            view! {
                                <button
                                    class="hero-pagination__bullet"
                                    class:hero-pagination__bullet--active=move || active.get() == index
                                    aria-label=format!("Go to slide {}", index + 1)
                                    on:click=move |_| on_control(SlideControl::Goto(index))
                                ></button>
                            }
                        }
                    />
                </div>
            </div>
        </div>
    }
}
