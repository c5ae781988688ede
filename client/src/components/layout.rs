//! Page chrome: site header with logo and navigation, and footer.

use content::{HeaderData, NavLink};
use leptos::prelude::*;

/// Wraps page content in the shared header and footer.
///
/// `header` is rendered as given; links are not checked here.
#[component]
pub fn Layout(header: HeaderData, children: Children) -> impl IntoView {
    let HeaderData { logo, nav_links } = header;

    view! {
        <div class="site">
            <header class="site-header">
                <div class="container site-header__inner">
                    <a class="site-header__logo" href="/">
                        <img src=logo alt="Home"/>
                    </a>
                    <nav class="site-nav" aria-label="Main">
                        <For
                            each=move || nav_links.clone()
                            key=|link: &NavLink| link.url.clone()
                            children=|link: NavLink| view! { <a class="site-nav__link" href=link.url>{link.text}</a> }
                        />
                    </nav>
                </div>
            </header>
            <main class="site-main">{children()}</main>
            <footer class="site-footer">
                <div class="container">"© Curtains"</div>
            </footer>
        </div>
    }
}
