//! Landing page with the navbar and the sections its links anchor to.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Landing page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Navbar/>
            <main>
                <section id="features" class="home-page__section">
                    <h2>"Features"</h2>
                    <p>"What the site offers."</p>
                </section>
                <section id="about" class="home-page__section">
                    <h2>"About"</h2>
                    <p>"Who we are."</p>
                </section>
                <section id="contact" class="home-page__section">
                    <h2>"Contact"</h2>
                    <p>"How to reach us."</p>
                </section>
            </main>
        </div>
    }
}
