//! Admin area page.
//!
//! Access control is enforced by the backend; this page only renders the
//! shell the admin tooling mounts into.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

/// Admin area page.
#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <Navbar/>
            <main>
                <h1>"Admin"</h1>
                <p>"Site administration."</p>
            </main>
        </div>
    }
}
