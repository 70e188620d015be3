use leptos::prelude::*;

use crate::nav::Navigation;

/// Floating "back to top" button, shown only once the page is scrolled past
/// the navbar threshold.
#[component]
pub fn BackToTop() -> impl IntoView {
    let nav = expect_context::<Navigation>();

    view! {
        <Show when=move || nav.state().is_scrolled>
            <button
                class="back-to-top"
                aria-label="Back to top"
                on:click=move |_| nav.go("home")
            >
                "↑"
            </button>
        </Show>
    }
}
