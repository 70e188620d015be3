use std::time::Duration;

use leptos::prelude::*;

use super::SITE_NAME;

/// How long the splash stays up while the first paint settles.
const SPLASH_MILLIS: u64 = 1500;

/// Full-screen splash overlaid on the page at mount. The page itself renders
/// underneath from the start, so the section anchors exist before the
/// observers attach.
#[component]
pub fn Loader() -> impl IntoView {
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        set_timeout(
            move || set_loading.set(false),
            Duration::from_millis(SPLASH_MILLIS),
        );
    });

    view! {
        <Show when=move || loading.get()>
            <div class="loader-overlay">
                <span class="loader-house">"🏡"</span>
                <h2 class="loader-title">{SITE_NAME}</h2>
                <p class="loader-text">"Loading your premium experience..."</p>
            </div>
        </Show>
    }
}
