use leptos::prelude::*;

use super::{MAPS_URL, PHONE_HREF, WHATSAPP_GREETING, whatsapp_url};

/// Always-reachable contact actions: a sticky bottom bar on mobile, floating
/// buttons on desktop. Pure links, no coordinator involvement.
#[component]
pub fn StickyActions() -> impl IntoView {
    view! {
        <div class="sticky-bar">
            <a href=PHONE_HREF class="btn btn-outline">"Call"</a>
            <a
                href=whatsapp_url(WHATSAPP_GREETING)
                target="_blank"
                rel="noopener noreferrer"
                class="btn btn-whatsapp"
            >
                "WhatsApp"
            </a>
            <a
                href=MAPS_URL
                target="_blank"
                rel="noopener noreferrer"
                class="btn btn-outline"
                aria-label="Open in Google Maps"
            >
                "Map"
            </a>
        </div>

        <div class="floating-actions">
            <a
                href=whatsapp_url(WHATSAPP_GREETING)
                target="_blank"
                rel="noopener noreferrer"
                class="floating-btn floating-whatsapp"
                aria-label="Contact via WhatsApp"
            >
                "💬"
            </a>
            <a href=PHONE_HREF class="floating-btn floating-call" aria-label="Call us">
                "📞"
            </a>
        </div>
    }
}
