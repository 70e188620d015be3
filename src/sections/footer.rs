use leptos::prelude::*;

use super::{
    MAPS_URL, OVERNIGHT_CAPACITY, PHONE_DISPLAY, PHONE_HREF, SITE_CITY, SITE_DESCRIPTION,
    SITE_NAME, SITE_STATE, SITE_TAGLINE, WHATSAPP_GREETING, whatsapp_url,
};
use crate::nav::{Navigation, SECTIONS};

#[component]
pub fn Footer() -> impl IntoView {
    let nav = expect_context::<Navigation>();
    let year = js_sys::Date::new_0().get_full_year();
    let capacity = format!("Up to {OVERNIGHT_CAPACITY} guests overnight");
    let address = format!("{SITE_CITY}, {SITE_STATE}");

    view! {
        <footer class="footer">
            <div class="container footer-grid">
                <div class="footer-about">
                    <div class="footer-brand">
                        <span class="footer-logo">"🏡"</span>
                        <span>
                            <h3 class="footer-title">{SITE_NAME}</h3>
                            <p class="footer-tagline">{SITE_TAGLINE}</p>
                        </span>
                    </div>
                    <p class="footer-description">{SITE_DESCRIPTION}</p>
                    <p class="footer-capacity">{capacity}</p>
                </div>

                <nav class="footer-links">
                    <h4 class="footer-heading">"Quick Links"</h4>
                    {SECTIONS.iter().map(|section| {
                        let id = section.id;
                        view! {
                            <button class="footer-link" on:click=move |_| nav.go(id)>
                                {section.label}
                            </button>
                        }
                    }).collect::<Vec<_>>()}
                </nav>

                <div class="footer-contact">
                    <h4 class="footer-heading">"Contact"</h4>
                    <a href=PHONE_HREF class="footer-link">{PHONE_DISPLAY}</a>
                    <a
                        href=whatsapp_url(WHATSAPP_GREETING)
                        target="_blank"
                        rel="noopener noreferrer"
                        class="footer-link"
                    >
                        "WhatsApp"
                    </a>
                    <a href=MAPS_URL target="_blank" rel="noopener noreferrer" class="footer-link">
                        {address}
                    </a>
                </div>
            </div>
            <div class="footer-bottom">
                <p class="footer-copyright">{format!("© {year} {SITE_NAME}. All rights reserved.")}</p>
            </div>
        </footer>
    }
}
