use leptos::prelude::*;

use super::{
    SITE_CITY, SITE_DESCRIPTION, SITE_NAME, SITE_STATE, SITE_TAGLINE, WHATSAPP_GREETING,
    whatsapp_url,
};
use crate::nav::Navigation;

#[component]
pub fn Hero() -> impl IntoView {
    let nav = expect_context::<Navigation>();
    let location = format!("{SITE_CITY}, {SITE_STATE}");

    view! {
        <section id="home" class="hero">
            <div class="hero-backdrop">
                <img
                    src="assets/farmhouse-hero.jpg"
                    alt="Khushi Farm — farmhouse with swimming pool and lush gardens"
                    class="hero-image"
                />
                <div class="hero-scrim"></div>
            </div>

            <div class="hero-content container">
                <div class="hero-badge">
                    <span class="hero-badge-star">"★"</span>
                    {SITE_TAGLINE}
                </div>
                <h1 class="hero-title">
                    {SITE_NAME}
                    <br />
                    <span class="hero-location">{location}</span>
                </h1>
                <p class="hero-description">{SITE_DESCRIPTION}</p>
                <div class="hero-actions">
                    <button class="btn btn-hero" on:click=move |_| nav.go("contact")>
                        "Book Your Stay"
                    </button>
                    <a
                        href=whatsapp_url(WHATSAPP_GREETING)
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-hero-ghost"
                    >
                        "WhatsApp Us"
                    </a>
                </div>
            </div>
        </section>
    }
}
