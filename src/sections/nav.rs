use leptos::prelude::*;

use super::{PHONE_DISPLAY, PHONE_HREF, SITE_NAME, SITE_TAGLINE, WHATSAPP_GREETING, whatsapp_url};
use crate::nav::{Navigation, SECTIONS};

/// Fixed header: desktop link row with the active section highlighted, call
/// and WhatsApp CTAs, and the mobile drawer. All state comes from the
/// navigation coordinator; this component only renders snapshots and issues
/// commands.
#[component]
pub fn NavBar() -> impl IntoView {
    let nav = expect_context::<Navigation>();

    view! {
        <header class=move || {
            if nav.state().is_scrolled { "navbar navbar-scrolled" } else { "navbar" }
        }>
            <div class="navbar-inner">
                <a href="#home" class="navbar-brand" on:click=move |ev| {
                    ev.prevent_default();
                    nav.go("home");
                }>
                    <span class="navbar-logo">"🏡"</span>
                    <span class="navbar-brand-text">
                        <span class="navbar-title">{SITE_NAME}</span>
                        <span class="navbar-subtitle">{SITE_TAGLINE}</span>
                    </span>
                </a>

                <nav class="navbar-links">
                    {SECTIONS.iter().map(|section| {
                        let id = section.id;
                        view! {
                            <a
                                href=section.href()
                                class=move || {
                                    if nav.state().active_section == id {
                                        "navbar-link active"
                                    } else {
                                        "navbar-link"
                                    }
                                }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    nav.go(id);
                                }
                            >
                                {section.label}
                            </a>
                        }
                    }).collect::<Vec<_>>()}
                </nav>

                <div class="navbar-cta">
                    <a href=PHONE_HREF class="btn btn-outline btn-sm">"Call"</a>
                    <a
                        href=whatsapp_url(WHATSAPP_GREETING)
                        target="_blank"
                        rel="noopener noreferrer"
                        class="btn btn-primary btn-sm"
                    >
                        "WhatsApp"
                    </a>
                </div>

                <button
                    class="navbar-burger"
                    aria-label="Open menu"
                    on:click=move |_| nav.toggle_menu()
                >
                    "☰"
                </button>
            </div>

            <Show when=move || nav.state().is_menu_open>
                <div class="navbar-drawer">
                    <div class="drawer-header">
                        <span class="drawer-title">{SITE_NAME}</span>
                        <button
                            class="drawer-close"
                            aria-label="Close menu"
                            on:click=move |_| nav.close_menu()
                        >
                            "✕"
                        </button>
                    </div>
                    <nav class="drawer-links">
                        {SECTIONS.iter().map(|section| {
                            let id = section.id;
                            view! {
                                <button
                                    class=move || {
                                        if nav.state().active_section == id {
                                            "drawer-link active"
                                        } else {
                                            "drawer-link"
                                        }
                                    }
                                    on:click=move |_| nav.go(id)
                                >
                                    {section.label}
                                </button>
                            }
                        }).collect::<Vec<_>>()}
                    </nav>
                    <div class="drawer-cta">
                        <a href=PHONE_HREF class="btn btn-outline">
                            "Call " {PHONE_DISPLAY}
                        </a>
                        <a
                            href=whatsapp_url(WHATSAPP_GREETING)
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-primary"
                        >
                            "WhatsApp Us"
                        </a>
                    </div>
                </div>
            </Show>
        </header>
    }
}
