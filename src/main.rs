// Khushi Farm landing page — Leptos 0.8 CSR

mod nav;
mod sections;

use leptos::prelude::*;
use nav::provide_navigation;
use sections::{
    Amenities, BackToTop, Contact, Footer, Gallery, Hero, Loader, NavBar, Packages, Reviews,
    StickyActions,
};

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_navigation();

    view! {
        <Loader />
        <NavBar />
        <main>
            <Hero />
            <Packages />
            <Amenities />
            <Gallery />
            <Reviews />
            <Contact />
        </main>
        <Footer />
        <StickyActions />
        <BackToTop />
    }
}
