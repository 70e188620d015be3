use leptos::prelude::*;

use crate::nav::Navigation;

/// A bookable experience.
struct Package {
    title: &'static str,
    description: &'static str,
    price: &'static str,
    original_price: Option<&'static str>,
    duration: &'static str,
    capacity: &'static str,
    timing: &'static str,
    features: &'static [&'static str],
    image: &'static str,
    image_alt: &'static str,
    popular: bool,
}

const PACKAGES: &[Package] = &[
    Package {
        title: "Overnight Stay",
        description: "The full farmhouse to yourselves — evening to next morning, pool lit up, bonfire on request.",
        price: "₹14,999",
        original_price: Some("₹17,999"),
        duration: "4 PM – 11 AM",
        capacity: "Up to 12 guests",
        timing: "Check-in 4 PM",
        features: &[
            "3 air-conditioned bedrooms",
            "Private swimming pool",
            "Dinner & breakfast included",
            "Bonfire with music setup",
        ],
        image: "assets/farmhouse-hero.jpg",
        image_alt: "Farmhouse front lawn at dusk",
        popular: true,
    },
    Package {
        title: "Day Picnic",
        description: "A full day of pool, lawn games and open-air dining for families and friend groups.",
        price: "₹899",
        original_price: Some("₹1,099"),
        duration: "9 AM – 6 PM",
        capacity: "Up to 50 guests",
        timing: "Per person",
        features: &[
            "Swimming pool access",
            "Lunch, tea & snacks",
            "Cricket, badminton & indoor games",
            "Rain dance on weekends",
        ],
        image: "assets/swimming-pool.jpg",
        image_alt: "Swimming pool with loungers",
        popular: false,
    },
    Package {
        title: "Private Events",
        description: "Birthdays, anniversaries, pre-wedding shoots and corporate offsites with custom catering.",
        price: "On request",
        original_price: None,
        duration: "Flexible slots",
        capacity: "Up to 100 guests",
        timing: "Custom schedule",
        features: &[
            "Decor & catering partners",
            "Open lawn with stage space",
            "Power backup throughout",
            "Dedicated event coordinator",
        ],
        image: "assets/outdoor-dining.jpg",
        image_alt: "Open-air dining setup under string lights",
        popular: false,
    },
];

#[component]
pub fn Packages() -> impl IntoView {
    view! {
        <section id="packages" class="packages">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Choose Your Experience"</h2>
                    <p class="section-description">
                        "Carefully curated packages designed for unforgettable moments."
                    </p>
                </div>
                <div class="packages-grid">
                    {PACKAGES.iter().map(|package| view! { <PackageCard package=package /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PackageCard(package: &'static Package) -> impl IntoView {
    let nav = expect_context::<Navigation>();

    view! {
        <article class=if package.popular { "package-card popular" } else { "package-card" }>
            <Show when=move || package.popular>
                <span class="package-ribbon">"Most Popular"</span>
            </Show>
            <img src=package.image alt=package.image_alt class="package-image" loading="lazy" />
            <div class="package-body">
                <h3 class="package-title">{package.title}</h3>
                <p class="package-description">{package.description}</p>
                <div class="package-price-row">
                    <span class="package-price">{package.price}</span>
                    {package.original_price.map(|original| view! {
                        <span class="package-price-original">{original}</span>
                    })}
                </div>
                <ul class="package-meta">
                    <li>{package.duration}</li>
                    <li>{package.capacity}</li>
                    <li>{package.timing}</li>
                </ul>
                <ul class="package-features">
                    {package.features.iter().map(|feature| view! {
                        <li class="package-feature">
                            <span class="package-check">"✓"</span>
                            {*feature}
                        </li>
                    }).collect::<Vec<_>>()}
                </ul>
                <button class="btn btn-primary btn-block" on:click=move |_| nav.go("contact")>
                    "Book Now"
                </button>
            </div>
        </article>
    }
}
