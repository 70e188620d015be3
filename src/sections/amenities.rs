use leptos::prelude::*;

struct Amenity {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const AMENITIES: &[Amenity] = &[
    Amenity {
        icon: "🏊",
        title: "Swimming Pool",
        description: "Filtered pool with a shallow kids' side, cleaned daily.",
    },
    Amenity {
        icon: "🌳",
        title: "Lush Gardens",
        description: "Two acres of lawns, mango trees and shaded sit-outs.",
    },
    Amenity {
        icon: "🎮",
        title: "Games Room",
        description: "Carrom, table tennis and board games indoors; cricket and badminton out.",
    },
    Amenity {
        icon: "👨‍🍳",
        title: "Kitchen & Catering",
        description: "Full kitchen for self-cooking or Gujarati thali on order.",
    },
    Amenity {
        icon: "⚡",
        title: "Power Backup",
        description: "Generator backup for the whole property.",
    },
    Amenity {
        icon: "🚗",
        title: "Ample Parking",
        description: "Shaded parking for a dozen cars inside the gate.",
    },
    Amenity {
        icon: "📶",
        title: "Wi-Fi",
        description: "Broadband across the house and poolside.",
    },
    Amenity {
        icon: "👥",
        title: "Group Friendly",
        description: "Sleeps 12 overnight, hosts up to 100 for day events.",
    },
];

#[component]
pub fn Amenities() -> impl IntoView {
    view! {
        <section id="amenities" class="amenities">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Premium Amenities"</h2>
                    <p class="section-description">"Everything you need for a perfect getaway."</p>
                </div>
                <div class="amenities-grid">
                    {AMENITIES.iter().map(|amenity| view! {
                        <div class="amenity-card">
                            <span class="amenity-icon">{amenity.icon}</span>
                            <h3 class="amenity-title">{amenity.title}</h3>
                            <p class="amenity-description">{amenity.description}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
