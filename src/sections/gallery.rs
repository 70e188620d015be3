use leptos::prelude::*;

struct GalleryItem {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    alt: &'static str,
}

const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        title: "Poolside Evenings",
        description: "The pool deck lit up for a night swim.",
        image: "assets/swimming-pool.jpg",
        alt: "Swimming pool lit at dusk",
    },
    GalleryItem {
        title: "Open-Air Dining",
        description: "Dinner under string lights on the main lawn.",
        image: "assets/outdoor-dining.jpg",
        alt: "Long dining table set outdoors",
    },
    GalleryItem {
        title: "The Farmhouse",
        description: "Main house with verandas on both floors.",
        image: "assets/farmhouse-hero.jpg",
        alt: "Front view of the farmhouse",
    },
    GalleryItem {
        title: "Morning Lawns",
        description: "Two acres of green to wake up to.",
        image: "assets/farmhouse-hero.jpg",
        alt: "Garden lawns in morning light",
    },
    GalleryItem {
        title: "Kids' Corner",
        description: "Shallow pool side and swings by the mango trees.",
        image: "assets/swimming-pool.jpg",
        alt: "Shallow pool area for children",
    },
    GalleryItem {
        title: "Event Setups",
        description: "Stage and seating for private functions.",
        image: "assets/outdoor-dining.jpg",
        alt: "Lawn arranged for a private event",
    },
];

#[component]
pub fn Gallery() -> impl IntoView {
    view! {
        <section id="gallery" class="gallery">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"Gallery"</h2>
                    <p class="section-description">"See what makes our farmhouse special."</p>
                </div>
                <div class="gallery-grid">
                    {GALLERY.iter().map(|item| view! {
                        <figure class="gallery-tile">
                            <img src=item.image alt=item.alt class="gallery-image" loading="lazy" />
                            <figcaption class="gallery-caption">
                                <h4 class="gallery-title">{item.title}</h4>
                                <p class="gallery-description">{item.description}</p>
                            </figcaption>
                        </figure>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
