use leptos::prelude::*;

use super::MAPS_URL;

struct Review {
    author: &'static str,
    when: &'static str,
    rating: u8,
    text: &'static str,
}

const REVIEWS: &[Review] = &[
    Review {
        author: "Mehul Patel",
        when: "2 weeks ago",
        rating: 5,
        text: "Booked the overnight package for a family reunion. Pool was spotless, food was \
               homely and the caretaker was around whenever we needed anything.",
    },
    Review {
        author: "Priya Shah",
        when: "a month ago",
        rating: 5,
        text: "Perfect day picnic spot near Vadodara. Kids lived in the shallow pool the whole \
               day and the rain dance was a hit.",
    },
    Review {
        author: "Rohan Desai",
        when: "2 months ago",
        rating: 4,
        text: "Hosted our office offsite here. Plenty of lawn space and the power backup saved \
               our evening program. Roads close to the farm are a bit rough.",
    },
    Review {
        author: "Anjali Mehta",
        when: "3 months ago",
        rating: 5,
        text: "Celebrated my parents' anniversary. The decor partners did a lovely job and \
               WhatsApp responses were quick at every step.",
    },
];

const AGGREGATE_RATING: &str = "4.8";
const RATINGS_TOTAL: u32 = 127;

fn stars(rating: u8) -> String {
    let filled = usize::from(rating.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn Reviews() -> impl IntoView {
    let summary = format!("{AGGREGATE_RATING} · {RATINGS_TOTAL} Google reviews");

    view! {
        <section id="reviews" class="reviews">
            <div class="container">
                <div class="section-header">
                    <h2 class="section-title">"What Our Guests Say"</h2>
                    <p class="section-description">"Real experiences from real people."</p>
                    <p class="reviews-summary">
                        <span class="reviews-stars">"★★★★★"</span>
                        {summary}
                    </p>
                </div>
                <div class="reviews-grid">
                    {REVIEWS.iter().map(|review| view! {
                        <blockquote class="review-card">
                            <div class="review-head">
                                <span class="review-author">{review.author}</span>
                                <span class="review-when">{review.when}</span>
                            </div>
                            <span class="review-stars">{stars(review.rating)}</span>
                            <p class="review-text">{review.text}</p>
                        </blockquote>
                    }).collect::<Vec<_>>()}
                </div>
                <div class="reviews-footer">
                    <a href=MAPS_URL target="_blank" rel="noopener noreferrer" class="btn btn-outline">
                        "Read all reviews on Google Maps"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::stars;

    #[test]
    fn stars_fill_up_to_the_rating() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(4), "★★★★☆");
        assert_eq!(stars(0), "☆☆☆☆☆");
    }

    #[test]
    fn stars_clamp_out_of_range_ratings() {
        assert_eq!(stars(9), "★★★★★");
    }
}
