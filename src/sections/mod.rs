// Khushi Farm landing page sections

mod amenities;
mod back_to_top;
mod contact;
mod footer;
mod gallery;
mod hero;
mod loader;
mod nav;
mod packages;
mod reviews;
mod sticky_actions;

pub use amenities::Amenities;
pub use back_to_top::BackToTop;
pub use contact::Contact;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use loader::Loader;
pub use nav::NavBar;
pub use packages::Packages;
pub use reviews::Reviews;
pub use sticky_actions::StickyActions;

/// Site identity and contact details (single source of truth).
pub const SITE_NAME: &str = "Khushi Farm";
pub const SITE_TAGLINE: &str = "Premium Farmhouse Experience";
pub const SITE_DESCRIPTION: &str = "A private farmhouse retreat with swimming pool, lush gardens \
     and open-air dining near Kayavarohan — built for family getaways, day picnics and events.";
pub const SITE_CITY: &str = "Kayavarohan";
pub const SITE_STATE: &str = "Gujarat";

pub const PHONE_DISPLAY: &str = "+91 99989 07887";
pub const PHONE_HREF: &str = "tel:+919998907887";
pub const WHATSAPP_NUMBER: &str = "919998907887";
pub const MAPS_URL: &str = "https://www.google.com/maps/?q=22.070234,73.265417";

/// Default prefilled WhatsApp enquiry.
pub const WHATSAPP_GREETING: &str =
    "Hi! I'm interested in booking Khushi Farm. Please share availability and pricing.";

/// Guests the farmhouse sleeps overnight.
pub const OVERNIGHT_CAPACITY: u32 = 12;

/// Prefilled WhatsApp deep link for `message`.
pub fn whatsapp_url(message: &str) -> String {
    format!(
        "https://wa.me/{WHATSAPP_NUMBER}?text={}",
        String::from(js_sys::encode_uri_component(message))
    )
}
