use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::{PHONE_DISPLAY, PHONE_HREF, whatsapp_url};

/// One submitted enquiry. Field values arrive as the raw strings the form
/// produced; empty means the optional field was left blank.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Enquiry {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub enquiry_type: String,
    pub headcount: String,
    pub checkin: String,
    pub checkout: String,
    pub message: String,
}

impl Enquiry {
    fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.enquiry_type.is_empty()
            && !self.headcount.trim().is_empty()
    }

    /// Text of the WhatsApp follow-up opened after the simulated submission.
    pub fn whatsapp_text(&self) -> String {
        let mut text = format!(
            "Hi! I just submitted an enquiry for {} ({} guests). Name: {}. Phone: {}.",
            self.enquiry_type, self.headcount, self.name, self.phone
        );
        if !self.email.trim().is_empty() {
            text.push_str(&format!(" Email: {}.", self.email.trim()));
        }
        if !self.checkin.is_empty() {
            text.push_str(&format!(" Check-in: {}.", self.checkin));
        }
        if !self.checkout.is_empty() {
            text.push_str(&format!(" Check-out: {}.", self.checkout));
        }
        if !self.message.trim().is_empty() {
            text.push_str(&format!(" Note: {}.", self.message.trim()));
        }
        text.push_str(" Please confirm receipt.");
        text
    }
}

/// Enquiry form. Submission is simulated: after a short delay the form
/// reports success and opens a prefilled WhatsApp chat as the real channel.
#[component]
pub fn Contact() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (phone, set_phone) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (enquiry_type, set_enquiry_type) = signal(String::new());
    let (headcount, set_headcount) = signal(String::new());
    let (checkin, set_checkin) = signal(String::new());
    let (checkout, set_checkout) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (consent, set_consent) = signal(false);
    // Hidden from humans; anything in here means a bot filled the form.
    let (honeypot, set_honeypot) = signal(String::new());

    let (submitting, set_submitting) = signal(false);
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        if !honeypot.get().is_empty() {
            log::info!("enquiry dropped: honeypot filled");
            return;
        }
        let enquiry = Enquiry {
            name: name.get(),
            phone: phone.get(),
            email: email.get(),
            enquiry_type: enquiry_type.get(),
            headcount: headcount.get(),
            checkin: checkin.get(),
            checkout: checkout.get(),
            message: message.get(),
        };
        if !enquiry.is_complete() || !consent.get() {
            return;
        }

        set_submitting.set(true);
        set_timeout(
            move || {
                set_submitting.set(false);
                set_sent.set(true);

                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(
                        &whatsapp_url(&enquiry.whatsapp_text()),
                        "_blank",
                    );
                }

                set_name.set(String::new());
                set_phone.set(String::new());
                set_email.set(String::new());
                set_enquiry_type.set(String::new());
                set_headcount.set(String::new());
                set_checkin.set(String::new());
                set_checkout.set(String::new());
                set_message.set(String::new());
                set_consent.set(false);

                set_timeout(move || set_sent.set(false), Duration::from_millis(6000));
            },
            Duration::from_millis(1000),
        );
    };

    view! {
        <section id="contact" class="contact">
            <div class="container container-narrow">
                <div class="section-header">
                    <h2 class="section-title">"Book Your Experience"</h2>
                    <p class="section-description">
                        "Get instant pricing and availability. We respond within 2 hours!"
                    </p>
                </div>

                <Show when=move || sent.get()>
                    <div class="form-banner" role="status">
                        "Enquiry sent! We'll get back to you within 2 hours — check WhatsApp for quick updates."
                    </div>
                </Show>

                <form class="contact-form" on:submit=on_submit>
                    <input
                        type="text"
                        name="website"
                        class="form-honeypot"
                        tabindex="-1"
                        autocomplete="off"
                        prop:value=move || honeypot.get()
                        on:input=move |ev| set_honeypot.set(event_target_value(&ev))
                    />

                    <div class="form-row">
                        <label class="form-field">
                            <span class="form-label">"Full Name *"</span>
                            <input
                                type="text"
                                required=true
                                placeholder="Your full name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-label">"Phone Number *"</span>
                            <input
                                type="tel"
                                required=true
                                placeholder="+91-9876543210"
                                pattern="[0-9+\\-\\s]+"
                                prop:value=move || phone.get()
                                on:input=move |ev| set_phone.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <label class="form-field">
                        <span class="form-label">"Email (optional)"</span>
                        <input
                            type="email"
                            placeholder="your@email.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>

                    <div class="form-row">
                        <label class="form-field">
                            <span class="form-label">"Enquiry Type *"</span>
                            <select
                                required=true
                                prop:value=move || enquiry_type.get()
                                on:change=move |ev| set_enquiry_type.set(event_target_value(&ev))
                            >
                                <option value="" disabled=true selected=true>"Select service"</option>
                                <option value="overnight-stay">"Overnight Stay"</option>
                                <option value="day-picnic">"Day Picnic"</option>
                                <option value="event">"Private Events"</option>
                                <option value="corporate">"Corporate Bookings"</option>
                            </select>
                        </label>
                        <label class="form-field">
                            <span class="form-label">"Number of Guests *"</span>
                            <input
                                type="number"
                                required=true
                                min="1"
                                max="100"
                                placeholder="10"
                                prop:value=move || headcount.get()
                                on:input=move |ev| set_headcount.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="form-row">
                        <label class="form-field">
                            <span class="form-label">"Check-in Date"</span>
                            <input
                                type="date"
                                prop:value=move || checkin.get()
                                on:input=move |ev| set_checkin.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="form-field">
                            <span class="form-label">"Check-out Date"</span>
                            <input
                                type="date"
                                prop:value=move || checkout.get()
                                on:input=move |ev| set_checkout.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <label class="form-field">
                        <span class="form-label">"Special Requests"</span>
                        <textarea
                            rows="3"
                            placeholder="Dietary preferences, decor, anything else..."
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                    </label>

                    <label class="form-consent">
                        <input
                            type="checkbox"
                            required=true
                            prop:checked=move || consent.get()
                            on:change=move |ev| set_consent.set(event_target_checked(&ev))
                        />
                        <span>"I agree to receive booking updates via WhatsApp/SMS *"</span>
                    </label>

                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Sending..." } else { "Send Enquiry" }}
                        </button>
                        <a
                            href=whatsapp_url("Hi! I need farmhouse booking details")
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-whatsapp"
                        >
                            "WhatsApp Direct"
                        </a>
                    </div>

                    <p class="form-footnote">
                        "Prefer to talk? Call " <a href=PHONE_HREF>{PHONE_DISPLAY}</a>
                    </p>
                </form>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::Enquiry;
    use pretty_assertions::assert_eq;

    fn base_enquiry() -> Enquiry {
        Enquiry {
            name: "Asha Rao".into(),
            phone: "+91-9876543210".into(),
            enquiry_type: "day-picnic".into(),
            headcount: "14".into(),
            ..Enquiry::default()
        }
    }

    #[test]
    fn complete_requires_the_mandatory_fields() {
        assert!(base_enquiry().is_complete());
        assert!(!Enquiry::default().is_complete());

        let mut missing_phone = base_enquiry();
        missing_phone.phone = "   ".into();
        assert!(!missing_phone.is_complete());
    }

    #[test]
    fn whatsapp_text_carries_the_mandatory_fields() {
        let text = base_enquiry().whatsapp_text();
        assert_eq!(
            text,
            "Hi! I just submitted an enquiry for day-picnic (14 guests). \
             Name: Asha Rao. Phone: +91-9876543210. Please confirm receipt."
        );
    }

    #[test]
    fn whatsapp_text_includes_optional_fields_when_present() {
        let mut enquiry = base_enquiry();
        enquiry.email = "asha@example.com".into();
        enquiry.checkin = "2026-08-14".into();
        enquiry.checkout = "2026-08-15".into();
        enquiry.message = "  Jain food only ".into();

        let text = enquiry.whatsapp_text();
        assert!(text.contains("Email: asha@example.com."));
        assert!(text.contains("Check-in: 2026-08-14."));
        assert!(text.contains("Check-out: 2026-08-15."));
        assert!(text.contains("Note: Jain food only."));
    }
}
