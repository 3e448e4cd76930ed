//! Contact page
//!
//! Every field is validated on submit; a field with an error is re-checked
//! as the user types. Sending is simulated with a short delay, after which a
//! toast confirms and the form is cleared.

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_meta::Title;

use super::sections::PageHero;
use crate::core::{ContactError, ContactField, ContactForm, Direction};
use crate::ui::common::{FormField, SubmitButton, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{CONTACT_EMAIL, CONTACT_PHONE, CONTACT_PHONE_LINK};
use crate::ui::reveal::ScrollReveal;
use crate::ui::toast::use_toaster;

/// Simulated network delay for a submission
pub const SUBMIT_DELAY_MS: u32 = 2000;

type FieldErrors = BTreeMap<ContactField, String>;

fn errors_by_field(errors: Vec<ContactError>) -> FieldErrors {
    errors
        .into_iter()
        .map(|error| (error.field(), error.to_string()))
        .collect()
}

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::FirstName => "John",
        ContactField::LastName => "Doe",
        ContactField::Email => "john.doe@company.com",
        ContactField::CompanyName => "Your Company Inc.",
        ContactField::Subject => "How can we help you?",
        ContactField::Message => "Tell us more about your project and how we can help...",
    }
}

fn field_id(field: ContactField) -> &'static str {
    match field {
        ContactField::FirstName => "first-name",
        ContactField::LastName => "last-name",
        ContactField::Email => "email",
        ContactField::CompanyName => "company-name",
        ContactField::Subject => "subject",
        ContactField::Message => "message",
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let toaster = use_toaster();
    let form = RwSignal::new(ContactForm::default());
    let errors = RwSignal::new(FieldErrors::new());
    let pending = RwSignal::new(false);

    let value = move |field: ContactField| {
        Signal::derive(move || form.with(|f| f.value(field).to_string()))
    };
    let error = move |field: ContactField| {
        Signal::derive(move || errors.with(|e| e.get(&field).cloned()))
    };
    let on_input = move |field: ContactField| {
        Callback::new(move |text: String| {
            form.update(|f| f.set(field, text));
            // Only re-check fields that are already flagged
            if errors.with_untracked(|e| e.contains_key(&field)) {
                let result = form.with_untracked(|f| f.validate_field(field));
                errors.update(|e| match result {
                    Ok(()) => {
                        e.remove(&field);
                    }
                    Err(err) => {
                        e.insert(field, err.to_string());
                    }
                });
            }
        })
    };

    let finish = move || {
        toaster.success(
            "Message sent successfully!",
            "We'll get back to you within 24 hours.",
        );
        form.set(ContactForm::default());
        errors.set(FieldErrors::new());
        pending.set(false);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let submitted = form.get_untracked().submit(|data| {
            leptos::logging::log!("contact form submitted: {}", data.subject);
            pending.set(true);

            #[cfg(not(feature = "ssr"))]
            {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                    finish();
                });
            }

            #[cfg(feature = "ssr")]
            {
                finish();
            }
        });
        match submitted {
            Ok(()) => errors.set(FieldErrors::new()),
            Err(found) => errors.set(errors_by_field(found)),
        }
    };

    let text_field = move |field: ContactField, input_type: &'static str| {
        view! {
            <FormField
                label=field.label()
                id=field_id(field)
                input_type=input_type
                placeholder=placeholder(field)
                value=value(field)
                on_input=on_input(field)
                disabled=pending
                error=error(field)
            />
        }
    };

    view! {
        <Title text="Contact - MADYIS" />

        <PageHero
            title="Let's Connect"
            subtitle="Have a question? Need more information? Our team is here to help you. Fill in the form below and we'll get back to you shortly."
        />

        <section class="section">
            <div class="container contact-layout">
                <ScrollReveal direction=Direction::Left class="contact-info">
                    <h2 class="section-title">"Get in Touch"</h2>
                    <p class="section-lead">
                        "Whether you want to learn more about our services, schedule a demo, or discuss how MADYIS can help your business grow, we're here to help."
                    </p>
                    <ul class="contact-list">
                        <li class="contact-item">
                            <span class="feature-icon"><Icon name=icons::MAIL class="w-5 h-5" /></span>
                            <div>
                                <p class="contact-title">"Email"</p>
                                <a class="link" href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                            </div>
                        </li>
                        <li class="contact-item">
                            <span class="feature-icon"><Icon name=icons::PHONE class="w-5 h-5" /></span>
                            <div>
                                <p class="contact-title">"Phone"</p>
                                <a class="link" href=CONTACT_PHONE_LINK>{CONTACT_PHONE}</a>
                            </div>
                        </li>
                        <li class="contact-item">
                            <span class="feature-icon"><Icon name=icons::MAP_PIN class="w-5 h-5" /></span>
                            <div>
                                <p class="contact-title">"Location"</p>
                                <span>"Global Service Available"</span>
                            </div>
                        </li>
                    </ul>
                </ScrollReveal>

                <ScrollReveal direction=Direction::Right delay=150>
                    <form class="card contact-form" on:submit=on_submit novalidate=true>
                        <div class="form-row">
                            {text_field(ContactField::FirstName, "text")}
                            {text_field(ContactField::LastName, "text")}
                        </div>
                        {text_field(ContactField::Email, "email")}
                        {text_field(ContactField::CompanyName, "text")}
                        {text_field(ContactField::Subject, "text")}
                        <TextAreaField
                            label=ContactField::Message.label()
                            id=field_id(ContactField::Message)
                            placeholder=placeholder(ContactField::Message)
                            value=value(ContactField::Message)
                            on_input=on_input(ContactField::Message)
                            disabled=pending
                            error=error(ContactField::Message)
                        />
                        <p class="form-note">
                            "By submitting this form, you agree to our Privacy Policy and Terms of Service."
                        </p>
                        <SubmitButton pending=pending>
                            <Icon name=icons::MAIL class="icon-btn" />
                            "Send Message"
                        </SubmitButton>
                    </form>
                </ScrollReveal>
            </div>
        </section>

        <section class="section section-tinted">
            <ScrollReveal class="container narrow text-center">
                <h2 class="section-title">"Prefer a Live Demo?"</h2>
                <p class="section-lead">
                    "Schedule a personalized demo with our team to see MADYIS in action and learn how it can transform your business."
                </p>
                <a class="btn-base btn-primary btn-lg" href=format!("mailto:{CONTACT_EMAIL}?subject=Demo%20request")>
                    <Icon name=icons::CALENDAR class="icon-btn" />
                    "Schedule a Demo Call"
                </a>
            </ScrollReveal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_are_keyed_by_field() {
        let form = ContactForm {
            first_name: "J".into(),
            last_name: "Doe".into(),
            email: "not-an-email".into(),
            company_name: "Acme".into(),
            subject: "Hello there".into(),
            message: "Too short".into(),
        };
        let errors = errors_by_field(form.validate().unwrap_err());
        assert_eq!(errors.len(), 3);
        assert_eq!(
            errors.get(&ContactField::FirstName).map(String::as_str),
            Some("First name must be at least 2 characters")
        );
        assert_eq!(
            errors.get(&ContactField::Email).map(String::as_str),
            Some("Please enter a valid email address")
        );
        assert!(errors.contains_key(&ContactField::Message));
    }

    #[test]
    fn test_field_ids_are_unique() {
        let mut ids: Vec<_> = ContactField::ALL.iter().map(|f| field_id(*f)).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ContactField::ALL.len());
    }
}
