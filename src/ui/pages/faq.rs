//! FAQ page with a category filter and an accordion

use leptos::prelude::*;
use leptos_meta::Title;

use super::sections::{CallToAction, PageHero};
use crate::core::content::{ALL_CATEGORIES, FAQS, FaqItem, faq_categories, filter_faqs, toggle_open};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::ScrollReveal;

/// Accordion with at most one question open at a time
#[component]
pub fn FaqAccordion(#[prop(into)] items: Signal<Vec<FaqItem>>) -> impl IntoView {
    let (open, set_open) = signal(None::<usize>);

    // A new list means new indices
    Effect::new(move |_| {
        items.track();
        set_open.set(None);
    });

    view! {
        <div class="faq-list">
            {move || {
                items
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let is_open = move || open.get() == Some(index);
                        view! {
                            <div class="faq-item card">
                                <button
                                    class="faq-question"
                                    on:click=move |_| set_open.update(|o| *o = toggle_open(*o, index))
                                    aria-expanded=move || is_open().to_string()
                                >
                                    <span>{item.question}</span>
                                    <span class="faq-chevron" class:faq-chevron-open=is_open>
                                        <Icon name=icons::CHEVRON_DOWN class="w-5 h-5" />
                                    </span>
                                </button>
                                <div class="faq-answer" class:faq-answer-open=is_open>
                                    <p>{item.answer}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn FaqPage() -> impl IntoView {
    let (category, set_category) = signal(ALL_CATEGORIES);
    let visible = Signal::derive(move || {
        filter_faqs(&FAQS, category.get())
            .into_iter()
            .copied()
            .collect::<Vec<_>>()
    });

    view! {
        <Title text="FAQ - MADYIS" />

        <PageHero
            title="Frequently Asked Questions"
            subtitle="Everything you need to know about MADYIS, your app and your CRM."
        />

        <section class="section">
            <div class="container narrow">
                <ScrollReveal>
                    <div class="chip-row" role="tablist" aria-label="Question categories">
                        {faq_categories(&FAQS)
                            .into_iter()
                            .map(|name| {
                                view! {
                                    <button
                                        type="button"
                                        role="tab"
                                        class="chip"
                                        class:chip-active=move || category.get() == name
                                        aria-selected=move || (category.get() == name).to_string()
                                        on:click=move |_| set_category.set(name)
                                    >
                                        {name}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </ScrollReveal>

                <FaqAccordion items=visible />
            </div>
        </section>

        <CallToAction
            title="Still have questions?"
            text="Our team answers every message within 24 hours."
            primary=("Contact Us", "/contact")
            secondary=("View Pricing", "/pricing")
        />
    }
}
