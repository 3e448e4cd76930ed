//! Pricing page
//!
//! Prices are shown in the selected currency using live exchange rates from
//! `/api/exchange-rates`. Until the request completes, or if it fails, the
//! static fallback table is used.

use leptos::prelude::*;
use leptos_meta::Title;

use super::faq::FaqAccordion;
use super::sections::{CallToAction, PageHero};
use crate::core::content::{FAQS, PLAN_INCLUSIONS, filter_faqs};
use crate::core::pricing::BASE_PRICES;
use crate::core::{BillingCycle, Currency, ExchangeRates, PriceQuote, RateStatus};
use crate::ui::common::{LinkButton, SelectField};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::ScrollReveal;

/// Endpoint serving the exchange-rate table
pub const RATES_ENDPOINT: &str = "/api/exchange-rates";

#[cfg(not(feature = "ssr"))]
async fn fetch_rates() -> Option<crate::core::RatesResponse> {
    use gloo_net::http::Request;

    let response = match Request::get(RATES_ENDPOINT).send().await {
        Ok(response) => response,
        Err(err) => {
            leptos::logging::warn!("exchange rate request failed: {err}");
            return None;
        }
    };
    if !response.ok() {
        leptos::logging::warn!("exchange rate request returned {}", response.status());
        return None;
    }
    response.json().await.ok()
}

#[component]
pub fn PricingPage() -> impl IntoView {
    let currency = RwSignal::new(Currency::default());
    let cycle = RwSignal::new(BillingCycle::default());
    let rates = RwSignal::new(ExchangeRates::default());
    let status = RwSignal::new(RateStatus::Loading);

    // Fetch once on mount
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            leptos::task::spawn_local(async move {
                let (next_status, next_rates) = RateStatus::resolve(fetch_rates().await);
                let _ = rates.try_set(next_rates);
                let _ = status.try_set(next_status);
            });
        });
    }

    let quote = Memo::new(move |_| {
        PriceQuote::compute(&BASE_PRICES, currency.get(), cycle.get(), &rates.get())
    });
    let savings = Memo::new(move |_| {
        quote.with(|q| match q.cycle {
            BillingCycle::Annual => q.annual_savings_percent(),
            BillingCycle::Monthly => 0,
        })
    });

    let currency_options = Currency::ALL
        .iter()
        .map(|c| (c.code(), c.label()))
        .collect::<Vec<_>>();

    let cycle_button = move |label: &'static str, value: BillingCycle| {
        view! {
            <button
                type="button"
                class="toggle-option"
                class:toggle-option-active=move || cycle.get() == value
                aria-pressed=move || (cycle.get() == value).to_string()
                on:click=move |_| cycle.set(value)
            >
                {label}
                {(value == BillingCycle::Annual)
                    .then(|| {
                        view! {
                            <Show when=move || { savings.get() > 0 }>
                                <span class="savings-badge">
                                    {move || format!("Save {}%", savings.get())}
                                </span>
                            </Show>
                        }
                    })}
            </button>
        }
    };

    let pricing_faqs = filter_faqs(&FAQS, "Pricing")
        .into_iter()
        .copied()
        .collect::<Vec<_>>();

    view! {
        <Title text="Pricing - MADYIS" />

        <PageHero title="Our Pricing" subtitle="One plan. All features. Zero hassle." />

        <section class="section">
            <div class="container narrow">
                <div class="pricing-controls">
                    <SelectField
                        label="Currency"
                        id="currency"
                        value=Signal::derive(move || currency.get().code().to_string())
                        on_change=Callback::new(move |code: String| {
                            if let Some(selected) = Currency::from_code(&code) {
                                currency.set(selected);
                            }
                        })
                        options=currency_options
                    />
                    <div class="billing-toggle" role="group" aria-label="Billing cycle">
                        {cycle_button("Monthly", BillingCycle::Monthly)}
                        {cycle_button("Annual", BillingCycle::Annual)}
                    </div>
                </div>

                <ScrollReveal>
                    <div class="card price-card">
                        <div class="price-header">
                            <div class="pill">"COMPLETE PACKAGE"</div>
                            <p class="price">
                                {move || quote.with(|q| q.currency.format(q.per_month()))}
                                <span class="price-period">"/month"</span>
                            </p>
                            <p class="price-note">
                                {move || {
                                    quote
                                        .with(|q| match q.cycle {
                                            BillingCycle::Annual => {
                                                format!("Billed annually at {}", q.currency.format(q.billed()))
                                            }
                                            BillingCycle::Monthly => "Billed monthly".to_string(),
                                        })
                                }}
                            </p>
                            <div class="price-extra">
                                {move || {
                                    quote
                                        .with(|q| {
                                            format!(
                                                "+ One-time installation fee of {}",
                                                q.currency.format(q.installation),
                                            )
                                        })
                                }}
                            </div>
                            <Show when=move || status.get() == RateStatus::Fallback>
                                <p class="rates-note">"Using fallback rates"</p>
                            </Show>
                        </div>

                        <LinkButton href="/contact">"Get Started Now"</LinkButton>

                        <h3 class="card-title">"What's included"</h3>
                        <ul class="inclusions">
                            {PLAN_INCLUSIONS
                                .into_iter()
                                .map(|item| {
                                    view! {
                                        <li class="inclusion">
                                            <span class="inclusion-check">
                                                <Icon name=icons::CHECK class="w-3 h-3" />
                                            </span>
                                            <span>{item}</span>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </ScrollReveal>

                <div class="pricing-footnote">
                    <p>"All prices exclude VAT. Cancel anytime, no long-term commitment required."</p>
                    <p>
                        "Need a custom solution for your enterprise? "
                        <a href="/contact" class="link">"Contact our sales team"</a>
                    </p>
                </div>
            </div>
        </section>

        <section class="section section-tinted">
            <div class="container narrow">
                <ScrollReveal class="section-header">
                    <h2 class="section-title">"Frequently Asked Questions"</h2>
                </ScrollReveal>
                <FaqAccordion items=pricing_faqs />
            </div>
        </section>

        <CallToAction
            title="Ready to Launch Your Ecosystem?"
            text="Join hundreds of businesses already using MADYIS to power their digital presence."
            primary=("Get Started Now", "/contact")
            secondary=("See How It Works", "/how-it-works")
        />
    }
}
