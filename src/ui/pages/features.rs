//! Features page: client app orbit, CRM feature grid and local discovery

use leptos::prelude::*;
use leptos_meta::Title;

use super::sections::{CallToAction, FeatureCard, PageHero};
use crate::core::Direction;
use crate::core::content::{APP_FEATURES, CRM_FEATURES, DISCOVERY_FEATURES};
use crate::ui::orbital::OrbitalFeatureCards;
use crate::ui::reveal::{ScrollReveal, StaggeredGrid};

#[component]
pub fn FeaturesPage() -> impl IntoView {
    let crm_cards: Vec<AnyView> = CRM_FEATURES
        .into_iter()
        .map(|feature| view! { <FeatureCard feature=feature /> }.into_any())
        .collect();

    view! {
        <Title text="Features - MADYIS" />

        <PageHero
            title="Features"
            subtitle="Here's exactly how our service works: simple, fast, and tailored just for you."
        />

        <section class="section">
            <div class="container">
                <ScrollReveal class="section-header">
                    <h2 class="section-title">
                        "Everything Your Customers Need, "
                        <span class="text-accent">"In One App"</span>
                    </h2>
                    <p class="section-lead">
                        "Make it easy for your customers to book, pay, stay updated, and feel valued, all through a single, beautifully designed app tailored to your business."
                    </p>
                </ScrollReveal>
                <ScrollReveal delay=200>
                    <OrbitalFeatureCards features=APP_FEATURES.to_vec() />
                </ScrollReveal>
            </div>
        </section>

        <section class="section section-tinted">
            <div class="container">
                <ScrollReveal class="section-header">
                    <h2 class="section-title">
                        "Smart CRM to Simplify "
                        <span class="text-accent">"Your Workflow"</span>
                    </h2>
                    <p class="section-lead">
                        "Plan your team's schedule, manage access and time off, track customer history, and gain insights with smart analytics."
                    </p>
                </ScrollReveal>
                <StaggeredGrid class="grid grid-4" items=crm_cards />
            </div>
        </section>

        <section class="section section-dark">
            <div class="container split">
                <ScrollReveal direction=Direction::Left>
                    <h2 class="section-title">"Be Seen Where It Matters Most"</h2>
                    <p class="section-lead">
                        "With location-based visibility, you connect with people when and where it matters most."
                    </p>
                    <p class="pill">"Included local directory"</p>
                </ScrollReveal>
                <ScrollReveal direction=Direction::Right delay=150>
                    <div class="stack">
                        {DISCOVERY_FEATURES
                            .into_iter()
                            .map(|feature| view! { <FeatureCard feature=feature /> })
                            .collect_view()}
                    </div>
                </ScrollReveal>
            </div>
        </section>

        <CallToAction
            title="Ready to Transform Your Business?"
            text="Discover how MADYIS can help you launch your complete digital ecosystem in just 10 days."
            primary=("See How It Works", "/how-it-works")
            secondary=("View Pricing", "/pricing")
        />
    }
}
