//! How It Works page: the four launch steps and what the client gets

use leptos::prelude::*;
use leptos_meta::Title;

use super::sections::{CallToAction, FeatureCard, PageHero};
use crate::core::Direction;
use crate::core::content::{Feature, LAUNCH_STEPS};
use crate::ui::icon::icons;
use crate::ui::reveal::{ScrollReveal, StaggeredGrid};

const BENEFITS: [Feature; 3] = [
    Feature {
        icon: icons::SMARTPHONE,
        title: "Ready in 10 Days",
        description: "From concept to app stores in just 10 days. No technical knowledge required.",
    },
    Feature {
        icon: icons::SPARKLES,
        title: "100% White Label",
        description: "Your brand, your colors, your identity. No MADYIS branding on your app.",
    },
    Feature {
        icon: icons::GLOBE,
        title: "Always Open",
        description: "Your customers can book and pay anytime, anywhere. Never miss an opportunity.",
    },
];

#[component]
pub fn HowItWorksPage() -> impl IntoView {
    let benefits: Vec<AnyView> = BENEFITS
        .into_iter()
        .map(|feature| view! { <FeatureCard feature=feature /> }.into_any())
        .collect();

    view! {
        <Title text="How It Works - MADYIS" />

        <PageHero
            title="Let's Walk You Through It"
            subtitle="A complete solution designed for businesses that want to scale fast without technical complexity."
        />

        <section class="section">
            <div class="container narrow">
                <ol class="steps">
                    {LAUNCH_STEPS
                        .into_iter()
                        .enumerate()
                        .map(|(index, step)| {
                            // Alternate sides as the timeline goes down
                            let direction = if index % 2 == 0 { Direction::Left } else { Direction::Right };
                            view! {
                                <li class="step">
                                    <ScrollReveal direction=direction distance=50.0 root_margin="0px 0px -50px 0px">
                                        <div class="step-number">{step.number}</div>
                                        <div class="card step-body">
                                            <h3 class="card-title">{step.title}</h3>
                                            <p class="card-text">{step.description}</p>
                                        </div>
                                    </ScrollReveal>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>

        <section class="section section-tinted">
            <div class="container">
                <StaggeredGrid stagger=150 class="grid grid-3" items=benefits />
            </div>
        </section>

        <CallToAction
            title="Ready to Get Started?"
            text="Join hundreds of businesses already using MADYIS to power their digital presence."
            primary=("View Pricing", "/pricing")
            secondary=("Contact Sales", "/contact")
        />
    }
}
