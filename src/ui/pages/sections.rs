//! Sections shared by several pages

use leptos::prelude::*;

use crate::core::content::Feature;
use crate::ui::common::{ButtonVariant, LinkButton};
use crate::ui::icon::Icon;
use crate::ui::reveal::{AnimatedText, ScrollReveal};

/// Page title block at the top of every inner page
#[component]
pub fn PageHero(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <section class="page-hero">
            <div class="container narrow text-center">
                <h1 class="page-title">
                    <AnimatedText text=title delay=100 />
                </h1>
                <ScrollReveal delay=300>
                    <p class="page-subtitle">{subtitle}</p>
                </ScrollReveal>
            </div>
        </section>
    }
}

/// Closing call-to-action with a primary and a secondary link
#[component]
pub fn CallToAction(
    title: &'static str,
    text: &'static str,
    primary: (&'static str, &'static str),
    secondary: (&'static str, &'static str),
) -> impl IntoView {
    let (primary_label, primary_href) = primary;
    let (secondary_label, secondary_href) = secondary;

    view! {
        <section class="section cta">
            <ScrollReveal class="container narrow text-center">
                <h2 class="section-title">{title}</h2>
                <p class="section-lead">{text}</p>
                <div class="cta-actions">
                    <LinkButton href=primary_href>{primary_label}</LinkButton>
                    <LinkButton href=secondary_href variant=ButtonVariant::Outline>
                        {secondary_label}
                    </LinkButton>
                </div>
            </ScrollReveal>
        </section>
    }
}

/// Card with an icon badge, a title and a description
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="card feature-card">
            <div class="feature-icon">
                <Icon name=feature.icon class="w-6 h-6" />
            </div>
            <h3 class="card-title">{feature.title}</h3>
            <p class="card-text">{feature.description}</p>
        </div>
    }
}
