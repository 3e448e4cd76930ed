//! Home page: hero with the cursor trail, highlights, CRM modules,
//! directory statistics and a closing call to action

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use super::sections::{CallToAction, FeatureCard};
use crate::core::Direction;
use crate::core::content::{COUNTRY_STATS, CRM_MODULES, HIGHLIGHTS};
use crate::ui::common::{ButtonVariant, LinkButton};
use crate::ui::counter::AnimatedCounter;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::{AnimatedText, ScrollReveal, StaggeredGrid};
use crate::ui::trail::MouseTrailCanvas;

#[component]
pub fn HomePage() -> impl IntoView {
    let highlights: Vec<AnyView> = HIGHLIGHTS
        .into_iter()
        .map(|feature| view! { <FeatureCard feature=feature /> }.into_any())
        .collect();

    let modules: Vec<AnyView> = CRM_MODULES
        .into_iter()
        .map(|module| {
            view! {
                <div class="module-item">
                    <Icon name=icons::CHECK class="w-5 h-5 text-accent" />
                    <span>{module}</span>
                </div>
            }
            .into_any()
        })
        .collect();

    let stats: Vec<AnyView> = COUNTRY_STATS
        .into_iter()
        .map(|stat| {
            view! {
                <div class="stat card">
                    <Icon name=icons::MAP_PIN class="w-6 h-6 text-accent" />
                    <AnimatedCounter end=stat.users prefix="+" class="stat-value" />
                    <p class="stat-label">{stat.name}</p>
                    <p class="stat-caption">"Active Users"</p>
                </div>
            }
            .into_any()
        })
        .collect();

    view! {
        <Title text="MADYIS - Your Business-in-a-Box" />
        <Meta
            name="description"
            content="Native mobile application in your name plus a complete CRM. 100% white label, ready in 10 days."
        />

        <section class="hero">
            <MouseTrailCanvas />
            <div class="container hero-content text-center">
                <ScrollReveal delay=200>
                    <div class="pill">
                        <Icon name=icons::SPARKLES class="w-4 h-4" />
                        "Trusted by 300+ businesses worldwide"
                    </div>
                </ScrollReveal>

                <h1 class="hero-title">
                    <AnimatedText text="Your Business-in-a-Box" delay=400 />
                </h1>

                <ScrollReveal delay=500>
                    <p class="hero-subtitle">
                        "Your entire digital ecosystem, ready in "
                        <span class="text-accent">"10 days"</span>
                    </p>
                </ScrollReveal>
                <ScrollReveal delay=700>
                    <p class="hero-lead">
                        "Native full blended mobile application in your name (Apple & Google Play) + Ultra complete CRM. 100% White Label."
                    </p>
                </ScrollReveal>

                <ScrollReveal delay=900>
                    <div class="cta-actions">
                        <LinkButton href="/contact">"Watch A Demo"</LinkButton>
                        <LinkButton href="/pricing" variant=ButtonVariant::Outline>
                            "Launch My Ecosystem"
                        </LinkButton>
                    </div>
                </ScrollReveal>

                <StaggeredGrid stagger=150 class="grid grid-3" items=highlights />

                <ScrollReveal delay=1200>
                    <div class="pill pill-muted">
                        "Control operations, finance, marketing and team from a "
                        <span class="text-accent">"single dashboard"</span>
                    </div>
                </ScrollReveal>
            </div>
        </section>

        <section class="section section-tinted">
            <div class="container">
                <ScrollReveal class="section-header">
                    <h2 class="section-title">"The CRM that handles absolutely everything"</h2>
                    <p class="section-lead">
                        "Operations, finance, customer acquisition, team management and marketing. The CRM runs internal management: staff, HR, expenses, reporting. The client facing application handles bookings, payments and loyalty. Both stay synchronized."
                    </p>
                </ScrollReveal>

                <StaggeredGrid stagger=80 direction=Direction::Left class="module-list" items=modules />

                <ScrollReveal class="text-center">
                    <LinkButton href="/features">"Explore the CRM"</LinkButton>
                </ScrollReveal>
            </div>
        </section>

        <section class="section section-dark">
            <div class="container">
                <ScrollReveal class="section-header">
                    <h2 class="section-title">"Geo-Discovery That Drives Results"</h2>
                    <p class="section-lead">
                        "Our smart map helps people find and trust businesses closest to them."
                    </p>
                </ScrollReveal>

                <StaggeredGrid class="grid grid-4" items=stats />
            </div>
        </section>

        <CallToAction
            title="Get Your App Now"
            text="Get started with your own branded app. Accept bookings, engage customers, and grow on the go."
            primary=("Launch Your Ecosystem", "/pricing")
            secondary=("Book a Demo", "/contact")
        />
    }
}
