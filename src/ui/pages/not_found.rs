//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::common::{ButtonVariant, LinkButton};
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Answer with a real 404 when rendered on the server
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found - MADYIS" />

        <section class="page-hero not-found">
            <div class="container narrow text-center">
                <div class="not-found-icon">
                    <Icon name=icons::FILE class="w-12 h-12" />
                </div>

                <h1 class="page-title">"404"</h1>
                <h2 class="section-title">"Page Not Found"</h2>
                <p class="section-lead">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="cta-actions">
                    <LinkButton href="/">"Go Home"</LinkButton>
                    <LinkButton href="/contact" variant=ButtonVariant::Outline arrow=false>
                        "Contact Us"
                    </LinkButton>
                </div>
            </div>
        </section>
    }
}
