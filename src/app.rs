use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::ui::pages::{
    ContactPage, FaqPage, FeaturesPage, HomePage, HowItWorksPage, NotFoundPage, PricingPage,
};
use crate::ui::{Footer, Header, ToastViewport, provide_theme_context, provide_toaster};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme_context();
    provide_toaster();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/madyis.css"/>
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg"/>

        <Title text="MADYIS"/>
        <Meta
            name="description"
            content="MADYIS: your branded mobile app on the App Store and Google Play plus a complete CRM, ready in 10 days."
        />

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("features") view=FeaturesPage/>
                    <Route path=StaticSegment("how-it-works") view=HowItWorksPage/>
                    <Route path=StaticSegment("pricing") view=PricingPage/>
                    <Route path=StaticSegment("faq") view=FaqPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
            <Footer/>
            <ToastViewport/>
        </Router>
    }
}
