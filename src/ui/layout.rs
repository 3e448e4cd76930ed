//! Page chrome: fixed header with navigation and theme toggle, and footer

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::ui::icon::{Icon, icons};
use crate::ui::theme::{ThemeContext, use_theme_context};

/// Scroll offset after which the header gets its solid background
const SCROLLED_OFFSET: f64 = 10.0;

/// Site navigation as (label, path)
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("Home", "/"),
    ("Features", "/features"),
    ("How It Works", "/how-it-works"),
    ("Pricing", "/pricing"),
    ("FAQ", "/faq"),
    ("Contact", "/contact"),
];

pub const CONTACT_EMAIL: &str = "contact@madyis.com";
pub const CONTACT_PHONE: &str = "+1 (234) 567-890";
pub const CONTACT_PHONE_LINK: &str = "tel:+1234567890";

fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET
}

fn current_year() -> i32 {
    #[cfg(feature = "ssr")]
    {
        use chrono::Datelike;
        chrono::Utc::now().year()
    }
    #[cfg(not(feature = "ssr"))]
    {
        js_sys::Date::new_0().get_full_year() as i32
    }
}

/// Header with mobile menu support
#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme_context();
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let (scrolled, set_scrolled) = signal(false);

    #[cfg(not(feature = "ssr"))]
    {
        use crate::ui::browser::{EventListenerGuard, retain_until_cleanup};

        let scroll_y = || {
            leptos::web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .unwrap_or_default()
        };
        Effect::new(move |_| {
            set_scrolled.set(is_scrolled(scroll_y()));
            if let Some(guard) = EventListenerGuard::window("scroll", move |_| {
                set_scrolled.set(is_scrolled(scroll_y()));
            }) {
                retain_until_cleanup(guard);
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = set_scrolled;
    }

    // Close the mobile menu whenever the route changes
    let location = use_location();
    Effect::new(move |_| {
        location.pathname.track();
        set_mobile_menu_open.set(false);
    });

    view! {
        <header class="site-header" class:site-header-scrolled=move || scrolled.get()>
            <div class="container">
                <div class="header-bar">
                    <A href="/" attr:class="brand">
                        <Logo />
                        <span class="brand-name">"MADYIS"</span>
                    </A>

                    <div class="header-desktop">
                        <nav class="nav">
                            {NAV_LINKS
                                .into_iter()
                                .map(|(label, href)| {
                                    view! { <A href=href attr:class="nav-link">{label}</A> }
                                })
                                .collect_view()}
                        </nav>
                        <ThemeToggle theme=theme />
                    </div>

                    <button
                        class="menu-button"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get().to_string()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! { <Icon name=icons::X class="w-6 h-6" /> }
                            } else {
                                view! { <Icon name=icons::MENU class="w-6 h-6" /> }
                            }
                        }}
                    </button>
                </div>

                <div class="mobile-menu" class:mobile-menu-open=move || mobile_menu_open.get()>
                    <nav class="mobile-nav">
                        {NAV_LINKS
                            .into_iter()
                            .map(|(label, href)| {
                                view! {
                                    <A
                                        href=href
                                        attr:class="mobile-nav-link"
                                        on:click=move |_| set_mobile_menu_open.set(false)
                                    >
                                        {label}
                                    </A>
                                }
                            })
                            .collect_view()}
                        <ThemeToggle theme=theme />
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="theme-toggle"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark.get() {
                    view! { <Icon name=icons::SUN class="w-5 h-5" /> }
                } else {
                    view! { <Icon name=icons::MOON class="w-5 h-5" /> }
                }
            }}
        </button>
    }
}

#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="logo-mark" aria-hidden="true">
            <Icon name=icons::SPARKLES class="w-6 h-6" />
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="brand">
                            <Logo />
                            <span class="brand-name">"MADYIS"</span>
                        </div>
                        <p class="footer-text">
                            "The all-in-one CRM and booking app for salons, clinics and studios. Grow your business while we handle the busywork."
                        </p>
                        <ul class="footer-contacts">
                            <li>
                                <a href=format!("mailto:{CONTACT_EMAIL}") class="footer-link">
                                    <Icon name=icons::MAIL class="w-4 h-4" />
                                    {CONTACT_EMAIL}
                                </a>
                            </li>
                            <li>
                                <a href=CONTACT_PHONE_LINK class="footer-link">
                                    <Icon name=icons::PHONE class="w-4 h-4" />
                                    {CONTACT_PHONE}
                                </a>
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Product"</h4>
                        <ul class="footer-links">
                            <li><A href="/features" attr:class="footer-link">"Features"</A></li>
                            <li><A href="/how-it-works" attr:class="footer-link">"How It Works"</A></li>
                            <li><A href="/pricing" attr:class="footer-link">"Pricing"</A></li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Support"</h4>
                        <ul class="footer-links">
                            <li><A href="/faq" attr:class="footer-link">"FAQ"</A></li>
                            <li><A href="/contact" attr:class="footer-link">"Contact"</A></li>
                        </ul>
                    </div>
                </div>

                <div class="footer-bottom">
                    <span>{format!("© {} MADYIS. All rights reserved.", current_year())}</span>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrolled_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(10.0));
        assert!(is_scrolled(10.5));
    }

    #[test]
    fn test_nav_links_are_absolute() {
        assert_eq!(NAV_LINKS[0], ("Home", "/"));
        assert!(NAV_LINKS.iter().all(|(_, href)| href.starts_with('/')));
    }
}
