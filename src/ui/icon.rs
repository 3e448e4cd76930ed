use leptos::prelude::*;

/// Inline stroke icon; `name` is one of [`icons`]
#[component]
pub fn Icon(
    /// Icon name
    name: &'static str,
    /// CSS classes for sizing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icons::path(name)/>
        </svg>
    }
}

/// Predefined icon names
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const BELL: &str = "bell";
    pub const CALENDAR: &str = "calendar";
    pub const CHART: &str = "chart";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CREDIT_CARD: &str = "credit-card";
    pub const DATABASE: &str = "database";
    pub const DOLLAR: &str = "dollar";
    pub const FILE: &str = "file";
    pub const GIFT: &str = "gift";
    pub const GLOBE: &str = "globe";
    pub const LOADER: &str = "loader";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const MOON: &str = "moon";
    pub const PHONE: &str = "phone";
    pub const SMARTPHONE: &str = "smartphone";
    pub const SPARKLES: &str = "sparkles";
    pub const SUN: &str = "sun";
    pub const TRENDING_UP: &str = "trending-up";
    pub const USERS: &str = "users";
    pub const X: &str = "x";

    /// SVG path data for an icon name; unknown names draw a dot
    pub fn path(name: &str) -> &'static str {
        match name {
            ALERT_CIRCLE => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            ARROW_RIGHT => "M5 12h14M13 6l6 6-6 6",
            BELL => "M15 17h5l-1.4-1.4A2 2 0 0118 14.2V11a6 6 0 00-4-5.7V5a2 2 0 10-4 0v.3A6 6 0 006 11v3.2c0 .5-.2 1-.6 1.4L4 17h5m6 0v1a3 3 0 11-6 0v-1m6 0H9",
            CALENDAR => "M8 7V3m8 4V3M7 11h10M5 21h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v12a2 2 0 002 2z",
            CHART => "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z",
            CHECK => "M5 13l4 4L19 7",
            CHEVRON_DOWN => "M19 9l-7 7-7-7",
            CREDIT_CARD => "M3 10h18M7 15h1m4 0h1m-7 4h12a3 3 0 003-3V8a3 3 0 00-3-3H6a3 3 0 00-3 3v8a3 3 0 003 3z",
            DATABASE => "M4 7c0 2.2 3.6 4 8 4s8-1.8 8-4M4 7c0-2.2 3.6-4 8-4s8 1.8 8 4M4 7v10c0 2.2 3.6 4 8 4s8-1.8 8-4V7M4 12c0 2.2 3.6 4 8 4s8-1.8 8-4",
            DOLLAR => "M12 8c-1.7 0-3 .9-3 2s1.3 2 3 2 3 .9 3 2-1.3 2-3 2m0-8c1.1 0 2.1.4 2.6 1M12 8V7m0 1v8m0 0v1m0-1c-1.1 0-2.1-.4-2.6-1M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            FILE => "M9 12h6m-6 4h6m2 5H7a2 2 0 01-2-2V5a2 2 0 012-2h5.6a1 1 0 01.7.3l5.4 5.4a1 1 0 01.3.7V19a2 2 0 01-2 2z",
            GIFT => "M12 8v13m0-13V6a2 2 0 112 2h-2zm0 0V5.5A2.5 2.5 0 109.5 8H12zm-7 4h14M5 12a2 2 0 110-4h14a2 2 0 110 4M5 12v7a2 2 0 002 2h10a2 2 0 002-2v-7",
            GLOBE => "M21 12a9 9 0 01-9 9m9-9a9 9 0 00-9-9m9 9H3m9 9a9 9 0 01-9-9m9 9c1.7 0 3-4 3-9s-1.3-9-3-9m0 18c-1.7 0-3-4-3-9s1.3-9 3-9",
            LOADER => "M12 3a9 9 0 109 9",
            MAIL => "M3 8l7.9 5.3a2 2 0 002.2 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z",
            MAP_PIN => "M17.7 16.7L13.4 21a2 2 0 01-2.8 0l-4.3-4.3a8 8 0 1111.4 0zM15 11a3 3 0 11-6 0 3 3 0 016 0z",
            MENU => "M4 6h16M4 12h16M4 18h16",
            MOON => "M20.4 15.4A9 9 0 018.6 3.6 9 9 0 1020.4 15.4z",
            PHONE => "M3 5a2 2 0 012-2h3.3a1 1 0 01.9.7l1.5 4.5a1 1 0 01-.5 1.2l-2.3 1.1a11 11 0 005.5 5.5l1.1-2.3a1 1 0 011.2-.5l4.5 1.5a1 1 0 01.7.9V19a2 2 0 01-2 2h-1C9.7 21 3 14.3 3 6V5z",
            SMARTPHONE => "M12 18h.01M8 21h8a2 2 0 002-2V5a2 2 0 00-2-2H8a2 2 0 00-2 2v14a2 2 0 002 2z",
            SPARKLES => "M5 3v4M3 5h4M6 17v4m-2-2h4m5-16l2.3 6.9L22 12l-6.7 2.1L13 21l-2.3-6.9L4 12l6.7-2.1L13 3z",
            SUN => "M12 3v1m0 16v1m9-9h-1M4 12H3m15.4 6.4l-.7-.7M6.3 6.3l-.7-.7m12.8 0l-.7.7M6.3 17.7l-.7.7M16 12a4 4 0 11-8 0 4 4 0 018 0z",
            TRENDING_UP => "M13 7h8m0 0v8m0-8l-8 8-4-4-6 6",
            USERS => "M17 20h5v-2a3 3 0 00-5.4-1.9M17 20H7m10 0v-2c0-.7-.1-1.3-.4-1.9M7 20H2v-2a3 3 0 015.4-1.9M7 20v-2c0-.7.1-1.3.4-1.9m0 0a5 5 0 019.2 0M15 7a3 3 0 11-6 0 3 3 0 016 0z",
            X => "M6 18L18 6M6 6l12 12",
            _ => "M12 12h.01",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::icons;
    use crate::core::content::{APP_FEATURES, CRM_FEATURES, DISCOVERY_FEATURES, HIGHLIGHTS};

    #[test]
    fn test_content_icons_are_known() {
        let unknown = icons::path("no-such-icon");
        for feature in HIGHLIGHTS
            .iter()
            .chain(APP_FEATURES.iter())
            .chain(CRM_FEATURES.iter())
            .chain(DISCOVERY_FEATURES.iter())
        {
            assert_ne!(icons::path(feature.icon), unknown, "{}", feature.icon);
        }
    }
}
