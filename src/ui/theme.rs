//! Theme context module for light/dark/system theme
//!
//! Provides:
//! - ThemeMode enum (Light, Dark, System)
//! - ThemeContext for reactive theme state
//! - System theme detection via prefers-color-scheme
//! - LocalStorage persistence under `madyis-theme`

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// LocalStorage key of the persisted preference
pub const THEME_STORAGE_KEY: &str = "madyis-theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Parse a stored value; anything unknown is the default mode
    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            "system" => ThemeMode::System,
            _ => ThemeMode::Light,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
            ThemeMode::System => "System",
        }
    }

    /// Effective darkness given the OS preference
    pub fn resolve(&self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeMode::Dark => true,
            ThemeMode::Light => false,
            ThemeMode::System => system_prefers_dark,
        }
    }

    /// Mode selected by the header toggle: flips the effective theme
    pub fn toggled(&self, system_prefers_dark: bool) -> Self {
        if self.resolve(system_prefers_dark) {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode setting
    pub mode: RwSignal<ThemeMode>,
    /// Whether the current effective theme is dark (considering system mode)
    pub is_dark: Memo<bool>,
    /// System prefers dark mode
    pub system_prefers_dark: RwSignal<bool>,
}

impl ThemeContext {
    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        persist_theme(mode);
    }

    /// Switch between light and dark
    pub fn toggle(&self) {
        let next = self
            .mode
            .get_untracked()
            .toggled(self.system_prefers_dark.get_untracked());
        self.set_mode(next);
    }
}

fn persist_theme(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

/// Apply the dark class to the document element
#[cfg(not(feature = "ssr"))]
fn apply_theme_class(is_dark: bool) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = html.class_list();
        let _ = if is_dark {
            class_list.add_1("dark")
        } else {
            class_list.remove_1("dark")
        };
    }
}

/// Load theme from localStorage
fn load_persisted_theme() -> ThemeMode {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(value)) = storage.get_item(THEME_STORAGE_KEY) {
                    return ThemeMode::parse(&value);
                }
            }
        }
    }
    ThemeMode::default()
}

/// Detect system color scheme preference
fn detect_system_prefers_dark() -> bool {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(media_query)) = window.match_media("(prefers-color-scheme: dark)") {
                return media_query.matches();
            }
        }
    }
    false
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(load_persisted_theme());
    let system_prefers_dark = RwSignal::new(detect_system_prefers_dark());

    let is_dark = Memo::new(move |_| mode.get().resolve(system_prefers_dark.get()));

    let ctx = ThemeContext {
        mode,
        is_dark,
        system_prefers_dark,
    };

    // Follow OS scheme changes; the listener lives as long as the app owner
    #[cfg(not(feature = "ssr"))]
    {
        use super::browser::retain_until_cleanup;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        if let Some(Ok(Some(media_query))) =
            web_sys::window().map(|w| w.match_media("(prefers-color-scheme: dark)"))
        {
            let handler = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(
                move |e: web_sys::MediaQueryListEvent| {
                    system_prefers_dark.set(e.matches());
                },
            );
            let _ = media_query
                .add_event_listener_with_callback("change", handler.as_ref().unchecked_ref());
            retain_until_cleanup(MediaListener {
                query: media_query,
                handler,
            });
        }

        Effect::new(move |_| apply_theme_class(is_dark.get()));
    }

    provide_context(ctx);

    ctx
}

/// Media query listener removed on drop
#[cfg(not(feature = "ssr"))]
struct MediaListener {
    query: web_sys::MediaQueryList,
    handler: wasm_bindgen::closure::Closure<dyn Fn(web_sys::MediaQueryListEvent)>,
}

#[cfg(not(feature = "ssr"))]
impl Drop for MediaListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.handler.as_ref().unchecked_ref());
    }
}

/// Use theme context from anywhere in the component tree
pub fn use_theme_context() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_string_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(ThemeMode::parse(mode.as_str()), mode);
        }
        assert_eq!(ThemeMode::parse("auto"), ThemeMode::Light);
        assert_eq!(ThemeMode::parse(""), ThemeMode::Light);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn test_resolve() {
        assert!(ThemeMode::Dark.resolve(false));
        assert!(!ThemeMode::Light.resolve(true));
        assert!(ThemeMode::System.resolve(true));
        assert!(!ThemeMode::System.resolve(false));
    }

    #[test]
    fn test_toggle_flips_effective_theme() {
        assert_eq!(ThemeMode::Light.toggled(true), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(false), ThemeMode::Light);
        assert_eq!(ThemeMode::System.toggled(true), ThemeMode::Light);
        assert_eq!(ThemeMode::System.toggled(false), ThemeMode::Dark);
    }
}
