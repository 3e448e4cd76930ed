pub mod browser;
pub mod common;
pub mod counter;
pub mod icon;
pub mod layout;
pub mod orbital;
pub mod pages;
pub mod reveal;
pub mod theme;
pub mod toast;
pub mod trail;
pub mod visibility;

pub use counter::AnimatedCounter;
pub use icon::{Icon, icons};
pub use layout::{Footer, Header};
pub use orbital::OrbitalFeatureCards;
pub use reveal::{AnimatedText, ScrollReveal, StaggeredGrid};
pub use theme::{ThemeContext, ThemeMode, provide_theme_context, use_theme_context};
pub use toast::{ToastViewport, Toaster, provide_toaster, use_toaster};
pub use trail::MouseTrailCanvas;
pub use visibility::use_visibility;
