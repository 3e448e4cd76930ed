use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Button variant types
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
}

/// Button size options
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

impl ButtonSize {
    fn class(&self) -> &'static str {
        match self {
            ButtonSize::Small => "btn-sm",
            ButtonSize::Medium => "",
            ButtonSize::Large => "btn-lg",
        }
    }
}

fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &str) -> String {
    ["btn-base", variant.class(), size.class(), extra]
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Call-to-action link styled as a button, with a trailing arrow
#[component]
pub fn LinkButton(
    href: &'static str,
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(default = ButtonSize::Large)]
    size: ButtonSize,
    /// Show the arrow icon after the label
    #[prop(default = true)]
    arrow: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=href class=button_classes(variant, size, "group")>
            {children()}
            {arrow.then(|| view! { <Icon name=icons::ARROW_RIGHT class="icon-btn icon-nudge"/> })}
        </a>
    }
}

/// Form submit button with a pending state
#[component]
pub fn SubmitButton(
    /// Whether the form is being submitted
    #[prop(into)]
    pending: Signal<bool>,
    /// Label while pending
    #[prop(default = "Sending...")]
    pending_label: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class=button_classes(ButtonVariant::Primary, ButtonSize::Large, "w-full")
            disabled=move || pending.get()
            aria-busy=move || pending.get().to_string()
        >
            <Show
                when=move || pending.get()
                fallback=move || children()
            >
                <Icon name=icons::LOADER class="icon-spin"/>
                {pending_label}
            </Show>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_classes() {
        assert_eq!(
            button_classes(ButtonVariant::Primary, ButtonSize::Medium, ""),
            "btn-base btn-primary"
        );
        assert_eq!(
            button_classes(ButtonVariant::Outline, ButtonSize::Large, "w-full"),
            "btn-base btn-outline btn-lg w-full"
        );
    }
}
