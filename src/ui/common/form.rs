use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Inline error under a field, if any
fn field_error(error: Option<Signal<Option<String>>>) -> impl IntoView {
    move || {
        error.and_then(|e| e.get()).map(|err| {
            view! {
                <p class="field-error" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{err}</span>
                </p>
            }
        })
    }
}

/// Labelled input with an optional error message
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Element id, also used by the label
    id: &'static str,
    /// Input type (text, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="label" for=id>{label}</label>
            <input
                id=id
                name=id
                type=input_type
                class="input-base"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {field_error(error)}
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    label: &'static str,
    id: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    /// Number of rows
    #[prop(default = 6)]
    rows: u32,
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="label" for=id>{label}</label>
            <textarea
                id=id
                name=id
                class="input-base resize-none"
                class:input-invalid=move || error.and_then(|e| e.get()).is_some()
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {field_error(error)}
        </div>
    }
}

/// Select/dropdown component
#[component]
pub fn SelectField(
    label: &'static str,
    id: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(&'static str, &'static str)>,
) -> impl IntoView {
    view! {
        <div class="select-field">
            <label class="label" for=id>{label}</label>
            <select
                id=id
                class="select-base"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, text)| view! { <option value=val>{text}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
