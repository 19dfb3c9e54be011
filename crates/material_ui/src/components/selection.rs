use super::*;

#[component]
/// Material 3 checkbox wrapping a native input.
///
/// Only the input listens for `click`: a press on the decorative slots reaches it once through
/// label activation, and keyboard toggles arrive there directly.
pub fn Checkbox(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] indeterminate: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Receives the new checked state.
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let ripple = use_ripple(disabled);

    view! {
        <label
            class=merge_layout_class("ui-checkbox", layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-mark=move || checkbox_mark_token(checked.get(), indeterminate.get())
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <span
                data-ui-slot="container"
                data-ui-state=move || {
                    interaction_token(disabled.get(), ripple.pressed.get(), ripple.hovered.get())
                }
                on:pointerenter=move |ev| ripple.handlers.on_pointerenter.call(ev)
                on:pointerleave=move |ev| ripple.handlers.on_pointerleave.call(ev)
                on:pointerdown=move |ev| ripple.handlers.on_pointerdown.call(ev)
                on:pointerup=move |ev| ripple.handlers.on_pointerup.call(ev)
                on:pointercancel=move |ev| ripple.handlers.on_pointercancel.call(ev)
            >
                <Ripple state=ripple />
                <input
                    type="checkbox"
                    data-ui-slot="input"
                    id=id
                    aria-label=move || aria_label.get()
                    aria-checked=move || {
                        if indeterminate.get() {
                            "mixed"
                        } else {
                            bool_token(checked.get())
                        }
                    }
                    prop:checked=move || checked.get()
                    prop:indeterminate=move || indeterminate.get()
                    disabled=move || disabled.get()
                    on:click=move |ev| ripple.handlers.on_click.call(ev)
                    on:change=move |ev| {
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(event_target_checked(&ev));
                        }
                    }
                />
                <span data-ui-slot="outline"></span>
                <span data-ui-slot="background"></span>
                <span data-ui-slot="mark">
                    {move || match checkbox_mark_token(checked.get(), indeterminate.get()) {
                        "indeterminate" => Some(view! { <Icon name="remove" /> }.into_view()),
                        "checked" => Some(view! { <Icon name="check" /> }.into_view()),
                        _ => None,
                    }}
                </span>
            </span>
            {children.map(|children| view! { <span data-ui-slot="label">{children()}</span> })}
        </label>
    }
}

#[component]
/// Material 3 radio button wrapping a native input.
pub fn Radio(
    /// Group name shared by mutually exclusive radios.
    name: &'static str,
    /// Value reported when this radio is chosen.
    value: &'static str,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Receives `value` when this radio becomes checked.
    #[prop(optional)]
    on_select: Option<Callback<&'static str>>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let ripple = use_ripple(disabled);

    view! {
        <label
            class=merge_layout_class("ui-radio", layout_class)
            data-ui-primitive="true"
            data-ui-kind="radio"
            data-ui-selected=move || bool_token(checked.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <span
                data-ui-slot="container"
                data-ui-state=move || {
                    interaction_token(disabled.get(), ripple.pressed.get(), ripple.hovered.get())
                }
                on:pointerenter=move |ev| ripple.handlers.on_pointerenter.call(ev)
                on:pointerleave=move |ev| ripple.handlers.on_pointerleave.call(ev)
                on:pointerdown=move |ev| ripple.handlers.on_pointerdown.call(ev)
                on:pointerup=move |ev| ripple.handlers.on_pointerup.call(ev)
                on:pointercancel=move |ev| ripple.handlers.on_pointercancel.call(ev)
            >
                <Ripple state=ripple />
                <input
                    type="radio"
                    data-ui-slot="input"
                    name=name
                    value=value
                    aria-label=move || aria_label.get()
                    prop:checked=move || checked.get()
                    disabled=move || disabled.get()
                    on:click=move |ev| ripple.handlers.on_click.call(ev)
                    on:change=move |ev| {
                        if !event_target_checked(&ev) {
                            return;
                        }
                        if let Some(on_select) = on_select.as_ref() {
                            on_select.call(value);
                        }
                    }
                />
                <span data-ui-slot="outer-circle"></span>
                <span data-ui-slot="inner-circle"></span>
            </span>
            {children.map(|children| view! { <span data-ui-slot="label">{children()}</span> })}
        </label>
    }
}

#[component]
/// Material 3 switch with explicit `role="switch"` semantics.
///
/// Keyboard activation goes through the native button click, so Space and Enter also produce a
/// centered ripple pulse.
pub fn Switch(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Show check/close glyphs inside the handle.
    #[prop(optional)]
    icons: bool,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let ripple = use_ripple(disabled);
    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        if let Some(on_toggle) = on_toggle.as_ref() {
            on_toggle.call(!checked.get_untracked());
        }
    };

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-switch", layout_class)
            role="switch"
            aria-label=move || aria_label.get()
            aria-checked=move || bool_token(checked.get())
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-slot=ui_slot
            data-ui-selected=move || bool_token(checked.get())
            data-ui-state=move || {
                interaction_token(disabled.get(), ripple.pressed.get(), ripple.hovered.get())
            }
            data-ui-disabled=move || bool_token(disabled.get())
            on:pointerenter=move |ev| ripple.handlers.on_pointerenter.call(ev)
            on:pointerleave=move |ev| ripple.handlers.on_pointerleave.call(ev)
            on:pointerdown=move |ev| ripple.handlers.on_pointerdown.call(ev)
            on:pointerup=move |ev| ripple.handlers.on_pointerup.call(ev)
            on:pointercancel=move |ev| ripple.handlers.on_pointercancel.call(ev)
            on:click=move |ev| {
                ripple.handlers.on_click.call(ev);
                handle_toggle();
            }
        >
            <span data-ui-slot="track">
                <span data-ui-slot="handle-container">
                    <Ripple state=ripple />
                    <span data-ui-slot="handle">
                        {move || {
                            icons.then(|| {
                                let name = if checked.get() { "check" } else { "close" };
                                view! { <Icon name /> }
                            })
                        }}
                    </span>
                </span>
            </span>
        </button>
    }
}
