use super::*;

#[component]
/// Material 3 common button with a pointer-driven ripple.
pub fn Button(
    #[prop(default = ButtonVariant::Filled)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<&'static str>,
    #[prop(optional)] trailing_icon: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let ripple = use_ripple(disabled);
    let has_icon = leading_icon.is_some() || trailing_icon.is_some();

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-has-icon=bool_token(has_icon)
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
                ripple.handlers.on_click.call(ev.clone());
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Ripple state=ripple />
            {leading_icon.map(|name| view! { <Icon name ui_slot="leading-icon" /> })}
            <span data-ui-slot="label">{children()}</span>
            {trailing_icon.map(|name| view! { <Icon name ui_slot="trailing-icon" /> })}
        </button>
    }
}

#[component]
/// Material 3 icon button, optionally acting as a toggle.
pub fn IconButton(
    /// Material Symbols glyph name.
    icon: &'static str,
    #[prop(default = IconButtonVariant::Standard)] variant: IconButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Toggle selection; `None` renders a plain action button.
    #[prop(optional, into)]
    selected: Option<MaybeSignal<bool>>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let ripple = use_ripple(disabled);
    let toggle = selected.is_some();
    let selected = selected.unwrap_or_default();

    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            aria-pressed=move || toggle.then(|| bool_token(selected.get()))
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-selected=move || bool_token(toggle && selected.get())
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
                ripple.handlers.on_click.call(ev.clone());
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Ripple state=ripple />
            <Icon name=icon />
        </button>
    }
}
