use super::*;

#[component]
/// Material 3 chip covering the assist, filter, input, and suggestion families.
pub fn Chip(
    #[prop(default = ChipKind::Assist)] kind: ChipKind,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    /// Selection state; only read by filter chips.
    #[prop(optional, into)]
    selected: MaybeSignal<bool>,
    /// Raised (shadowed) container for assist and suggestion chips.
    #[prop(optional)]
    elevated: bool,
    #[prop(optional)] leading_icon: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    /// Called by the trailing remove button of input chips.
    #[prop(optional)]
    on_remove: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let ripple = use_ripple(disabled);
    let selectable = kind.is_selectable();
    let is_selected = move || selectable && selected.get();
    let removable = matches!(kind, ChipKind::Input) && on_remove.is_some();

    view! {
        <span
            class=merge_layout_class("ui-chip", layout_class)
            data-ui-primitive="true"
            data-ui-kind="chip"
            data-ui-variant=kind.token()
            data-ui-elevated=bool_token(elevated)
            data-ui-selected=move || bool_token(is_selected())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <button
                type="button"
                aria-label=move || aria_label.get()
                aria-pressed=move || selectable.then(|| bool_token(is_selected()))
                disabled=move || disabled.get()
                data-ui-slot="action"
                data-ui-state=move || {
                    interaction_token(disabled.get(), ripple.pressed.get(), ripple.hovered.get())
                }
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
                {move || {
                    if is_selected() {
                        Some(view! { <Icon name="check" ui_slot="leading-icon" /> }.into_view())
                    } else {
                        leading_icon
                            .map(|name| view! { <Icon name ui_slot="leading-icon" /> }.into_view())
                    }
                }}
                <span data-ui-slot="label">{children()}</span>
            </button>
            {removable
                .then(|| {
                    view! {
                        <button
                            type="button"
                            aria-label="Remove"
                            disabled=move || disabled.get()
                            data-ui-slot="remove"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                if let Some(on_remove) = on_remove.as_ref() {
                                    on_remove.call(());
                                }
                            }
                        >
                            <Icon name="close" />
                        </button>
                    }
                })}
        </span>
    }
}
