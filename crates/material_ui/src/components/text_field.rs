use super::*;

#[component]
/// Material 3 text field with a floating label and supporting text.
pub fn TextField(
    #[prop(default = TextFieldVariant::Filled)] variant: TextFieldVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] supporting_text: MaybeSignal<String>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] leading_icon: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] required: MaybeSignal<bool>,
    #[prop(optional, into)] error: MaybeSignal<bool>,
    /// Receives the full input value on every edit.
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    let focused = create_rw_signal(false);
    let populated = {
        let value = value.clone();
        create_memo(move |_| value.with(|value| !value.is_empty()))
    };
    let has_supporting_text = {
        let supporting_text = supporting_text.clone();
        create_memo(move |_| supporting_text.with(|text| !text.is_empty()))
    };
    let aria_label = label.clone();

    view! {
        <label
            class=merge_layout_class("ui-text-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text-field"
            data-ui-variant=variant.token()
            data-ui-label=move || label_position_token(focused.get(), populated.get())
            data-ui-focused=move || bool_token(focused.get())
            data-ui-populated=move || bool_token(populated.get())
            data-ui-error=move || bool_token(error.get())
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <span data-ui-slot="container">
                {leading_icon.map(|name| view! { <Icon name ui_slot="leading-icon" /> })}
                {label.map(|label| view! { <span data-ui-slot="label">{label}</span> })}
                <input
                    id=id
                    type=input_type.unwrap_or("text")
                    placeholder=placeholder
                    aria-label=aria_label
                    aria-invalid=move || bool_token(error.get())
                    autocomplete=autocomplete
                    node_ref=node_ref
                    prop:value=move || value.get()
                    required=move || required.get()
                    disabled=move || disabled.get()
                    on:input=move |ev| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(event_target_value(&ev));
                        }
                    }
                    on:keydown=move |ev| {
                        if let Some(on_keydown) = on_keydown.as_ref() {
                            on_keydown.call(ev);
                        }
                    }
                    on:focus=move |_| focused.set(true)
                    on:blur=move |_| focused.set(false)
                />
                {match variant {
                    TextFieldVariant::Filled => {
                        view! { <span data-ui-slot="active-indicator"></span> }.into_view()
                    }
                    TextFieldVariant::Outlined => {
                        view! { <span data-ui-slot="outline"></span> }.into_view()
                    }
                }}
            </span>
            <Show when=move || has_supporting_text.get()>
                <span data-ui-slot="supporting-text">
                    {
                        let supporting_text = supporting_text.clone();
                        move || supporting_text.get()
                    }
                </span>
            </Show>
        </label>
    }
}
