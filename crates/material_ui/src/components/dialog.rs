use super::*;

#[component]
/// Material 3 basic dialog with a scrim.
///
/// The dialog does not own its open state: scrim clicks and Escape call `on_close` and the
/// caller decides whether to flip `open`.
pub fn Dialog(
    #[prop(into)] open: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] headline: Option<String>,
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional, into)] actions: Option<ViewFn>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let headline_id = id.as_ref().map(|id| format!("{id}-headline"));
    let close = move || {
        if let Some(on_close) = on_close.as_ref() {
            on_close.call(());
        }
    };
    let surface = create_node_ref::<html::Div>();
    // Focus moves in on every open so Escape reaches the dialog's own keydown listener.
    create_effect(move |_| {
        if let Some(element) = surface.get() {
            if let Err(err) = element.focus() {
                logging::debug_warn!("dialog focus failed: {err:?}");
            }
        }
    });
    let on_keydown = move |ev: KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            close();
        }
    };

    view! {
        <Show when=move || open.get()>
            <div
                class="ui-dialog-scrim"
                data-ui-primitive="true"
                data-ui-kind="dialog-scrim"
                on:click=move |_| close()
            ></div>
            <div
                node_ref=surface
                class=merge_layout_class("ui-dialog", layout_class)
                id=id.clone()
                role="dialog"
                aria-modal="true"
                aria-labelledby=headline_id.clone()
                tabindex="-1"
                data-ui-primitive="true"
                data-ui-kind="dialog"
                data-ui-has-icon=bool_token(icon.is_some())
                on:keydown=on_keydown
            >
                {icon.map(|name| view! { <Icon name ui_slot="icon" /> })}
                {headline
                    .clone()
                    .map(|headline| {
                        view! {
                            <h2 id=headline_id.clone() data-ui-slot="headline">
                                {headline}
                            </h2>
                        }
                    })}
                <div data-ui-slot="content">{children()}</div>
                {actions.clone().map(|actions| view! { <div data-ui-slot="actions">{actions.run()}</div> })}
            </div>
        </Show>
    }
}

fn is_dismiss_key(key: &str) -> bool {
    key == "Escape"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key("Esc"));
        assert!(!is_dismiss_key(" "));
    }
}
