//! Interactive ripple tuning page.

use leptos::*;
use material_ui::prelude::*;
use material_ui::use_ripple_with_config;
use ripple_core::RippleConfig;

/// Parses a JSON ripple config; missing fields keep the Material 3 defaults.
pub fn parse_ripple_config(raw: &str) -> Result<RippleConfig, String> {
    let config: RippleConfig = serde_json::from_str(raw).map_err(|err| err.to_string())?;
    config.validate().map_err(|err| err.to_string())?;
    Ok(config)
}

fn default_config_json() -> String {
    serde_json::to_string_pretty(&RippleConfig::default()).unwrap_or_else(|_| "{}".to_string())
}

#[component]
pub fn RipplePlayground() -> impl IntoView {
    let draft = create_rw_signal(default_config_json());
    let active = create_rw_signal(RippleConfig::default());
    let parse_error = create_rw_signal::<Option<String>>(None);

    let apply = Callback::new(move |_| match parse_ripple_config(&draft.get_untracked()) {
        Ok(config) => {
            logging::log!("applied ripple config: {config:?}");
            parse_error.set(None);
            active.set(config);
        }
        Err(err) => parse_error.set(Some(err)),
    });

    view! {
        <section class="showcase-section">
            <h1>"Ripple playground"</h1>
            <div class="showcase-row">
                {move || {
                    let config = active.get();
                    view! { <PlaygroundSurface config /> }
                }}
            </div>
            <textarea
                class="showcase-config"
                spellcheck="false"
                prop:value=move || draft.get()
                on:input=move |ev| draft.set(event_target_value(&ev))
            ></textarea>
            <div class="showcase-row">
                <Button variant=ButtonVariant::Tonal on_click=apply>"Apply"</Button>
                <Button
                    variant=ButtonVariant::Text
                    on_click=Callback::new(move |_| {
                        draft.set(default_config_json());
                        parse_error.set(None);
                        active.set(RippleConfig::default());
                    })
                >
                    "Reset"
                </Button>
            </div>
            <TextField
                label="Config status"
                value=Signal::derive(move || {
                    parse_error.get().unwrap_or_else(|| "Config applied".to_string())
                })
                error=Signal::derive(move || parse_error.get().is_some())
                disabled=true
            />
        </section>
    }
}

/// Bare surface driven directly by a ripple, with its flags printed underneath.
#[component]
fn PlaygroundSurface(config: RippleConfig) -> impl IntoView {
    let ripple = use_ripple_with_config(false.into(), config);

    view! {
        <div
            class="showcase-surface"
            tabindex="0"
            role="button"
            on:pointerenter=move |ev| ripple.handlers.on_pointerenter.call(ev)
            on:pointerleave=move |ev| ripple.handlers.on_pointerleave.call(ev)
            on:pointerdown=move |ev| ripple.handlers.on_pointerdown.call(ev)
            on:pointerup=move |ev| ripple.handlers.on_pointerup.call(ev)
            on:pointercancel=move |ev| ripple.handlers.on_pointercancel.call(ev)
            on:click=move |ev| ripple.handlers.on_click.call(ev)
        >
            <Ripple state=ripple />
            <span>
                {move || {
                    format!(
                        "hovered: {} / pressed: {}",
                        ripple.hovered.get(),
                        ripple.pressed.get(),
                    )
                }}
            </span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = parse_ripple_config(r#"{"minimum_press_ms": 300}"#).expect("config");

        assert_eq!(config.minimum_press_ms, 300.0);
        assert_eq!(config.touch_delay_ms, RippleConfig::default().touch_delay_ms);
    }

    #[test]
    fn invalid_json_and_invalid_values_are_reported() {
        assert!(parse_ripple_config("{").is_err());

        let err = parse_ripple_config(r#"{"touch_delay_ms": -5}"#).expect_err("negative delay");
        assert!(err.contains("touch_delay_ms"), "unexpected error: {err}");
    }

    #[test]
    fn default_json_round_trips() {
        let parsed = parse_ripple_config(&default_config_json()).expect("defaults");

        assert_eq!(parsed, RippleConfig::default());
    }
}
