use super::*;

#[component]
/// Material Symbols glyph rendered from the icon font.
pub fn Icon(
    /// Symbol ligature name, e.g. `"add"` or `"close"`.
    name: &'static str,
    #[prop(optional)] ui_slot: Option<&'static str>,
) -> impl IntoView {
    view! {
        <span
            class="ui-icon material-symbols-outlined"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-slot=ui_slot
        >
            {name}
        </span>
    }
}
