use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use material_ui::prelude::*;

use crate::playground::RipplePlayground;

#[component]
pub fn ShowcaseApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Material 3 for Leptos" />
        <Meta name="description" content="Gallery of Material 3 widgets with pointer ripples." />

        <Router>
            <nav class="showcase-nav">
                <A href="/">"Buttons"</A>
                <A href="/selection">"Selection"</A>
                <A href="/chips">"Chips"</A>
                <A href="/dialogs">"Dialogs"</A>
                <A href="/fields">"Text fields"</A>
                <A href="/playground">"Ripple playground"</A>
            </nav>
            <main class="showcase-root">
                <Routes>
                    <Route path="" view=ButtonsPage />
                    <Route path="/selection" view=SelectionPage />
                    <Route path="/chips" view=ChipsPage />
                    <Route path="/dialogs" view=DialogsPage />
                    <Route path="/fields" view=FieldsPage />
                    <Route path="/playground" view=RipplePlayground />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn ButtonsPage() -> impl IntoView {
    let clicks = create_rw_signal(0u32);
    let favorite = create_rw_signal(false);
    let count_click = Callback::new(move |_| clicks.update(|count| *count += 1));

    view! {
        <section class="showcase-section">
            <h1>"Buttons"</h1>
            <p>{move || format!("Clicked {} times", clicks.get())}</p>
            <div class="showcase-row">
                <Button on_click=count_click>"Filled"</Button>
                <Button variant=ButtonVariant::Outlined on_click=count_click>"Outlined"</Button>
                <Button variant=ButtonVariant::Text on_click=count_click>"Text"</Button>
                <Button variant=ButtonVariant::Elevated on_click=count_click>"Elevated"</Button>
                <Button variant=ButtonVariant::Tonal leading_icon="add" on_click=count_click>
                    "Tonal"
                </Button>
                <Button disabled=true>"Disabled"</Button>
            </div>
            <div class="showcase-row">
                <IconButton icon="settings" aria_label="Settings" on_click=count_click />
                <IconButton
                    icon="favorite"
                    variant=IconButtonVariant::Filled
                    aria_label="Favorite"
                    selected=Signal::from(favorite)
                    on_click=Callback::new(move |_| favorite.update(|value| *value = !*value))
                />
                <IconButton icon="delete" variant=IconButtonVariant::Outlined disabled=true />
            </div>
        </section>
    }
}

#[component]
fn SelectionPage() -> impl IntoView {
    let notifications = create_rw_signal(true);
    let newsletter = create_rw_signal(false);
    let wifi = create_rw_signal(true);
    let density = create_rw_signal("comfortable");
    let all_checked = move || notifications.get() && newsletter.get();
    let some_checked = move || notifications.get() != newsletter.get();

    view! {
        <section class="showcase-section">
            <h1>"Selection controls"</h1>
            <div class="showcase-column">
                <Checkbox
                    checked=Signal::derive(all_checked)
                    indeterminate=Signal::derive(some_checked)
                    on_change=Callback::new(move |checked| {
                        notifications.set(checked);
                        newsletter.set(checked);
                    })
                >
                    "All"
                </Checkbox>
                <Checkbox
                    checked=Signal::from(notifications)
                    on_change=Callback::new(move |checked| notifications.set(checked))
                >
                    "Notifications"
                </Checkbox>
                <Checkbox
                    checked=Signal::from(newsletter)
                    on_change=Callback::new(move |checked| newsletter.set(checked))
                >
                    "Newsletter"
                </Checkbox>
            </div>
            <div class="showcase-column" role="radiogroup" aria-label="Density">
                {["compact", "comfortable", "spacious"]
                    .into_iter()
                    .map(|option| {
                        view! {
                            <Radio
                                name="density"
                                value=option
                                checked=Signal::derive(move || density.get() == option)
                                on_select=Callback::new(move |value| density.set(value))
                            >
                                {option}
                            </Radio>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="showcase-row">
                <Switch
                    aria_label="Wi-Fi"
                    icons=true
                    checked=Signal::from(wifi)
                    on_toggle=Callback::new(move |next| wifi.set(next))
                />
                <Switch aria_label="Unavailable" disabled=true />
            </div>
        </section>
    }
}

#[component]
fn ChipsPage() -> impl IntoView {
    let vegetarian = create_rw_signal(false);
    let tags = create_rw_signal(vec!["rust", "leptos", "material"]);

    view! {
        <section class="showcase-section">
            <h1>"Chips"</h1>
            <div class="showcase-row">
                <Chip leading_icon="event">"Add to calendar"</Chip>
                <Chip elevated=true leading_icon="map">"Directions"</Chip>
                <Chip
                    kind=ChipKind::Filter
                    selected=Signal::from(vegetarian)
                    on_click=Callback::new(move |_| vegetarian.update(|value| *value = !*value))
                >
                    "Vegetarian"
                </Chip>
                <Chip kind=ChipKind::Suggestion>"Open now"</Chip>
                <Chip kind=ChipKind::Assist disabled=true>"Offline"</Chip>
            </div>
            <div class="showcase-row">
                <For each=move || tags.get() key=|tag| *tag let:tag>
                    <Chip
                        kind=ChipKind::Input
                        on_remove=Callback::new(move |_| {
                            tags.update(|tags| tags.retain(|existing| *existing != tag))
                        })
                    >
                        {tag}
                    </Chip>
                </For>
            </div>
        </section>
    }
}

#[component]
fn DialogsPage() -> impl IntoView {
    let open = create_rw_signal(false);
    let outcome = create_rw_signal(String::from("No choice yet"));
    let close = Callback::new(move |_| open.set(false));

    view! {
        <section class="showcase-section">
            <h1>"Dialogs"</h1>
            <p>{move || outcome.get()}</p>
            <Button variant=ButtonVariant::Tonal on_click=Callback::new(move |_| open.set(true))>
                "Delete draft"
            </Button>
            <Dialog
                open=Signal::from(open)
                id="delete-draft"
                icon="delete"
                headline="Discard draft?"
                on_close=close
                actions=move || {
                    view! {
                        <Button
                            variant=ButtonVariant::Text
                            on_click=Callback::new(move |_| {
                                outcome.set("Kept the draft".to_string());
                                open.set(false);
                            })
                        >
                            "Cancel"
                        </Button>
                        <Button
                            variant=ButtonVariant::Text
                            on_click=Callback::new(move |_| {
                                outcome.set("Discarded the draft".to_string());
                                open.set(false);
                            })
                        >
                            "Discard"
                        </Button>
                    }
                }
            >
                "This removes the draft from this device. It cannot be restored."
            </Dialog>
        </section>
    }
}

#[component]
fn FieldsPage() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let email_error = create_memo(move |_| {
        email.with(|email| !email.is_empty() && !email.contains('@'))
    });

    view! {
        <section class="showcase-section">
            <h1>"Text fields"</h1>
            <div class="showcase-column">
                <TextField
                    label="Name"
                    value=Signal::from(name)
                    supporting_text="As it appears on your account"
                    on_input=Callback::new(move |value| name.set(value))
                />
                <TextField
                    variant=TextFieldVariant::Outlined
                    label="Email"
                    input_type="email"
                    leading_icon="mail"
                    value=Signal::from(email)
                    error=Signal::from(email_error)
                    supporting_text=Signal::derive(move || {
                        if email_error.get() {
                            "Enter a valid email address".to_string()
                        } else {
                            String::new()
                        }
                    })
                    on_input=Callback::new(move |value| email.set(value))
                />
                <TextField label="Locked" value="read only" disabled=true />
            </div>
        </section>
    }
}
