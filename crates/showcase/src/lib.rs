mod gallery;
mod playground;

pub use gallery::ShowcaseApp;
pub use playground::parse_ripple_config;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}
