use cfg_if::cfg_if;

pub mod app;
pub mod config;
pub mod content;
pub mod date;
pub mod error_template;
pub mod fileserv;

cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use wasm_bindgen::prelude::wasm_bindgen;
        use crate::app::App;
        use crate::config::{Settings, DATE_LOCALE_META};
        use leptos::{provide_context, view};

        fn settings_from_page() -> Settings {
            let tag = leptos::document()
                .query_selector(&format!("meta[name=\"{DATE_LOCALE_META}\"]"))
                .ok()
                .flatten()
                .and_then(|meta| meta.get_attribute("content"));
            Settings::from_locale_tag(tag.as_deref())
        }

        #[wasm_bindgen]
        pub fn hydrate() {
            _ = console_log::init_with_level(log::Level::Debug);
            console_error_panic_hook::set_once();

            let settings = settings_from_page();
            leptos::mount_to_body(move || {
                provide_context(settings);
                view! { <App/> }
            });
        }
    }
}
