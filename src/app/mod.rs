mod footer;
mod home;
pub mod legal;

use crate::config::{Settings, DATE_LOCALE_META};
use crate::date::locale_tag;
use crate::error_template::{AppError, ErrorTemplate};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let date_locale = locale_tag(use_context::<Settings>().unwrap_or_default().date_locale);

    view! {
        <Title text="TrailBuddy - Terms of Service & Privacy Policy"/>
        <Stylesheet id="leptos" href="/pkg/trailbuddy.css"/>
        <meta name="viewport" content="width=device-width, initial-scale=1, maximum-scale=1" />
        <meta name="theme-color" content="#fc4c02"/>
        // read back by `hydrate()` so client-side renders use the same locale
        <meta name=DATE_LOCALE_META content=date_locale/>

        <Router fallback=|| {
            let mut outside_errors = Errors::default();
            outside_errors.insert_with_default_key(AppError::NotFound);
            view! {
                <ErrorTemplate outside_errors/>
            }
            .into_view()
        }>
            <main>
                <Routes>
                    <Route path="" view=home::View/>
                    <Route path="/legal" view=legal::View/>
                </Routes>
            </main>
        </Router>
    }
}

const LINKS: [(&str, &str); 3] = [
    ("Home", "/"),
    ("Legal", "/legal"),
    ("API Terms", "/legal#api-access"),
];

#[component]
pub fn Titlebar(current_page: &'static str) -> impl IntoView {
    let (open, set_open) = create_signal(false);

    let menu_style = move || {
        if open.get() {
            "display: flex;"
        } else {
            "display: none;"
        }
    };

    let links = LINKS
        .iter()
        .map(|&(text, href)| {
            let marker = if current_page.eq_ignore_ascii_case(text) {
                " <- you are here"
            } else {
                ""
            };
            view! {
                <A href=href class="item">
                    <p class="text">
                        {text}
                        <span>{marker}</span>
                    </p>
                </A>
            }
        })
        .collect_view();

    view! {
        <div class="titlebar">
            <Bar open set_open/>
            <div class="menu" style=menu_style>
                <Bar open set_open/>
                {links}
            </div>
        </div>
    }
}

#[component]
pub fn Bar(open: ReadSignal<bool>, set_open: WriteSignal<bool>) -> impl IntoView {
    let burger_menu_classes = move || {
        if open.get() {
            "burger-menu-button open"
        } else {
            "burger-menu-button"
        }
    };

    view! {
        <div class="bar-container">
            <div class="bar">
                <button class=burger_menu_classes on:click=move |_| set_open.update(|open| *open = !*open)>
                    <div/>
                    <div/>
                    <div/>
                </button>
                <p class="title"><A href="/">"TrailBuddy"</A></p>
            </div>
        </div>
    }
}
