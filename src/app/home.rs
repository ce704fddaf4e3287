use super::footer::Footer;
use super::Titlebar;
use leptos::*;
use leptos_router::A;

#[component]
pub fn View() -> impl IntoView {
    view! {
        <Titlebar current_page="home"/>
        <div class="main-container">
            <div class="main">
                <div class="card">
                    <h1>"TrailBuddy"</h1>
                    <p class="subtitle">
                        "Plan your next"
                        <span>" run, "</span>
                        <span>" hike, "</span>
                        <span>" ride, "</span>
                        <span>" ... "</span>
                    </p>
                    <p class="text">
                        "TrailBuddy reads your Strava activities to suggest
                        routes and summarize your training."
                    </p>
                    <div class="buttons">
                        <A href="/legal" class="button dark clickable">"How we handle your data"</A>
                    </div>
                </div>
                <Footer/>
            </div>
        </div>
    }
}
