use leptos::*;
use leptos_router::A;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <div class="footer">
            <div class="creator-links">
                <p>
                    "Activity data "
                    <br/>
                    "powered by Strava."
                </p>
            </div>
            <div class="legal-links">
                <p>
                    <A href="/legal">"Terms & Privacy"</A>
                </p>
            </div>
        </div>
    }
}
