#[cfg(not(feature = "ssr"))]
pub fn main() {
    use leptos::*;
    use trailbuddy::app::App;

    _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();
    mount_to_body(|| {
        view! { <App/> }
    });
}

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::{
        body::Body as AxumBody,
        extract::{FromRef, State},
        http::Request,
        response::{IntoResponse, Response},
        routing::get,
        Router,
    };
    use dotenv::dotenv;
    use leptos::{get_configuration, provide_context, view, LeptosOptions};
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use trailbuddy::app::App;
    use trailbuddy::config::Settings;
    use trailbuddy::fileserv::file_and_error_handler;

    #[derive(FromRef, Debug, Clone)]
    struct AppState {
        leptos_options: LeptosOptions,
        settings: Settings,
    }

    async fn leptos_routes_handler(
        State(app_state): State<AppState>,
        req: Request<AxumBody>,
    ) -> Response {
        let settings = app_state.settings;
        let handler = leptos_axum::render_app_to_stream_with_context(
            app_state.leptos_options.clone(),
            move || {
                provide_context(settings);
            },
            || view! { <App/> },
        );
        handler(req).await.into_response()
    }

    // load configuration

    dotenv().ok();
    let settings = Settings::from_env()?;

    // setup logging

    simple_logger::init_with_level(settings.log_level)?;
    log::info!("dates rendered with locale {:?}", settings.date_locale);

    // configure leptos

    let conf = get_configuration(None).await?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let routes = generate_route_list(|| view! { <App/> });

    let state = AppState {
        leptos_options,
        settings,
    };

    // compose axum router

    let app = Router::new()
        .leptos_routes_with_handler(routes, get(leptos_routes_handler))
        .fallback(file_and_error_handler)
        .with_state(state);

    // serve

    log::info!("listening on http://{}", &addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;

    Ok(())
}
