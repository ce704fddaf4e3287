use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "ssr")] {
        use axum::{
            body::{boxed, Body, BoxBody},
            extract::State,
            http::{Request, Response, StatusCode, Uri},
            response::{IntoResponse, Response as AxumResponse},
        };
        use leptos::*;
        use tower::ServiceExt;
        use tower_http::services::ServeDir;
        use crate::app::App;

        /// Serves files under `site_root`, otherwise renders the app so the
        /// router's 404 page is shown.
        pub async fn file_and_error_handler(
            uri: Uri,
            State(options): State<LeptosOptions>,
            req: Request<Body>,
        ) -> AxumResponse {
            let root = options.site_root.clone();
            match get_static_file(uri.clone(), &root).await {
                Ok(res) if res.status() == StatusCode::OK => res.into_response(),
                Ok(_) => {
                    log::debug!("no static file for {}, rendering app", uri);
                    let handler = leptos_axum::render_app_to_stream(options.to_owned(), || view! { <App/> });
                    handler(req).await.into_response()
                }
                Err(err) => err.into_response(),
            }
        }

        async fn get_static_file(uri: Uri, root: &str) -> Result<Response<BoxBody>, (StatusCode, String)> {
            let req = Request::builder()
                .uri(uri)
                .body(Body::empty())
                .map_err(|err| (StatusCode::BAD_REQUEST, format!("invalid request: {err}")))?;

            match ServeDir::new(root).oneshot(req).await {
                Ok(res) => Ok(res.map(boxed)),
                Err(err) => {
                    log::error!("couldn't serve static file: {}", err);
                    Err((
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Something went wrong: {err}"),
                    ))
                }
            }
        }
    }
}
