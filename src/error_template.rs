use http::status::StatusCode;
use leptos::*;
use thiserror::Error;

#[cfg(feature = "ssr")]
use leptos_axum::ResponseOptions;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[component]
pub fn ErrorTemplate(
    #[prop(optional)] outside_errors: Option<Errors>,
    #[prop(optional)] errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = match (outside_errors, errors) {
        (Some(errors), _) => errors,
        (None, Some(errors)) => errors.get_untracked(),
        (None, None) => Errors::default(),
    };

    let errors: Vec<AppError> = errors
        .into_iter()
        .filter_map(|(_, err)| err.downcast_ref::<AppError>().cloned())
        .collect();

    #[cfg(feature = "ssr")]
    {
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    log::debug!("rendering error page: {:?}", errors);

    let rows = errors
        .into_iter()
        .map(|error| {
            view! {
                <h2>{error.status_code().to_string()}</h2>
                <p>"Error: " {error.to_string()}</p>
            }
        })
        .collect_view();

    view! {
        <div class="main-container mg">
            <div class="text-content">
                <h1>"Something went wrong"</h1>
                {rows}
                <p><a href="/">"Back to TrailBuddy"</a></p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_404() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::NotFound.to_string(), "Not Found");
    }
}
