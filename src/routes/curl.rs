use crate::forms::CurlForm;
use crate::models::CurlResponse;
use crate::routes::AppState;
use crate::views::curl::render_curl_result;
use axum::{Form, Json, extract::State, http::StatusCode, response::Html};

pub async fn curl_api(
    State(state): State<AppState>,
    Form(form): Form<CurlForm>,
) -> (StatusCode, Json<CurlResponse>) {
    let (status, response) = run_curl(&state, form).await;
    (status, Json(response))
}

pub async fn curl_partial(
    State(state): State<AppState>,
    Form(form): Form<CurlForm>,
) -> Html<String> {
    let (_, response) = run_curl(&state, form).await;
    Html(render_curl_result(&response))
}

async fn run_curl(state: &AppState, form: CurlForm) -> (StatusCode, CurlResponse) {
    let request = match form.into_request() {
        Ok(request) => request,
        Err(message) => {
            return (
                StatusCode::BAD_REQUEST,
                CurlResponse::from_error(message),
            );
        }
    };

    if request.url.trim().is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            CurlResponse::from_error("url must not be empty".to_string()),
        );
    }

    match state.curl.execute(request).await {
        Ok(response) => {
            tracing::info!(
                "curl {} {}: {} in {}ms",
                response.method,
                response.url,
                response.status_code,
                response.response_time_ms,
            );
            (StatusCode::OK, response)
        }
        Err(message) => {
            tracing::warn!("curl request failed: {message}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                CurlResponse::from_error(message),
            )
        }
    }
}
