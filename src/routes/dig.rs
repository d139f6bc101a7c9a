use crate::forms::DigForm;
use crate::models::DigResponse;
use crate::routes::AppState;
use crate::views::dig::render_dig_results;
use axum::{Form, Json, extract::State, http::StatusCode, response::Html};

pub async fn dig_api(
    State(state): State<AppState>,
    Form(form): Form<DigForm>,
) -> (StatusCode, Json<DigResponse>) {
    let (status, response) = run_dig(&state, form).await;
    (status, Json(response))
}

pub async fn dig_partial(
    State(state): State<AppState>,
    Form(form): Form<DigForm>,
) -> Html<String> {
    let (_, response) = run_dig(&state, form).await;
    Html(render_dig_results(&response))
}

async fn run_dig(state: &AppState, form: DigForm) -> (StatusCode, DigResponse) {
    let request = form.into_request();

    let mut response = DigResponse {
        domain: request.domain.clone(),
        record_type: request.record_type.clone(),
        server: request.server.clone(),
        results: Vec::new(),
        error: None,
    };

    if request.domain.is_empty() {
        response.error = Some("domain must not be empty".to_string());
        return (StatusCode::BAD_REQUEST, response);
    }

    match state.dig.query(&request).await {
        Ok(results) => {
            tracing::info!(
                "dig {} {} @{}: {} records",
                request.domain,
                request.record_type,
                request.server,
                results.len(),
            );
            response.results = results;
            (StatusCode::OK, response)
        }
        Err(message) => {
            tracing::warn!(
                "dig {} {} @{} failed: {message}",
                request.domain,
                request.record_type,
                request.server,
            );
            response.error = Some(message);
            (StatusCode::INTERNAL_SERVER_ERROR, response)
        }
    }
}
