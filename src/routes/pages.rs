use crate::views::index::render_index_page;
use axum::response::Html;

pub async fn index_page() -> Html<String> {
    Html(render_index_page())
}
