use axum::{debug_handler, extract::State, response::Response};

use crate::{domain::HomePage, startup::AppState, Result};

use super::format;

/// `GET /`. One store query per request, rendered fresh every time.
#[debug_handler]
pub async fn home(State(state): State<AppState>) -> Result<Response> {
    let user = state.users.find_first().await?;
    let page = HomePage::new(user.as_ref(), state.page.password_display);
    format::render()
        .no_store()
        .view(&state.tera_engine, "home.html", page)
}
