use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Body of the 500 page. Kept static so that a broken view engine can still
/// produce a response.
const INTERNAL_ERROR_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head><meta charset="utf-8" /><title>Internal Server Error</title></head>
  <body><h1>500 Internal Server Error</h1><p>Something went wrong.</p></body>
</html>
"#;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error(transparent)]
    Tera(#[from] tera::Error),

    #[error(transparent)]
    Http(#[from] axum::http::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Any(#[from] anyhow::Error),
}

impl Error {
    pub fn string(s: &str) -> Self {
        Self::Message(s.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!(error.msg = %self, error.details = ?self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Html(INTERNAL_ERROR_PAGE)).into_response()
    }
}
