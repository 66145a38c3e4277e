use crate::{view_engine::TeraView, Result};
use axum::{
    body::Body,
    http::{response::Builder, HeaderValue},
    response::{IntoResponse, Response},
};
use hyper::header;
use serde::Serialize;

pub fn empty() -> Result<Response> {
    Ok(().into_response())
}

#[must_use]
pub fn render() -> RenderBuilder {
    RenderBuilder::new()
}

#[derive(Debug, Default)]
pub struct RenderBuilder {
    response: Builder,
}

impl RenderBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            response: Builder::default(),
        }
    }

    /// Marks the response as not reusable by any cache.
    #[must_use]
    pub fn no_store(self) -> Self {
        Self {
            response: self
                .response
                .header(header::CACHE_CONTROL, HeaderValue::from_static("no-store")),
        }
    }

    pub fn view<S>(self, v: &TeraView, key: &str, data: S) -> Result<Response>
    where
        S: Serialize,
    {
        let content = v.render(key, data)?;
        self.html(&content)
    }

    pub fn html(self, content: &str) -> Result<Response> {
        Ok(self
            .response
            .header(
                header::CONTENT_TYPE,
                HeaderValue::from_static(mime::TEXT_HTML_UTF_8.as_ref()),
            )
            .body(Body::from(content.to_string()))?)
    }
}
