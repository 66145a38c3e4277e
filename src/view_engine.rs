use std::path::Path;

use serde::Serialize;

use crate::{errors::Error, Result};

const VIEWS_DIR: &str = "assets/views";

#[derive(Debug, Clone)]
pub struct TeraView {
    pub tera: tera::Tera,
}

impl TeraView {
    pub fn build() -> Result<Self> {
        Self::from_custom_dir(&VIEWS_DIR)
    }

    pub fn from_custom_dir<P: AsRef<Path>>(path: &P) -> Result<Self> {
        if !path.as_ref().exists() {
            return Err(Error::string(&format!(
                "missing views directory: `{}`",
                path.as_ref().display()
            )));
        }

        let tera = tera::Tera::new(
            path.as_ref()
                .join("**")
                .join("*.html")
                .to_str()
                .ok_or_else(|| Error::string("invalid blob"))?,
        )?;
        Ok(Self { tera })
    }

    /// Renders `key` with HTML autoescaping, which tera enables for `.html`.
    pub fn render<S: Serialize>(&self, key: &str, data: S) -> Result<String> {
        let context = tera::Context::from_serialize(data)?;
        Ok(self.tera.render(key, &context)?)
    }
}
