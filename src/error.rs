//! Crate-level error type for page bootstrapping.
//!
//! The filtering engine itself is total and never returns errors; these cover
//! config parsing and browser calls made while wiring the page.

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("browser global unavailable: {0}")]
    MissingGlobal(&'static str),
    #[error("DOM call failed: {0}")]
    Dom(String),
}

#[cfg(feature = "csr")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
