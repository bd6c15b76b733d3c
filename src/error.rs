use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("javascript error: {0}")]
    Js(String),

    #[error("invalid motion config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for MotionError {
    fn from(value: JsValue) -> Self {
        MotionError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
