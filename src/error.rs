use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::element::ObjectId;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    #[error("element {id} not found")]
    ElementNotFound { id: ObjectId },

    #[error("invalid geometry: {field} = {value}")]
    InvalidGeometry { field: &'static str, value: f64 },

    #[error("invalid scene description: {0}")]
    Scene(String),
}

impl From<serde_json::Error> for ShapeError {
    fn from(err: serde_json::Error) -> Self {
        ShapeError::Scene(err.to_string())
    }
}

impl From<ShapeError> for JsValue {
    fn from(err: ShapeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShapeError>;
