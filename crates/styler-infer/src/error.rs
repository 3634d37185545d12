use std::fmt;
use styler_image::ConvertError;

#[derive(Debug)]
pub enum InferError {
    ModelLoad(String),
    Asset(String),
    EngineFailure(String),
    NotInitialized,
    UnknownStyle(usize),
    ShapeMismatch { expected: String, got: String },
    Convert(ConvertError),
    Config(String),
    Io(String),
}

impl fmt::Display for InferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InferError::ModelLoad(msg) => write!(f, "model load error: {msg}"),
            InferError::Asset(msg) => write!(f, "asset error: {msg}"),
            InferError::EngineFailure(msg) => write!(f, "engine failure: {msg}"),
            InferError::NotInitialized => write!(f, "style transfer is not initialized"),
            InferError::UnknownStyle(index) => write!(f, "unknown style {index}"),
            InferError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            InferError::Convert(err) => write!(f, "conversion error: {err}"),
            InferError::Config(msg) => write!(f, "config error: {msg}"),
            InferError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for InferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InferError::Convert(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConvertError> for InferError {
    fn from(err: ConvertError) -> Self {
        InferError::Convert(err)
    }
}

impl From<std::io::Error> for InferError {
    fn from(err: std::io::Error) -> Self {
        InferError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for InferError {
    fn from(err: serde_json::Error) -> Self {
        InferError::Config(err.to_string())
    }
}
