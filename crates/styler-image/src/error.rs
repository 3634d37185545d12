use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ConvertError {
    InvalidGeometry(String),
    UnsupportedPixelStride(usize),
    InvalidNormalization(String),
    ShapeMismatch { expected: String, got: String },
    Tensor(styler_base::TensorError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidGeometry(msg) => write!(f, "invalid geometry: {msg}"),
            ConvertError::UnsupportedPixelStride(stride) => {
                write!(f, "unsupported pixel stride {stride}, expected 1 or 2")
            }
            ConvertError::InvalidNormalization(msg) => write!(f, "invalid normalization: {msg}"),
            ConvertError::ShapeMismatch { expected, got } => {
                write!(f, "shape mismatch: expected {expected}, got {got}")
            }
            ConvertError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<styler_base::TensorError> for ConvertError {
    fn from(err: styler_base::TensorError) -> Self {
        ConvertError::Tensor(err)
    }
}
