use std::fmt;
use styler_infer::InferError;

#[derive(Debug)]
pub enum BridgeError {
    InvalidArgument(String),
    Infer(InferError),
    Jni(String),
}

impl BridgeError {
    /// Java exception class thrown for this error.
    pub fn exception_class(&self) -> &'static str {
        match self {
            BridgeError::InvalidArgument(_) => "java/lang/IllegalArgumentException",
            BridgeError::Infer(InferError::NotInitialized) => "java/lang/IllegalStateException",
            BridgeError::Infer(_) | BridgeError::Jni(_) => "java/lang/RuntimeException",
        }
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeError::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            BridgeError::Infer(err) => write!(f, "{err}"),
            BridgeError::Jni(msg) => write!(f, "jni error: {msg}"),
        }
    }
}

impl std::error::Error for BridgeError {}

impl From<InferError> for BridgeError {
    fn from(err: InferError) -> Self {
        BridgeError::Infer(err)
    }
}

impl From<styler_image::ConvertError> for BridgeError {
    fn from(err: styler_image::ConvertError) -> Self {
        BridgeError::Infer(InferError::Convert(err))
    }
}

impl From<jni::errors::Error> for BridgeError {
    fn from(err: jni::errors::Error) -> Self {
        BridgeError::Jni(err.to_string())
    }
}
