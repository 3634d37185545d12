pub mod assets;
pub mod backend;
pub mod backends;
pub mod config;
pub mod context;
pub mod error;
pub mod modelsource;
pub mod session;
pub mod stats;

pub use assets::{AssetSource, DirectoryAssets, MemoryAssets};
pub use backend::Backend;
pub use config::{StyleDefinition, StylerConfig};
pub use context::StyleContext;
pub use error::InferError;
pub use modelsource::ModelSource;
pub use session::Session;
pub use stats::FpsMeter;

#[cfg(feature = "onnx")]
pub use backends::{OnnxBackend, OnnxSession};
