//! Pixel format conversion for the styler pipeline.
//!
//! Camera frames arrive as YUV 4:2:0 planes and are decoded into image
//! tensors for the inference engine. The engine's output tensor is packed
//! back into `0xAARRGGBB` pixels for display.
//!
//! Tensors are batch-of-one images, channel-last (`[1, height, width, channels]`)
//! by default. Every plane byte is read as an unsigned 8-bit sample.

pub mod coefficients;
pub mod config;
pub mod convert;
pub mod error;
pub mod frame;
pub mod layout;
pub mod normalize;
pub mod pack;

pub use coefficients::{CoefficientSet, Coefficients};
pub use config::ConverterConfig;
pub use convert::ColorSpaceConverter;
pub use error::ConvertError;
pub use frame::{FrameGeometry, YuvFrame};
pub use layout::{ChannelOrder, Layout};
pub use normalize::Normalization;
pub use pack::{pack_argb, saturate};

use styler_base::Tensor;

/// Decodes a frame into a `[1, height, width, 4]` RGBA byte tensor using BT.601.
pub fn decode(frame: &YuvFrame) -> Result<Tensor<u8>, ConvertError> {
    ColorSpaceConverter::default().decode(frame)
}

/// Packs a `[1, height, width, 4]` RGBA byte tensor into `0xAARRGGBB` pixels.
pub fn pack(tensor: &Tensor<u8>) -> Result<Vec<u32>, ConvertError> {
    ColorSpaceConverter::default().pack(tensor)
}
