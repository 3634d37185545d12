use crate::{ColorSpaceConverter, ConvertError, Normalization};
use styler_base::Tensor;

/// Compose an opaque `0xAARRGGBB` pixel.
#[inline]
pub fn pack_argb(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Round to the nearest integer and saturate to a byte. NaN maps to 0.
#[inline]
pub fn saturate(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl ColorSpaceConverter {
    /// `(height, width)` of a tensor in this converter's layout and channel order.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::ShapeMismatch` if the tensor is not a batch of one
    /// image with the configured channel count, or if its buffer does not match
    /// its shape.
    pub fn tensor_dims<T>(&self, tensor: &Tensor<T>) -> Result<(usize, usize), ConvertError> {
        let layout = self.config().layout();
        let channels = self.config().channel_order().channels();
        let mismatch = || ConvertError::ShapeMismatch {
            expected: match layout {
                crate::Layout::Hwc => format!("[1, H, W, {channels}]"),
                crate::Layout::Chw => format!("[1, {channels}, H, W]"),
            },
            got: format!("{:?}", tensor.shape),
        };

        let (height, width, tensor_channels) = layout.dims(&tensor.shape).ok_or_else(mismatch)?;
        if tensor_channels != channels {
            return Err(mismatch());
        }
        let expected_len = height
            .checked_mul(width)
            .and_then(|n| n.checked_mul(channels))
            .ok_or_else(mismatch)?;
        if tensor.data.len() != expected_len {
            return Err(ConvertError::ShapeMismatch {
                expected: format!("{expected_len} elements"),
                got: format!("{} elements", tensor.data.len()),
            });
        }
        Ok((height, width))
    }

    /// Packs a byte tensor into row-major `0xAARRGGBB` pixels with alpha forced opaque.
    pub fn pack(&self, tensor: &Tensor<u8>) -> Result<Vec<u32>, ConvertError> {
        self.pack_with(tensor, |_, value| value)
    }

    /// Packs a float tensor, undoing `normalization` first and then rounding
    /// and saturating each channel to `[0, 255]`.
    pub fn pack_f32(
        &self,
        tensor: &Tensor<f32>,
        normalization: Option<&Normalization>,
    ) -> Result<Vec<u32>, ConvertError> {
        match normalization {
            Some(normalization) => self.pack_with(tensor, |channel, value| {
                saturate(normalization.invert(channel, value))
            }),
            None => self.pack_with(tensor, |_, value| saturate(value)),
        }
    }

    fn pack_with<T: Copy>(
        &self,
        tensor: &Tensor<T>,
        to_byte: impl Fn(usize, T) -> u8,
    ) -> Result<Vec<u32>, ConvertError> {
        let (height, width) = self.tensor_dims(tensor)?;
        let layout = self.config().layout();
        let channels = self.config().channel_order().channels();
        let [r_offset, g_offset, b_offset] = self.config().channel_order().rgb_offsets();

        let read = |row, col, channel: usize, offset| {
            to_byte(
                channel,
                tensor.data[layout.index(row, col, offset, height, width, channels)],
            )
        };

        let mut pixels = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                pixels.push(pack_argb(
                    read(row, col, 0, r_offset),
                    read(row, col, 1, g_offset),
                    read(row, col, 2, b_offset),
                ));
            }
        }
        Ok(pixels)
    }
}
