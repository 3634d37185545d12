use crate::{Coefficients, ConvertError, ConverterConfig, Normalization, YuvFrame, pack_argb};
use styler_base::{Tensor, element_count};

/// Converts YUV 4:2:0 camera frames into image tensors and packs image
/// tensors back into `0xAARRGGBB` pixels.
///
/// A converter holds no per-call state and can be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct ColorSpaceConverter {
    config: ConverterConfig,
    coefficients: Coefficients,
}

impl ColorSpaceConverter {
    pub fn new(config: ConverterConfig) -> Self {
        log::debug!(
            "color converter: {:?} coefficients, {:?} order, {:?} layout",
            config.coefficients(),
            config.channel_order(),
            config.layout()
        );
        Self {
            coefficients: config.coefficients().coefficients(),
            config,
        }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Tensor shape produced for a `width` x `height` frame.
    pub fn tensor_shape(&self, height: usize, width: usize) -> Vec<usize> {
        self.config
            .layout()
            .shape(height, width, self.config.channel_order().channels())
    }

    /// Decodes a frame into a byte tensor, rounding and saturating every channel.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::InvalidGeometry` or `ConvertError::UnsupportedPixelStride`
    /// if the frame geometry does not describe the planes it comes with.
    pub fn decode(&self, frame: &YuvFrame) -> Result<Tensor<u8>, ConvertError> {
        self.decode_with(frame, 0xFF, |_, value| value.round() as u8)
    }

    /// Decodes a frame into a float tensor with values in `[0, 255]`, optionally
    /// normalized per channel.
    pub fn decode_f32(
        &self,
        frame: &YuvFrame,
        normalization: Option<&Normalization>,
    ) -> Result<Tensor<f32>, ConvertError> {
        match normalization {
            Some(normalization) => {
                self.decode_with(frame, 255.0, |channel, value| {
                    normalization.apply(channel, value)
                })
            }
            None => self.decode_with(frame, 255.0, |_, value| value),
        }
    }

    /// Converts a frame straight into packed pixels without building a tensor.
    ///
    /// Produces the same pixels as `decode` followed by `pack`.
    pub fn to_argb(&self, frame: &YuvFrame) -> Result<Vec<u32>, ConvertError> {
        frame.validate()?;
        let mut pixels = Vec::with_capacity(frame.geometry.pixel_count());
        for row in 0..frame.height() {
            for col in 0..frame.width() {
                let (y, u, v) = frame.sample(row, col);
                let [r, g, b] = self.coefficients.to_rgb(y, u, v);
                pixels.push(pack_argb(r.round() as u8, g.round() as u8, b.round() as u8));
            }
        }
        Ok(pixels)
    }

    fn decode_with<T: Copy + Default>(
        &self,
        frame: &YuvFrame,
        alpha: T,
        color: impl Fn(usize, f32) -> T,
    ) -> Result<Tensor<T>, ConvertError> {
        frame.validate()?;

        let (height, width) = (frame.height(), frame.width());
        let order = self.config.channel_order();
        let layout = self.config.layout();
        let channels = order.channels();
        let offsets = order.rgb_offsets();
        let alpha_offset = order.alpha_offset();

        let shape = layout.shape(height, width, channels);
        let mut data = vec![T::default(); element_count(&shape)?];

        for row in 0..height {
            for col in 0..width {
                let (y, u, v) = frame.sample(row, col);
                let rgb = self.coefficients.to_rgb(y, u, v);
                for (channel, value) in rgb.into_iter().enumerate() {
                    let index = layout.index(row, col, offsets[channel], height, width, channels);
                    data[index] = color(channel, value);
                }
                if let Some(offset) = alpha_offset {
                    data[layout.index(row, col, offset, height, width, channels)] = alpha;
                }
            }
        }

        Ok(Tensor::new(shape, data)?)
    }
}
