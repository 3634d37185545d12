use crate::ConvertError;
use serde::{Deserialize, Serialize};

/// Per-channel mean subtraction and scaling applied to float tensors.
///
/// `normalized = (value - mean) * scale`, with `mean` given in R, G, B order.
/// Alpha is never normalized.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NormalizationFields")]
pub struct Normalization {
    mean: [f32; 3],
    scale: f32,
}

#[derive(Deserialize)]
struct NormalizationFields {
    #[serde(default)]
    mean: [f32; 3],
    #[serde(default = "unit_scale")]
    scale: f32,
}

fn unit_scale() -> f32 {
    1.0
}

impl TryFrom<NormalizationFields> for Normalization {
    type Error = ConvertError;

    fn try_from(fields: NormalizationFields) -> Result<Self, Self::Error> {
        Normalization::new(fields.mean, fields.scale)
    }
}

impl Normalization {
    /// Channel means of the ImageNet-trained Caffe networks.
    pub const CAFFE_IMAGENET: Normalization = Normalization {
        mean: [122.67891434, 116.66876762, 104.00698793],
        scale: 1.0,
    };

    pub fn new(mean: [f32; 3], scale: f32) -> Result<Self, ConvertError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConvertError::InvalidNormalization(format!(
                "scale must be positive and finite, got {scale}"
            )));
        }
        if mean.iter().any(|m| !m.is_finite()) {
            return Err(ConvertError::InvalidNormalization(format!(
                "means must be finite, got {mean:?}"
            )));
        }
        Ok(Self { mean, scale })
    }

    pub fn mean(&self) -> [f32; 3] {
        self.mean
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// `channel` is 0, 1, 2 for red, green, blue.
    #[inline]
    pub fn apply(&self, channel: usize, value: f32) -> f32 {
        (value - self.mean[channel]) * self.scale
    }

    #[inline]
    pub fn invert(&self, channel: usize, value: f32) -> f32 {
        value / self.scale + self.mean[channel]
    }
}

impl std::fmt::Display for Normalization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "mean {:?} scale {}", self.mean, self.scale)
    }
}
