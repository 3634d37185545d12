use serde::{Deserialize, Serialize};

/// Order of the channels within one pixel of an image tensor.
///
/// Alpha, when present, is always written as fully opaque.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelOrder {
    #[default]
    Rgba,
    Bgra,
    Abgr,
    Rgb,
    Bgr,
}

impl ChannelOrder {
    pub fn channels(&self) -> usize {
        match self {
            ChannelOrder::Rgba | ChannelOrder::Bgra | ChannelOrder::Abgr => 4,
            ChannelOrder::Rgb | ChannelOrder::Bgr => 3,
        }
    }

    /// Channel offsets of red, green and blue.
    pub fn rgb_offsets(&self) -> [usize; 3] {
        match self {
            ChannelOrder::Rgba | ChannelOrder::Rgb => [0, 1, 2],
            ChannelOrder::Bgra | ChannelOrder::Bgr => [2, 1, 0],
            ChannelOrder::Abgr => [3, 2, 1],
        }
    }

    pub fn alpha_offset(&self) -> Option<usize> {
        match self {
            ChannelOrder::Rgba | ChannelOrder::Bgra => Some(3),
            ChannelOrder::Abgr => Some(0),
            ChannelOrder::Rgb | ChannelOrder::Bgr => None,
        }
    }
}

/// Memory layout of a batch-of-one image tensor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// `[1, height, width, channels]`
    #[default]
    Hwc,
    /// `[1, channels, height, width]`
    Chw,
}

impl Layout {
    pub fn shape(&self, height: usize, width: usize, channels: usize) -> Vec<usize> {
        match self {
            Layout::Hwc => vec![1, height, width, channels],
            Layout::Chw => vec![1, channels, height, width],
        }
    }

    /// `(height, width, channels)` of a shape in this layout.
    pub fn dims(&self, shape: &[usize]) -> Option<(usize, usize, usize)> {
        match (*self, shape) {
            (Layout::Hwc, &[1, h, w, c]) => Some((h, w, c)),
            (Layout::Chw, &[1, c, h, w]) => Some((h, w, c)),
            _ => None,
        }
    }

    #[inline]
    pub fn index(
        &self,
        row: usize,
        col: usize,
        channel: usize,
        height: usize,
        width: usize,
        channels: usize,
    ) -> usize {
        match self {
            Layout::Hwc => (row * width + col) * channels + channel,
            Layout::Chw => (channel * height + row) * width + col,
        }
    }
}
