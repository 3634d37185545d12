use crate::{ChannelOrder, CoefficientSet, Layout};
use serde::{Deserialize, Serialize};

/// Configuration of a `ColorSpaceConverter`.
///
/// Layout, channel order and coefficients are fixed for the lifetime of a
/// converter so that decode and pack always agree on where each channel lives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    coefficients: CoefficientSet,
    channel_order: ChannelOrder,
    layout: Layout,
}

impl ConverterConfig {
    pub fn with_coefficients(mut self, coefficients: CoefficientSet) -> Self {
        self.coefficients = coefficients;
        self
    }

    pub fn with_channel_order(mut self, channel_order: ChannelOrder) -> Self {
        self.channel_order = channel_order;
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn coefficients(&self) -> CoefficientSet {
        self.coefficients
    }

    pub fn channel_order(&self) -> ChannelOrder {
        self.channel_order
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }
}
