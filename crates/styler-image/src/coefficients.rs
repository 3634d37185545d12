use serde::{Deserialize, Serialize};

/// YUV to RGB conversion factors.
///
/// ```text
/// R = Y + r_v * (V - 128)
/// G = Y - g_u * (U - 128) - g_v * (V - 128)
/// B = Y + b_u * (U - V)
/// ```
///
/// Blue mixes both chroma planes and matches textbook BT.601 only at
/// neutral chroma.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    pub r_v: f32,
    pub g_u: f32,
    pub g_v: f32,
    pub b_u: f32,
}

impl Coefficients {
    /// Full-range BT.601.
    pub const BT601: Coefficients = Coefficients {
        r_v: 1.402,
        g_u: 0.344,
        g_v: 0.714,
        b_u: 1.772,
    };

    /// Factors of the integer kernels some Android camera pipelines use.
    pub const FIXED_POINT: Coefficients = Coefficients {
        r_v: 1.370705,
        g_u: 0.337633,
        g_v: 0.698001,
        b_u: 1.732446,
    };

    /// Convert one sample triple, saturating every channel to `[0, 255]`.
    #[inline]
    pub fn to_rgb(&self, y: u8, u: u8, v: u8) -> [f32; 3] {
        let y = y as f32;
        let u = u as f32 - 128.0;
        let v = v as f32 - 128.0;
        [
            (y + self.r_v * v).clamp(0.0, 255.0),
            (y - self.g_u * u - self.g_v * v).clamp(0.0, 255.0),
            (y + self.b_u * (u - v)).clamp(0.0, 255.0),
        ]
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Coefficients::BT601
    }
}

/// Named coefficient sets selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoefficientSet {
    #[default]
    Bt601,
    FixedPoint,
}

impl CoefficientSet {
    pub fn coefficients(&self) -> Coefficients {
        match self {
            CoefficientSet::Bt601 => Coefficients::BT601,
            CoefficientSet::FixedPoint => Coefficients::FIXED_POINT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_chroma_is_gray() {
        for coefficients in [Coefficients::BT601, Coefficients::FIXED_POINT] {
            assert_eq!(coefficients.to_rgb(77, 128, 128), [77.0, 77.0, 77.0]);
        }
    }

    #[test]
    fn test_extremes_saturate() {
        let [r, g, b] = Coefficients::BT601.to_rgb(255, 255, 255);
        assert_eq!((r, b), (255.0, 255.0));
        assert!((0.0..=255.0).contains(&g));

        let [r, g, b] = Coefficients::BT601.to_rgb(0, 0, 0);
        assert_eq!((r, b), (0.0, 0.0));
        assert!((0.0..=255.0).contains(&g));
    }

    #[test]
    fn test_red_chroma_raises_red_lowers_green_and_blue() {
        let [r, g, b] = Coefficients::BT601.to_rgb(100, 128, 200);
        assert!((r - 200.944).abs() < 1e-3);
        assert!((g - 48.592).abs() < 1e-3);
        // 100 + 1.772 * (0 - 72) saturates
        assert_eq!(b, 0.0);
    }

    #[test]
    fn test_blue_uses_chroma_difference() {
        let [_, _, b] = Coefficients::BT601.to_rgb(100, 150, 128);
        assert!((b - 138.984).abs() < 1e-3);

        let [_, _, b] = Coefficients::FIXED_POINT.to_rgb(100, 150, 140);
        assert!((b - 117.32446).abs() < 1e-3);
    }
}
