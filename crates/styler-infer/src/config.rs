use crate::{FpsMeter, InferError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use styler_image::{ConverterConfig, Normalization};

/// One selectable style: a display name and the model asset that renders it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleDefinition {
    pub name: String,
    pub model: String,
}

impl StyleDefinition {
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Pipeline configuration, usually read from a JSON document.
///
/// ```json
/// {
///   "converter": { "coefficients": "bt601", "channel_order": "rgb", "layout": "chw" },
///   "normalization": { "mean": [122.68, 116.67, 104.01], "scale": 1.0 },
///   "styles": [ { "name": "mondrian", "model": "mondrian.onnx" } ],
///   "fps_window": 10
/// }
/// ```
///
/// Missing fields take their defaults. `"normalization": null` feeds the
/// network raw `[0, 255]` values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylerConfig {
    converter: ConverterConfig,
    normalization: Option<Normalization>,
    styles: Vec<StyleDefinition>,
    fps_window: usize,
}

impl Default for StylerConfig {
    fn default() -> Self {
        Self {
            converter: ConverterConfig::default(),
            normalization: Some(Normalization::CAFFE_IMAGENET),
            styles: Vec::new(),
            fps_window: FpsMeter::DEFAULT_WINDOW,
        }
    }
}

impl StylerConfig {
    pub fn from_json(json: &str) -> Result<Self, InferError> {
        let config: StylerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, InferError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| InferError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), InferError> {
        if self.fps_window == 0 {
            return Err(InferError::Config("fps_window must be at least 1".to_string()));
        }
        for (index, style) in self.styles.iter().enumerate() {
            if style.model.is_empty() {
                return Err(InferError::Config(format!(
                    "style {} ('{}') has no model",
                    index + 1,
                    style.name
                )));
            }
        }
        Ok(())
    }

    pub fn with_converter(mut self, converter: ConverterConfig) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_normalization(mut self, normalization: Option<Normalization>) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn with_style(mut self, style: StyleDefinition) -> Self {
        self.styles.push(style);
        self
    }

    pub fn with_fps_window(mut self, fps_window: usize) -> Self {
        self.fps_window = fps_window;
        self
    }

    pub fn converter(&self) -> ConverterConfig {
        self.converter
    }

    pub fn normalization(&self) -> Option<&Normalization> {
        self.normalization.as_ref()
    }

    /// Styles in selection order. Style index `i` (from 1) is `styles()[i - 1]`.
    pub fn styles(&self) -> &[StyleDefinition] {
        &self.styles
    }

    pub fn fps_window(&self) -> usize {
        self.fps_window
    }
}
