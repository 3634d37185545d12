use crate::{AssetSource, Backend, FpsMeter, InferError, Session, StylerConfig};
use log::{debug, info};
use std::fmt;
use std::time::Instant;
use styler_base::Tensor;
use styler_image::{ColorSpaceConverter, Normalization, YuvFrame};

struct LoadedStyle {
    name: String,
    session: Box<dyn Session>,
}

/// Everything needed to turn camera frames into styled pixels.
///
/// Style `0` shows the camera image unchanged. Styles `1..style_count()`
/// run the network loaded for the matching configured style.
pub struct StyleContext {
    converter: ColorSpaceConverter,
    normalization: Option<Normalization>,
    styles: Vec<LoadedStyle>,
    selected: usize,
    fps: FpsMeter,
}

impl fmt::Debug for StyleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styles: Vec<&str> = self.styles.iter().map(|style| style.name.as_str()).collect();
        f.debug_struct("StyleContext")
            .field("converter", self.converter.config())
            .field("normalization", &self.normalization)
            .field("styles", &styles)
            .field("selected", &self.selected)
            .field("fps", &self.fps.average())
            .finish()
    }
}

impl StyleContext {
    /// Loads every configured style through `backend`, reading models from `assets`.
    pub fn load(
        config: &StylerConfig,
        backend: &dyn Backend,
        assets: &dyn AssetSource,
    ) -> Result<Self, InferError> {
        config.validate()?;
        let mut styles = Vec::with_capacity(config.styles().len());
        for style in config.styles() {
            let started = Instant::now();
            let source = assets.open(&style.model)?;
            let session = backend.load_model(source)?;
            info!(
                "loaded style '{}' from {} on {} in {:.1?}",
                style.name,
                style.model,
                backend.name(),
                started.elapsed()
            );
            styles.push(LoadedStyle {
                name: style.name.clone(),
                session,
            });
        }
        Ok(Self::with_styles(config, styles))
    }

    /// A context with no networks, which can only show the camera image.
    pub fn passthrough(config: &StylerConfig) -> Self {
        Self::with_styles(config, Vec::new())
    }

    fn with_styles(config: &StylerConfig, styles: Vec<LoadedStyle>) -> Self {
        Self {
            converter: ColorSpaceConverter::new(config.converter()),
            normalization: config.normalization().copied(),
            styles,
            selected: 0,
            fps: FpsMeter::new(config.fps_window()),
        }
    }

    /// Number of selectable styles, including the unstyled camera image.
    pub fn style_count(&self) -> usize {
        self.styles.len() + 1
    }

    pub fn selected_style(&self) -> usize {
        self.selected
    }

    /// Name of the selected style, `None` for the camera image.
    pub fn selected_style_name(&self) -> Option<&str> {
        let index = self.selected.checked_sub(1)?;
        self.styles.get(index).map(|style| style.name.as_str())
    }

    pub fn select_style(&mut self, index: usize) -> Result<(), InferError> {
        if index >= self.style_count() {
            return Err(InferError::UnknownStyle(index));
        }
        if index != self.selected {
            debug!("style {} -> {}", self.selected, index);
            self.selected = index;
        }
        Ok(())
    }

    /// Moves to the next style, staying on the last one.
    pub fn next_style(&mut self) -> usize {
        self.selected = (self.selected + 1).min(self.style_count() - 1);
        self.selected
    }

    /// Moves to the previous style, staying on the camera image.
    pub fn previous_style(&mut self) -> usize {
        self.selected = self.selected.saturating_sub(1);
        self.selected
    }

    pub fn reset_style(&mut self) {
        self.selected = 0;
    }

    pub fn fps(&self) -> &FpsMeter {
        &self.fps
    }

    /// Converts one frame with the selected style into `0xAARRGGBB` pixels.
    ///
    /// # Errors
    ///
    /// Conversion errors for malformed frames, whatever the session reports
    /// if the network fails, and `InferError::ShapeMismatch` if the network
    /// output does not have the frame's size.
    pub fn transform_frame(&mut self, frame: &YuvFrame) -> Result<Vec<u32>, InferError> {
        let started = Instant::now();
        let pixels = match self.selected.checked_sub(1) {
            None => self.converter.to_argb(frame)?,
            Some(index) => self.stylize(index, frame)?,
        };
        let fps = self.fps.record(started.elapsed());
        debug!(
            "style {} frame {}x{}: {:.1} fps",
            self.selected,
            frame.width(),
            frame.height(),
            fps
        );
        Ok(pixels)
    }

    /// Selects `style`, then transforms `frame` with it.
    pub fn transform_with_style(
        &mut self,
        style: usize,
        frame: &YuvFrame,
    ) -> Result<Vec<u32>, InferError> {
        self.select_style(style)?;
        self.transform_frame(frame)
    }

    fn stylize(&mut self, index: usize, frame: &YuvFrame) -> Result<Vec<u32>, InferError> {
        let input = self
            .converter
            .decode_f32(frame, self.normalization.as_ref())?;
        let style = self
            .styles
            .get_mut(index)
            .ok_or(InferError::UnknownStyle(index + 1))?;
        let output = run_single(style.session.as_mut(), input)?;

        let (height, width) = self.converter.tensor_dims(&output)?;
        if (height, width) != (frame.height(), frame.width()) {
            return Err(InferError::ShapeMismatch {
                expected: format!("{}x{}", frame.width(), frame.height()),
                got: format!("{width}x{height}"),
            });
        }
        Ok(self
            .converter
            .pack_f32(&output, self.normalization.as_ref())?)
    }
}

/// Feeds `input` to the session's first input and returns its first output.
fn run_single(session: &mut dyn Session, input: Tensor<f32>) -> Result<Tensor<f32>, InferError> {
    let input_name = session
        .input_names()
        .first()
        .cloned()
        .unwrap_or_else(|| "input".to_string());
    let output_name = session.output_names().first().cloned();

    let mut outputs = session.run(&[(input_name.as_str(), input)])?;
    let output = match output_name {
        Some(name) => outputs.remove(&name),
        None if outputs.len() == 1 => outputs.into_values().next(),
        None => None,
    };
    output.ok_or_else(|| InferError::EngineFailure("network produced no output".to_string()))
}
