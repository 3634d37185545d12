use crate::{BridgeError, args};
use std::sync::Mutex;
use styler_image::{FrameGeometry, YuvFrame};
use styler_infer::{DirectoryAssets, InferError, StyleContext, StylerConfig};

/// Builds a context from a JSON config, loading models from `asset_dir`.
///
/// An empty config selects the defaults.
pub fn create_context(asset_dir: &str, config_json: &str) -> Result<StyleContext, BridgeError> {
    let config = if config_json.trim().is_empty() {
        StylerConfig::default()
    } else {
        StylerConfig::from_json(config_json)?
    };
    load_context(&config, DirectoryAssets::new(asset_dir))
}

#[cfg(feature = "onnx")]
fn load_context(config: &StylerConfig, assets: DirectoryAssets) -> Result<StyleContext, BridgeError> {
    Ok(StyleContext::load(config, &styler_infer::OnnxBackend, &assets)?)
}

#[cfg(not(feature = "onnx"))]
fn load_context(config: &StylerConfig, assets: DirectoryAssets) -> Result<StyleContext, BridgeError> {
    if !config.styles().is_empty() {
        log::warn!(
            "built without onnx support, {} styles in {} are unavailable",
            config.styles().len(),
            assets.root().display()
        );
    }
    Ok(StyleContext::passthrough(config))
}

/// Transforms one frame and returns it as Java `int[]` pixels.
pub fn transform(
    context: &mut StyleContext,
    style: usize,
    geometry: FrameGeometry,
    y: &[u8],
    u: &[u8],
    v: &[u8],
) -> Result<Vec<i32>, BridgeError> {
    let frame = YuvFrame::new(y, u, v, geometry);
    let pixels = context.transform_with_style(style, &frame)?;
    Ok(args::to_java_pixels(pixels))
}

/// Moves a context to the heap and returns its address for Java to hold.
pub fn into_handle(context: StyleContext) -> i64 {
    Box::into_raw(Box::new(Mutex::new(context))) as i64
}

/// Runs `f` on the context behind `handle`.
///
/// # Safety
///
/// `handle` must be `0` or a value returned by `into_handle` that has not
/// been passed to `release_handle`.
pub unsafe fn with_context<R>(
    handle: i64,
    f: impl FnOnce(&mut StyleContext) -> Result<R, BridgeError>,
) -> Result<R, BridgeError> {
    if handle == 0 {
        return Err(InferError::NotInitialized.into());
    }
    let cell = unsafe { &*(handle as *const Mutex<StyleContext>) };
    let mut context = cell.lock().unwrap_or_else(|e| e.into_inner());
    f(&mut context)
}

/// Drops the context behind `handle`. A `0` handle is ignored.
///
/// # Safety
///
/// Same contract as `with_context`; the handle is invalid afterwards.
pub unsafe fn release_handle(handle: i64) {
    if handle != 0 {
        drop(unsafe { Box::from_raw(handle as *mut Mutex<StyleContext>) });
    }
}
