//! JNI entry points of the style transfer camera app.
//!
//! Java holds an opaque `long` handle to a [`StyleContext`] created by
//! `initStyleTransfer`, passes it to `transformImage` for every camera
//! frame and gives it back with `releaseStyleTransfer`.

pub mod args;
pub mod bridge;
pub mod error;
pub mod logging;

pub use error::BridgeError;

use jni::JNIEnv;
use jni::objects::{JByteArray, JObject, JString};
use jni::sys::{jint, jintArray, jlong};
use log::{error, info};
use styler_infer::StyleContext;

fn throw(env: &mut JNIEnv, err: &BridgeError) {
    error!("{err}");
    // a failed JNI call may already have raised an exception
    if env.exception_check().unwrap_or(false) {
        return;
    }
    if let Err(e) = env.throw_new(err.exception_class(), err.to_string()) {
        error!("failed to throw {}: {e}", err.exception_class());
    }
}

fn read_string(env: &mut JNIEnv, string: &JString) -> Result<String, BridgeError> {
    if string.is_null() {
        return Ok(String::new());
    }
    Ok(env.get_string(string)?.into())
}

fn init_style_transfer(
    env: &mut JNIEnv,
    asset_dir: &JString,
    config_json: &JString,
) -> Result<jlong, BridgeError> {
    let asset_dir = read_string(env, asset_dir)?;
    let config_json = read_string(env, config_json)?;
    let context: StyleContext = bridge::create_context(&asset_dir, &config_json)?;
    info!(
        "style transfer ready: {} styles from {}",
        context.style_count() - 1,
        asset_dir
    );
    Ok(bridge::into_handle(context))
}

#[allow(clippy::too_many_arguments)]
fn transform_image(
    env: &mut JNIEnv,
    handle: jlong,
    style_index: jint,
    height: jint,
    width: jint,
    y: JByteArray,
    u: JByteArray,
    v: JByteArray,
    row_stride: jint,
    pixel_stride: jint,
    chroma_row_stride: jint,
) -> Result<jintArray, BridgeError> {
    let geometry =
        args::frame_geometry(width, height, row_stride, pixel_stride, chroma_row_stride)?;
    let style = args::non_negative("styleIndex", style_index)?;
    let y = env.convert_byte_array(y)?;
    let u = env.convert_byte_array(u)?;
    let v = env.convert_byte_array(v)?;

    let pixels = unsafe {
        bridge::with_context(handle, |context| {
            bridge::transform(context, style, geometry, &y, &u, &v)
        })
    }?;

    let len = i32::try_from(pixels.len())
        .map_err(|_| BridgeError::InvalidArgument(format!("{} pixels do not fit an int[]", pixels.len())))?;
    let array = env.new_int_array(len)?;
    env.set_int_array_region(&array, 0, &pixels)?;
    Ok(array.into_raw())
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_facebook_styletransfer_StyleTransfer_initStyleTransfer<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    asset_dir: JString<'local>,
    config_json: JString<'local>,
) -> jlong {
    logging::init();
    match init_style_transfer(&mut env, &asset_dir, &config_json) {
        Ok(handle) => handle,
        Err(err) => {
            throw(&mut env, &err);
            0
        }
    }
}

#[unsafe(no_mangle)]
#[allow(clippy::too_many_arguments)]
pub extern "system" fn Java_facebook_styletransfer_StyleTransfer_transformImage<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    handle: jlong,
    style_index: jint,
    height: jint,
    width: jint,
    y: JByteArray<'local>,
    u: JByteArray<'local>,
    v: JByteArray<'local>,
    row_stride: jint,
    pixel_stride: jint,
    chroma_row_stride: jint,
) -> jintArray {
    let result = transform_image(
        &mut env,
        handle,
        style_index,
        height,
        width,
        y,
        u,
        v,
        row_stride,
        pixel_stride,
        chroma_row_stride,
    );
    match result {
        Ok(array) => array,
        Err(err) => {
            throw(&mut env, &err);
            std::ptr::null_mut()
        }
    }
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_facebook_styletransfer_StyleTransfer_releaseStyleTransfer<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    handle: jlong,
) {
    unsafe { bridge::release_handle(handle) };
    info!("style transfer released");
}
