use crate::BridgeError;
use styler_image::FrameGeometry;

/// Non-negative `jint` as `usize`.
pub fn non_negative(name: &str, value: i32) -> Result<usize, BridgeError> {
    usize::try_from(value)
        .map_err(|_| BridgeError::InvalidArgument(format!("{name} must not be negative, got {value}")))
}

/// Frame geometry from the `Image.Plane` values passed in from Java.
///
/// `row_stride` belongs to the Y plane, `pixel_stride` and
/// `chroma_row_stride` to the U and V planes.
pub fn frame_geometry(
    width: i32,
    height: i32,
    row_stride: i32,
    pixel_stride: i32,
    chroma_row_stride: i32,
) -> Result<FrameGeometry, BridgeError> {
    Ok(FrameGeometry::new(
        non_negative("width", width)?,
        non_negative("height", height)?,
    )
    .with_row_stride(non_negative("rowStride", row_stride)?)
    .with_pixel_stride(non_negative("pixelStride", pixel_stride)?)
    .with_chroma_row_stride(non_negative("chromaRowStride", chroma_row_stride)?))
}

/// `0xAARRGGBB` pixels as the signed ints of a Java `int[]`.
pub fn to_java_pixels(pixels: Vec<u32>) -> Vec<i32> {
    pixels.into_iter().map(|pixel| pixel as i32).collect()
}
