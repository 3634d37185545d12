use styler_image::{
    ChannelOrder, CoefficientSet, ColorSpaceConverter, ConvertError, ConverterConfig,
    FrameGeometry, Layout, Normalization, YuvFrame,
};

/// Planar frame filled with constant Y, U and V values.
fn uniform_planes(width: usize, height: usize, y: u8, u: u8, v: u8) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let chroma_len = width.div_ceil(2) * height.div_ceil(2);
    (vec![y; width * height], vec![u; chroma_len], vec![v; chroma_len])
}

#[test]
fn test_decode_element_count() {
    for (width, height) in [(1, 1), (2, 2), (3, 5), (640, 480)] {
        let (y, u, v) = uniform_planes(width, height, 16, 128, 128);
        let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(width, height));
        let tensor = styler_image::decode(&frame).unwrap();
        assert_eq!(tensor.shape, vec![1, height, width, 4]);
        assert_eq!(tensor.len(), width * height * 4);
    }
}

#[test]
fn test_decode_mid_gray() {
    let (y, u, v) = uniform_planes(4, 4, 128, 128, 128);
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(4, 4));
    let tensor = styler_image::decode(&frame).unwrap();

    for pixel in tensor.data.chunks_exact(4) {
        assert_eq!(pixel, &[128, 128, 128, 255]);
    }
}

#[test]
fn test_decode_white() {
    let (y, u, v) = uniform_planes(2, 2, 255, 128, 128);
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(2, 2));
    let tensor = styler_image::decode(&frame).unwrap();

    for pixel in tensor.data.chunks_exact(4) {
        assert_eq!(pixel, &[255, 255, 255, 255]);
    }
}

#[test]
fn test_decode_extremes_stay_in_range() {
    for value in [0u8, 255] {
        let (y, u, v) = uniform_planes(2, 2, value, value, value);
        let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(2, 2));

        let converter = ColorSpaceConverter::default();
        let floats = converter.decode_f32(&frame, None).unwrap();
        assert!(floats.data.iter().all(|v| (0.0..=255.0).contains(v)));

        // bytes saturate rather than wrap: red and blue hit the rails
        let bytes = converter.decode(&frame).unwrap();
        assert_eq!(bytes.data[0], value);
        assert_eq!(bytes.data[2], value);
        assert_eq!(bytes.data[3], 255);
    }
}

#[test]
fn test_decode_reads_bytes_unsigned() {
    // 200 would be -56 as a signed byte
    let (y, u, v) = uniform_planes(2, 2, 200, 128, 128);
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(2, 2));
    let tensor = styler_image::decode(&frame).unwrap();
    assert_eq!(&tensor.data[..4], &[200, 200, 200, 255]);
}

#[test]
fn test_decode_is_idempotent() {
    let y: Vec<u8> = (0..64).map(|i| (i * 4) as u8).collect();
    let u: Vec<u8> = (0..16).map(|i| (i * 16) as u8).collect();
    let v: Vec<u8> = (0..16).map(|i| 255 - (i * 16) as u8).collect();
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(8, 8));

    let converter = ColorSpaceConverter::default();
    let first = converter.decode_f32(&frame, None).unwrap();
    let second = converter.decode_f32(&frame, None).unwrap();
    let first_bits: Vec<u32> = first.data.iter().map(|v| v.to_bits()).collect();
    let second_bits: Vec<u32> = second.data.iter().map(|v| v.to_bits()).collect();
    assert_eq!(first_bits, second_bits);
    assert_eq!(converter.decode(&frame).unwrap(), converter.decode(&frame).unwrap());
}

#[test]
fn test_decode_2x2_block_shares_chroma() {
    // one 2x2 block, four luma values, one chroma pair
    let y = vec![100, 110, 120, 130];
    let u = vec![110];
    let v = vec![150];
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(2, 2));
    let tensor = ColorSpaceConverter::default().decode_f32(&frame, None).unwrap();

    let shifts: Vec<[f32; 3]> = tensor
        .data
        .chunks_exact(4)
        .zip(&y)
        .map(|(pixel, &luma)| {
            let luma = luma as f32;
            [pixel[0] - luma, pixel[1] - luma, pixel[2] - luma]
        })
        .collect();

    for shift in &shifts[1..] {
        for channel in 0..3 {
            assert!((shift[channel] - shifts[0][channel]).abs() < 1e-3);
        }
    }
    // V above neutral pushes red up, U below neutral pulls blue down
    assert!(shifts[0][0] > 0.0);
    assert!(shifts[0][2] < 0.0);
}

#[test]
fn test_decode_neighbouring_blocks_use_their_own_chroma() {
    // 4x2 frame: two chroma blocks side by side
    let y = vec![128; 8];
    let u = vec![128, 128];
    let v = vec![128, 200];
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(4, 2));
    let tensor = styler_image::decode(&frame).unwrap();

    let red: Vec<u8> = tensor.data.chunks_exact(4).map(|p| p[0]).collect();
    assert_eq!(red[0], 128);
    assert_eq!(red[1], 128);
    assert!(red[2] > 200);
    assert_eq!(red[2], red[3]);
    assert_eq!(red[0..4], red[4..8]);
}

#[test]
fn test_decode_ignores_row_padding() {
    // 2x2 frame with 4-byte luma rows and 3-byte chroma rows
    let y = vec![50, 60, 0xEE, 0xEE, 70, 80];
    let u = vec![128, 0xEE, 0xEE];
    let v = vec![128, 0xEE, 0xEE];
    let geometry = FrameGeometry::new(2, 2)
        .with_row_stride(4)
        .with_chroma_row_stride(3);
    let frame = YuvFrame::new(&y, &u, &v, geometry);
    let tensor = styler_image::decode(&frame).unwrap();

    let red: Vec<u8> = tensor.data.chunks_exact(4).map(|p| p[0]).collect();
    assert_eq!(red, vec![50, 60, 70, 80]);
}

#[test]
fn test_decode_interleaved_chroma_matches_planar() {
    let width = 4;
    let height = 4;
    let y: Vec<u8> = (0..16).map(|i| 40 + i * 10).collect();
    let u_planar = vec![90, 100, 110, 120];
    let v_planar = vec![160, 150, 140, 130];

    // NV21: V/U pairs
    let mut vu = Vec::new();
    for (&u, &v) in u_planar.iter().zip(&v_planar) {
        vu.push(v);
        vu.push(u);
    }
    let mut nv21 = y.clone();
    nv21.extend_from_slice(&vu);

    let planar = YuvFrame::new(&y, &u_planar, &v_planar, FrameGeometry::new(width, height));
    let interleaved = YuvFrame::from_nv21(&nv21, width, height).unwrap();

    let converter = ColorSpaceConverter::default();
    assert_eq!(
        converter.decode(&planar).unwrap(),
        converter.decode(&interleaved).unwrap()
    );
}

#[test]
fn test_decode_bgra_order() {
    let (y, u, v) = uniform_planes(2, 2, 128, 128, 255);
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(2, 2));

    let rgba = ColorSpaceConverter::default().decode(&frame).unwrap();
    let bgra = ColorSpaceConverter::new(
        ConverterConfig::default().with_channel_order(ChannelOrder::Bgra),
    )
    .decode(&frame)
    .unwrap();

    assert_eq!(rgba.data[0], bgra.data[2]);
    assert_eq!(rgba.data[1], bgra.data[1]);
    assert_eq!(rgba.data[2], bgra.data[0]);
    assert_eq!(bgra.data[3], 255);
}

#[test]
fn test_decode_abgr_puts_alpha_first() {
    let (y, u, v) = uniform_planes(2, 2, 90, 128, 128);
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(2, 2));
    let converter =
        ColorSpaceConverter::new(ConverterConfig::default().with_channel_order(ChannelOrder::Abgr));
    let tensor = converter.decode(&frame).unwrap();
    assert_eq!(&tensor.data[..4], &[255, 90, 90, 90]);
}

#[test]
fn test_decode_rgb_chw() {
    let y = vec![10, 20, 30, 40];
    let u = vec![128];
    let v = vec![128];
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(2, 2));
    let converter = ColorSpaceConverter::new(
        ConverterConfig::default()
            .with_channel_order(ChannelOrder::Rgb)
            .with_layout(Layout::Chw),
    );
    let tensor = converter.decode(&frame).unwrap();

    assert_eq!(tensor.shape, vec![1, 3, 2, 2]);
    // each channel plane repeats the luma plane for neutral chroma
    assert_eq!(tensor.data, vec![10, 20, 30, 40, 10, 20, 30, 40, 10, 20, 30, 40]);
}

#[test]
fn test_decode_f32_normalization() {
    let (y, u, v) = uniform_planes(2, 2, 128, 128, 128);
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(2, 2));
    let normalization = Normalization::new([100.0, 110.0, 120.0], 0.5).unwrap();
    let tensor = ColorSpaceConverter::default()
        .decode_f32(&frame, Some(&normalization))
        .unwrap();

    assert_eq!(&tensor.data[..4], &[14.0, 9.0, 4.0, 255.0]);
}

#[test]
fn test_fixed_point_coefficients_differ_from_bt601() {
    let (y, u, v) = uniform_planes(2, 2, 128, 60, 200);
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(2, 2));

    let bt601 = ColorSpaceConverter::default().decode(&frame).unwrap();
    let fixed = ColorSpaceConverter::new(
        ConverterConfig::default().with_coefficients(CoefficientSet::FixedPoint),
    )
    .decode(&frame)
    .unwrap();
    assert_ne!(bt601, fixed);
}

#[test]
fn test_decode_zero_width_is_invalid_geometry() {
    let frame = YuvFrame::new(&[], &[], &[], FrameGeometry::new(0, 4));
    let result = styler_image::decode(&frame);
    assert!(matches!(result, Err(ConvertError::InvalidGeometry(_))));
}

#[test]
fn test_decode_short_plane_is_invalid_geometry() {
    let (y, u, v) = uniform_planes(4, 4, 128, 128, 128);
    let frame = YuvFrame::new(&y[..10], &u, &v, FrameGeometry::new(4, 4));
    assert!(matches!(
        styler_image::decode(&frame),
        Err(ConvertError::InvalidGeometry(_))
    ));
}

#[test]
fn test_decode_unsupported_pixel_stride() {
    let (y, u, v) = uniform_planes(4, 4, 128, 128, 128);
    let geometry = FrameGeometry::new(4, 4)
        .with_pixel_stride(3)
        .with_chroma_row_stride(8);
    let frame = YuvFrame::new(&y, &u, &v, geometry);
    assert_eq!(
        styler_image::decode(&frame),
        Err(ConvertError::UnsupportedPixelStride(3))
    );
}

#[test]
fn test_decode_blue_follows_chroma_difference() {
    // B = Y + 1.772 * (U - V) = 100 + 1.772 * (128 - 200), clamped to 0
    let (y, u, v) = uniform_planes(2, 2, 100, 128, 200);
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(2, 2));
    let tensor = styler_image::decode(&frame).unwrap();
    assert_eq!(&tensor.data[..4], &[201, 49, 0, 255]);

    // 100 + 1.772 * (150 - 128) with V neutral
    let (y, u, v) = uniform_planes(2, 2, 100, 150, 128);
    let frame = YuvFrame::new(&y, &u, &v, FrameGeometry::new(2, 2));
    let tensor = styler_image::decode(&frame).unwrap();
    assert_eq!(tensor.data[2], 139);
}
