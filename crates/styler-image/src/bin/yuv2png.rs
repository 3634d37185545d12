use crates_image::{ImageBuffer, Rgba};
use log::{LevelFilter, info};
use styler_image::{ColorSpaceConverter, ConverterConfig, YuvFrame};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    styler_base::init_stdout_logger(LevelFilter::Info);

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 5 {
        eprintln!("Usage: {} <frame.yuv> <width> <height> <out.png> [nv21]", args[0]);
        std::process::exit(1);
    }
    let width: usize = args[2].parse()?;
    let height: usize = args[3].parse()?;
    let nv21 = args.get(5).is_some_and(|arg| arg == "nv21");

    let data = std::fs::read(&args[1])?;
    let frame = if nv21 {
        YuvFrame::from_nv21(&data, width, height)?
    } else {
        YuvFrame::from_i420(&data, width, height)?
    };

    let converter = ColorSpaceConverter::new(ConverterConfig::default());
    let pixels = converter.to_argb(&frame)?;

    // ARGB words to RGBA bytes
    let rgba: Vec<u8> = pixels
        .iter()
        .flat_map(|&argb| {
            let [a, r, g, b] = argb.to_be_bytes();
            [r, g, b, a]
        })
        .collect();
    let image = ImageBuffer::<Rgba<u8>, _>::from_raw(width as u32, height as u32, rgba)
        .ok_or("pixel buffer does not match image size")?;
    image.save(&args[4])?;

    info!("wrote {}x{} frame to {}", width, height, args[4]);
    Ok(())
}
