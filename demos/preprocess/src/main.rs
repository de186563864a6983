use argh::FromArgs;
use std::path::PathBuf;
use std::time::Instant;

use docprep::encoder::{EncoderImageProcessor, EncoderProcessorConfig};
use docprep::image::{DynImage, ImageSize};

#[derive(FromArgs)]
/// Preprocess images for a document vision encoder and print the resulting batch
struct Args {
    /// paths to the input images
    #[argh(positional)]
    image_paths: Vec<PathBuf>,

    /// path to a preprocessor config in JSON; overrides the size options
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// target canvas width
    #[argh(option, default = "896")]
    width: usize,

    /// target canvas height
    #[argh(option, default = "196")]
    height: usize,

    /// rotate images whose orientation contradicts the target
    #[argh(switch)]
    align_long_axis: bool,

    /// convert grayscale or RGBA inputs to RGB before processing
    #[argh(switch)]
    convert_rgb: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();

    let config = match &args.config {
        Some(path) => EncoderProcessorConfig::from_json_file(path)?,
        None => {
            let mut config = EncoderProcessorConfig::new(ImageSize {
                width: args.width,
                height: args.height,
            });
            config.align_long_axis = args.align_long_axis;
            config
        }
    };

    let processor = EncoderImageProcessor::new(config)?;

    let mut images = Vec::with_capacity(args.image_paths.len());
    for path in &args.image_paths {
        let decoded = image::open(path)?;
        log::info!("Loaded {} ({}x{})", path.display(), decoded.width(), decoded.height());

        let decoded = if args.convert_rgb {
            image::DynamicImage::ImageRgb8(decoded.to_rgb8())
        } else {
            decoded
        };
        images.push(DynImage::try_from(decoded)?);
    }

    let time = Instant::now();
    let batch = processor.preprocess(images)?;
    println!("time ms: {:?}", time.elapsed().as_secs_f32() * 1000.0);

    let pixel_values = batch.to_ndarray()?;
    println!("pixel_values: {:?}", pixel_values.shape());

    for (path, image) in args.image_paths.iter().zip(batch.pixel_values.iter()) {
        let means = (0..image.num_channels())
            .map(|c| {
                let plane = image.plane(c)?;
                Ok(plane.iter().sum::<f32>() / plane.len() as f32)
            })
            .collect::<Result<Vec<_>, docprep::image::ImageError>>()?;
        println!("{}: channel means {:?}", path.display(), means);
    }

    Ok(())
}
