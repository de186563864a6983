use std::borrow::Cow;

use log::{debug, trace};
use rayon::prelude::*;

use docprep_image::{ops, DynImage, Image, PlanarImage};
use docprep_imgproc::{interpolation::InterpolationMode, normalize, padding, resize};

use crate::{align, batch::BatchFeature, config::EncoderProcessorConfig, error::ProcessorError};

/// Turns RGB images of any size into a batch of fixed-size normalized encoder inputs.
///
/// Every image goes through the same chain: long-axis alignment (optional), Lanczos resize
/// to the target size with a switch to channel-first layout, cast to `f32`, centered
/// padding, rescale and per-channel standardization. Images are independent of each other
/// and processed in parallel; the batch keeps the input order.
///
/// # Example
///
/// ```
/// use docprep_encoder::{EncoderImageProcessor, EncoderProcessorConfig};
/// use docprep_image::{Image, ImageSize};
///
/// let config = EncoderProcessorConfig::new(ImageSize { width: 64, height: 32 });
/// let processor = EncoderImageProcessor::new(config).unwrap();
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 17, height: 50 }, 255).unwrap();
/// let batch = processor.process_batch(&[image]).unwrap();
///
/// assert_eq!(batch.pixel_values[0].shape(), [3, 32, 64]);
/// ```
#[derive(Clone, Debug)]
pub struct EncoderImageProcessor {
    config: EncoderProcessorConfig,
    image_mean: [f32; 3],
    image_std: [f32; 3],
}

impl EncoderImageProcessor {
    /// Create a processor from a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not pass
    /// [`EncoderProcessorConfig::validate`].
    pub fn new(config: EncoderProcessorConfig) -> Result<Self, ProcessorError> {
        config.validate()?;

        let image_mean = config.image_mean.resolve::<3>("image_mean")?;
        let image_std = config.image_std.resolve::<3>("image_std")?;

        Ok(Self {
            config,
            image_mean,
            image_std,
        })
    }

    /// The configuration the processor was built with.
    pub fn config(&self) -> &EncoderProcessorConfig {
        &self.config
    }

    /// Preprocess a batch of untyped 8-bit images.
    ///
    /// Every image is checked to hold exactly 3 channels before any processing starts.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid image; no partial batch is returned.
    pub fn preprocess(&self, images: Vec<DynImage>) -> Result<BatchFeature, ProcessorError> {
        let images = images
            .into_iter()
            .map(DynImage::into_rgb8)
            .collect::<Result<Vec<_>, _>>()?;

        self.process_batch(&images)
    }

    /// Preprocess a single untyped 8-bit image into a batch of one.
    pub fn preprocess_one(
        &self,
        image: impl Into<DynImage>,
    ) -> Result<BatchFeature, ProcessorError> {
        self.preprocess(vec![image.into()])
    }

    /// Process a batch of RGB images.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessorError::EmptyBatch`] for an empty slice, and otherwise the first
    /// error raised by any stage for any image.
    pub fn process_batch(&self, images: &[Image<u8, 3>]) -> Result<BatchFeature, ProcessorError> {
        if images.is_empty() {
            return Err(ProcessorError::EmptyBatch);
        }

        debug!(
            "Processing {} image(s) to {} (align_long_axis: {})",
            images.len(),
            self.config.target_size,
            self.config.align_long_axis
        );

        let pixel_values = images
            .par_iter()
            .enumerate()
            .map(|(idx, image)| self.process_image(idx, image))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BatchFeature { pixel_values })
    }

    fn process_image(
        &self,
        idx: usize,
        image: &Image<u8, 3>,
    ) -> Result<PlanarImage<f32, 3>, ProcessorError> {
        let target = self.config.target_size;

        let image = if self.config.align_long_axis {
            let aligned = align::align_long_axis(image, target)?;
            align::ensure_aligned(aligned.size(), target)?;
            aligned
        } else {
            Cow::Borrowed(image)
        };
        trace!("image {idx}: aligned to {}", image.size());

        // this also switches the layout to channels first
        let resized = resize::resize_to_channel_first(&image, target, InterpolationMode::Lanczos)?;

        let mut resized_f32 = PlanarImage::from_size_val(resized.size(), 0.0f32)?;
        ops::cast_and_scale(&resized, &mut resized_f32, 1.0)?;

        let padded = padding::pad_to_size(&resized_f32, target, self.config.pad_value)?;
        trace!("image {idx}: padded to {:?}", padded.shape());

        let mut rescaled = PlanarImage::from_size_val(padded.size(), 0.0f32)?;
        normalize::rescale(&padded, &mut rescaled, self.config.rescale_factor)?;

        let mut normalized = PlanarImage::from_size_val(rescaled.size(), 0.0f32)?;
        normalize::normalize_mean_std(
            &rescaled,
            &mut normalized,
            &self.image_mean,
            &self.image_std,
        )?;

        Ok(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use docprep_image::{ImageError, ImageSize};

    fn processor(
        width: usize,
        height: usize,
        align: bool,
    ) -> Result<EncoderImageProcessor, ProcessorError> {
        let mut config = EncoderProcessorConfig::new(ImageSize { width, height });
        config.align_long_axis = align;
        EncoderImageProcessor::new(config)
    }

    #[test]
    fn white_image_normalizes_to_constant() -> Result<(), ProcessorError> {
        let processor = processor(16, 8, false)?;
        let image = Image::<u8, 3>::from_size_val(ImageSize::from([5, 9]), 255)?;

        let batch = processor.process_batch(&[image])?;
        let out = &batch.pixel_values[0];

        assert_eq!(out.shape(), [3, 8, 16]);
        for c in 0..3 {
            let expected = (1.0 - processor.image_mean[c]) / processor.image_std[c];
            for v in out.plane(c)? {
                assert_relative_eq!(*v, expected, epsilon = 2e-2);
            }
        }
        Ok(())
    }

    #[test]
    fn empty_batch_is_an_error() -> Result<(), ProcessorError> {
        let processor = processor(16, 8, false)?;
        assert!(matches!(
            processor.process_batch(&[]),
            Err(ProcessorError::EmptyBatch)
        ));
        assert!(matches!(
            processor.preprocess(vec![]),
            Err(ProcessorError::EmptyBatch)
        ));
        Ok(())
    }

    #[test]
    fn rejects_non_rgb_inputs() -> Result<(), ProcessorError> {
        let processor = processor(16, 8, false)?;
        let size = ImageSize::from([4, 4]);

        let gray = DynImage::from(Image::<u8, 1>::from_size_val(size, 0)?);
        assert!(matches!(
            processor.preprocess_one(gray),
            Err(ProcessorError::Image(ImageError::InvalidChannelCount(3, 1)))
        ));

        let rgba = DynImage::from(Image::<u8, 4>::from_size_val(size, 0)?);
        assert!(matches!(
            processor.preprocess_one(rgba),
            Err(ProcessorError::Image(ImageError::InvalidChannelCount(3, 4)))
        ));
        Ok(())
    }

    #[test]
    fn invalid_config_fails_construction() {
        let mut config = EncoderProcessorConfig::new(ImageSize::from([8, 8]));
        config.image_std = 0.0f32.into();
        assert!(EncoderImageProcessor::new(config).is_err());
    }
}
