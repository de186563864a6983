use fast_image_resize as fr;

use docprep_image::{Image, ImageError, ImageSize, PlanarImage};

use crate::interpolation::InterpolationMode;

/// Resize an RGB image using the [fast_image_resize](https://crates.io/crates/fast_image_resize) crate.
///
/// The image is stretched to fill `dst` exactly; the aspect ratio is not preserved.
///
/// # Arguments
///
/// * `src` - The input image container with 3 channels.
/// * `dst` - The output image container, already allocated at the new size.
/// * `interpolation` - The interpolation mode to use.
///
/// # Example
///
/// ```
/// use docprep_image::{Image, ImageSize};
/// use docprep_imgproc::interpolation::InterpolationMode;
/// use docprep_imgproc::resize::resize_fast;
///
/// let image = Image::<_, 3>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 3],
/// )
/// .unwrap();
///
/// let new_size = ImageSize {
///     width: 2,
///     height: 3,
/// };
///
/// let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0).unwrap();
///
/// resize_fast(&image, &mut image_resized, InterpolationMode::Lanczos).unwrap();
///
/// assert_eq!(image_resized.size(), new_size);
/// ```
///
/// # Errors
///
/// The function returns an error if the image cannot be resized.
pub fn resize_fast(
    src: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    interpolation: InterpolationMode,
) -> Result<(), ImageError> {
    let src_image = fr::images::ImageRef::new(
        src.width() as u32,
        src.height() as u32,
        src.as_slice(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    let (dst_width, dst_height) = (dst.width() as u32, dst.height() as u32);
    let mut dst_image = fr::images::Image::from_slice_u8(
        dst_width,
        dst_height,
        dst.as_slice_mut(),
        fr::PixelType::U8x3,
    )
    .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    let options = fr::ResizeOptions::new().resize_alg(interpolation.resize_alg());

    fr::Resizer::new()
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| ImageError::ResizeError(e.to_string()))?;

    Ok(())
}

/// Resize an RGB image to `size` and transpose it to channel-first layout.
///
/// An image already at `size` is transposed without resampling so its samples are kept
/// bit-exact.
///
/// # Errors
///
/// Returns an error if the resampler fails or produces an image of the wrong size.
pub fn resize_to_channel_first(
    src: &Image<u8, 3>,
    size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<PlanarImage<u8, 3>, ImageError> {
    if src.size() == size {
        return Ok(PlanarImage::from_interleaved(src));
    }

    let mut resized = Image::<u8, 3>::from_size_val(size, 0)?;
    resize_fast(src, &mut resized, interpolation)?;

    let planar = PlanarImage::from_interleaved(&resized);
    if planar.size() != size {
        return Err(ImageError::InvalidImageSize(
            planar.width(),
            planar.height(),
            size.width,
            size.height,
        ));
    }

    Ok(planar)
}

#[cfg(test)]
mod tests {
    use docprep_image::{ChannelDimension, Image, ImageError, ImageSize};

    use crate::interpolation::InterpolationMode;

    #[test]
    fn resize_fast_smoke() -> Result<(), ImageError> {
        let image = Image::<_, 3>::new(
            ImageSize {
                width: 4,
                height: 5,
            },
            vec![0u8; 4 * 5 * 3],
        )?;

        let new_size = ImageSize {
            width: 2,
            height: 3,
        };

        let mut image_resized = Image::<_, 3>::from_size_val(new_size, 0)?;

        super::resize_fast(&image, &mut image_resized, InterpolationMode::Nearest)?;

        assert_eq!(image_resized.num_channels(), 3);
        assert_eq!(image_resized.size().width, 2);
        assert_eq!(image_resized.size().height, 3);
        Ok(())
    }

    #[test]
    fn resize_constant_image_stays_constant() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 37,
                height: 11,
            },
            200,
        )?;

        let target = ImageSize {
            width: 64,
            height: 32,
        };
        let planar = super::resize_to_channel_first(&image, target, InterpolationMode::Lanczos)?;

        assert_eq!(planar.shape(), [3, 32, 64]);
        assert_eq!(planar.channel_dimension(), ChannelDimension::First);
        assert!(planar.as_slice().iter().all(|&v| v.abs_diff(200) <= 1));
        Ok(())
    }

    #[test]
    fn resize_same_size_is_exact() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 3,
            height: 2,
        };
        let image = Image::<u8, 3>::new(size, (0..18).collect())?;

        let planar = super::resize_to_channel_first(&image, size, InterpolationMode::Lanczos)?;

        assert_eq!(planar.plane(0)?, &[0, 3, 6, 9, 12, 15]);
        assert_eq!(planar.plane(2)?, &[2, 5, 8, 11, 14, 17]);
        Ok(())
    }

    #[test]
    fn resize_keeps_channel_order() -> Result<(), ImageError> {
        // pure red stays in the first plane after resampling
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 8,
                height: 8,
            },
            [255u8, 0, 0].repeat(64),
        )?;

        let planar = super::resize_to_channel_first(
            &image,
            ImageSize {
                width: 4,
                height: 6,
            },
            InterpolationMode::Lanczos,
        )?;

        assert!(planar.plane(0)?.iter().all(|&v| v >= 254));
        assert!(planar.plane(1)?.iter().all(|&v| v == 0));
        assert!(planar.plane(2)?.iter().all(|&v| v == 0));
        Ok(())
    }
}
