use crate::{ImageError, PlanarImage};

/// Cast the pixel data of a planar image to a different type.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
/// * `scale` - The scale to multiply the pixel data with.
///
/// Example:
///
/// ```
/// use docprep_image::{ImageSize, PlanarImage};
/// use docprep_image::ops::cast_and_scale;
///
/// let image = PlanarImage::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     vec![0u8, 255],
/// )
/// .unwrap();
///
/// let mut image_f32 = PlanarImage::from_size_val(image.size(), 0.0f32).unwrap();
///
/// cast_and_scale(&image, &mut image_f32, 1. / 255.0).unwrap();
///
/// assert_eq!(image_f32.as_slice(), &[0.0, 1.0]);
/// ```
pub fn cast_and_scale<T, U, const C: usize>(
    src: &PlanarImage<T, C>,
    dst: &mut PlanarImage<U, C>,
    scale: U,
) -> Result<(), ImageError>
where
    T: Copy + num_traits::NumCast,
    U: Copy + num_traits::NumCast + std::ops::Mul<U, Output = U>,
{
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    dst.as_slice_mut()
        .iter_mut()
        .zip(src.as_slice().iter())
        .try_for_each(|(out, &inp)| {
            let x = U::from(inp).ok_or(ImageError::CastError(
                std::any::type_name::<U>().to_string(),
            ))?;
            *out = x * scale;
            Ok::<(), ImageError>(())
        })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ImageSize;

    #[test]
    fn test_cast_and_scale() -> Result<(), ImageError> {
        let image = PlanarImage::<u8, 3>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            vec![0u8, 0, 255, 0, 0, 255],
        )?;

        let mut image_f64: PlanarImage<f64, 3> = PlanarImage::from_size_val(image.size(), 0.0)?;

        super::cast_and_scale(&image, &mut image_f64, 1. / 255.0)?;

        let expected = vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0];

        assert_eq!(image_f64.as_slice(), expected);

        Ok(())
    }

    #[test]
    fn test_cast_and_scale_size_mismatch() -> Result<(), ImageError> {
        let image = PlanarImage::<u8, 3>::from_size_val([2, 2].into(), 0)?;
        let mut dst = PlanarImage::<f32, 3>::from_size_val([2, 3].into(), 0.0)?;
        assert!(cast_and_scale(&image, &mut dst, 1.0).is_err());
        Ok(())
    }
}
