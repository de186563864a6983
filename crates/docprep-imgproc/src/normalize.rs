//! Intensity rescaling and per-channel standardization.
//!
//! The two transforms are kept separate and applied in order: first [`rescale`] maps raw
//! intensities into a unit range, then [`normalize_mean_std`] applies the Z-score
//! normalization `(x - μ) / σ` channel by channel.
//!
//! # Example: ImageNet-style Normalization
//!
//! ```
//! use docprep_image::{ImageSize, PlanarImage};
//! use docprep_imgproc::normalize::{normalize_mean_std, rescale, IMAGENET_MEAN, IMAGENET_STD};
//!
//! let image = PlanarImage::<f32, 3>::from_size_val(
//!     ImageSize { width: 8, height: 8 },
//!     255.0,
//! ).unwrap();
//!
//! let mut rescaled = PlanarImage::<f32, 3>::from_size_val(image.size(), 0.0).unwrap();
//! rescale(&image, &mut rescaled, 1.0 / 255.0).unwrap();
//!
//! let mut normalized = PlanarImage::<f32, 3>::from_size_val(image.size(), 0.0).unwrap();
//! normalize_mean_std(&rescaled, &mut normalized, &IMAGENET_MEAN, &IMAGENET_STD).unwrap();
//! ```

use docprep_image::{ImageError, PlanarImage};

use crate::parallel;

/// ImageNet per-channel mean, RGB order.
pub const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];

/// ImageNet per-channel standard deviation, RGB order.
pub const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Multiply every sample by `factor`.
///
/// The product is computed in double precision and narrowed to `f32` afterwards, so that
/// small factors such as `1/255` do not accumulate single-precision rounding bias.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` have different dimensions.
pub fn rescale<const C: usize>(
    src: &PlanarImage<f32, C>,
    dst: &mut PlanarImage<f32, C>,
    factor: f64,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_values(src, dst, |&src_val, dst_val| {
        *dst_val = (src_val as f64 * factor) as f32;
    });

    Ok(())
}

/// Normalize a channel-first image using per-channel mean and standard deviation.
///
/// Applies the transformation `(pixel - μ) / σ` independently to each channel plane.
///
/// # Arguments
///
/// * `src` - The input image with shape (C, H, W).
/// * `dst` - The output normalized image with shape (C, H, W).
/// * `mean` - Array of mean values, one per channel.
/// * `std` - Array of standard deviation values, one per channel.
///
/// # Errors
///
/// Returns [`ImageError::InvalidImageSize`] if `src` and `dst` have different dimensions.
pub fn normalize_mean_std<const C: usize>(
    src: &PlanarImage<f32, C>,
    dst: &mut PlanarImage<f32, C>,
    mean: &[f32; C],
    std: &[f32; C],
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    parallel::par_iter_planes(src, dst, |c, src_plane, dst_plane| {
        let (mean_val, std_val) = (mean[c], std[c]);
        src_plane
            .iter()
            .zip(dst_plane.iter_mut())
            .for_each(|(&src_val, dst_val)| {
                *dst_val = (src_val - mean_val) / std_val;
            });
    });

    Ok(())
}
