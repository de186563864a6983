use std::borrow::Cow;

use docprep_image::{Image, ImageSize};
use docprep_imgproc::rotate;

use crate::error::ProcessorError;

/// Whether an image of `image` size contradicts the orientation of `target`.
///
/// Only strict inequalities count: square images and square targets never need rotating.
pub fn needs_rotation(image: ImageSize, target: ImageSize) -> bool {
    (target.is_portrait() && image.is_landscape()) || (target.is_landscape() && image.is_portrait())
}

/// Rotate `image` a quarter turn counter-clockwise when its orientation contradicts `target`.
///
/// The image is borrowed untouched when no rotation is needed.
///
/// # Example
///
/// ```
/// use docprep_image::{Image, ImageSize};
/// use docprep_encoder::align::align_long_axis;
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 40, height: 20 }, 0).unwrap();
///
/// let portrait = ImageSize { width: 32, height: 64 };
/// let aligned = align_long_axis(&image, portrait).unwrap();
/// assert_eq!(aligned.size(), ImageSize { width: 20, height: 40 });
///
/// let landscape = ImageSize { width: 64, height: 32 };
/// let aligned = align_long_axis(&image, landscape).unwrap();
/// assert_eq!(aligned.size(), image.size());
/// ```
pub fn align_long_axis(
    image: &Image<u8, 3>,
    target: ImageSize,
) -> Result<Cow<'_, Image<u8, 3>>, ProcessorError> {
    if needs_rotation(image.size(), target) {
        Ok(Cow::Owned(rotate::rotate90_counterclockwise(image)?))
    } else {
        Ok(Cow::Borrowed(image))
    }
}

/// Check that an aligned image is at least as wide as tall when the target is landscape.
///
/// # Errors
///
/// Returns [`ProcessorError::AlignmentViolated`] otherwise, which means the alignment stage
/// and the target size disagree.
pub fn ensure_aligned(aligned: ImageSize, target: ImageSize) -> Result<(), ProcessorError> {
    if target.is_landscape() && aligned.width < aligned.height {
        return Err(ProcessorError::AlignmentViolated(aligned, target));
    }
    Ok(())
}
