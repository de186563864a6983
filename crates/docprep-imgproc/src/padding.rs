use docprep_image::{ImageError, ImageSize, PlanarImage};

use crate::parallel;

/// Represents 2D padding with top, bottom, left, and right values (in pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding2D {
    /// Amount of padding to add on the top side.
    pub top: usize,
    /// Amount of padding to add on the bottom side.
    pub bottom: usize,
    /// Amount of padding to add on the left side.
    pub left: usize,
    /// Amount of padding to add on the right side.
    pub right: usize,
}

impl Padding2D {
    /// Compute the padding that centers an image of `old_size` on a canvas of `new_size`.
    ///
    /// When a delta is odd the extra pixel goes to the bottom or the right.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidPadding`] if the canvas is smaller than the image in
    /// either dimension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use docprep_image::ImageSize;
    /// use docprep_imgproc::padding::Padding2D;
    ///
    /// let padding = Padding2D::centered(
    ///     ImageSize { width: 4, height: 4 },
    ///     ImageSize { width: 9, height: 6 },
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(padding, Padding2D { top: 1, bottom: 1, left: 2, right: 3 });
    /// ```
    pub fn centered(old_size: ImageSize, new_size: ImageSize) -> Result<Self, ImageError> {
        if new_size.width < old_size.width || new_size.height < old_size.height {
            return Err(ImageError::InvalidPadding(old_size, new_size));
        }

        let delta_width = new_size.width - old_size.width;
        let delta_height = new_size.height - old_size.height;

        let top = delta_height / 2;
        let left = delta_width / 2;

        Ok(Self {
            top,
            bottom: delta_height - top,
            left,
            right: delta_width - left,
        })
    }

    /// Validates that a new image size correctly matches the expected dimensions
    /// after applying this padding to an existing image.
    ///
    /// # Example
    /// ```rust
    /// use docprep_image::ImageSize;
    /// use docprep_imgproc::padding::Padding2D;
    /// let padding = Padding2D { top: 1, bottom: 1, left: 2, right: 2 };
    /// let old_size = ImageSize { width: 4, height: 4 };
    /// let new_size = ImageSize { width: 8, height: 6 };
    ///
    /// assert!(padding.validate_size(old_size, new_size));
    /// ```
    pub fn validate_size(&self, old_size: ImageSize, new_size: ImageSize) -> bool {
        new_size.width == old_size.width + self.left + self.right
            && new_size.height == old_size.height + self.top + self.bottom
    }
}

/// Pad a channel-first image with a constant value per channel.
///
/// # Arguments
///
/// * `src` - The source image to pad.
/// * `dst` - The destination image where the padded output will be stored.
/// * `padding` - The amount of padding (in pixels) for all four sides.
/// * `constant_value` - The fill value for each channel plane.
///
/// # Errors
///
/// Returns an error if the size of `dst` does not match the size of `src` after
/// applying `padding`.
///
/// # Example
///
/// ```rust
/// use docprep_image::{ImageSize, PlanarImage};
/// use docprep_imgproc::padding::{constant_padding, Padding2D};
///
/// let src = PlanarImage::<u8, 3>::from_size_val(ImageSize { width: 2, height: 2 }, 1).unwrap();
/// let mut dst = PlanarImage::<u8, 3>::from_size_val(ImageSize { width: 4, height: 4 }, 0).unwrap();
///
/// constant_padding(
///     &src,
///     &mut dst,
///     Padding2D { top: 1, bottom: 1, left: 1, right: 1 },
///     [9u8; 3],
/// )
/// .unwrap();
///
/// assert_eq!(dst.get([0, 0, 0]), Some(&9));
/// assert_eq!(dst.get([0, 1, 1]), Some(&1));
/// ```
pub fn constant_padding<T, const C: usize>(
    src: &PlanarImage<T, C>,
    dst: &mut PlanarImage<T, C>,
    padding: Padding2D,
    constant_value: [T; C],
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    if !padding.validate_size(src.size(), dst.size()) {
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            src.width() + padding.left + padding.right,
            src.height() + padding.top + padding.bottom,
        ));
    }

    let old_width = src.width();
    let new_width = dst.width();

    parallel::par_iter_planes(src, dst, |c, src_plane, dst_plane| {
        dst_plane.fill(constant_value[c]);

        // copy old plane as center of the new plane
        let row_offset = padding.top * new_width + padding.left;
        for (src_row, dst_row) in src_plane
            .chunks_exact(old_width)
            .zip(dst_plane[row_offset..].chunks_mut(new_width))
        {
            dst_row[..old_width].copy_from_slice(src_row);
        }
    });

    Ok(())
}

/// Center a channel-first image on a canvas of `size`, filling the border with `pad_value`.
///
/// An image already at `size` is returned as a copy.
///
/// # Errors
///
/// Returns [`ImageError::InvalidPadding`] if `size` is smaller than the image.
pub fn pad_to_size<T, const C: usize>(
    src: &PlanarImage<T, C>,
    size: ImageSize,
    pad_value: T,
) -> Result<PlanarImage<T, C>, ImageError>
where
    T: Copy + Send + Sync,
{
    let padding = Padding2D::centered(src.size(), size)?;
    if src.size() == size {
        return Ok(src.clone());
    }

    let mut dst = PlanarImage::from_size_val(size, pad_value)?;
    constant_padding(src, &mut dst, padding, [pad_value; C])?;

    Ok(dst)
}
