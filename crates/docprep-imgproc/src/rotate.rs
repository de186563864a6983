use rayon::{iter::IndexedParallelIterator, iter::ParallelIterator, slice::ParallelSliceMut};

use docprep_image::{Image, ImageError};

/// Rotate the input image by 90 degrees clockwise.
///
/// The output has the width and height of the input swapped.
///
/// # Example
///
/// ```
/// use docprep_image::{Image, ImageSize};
/// use docprep_imgproc::rotate::rotate90_clockwise;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![1, 2, 3, 4],
/// )
/// .unwrap();
///
/// let rotated = rotate90_clockwise(&image).unwrap();
///
/// assert_eq!(rotated.as_slice(), &[3, 1, 4, 2]);
/// ```
pub fn rotate90_clockwise<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + Send + Sync,
{
    let (src_w, src_h) = (src.width(), src.height());
    let mut dst = Image::from_size_val(src.size().transposed(), T::default())?;
    let src_data = src.as_slice();

    // dst(y, x) = src(H - 1 - x, y)
    dst.as_slice_mut()
        .par_chunks_exact_mut(src_h * C)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(C).enumerate() {
                let idx = ((src_h - 1 - x) * src_w + y) * C;
                pixel.copy_from_slice(&src_data[idx..idx + C]);
            }
        });

    Ok(dst)
}

/// Rotate the input image by 90 degrees counter-clockwise.
///
/// Equivalent to three clockwise quarter turns, done in a single pass.
///
/// # Example
///
/// ```
/// use docprep_image::{Image, ImageSize};
/// use docprep_imgproc::rotate::rotate90_counterclockwise;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     vec![1, 2, 3, 4],
/// )
/// .unwrap();
///
/// let rotated = rotate90_counterclockwise(&image).unwrap();
///
/// assert_eq!(rotated.as_slice(), &[2, 4, 1, 3]);
/// ```
pub fn rotate90_counterclockwise<T, const C: usize>(
    src: &Image<T, C>,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + Send + Sync,
{
    let (src_w, src_h) = (src.width(), src.height());
    let mut dst = Image::from_size_val(src.size().transposed(), T::default())?;
    let src_data = src.as_slice();

    // dst(y, x) = src(x, W - 1 - y)
    dst.as_slice_mut()
        .par_chunks_exact_mut(src_h * C)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, pixel) in row.chunks_exact_mut(C).enumerate() {
                let idx = (x * src_w + (src_w - 1 - y)) * C;
                pixel.copy_from_slice(&src_data[idx..idx + C]);
            }
        });

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use docprep_image::{Image, ImageError, ImageSize};

    fn make_2x3_rgb() -> Result<Image<u8, 3>, ImageError> {
        // 2 rows, 3 columns, pixel value = 10 * row + col on every channel
        let data = (0..2)
            .flat_map(|y| (0..3).flat_map(move |x| [10 * y + x; 3]))
            .collect();
        Image::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            data,
        )
    }

    #[test]
    fn rotate_clockwise() -> Result<(), ImageError> {
        let image = make_2x3_rgb()?;
        let rotated = super::rotate90_clockwise(&image)?;

        assert_eq!(rotated.size(), ImageSize::from([2, 3]));
        // the bottom-left pixel moves to the top-left corner
        assert_eq!(rotated.get([0, 0, 0]), Some(&10));
        assert_eq!(rotated.get([0, 1, 0]), Some(&0));
        assert_eq!(rotated.get([2, 0, 2]), Some(&12));
        Ok(())
    }

    #[test]
    fn rotate_counterclockwise() -> Result<(), ImageError> {
        let image = make_2x3_rgb()?;
        let rotated = super::rotate90_counterclockwise(&image)?;

        assert_eq!(rotated.size(), ImageSize::from([2, 3]));
        // the top-right pixel moves to the top-left corner
        assert_eq!(rotated.get([0, 0, 0]), Some(&2));
        assert_eq!(rotated.get([0, 1, 0]), Some(&12));
        assert_eq!(rotated.get([2, 0, 1]), Some(&0));
        Ok(())
    }

    #[test]
    fn counterclockwise_is_three_clockwise_turns() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 5,
                height: 3,
            },
            (0..45).collect(),
        )?;

        let mut turned = image.clone();
        for _ in 0..3 {
            turned = super::rotate90_clockwise(&turned)?;
        }

        assert_eq!(turned, super::rotate90_counterclockwise(&image)?);
        Ok(())
    }
}
