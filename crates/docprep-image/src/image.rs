use crate::{error::ImageError, layout::ChannelDimension};

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use docprep_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Whether the size is strictly wider than tall.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Whether the size is strictly taller than wide.
    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }

    /// The size with width and height swapped.
    pub fn transposed(&self) -> ImageSize {
        ImageSize {
            width: self.height,
            height: self.width,
        }
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// Represents an image with interleaved pixel data.
///
/// The pixels are stored row-major with shape (H, W, C), i.e. channels last.
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image in (H, W, C) order.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, or the image is
    /// empty, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use docprep_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::EmptyImage(size.width, size.height));
        }

        // check if the data length matches the image size
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and a constant pixel value.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// The layout of the pixel data, always [`ChannelDimension::Last`].
    pub fn channel_dimension(&self) -> ChannelDimension {
        ChannelDimension::Last
    }

    /// The shape of the pixel data as (H, W, C).
    pub fn shape(&self) -> [usize; 3] {
        [self.height(), self.width(), CHANNELS]
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the pixel data as a flat mutable slice.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return the pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get a reference to the sample at `[row, col, channel]`.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [y, x, c] = index;
        if y >= self.height() || x >= self.width() || c >= CHANNELS {
            return None;
        }
        self.data.get((y * self.width() + x) * CHANNELS + c)
    }

    /// Cast the pixel data of the image to a different type.
    ///
    /// # Errors
    ///
    /// If a value cannot be represented in the target type, an error is returned.
    pub fn cast<U>(&self) -> Result<Image<U, CHANNELS>, ImageError>
    where
        T: Copy + num_traits::NumCast,
        U: num_traits::NumCast,
    {
        let casted_data = self
            .data
            .iter()
            .map(|&x| U::from(x).ok_or(ImageError::CastError(std::any::type_name::<U>().into())))
            .collect::<Result<Vec<U>, ImageError>>()?;

        Image::new(self.size, casted_data)
    }
}

impl<T: Clone, const CHANNELS: usize> TryFrom<ndarray::Array3<T>> for Image<T, CHANNELS> {
    type Error = ImageError;

    /// Build an image from a channel-last (H, W, C) array.
    fn try_from(array: ndarray::Array3<T>) -> Result<Self, Self::Error> {
        let (height, width, channels) = array.dim();
        if channels != CHANNELS {
            return Err(ImageError::InvalidChannelCount(CHANNELS, channels));
        }
        let data = array.as_standard_layout().into_owned().into_raw_vec();
        Self::new(ImageSize { width, height }, data)
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert!(image_size.is_portrait());
        assert!(!image_size.is_landscape());
        assert_eq!(image_size.transposed(), ImageSize::from([20, 10]));
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);
        assert_eq!(image.shape(), [20, 10, 3]);

        Ok(())
    }

    #[test]
    fn image_wrong_data_len() {
        let res = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0u8; 11],
        );
        assert!(matches!(res, Err(ImageError::InvalidChannelShape(11, 12))));
    }

    #[test]
    fn image_empty() {
        let res = Image::<u8, 3>::new(
            ImageSize {
                width: 0,
                height: 2,
            },
            vec![],
        );
        assert!(matches!(res, Err(ImageError::EmptyImage(0, 2))));
    }

    #[test]
    fn image_get() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            vec![0, 1, 2, 3, 4, 5],
        )?;
        assert_eq!(image.get([1, 0, 2]), Some(&5u8));
        assert_eq!(image.get([2, 0, 0]), None);
        Ok(())
    }

    #[test]
    fn image_cast() -> Result<(), ImageError> {
        let image_u8 = Image::<_, 3>::new(
            ImageSize {
                height: 2,
                width: 1,
            },
            vec![0u8, 1, 2, 3, 4, 5],
        )?;

        let image_f32: Image<f32, 3> = image_u8.cast()?;
        assert_eq!(image_f32.get([1, 0, 2]), Some(&5.0f32));

        Ok(())
    }

    #[test]
    fn image_from_ndarray() -> Result<(), ImageError> {
        let array = ndarray::Array3::<u8>::from_shape_fn((2, 3, 3), |(y, x, c)| {
            (y * 9 + x * 3 + c) as u8
        });
        let image = Image::<u8, 3>::try_from(array)?;
        assert_eq!(image.size(), ImageSize::from([3, 2]));
        assert_eq!(image.get([1, 2, 1]), Some(&16));

        let gray = ndarray::Array3::<u8>::zeros((2, 3, 1));
        assert!(matches!(
            Image::<u8, 3>::try_from(gray),
            Err(ImageError::InvalidChannelCount(3, 1))
        ));
        Ok(())
    }
}
