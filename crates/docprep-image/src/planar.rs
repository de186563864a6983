use crate::{error::ImageError, image::Image, layout::ChannelDimension, ImageSize};

/// Represents an image with one contiguous plane per channel.
///
/// The pixels are stored with shape (C, H, W), i.e. channels first, which is the layout
/// consumed by vision encoders.
#[derive(Clone, Debug, PartialEq)]
pub struct PlanarImage<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> PlanarImage<T, CHANNELS> {
    /// Create a new planar image from pixel data in (C, H, W) order.
    ///
    /// # Errors
    ///
    /// If the length of the pixel data does not match the image size, or the image is
    /// empty, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use docprep_image::{ImageSize, PlanarImage};
    ///
    /// let image = PlanarImage::<f32, 3>::new(
    ///     ImageSize {
    ///         width: 4,
    ///         height: 2,
    ///     },
    ///     vec![0.0; 3 * 2 * 4],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.shape(), [3, 2, 4]);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::EmptyImage(size.width, size.height));
        }

        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new planar image with the given size and a constant pixel value.
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        PlanarImage::new(size, data)
    }

    /// Transpose an interleaved (H, W, C) image into planar (C, H, W) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use docprep_image::{Image, ImageSize, PlanarImage};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize {
    ///         width: 2,
    ///         height: 1,
    ///     },
    ///     vec![1, 2, 3, 4, 5, 6],
    /// )
    /// .unwrap();
    ///
    /// let planar = PlanarImage::from_interleaved(&image);
    /// assert_eq!(planar.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn from_interleaved(src: &Image<T, CHANNELS>) -> Self
    where
        T: Copy,
    {
        let plane_len = src.width() * src.height();
        let mut data = Vec::with_capacity(plane_len * CHANNELS);
        for c in 0..CHANNELS {
            data.extend(src.as_slice().iter().skip(c).step_by(CHANNELS).copied());
        }

        Self {
            size: src.size(),
            data,
        }
    }

    /// Transpose back into an interleaved (H, W, C) image.
    pub fn to_interleaved(&self) -> Result<Image<T, CHANNELS>, ImageError>
    where
        T: Copy,
    {
        let plane_len = self.plane_len();
        let data = (0..plane_len)
            .flat_map(|i| (0..CHANNELS).map(move |c| self.data[c * plane_len + i]))
            .collect::<Vec<_>>();

        Image::new(self.size, data)
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

    /// The layout of the pixel data, always [`ChannelDimension::First`].
    pub fn channel_dimension(&self) -> ChannelDimension {
        ChannelDimension::First
    }

    /// The shape of the pixel data as (C, H, W).
    pub fn shape(&self) -> [usize; 3] {
        [CHANNELS, self.height(), self.width()]
    }

    /// Number of samples in a single channel plane.
    pub fn plane_len(&self) -> usize {
        self.size.width * self.size.height
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

    /// Get the plane of a single channel.
    ///
    /// # Errors
    ///
    /// If the channel index is out of bounds, an error is returned.
    pub fn plane(&self, channel: usize) -> Result<&[T], ImageError> {
        if channel >= CHANNELS {
            return Err(ImageError::ChannelIndexOutOfBounds(channel, CHANNELS));
        }
        let len = self.plane_len();
        Ok(&self.data[channel * len..(channel + 1) * len])
    }

    /// Get a reference to the sample at `[channel, row, col]`.
    pub fn get(&self, index: [usize; 3]) -> Option<&T> {
        let [c, y, x] = index;
        if c >= CHANNELS || y >= self.height() || x >= self.width() {
            return None;
        }
        self.data.get(c * self.plane_len() + y * self.width() + x)
    }

    /// View the pixel data as a (C, H, W) ndarray.
    pub fn as_array(&self) -> Result<ndarray::ArrayView3<'_, T>, ImageError> {
        Ok(ndarray::ArrayView3::from_shape(
            (CHANNELS, self.height(), self.width()),
            &self.data,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Image, ImageError, ImageSize, PlanarImage};

    #[test]
    fn planar_smoke() -> Result<(), ImageError> {
        let image = PlanarImage::<f32, 3>::from_size_val(
            ImageSize {
                width: 5,
                height: 2,
            },
            1.0,
        )?;
        assert_eq!(image.shape(), [3, 2, 5]);
        assert_eq!(image.plane_len(), 10);
        assert_eq!(image.plane(2)?.len(), 10);
        assert!(image.plane(3).is_err());
        Ok(())
    }

    #[test]
    fn planar_interleaved_roundtrip() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            (0..12).collect(),
        )?;

        let planar = PlanarImage::from_interleaved(&image);
        assert_eq!(planar.plane(0)?, &[0, 3, 6, 9]);
        assert_eq!(planar.plane(1)?, &[1, 4, 7, 10]);
        assert_eq!(planar.get([2, 1, 0]), Some(&8));
        assert_eq!(planar.to_interleaved()?, image);
        Ok(())
    }

    #[test]
    fn planar_as_array() -> Result<(), ImageError> {
        let planar = PlanarImage::<u8, 3>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            (0..9).collect(),
        )?;
        let array = planar.as_array()?;
        assert_eq!(array.dim(), (3, 1, 3));
        assert_eq!(array[[1, 0, 2]], 5);
        Ok(())
    }
}
