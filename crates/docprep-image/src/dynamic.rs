use crate::{error::ImageError, image::Image, layout::ChannelDimension, ImageSize};

/// An 8-bit, channel-last image whose channel count is only known at runtime.
///
/// This is the entry point for untyped inputs such as decoded bitmaps or raw arrays.
/// Nothing downstream trusts the channel count until [`DynImage::into_rgb8`] checked it.
#[derive(Clone, Debug, PartialEq)]
pub struct DynImage {
    size: ImageSize,
    channels: usize,
    data: Vec<u8>,
}

impl DynImage {
    /// Create a new image from channel-last (H, W, C) samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is empty, has no channels, or the data length does not
    /// match `size` and `channels`.
    pub fn new(size: ImageSize, channels: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::EmptyImage(size.width, size.height));
        }
        if channels == 0 {
            return Err(ImageError::InvalidChannelCount(3, 0));
        }
        if data.len() != size.width * size.height * channels {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * channels,
            ));
        }
        Ok(Self {
            size,
            channels,
            data,
        })
    }

    /// Create an image from a 3D array whose channel axis is given explicitly.
    ///
    /// # Example
    ///
    /// ```
    /// use docprep_image::{ChannelDimension, DynImage};
    ///
    /// let chw = ndarray::Array3::<u8>::zeros((3, 20, 40));
    /// let image = DynImage::from_ndarray(chw.view(), ChannelDimension::First).unwrap();
    ///
    /// assert_eq!(image.size().width, 40);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn from_ndarray(
        array: ndarray::ArrayView3<'_, u8>,
        layout: ChannelDimension,
    ) -> Result<Self, ImageError> {
        let (d0, d1, d2) = array.dim();
        let (height, width, channels) = layout.split_shape([d0, d1, d2]);

        // store channels last whatever the source layout
        let array = match layout {
            ChannelDimension::Last => array,
            ChannelDimension::First => array.permuted_axes([1, 2, 0]),
        };
        let data = array.as_standard_layout().into_owned().into_raw_vec();
        Self::new(ImageSize { width, height }, channels, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        self.channels
    }

    /// The layout of the pixel data, always [`ChannelDimension::Last`].
    pub fn channel_dimension(&self) -> ChannelDimension {
        ChannelDimension::Last
    }

    /// Get the pixel data as a flat slice.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Convert into a typed RGB image.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidChannelCount`] unless the image has exactly 3 channels.
    /// Grayscale and RGBA inputs are rejected rather than converted.
    pub fn into_rgb8(self) -> Result<Image<u8, 3>, ImageError> {
        if self.channels != 3 {
            return Err(ImageError::InvalidChannelCount(3, self.channels));
        }
        Image::new(self.size, self.data)
    }
}

impl<const C: usize> From<Image<u8, C>> for DynImage {
    fn from(image: Image<u8, C>) -> Self {
        Self {
            size: image.size(),
            channels: C,
            data: image.into_vec(),
        }
    }
}

impl TryFrom<ndarray::Array3<u8>> for DynImage {
    type Error = ImageError;

    fn try_from(array: ndarray::Array3<u8>) -> Result<Self, Self::Error> {
        Self::from_ndarray(array.view(), ChannelDimension::Last)
    }
}

impl TryFrom<::image::DynamicImage> for DynImage {
    type Error = ImageError;

    fn try_from(image: ::image::DynamicImage) -> Result<Self, Self::Error> {
        let color = image.color();
        if color.bytes_per_pixel() != color.channel_count() {
            return Err(ImageError::UnsupportedPixelType(format!("{color:?}")));
        }
        let size = ImageSize {
            width: image.width() as usize,
            height: image.height() as usize,
        };
        Self::new(size, color.channel_count() as usize, image.into_bytes())
    }
}

impl TryFrom<::image::RgbImage> for DynImage {
    type Error = ImageError;

    fn try_from(image: ::image::RgbImage) -> Result<Self, Self::Error> {
        let size = ImageSize {
            width: image.width() as usize,
            height: image.height() as usize,
        };
        Self::new(size, 3, image.into_raw())
    }
}
