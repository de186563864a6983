use crate::ImageSize;

/// An error type for the image containers and the operations over them.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images were expected to share the same size.
    #[error("Image size mismatch: {0}x{1} vs {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when an image has zero width or height.
    #[error("Image must be at least 1x1, got {0}x{1}")]
    EmptyImage(usize, usize),

    /// Error when the number of channels is not the expected one.
    #[error("Expected {0} channels, got {1}")]
    InvalidChannelCount(usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the target canvas is smaller than the image to pad.
    #[error("Cannot pad an image of {0} onto a smaller canvas of {1}")]
    InvalidPadding(ImageSize, ImageSize),

    /// Error when a pixel value cannot be represented in the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),

    /// Error when a decoded image uses a pixel format other than 8-bit samples.
    #[error("Unsupported pixel type {0}, expected 8-bit samples")]
    UnsupportedPixelType(String),

    /// Error when an ndarray cannot be reshaped into an image.
    #[error("Invalid shape")]
    InvalidShape(#[from] ndarray::ShapeError),

    /// Error when the image resampler fails.
    #[error("Failed to resize the image: {0}")]
    ResizeError(String),
}
