use docprep_image::{ImageError, ImageSize};

/// An error type for the encoder image processor.
#[derive(thiserror::Error, Debug)]
pub enum ProcessorError {
    /// Error raised by an image container or a transform stage.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Error when an aligned image still contradicts the target orientation.
    #[error("Aligned image {0} is taller than wide for the landscape target {1}")]
    AlignmentViolated(ImageSize, ImageSize),

    /// Error when the target canvas has a zero dimension.
    #[error("Target size must be non-zero, got {0}")]
    InvalidTargetSize(ImageSize),

    /// Error when the rescale factor is not a finite positive number.
    #[error("Rescale factor must be finite and positive, got {0}")]
    InvalidRescaleFactor(f64),

    /// Error when a per-channel statistic has the wrong number of values.
    #[error("Expected a scalar or {expected} values for {name}, got {found}")]
    ChannelStatLength {
        /// Name of the statistic.
        name: &'static str,
        /// Number of channels of the processed images.
        expected: usize,
        /// Number of values provided.
        found: usize,
    },

    /// Error when a statistic value cannot be used for normalization.
    #[error("Invalid value {value} for {name} at channel {channel}")]
    InvalidChannelStat {
        /// Name of the statistic.
        name: &'static str,
        /// Channel index of the offending value.
        channel: usize,
        /// The offending value.
        value: f32,
    },

    /// Error when the processor is called without any image.
    #[error("Cannot build a batch from zero images")]
    EmptyBatch,

    /// Error when the processed images do not share a single shape.
    #[error("Batch image {0} has shape {1:?}, expected {2:?}")]
    InconsistentBatchShape(usize, [usize; 3], [usize; 3]),

    /// Error when reading a configuration file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error when parsing a configuration file.
    #[error(transparent)]
    SerializationError(#[from] serde_json::Error),
}
