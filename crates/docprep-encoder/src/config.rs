use std::path::Path;

use docprep_image::ImageSize;
use docprep_imgproc::normalize::{IMAGENET_MEAN, IMAGENET_STD};
use serde::{Deserialize, Serialize};

use crate::error::ProcessorError;

/// Default multiplier mapping 8-bit intensities into `[0, 1]`.
pub const DEFAULT_RESCALE_FACTOR: f64 = 1.0 / 255.0;

/// Default fill value for the padded border, white in 8-bit intensities.
pub const DEFAULT_PAD_VALUE: f32 = 255.0;

/// Default encoder patch size as `[height, width]`.
pub const DEFAULT_PATCH_SIZE: [usize; 2] = [4, 4];

/// A normalization statistic given either for all channels at once or per channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChannelStat {
    /// One value applied to every channel.
    Scalar(f32),
    /// One value per channel, in RGB order.
    PerChannel(Vec<f32>),
}

impl ChannelStat {
    /// Expand the statistic into exactly `C` values.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessorError::ChannelStatLength`] if a per-channel list does not have `C`
    /// entries. Only [`ChannelStat::Scalar`] is broadcast.
    pub fn resolve<const C: usize>(&self, name: &'static str) -> Result<[f32; C], ProcessorError> {
        match self {
            ChannelStat::Scalar(v) => Ok([*v; C]),
            ChannelStat::PerChannel(values) => {
                values
                    .as_slice()
                    .try_into()
                    .map_err(|_| ProcessorError::ChannelStatLength {
                        name,
                        expected: C,
                        found: values.len(),
                    })
            }
        }
    }
}

impl From<f32> for ChannelStat {
    fn from(value: f32) -> Self {
        ChannelStat::Scalar(value)
    }
}

impl<const C: usize> From<[f32; C]> for ChannelStat {
    fn from(values: [f32; C]) -> Self {
        ChannelStat::PerChannel(values.to_vec())
    }
}

/// Construction-time configuration of the [`crate::EncoderImageProcessor`].
///
/// Only the options below are recognized; deserializing a configuration with any other key
/// fails instead of silently ignoring it.
///
/// # Example
///
/// ```
/// use docprep_encoder::EncoderProcessorConfig;
///
/// let config = EncoderProcessorConfig::from_json_str(
///     r#"{ "max_size": { "width": 896, "height": 196 }, "align_long_axis": true }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.target_size.width, 896);
/// assert_eq!(config.pad_value, 255.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EncoderProcessorConfig {
    /// The canvas every output image is resized and padded to.
    #[serde(alias = "max_size")]
    pub target_size: ImageSize,

    /// Rotate images whose orientation contradicts the target's.
    #[serde(default, alias = "do_align_long_axis")]
    pub align_long_axis: bool,

    /// Multiplier applied to the raw intensities before standardization.
    #[serde(default = "default_rescale_factor")]
    pub rescale_factor: f64,

    /// Mean subtracted from each channel after rescaling.
    #[serde(default = "default_image_mean", alias = "mean")]
    pub image_mean: ChannelStat,

    /// Standard deviation dividing each channel after the mean subtraction.
    #[serde(default = "default_image_std", alias = "std")]
    pub image_std: ChannelStat,

    /// Fill value of the padded border, in raw intensity units.
    #[serde(default = "default_pad_value")]
    pub pad_value: f32,

    /// Encoder patch size as `[height, width]`; carried for model consumers.
    #[serde(default = "default_patch_size")]
    pub patch_size: [usize; 2],
}

fn default_rescale_factor() -> f64 {
    DEFAULT_RESCALE_FACTOR
}

fn default_image_mean() -> ChannelStat {
    IMAGENET_MEAN.into()
}

fn default_image_std() -> ChannelStat {
    IMAGENET_STD.into()
}

fn default_pad_value() -> f32 {
    DEFAULT_PAD_VALUE
}

fn default_patch_size() -> [usize; 2] {
    DEFAULT_PATCH_SIZE
}

impl EncoderProcessorConfig {
    /// Create a configuration for `target_size` with every other option at its default.
    pub fn new(target_size: ImageSize) -> Self {
        Self {
            target_size,
            align_long_axis: false,
            rescale_factor: default_rescale_factor(),
            image_mean: default_image_mean(),
            image_std: default_image_std(),
            pad_value: default_pad_value(),
            patch_size: default_patch_size(),
        }
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(data: &str) -> Result<Self, ProcessorError> {
        Ok(serde_json::from_str(data)?)
    }

    /// Read a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProcessorError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json_str(&data)
    }

    /// Check that every option can be used by the transform stages.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty target size, a non-finite or non-positive rescale
    /// factor, statistics with a wrong number of values, a non-finite mean, or a zero or
    /// non-finite standard deviation.
    pub fn validate(&self) -> Result<(), ProcessorError> {
        if self.target_size.width == 0 || self.target_size.height == 0 {
            return Err(ProcessorError::InvalidTargetSize(self.target_size));
        }

        if !self.rescale_factor.is_finite() || self.rescale_factor <= 0.0 {
            return Err(ProcessorError::InvalidRescaleFactor(self.rescale_factor));
        }

        let mean = self.image_mean.resolve::<3>("image_mean")?;
        if let Some((channel, &value)) = mean.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ProcessorError::InvalidChannelStat {
                name: "image_mean",
                channel,
                value,
            });
        }

        let std = self.image_std.resolve::<3>("image_std")?;
        if let Some((channel, &value)) = std
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v == 0.0)
        {
            return Err(ProcessorError::InvalidChannelStat {
                name: "image_std",
                channel,
                value,
            });
        }

        Ok(())
    }
}
