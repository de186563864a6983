#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// channel-last image representation.
pub mod image;

/// channel-first image representation.
pub mod planar;

/// images with a channel count only known at runtime.
pub mod dynamic;

/// channel layout tag shared by every image type.
pub mod layout;

/// element-wise operations over images.
pub mod ops;

/// Error types for the image module.
pub mod error;

pub use crate::dynamic::DynImage;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
pub use crate::layout::ChannelDimension;
pub use crate::planar::PlanarImage;
