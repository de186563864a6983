#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// long-axis orientation alignment.
pub mod align;

/// processed batch container.
pub mod batch;

/// processor configuration.
pub mod config;

/// Error types for the processor.
pub mod error;

/// the encoder image processor.
pub mod processor;

pub use crate::batch::BatchFeature;
pub use crate::config::{ChannelStat, EncoderProcessorConfig};
pub use crate::error::ProcessorError;
pub use crate::processor::EncoderImageProcessor;
