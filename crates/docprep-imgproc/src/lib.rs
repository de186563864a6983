#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for interpolation.
pub mod interpolation;

/// operations to normalize images.
pub mod normalize;

/// image padding module.
pub mod padding;

/// module containing parallelization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;

/// quarter-turn image rotations.
pub mod rotate;
