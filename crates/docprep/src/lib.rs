//! Image preprocessing for fixed-input-size document vision encoders.
//!
//! ```
//! use docprep::encoder::{EncoderImageProcessor, EncoderProcessorConfig};
//! use docprep::image::{Image, ImageSize};
//!
//! let mut config = EncoderProcessorConfig::new(ImageSize { width: 64, height: 32 });
//! config.align_long_axis = true;
//! let processor = EncoderImageProcessor::new(config).unwrap();
//!
//! let page = Image::<u8, 3>::from_size_val(ImageSize { width: 20, height: 90 }, 250).unwrap();
//! let batch = processor.process_batch(&[page]).unwrap();
//!
//! assert_eq!(batch.to_ndarray().unwrap().shape(), &[1, 3, 32, 64]);
//! ```

#[doc(inline)]
pub use docprep_image as image;

#[doc(inline)]
pub use docprep_imgproc as imgproc;

#[doc(inline)]
pub use docprep_encoder as encoder;
