use docprep_image::{ImageError, PlanarImage};

use crate::error::ProcessorError;

/// The output of the processor: one channel-first `f32` image per input, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchFeature {
    /// The processed images, each of shape (3, H, W).
    pub pixel_values: Vec<PlanarImage<f32, 3>>,
}

impl BatchFeature {
    /// Number of images in the batch.
    pub fn len(&self) -> usize {
        self.pixel_values.len()
    }

    /// Whether the batch holds no image.
    pub fn is_empty(&self) -> bool {
        self.pixel_values.is_empty()
    }

    /// The common (C, H, W) shape of the images, checked across the whole batch.
    ///
    /// # Errors
    ///
    /// Returns [`ProcessorError::EmptyBatch`] for an empty batch and
    /// [`ProcessorError::InconsistentBatchShape`] if two images differ in shape.
    pub fn image_shape(&self) -> Result<[usize; 3], ProcessorError> {
        let first = self
            .pixel_values
            .first()
            .ok_or(ProcessorError::EmptyBatch)?
            .shape();

        if let Some((idx, image)) = self
            .pixel_values
            .iter()
            .enumerate()
            .find(|(_, image)| image.shape() != first)
        {
            return Err(ProcessorError::InconsistentBatchShape(
                idx,
                image.shape(),
                first,
            ));
        }

        Ok(first)
    }

    /// Stack the batch into a single (N, C, H, W) array.
    ///
    /// # Example
    ///
    /// ```
    /// use docprep_encoder::BatchFeature;
    /// use docprep_image::{ImageSize, PlanarImage};
    ///
    /// let image = PlanarImage::<f32, 3>::from_size_val(ImageSize { width: 4, height: 2 }, 0.5).unwrap();
    /// let batch = BatchFeature { pixel_values: vec![image.clone(), image] };
    ///
    /// let array = batch.to_ndarray().unwrap();
    /// assert_eq!(array.shape(), &[2, 3, 2, 4]);
    /// ```
    pub fn to_ndarray(&self) -> Result<ndarray::Array4<f32>, ProcessorError> {
        let [c, h, w] = self.image_shape()?;

        let mut data = Vec::with_capacity(self.len() * c * h * w);
        for image in &self.pixel_values {
            data.extend_from_slice(image.as_slice());
        }

        let array = ndarray::Array4::from_shape_vec((self.len(), c, h, w), data)
            .map_err(ImageError::from)?;

        Ok(array)
    }
}

impl IntoIterator for BatchFeature {
    type Item = PlanarImage<f32, 3>;
    type IntoIter = std::vec::IntoIter<PlanarImage<f32, 3>>;

    fn into_iter(self) -> Self::IntoIter {
        self.pixel_values.into_iter()
    }
}
