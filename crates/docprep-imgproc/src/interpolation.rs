use fast_image_resize as fr;

/// Interpolation mode for the resize operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation.
    Nearest,
    /// Bilinear interpolation.
    Bilinear,
    /// Bicubic (Catmull-Rom) interpolation.
    Bicubic,
    /// Lanczos interpolation with a three-lobe window.
    ///
    /// Keeps thin strokes and glyph edges sharp, which text recognition depends on.
    #[default]
    Lanczos,
}

impl InterpolationMode {
    pub(crate) fn resize_alg(&self) -> fr::ResizeAlg {
        match self {
            InterpolationMode::Nearest => fr::ResizeAlg::Nearest,
            InterpolationMode::Bilinear => fr::ResizeAlg::Convolution(fr::FilterType::Bilinear),
            InterpolationMode::Bicubic => fr::ResizeAlg::Convolution(fr::FilterType::CatmullRom),
            InterpolationMode::Lanczos => fr::ResizeAlg::Convolution(fr::FilterType::Lanczos3),
        }
    }
}
