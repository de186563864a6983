/// Position of the channel axis inside a 3D image array.
///
/// The layout is fixed by the container type: [`crate::Image`] is always channels last and
/// [`crate::PlanarImage`] always channels first, so stages get it from their signatures.
/// Raw arrays must name their layout when converted, it is never guessed from the shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChannelDimension {
    /// Channels are the outermost axis: (C, H, W).
    First,
    /// Channels are the innermost axis: (H, W, C).
    Last,
}

impl ChannelDimension {
    /// Split a 3D shape into `(height, width, channels)` according to this layout.
    pub fn split_shape(&self, shape: [usize; 3]) -> (usize, usize, usize) {
        match self {
            ChannelDimension::First => (shape[1], shape[2], shape[0]),
            ChannelDimension::Last => (shape[0], shape[1], shape[2]),
        }
    }
}

impl std::fmt::Display for ChannelDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ChannelDimension::First => write!(f, "channels-first"),
            ChannelDimension::Last => write!(f, "channels-last"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ChannelDimension;

    #[test]
    fn split_shape() {
        assert_eq!(ChannelDimension::Last.split_shape([20, 40, 3]), (20, 40, 3));
        assert_eq!(ChannelDimension::First.split_shape([3, 20, 40]), (20, 40, 3));
    }
}
