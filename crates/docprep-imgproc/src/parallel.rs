use rayon::prelude::*;

use docprep_image::PlanarImage;

/// Apply a function to each channel plane in parallel.
///
/// The closure receives the channel index, the source plane and the destination plane.
/// Each image is split by its own plane length, so `src` and `dst` may differ in size.
pub fn par_iter_planes<T1, T2, const C: usize>(
    src: &PlanarImage<T1, C>,
    dst: &mut PlanarImage<T2, C>,
    f: impl Fn(usize, &[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let src_plane_len = src.plane_len();
    let dst_plane_len = dst.plane_len();
    src.as_slice()
        .par_chunks_exact(src_plane_len)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(dst_plane_len))
        .enumerate()
        .for_each(|(channel, (src_plane, dst_plane))| f(channel, src_plane, dst_plane));
}

/// Apply a function to each sample in parallel.
pub fn par_iter_values<T1, T2, const C: usize>(
    src: &PlanarImage<T1, C>,
    dst: &mut PlanarImage<T2, C>,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    par_iter_planes(src, dst, |_, src_plane, dst_plane| {
        src_plane
            .iter()
            .zip(dst_plane.iter_mut())
            .for_each(|(src_val, dst_val)| f(src_val, dst_val));
    });
}
