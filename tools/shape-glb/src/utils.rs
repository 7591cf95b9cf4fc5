//! Alignment and bounds helpers

use glam::Vec3;

/// Number of bytes needed to bring `len` up to a 4-byte boundary
pub fn padding_to_4(len: usize) -> usize {
    (4 - (len % 4)) % 4
}

/// Append `fill` bytes until the buffer length is a multiple of 4
pub fn align_buffer(buffer: &mut Vec<u8>, fill: u8) {
    let padding = padding_to_4(buffer.len());
    buffer.extend(std::iter::repeat_n(fill, padding));
}

/// Componentwise minimum and maximum of a set of positions.
///
/// An empty slice yields `([f32::MAX; 3], [f32::MIN; 3])`.
pub fn compute_bounds(positions: &[[f32; 3]]) -> ([f32; 3], [f32; 3]) {
    let (min, max) = positions.iter().map(|&p| Vec3::from(p)).fold(
        (Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)),
        |(min, max), p| (min.min(p), max.max(p)),
    );
    (min.to_array(), max.to_array())
}
