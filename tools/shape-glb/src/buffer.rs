//! Binary buffer packing with buffer view and accessor bookkeeping

use crate::document::{Accessor, BufferView, consts};
use crate::utils::{align_buffer, compute_bounds};

/// Size of one packed vec3 of f32
const VEC3_F32_SIZE: usize = 12;

/// Index of an accessor in the document's accessor list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessorIndex(pub u32);

/// Builder for the single binary buffer of an asset.
///
/// Each pack call appends a tightly packed block, records a buffer view at
/// the current end of the buffer and an accessor over that view, then
/// re-aligns the buffer to 4 bytes.
#[derive(Debug, Default)]
pub struct BufferBuilder {
    buffer: Vec<u8>,
    views: Vec<BufferView>,
    accessors: Vec<Accessor>,
}

impl BufferBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accessor_count(&self) -> u32 {
        self.accessors.len() as u32
    }

    pub fn data(&self) -> &[u8] {
        &self.buffer
    }

    pub fn views(&self) -> &[BufferView] {
        &self.views
    }

    pub fn accessors(&self) -> &[Accessor] {
        &self.accessors
    }

    /// Consume the builder, yielding buffer bytes, views and accessors
    pub fn finish(self) -> (Vec<u8>, Vec<BufferView>, Vec<Accessor>) {
        (self.buffer, self.views, self.accessors)
    }

    /// Pack Vec3 positions with bounds calculation
    pub fn pack_positions(&mut self, positions: &[[f32; 3]]) -> AccessorIndex {
        let (min, max) = compute_bounds(positions);
        self.pack_vec3_block(positions, Some((min, max)))
    }

    /// Pack Vec3 data without bounds (normals)
    pub fn pack_vec3(&mut self, data: &[[f32; 3]]) -> AccessorIndex {
        self.pack_vec3_block(data, None)
    }

    fn pack_vec3_block(
        &mut self,
        data: &[[f32; 3]],
        bounds: Option<([f32; 3], [f32; 3])>,
    ) -> AccessorIndex {
        let offset = self.buffer.len();
        for item in data {
            for component in item {
                self.buffer.extend_from_slice(&component.to_le_bytes());
            }
        }

        self.views.push(BufferView {
            buffer: 0,
            byte_offset: offset as u64,
            byte_length: (data.len() * VEC3_F32_SIZE) as u64,
            target: Some(consts::TARGET_ARRAY_BUFFER),
        });

        let accessor_idx = self.accessors.len() as u32;
        self.accessors.push(Accessor {
            buffer_view: self.views.len() as u32 - 1,
            component_type: consts::COMPONENT_TYPE_FLOAT,
            count: data.len() as u64,
            type_: consts::TYPE_VEC3.to_string(),
            min: bounds.map(|(min, _)| min),
            max: bounds.map(|(_, max)| max),
        });

        align_buffer(&mut self.buffer, 0);
        AccessorIndex(accessor_idx)
    }
}
