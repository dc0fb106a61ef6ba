use glam::{Mat4, Vec3};

/// Per-frame uniform block data for GPU: camera matrices plus light and camera positions
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FrameUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub light_position: [f32; 4],
    pub light_color: [f32; 4],
    pub camera_position: [f32; 4],
}

impl FrameUniforms {
    pub fn new(
        view: Mat4,
        projection: Mat4,
        light_position: Vec3,
        light_color: Vec3,
        camera_position: Vec3,
    ) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            projection: projection.to_cols_array_2d(),
            light_position: light_position.extend(1.0).to_array(),
            light_color: light_color.extend(1.0).to_array(),
            camera_position: camera_position.extend(1.0).to_array(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
