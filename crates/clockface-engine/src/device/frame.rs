/// A single acquired surface frame.
///
/// Short-lived: holding the surface texture prevents acquisition of the next
/// frame, so it is submitted within the same tick.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
