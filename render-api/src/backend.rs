//! Trait for render backends. The demo host uses this to hand over the packed settings and the frame view.

use crate::ExtractedView;

/// Render backend driven by the host once per frame: `prepare`, then `render_frame`.
pub trait RenderBackend: Send {
    /// Prepare phase: upload the packed settings constant buffer to the GPU.
    fn prepare(&mut self, uniform_bytes: &[u8]);

    /// Render one frame with the view and lights extracted for it.
    fn render_frame(&mut self, view: &ExtractedView) -> Result<(), String>;
}
