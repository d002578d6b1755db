//! Shared render backend API for the lighting demo.
//! Defines extracted light/view types and the RenderBackend trait so the host can
//! drive any backend with the same code path (prepare + render_frame).

mod extract;
mod backend;

pub use extract::{DirectionalLight, ExtractedLights, ExtractedView, PointLight, SpotLight};
pub use backend::RenderBackend;
