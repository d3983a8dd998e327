pub mod mesh;
pub mod scene;
pub mod scrub;

pub use mesh::*;
pub use scene::*;
pub use scrub::*;

// Shader bundled as a string constant
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
