//! Rendering module
//!
//! The scene builder is pure (state in, draw commands out); only the Canvas
//! 2D backend touches the browser.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::build_scene;
pub use shapes::DrawCmd;
