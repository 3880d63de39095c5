//! Material and texture references
//!
//! Textures are loaded elsewhere; objects keep only the source path and the
//! resulting [`TextureHandle`].

pub mod material;

// Re-export main types
pub use material::{Material, MaterialUniform, TextureHandle};
