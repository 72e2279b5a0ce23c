//! wgpu renderer integration for the `spineview` glue layer.
//!
//! `MeshRenderer` draws the skeleton draw list, `LineRenderer` draws the
//! debug overlay, and `TextureStore` turns atlas pages into GPU textures on
//! first use.

mod lines;
mod renderer;
mod textures;

pub use lines::*;
pub use renderer::*;
pub use textures::*;

#[cfg(test)]
mod textures_tests;
