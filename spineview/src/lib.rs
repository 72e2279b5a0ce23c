//! Host-side glue between the `rusty_spine` runtime and a renderer.
//!
//! This crate owns none of the animation math: skeleton parsing, timeline
//! blending, constraints and world transforms are all delegated to
//! `rusty_spine` (the binding of the official spine-c runtime). What lives
//! here is the plumbing a host application needs around it: locating and
//! loading atlas/skeleton exports, wiring a skeleton instance to an animation
//! state, extracting posed meshes into a renderer-agnostic draw list, and
//! generating debug-overlay geometry.
//!
//! Rendering integrations live in separate crates (e.g. `spineview-wgpu`).

mod actor;
mod assets;
mod camera;
mod debug;
mod error;
mod geometry;
mod mesh;
mod texture;

pub use actor::*;
pub use assets::*;
pub use camera::*;
pub use debug::*;
pub use error::*;
pub use geometry::*;
pub use mesh::*;
pub use texture::*;

#[cfg(test)]
mod assets_tests;

#[cfg(test)]
mod camera_tests;



#[cfg(test)]
mod geometry_tests;

#[cfg(test)]
mod mesh_tests;

#[cfg(test)]
mod texture_tests;
