//! Trishard animates a source image by shattering it into a triangular
//! texture mesh and reassembling it frame by frame.
//!
//! Each mesh triangle carries a random rotation amount and a random cubic
//! Bezier motion path anchored at its own texture centroid. A global
//! `progress` scalar in [0, 1] drives every triangle simultaneously:
//! progress 0 is the solved image, progress 1 is fully scattered and
//! rotated. Frames are produced by a CPU scanline rasterizer with
//! inverse-affine texture mapping, nearest or bilinear sampling, and
//! optional alpha-weighted blending against the previous canvas contents.
//!
//! # Pipeline overview
//!
//! 1. **Build**: [`Mesh::build`] partitions the source into grid triangles,
//!    two per cell, each wrapped in a [`TriangleModel`] with fresh
//!    randomness from an injected RNG.
//! 2. **Drive**: the caller produces progress values on its own clock;
//!    [`ProgressQueue`] coalesces backlogs so stale frames are skipped.
//! 3. **Render**: [`render`] rasterizes every model into a [`Frame`],
//!    sampling a [`Texture`] and refreshing per-model [`PixelStats`].
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: all randomness flows through caller-owned
//!   `rand` generators; a seeded run reproduces byte-identical frames.
//! - **Single-threaded engine**: a render tick owns the frame exclusively
//!   and performs no internal concurrency.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod driver;
mod foundation;
mod geometry;
mod mesh;
mod render;

pub use animation::curve::{CTRL_MAX, CTRL_MIN, MotionCurve};
pub use animation::model::{PixelStats, TriangleModel};
pub use driver::queue::{DEFAULT_COALESCE_LIMIT, ProgressQueue, progress_from_angle};
pub use foundation::core::{Point, PointI, Rgba8, Vec2, rotate_about};
pub use foundation::error::{TrishardError, TrishardResult};
pub use geometry::triangle::{Triangle, Vertex};
pub use mesh::Mesh;
pub use render::engine::{AlphaMode, SamplingMode, render};
pub use render::frame::Frame;
pub use render::texture::Texture;
