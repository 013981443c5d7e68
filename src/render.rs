//! Frame drawing: cover-fit geometry, drawing surfaces and the frame renderer.

pub mod geometry;
pub mod renderer;
pub mod surface;
